/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::types::{Object, ObjectMode, SseCustomerKey};

use super::StatInputBuilder;

/// Fluent builder for fetching the metadata of an object
#[derive(Debug)]
pub struct StatFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: StatInputBuilder,
}

impl StatFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Fetch the object metadata
    #[tracing::instrument(skip_all, level = "debug", name = "stat", fields(
        path = self.inner.path.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<Object, Error> {
        let input = self.inner.build()?;
        crate::operation::stat::Stat::orchestrate(self.handle, input).await
    }

    /// Path of the object, relative to the working directory.
    /// Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.path(input);
        self
    }

    /// Mode of the object. [`ObjectMode::DIR`] stats the directory marker and requires
    /// virtual directories.
    pub fn object_mode(mut self, input: ObjectMode) -> Self {
        self.inner = self.inner.object_mode(input);
        self
    }

    /// Stat this multipart upload of the path instead of an object
    pub fn multipart_id(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.multipart_id(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.expected_bucket_owner(input);
        self
    }

    /// Customer provided key the object was encrypted with
    pub fn sse_customer_key(mut self, input: SseCustomerKey) -> Self {
        self.inner = self.inner.sse_customer_key(input);
        self
    }
}

impl StatInputBuilder {
    /// Stat an object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<Object, Error> {
        let mut fluent_builder = client.stat();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
