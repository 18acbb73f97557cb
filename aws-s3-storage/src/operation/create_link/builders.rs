/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::types::Object;

use super::CreateLinkInputBuilder;

/// Fluent builder for creating a virtual link
#[derive(Debug)]
pub struct CreateLinkFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CreateLinkInputBuilder,
}

impl CreateLinkFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Create the link
    #[tracing::instrument(skip_all, level = "debug", name = "create-link", fields(
        path = self.inner.path.as_deref().unwrap_or_default(),
        target = self.inner.target.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<Object, Error> {
        let input = self.inner.build()?;
        crate::operation::create_link::CreateLink::orchestrate(self.handle, input).await
    }

    /// Path of the link, relative to the working directory.
    /// Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.path(input);
        self
    }

    /// Path the link points at, relative to the working directory.
    /// Required.
    pub fn target(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.target(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.expected_bucket_owner(input);
        self
    }
}
