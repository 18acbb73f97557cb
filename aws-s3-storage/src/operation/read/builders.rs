/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use crate::error::Error;
use crate::presigning::PresignedRequest;
use crate::types::SseCustomerKey;

use super::{ReadInputBuilder, ReadOutput};

/// Fluent builder for constructing a read of a single object
#[derive(Debug)]
pub struct ReadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ReadInputBuilder,
}

impl ReadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Read the object
    #[tracing::instrument(skip_all, level = "debug", name = "read", fields(
        path = self.inner.path.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<ReadOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::read::Read::orchestrate(self.handle, input).await
    }

    /// Presign the read, the request stays valid for `expires_in`
    #[tracing::instrument(skip_all, level = "debug", name = "presign-read")]
    pub async fn presigned(self, expires_in: Duration) -> Result<PresignedRequest, Error> {
        let input = self.inner.build()?;
        crate::operation::read::Read::presign(self.handle, input, expires_in).await
    }

    /// Path of the object, relative to the working directory.
    /// Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.path(input);
        self
    }

    /// Path of the object, relative to the working directory.
    pub fn set_path(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_path(input);
        self
    }

    /// Path of the object, relative to the working directory.
    pub fn get_path(&self) -> &Option<String> {
        self.inner.get_path()
    }

    /// Offset of the first byte to read
    pub fn offset(mut self, input: u64) -> Self {
        self.inner = self.inner.offset(input);
        self
    }

    /// Offset of the first byte to read
    pub fn set_offset(mut self, input: Option<u64>) -> Self {
        self.inner = self.inner.set_offset(input);
        self
    }

    /// Number of bytes to read, must be greater than zero
    pub fn size(mut self, input: u64) -> Self {
        self.inner = self.inner.size(input);
        self
    }

    /// Number of bytes to read, must be greater than zero
    pub fn set_size(mut self, input: Option<u64>) -> Self {
        self.inner = self.inner.set_size(input);
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

impl crate::operation::read::input::ReadInputBuilder {
    /// Read an object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<ReadOutput, Error> {
        let mut fluent_builder = client.read();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
