/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use crate::error::Error;
use crate::presigning::PresignedRequest;
use crate::types::Object;

use super::AbortMultipartInputBuilder;

/// Fluent builder for aborting a multipart upload
#[derive(Debug)]
pub struct AbortMultipartFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: AbortMultipartInputBuilder,
}

impl AbortMultipartFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Abort the upload
    #[tracing::instrument(skip_all, level = "debug", name = "abort-multipart")]
    pub async fn send(self) -> Result<(), Error> {
        let input = self.inner.build()?;
        crate::operation::abort_multipart::AbortMultipart::orchestrate(self.handle, input).await
    }

    /// Presign the abort
    #[tracing::instrument(skip_all, level = "debug", name = "presign-abort-multipart")]
    pub async fn presigned(self, expires_in: Duration) -> Result<PresignedRequest, Error> {
        let input = self.inner.build()?;
        crate::operation::abort_multipart::AbortMultipart::presign(self.handle, input, expires_in)
            .await
    }

    /// The in-progress upload.
    /// Required.
    pub fn object(mut self, input: Object) -> Self {
        self.inner = self.inner.object(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.expected_bucket_owner(input);
        self
    }
}

impl AbortMultipartInputBuilder {
    /// Abort a multipart upload with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<(), Error> {
        let mut fluent_builder = client.abort_multipart();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
