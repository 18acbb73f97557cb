/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use crate::error::Error;
use crate::presigning::PresignedRequest;
use crate::types::{Object, Part};

use super::CompleteMultipartInputBuilder;

/// Fluent builder for completing a multipart upload
#[derive(Debug)]
pub struct CompleteMultipartFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CompleteMultipartInputBuilder,
}

impl CompleteMultipartFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Complete the upload. The returned object is readable.
    #[tracing::instrument(skip_all, level = "debug", name = "complete-multipart")]
    pub async fn send(self) -> Result<Object, Error> {
        let input = self.inner.build()?;
        crate::operation::complete_multipart::CompleteMultipart::orchestrate(self.handle, input)
            .await
    }

    /// Presign the completion. The returned request carries the XML body to send.
    #[tracing::instrument(skip_all, level = "debug", name = "presign-complete-multipart")]
    pub async fn presigned(self, expires_in: Duration) -> Result<PresignedRequest, Error> {
        let input = self.inner.build()?;
        crate::operation::complete_multipart::CompleteMultipart::presign(
            self.handle,
            input,
            expires_in,
        )
        .await
    }

    /// The in-progress upload.
    /// Required.
    pub fn object(mut self, input: Object) -> Self {
        self.inner = self.inner.object(input);
        self
    }

    /// Uploaded parts, sent in the given order.
    /// Required.
    pub fn parts(mut self, input: Vec<Part>) -> Self {
        self.inner = self.inner.parts(input);
        self
    }

    /// Append a single uploaded part
    pub fn part(mut self, input: Part) -> Self {
        self.inner = self.inner.part(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.expected_bucket_owner(input);
        self
    }
}

impl CompleteMultipartInputBuilder {
    /// Complete a multipart upload with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<Object, Error> {
        let mut fluent_builder = client.complete_multipart();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
