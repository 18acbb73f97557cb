/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::types::StorageClass;

use crate::error::Error;
use crate::presigning::PresignedRequest;
use crate::types::{Object, ServerSideEncryptionConfig, SseCustomerKey};

use super::CreateMultipartInputBuilder;

/// Fluent builder for starting a multipart upload
#[derive(Debug)]
pub struct CreateMultipartFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CreateMultipartInputBuilder,
}

impl CreateMultipartFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Start the upload. The returned object carries the upload ID.
    #[tracing::instrument(skip_all, level = "debug", name = "create-multipart", fields(
        path = self.inner.path.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<Object, Error> {
        let input = self.inner.build()?;
        crate::operation::create_multipart::CreateMultipart::orchestrate(self.handle, input).await
    }

    /// Presign the request starting the upload
    #[tracing::instrument(skip_all, level = "debug", name = "presign-create-multipart")]
    pub async fn presigned(self, expires_in: Duration) -> Result<PresignedRequest, Error> {
        let input = self.inner.build()?;
        crate::operation::create_multipart::CreateMultipart::presign(self.handle, input, expires_in)
            .await
    }

    /// Path of the final object, relative to the working directory.
    /// Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.path(input);
        self
    }

    /// Content type of the final object
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content_type(input);
        self
    }

    /// Storage class of the final object
    pub fn storage_class(mut self, input: StorageClass) -> Self {
        self.inner = self.inner.storage_class(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.expected_bucket_owner(input);
        self
    }

    /// Server-side encryption settings
    pub fn server_side_encryption(mut self, input: ServerSideEncryptionConfig) -> Self {
        self.inner = self.inner.server_side_encryption(input);
        self
    }

    /// Customer provided key. Every part must be uploaded with the same key.
    pub fn sse_customer_key(mut self, input: SseCustomerKey) -> Self {
        self.inner = self.inner.sse_customer_key(input);
        self
    }
}

impl CreateMultipartInputBuilder {
    /// Start a multipart upload with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<Object, Error> {
        let mut fluent_builder = client.create_multipart();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
