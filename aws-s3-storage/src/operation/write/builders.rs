/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::types::StorageClass;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::Error;
use crate::presigning::PresignedRequest;
use crate::types::{ServerSideEncryptionConfig, SseCustomerKey};

use super::{WriteInputBuilder, WriteOutput};

/// Fluent builder for constructing a single request object write
#[derive(Debug)]
pub struct WriteFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: WriteInputBuilder,
}

impl WriteFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Write the object
    #[tracing::instrument(skip_all, level = "debug", name = "write", fields(
        path = self.inner.path.as_deref().unwrap_or_default(),
        size = self.inner.size,
    ))]
    pub async fn send(self) -> Result<WriteOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::write::Write::orchestrate(self.handle, input).await
    }

    /// Presign the write. The body is ignored, `size` becomes the expected content length.
    #[tracing::instrument(skip_all, level = "debug", name = "presign-write")]
    pub async fn presigned(self, expires_in: Duration) -> Result<PresignedRequest, Error> {
        let input = self.inner.build()?;
        crate::operation::write::Write::presign(self.handle, input, expires_in).await
    }

    /// Path of the object, relative to the working directory.
    /// Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.path(input);
        self
    }

    /// Path of the object, relative to the working directory.
    pub fn get_path(&self) -> &Option<String> {
        self.inner.get_path()
    }

    /// Exact number of bytes in the body, at most 5 GiB.
    /// Required.
    pub fn size(mut self, input: u64) -> Self {
        self.inner = self.inner.size(input);
        self
    }

    /// Object content. May be omitted when `size` is zero.
    pub fn body(mut self, input: ByteStream) -> Self {
        self.inner = self.inner.body(input);
        self
    }

    /// Object content. May be omitted when `size` is zero.
    pub fn set_body(mut self, input: Option<ByteStream>) -> Self {
        self.inner = self.inner.set_body(input);
        self
    }

    /// Base64 encoded MD5 digest of the body, computed by the caller
    pub fn content_md5(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content_md5(input);
        self
    }

    /// Content type of the object
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content_type(input);
        self
    }

    /// Storage class of the object
    pub fn storage_class(mut self, input: StorageClass) -> Self {
        self.inner = self.inner.storage_class(input);
        self
    }

    /// Storage class of the object
    pub fn set_storage_class(mut self, input: Option<StorageClass>) -> Self {
        self.inner = self.inner.set_storage_class(input);
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

    /// Customer provided key to encrypt the object with
    pub fn sse_customer_key(mut self, input: SseCustomerKey) -> Self {
        self.inner = self.inner.sse_customer_key(input);
        self
    }
}

impl WriteInputBuilder {
    /// Write an object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<WriteOutput, Error> {
        let mut fluent_builder = client.write();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
