/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use aws_smithy_types::byte_stream::ByteStream;

use crate::error::Error;
use crate::presigning::PresignedRequest;
use crate::types::{Object, SseCustomerKey};

use super::{WriteMultipartInputBuilder, WriteMultipartOutput};

/// Fluent builder for uploading one part of a multipart upload
#[derive(Debug)]
pub struct WriteMultipartFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: WriteMultipartInputBuilder,
}

impl WriteMultipartFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Upload the part
    #[tracing::instrument(skip_all, level = "debug", name = "write-multipart", fields(
        index = ?self.inner.index,
    ))]
    pub async fn send(self) -> Result<WriteMultipartOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::write_multipart::WriteMultipart::orchestrate(self.handle, input).await
    }

    /// Presign the part upload. The body is not part of the signed request.
    #[tracing::instrument(skip_all, level = "debug", name = "presign-write-multipart")]
    pub async fn presigned(self, expires_in: Duration) -> Result<PresignedRequest, Error> {
        let input = self.inner.build()?;
        crate::operation::write_multipart::WriteMultipart::presign(self.handle, input, expires_in)
            .await
    }

    /// The in-progress upload, as returned by `create_multipart`.
    /// Required.
    pub fn object(mut self, input: Object) -> Self {
        self.inner = self.inner.object(input);
        self
    }

    /// Zero-based part index in `[0, 10000)`.
    /// Required.
    pub fn index(mut self, input: u32) -> Self {
        self.inner = self.inner.index(input);
        self
    }

    /// Exact number of bytes in the body, at most 5 GiB.
    /// Required.
    pub fn size(mut self, input: u64) -> Self {
        self.inner = self.inner.size(input);
        self
    }

    /// Part content
    pub fn body(mut self, input: ByteStream) -> Self {
        self.inner = self.inner.body(input);
        self
    }

    /// Part content
    pub fn set_body(mut self, input: Option<ByteStream>) -> Self {
        self.inner = self.inner.set_body(input);
        self
    }

    /// Base64 encoded MD5 digest of the body, computed by the caller
    pub fn content_md5(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.content_md5(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.expected_bucket_owner(input);
        self
    }

    /// Customer provided key the upload was started with
    pub fn sse_customer_key(mut self, input: SseCustomerKey) -> Self {
        self.inner = self.inner.sse_customer_key(input);
        self
    }
}

impl WriteMultipartInputBuilder {
    /// Upload a part with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<WriteMultipartOutput, Error> {
        let mut fluent_builder = client.write_multipart();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
