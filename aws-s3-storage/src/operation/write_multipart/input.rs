/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::byte_stream::ByteStream;
use aws_smithy_types::error::operation::BuildError;

use crate::types::{Object, SseCustomerKey};

/// Input type for uploading one part of a multipart upload
#[non_exhaustive]
#[derive(Debug)]
pub struct WriteMultipartInput {
    /// The in-progress upload, as returned by `create_multipart`
    pub object: Object,

    /// Zero-based part index in `[0, 10000)`
    pub index: u32,

    /// Exact number of bytes in `body`
    pub size: u64,

    /// Part content. May be omitted when `size` is zero.
    pub body: Option<ByteStream>,

    /// Base64 encoded MD5 digest of the body, computed by the caller
    pub content_md5: Option<String>,

    /// The account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,

    /// Customer provided key the upload was started with
    pub sse_customer_key: Option<SseCustomerKey>,
}

impl WriteMultipartInput {
    /// Create a new builder for `WriteMultipartInput`
    pub fn builder() -> WriteMultipartInputBuilder {
        WriteMultipartInputBuilder::default()
    }
}

/// A builder for [`WriteMultipartInput`]
#[non_exhaustive]
#[derive(Default, Debug)]
pub struct WriteMultipartInputBuilder {
    pub(crate) object: Option<Object>,
    pub(crate) index: Option<u32>,
    pub(crate) size: Option<u64>,
    pub(crate) body: Option<ByteStream>,
    pub(crate) content_md5: Option<String>,
    pub(crate) expected_bucket_owner: Option<String>,
    pub(crate) sse_customer_key: Option<SseCustomerKey>,
}

impl WriteMultipartInputBuilder {
    /// The in-progress upload. Required.
    pub fn object(mut self, input: Object) -> Self {
        self.object = Some(input);
        self
    }

    /// Zero-based part index. Required.
    pub fn index(mut self, input: u32) -> Self {
        self.index = Some(input);
        self
    }

    /// Exact number of bytes in the body. Required.
    pub fn size(mut self, input: u64) -> Self {
        self.size = Some(input);
        self
    }

    /// Part content
    pub fn body(mut self, input: ByteStream) -> Self {
        self.body = Some(input);
        self
    }

    /// Part content
    pub fn set_body(mut self, input: Option<ByteStream>) -> Self {
        self.body = input;
        self
    }

    /// Base64 encoded MD5 digest of the body
    pub fn content_md5(mut self, input: impl Into<String>) -> Self {
        self.content_md5 = Some(input.into());
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(input.into());
        self
    }

    /// Customer provided key the upload was started with
    pub fn sse_customer_key(mut self, input: SseCustomerKey) -> Self {
        self.sse_customer_key = Some(input);
        self
    }

    /// Consumes the builder and constructs a [`WriteMultipartInput`]
    pub fn build(self) -> Result<WriteMultipartInput, BuildError> {
        let object = self
            .object
            .ok_or_else(|| BuildError::missing_field("object", "the upload object is required"))?;
        let index = self
            .index
            .ok_or_else(|| BuildError::missing_field("index", "the part index is required"))?;
        let size = self
            .size
            .ok_or_else(|| BuildError::missing_field("size", "the part size is required"))?;
        Ok(WriteMultipartInput {
            object,
            index,
            size,
            body: self.body,
            content_md5: self.content_md5,
            expected_bucket_owner: self.expected_bucket_owner,
            sse_customer_key: self.sse_customer_key,
        })
    }
}
