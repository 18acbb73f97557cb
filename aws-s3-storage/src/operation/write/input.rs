/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::StorageClass;
use aws_smithy_types::byte_stream::ByteStream;
use aws_smithy_types::error::operation::BuildError;

use crate::types::{ServerSideEncryptionConfig, SseCustomerKey};

/// Input type for writing an object with a single request
#[non_exhaustive]
#[derive(Debug)]
pub struct WriteInput {
    /// Path of the object, relative to the working directory
    pub path: String,

    /// Exact number of bytes in `body`
    pub size: u64,

    /// Object content. May be omitted when `size` is zero.
    pub body: Option<ByteStream>,

    /// Base64 encoded MD5 digest of the body, computed by the caller
    pub content_md5: Option<String>,

    /// Content type of the object
    pub content_type: Option<String>,

    /// Storage class of the object
    pub storage_class: Option<StorageClass>,

    /// The account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,

    /// Server-side encryption settings
    pub server_side_encryption: Option<ServerSideEncryptionConfig>,

    /// Customer provided key to encrypt the object with
    pub sse_customer_key: Option<SseCustomerKey>,
}

impl WriteInput {
    /// Create a new builder for `WriteInput`
    pub fn builder() -> WriteInputBuilder {
        WriteInputBuilder::default()
    }

    /// Path of the object, relative to the working directory
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Exact number of bytes in the body
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Storage class of the object
    pub fn storage_class(&self) -> Option<&StorageClass> {
        self.storage_class.as_ref()
    }
}

/// A builder for [`WriteInput`]
#[non_exhaustive]
#[derive(Default, Debug)]
pub struct WriteInputBuilder {
    pub(crate) path: Option<String>,
    pub(crate) size: Option<u64>,
    pub(crate) body: Option<ByteStream>,
    pub(crate) content_md5: Option<String>,
    pub(crate) content_type: Option<String>,
    pub(crate) storage_class: Option<StorageClass>,
    pub(crate) expected_bucket_owner: Option<String>,
    pub(crate) server_side_encryption: Option<ServerSideEncryptionConfig>,
    pub(crate) sse_customer_key: Option<SseCustomerKey>,
}

impl WriteInputBuilder {
    /// Path of the object, relative to the working directory.
    /// Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.path = Some(input.into());
        self
    }

    /// Path of the object, relative to the working directory.
    pub fn get_path(&self) -> &Option<String> {
        &self.path
    }

    /// Exact number of bytes in the body.
    /// Required.
    pub fn size(mut self, input: u64) -> Self {
        self.size = Some(input);
        self
    }

    /// Object content. The body is streamed once and never rewound.
    pub fn body(mut self, input: ByteStream) -> Self {
        self.body = Some(input);
        self
    }

    /// Object content.
    pub fn set_body(mut self, input: Option<ByteStream>) -> Self {
        self.body = input;
        self
    }

    /// Base64 encoded MD5 digest of the body
    pub fn content_md5(mut self, input: impl Into<String>) -> Self {
        self.content_md5 = Some(input.into());
        self
    }

    /// Content type of the object
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.content_type = Some(input.into());
        self
    }

    /// Storage class of the object
    pub fn storage_class(mut self, input: StorageClass) -> Self {
        self.storage_class = Some(input);
        self
    }

    /// Storage class of the object
    pub fn set_storage_class(mut self, input: Option<StorageClass>) -> Self {
        self.storage_class = input;
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(input.into());
        self
    }

    /// Server-side encryption settings
    pub fn server_side_encryption(mut self, input: ServerSideEncryptionConfig) -> Self {
        self.server_side_encryption = Some(input);
        self
    }

    /// Customer provided key to encrypt the object with
    pub fn sse_customer_key(mut self, input: SseCustomerKey) -> Self {
        self.sse_customer_key = Some(input);
        self
    }

    /// Consumes the builder and constructs a [`WriteInput`]
    pub fn build(self) -> Result<WriteInput, BuildError> {
        let path = self
            .path
            .ok_or_else(|| BuildError::missing_field("path", "a path is required"))?;
        let size = self
            .size
            .ok_or_else(|| BuildError::missing_field("size", "the body size is required"))?;
        Ok(WriteInput {
            path,
            size,
            body: self.body,
            content_md5: self.content_md5,
            content_type: self.content_type,
            storage_class: self.storage_class,
            expected_bucket_owner: self.expected_bucket_owner,
            server_side_encryption: self.server_side_encryption,
            sse_customer_key: self.sse_customer_key,
        })
    }
}
