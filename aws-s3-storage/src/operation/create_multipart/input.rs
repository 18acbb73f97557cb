/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::StorageClass;
use aws_smithy_types::error::operation::BuildError;

use crate::types::{ServerSideEncryptionConfig, SseCustomerKey};

/// Input type for starting a multipart upload
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct CreateMultipartInput {
    /// Path of the final object, relative to the working directory
    pub path: String,

    /// Content type of the final object
    pub content_type: Option<String>,

    /// Storage class of the final object
    pub storage_class: Option<StorageClass>,

    /// The account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,

    /// Server-side encryption settings
    pub server_side_encryption: Option<ServerSideEncryptionConfig>,

    /// Customer provided key. Every part must be uploaded with the same key.
    pub sse_customer_key: Option<SseCustomerKey>,
}

impl CreateMultipartInput {
    /// Create a new builder for `CreateMultipartInput`
    pub fn builder() -> CreateMultipartInputBuilder {
        CreateMultipartInputBuilder::default()
    }
}

/// A builder for [`CreateMultipartInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct CreateMultipartInputBuilder {
    pub(crate) path: Option<String>,
    pub(crate) content_type: Option<String>,
    pub(crate) storage_class: Option<StorageClass>,
    pub(crate) expected_bucket_owner: Option<String>,
    pub(crate) server_side_encryption: Option<ServerSideEncryptionConfig>,
    pub(crate) sse_customer_key: Option<SseCustomerKey>,
}

impl CreateMultipartInputBuilder {
    /// Path of the final object. Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.path = Some(input.into());
        self
    }

    /// Content type of the final object
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.content_type = Some(input.into());
        self
    }

    /// Storage class of the final object
    pub fn storage_class(mut self, input: StorageClass) -> Self {
        self.storage_class = Some(input);
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

    /// Customer provided key
    pub fn sse_customer_key(mut self, input: SseCustomerKey) -> Self {
        self.sse_customer_key = Some(input);
        self
    }

    /// Consumes the builder and constructs a [`CreateMultipartInput`]
    pub fn build(self) -> Result<CreateMultipartInput, BuildError> {
        let path = self
            .path
            .ok_or_else(|| BuildError::missing_field("path", "a path is required"))?;
        Ok(CreateMultipartInput {
            path,
            content_type: self.content_type,
            storage_class: self.storage_class,
            expected_bucket_owner: self.expected_bucket_owner,
            server_side_encryption: self.server_side_encryption,
            sse_customer_key: self.sse_customer_key,
        })
    }
}
