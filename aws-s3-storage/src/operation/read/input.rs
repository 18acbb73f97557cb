/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::SseCustomerKey;

/// Input type for reading an object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct ReadInput {
    /// Path of the object, relative to the working directory
    pub path: String,

    /// Offset of the first byte to read
    pub offset: Option<u64>,

    /// Number of bytes to read
    pub size: Option<u64>,

    /// The account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,

    /// Customer provided key the object was encrypted with
    pub sse_customer_key: Option<SseCustomerKey>,
}

impl ReadInput {
    /// Create a new builder for `ReadInput`
    pub fn builder() -> ReadInputBuilder {
        ReadInputBuilder::default()
    }

    /// Path of the object, relative to the working directory
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Offset of the first byte to read
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Number of bytes to read
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(&self) -> Option<&str> {
        self.expected_bucket_owner.as_deref()
    }
}

/// A builder for [`ReadInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct ReadInputBuilder {
    pub(crate) path: Option<String>,
    pub(crate) offset: Option<u64>,
    pub(crate) size: Option<u64>,
    pub(crate) expected_bucket_owner: Option<String>,
    pub(crate) sse_customer_key: Option<SseCustomerKey>,
}

impl ReadInputBuilder {
    /// Path of the object, relative to the working directory.
    /// Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.path = Some(input.into());
        self
    }

    /// Path of the object, relative to the working directory.
    pub fn set_path(mut self, input: Option<String>) -> Self {
        self.path = input;
        self
    }

    /// Path of the object, relative to the working directory.
    pub fn get_path(&self) -> &Option<String> {
        &self.path
    }

    /// Offset of the first byte to read
    pub fn offset(mut self, input: u64) -> Self {
        self.offset = Some(input);
        self
    }

    /// Offset of the first byte to read
    pub fn set_offset(mut self, input: Option<u64>) -> Self {
        self.offset = input;
        self
    }

    /// Number of bytes to read, must be greater than zero
    pub fn size(mut self, input: u64) -> Self {
        self.size = Some(input);
        self
    }

    /// Number of bytes to read, must be greater than zero
    pub fn set_size(mut self, input: Option<u64>) -> Self {
        self.size = input;
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(input.into());
        self
    }

    /// The account ID of the expected bucket owner
    pub fn set_expected_bucket_owner(mut self, input: Option<String>) -> Self {
        self.expected_bucket_owner = input;
        self
    }

    /// Customer provided key the object was encrypted with
    pub fn sse_customer_key(mut self, input: SseCustomerKey) -> Self {
        self.sse_customer_key = Some(input);
        self
    }

    /// Customer provided key the object was encrypted with
    pub fn set_sse_customer_key(mut self, input: Option<SseCustomerKey>) -> Self {
        self.sse_customer_key = input;
        self
    }

    /// Consumes the builder and constructs a [`ReadInput`]
    pub fn build(self) -> Result<ReadInput, BuildError> {
        let path = self
            .path
            .ok_or_else(|| BuildError::missing_field("path", "a path is required"))?;
        Ok(ReadInput {
            path,
            offset: self.offset,
            size: self.size,
            expected_bucket_owner: self.expected_bucket_owner,
            sse_customer_key: self.sse_customer_key,
        })
    }
}
