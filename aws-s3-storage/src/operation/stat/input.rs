/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::{ObjectMode, SseCustomerKey};

/// Input type for fetching object metadata
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct StatInput {
    /// Path of the object, relative to the working directory
    pub path: String,

    /// Mode of the object. A directory mode stats the directory marker.
    pub object_mode: Option<ObjectMode>,

    /// Stat this multipart upload of `path` instead of an object
    pub multipart_id: Option<String>,

    /// The account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,

    /// Customer provided key the object was encrypted with
    pub sse_customer_key: Option<SseCustomerKey>,
}

impl StatInput {
    /// Create a new builder for `StatInput`
    pub fn builder() -> StatInputBuilder {
        StatInputBuilder::default()
    }

    /// Path of the object, relative to the working directory
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A builder for [`StatInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct StatInputBuilder {
    pub(crate) path: Option<String>,
    pub(crate) object_mode: Option<ObjectMode>,
    pub(crate) multipart_id: Option<String>,
    pub(crate) expected_bucket_owner: Option<String>,
    pub(crate) sse_customer_key: Option<SseCustomerKey>,
}

impl StatInputBuilder {
    /// Path of the object, relative to the working directory.
    /// Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.path = Some(input.into());
        self
    }

    /// Mode of the object
    pub fn object_mode(mut self, input: ObjectMode) -> Self {
        self.object_mode = Some(input);
        self
    }

    /// Multipart upload to stat
    pub fn multipart_id(mut self, input: impl Into<String>) -> Self {
        self.multipart_id = Some(input.into());
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(input.into());
        self
    }

    /// Customer provided key the object was encrypted with
    pub fn sse_customer_key(mut self, input: SseCustomerKey) -> Self {
        self.sse_customer_key = Some(input);
        self
    }

    /// Consumes the builder and constructs a [`StatInput`]
    pub fn build(self) -> Result<StatInput, BuildError> {
        let path = self
            .path
            .ok_or_else(|| BuildError::missing_field("path", "a path is required"))?;
        Ok(StatInput {
            path,
            object_mode: self.object_mode,
            multipart_id: self.multipart_id,
            expected_bucket_owner: self.expected_bucket_owner,
            sse_customer_key: self.sse_customer_key,
        })
    }
}
