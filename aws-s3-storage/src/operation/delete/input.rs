/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::ObjectMode;

/// Input type for deleting an object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DeleteInput {
    /// Path of the object, relative to the working directory
    pub path: String,

    /// Mode of the object. A directory mode deletes the directory marker.
    pub object_mode: Option<ObjectMode>,

    /// Abort this multipart upload of `path` instead of deleting an object
    pub multipart_id: Option<String>,

    /// The account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,
}

impl DeleteInput {
    /// Create a new builder for `DeleteInput`
    pub fn builder() -> DeleteInputBuilder {
        DeleteInputBuilder::default()
    }

    /// Path of the object, relative to the working directory
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Multipart upload to abort
    pub fn multipart_id(&self) -> Option<&str> {
        self.multipart_id.as_deref()
    }
}

/// A builder for [`DeleteInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct DeleteInputBuilder {
    pub(crate) path: Option<String>,
    pub(crate) object_mode: Option<ObjectMode>,
    pub(crate) multipart_id: Option<String>,
    pub(crate) expected_bucket_owner: Option<String>,
}

impl DeleteInputBuilder {
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

    /// Multipart upload to abort
    pub fn multipart_id(mut self, input: impl Into<String>) -> Self {
        self.multipart_id = Some(input.into());
        self
    }

    /// Multipart upload to abort
    pub fn set_multipart_id(mut self, input: Option<String>) -> Self {
        self.multipart_id = input;
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(input.into());
        self
    }

    /// Consumes the builder and constructs a [`DeleteInput`]
    pub fn build(self) -> Result<DeleteInput, BuildError> {
        let path = self
            .path
            .ok_or_else(|| BuildError::missing_field("path", "a path is required"))?;
        Ok(DeleteInput {
            path,
            object_mode: self.object_mode,
            multipart_id: self.multipart_id,
            expected_bucket_owner: self.expected_bucket_owner,
        })
    }
}
