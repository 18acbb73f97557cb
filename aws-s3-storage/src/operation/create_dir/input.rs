/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::StorageClass;
use aws_smithy_types::error::operation::BuildError;

/// Input type for creating a directory marker
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct CreateDirInput {
    /// Path of the directory, relative to the working directory, without the trailing `/`
    pub path: String,

    /// Storage class of the marker object
    pub storage_class: Option<StorageClass>,

    /// The account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,
}

impl CreateDirInput {
    /// Create a new builder for `CreateDirInput`
    pub fn builder() -> CreateDirInputBuilder {
        CreateDirInputBuilder::default()
    }
}

/// A builder for [`CreateDirInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct CreateDirInputBuilder {
    pub(crate) path: Option<String>,
    pub(crate) storage_class: Option<StorageClass>,
    pub(crate) expected_bucket_owner: Option<String>,
}

impl CreateDirInputBuilder {
    /// Path of the directory. Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.path = Some(input.into());
        self
    }

    /// Storage class of the marker object
    pub fn storage_class(mut self, input: StorageClass) -> Self {
        self.storage_class = Some(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(input.into());
        self
    }

    /// Consumes the builder and constructs a [`CreateDirInput`]
    pub fn build(self) -> Result<CreateDirInput, BuildError> {
        let path = self
            .path
            .ok_or_else(|| BuildError::missing_field("path", "a path is required"))?;
        Ok(CreateDirInput {
            path,
            storage_class: self.storage_class,
            expected_bucket_owner: self.expected_bucket_owner,
        })
    }
}
