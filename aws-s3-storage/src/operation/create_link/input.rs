/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for creating a virtual link
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct CreateLinkInput {
    /// Path of the link, relative to the working directory
    pub path: String,

    /// Path the link points at, relative to the working directory
    pub target: String,

    /// The account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,
}

impl CreateLinkInput {
    /// Create a new builder for `CreateLinkInput`
    pub fn builder() -> CreateLinkInputBuilder {
        CreateLinkInputBuilder::default()
    }
}

/// A builder for [`CreateLinkInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct CreateLinkInputBuilder {
    pub(crate) path: Option<String>,
    pub(crate) target: Option<String>,
    pub(crate) expected_bucket_owner: Option<String>,
}

impl CreateLinkInputBuilder {
    /// Path of the link. Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.path = Some(input.into());
        self
    }

    /// Path the link points at. Required.
    pub fn target(mut self, input: impl Into<String>) -> Self {
        self.target = Some(input.into());
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(input.into());
        self
    }

    /// Consumes the builder and constructs a [`CreateLinkInput`]
    pub fn build(self) -> Result<CreateLinkInput, BuildError> {
        let path = self
            .path
            .ok_or_else(|| BuildError::missing_field("path", "a path is required"))?;
        let target = self
            .target
            .ok_or_else(|| BuildError::missing_field("target", "a link target is required"))?;
        Ok(CreateLinkInput {
            path,
            target,
            expected_bucket_owner: self.expected_bucket_owner,
        })
    }
}
