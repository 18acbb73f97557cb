/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::ListMode;

/// Input type for listing objects
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ListInput {
    /// Path prefix to list, relative to the working directory. Empty lists the whole working
    /// directory.
    pub path: String,

    /// How the path is interpreted
    pub list_mode: ListMode,

    /// The account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,
}

impl ListInput {
    /// Create a new builder for `ListInput`
    pub fn builder() -> ListInputBuilder {
        ListInputBuilder::default()
    }
}

/// A builder for [`ListInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct ListInputBuilder {
    pub(crate) path: Option<String>,
    pub(crate) list_mode: Option<ListMode>,
    pub(crate) expected_bucket_owner: Option<String>,
}

impl ListInputBuilder {
    /// Path prefix to list, relative to the working directory
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.path = Some(input.into());
        self
    }

    /// How the path is interpreted, defaults to [`ListMode::Prefix`]
    pub fn list_mode(mut self, input: ListMode) -> Self {
        self.list_mode = Some(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(input.into());
        self
    }

    /// Consumes the builder and constructs a [`ListInput`]
    pub fn build(self) -> Result<ListInput, BuildError> {
        Ok(ListInput {
            path: self.path.unwrap_or_default(),
            list_mode: self.list_mode.unwrap_or_default(),
            expected_bucket_owner: self.expected_bucket_owner,
        })
    }
}
