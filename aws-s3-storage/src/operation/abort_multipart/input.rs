/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::Object;

/// Input type for aborting a multipart upload
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct AbortMultipartInput {
    /// The in-progress upload
    pub object: Object,

    /// The account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,
}

impl AbortMultipartInput {
    /// Create a new builder for `AbortMultipartInput`
    pub fn builder() -> AbortMultipartInputBuilder {
        AbortMultipartInputBuilder::default()
    }
}

/// A builder for [`AbortMultipartInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct AbortMultipartInputBuilder {
    pub(crate) object: Option<Object>,
    pub(crate) expected_bucket_owner: Option<String>,
}

impl AbortMultipartInputBuilder {
    /// The in-progress upload. Required.
    pub fn object(mut self, input: Object) -> Self {
        self.object = Some(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(input.into());
        self
    }

    /// Consumes the builder and constructs an [`AbortMultipartInput`]
    pub fn build(self) -> Result<AbortMultipartInput, BuildError> {
        let object = self
            .object
            .ok_or_else(|| BuildError::missing_field("object", "the upload object is required"))?;
        Ok(AbortMultipartInput {
            object,
            expected_bucket_owner: self.expected_bucket_owner,
        })
    }
}
