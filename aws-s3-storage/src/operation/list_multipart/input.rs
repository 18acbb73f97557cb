/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::Object;

/// Input type for listing the parts of a multipart upload
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct ListMultipartInput {
    /// The in-progress upload
    pub object: Object,

    /// The account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,
}

impl ListMultipartInput {
    /// Create a new builder for `ListMultipartInput`
    pub fn builder() -> ListMultipartInputBuilder {
        ListMultipartInputBuilder::default()
    }
}

/// A builder for [`ListMultipartInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct ListMultipartInputBuilder {
    pub(crate) object: Option<Object>,
    pub(crate) expected_bucket_owner: Option<String>,
}

impl ListMultipartInputBuilder {
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

    /// Consumes the builder and constructs a [`ListMultipartInput`]
    pub fn build(self) -> Result<ListMultipartInput, BuildError> {
        let object = self
            .object
            .ok_or_else(|| BuildError::missing_field("object", "the upload object is required"))?;
        Ok(ListMultipartInput {
            object,
            expected_bucket_owner: self.expected_bucket_owner,
        })
    }
}
