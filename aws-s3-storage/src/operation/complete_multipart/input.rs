/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::types::{Object, Part};

/// Input type for completing a multipart upload
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct CompleteMultipartInput {
    /// The in-progress upload
    pub object: Object,

    /// Uploaded parts, sent in this order
    pub parts: Vec<Part>,

    /// The account ID of the expected bucket owner
    pub expected_bucket_owner: Option<String>,
}

impl CompleteMultipartInput {
    /// Create a new builder for `CompleteMultipartInput`
    pub fn builder() -> CompleteMultipartInputBuilder {
        CompleteMultipartInputBuilder::default()
    }
}

/// A builder for [`CompleteMultipartInput`]
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct CompleteMultipartInputBuilder {
    pub(crate) object: Option<Object>,
    pub(crate) parts: Option<Vec<Part>>,
    pub(crate) expected_bucket_owner: Option<String>,
}

impl CompleteMultipartInputBuilder {
    /// The in-progress upload. Required.
    pub fn object(mut self, input: Object) -> Self {
        self.object = Some(input);
        self
    }

    /// Uploaded parts. Required.
    pub fn parts(mut self, input: Vec<Part>) -> Self {
        self.parts = Some(input);
        self
    }

    /// Append a single uploaded part
    pub fn part(mut self, input: Part) -> Self {
        self.parts.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.expected_bucket_owner = Some(input.into());
        self
    }

    /// Consumes the builder and constructs a [`CompleteMultipartInput`]
    pub fn build(self) -> Result<CompleteMultipartInput, BuildError> {
        let object = self
            .object
            .ok_or_else(|| BuildError::missing_field("object", "the upload object is required"))?;
        let parts = self
            .parts
            .ok_or_else(|| BuildError::missing_field("parts", "the uploaded parts are required"))?;
        Ok(CompleteMultipartInput {
            object,
            parts,
            expected_bucket_owner: self.expected_bucket_owner,
        })
    }
}
