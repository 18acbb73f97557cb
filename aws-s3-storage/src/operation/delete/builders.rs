/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use crate::error::Error;
use crate::presigning::PresignedRequest;
use crate::types::ObjectMode;

use super::DeleteInputBuilder;

/// Fluent builder for constructing an object delete
#[derive(Debug)]
pub struct DeleteFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DeleteInputBuilder,
}

impl DeleteFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Delete the object
    #[tracing::instrument(skip_all, level = "debug", name = "delete", fields(
        path = self.inner.path.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<(), Error> {
        let input = self.inner.build()?;
        crate::operation::delete::Delete::orchestrate(self.handle, input).await
    }

    /// Presign the delete
    #[tracing::instrument(skip_all, level = "debug", name = "presign-delete")]
    pub async fn presigned(self, expires_in: Duration) -> Result<PresignedRequest, Error> {
        let input = self.inner.build()?;
        crate::operation::delete::Delete::presign(self.handle, input, expires_in).await
    }

    /// Path of the object, relative to the working directory.
    /// Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.path(input);
        self
    }

    /// Mode of the object. [`ObjectMode::DIR`] deletes the directory marker and requires
    /// virtual directories.
    pub fn object_mode(mut self, input: ObjectMode) -> Self {
        self.inner = self.inner.object_mode(input);
        self
    }

    /// Abort this multipart upload of the path instead of deleting an object
    pub fn multipart_id(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.multipart_id(input);
        self
    }

    /// Abort this multipart upload of the path instead of deleting an object
    pub fn set_multipart_id(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_multipart_id(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.expected_bucket_owner(input);
        self
    }
}

impl DeleteInputBuilder {
    /// Delete an object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<(), Error> {
        let mut fluent_builder = client.delete();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
