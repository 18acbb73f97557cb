/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::types::StorageClass;

use crate::error::Error;
use crate::types::Object;

use super::CreateDirInputBuilder;

/// Fluent builder for creating a directory marker
#[derive(Debug)]
pub struct CreateDirFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CreateDirInputBuilder,
}

impl CreateDirFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Create the directory
    #[tracing::instrument(skip_all, level = "debug", name = "create-dir", fields(
        path = self.inner.path.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<Object, Error> {
        let input = self.inner.build()?;
        crate::operation::create_dir::CreateDir::orchestrate(self.handle, input).await
    }

    /// Path of the directory, relative to the working directory.
    /// Required.
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.path(input);
        self
    }

    /// Storage class of the marker object
    pub fn storage_class(mut self, input: StorageClass) -> Self {
        self.inner = self.inner.storage_class(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.expected_bucket_owner(input);
        self
    }
}
