/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use crate::error::Error;
use crate::presigning::PresignedRequest;
use crate::types::Object;

use super::{ListMultipartInputBuilder, PartPaginator};

/// Fluent builder for listing the parts of a multipart upload
#[derive(Debug)]
pub struct ListMultipartFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListMultipartInputBuilder,
}

impl ListMultipartFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Create a paginator over the uploaded parts.
    ///
    /// Fails with [`InputInvalid`](crate::error::ErrorKind::InputInvalid) if the object is not a
    /// multipart upload.
    #[tracing::instrument(skip_all, level = "debug", name = "list-multipart")]
    pub fn into_paginator(self) -> Result<PartPaginator, Error> {
        let input = self.inner.build()?;
        crate::operation::list_multipart::ListMultipart::orchestrate(self.handle, input)
    }

    /// Presign the request listing the first page of parts
    #[tracing::instrument(skip_all, level = "debug", name = "presign-list-multipart")]
    pub async fn presigned(self, expires_in: Duration) -> Result<PresignedRequest, Error> {
        let input = self.inner.build()?;
        crate::operation::list_multipart::ListMultipart::presign(self.handle, input, expires_in)
            .await
    }

    /// The in-progress upload.
    /// Required.
    pub fn object(mut self, input: Object) -> Self {
        self.inner = self.inner.object(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.expected_bucket_owner(input);
        self
    }
}
