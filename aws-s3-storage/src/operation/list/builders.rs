/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::types::ListMode;

use super::{ListInputBuilder, ObjectPaginator};

/// Fluent builder for listing objects
#[derive(Debug)]
pub struct ListFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListInputBuilder,
}

impl ListFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Create a paginator for this listing.
    ///
    /// Pages are fetched lazily, one request per [`ObjectPaginator::next_page`] call.
    #[tracing::instrument(skip_all, level = "debug", name = "list", fields(
        path = self.inner.path.as_deref().unwrap_or_default(),
    ))]
    pub fn into_paginator(self) -> Result<ObjectPaginator, Error> {
        let input = self.inner.build()?;
        crate::operation::list::List::orchestrate(self.handle, input)
    }

    /// Path prefix to list, relative to the working directory
    pub fn path(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.path(input);
        self
    }

    /// How the path is interpreted, defaults to [`ListMode::Prefix`]
    pub fn list_mode(mut self, input: ListMode) -> Self {
        self.inner = self.inner.list_mode(input);
        self
    }

    /// The account ID of the expected bucket owner
    pub fn expected_bucket_owner(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.expected_bucket_owner(input);
        self
    }
}

impl ListInputBuilder {
    /// Create a paginator for this input using the given client.
    pub fn into_paginator_with(self, client: &crate::Client) -> Result<ObjectPaginator, Error> {
        let mut fluent_builder = client.list();
        fluent_builder.inner = self;
        fluent_builder.into_paginator()
    }
}
