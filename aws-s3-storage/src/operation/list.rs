/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;
/// Request type for listing objects
pub use input::{ListInput, ListInputBuilder};

mod paginator;
/// Page iterator over listed objects
pub use paginator::ObjectPaginator;

/// Operation builders
pub mod builders;

use std::sync::Arc;

use crate::client::Handle;
use crate::error::Error;

/// Operation struct for listing objects, directories or multipart uploads
#[derive(Clone, Default, Debug)]
pub(crate) struct List;

impl List {
    /// Start a `List` operation. No request is sent until the first page is polled.
    pub(crate) fn orchestrate(handle: Arc<Handle>, input: ListInput) -> Result<ObjectPaginator, Error> {
        Ok(ObjectPaginator::new(handle, input))
    }
}
