/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;
/// Request type for reading an object
pub use input::{ReadInput, ReadInputBuilder};

mod output;
/// Response type for reading an object
pub use output::ReadOutput;

/// Operation builders
pub mod builders;

use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::convert;
use crate::presigning::{presigning_config, PresignedRequest};

/// Operation struct for reading an object
#[derive(Clone, Default, Debug)]
pub(crate) struct Read;

impl Read {
    /// Execute a single `Read` operation
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: ReadInput,
    ) -> Result<ReadOutput, Error> {
        let request = convert::copy_fields_to_get_object_request(
            &handle,
            &input,
            handle.client().get_object(),
        )?;
        let output = handle
            .send(request.send().instrument(tracing::debug_span!("send-get-object")))
            .await?;
        Ok(ReadOutput::new(output, handle.guard.clone()))
    }

    /// Presign the `GetObject` request of a `Read` operation
    pub(crate) async fn presign(
        handle: Arc<Handle>,
        input: ReadInput,
        expires_in: Duration,
    ) -> Result<PresignedRequest, Error> {
        let request = convert::copy_fields_to_get_object_request(
            &handle,
            &input,
            handle.client().get_object(),
        )?;
        let presigned = handle
            .send(request.presigned(presigning_config(expires_in)?))
            .await?;
        Ok(PresignedRequest::new(presigned))
    }
}
