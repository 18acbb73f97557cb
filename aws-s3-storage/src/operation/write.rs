/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;
/// Request type for writing an object
pub use input::{WriteInput, WriteInputBuilder};

mod output;
/// Response type for writing an object
pub use output::WriteOutput;

/// Operation builders
pub mod builders;

use std::sync::Arc;
use std::time::Duration;

use aws_smithy_types::byte_stream::ByteStream;
use tracing::Instrument;

use crate::client::{Handle, WRITE_SIZE_MAXIMUM};
use crate::error::{self, Error};
use crate::http::body::limit_body;
use crate::operation::convert::{self, write_system_metadata};
use crate::presigning::{presigning_config, PresignedRequest};
use crate::types::{Object, ObjectMode};

/// Operation struct for writing an object with a single request
#[derive(Clone, Default, Debug)]
pub(crate) struct Write;

impl Write {
    /// Execute a single `Write` operation
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        mut input: WriteInput,
    ) -> Result<WriteOutput, Error> {
        check_size(input.size)?;
        let body = writable_body(input.body.take(), input.size)?;

        let request = convert::copy_fields_to_put_object_request(
            &handle,
            &input,
            handle.client().put_object(),
        )?
        .body(body);
        let output = handle
            .send(request.send().instrument(tracing::debug_span!("send-put-object")))
            .await?;

        let mut object = Object::new(
            handle.paths.abs_path(&input.path),
            input.path,
            ObjectMode::READ,
        );
        object.content_length = Some(input.size);
        object.e_tag = output.e_tag.clone();
        object.system_metadata = write_system_metadata!(output);
        object.system_metadata.storage_class = input.storage_class.map(|v| v.as_str().to_owned());

        Ok(WriteOutput {
            bytes_written: input.size,
            object,
        })
    }

    /// Presign the `PutObject` request of a `Write` operation
    pub(crate) async fn presign(
        handle: Arc<Handle>,
        input: WriteInput,
        expires_in: Duration,
    ) -> Result<PresignedRequest, Error> {
        check_size(input.size)?;
        let request = convert::copy_fields_to_put_object_request(
            &handle,
            &input,
            handle.client().put_object(),
        )?;
        let presigned = handle
            .send(request.presigned(presigning_config(expires_in)?))
            .await?;
        Ok(PresignedRequest::new(presigned).with_content_length(input.size))
    }
}

fn check_size(size: u64) -> Result<(), Error> {
    if size > WRITE_SIZE_MAXIMUM {
        return Err(error::restriction_violated(format!(
            "size limit exceeded: {} > {} bytes",
            size, WRITE_SIZE_MAXIMUM
        )));
    }
    Ok(())
}

/// An empty write may omit the body; a non-empty write must not.
///
/// A body longer than `size` is cut at `size` bytes.
pub(crate) fn writable_body(body: Option<ByteStream>, size: u64) -> Result<ByteStream, Error> {
    match body {
        Some(_) if size == 0 => Ok(ByteStream::from_static(b"")),
        Some(body) => Ok(limit_body(body, size)),
        None if size == 0 => Ok(ByteStream::from_static(b"")),
        None => Err(error::invalid_input(format!(
            "no body given for a write of {} bytes",
            size
        ))),
    }
}
