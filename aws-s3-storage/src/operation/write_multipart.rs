/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;
/// Request type for uploading one part
pub use input::{WriteMultipartInput, WriteMultipartInputBuilder};

mod output;
/// Response type for uploading one part
pub use output::WriteMultipartOutput;

/// Operation builders
pub mod builders;

use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;

use crate::client::{Handle, MULTIPART_NUMBER_MAXIMUM, MULTIPART_SIZE_MAXIMUM};
use crate::error::{self, Error};
use crate::operation::convert;
use crate::operation::write::writable_body;
use crate::presigning::{presigning_config, PresignedRequest};
use crate::types::Part;

/// Operation struct for uploading one part of a multipart upload
#[derive(Clone, Default, Debug)]
pub(crate) struct WriteMultipart;

impl WriteMultipart {
    /// Execute a single `WriteMultipart` operation
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        mut input: WriteMultipartInput,
    ) -> Result<WriteMultipartOutput, Error> {
        check_restrictions(&input)?;
        let body = writable_body(input.body.take(), input.size)?;

        let request = convert::copy_fields_to_upload_part_request(
            &handle,
            &input,
            handle.client().upload_part(),
        )?
        .body(body);
        let output = handle
            .send(request.send().instrument(tracing::debug_span!("send-upload-part", part = input.index)))
            .await?;

        Ok(WriteMultipartOutput {
            bytes_written: input.size,
            part: Part {
                index: input.index,
                size: input.size,
                e_tag: output.e_tag.unwrap_or_default(),
            },
        })
    }

    /// Presign the `UploadPart` request of a `WriteMultipart` operation
    pub(crate) async fn presign(
        handle: Arc<Handle>,
        input: WriteMultipartInput,
        expires_in: Duration,
    ) -> Result<PresignedRequest, Error> {
        check_restrictions(&input)?;
        let request = convert::copy_fields_to_upload_part_request(
            &handle,
            &input,
            handle.client().upload_part(),
        )?;
        let presigned = handle
            .send(request.presigned(presigning_config(expires_in)?))
            .await?;
        Ok(PresignedRequest::new(presigned).with_content_length(input.size))
    }
}

/// Service limits are checked before any request is formatted.
fn check_restrictions(input: &WriteMultipartInput) -> Result<(), Error> {
    if input.size > MULTIPART_SIZE_MAXIMUM {
        return Err(error::restriction_violated(format!(
            "part size limit exceeded: {} > {} bytes",
            input.size, MULTIPART_SIZE_MAXIMUM
        )));
    }
    if input.index >= MULTIPART_NUMBER_MAXIMUM {
        return Err(error::restriction_violated(format!(
            "part index {} out of range [0, {})",
            input.index, MULTIPART_NUMBER_MAXIMUM
        )));
    }
    Ok(())
}
