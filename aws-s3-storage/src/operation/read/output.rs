/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_smithy_types::byte_stream::ByteStream;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::Error;
use crate::runtime::cancellation::CancellationGuard;

/// Response type for reading an object
#[derive(Debug)]
#[non_exhaustive]
pub struct ReadOutput {
    body: ByteStream,
    content_length: Option<u64>,
    content_type: Option<String>,
    content_range: Option<String>,
    e_tag: Option<String>,
    guard: CancellationGuard,
}

impl ReadOutput {
    pub(crate) fn new(output: GetObjectOutput, guard: CancellationGuard) -> Self {
        Self {
            guard,
            content_length: output
                .content_length
                .and_then(|len| u64::try_from(len).ok()),
            content_type: output.content_type,
            content_range: output.content_range,
            e_tag: output.e_tag,
            body: output.body,
        }
    }

    /// Number of bytes in the body
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// The content type of the object
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The returned range for ranged reads, e.g. `bytes 5-14/100`
    pub fn content_range(&self) -> Option<&str> {
        self.content_range.as_deref()
    }

    /// Entity tag of the object
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Consume the output and return the streaming body.
    ///
    /// The raw body is not bound by the client's cancellation token or operation timeout, use
    /// [`copy_to`](Self::copy_to) for that.
    pub fn into_body(self) -> ByteStream {
        self.body
    }

    /// Stream the body into `writer`, returning the number of bytes copied.
    ///
    /// The writer is flushed once the body is exhausted. Every chunk read is bounded by the
    /// client's cancellation token and operation timeout, bytes already written stay written.
    pub async fn copy_to<W>(self, writer: &mut W) -> Result<u64, Error>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut body = self.body;
        let mut copied = 0u64;
        while let Some(chunk) = self.guard.run(body.try_next()).await? {
            writer.write_all(&chunk).await?;
            copied += chunk.len() as u64;
        }
        writer.flush().await?;
        tracing::trace!("copied {copied} bytes");
        Ok(copied)
    }
}
