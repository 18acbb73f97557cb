/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::pin::Pin;
use std::task::{ready, Context, Poll};

use aws_smithy_types::body::SdkBody;
use aws_smithy_types::byte_stream::ByteStream;
use bytes::Bytes;
use http_body_1x::{Frame, SizeHint};

/// Cut `body` after `limit` bytes.
///
/// In-memory bodies are truncated in place and stay rewindable. Streaming bodies that are
/// known to fit are returned unchanged, anything else is wrapped.
pub(crate) fn limit_body(body: ByteStream, limit: u64) -> ByteStream {
    if let Some(bytes) = body.bytes() {
        if bytes.len() as u64 > limit {
            return ByteStream::from(Bytes::copy_from_slice(&bytes[..limit as usize]));
        }
        return body;
    }

    match body.size_hint() {
        (_, Some(upper)) if upper <= limit => body,
        _ => ByteStream::from_body_1_x(LimitedBody {
            inner: body.into_inner(),
            remaining: limit,
        }),
    }
}

/// Streaming body that ends after `remaining` more bytes
#[derive(Debug)]
struct LimitedBody {
    inner: SdkBody,
    remaining: u64,
}

impl http_body_1x::Body for LimitedBody {
    type Data = Bytes;
    type Error = aws_smithy_types::body::Error;

    fn poll_frame(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        if self.remaining == 0 {
            return Poll::Ready(None);
        }

        let frame = match ready!(Pin::new(&mut self.inner).poll_frame(cx)) {
            Some(Ok(frame)) => frame,
            other => return Poll::Ready(other),
        };
        let frame = match frame.into_data() {
            Ok(mut data) => {
                if data.len() as u64 > self.remaining {
                    data.truncate(self.remaining as usize);
                    tracing::debug!("body longer than the declared size, truncated");
                }
                self.remaining -= data.len() as u64;
                Frame::data(data)
            }
            // trailers
            Err(frame) => frame,
        };
        Poll::Ready(Some(Ok(frame)))
    }

    fn is_end_stream(&self) -> bool {
        self.remaining == 0 || self.inner.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        let inner = self.inner.size_hint();
        let mut hint = SizeHint::new();
        hint.set_upper(inner.upper().map_or(self.remaining, |upper| upper.min(self.remaining)));
        hint.set_lower(inner.lower().min(self.remaining));
        hint
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use aws_smithy_types::byte_stream::ByteStream;
    use bytes::Bytes;
    use http_body_1x::Frame;

    use super::limit_body;

    /// Streams its chunks without announcing a length
    struct ChunkedBody {
        chunks: VecDeque<Bytes>,
    }

    impl ChunkedBody {
        fn stream(chunks: &[&'static [u8]]) -> ByteStream {
            let chunks = chunks.iter().map(|c| Bytes::from_static(c)).collect();
            ByteStream::from_body_1_x(ChunkedBody { chunks })
        }
    }

    impl http_body_1x::Body for ChunkedBody {
        type Data = Bytes;
        type Error = std::io::Error;

        fn poll_frame(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
            Poll::Ready(self.chunks.pop_front().map(|chunk| Ok(Frame::data(chunk))))
        }
    }

    #[tokio::test]
    async fn test_in_memory_body_is_truncated() {
        let body = limit_body(ByteStream::from_static(b"hello world"), 5);
        assert_eq!(Some(&b"hello"[..]), body.bytes());

        let body = limit_body(ByteStream::from_static(b"hi"), 5);
        assert_eq!(Some(&b"hi"[..]), body.bytes());
    }

    #[tokio::test]
    async fn test_streaming_body_is_cut_at_limit() {
        let body = limit_body(ChunkedBody::stream(&[b"hello ", b"world", b"!"]), 8);
        assert_eq!(Some(8), body.size_hint().1);
        let collected = body.collect().await.unwrap().into_bytes();
        assert_eq!(&b"hello wo"[..], &collected[..]);
    }

    #[tokio::test]
    async fn test_short_streaming_body_is_not_padded() {
        let body = limit_body(ChunkedBody::stream(&[b"abc"]), 8);
        let collected = body.collect().await.unwrap().into_bytes();
        assert_eq!(&b"abc"[..], &collected[..]);
    }
}
