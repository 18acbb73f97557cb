/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::operation::list_parts::ListPartsOutput;
use futures_util::Stream;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::convert;
use crate::types::Part;

use super::ListMultipartInput;

/// Paginator over the uploaded parts of a multipart upload.
///
/// Part indices are zero-based, see [`Part`].
#[derive(Debug)]
pub struct PartPaginator {
    handle: Arc<Handle>,
    state: State,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Paginating(PageStatus),
    Done,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct PageStatus {
    key: String,
    upload_id: String,
    max_parts: i32,
    expected_bucket_owner: Option<String>,
    part_number_marker: Option<String>,
}

impl PageStatus {
    fn next_state(&self, output: &ListPartsOutput) -> State {
        match output.next_part_number_marker() {
            Some(marker) if output.is_truncated().unwrap_or(false) => State::Paginating(PageStatus {
                part_number_marker: Some(marker.to_owned()),
                ..self.clone()
            }),
            _ => State::Done,
        }
    }
}

impl PartPaginator {
    pub(crate) fn new(handle: Arc<Handle>, input: ListMultipartInput) -> Result<Self, Error> {
        let upload_id = input.object.require_multipart_id()?.to_owned();
        let status = PageStatus {
            key: input.object.id().to_owned(),
            upload_id,
            max_parts: handle.config.list_page_size(),
            expected_bucket_owner: input.expected_bucket_owner,
            part_number_marker: None,
        };
        Ok(Self {
            handle,
            state: State::Paginating(status),
        })
    }

    /// Fetch the next page of parts.
    ///
    /// Returns `None` once all parts were listed. A failed fetch is returned once, after which
    /// the paginator is done.
    pub async fn next_page(&mut self) -> Option<Result<Vec<Part>, Error>> {
        let status = match &self.state {
            State::Done => return None,
            State::Paginating(status) => status,
        };

        match fetch_parts(&self.handle, status).await {
            Ok((page, next_state)) => {
                tracing::trace!(parts = page.len(), done = next_state == State::Done, "listed parts");
                self.state = next_state;
                Some(Ok(page))
            }
            Err(err) => {
                tracing::debug!("listing parts failed: {err}");
                self.state = State::Done;
                Some(Err(err))
            }
        }
    }

    /// Convert this paginator into a [`Stream`] of pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<Part>, Error>> {
        futures_util::stream::unfold(self, |mut paginator| async move {
            paginator.next_page().await.map(|page| (page, paginator))
        })
    }
}

async fn fetch_parts(handle: &Handle, status: &PageStatus) -> Result<(Vec<Part>, State), Error> {
    let request = convert::copy_fields_to_list_parts_request(
        handle,
        status.key.clone(),
        status.upload_id.clone(),
        Some(status.max_parts),
        status.part_number_marker.clone(),
        status.expected_bucket_owner.clone(),
        handle.client().list_parts(),
    );
    let output = handle
        .send(request.send().instrument(tracing::debug_span!("send-list-parts")))
        .await?;

    Ok((decode_parts(&output)?, status.next_state(&output)))
}

fn decode_parts(output: &ListPartsOutput) -> Result<Vec<Part>, Error> {
    output
        .parts()
        .iter()
        .map(|part| {
            let number = part.part_number().unwrap_or_default();
            Ok(Part {
                index: convert::to_part_index(number)?,
                size: part
                    .size()
                    .and_then(|size| u64::try_from(size).ok())
                    .unwrap_or_default(),
                e_tag: part.e_tag().unwrap_or_default().to_owned(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::list_parts::ListPartsOutput;
    use aws_sdk_s3::types::Part as S3Part;

    use super::{decode_parts, PageStatus, State};
    use crate::error::ErrorKind;
    use crate::types::Part;

    #[test]
    fn test_next_state() {
        let status = PageStatus {
            key: "work/big.bin".to_owned(),
            upload_id: "upload-1".to_owned(),
            max_parts: 200,
            ..Default::default()
        };

        let truncated = ListPartsOutput::builder()
            .is_truncated(true)
            .next_part_number_marker("200")
            .build();
        assert_eq!(
            State::Paginating(PageStatus {
                part_number_marker: Some("200".to_owned()),
                ..status.clone()
            }),
            status.next_state(&truncated)
        );

        let last = ListPartsOutput::builder()
            .is_truncated(false)
            .next_part_number_marker("400")
            .build();
        assert_eq!(State::Done, status.next_state(&last));
    }

    #[test]
    fn test_decode_parts_is_zero_based() {
        let output = ListPartsOutput::builder()
            .parts(S3Part::builder().part_number(1).size(10).e_tag("a").build())
            .parts(S3Part::builder().part_number(10_000).size(3).e_tag("b").build())
            .build();

        assert_eq!(
            vec![
                Part {
                    index: 0,
                    size: 10,
                    e_tag: "a".to_owned()
                },
                Part {
                    index: 9_999,
                    size: 3,
                    e_tag: "b".to_owned()
                },
            ],
            decode_parts(&output).unwrap()
        );
    }

    #[test]
    fn test_decode_invalid_part_number() {
        let output = ListPartsOutput::builder()
            .parts(S3Part::builder().part_number(0).build())
            .build();
        assert_eq!(
            &ErrorKind::Unexpected,
            decode_parts(&output).unwrap_err().kind()
        );
    }
}
