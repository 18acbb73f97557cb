/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::operation::list_multipart_uploads::ListMultipartUploadsOutput;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use futures_util::Stream;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::Error;
use crate::path::PathMapper;
use crate::types::{ListMode, Object, ObjectMode, ObjectSystemMetadata};

use super::ListInput;

/// Paginator over the objects of a listing.
///
/// Every call to [`next_page`](ObjectPaginator::next_page) sends exactly one listing request.
/// Once the listing is exhausted, or a page failed, `next_page` returns `None`.
#[derive(Debug)]
pub struct ObjectPaginator {
    handle: Arc<Handle>,
    mode: ListMode,
    state: State,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Paginating(PageStatus),
    Done,
}

/// Cursor and fixed parameters of a listing
#[derive(Debug, Clone, Default, PartialEq)]
struct PageStatus {
    prefix: String,
    delimiter: Option<String>,
    max_keys: i32,
    expected_bucket_owner: Option<String>,
    continuation_token: Option<String>,
    key_marker: Option<String>,
    upload_id_marker: Option<String>,
}

impl PageStatus {
    fn next_objects_state(&self, output: &ListObjectsV2Output) -> State {
        match output.next_continuation_token() {
            Some(token) if output.is_truncated().unwrap_or(false) => State::Paginating(PageStatus {
                continuation_token: Some(token.to_owned()),
                ..self.clone()
            }),
            _ => State::Done,
        }
    }

    fn next_uploads_state(&self, output: &ListMultipartUploadsOutput) -> State {
        if !output.is_truncated().unwrap_or(false) {
            return State::Done;
        }
        match (output.next_key_marker(), output.next_upload_id_marker()) {
            (Some(key_marker), upload_id_marker) => State::Paginating(PageStatus {
                key_marker: Some(key_marker.to_owned()),
                upload_id_marker: upload_id_marker.map(str::to_owned),
                ..self.clone()
            }),
            (None, _) => State::Done,
        }
    }
}

impl ObjectPaginator {
    pub(crate) fn new(handle: Arc<Handle>, input: ListInput) -> Self {
        let delimiter = match input.list_mode {
            ListMode::Dir => Some("/".to_owned()),
            _ => None,
        };
        let status = PageStatus {
            prefix: handle.paths.abs_path(&input.path),
            delimiter,
            max_keys: handle.config.list_page_size(),
            expected_bucket_owner: input.expected_bucket_owner,
            ..Default::default()
        };
        Self {
            handle,
            mode: input.list_mode,
            state: State::Paginating(status),
        }
    }

    /// Fetch the next page of objects.
    ///
    /// Returns `None` once the listing is complete. A failed fetch is returned once, after which
    /// the paginator is done.
    pub async fn next_page(&mut self) -> Option<Result<Vec<Object>, Error>> {
        let status = match &self.state {
            State::Done => return None,
            State::Paginating(status) => status,
        };

        let fetched = match self.mode {
            ListMode::Part => fetch_uploads(&self.handle, status).await,
            _ => fetch_objects(&self.handle, status).await,
        };

        match fetched {
            Ok((page, next_state)) => {
                tracing::trace!(entries = page.len(), done = next_state == State::Done, "listed page");
                self.state = next_state;
                Some(Ok(page))
            }
            Err(err) => {
                tracing::debug!("listing failed: {err}");
                self.state = State::Done;
                Some(Err(err))
            }
        }
    }

    /// Convert this paginator into a [`Stream`] of pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<Object>, Error>> {
        futures_util::stream::unfold(self, |mut paginator| async move {
            paginator.next_page().await.map(|page| (page, paginator))
        })
    }
}

async fn fetch_objects(handle: &Handle, status: &PageStatus) -> Result<(Vec<Object>, State), Error> {
    let request = handle
        .client()
        .list_objects_v2()
        .bucket(handle.bucket())
        .prefix(status.prefix.clone())
        .set_delimiter(status.delimiter.clone())
        .max_keys(status.max_keys)
        .set_continuation_token(status.continuation_token.clone())
        .set_expected_bucket_owner(status.expected_bucket_owner.clone());
    let output = handle
        .send(
            request
                .send()
                .instrument(tracing::debug_span!("send-list-objects-v2")),
        )
        .await?;

    Ok((decode_objects(&handle.paths, &output), status.next_objects_state(&output)))
}

async fn fetch_uploads(handle: &Handle, status: &PageStatus) -> Result<(Vec<Object>, State), Error> {
    let request = handle
        .client()
        .list_multipart_uploads()
        .bucket(handle.bucket())
        .prefix(status.prefix.clone())
        .max_uploads(status.max_keys)
        .set_key_marker(status.key_marker.clone())
        .set_upload_id_marker(status.upload_id_marker.clone())
        .set_expected_bucket_owner(status.expected_bucket_owner.clone());
    let output = handle
        .send(
            request
                .send()
                .instrument(tracing::debug_span!("send-list-multipart-uploads")),
        )
        .await?;

    Ok((decode_uploads(&handle.paths, &output), status.next_uploads_state(&output)))
}

/// Common prefixes first, then contents, each in service order.
fn decode_objects(paths: &PathMapper, output: &ListObjectsV2Output) -> Vec<Object> {
    let dirs = output
        .common_prefixes()
        .iter()
        .filter_map(|prefix| prefix.prefix())
        .map(|prefix| Object::new(prefix, paths.rel_path(prefix), ObjectMode::DIR));

    // listings cannot tell links apart from files, use stat for the exact mode
    let files = output.contents().iter().filter_map(|entry| {
        let key = entry.key()?;
        let mut object = Object::new(key, paths.rel_path(key), ObjectMode::READ);
        object.content_length = entry.size().and_then(|size| u64::try_from(size).ok());
        object.last_modified = entry.last_modified().cloned();
        object.e_tag = entry.e_tag().map(str::to_owned);
        let mut sm = ObjectSystemMetadata::default();
        sm.storage_class = entry.storage_class().map(|v| v.as_str().to_owned());
        object.system_metadata = sm;
        Some(object)
    });

    dirs.chain(files).collect()
}

fn decode_uploads(paths: &PathMapper, output: &ListMultipartUploadsOutput) -> Vec<Object> {
    output
        .uploads()
        .iter()
        .filter_map(|upload| {
            let key = upload.key()?;
            let mut object = Object::new(key, paths.rel_path(key), ObjectMode::PART);
            object.multipart_id = upload.upload_id().map(str::to_owned);
            Some(object)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::list_multipart_uploads::ListMultipartUploadsOutput;
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
    use aws_sdk_s3::types::{CommonPrefix, MultipartUpload, Object as S3Object, ObjectStorageClass};

    use super::{decode_objects, decode_uploads, PageStatus, State};
    use crate::path::PathMapper;
    use crate::types::ObjectMode;

    fn status() -> PageStatus {
        PageStatus {
            prefix: "work/".to_owned(),
            max_keys: 200,
            ..Default::default()
        }
    }

    #[test]
    fn test_next_objects_state() {
        let truncated = ListObjectsV2Output::builder()
            .is_truncated(true)
            .next_continuation_token("token1")
            .build();
        let next = status().next_objects_state(&truncated);
        assert_eq!(
            State::Paginating(PageStatus {
                continuation_token: Some("token1".to_owned()),
                ..status()
            }),
            next
        );

        let last = ListObjectsV2Output::builder().is_truncated(false).build();
        assert_eq!(State::Done, status().next_objects_state(&last));

        // a truncated page without a cursor cannot be continued
        let no_cursor = ListObjectsV2Output::builder().is_truncated(true).build();
        assert_eq!(State::Done, status().next_objects_state(&no_cursor));

        let missing_flag = ListObjectsV2Output::builder()
            .next_continuation_token("token1")
            .build();
        assert_eq!(State::Done, status().next_objects_state(&missing_flag));
    }

    #[test]
    fn test_next_uploads_state() {
        let truncated = ListMultipartUploadsOutput::builder()
            .is_truncated(true)
            .next_key_marker("work/b")
            .next_upload_id_marker("u-2")
            .build();
        assert_eq!(
            State::Paginating(PageStatus {
                key_marker: Some("work/b".to_owned()),
                upload_id_marker: Some("u-2".to_owned()),
                ..status()
            }),
            status().next_uploads_state(&truncated)
        );

        let last = ListMultipartUploadsOutput::builder().is_truncated(false).build();
        assert_eq!(State::Done, status().next_uploads_state(&last));
    }

    #[test]
    fn test_decode_dir_page_orders_prefixes_first() {
        let output = ListObjectsV2Output::builder()
            .contents(
                S3Object::builder()
                    .key("work/a.txt")
                    .size(3)
                    .e_tag("\"e\"")
                    .storage_class(ObjectStorageClass::Standard)
                    .build(),
            )
            .contents(S3Object::builder().key("work/b.txt").size(4).build())
            .common_prefixes(CommonPrefix::builder().prefix("work/photos/").build())
            .common_prefixes(CommonPrefix::builder().prefix("work/videos/").build())
            .build();

        let objects = decode_objects(&PathMapper::new("/work/"), &output);
        let paths: Vec<_> = objects.iter().map(|o| o.path()).collect();
        assert_eq!(vec!["photos/", "videos/", "a.txt", "b.txt"], paths);

        assert_eq!(ObjectMode::DIR, objects[0].mode());
        assert_eq!("work/photos/", objects[0].id());
        assert_eq!(ObjectMode::READ, objects[2].mode());
        assert_eq!(Some(3), objects[2].content_length());
        assert_eq!(Some("\"e\""), objects[2].e_tag());
        assert_eq!(
            Some("STANDARD"),
            objects[2].system_metadata().storage_class.as_deref()
        );
    }

    #[test]
    fn test_decode_uploads() {
        let output = ListMultipartUploadsOutput::builder()
            .uploads(MultipartUpload::builder().key("work/big.bin").upload_id("u-1").build())
            .build();

        let objects = decode_uploads(&PathMapper::new("/work/"), &output);
        assert_eq!(1, objects.len());
        assert_eq!(ObjectMode::PART, objects[0].mode());
        assert_eq!("big.bin", objects[0].path());
        assert_eq!(Some("u-1"), objects[0].multipart_id());
    }
}
