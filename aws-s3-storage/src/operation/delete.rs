/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;
/// Request type for deleting an object
pub use input::{DeleteInput, DeleteInputBuilder};

/// Operation builders
pub mod builders;

use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::convert;
use crate::presigning::{presign_captured, presigning_config, PresignedRequest, RequestCapture};

/// Operation struct for deleting an object or aborting a multipart upload
#[derive(Clone, Default, Debug)]
pub(crate) struct Delete;

impl Delete {
    /// Execute a single `Delete` operation.
    ///
    /// With a multipart ID only the upload is aborted. A missing object or upload is not an error.
    pub(crate) async fn orchestrate(handle: Arc<Handle>, input: DeleteInput) -> Result<(), Error> {
        let result = match &input.multipart_id {
            Some(upload_id) => {
                let request = convert::copy_fields_to_abort_mpu_request(
                    &handle,
                    handle.paths.abs_path(&input.path),
                    upload_id,
                    input.expected_bucket_owner.clone(),
                    handle.client().abort_multipart_upload(),
                );
                handle
                    .send(
                        request
                            .send()
                            .instrument(tracing::debug_span!("send-abort-multipart-upload")),
                    )
                    .await
                    .map(|_| ())
            }
            None => {
                let request = convert::copy_fields_to_delete_object_request(
                    &handle,
                    &input,
                    handle.client().delete_object(),
                )?;
                handle
                    .send(
                        request
                            .send()
                            .instrument(tracing::debug_span!("send-delete-object")),
                    )
                    .await
                    .map(|_| ())
            }
        };

        ignore_not_found(result)
    }

    /// Presign the `DeleteObject` (or `AbortMultipartUpload`) request of a `Delete` operation
    pub(crate) async fn presign(
        handle: Arc<Handle>,
        input: DeleteInput,
        expires_in: Duration,
    ) -> Result<PresignedRequest, Error> {
        match &input.multipart_id {
            Some(upload_id) => {
                let request = convert::copy_fields_to_abort_mpu_request(
                    &handle,
                    handle.paths.abs_path(&input.path),
                    upload_id,
                    input.expected_bucket_owner.clone(),
                    handle.client().abort_multipart_upload(),
                );
                let capture = RequestCapture::default();
                let send = request.customize().interceptor(capture.clone()).send();
                handle
                    .send(presign_captured(handle.client(), capture, send, expires_in))
                    .await
            }
            None => {
                let request = convert::copy_fields_to_delete_object_request(
                    &handle,
                    &input,
                    handle.client().delete_object(),
                )?;
                let presigned = handle
                    .send(request.presigned(presigning_config(expires_in)?))
                    .await?;
                Ok(PresignedRequest::new(presigned))
            }
        }
    }
}

/// Deletes are idempotent: a missing object or upload counts as deleted.
pub(crate) fn ignore_not_found(result: Result<(), Error>) -> Result<(), Error> {
    match result {
        Err(err) if err.is_not_found() => {
            tracing::debug!("target already gone, treating as deleted");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::abort_multipart_upload::AbortMultipartUploadError;
    use aws_sdk_s3::operation::delete_object::{DeleteObjectError, DeleteObjectOutput};
    use aws_smithy_mocks_experimental::mock;
    use aws_smithy_types::error::ErrorMetadata;
    use test_common::mock_client_with_stubbed_http_client;

    use crate::error::ErrorKind;
    use crate::types::{ObjectMode, StorageFeatures};
    use crate::{Client, Config};

    fn client(s3_client: aws_sdk_s3::Client, virtual_dir: bool) -> Client {
        let config = Config::builder()
            .bucket("test-bucket")
            .work_dir("/prefix/")
            .features(StorageFeatures {
                virtual_dir,
                virtual_link: false,
            })
            .client(s3_client)
            .build()
            .unwrap();
        Client::new(config)
    }

    #[tokio::test]
    async fn test_delete_not_found_is_success() {
        let delete_object = mock!(aws_sdk_s3::Client::delete_object)
            .match_requests(|r| r.key() == Some("prefix/missing.txt"))
            .then_error(|| {
                DeleteObjectError::generic(ErrorMetadata::builder().code("NoSuchKey").build())
            });
        let client = client(
            mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&delete_object]),
            false,
        );

        client.delete().path("missing.txt").send().await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_other_errors_surface() {
        let delete_object = mock!(aws_sdk_s3::Client::delete_object).then_error(|| {
            DeleteObjectError::generic(ErrorMetadata::builder().code("AccessDenied").build())
        });
        let client = client(
            mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&delete_object]),
            false,
        );

        let err = client.delete().path("a").send().await.unwrap_err();
        assert_eq!(&ErrorKind::PermissionDenied, err.kind());
    }

    #[tokio::test]
    async fn test_delete_dir_marker() {
        let delete_object = mock!(aws_sdk_s3::Client::delete_object)
            .match_requests(|r| r.key() == Some("prefix/photos/"))
            .then_output(|| DeleteObjectOutput::builder().build());
        let client = client(
            mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&delete_object]),
            true,
        );

        client
            .delete()
            .path("photos")
            .object_mode(ObjectMode::DIR)
            .send()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_dir_requires_virtual_dir() {
        let client = client(test_common::presigning_client(), false);
        let err = client
            .delete()
            .path("photos")
            .object_mode(ObjectMode::DIR)
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::UnsupportedOption, err.kind());
    }

    #[tokio::test]
    async fn test_delete_with_multipart_id_only_aborts() {
        // sequential rules: a DeleteObject request after the abort would fail the test
        let abort = mock!(aws_sdk_s3::Client::abort_multipart_upload)
            .match_requests(|r| r.key() == Some("prefix/big.bin") && r.upload_id() == Some("u-1"))
            .then_error(|| {
                AbortMultipartUploadError::generic(
                    ErrorMetadata::builder().code("NoSuchUpload").build(),
                )
            });
        let client = client(
            mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&abort]),
            false,
        );

        client
            .delete()
            .path("big.bin")
            .multipart_id("u-1")
            .send()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_presigned_delete() {
        let client = client(test_common::presigning_client(), false);
        let request = client
            .delete()
            .path("a.txt")
            .presigned(std::time::Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!("DELETE", request.method());
        assert!(!request.uri().contains("uploadId"));

        let request = client
            .delete()
            .path("a.txt")
            .multipart_id("u-1")
            .presigned(std::time::Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!("DELETE", request.method());
        assert!(request.uri().contains("uploadId=u-1"));
        assert!(request.uri().contains("X-Amz-Expires=60"));
        assert!(request.uri().contains("X-Amz-Signature="));
    }
}
