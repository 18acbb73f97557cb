/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;
/// Request type for aborting a multipart upload
pub use input::{AbortMultipartInput, AbortMultipartInputBuilder};

/// Operation builders
pub mod builders;

use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::convert;
use crate::operation::delete::ignore_not_found;
use crate::presigning::{presign_captured, PresignedRequest, RequestCapture};

/// Operation struct for aborting a multipart upload
#[derive(Clone, Default, Debug)]
pub(crate) struct AbortMultipart;

impl AbortMultipart {
    /// Execute a single `AbortMultipart` operation. An unknown upload is not an error.
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: AbortMultipartInput,
    ) -> Result<(), Error> {
        let upload_id = input.object.require_multipart_id()?;
        let request = convert::copy_fields_to_abort_mpu_request(
            &handle,
            input.object.id(),
            upload_id,
            input.expected_bucket_owner.clone(),
            handle.client().abort_multipart_upload(),
        );
        let result = handle
            .send(
                request
                    .send()
                    .instrument(tracing::debug_span!("send-abort-multipart-upload")),
            )
            .await
            .map(|_| ());

        ignore_not_found(result)
    }

    /// Presign the `AbortMultipartUpload` request
    pub(crate) async fn presign(
        handle: Arc<Handle>,
        input: AbortMultipartInput,
        expires_in: Duration,
    ) -> Result<PresignedRequest, Error> {
        let upload_id = input.object.require_multipart_id()?;
        let request = convert::copy_fields_to_abort_mpu_request(
            &handle,
            input.object.id(),
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
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::abort_multipart_upload::{
        AbortMultipartUploadError, AbortMultipartUploadOutput,
    };
    use aws_smithy_mocks_experimental::{mock, Rule};
    use aws_smithy_types::error::ErrorMetadata;
    use test_common::mock_client_with_stubbed_http_client;

    use crate::error::ErrorKind;
    use crate::{Client, Config};

    fn client(s3_client: aws_sdk_s3::Client) -> Client {
        let config = Config::builder()
            .bucket("test-bucket")
            .work_dir("/work/")
            .client(s3_client)
            .build()
            .unwrap();
        Client::new(config)
    }

    #[tokio::test]
    async fn test_abort_multipart() {
        let abort = mock!(aws_sdk_s3::Client::abort_multipart_upload)
            .match_requests(|r| r.key() == Some("work/big.bin") && r.upload_id() == Some("upload-1"))
            .then_output(|| AbortMultipartUploadOutput::builder().build());
        let client = client(mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&abort]));
        let upload = client.create("big.bin", None, Some("upload-1")).unwrap();

        client.abort_multipart().object(upload).send().await.unwrap();
    }

    #[tokio::test]
    async fn test_abort_unknown_upload_succeeds() {
        let abort = mock!(aws_sdk_s3::Client::abort_multipart_upload).then_error(|| {
            AbortMultipartUploadError::generic(ErrorMetadata::builder().code("NoSuchUpload").build())
        });
        let client = client(mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&abort]));
        let upload = client.create("big.bin", None, Some("gone")).unwrap();

        client.abort_multipart().object(upload).send().await.unwrap();
    }

    #[tokio::test]
    async fn test_abort_other_errors_surface() {
        let abort = mock!(aws_sdk_s3::Client::abort_multipart_upload).then_error(|| {
            AbortMultipartUploadError::generic(ErrorMetadata::builder().code("InternalError").build())
        });
        let client = client(mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&abort]));
        let upload = client.create("big.bin", None, Some("upload-1")).unwrap();

        let err = client.abort_multipart().object(upload).send().await.unwrap_err();
        assert_eq!(&ErrorKind::Unexpected, err.kind());
    }

    #[tokio::test]
    async fn test_abort_requires_upload_id() {
        let rules: &[&Rule] = &[];
        let client = client(mock_client_with_stubbed_http_client!(aws_sdk_s3, rules));
        let object = client.create("a.txt", None, None).unwrap();

        let err = client.abort_multipart().object(object).send().await.unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }

    #[tokio::test]
    async fn test_presigned_abort() {
        let client = client(test_common::presigning_client());
        let upload = client.create("big.bin", None, Some("upload-1")).unwrap();

        let request = client
            .abort_multipart()
            .object(upload)
            .expected_bucket_owner("111122223333")
            .presigned(std::time::Duration::from_secs(900))
            .await
            .unwrap();

        assert_eq!("DELETE", request.method());
        assert!(request.uri().contains("/work/big.bin?"));
        assert!(request.uri().contains("uploadId=upload-1"));
        assert!(request.uri().contains("X-Amz-Expires=900"));
        assert!(request.uri().contains("X-Amz-Signature="));
        assert!(request
            .headers()
            .any(|header| header == ("x-amz-expected-bucket-owner", "111122223333")));
        assert_eq!(None, request.body());
    }

    #[tokio::test]
    async fn test_presigned_abort_expiry_limit() {
        let client = client(test_common::presigning_client());
        let upload = client.create("big.bin", None, Some("upload-1")).unwrap();

        let err = client
            .abort_multipart()
            .object(upload)
            .presigned(std::time::Duration::from_secs(8 * 24 * 3600))
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }
}
