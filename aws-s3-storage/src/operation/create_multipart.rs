/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;
/// Request type for starting a multipart upload
pub use input::{CreateMultipartInput, CreateMultipartInputBuilder};

/// Operation builders
pub mod builders;

use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;

use crate::client::Handle;
use crate::error::{self, Error};
use crate::operation::convert::{self, write_system_metadata};
use crate::presigning::{presign_captured, PresignedRequest, RequestCapture};
use crate::types::{Object, ObjectMode};

/// Operation struct for starting a multipart upload
#[derive(Clone, Default, Debug)]
pub(crate) struct CreateMultipart;

impl CreateMultipart {
    /// Execute a single `CreateMultipart` operation
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: CreateMultipartInput,
    ) -> Result<Object, Error> {
        let request =
            convert::copy_fields_to_mpu_request(&handle, &input, handle.client().create_multipart_upload())?;
        let output = handle
            .send(
                request
                    .send()
                    .instrument(tracing::debug_span!("send-create-multipart-upload")),
            )
            .await?;

        let upload_id = output.upload_id.clone().ok_or_else(|| {
            Error::new(
                error::ErrorKind::Unexpected,
                "CreateMultipartUpload response is missing the upload ID",
            )
        })?;
        tracing::trace!("created multipart upload {upload_id}");

        let mut object = Object::new(
            handle.paths.abs_path(&input.path),
            input.path,
            ObjectMode::PART,
        );
        object.multipart_id = Some(upload_id);
        object.content_type = input.content_type;
        object.system_metadata = write_system_metadata!(output);
        object.system_metadata.storage_class = input.storage_class.map(|v| v.as_str().to_owned());
        Ok(object)
    }

    /// Presign the `CreateMultipartUpload` request
    pub(crate) async fn presign(
        handle: Arc<Handle>,
        input: CreateMultipartInput,
        expires_in: Duration,
    ) -> Result<PresignedRequest, Error> {
        let request =
            convert::copy_fields_to_mpu_request(&handle, &input, handle.client().create_multipart_upload())?;
        let capture = RequestCapture::default();
        let send = request.customize().interceptor(capture.clone()).send();
        handle
            .send(presign_captured(handle.client(), capture, send, expires_in))
            .await
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::create_multipart_upload::CreateMultipartUploadOutput;
    use aws_sdk_s3::types::ServerSideEncryption;
    use aws_smithy_mocks_experimental::mock;
    use test_common::mock_client_with_stubbed_http_client;

    use crate::error::ErrorKind;
    use crate::types::{ObjectMode, ServerSideEncryptionConfig, SseCustomerKey};
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
    async fn test_create_multipart() {
        let create_mpu = mock!(aws_sdk_s3::Client::create_multipart_upload)
            .match_requests(|r| {
                r.key() == Some("work/big.bin")
                    && r.server_side_encryption() == Some(&ServerSideEncryption::Aes256)
                    && r.bucket_key_enabled() == Some(true)
            })
            .then_output(|| {
                CreateMultipartUploadOutput::builder()
                    .upload_id("upload-1")
                    .server_side_encryption(ServerSideEncryption::Aes256)
                    .build()
            });
        let client = client(mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&create_mpu]));

        let object = client
            .create_multipart()
            .path("big.bin")
            .server_side_encryption(
                ServerSideEncryptionConfig::new()
                    .algorithm(ServerSideEncryption::Aes256)
                    .bucket_key_enabled(true),
            )
            .send()
            .await
            .unwrap();
        assert_eq!(ObjectMode::PART, object.mode());
        assert_eq!("work/big.bin", object.id());
        assert_eq!(Some("upload-1"), object.multipart_id());
        assert_eq!(
            Some("AES256"),
            object.system_metadata().server_side_encryption.as_deref()
        );
    }

    #[tokio::test]
    async fn test_create_multipart_without_upload_id() {
        let create_mpu = mock!(aws_sdk_s3::Client::create_multipart_upload)
            .then_output(|| CreateMultipartUploadOutput::builder().build());
        let client = client(mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&create_mpu]));

        let err = client
            .create_multipart()
            .path("big.bin")
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::Unexpected, err.kind());
    }

    #[tokio::test]
    async fn test_presigned_create_multipart_with_customer_key() {
        let client = client(test_common::presigning_client());
        let request = client
            .create_multipart()
            .path("big.bin")
            .sse_customer_key(SseCustomerKey::new("AES256", test_common::customer_key()))
            .presigned(std::time::Duration::from_secs(300))
            .await
            .unwrap();

        assert_eq!("POST", request.method());
        assert!(request.uri().contains("uploads"));
        assert!(request.uri().contains("X-Amz-Algorithm=AWS4-HMAC-SHA256"));
        assert!(request.uri().contains("X-Amz-Credential=ANOTREAL"));
        assert!(request.uri().contains("X-Amz-Date=20090213T233130Z"));
        assert!(request.uri().contains("X-Amz-Expires=300"));
        assert!(request.uri().contains("X-Amz-Signature="));

        // the customer key headers are signed and must be sent by the holder
        let headers: Vec<_> = request.headers().collect();
        assert!(headers.contains(&(
            "x-amz-server-side-encryption-customer-key-md5",
            "tP/LI3N87DFaSk0aoqYgzg=="
        )));
        assert!(request
            .uri()
            .contains("x-amz-server-side-encryption-customer-algorithm"));
    }
}
