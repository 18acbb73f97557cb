/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;
/// Request type for completing a multipart upload
pub use input::{CompleteMultipartInput, CompleteMultipartInputBuilder};

/// Operation builders
pub mod builders;

use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::types::CompletedPart;
use bytes::Bytes;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::convert;
use crate::presigning::{presign_captured, PresignedRequest, RequestCapture};
use crate::types::{Object, ObjectMode};

const S3_XML_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

/// Operation struct for completing a multipart upload
#[derive(Clone, Default, Debug)]
pub(crate) struct CompleteMultipart;

impl CompleteMultipart {
    /// Execute a single `CompleteMultipart` operation
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: CompleteMultipartInput,
    ) -> Result<Object, Error> {
        let request = convert::copy_fields_to_complete_mpu_request(
            &handle,
            &input,
            handle.client().complete_multipart_upload(),
        )?;
        let output = handle
            .send(
                request
                    .send()
                    .instrument(tracing::debug_span!("send-complete-multipart-upload")),
            )
            .await?;
        tracing::trace!(parts = input.parts.len(), "completed multipart upload");

        let mut object = input.object;
        object.mode.remove(ObjectMode::PART);
        object.mode.insert(ObjectMode::READ);
        object.e_tag = output.e_tag.clone();
        object.system_metadata.server_side_encryption = output
            .server_side_encryption()
            .map(|v| v.as_str().to_owned());
        object.system_metadata.aws_kms_key_id = output.ssekms_key_id().map(str::to_owned);
        object.system_metadata.bucket_key_enabled = output.bucket_key_enabled();
        Ok(object)
    }

    /// Presign the `CompleteMultipartUpload` request.
    ///
    /// The part list travels in the request body, which is returned with the presigned request.
    pub(crate) async fn presign(
        handle: Arc<Handle>,
        input: CompleteMultipartInput,
        expires_in: Duration,
    ) -> Result<PresignedRequest, Error> {
        let body = encode_complete_body(&convert::completed_parts(&input)?)?;
        let request = convert::copy_fields_to_complete_mpu_request(
            &handle,
            &input,
            handle.client().complete_multipart_upload(),
        )?;
        let capture = RequestCapture::default();
        let send = request.customize().interceptor(capture.clone()).send();
        let presigned = handle
            .send(presign_captured(handle.client(), capture, send, expires_in))
            .await?;
        Ok(presigned.with_body(body))
    }
}

/// Serialize a `CompleteMultipartUpload` document, keeping the order of `parts`.
fn encode_complete_body(parts: &[CompletedPart]) -> Result<Bytes, Error> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Start(
        BytesStart::new("CompleteMultipartUpload").with_attributes([("xmlns", S3_XML_NAMESPACE)]),
    ))?;
    for part in parts {
        writer.write_event(Event::Start(BytesStart::new("Part")))?;
        if let Some(e_tag) = part.e_tag() {
            write_element(&mut writer, "ETag", e_tag)?;
        }
        if let Some(number) = part.part_number() {
            write_element(&mut writer, "PartNumber", &number.to_string())?;
        }
        writer.write_event(Event::End(BytesEnd::new("Part")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("CompleteMultipartUpload")))?;
    Ok(Bytes::from(writer.into_inner()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::complete_multipart_upload::CompleteMultipartUploadOutput;
    use aws_smithy_mocks_experimental::{mock, Rule};
    use test_common::mock_client_with_stubbed_http_client;

    use crate::error::ErrorKind;
    use crate::types::{ObjectMode, Part};
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

    fn part(index: u32) -> Part {
        Part {
            index,
            size: 5 * 1024 * 1024,
            e_tag: format!("etag-{index}"),
        }
    }

    #[tokio::test]
    async fn test_complete_multipart_keeps_caller_order() {
        let complete_mpu = mock!(aws_sdk_s3::Client::complete_multipart_upload)
            .match_requests(|r| {
                let numbers: Vec<_> = r
                    .multipart_upload()
                    .map(|upload| upload.parts().iter().map(|p| p.part_number()).collect())
                    .unwrap_or_default();
                r.key() == Some("work/big.bin")
                    && r.upload_id() == Some("upload-1")
                    && numbers == vec![Some(3), Some(1), Some(2)]
            })
            .then_output(|| {
                CompleteMultipartUploadOutput::builder()
                    .e_tag("\"final\"")
                    .build()
            });
        let client = client(mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&complete_mpu]));
        let upload = client.create("big.bin", None, Some("upload-1")).unwrap();

        let object = client
            .complete_multipart()
            .object(upload)
            .parts(vec![part(2), part(0), part(1)])
            .send()
            .await
            .unwrap();
        assert_eq!(ObjectMode::READ, object.mode());
        assert_eq!(Some("\"final\""), object.e_tag());
    }

    #[tokio::test]
    async fn test_complete_requires_upload_id() {
        let rules: &[&Rule] = &[];
        let client = client(mock_client_with_stubbed_http_client!(aws_sdk_s3, rules));
        let object = client.create("a.txt", None, None).unwrap();

        let err = client
            .complete_multipart()
            .object(object)
            .parts(vec![part(0)])
            .send()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }

    #[tokio::test]
    async fn test_presigned_complete_carries_body() {
        let client = client(test_common::presigning_client());
        let upload = client.create("big.bin", None, Some("upload-1")).unwrap();

        let request = client
            .complete_multipart()
            .object(upload)
            .parts(vec![part(1), part(0)])
            .presigned(std::time::Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!("POST", request.method());
        assert!(request.uri().contains("uploadId=upload-1"));
        assert!(request.uri().contains("X-Amz-Expires=60"));
        assert!(request.uri().contains("X-Amz-Signature="));

        let body = std::str::from_utf8(request.body().unwrap()).unwrap();
        assert!(body.starts_with(
            r#"<CompleteMultipartUpload xmlns="http://s3.amazonaws.com/doc/2006-03-01/">"#
        ));
        let second = body.find("<PartNumber>2</PartNumber>").unwrap();
        let first = body.find("<PartNumber>1</PartNumber>").unwrap();
        assert!(second < first);
        assert!(body.contains("<ETag>etag-1</ETag>"));
        assert_eq!(Some(body.len() as u64), request.content_length());
    }
}
