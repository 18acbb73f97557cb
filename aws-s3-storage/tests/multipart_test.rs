/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_storage::types::{ObjectMode, Part};
use aws_sdk_s3::operation::abort_multipart_upload::AbortMultipartUploadOutput;
use aws_sdk_s3::operation::complete_multipart_upload::CompleteMultipartUploadOutput;
use aws_sdk_s3::operation::create_multipart_upload::CreateMultipartUploadOutput;
use aws_sdk_s3::operation::list_parts::ListPartsOutput;
use aws_sdk_s3::operation::upload_part::UploadPartOutput;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::Part as S3Part;
use aws_smithy_mocks_experimental::mock;
use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
use test_common::mock_client_with_stubbed_http_client;

const UPLOAD_ID: &str = "test-upload-id";

fn client(s3_client: aws_sdk_s3::Client) -> aws_s3_storage::Client {
    let config = aws_s3_storage::Config::builder()
        .bucket("test-bucket")
        .work_dir("/work/")
        .client(s3_client)
        .build()
        .unwrap();
    aws_s3_storage::Client::new(config)
}

fn upload_part_rule(part_number: i32) -> aws_smithy_mocks_experimental::Rule {
    mock!(aws_sdk_s3::Client::upload_part)
        .match_requests(move |r| {
            r.upload_id() == Some(UPLOAD_ID) && r.part_number() == Some(part_number)
        })
        .then_output(move || {
            UploadPartOutput::builder()
                .e_tag(format!("etag-{part_number}"))
                .build()
        })
}

#[tokio::test]
async fn test_multipart_upload_out_of_order() {
    let (_guard, _rx) = capture_test_logs();

    let create_mpu = mock!(aws_sdk_s3::Client::create_multipart_upload)
        .match_requests(|r| r.key() == Some("work/video.mp4"))
        .then_output(|| {
            CreateMultipartUploadOutput::builder()
                .upload_id(UPLOAD_ID)
                .build()
        });
    let upload_2 = upload_part_rule(3);
    let upload_0 = upload_part_rule(1);
    let list_parts = mock!(aws_sdk_s3::Client::list_parts)
        .match_requests(|r| r.upload_id() == Some(UPLOAD_ID) && r.part_number_marker().is_none())
        .then_output(|| {
            ListPartsOutput::builder()
                .is_truncated(false)
                .parts(S3Part::builder().part_number(1).size(5).e_tag("etag-1").build())
                .parts(S3Part::builder().part_number(3).size(5).e_tag("etag-3").build())
                .build()
        });
    let complete_mpu = mock!(aws_sdk_s3::Client::complete_multipart_upload)
        .match_requests(|r| {
            let sent: Vec<_> = r
                .multipart_upload()
                .map(|upload| {
                    upload
                        .parts()
                        .iter()
                        .map(|p| (p.part_number(), p.e_tag().map(str::to_owned)))
                        .collect()
                })
                .unwrap_or_default();
            sent == vec![
                (Some(3), Some("etag-3".to_owned())),
                (Some(1), Some("etag-1".to_owned())),
            ]
        })
        .then_output(|| CompleteMultipartUploadOutput::builder().e_tag("\"final\"").build());

    let client = client(mock_client_with_stubbed_http_client!(
        aws_sdk_s3,
        &[&create_mpu, &upload_2, &upload_0, &list_parts, &complete_mpu]
    ));

    let upload = client.create_multipart().path("video.mp4").send().await.unwrap();
    assert!(upload.mode().is_part());

    let mut parts = Vec::new();
    for index in [2, 0] {
        let output = client
            .write_multipart()
            .object(upload.clone())
            .index(index)
            .size(5)
            .body(ByteStream::from_static(b"01234"))
            .send()
            .await
            .unwrap();
        parts.push(output.into_part());
    }

    let mut paginator = client
        .list_multipart()
        .object(upload.clone())
        .into_paginator()
        .unwrap();
    let listed = paginator.next_page().await.unwrap().unwrap();
    assert_eq!(vec![0, 2], listed.iter().map(|p| p.index).collect::<Vec<_>>());
    assert!(paginator.next_page().await.is_none());

    let object = client
        .complete_multipart()
        .object(upload)
        .parts(parts)
        .send()
        .await
        .unwrap();
    assert_eq!(ObjectMode::READ, object.mode());
    assert_eq!("video.mp4", object.path());
}

#[tokio::test]
async fn test_part_index_round_trip() {
    for index in [0u32, 1, 4_999, 9_999] {
        let part_number = index as i32 + 1;
        let upload_part = upload_part_rule(part_number);
        let list_parts = mock!(aws_sdk_s3::Client::list_parts).then_output(move || {
            ListPartsOutput::builder()
                .parts(
                    S3Part::builder()
                        .part_number(part_number)
                        .size(1)
                        .e_tag(format!("etag-{part_number}"))
                        .build(),
                )
                .build()
        });
        let client = client(mock_client_with_stubbed_http_client!(
            aws_sdk_s3,
            &[&upload_part, &list_parts]
        ));
        let upload = client.create("big.bin", None, Some(UPLOAD_ID)).unwrap();

        let written = client
            .write_multipart()
            .object(upload.clone())
            .index(index)
            .size(1)
            .body(ByteStream::from_static(b"x"))
            .send()
            .await
            .unwrap();

        let mut paginator = client.list_multipart().object(upload).into_paginator().unwrap();
        let listed = paginator.next_page().await.unwrap().unwrap();
        assert_eq!(
            vec![Part {
                index,
                size: 1,
                e_tag: format!("etag-{part_number}"),
            }],
            listed
        );
        assert_eq!(&listed[0], written.part());
    }
}

#[tokio::test]
async fn test_delete_with_multipart_id_aborts() {
    let abort = mock!(aws_sdk_s3::Client::abort_multipart_upload)
        .match_requests(|r| r.key() == Some("work/big.bin") && r.upload_id() == Some(UPLOAD_ID))
        .then_output(|| AbortMultipartUploadOutput::builder().build());
    let client = client(mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&abort]));

    client
        .delete()
        .path("big.bin")
        .multipart_id(UPLOAD_ID)
        .send()
        .await
        .unwrap();
}
