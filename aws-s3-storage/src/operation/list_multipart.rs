/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;
/// Request type for listing the parts of a multipart upload
pub use input::{ListMultipartInput, ListMultipartInputBuilder};

mod paginator;
/// Page iterator over uploaded parts
pub use paginator::PartPaginator;

/// Operation builders
pub mod builders;

use std::sync::Arc;
use std::time::Duration;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::convert;
use crate::presigning::{presign_captured, PresignedRequest, RequestCapture};

/// Operation struct for listing the parts of a multipart upload
#[derive(Clone, Default, Debug)]
pub(crate) struct ListMultipart;

impl ListMultipart {
    /// Start a `ListMultipart` operation. No request is sent until the first page is polled.
    pub(crate) fn orchestrate(
        handle: Arc<Handle>,
        input: ListMultipartInput,
    ) -> Result<PartPaginator, Error> {
        PartPaginator::new(handle, input)
    }

    /// Presign the `ListParts` request of the first page
    pub(crate) async fn presign(
        handle: Arc<Handle>,
        input: ListMultipartInput,
        expires_in: Duration,
    ) -> Result<PresignedRequest, Error> {
        let upload_id = input.object.require_multipart_id()?;
        let request = convert::copy_fields_to_list_parts_request(
            &handle,
            input.object.id(),
            upload_id,
            Some(handle.config.list_page_size()),
            None,
            input.expected_bucket_owner.clone(),
            handle.client().list_parts(),
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
    use crate::error::ErrorKind;
    use crate::{Client, Config};

    fn client() -> Client {
        let config = Config::builder()
            .bucket("test-bucket")
            .work_dir("/work/")
            .list_page_size(50)
            .client(test_common::presigning_client())
            .build()
            .unwrap();
        Client::new(config)
    }

    #[test]
    fn test_paginator_requires_upload_id() {
        let client = client();
        let object = client.create("a.txt", None, None).unwrap();
        let err = client
            .list_multipart()
            .object(object)
            .into_paginator()
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }

    #[tokio::test]
    async fn test_presigned_list_multipart() {
        let client = client();
        let upload = client.create("big.bin", None, Some("upload-1")).unwrap();
        let request = client
            .list_multipart()
            .object(upload)
            .presigned(std::time::Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!("GET", request.method());
        assert!(request.uri().contains("uploadId=upload-1"));
        assert!(request.uri().contains("max-parts=50"));
        assert!(request.uri().contains("X-Amz-Expires=60"));
        assert!(request.uri().contains("X-Amz-Signature="));
    }
}
