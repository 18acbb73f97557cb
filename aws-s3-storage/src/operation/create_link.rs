/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;
/// Request type for creating a virtual link
pub use input::{CreateLinkInput, CreateLinkInputBuilder};

/// Operation builders
pub mod builders;

use std::sync::Arc;

use tracing::Instrument;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::convert::write_system_metadata;
use crate::types::{Object, ObjectMode};

/// User metadata key holding the absolute key a link points at
pub(crate) const LINK_TARGET_METADATA_KEY: &str = "bs-link-target";

/// Operation struct for creating a virtual link
#[derive(Clone, Default, Debug)]
pub(crate) struct CreateLink;

impl CreateLink {
    /// Execute a single `CreateLink` operation
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: CreateLinkInput,
    ) -> Result<Object, Error> {
        let key = handle.paths.abs_path(&input.path);
        let target = handle.paths.abs_path(&input.target);

        let request = handle
            .client()
            .put_object()
            .bucket(handle.bucket())
            .key(key.clone())
            .metadata(LINK_TARGET_METADATA_KEY, target.clone())
            .content_length(0)
            .body(aws_sdk_s3::primitives::ByteStream::from_static(b""))
            .set_expected_bucket_owner(input.expected_bucket_owner.clone());
        let output = handle
            .send(request.send().instrument(tracing::debug_span!("send-put-object")))
            .await?;

        let mut object = Object::new(key, input.path, ObjectMode::empty());
        if handle.features().virtual_link {
            object.mode.insert(ObjectMode::LINK);
            object.link_target = Some(format!("/{}", target));
        } else {
            object.mode.insert(ObjectMode::READ);
        }
        object.content_length = Some(0);
        object.e_tag = output.e_tag.clone();
        object.system_metadata = write_system_metadata!(output);
        Ok(object)
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_smithy_mocks_experimental::mock;
    use test_common::mock_client_with_stubbed_http_client;

    use crate::types::{ObjectMode, StorageFeatures};
    use crate::{Client, Config};

    fn client(s3_client: aws_sdk_s3::Client, virtual_link: bool) -> Client {
        let config = Config::builder()
            .bucket("test-bucket")
            .work_dir("/work/")
            .features(StorageFeatures {
                virtual_dir: false,
                virtual_link,
            })
            .client(s3_client)
            .build()
            .unwrap();
        Client::new(config)
    }

    #[tokio::test]
    async fn test_create_link() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| {
                r.key() == Some("work/current")
                    && r.content_length() == Some(0)
                    && r.metadata()
                        .and_then(|m| m.get("bs-link-target"))
                        .map(String::as_str)
                        == Some("work/releases/v2")
            })
            .then_output(|| PutObjectOutput::builder().build());
        let client = client(
            mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&put_object]),
            true,
        );

        let object = client
            .create_link()
            .path("current")
            .target("releases/v2")
            .send()
            .await
            .unwrap();
        assert_eq!(ObjectMode::LINK, object.mode());
        assert_eq!(Some("/work/releases/v2"), object.link_target());
    }

    #[tokio::test]
    async fn test_create_link_without_virtual_link() {
        let put_object =
            mock!(aws_sdk_s3::Client::put_object).then_output(|| PutObjectOutput::builder().build());
        let client = client(
            mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&put_object]),
            false,
        );

        let object = client
            .create_link()
            .path("current")
            .target("releases/v2")
            .send()
            .await
            .unwrap();
        assert_eq!(ObjectMode::READ, object.mode());
        assert_eq!(None, object.link_target());
    }
}
