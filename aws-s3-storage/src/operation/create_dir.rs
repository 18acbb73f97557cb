/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;
/// Request type for creating a directory marker
pub use input::{CreateDirInput, CreateDirInputBuilder};

/// Operation builders
pub mod builders;

use std::sync::Arc;

use tracing::Instrument;

use crate::client::Handle;
use crate::error::{self, Error};
use crate::operation::convert::write_system_metadata;
use crate::types::{Object, ObjectMode};

/// Operation struct for creating a directory marker object
#[derive(Clone, Default, Debug)]
pub(crate) struct CreateDir;

impl CreateDir {
    /// Execute a single `CreateDir` operation
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: CreateDirInput,
    ) -> Result<Object, Error> {
        if !handle.features().virtual_dir {
            return Err(error::unsupported_option(
                "creating directories requires virtual directories to be enabled",
            ));
        }
        let key = handle.object_key(&input.path, Some(ObjectMode::DIR))?;

        let request = handle
            .client()
            .put_object()
            .bucket(handle.bucket())
            .key(key.clone())
            .content_length(0)
            .body(aws_sdk_s3::primitives::ByteStream::from_static(b""))
            .set_storage_class(input.storage_class.clone())
            .set_expected_bucket_owner(input.expected_bucket_owner.clone());
        let output = handle
            .send(request.send().instrument(tracing::debug_span!("send-put-object")))
            .await?;

        let mut object = Object::new(key, input.path, ObjectMode::DIR);
        object.content_length = Some(0);
        object.e_tag = output.e_tag.clone();
        object.system_metadata = write_system_metadata!(output);
        object.system_metadata.storage_class = input.storage_class.map(|v| v.as_str().to_owned());
        Ok(object)
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_smithy_mocks_experimental::{mock, Rule};
    use test_common::mock_client_with_stubbed_http_client;

    use crate::error::ErrorKind;
    use crate::types::{ObjectMode, StorageFeatures};
    use crate::{Client, Config};

    fn client(s3_client: aws_sdk_s3::Client, virtual_dir: bool) -> Client {
        let config = Config::builder()
            .bucket("test-bucket")
            .work_dir("/work/")
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
    async fn test_create_dir() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| r.key() == Some("work/photos/") && r.content_length() == Some(0))
            .then_output(|| PutObjectOutput::builder().e_tag("\"d41d8cd9\"").build());
        let client = client(
            mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&put_object]),
            true,
        );

        let object = client.create_dir().path("photos").send().await.unwrap();
        assert_eq!("work/photos/", object.id());
        assert_eq!("photos", object.path());
        assert_eq!(ObjectMode::DIR, object.mode());
        assert_eq!(Some("\"d41d8cd9\""), object.e_tag());
    }

    #[tokio::test]
    async fn test_create_dir_requires_virtual_dir() {
        let rules: &[&Rule] = &[];
        let client = client(mock_client_with_stubbed_http_client!(aws_sdk_s3, rules), false);

        let err = client.create_dir().path("photos").send().await.unwrap_err();
        assert_eq!(&ErrorKind::UnsupportedOption, err.kind());
    }
}
