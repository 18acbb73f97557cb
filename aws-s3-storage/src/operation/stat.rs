/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod input;
/// Request type for fetching object metadata
pub use input::{StatInput, StatInputBuilder};

/// Operation builders
pub mod builders;

use std::sync::Arc;

use aws_sdk_s3::operation::head_object::HeadObjectOutput;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::Error;
use crate::operation::convert;
use crate::operation::create_link::LINK_TARGET_METADATA_KEY;
use crate::types::{Object, ObjectMode, ObjectSystemMetadata};

/// Operation struct for fetching object metadata
#[derive(Clone, Default, Debug)]
pub(crate) struct Stat;

impl Stat {
    /// Execute a single `Stat` operation
    pub(crate) async fn orchestrate(handle: Arc<Handle>, input: StatInput) -> Result<Object, Error> {
        if let Some(upload_id) = &input.multipart_id {
            return stat_multipart(&handle, &input, upload_id).await;
        }

        let request = convert::copy_fields_to_head_object_request(
            &handle,
            &input,
            handle.client().head_object(),
        )?;
        let key = request.get_key().clone().unwrap_or_default();
        let output = handle
            .send(request.send().instrument(tracing::debug_span!("send-head-object")))
            .await?;

        let is_dir = input.object_mode.is_some_and(ObjectMode::is_dir);
        Ok(object_from_head(&handle, key, input.path, is_dir, &output))
    }
}

/// An upload exists if its parts can be listed
async fn stat_multipart(handle: &Handle, input: &StatInput, upload_id: &str) -> Result<Object, Error> {
    let key = handle.paths.abs_path(&input.path);
    let request = convert::copy_fields_to_list_parts_request(
        handle,
        key.clone(),
        upload_id,
        None,
        None,
        input.expected_bucket_owner.clone(),
        handle.client().list_parts(),
    );
    handle
        .send(request.send().instrument(tracing::debug_span!("send-list-parts")))
        .await?;

    let mut object = Object::new(key, input.path.clone(), ObjectMode::PART);
    object.multipart_id = Some(upload_id.to_owned());
    Ok(object)
}

fn object_from_head(
    handle: &Handle,
    key: String,
    path: String,
    is_dir: bool,
    output: &HeadObjectOutput,
) -> Object {
    let mut object = Object::new(key, path, ObjectMode::empty());

    let link_target = output
        .metadata()
        .and_then(|metadata| metadata.get(LINK_TARGET_METADATA_KEY));
    match link_target {
        Some(target) if handle.features().virtual_link => {
            object.mode.insert(ObjectMode::LINK);
            // keys have no leading separator, link targets are absolute paths
            object.link_target = Some(format!("/{}", target));
        }
        Some(_) => object.mode.insert(ObjectMode::READ),
        None if is_dir => object.mode.insert(ObjectMode::DIR),
        None => object.mode.insert(ObjectMode::READ),
    }

    object.content_length = output
        .content_length()
        .and_then(|len| u64::try_from(len).ok());
    object.last_modified = output.last_modified().cloned();
    object.content_type = output.content_type().map(str::to_owned);
    object.e_tag = output.e_tag().map(str::to_owned);

    let mut sm = ObjectSystemMetadata::default();
    sm.storage_class = output.storage_class().map(|v| v.as_str().to_owned());
    sm.server_side_encryption = output
        .server_side_encryption()
        .map(|v| v.as_str().to_owned());
    sm.aws_kms_key_id = output.ssekms_key_id().map(str::to_owned);
    sm.customer_algorithm = output.sse_customer_algorithm().map(str::to_owned);
    sm.customer_key_md5 = output.sse_customer_key_md5().map(str::to_owned);
    sm.bucket_key_enabled = output.bucket_key_enabled();
    object.system_metadata = sm;

    object
}
