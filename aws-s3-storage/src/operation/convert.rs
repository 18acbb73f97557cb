/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::{
    abort_multipart_upload::builders::AbortMultipartUploadFluentBuilder,
    complete_multipart_upload::builders::CompleteMultipartUploadFluentBuilder,
    create_multipart_upload::builders::CreateMultipartUploadFluentBuilder,
    delete_object::builders::DeleteObjectFluentBuilder,
    get_object::builders::GetObjectFluentBuilder, head_object::builders::HeadObjectFluentBuilder,
    list_parts::builders::ListPartsFluentBuilder, put_object::builders::PutObjectFluentBuilder,
    upload_part::builders::UploadPartFluentBuilder,
};
use aws_sdk_s3::types::{CompletedMultipartUpload, CompletedPart};

use crate::client::Handle;
use crate::error::{self, Error};
use crate::http::header::ByteRange;
use crate::operation::complete_multipart::CompleteMultipartInput;
use crate::operation::create_multipart::CreateMultipartInput;
use crate::operation::delete::DeleteInput;
use crate::operation::read::ReadInput;
use crate::operation::stat::StatInput;
use crate::operation::write::WriteInput;
use crate::operation::write_multipart::WriteMultipartInput;
use crate::sse::{encode_kms_context, CustomerKeyHeaders};
use crate::types::ServerSideEncryptionConfig;

/// S3 part numbers are one-based, part indices are zero-based.
pub(crate) fn to_part_number(index: u32) -> Result<i32, Error> {
    i32::try_from(index)
        .ok()
        .and_then(|index| index.checked_add(1))
        .ok_or_else(|| error::invalid_input(format!("part index {} is out of range", index)))
}

/// Inverse of [`to_part_number`] for part numbers returned by S3.
pub(crate) fn to_part_index(number: i32) -> Result<u32, Error> {
    number
        .checked_sub(1)
        .and_then(|index| u32::try_from(index).ok())
        .ok_or_else(|| {
            Error::new(
                error::ErrorKind::Unexpected,
                format!("invalid part number {} returned by S3", number),
            )
        })
}

pub(crate) fn to_content_length(size: u64) -> Result<i64, Error> {
    i64::try_from(size).map_err(error::invalid_input)
}

/// Apply the SSE-C headers when a customer key is set.
macro_rules! set_customer_key {
    ($builder:expr, $headers:expr) => {{
        let headers: Option<CustomerKeyHeaders> = $headers;
        match headers {
            Some(headers) => $builder
                .sse_customer_algorithm(headers.algorithm)
                .sse_customer_key(headers.key)
                .sse_customer_key_md5(headers.key_md5),
            None => $builder,
        }
    }};
}

/// Apply the server-side encryption settings shared by `PutObject` and `CreateMultipartUpload`.
macro_rules! set_server_side_encryption {
    ($builder:expr, $encryption:expr) => {{
        let encryption: Option<&ServerSideEncryptionConfig> = $encryption;
        match encryption {
            Some(encryption) => $builder
                .set_bucket_key_enabled(encryption.bucket_key_enabled)
                .set_ssekms_key_id(encryption.aws_kms_key_id.clone())
                .set_ssekms_encryption_context(encryption.context.as_deref().map(encode_kms_context))
                .set_server_side_encryption(encryption.algorithm.clone()),
            None => $builder,
        }
    }};
}

/// Copy fields from `ReadInput` to `GetObjectFluentBuilder`
pub(crate) fn copy_fields_to_get_object_request(
    handle: &Handle,
    input: &ReadInput,
    get_object_builder: GetObjectFluentBuilder,
) -> Result<GetObjectFluentBuilder, Error> {
    let range = ByteRange::from_offset_size(input.offset, input.size)?;
    let customer_key = CustomerKeyHeaders::from_optional(input.sse_customer_key.as_ref())?;

    let get_object_builder = get_object_builder
        .bucket(handle.bucket())
        .key(handle.paths.abs_path(&input.path))
        .set_range(range.map(|range| range.to_string()))
        .set_expected_bucket_owner(input.expected_bucket_owner.clone());

    Ok(set_customer_key!(get_object_builder, customer_key))
}

/// Copy fields from `WriteInput` to `PutObjectFluentBuilder`.
///
/// The body is not copied.
pub(crate) fn copy_fields_to_put_object_request(
    handle: &Handle,
    input: &WriteInput,
    put_object_builder: PutObjectFluentBuilder,
) -> Result<PutObjectFluentBuilder, Error> {
    let customer_key = CustomerKeyHeaders::from_optional(input.sse_customer_key.as_ref())?;

    let put_object_builder = put_object_builder
        .bucket(handle.bucket())
        .key(handle.paths.abs_path(&input.path))
        .content_length(to_content_length(input.size)?)
        .set_content_md5(input.content_md5.clone())
        .set_content_type(input.content_type.clone())
        .set_storage_class(input.storage_class.clone())
        .set_expected_bucket_owner(input.expected_bucket_owner.clone());
    let put_object_builder =
        set_server_side_encryption!(put_object_builder, input.server_side_encryption.as_ref());

    Ok(set_customer_key!(put_object_builder, customer_key))
}

/// Copy fields from `DeleteInput` to `DeleteObjectFluentBuilder`
pub(crate) fn copy_fields_to_delete_object_request(
    handle: &Handle,
    input: &DeleteInput,
    delete_object_builder: DeleteObjectFluentBuilder,
) -> Result<DeleteObjectFluentBuilder, Error> {
    let key = handle.object_key(&input.path, input.object_mode)?;
    Ok(delete_object_builder
        .bucket(handle.bucket())
        .key(key)
        .set_expected_bucket_owner(input.expected_bucket_owner.clone()))
}

/// Build an `AbortMultipartUpload` request for the upload `upload_id` of `key`
pub(crate) fn copy_fields_to_abort_mpu_request(
    handle: &Handle,
    key: impl Into<String>,
    upload_id: impl Into<String>,
    expected_bucket_owner: Option<String>,
    abort_mpu_builder: AbortMultipartUploadFluentBuilder,
) -> AbortMultipartUploadFluentBuilder {
    abort_mpu_builder
        .bucket(handle.bucket())
        .key(key)
        .upload_id(upload_id)
        .set_expected_bucket_owner(expected_bucket_owner)
}

/// Copy fields from `StatInput` to `HeadObjectFluentBuilder`
pub(crate) fn copy_fields_to_head_object_request(
    handle: &Handle,
    input: &StatInput,
    head_object_builder: HeadObjectFluentBuilder,
) -> Result<HeadObjectFluentBuilder, Error> {
    let key = handle.object_key(&input.path, input.object_mode)?;
    let customer_key = CustomerKeyHeaders::from_optional(input.sse_customer_key.as_ref())?;

    let head_object_builder = head_object_builder
        .bucket(handle.bucket())
        .key(key)
        .set_expected_bucket_owner(input.expected_bucket_owner.clone());

    Ok(set_customer_key!(head_object_builder, customer_key))
}

/// Copy fields from `CreateMultipartInput` to `CreateMultipartUploadFluentBuilder`
pub(crate) fn copy_fields_to_mpu_request(
    handle: &Handle,
    input: &CreateMultipartInput,
    mpu_builder: CreateMultipartUploadFluentBuilder,
) -> Result<CreateMultipartUploadFluentBuilder, Error> {
    let customer_key = CustomerKeyHeaders::from_optional(input.sse_customer_key.as_ref())?;

    let mpu_builder = mpu_builder
        .bucket(handle.bucket())
        .key(handle.paths.abs_path(&input.path))
        .set_content_type(input.content_type.clone())
        .set_storage_class(input.storage_class.clone())
        .set_expected_bucket_owner(input.expected_bucket_owner.clone());
    let mpu_builder = set_server_side_encryption!(mpu_builder, input.server_side_encryption.as_ref());

    Ok(set_customer_key!(mpu_builder, customer_key))
}

/// Copy fields from `WriteMultipartInput` to `UploadPartFluentBuilder`.
///
/// The body is not copied.
pub(crate) fn copy_fields_to_upload_part_request(
    handle: &Handle,
    input: &WriteMultipartInput,
    upload_part_builder: UploadPartFluentBuilder,
) -> Result<UploadPartFluentBuilder, Error> {
    let upload_id = input.object.require_multipart_id()?;
    let customer_key = CustomerKeyHeaders::from_optional(input.sse_customer_key.as_ref())?;

    let upload_part_builder = upload_part_builder
        .bucket(handle.bucket())
        .key(input.object.id())
        .upload_id(upload_id)
        .part_number(to_part_number(input.index)?)
        .content_length(to_content_length(input.size)?)
        .set_content_md5(input.content_md5.clone())
        .set_expected_bucket_owner(input.expected_bucket_owner.clone());

    Ok(set_customer_key!(upload_part_builder, customer_key))
}

/// Parts in the order given by the caller, with their wire part numbers
pub(crate) fn completed_parts(input: &CompleteMultipartInput) -> Result<Vec<CompletedPart>, Error> {
    input
        .parts
        .iter()
        .map(|part| {
            Ok(CompletedPart::builder()
                .e_tag(part.e_tag.clone())
                .part_number(to_part_number(part.index)?)
                .build())
        })
        .collect()
}

/// Copy fields from `CompleteMultipartInput` to `CompleteMultipartUploadFluentBuilder`
pub(crate) fn copy_fields_to_complete_mpu_request(
    handle: &Handle,
    input: &CompleteMultipartInput,
    complete_mpu_builder: CompleteMultipartUploadFluentBuilder,
) -> Result<CompleteMultipartUploadFluentBuilder, Error> {
    let upload_id = input.object.require_multipart_id()?;
    let upload = CompletedMultipartUpload::builder()
        .set_parts(Some(completed_parts(input)?))
        .build();

    Ok(complete_mpu_builder
        .bucket(handle.bucket())
        .key(input.object.id())
        .upload_id(upload_id)
        .multipart_upload(upload)
        .set_expected_bucket_owner(input.expected_bucket_owner.clone()))
}

/// Build a `ListParts` request for one page of parts
pub(crate) fn copy_fields_to_list_parts_request(
    handle: &Handle,
    key: impl Into<String>,
    upload_id: impl Into<String>,
    max_parts: Option<i32>,
    part_number_marker: Option<String>,
    expected_bucket_owner: Option<String>,
    list_parts_builder: ListPartsFluentBuilder,
) -> ListPartsFluentBuilder {
    list_parts_builder
        .bucket(handle.bucket())
        .key(key)
        .upload_id(upload_id)
        .set_max_parts(max_parts)
        .set_part_number_marker(part_number_marker)
        .set_expected_bucket_owner(expected_bucket_owner)
}

/// Collect the S3 specific metadata echoed by a write style response.
///
/// Works for every output exposing the SSE accessors of `PutObjectOutput`.
macro_rules! write_system_metadata {
    ($output:expr) => {{
        let output = &$output;
        let mut sm = $crate::types::ObjectSystemMetadata::default();
        sm.server_side_encryption = output
            .server_side_encryption()
            .map(|v| v.as_str().to_owned());
        sm.aws_kms_key_id = output.ssekms_key_id().map(str::to_owned);
        sm.encryption_context = output.ssekms_encryption_context().map(str::to_owned);
        sm.customer_algorithm = output.sse_customer_algorithm().map(str::to_owned);
        sm.customer_key_md5 = output.sse_customer_key_md5().map(str::to_owned);
        sm.bucket_key_enabled = output.bucket_key_enabled();
        sm
    }};
}
pub(crate) use write_system_metadata;

#[cfg(test)]
mod tests {
    use super::{to_part_index, to_part_number};
    use crate::error::ErrorKind;

    #[test]
    fn test_part_number_translation() {
        assert_eq!(1, to_part_number(0).unwrap());
        assert_eq!(10_000, to_part_number(9_999).unwrap());
        for index in [0u32, 1, 42, 9_999] {
            assert_eq!(index, to_part_index(to_part_number(index).unwrap()).unwrap());
        }
    }

    #[test]
    fn test_invalid_part_numbers() {
        assert_eq!(
            &ErrorKind::Unexpected,
            to_part_index(0).unwrap_err().kind()
        );
        assert_eq!(
            &ErrorKind::InputInvalid,
            to_part_number(u32::MAX).unwrap_err().kind()
        );
    }
}
