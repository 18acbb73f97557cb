/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub(crate) mod convert;

/// Types for the read (GetObject) operation
pub mod read;

/// Types for the single request write (PutObject) operation
pub mod write;

/// Types for the delete operation
pub mod delete;

/// Types for the stat operation
pub mod stat;

/// Types for the create directory operation
pub mod create_dir;

/// Types for the create link operation
pub mod create_link;

/// Types for listing objects, directories and multipart uploads
pub mod list;

/// Types for starting a multipart upload
pub mod create_multipart;

/// Types for uploading a single part of a multipart upload
pub mod write_multipart;

/// Types for completing a multipart upload
pub mod complete_multipart;

/// Types for aborting a multipart upload
pub mod abort_multipart;

/// Types for listing the parts of a multipart upload
pub mod list_multipart;
