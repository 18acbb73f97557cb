/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! An object storage backend for a single Amazon S3 bucket.
//!
//! Storage paths are relative to a working directory inside the bucket. On top of plain object
//! I/O the client offers multipart uploads with zero-based part indices, paginated listing by
//! prefix, by directory or of in-progress uploads, and presigned requests for every operation
//! that can be carried out by a third party.
//!
//! # Examples
//!
//! Load the default configuration:
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = aws_s3_storage::from_env().bucket("my-bucket").work_dir("/data/").load().await?;
//! let client = aws_s3_storage::Client::new(config);
//! # Ok(())
//! # }
//! ```
//!
//! Presign a download:
//!
//! ```no_run
//! # async fn example(client: aws_s3_storage::Client) -> Result<(), aws_s3_storage::error::Error> {
//! let request = client
//!     .read()
//!     .path("reports/2024.csv")
//!     .presigned(std::time::Duration::from_secs(900))
//!     .await?;
//! println!("{} {}", request.method(), request.uri());
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`read`](crate::Client::read), [`write`](crate::Client::write),
//!   [`stat`](crate::Client::stat), [`delete`](crate::Client::delete) - single objects
//! * [`list`](crate::Client::list) - paginated listing
//! * [`create_multipart`](crate::Client::create_multipart),
//!   [`write_multipart`](crate::Client::write_multipart),
//!   [`complete_multipart`](crate::Client::complete_multipart),
//!   [`abort_multipart`](crate::Client::abort_multipart),
//!   [`list_multipart`](crate::Client::list_multipart) - multipart uploads

/// Error types emitted by `aws-s3-storage`
pub mod error;

/// Common types used by `aws-s3-storage`
pub mod types;

/// Storage client
pub mod client;

/// Storage operations
pub mod operation;

/// Storage configuration
pub mod config;

/// Presigned requests
pub mod presigning;

/// HTTP related components and utils
pub(crate) mod http;

/// Mapping between storage paths and S3 keys
pub(crate) mod path;

/// Internal runtime components
pub(crate) mod runtime;

/// Server-side encryption helpers
pub(crate) mod sse;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
