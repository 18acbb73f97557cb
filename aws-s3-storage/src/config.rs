/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

use aws_sdk_s3::config::retry::RetryConfig;
use aws_smithy_types::error::operation::BuildError;

use crate::types::StorageFeatures;

/// Configuration loading via the environment
pub mod loader;

/// Default number of entries requested per listing page
pub(crate) const DEFAULT_LIST_PAGE_SIZE: i32 = 200;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    bucket: String,
    work_dir: String,
    features: StorageFeatures,
    list_page_size: i32,
    operation_timeout: Option<Duration>,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The bucket every operation targets
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The working directory, all paths are relative to it
    pub fn work_dir(&self) -> &str {
        &self.work_dir
    }

    /// Enabled storage features
    pub fn features(&self) -> &StorageFeatures {
        &self.features
    }

    /// Maximum number of entries requested per listing page
    pub fn list_page_size(&self) -> i32 {
        self.list_page_size
    }

    /// Deadline applied to every individual request, if any
    pub fn operation_timeout(&self) -> Option<Duration> {
        self.operation_timeout
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    bucket: Option<String>,
    work_dir: Option<String>,
    features: StorageFeatures,
    list_page_size: Option<i32>,
    operation_timeout: Option<Duration>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// The bucket every operation targets.
    /// Required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// The working directory all storage paths are relative to.
    ///
    /// Expected to start and end with `/`. Default is `/`.
    pub fn work_dir(mut self, work_dir: impl Into<String>) -> Self {
        self.work_dir = Some(work_dir.into());
        self
    }

    /// Enable or disable virtual directories and links.
    ///
    /// Both are disabled by default.
    pub fn features(mut self, features: StorageFeatures) -> Self {
        self.features = features;
        self
    }

    /// Maximum number of entries requested per listing page.
    ///
    /// Default is 200. S3 caps pages at 1000 entries.
    pub fn list_page_size(mut self, page_size: i32) -> Self {
        self.list_page_size = Some(page_size);
        self
    }

    /// Deadline for every individual request sent to S3.
    ///
    /// A request that does not complete in time fails with
    /// [`OperationCancelled`](crate::error::ErrorKind::OperationCancelled).
    pub fn operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = Some(timeout);
        self
    }

    /// Set an explicit S3 client to use.
    /// Required.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    ///
    /// Retries of the given client are disabled: request bodies may not be rewindable.
    pub fn build(self) -> Result<Config, BuildError> {
        let bucket = self
            .bucket
            .ok_or_else(|| BuildError::missing_field("bucket", "a bucket is required"))?;
        let client = self
            .client
            .ok_or_else(|| BuildError::missing_field("client", "an S3 client is required"))?;
        let list_page_size = self.list_page_size.unwrap_or(DEFAULT_LIST_PAGE_SIZE);
        if list_page_size <= 0 {
            return Err(BuildError::invalid_field(
                "list_page_size",
                "list page size must be positive",
            ));
        }

        let client = aws_sdk_s3::Client::from_conf(
            client
                .config()
                .to_builder()
                .retry_config(RetryConfig::disabled())
                .build(),
        );

        Ok(Config {
            bucket,
            work_dir: self.work_dir.unwrap_or_else(|| "/".to_owned()),
            features: self.features,
            list_page_size,
            operation_timeout: self.operation_timeout,
            client,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::types::StorageFeatures;

    use super::Config;

    fn client() -> aws_sdk_s3::Client {
        test_common::presigning_client()
    }

    #[test]
    fn test_defaults() {
        let config = Config::builder()
            .bucket("test-bucket")
            .client(client())
            .build()
            .unwrap();
        assert_eq!("test-bucket", config.bucket());
        assert_eq!("/", config.work_dir());
        assert_eq!(200, config.list_page_size());
        assert_eq!(&StorageFeatures::default(), config.features());
        assert!(config.operation_timeout().is_none());
    }

    #[test]
    fn test_retries_disabled() {
        let config = Config::builder()
            .bucket("test-bucket")
            .client(client())
            .build()
            .unwrap();
        let retry = config.client().config().retry_config().expect("retry config");
        assert_eq!(1, retry.max_attempts());
    }

    #[test]
    fn test_required_fields() {
        assert!(Config::builder().client(client()).build().is_err());
        assert!(Config::builder().bucket("b").build().is_err());
        assert!(Config::builder()
            .bucket("b")
            .client(client())
            .list_page_size(0)
            .build()
            .is_err());
    }
}
