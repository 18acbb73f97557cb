/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

use aws_smithy_types::error::operation::BuildError;
use aws_types::region::Region;
use aws_types::SdkConfig;

use crate::config::Builder;
use crate::types::StorageFeatures;
use crate::Config;

/// Load storage [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    region: Option<Region>,
    endpoint_url: Option<String>,
    force_path_style: Option<bool>,
}

impl ConfigLoader {
    /// The bucket every operation targets.
    /// Required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.builder = self.builder.bucket(bucket);
        self
    }

    /// The working directory all storage paths are relative to. Default is `/`.
    pub fn work_dir(mut self, work_dir: impl Into<String>) -> Self {
        self.builder = self.builder.work_dir(work_dir);
        self
    }

    /// Enable or disable virtual directories and links.
    pub fn features(mut self, features: StorageFeatures) -> Self {
        self.builder = self.builder.features(features);
        self
    }

    /// Maximum number of entries requested per listing page. Default is 200.
    pub fn list_page_size(mut self, page_size: i32) -> Self {
        self.builder = self.builder.list_page_size(page_size);
        self
    }

    /// Deadline for every individual request sent to S3.
    pub fn operation_timeout(mut self, timeout: Duration) -> Self {
        self.builder = self.builder.operation_timeout(timeout);
        self
    }

    /// Override the region resolved from the environment (the bucket location).
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(Region::new(region.into()));
        self
    }

    /// Send requests to a custom endpoint, e.g. an S3 compatible service.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Use path-style addressing (`https://host/bucket/key`) instead of virtual hosted-style.
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = Some(force_path_style);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Result<Config, BuildError> {
        let mut loader = aws_config::from_env();
        if let Some(region) = self.region.clone() {
            loader = loader.region(region);
        }
        if let Some(endpoint_url) = self.endpoint_url.clone() {
            loader = loader.endpoint_url(endpoint_url);
        }
        let shared_config = loader.load().await;
        self.build_with(&shared_config)
    }

    /// Build the storage config around an S3 client derived from `shared_config`
    fn build_with(self, shared_config: &SdkConfig) -> Result<Config, BuildError> {
        let mut s3_config = aws_sdk_s3::config::Builder::from(shared_config);
        s3_config.set_force_path_style(self.force_path_style);
        let s3_client = aws_sdk_s3::Client::from_conf(s3_config.build());
        self.builder.client(s3_client).build()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region, SharedCredentialsProvider};
    use aws_types::SdkConfig;

    use super::ConfigLoader;
    use crate::Client;

    fn shared_config() -> SdkConfig {
        SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("eu-west-1"))
            .endpoint_url("http://localhost:9000")
            .credentials_provider(SharedCredentialsProvider::new(Credentials::new(
                "AKID", "secret", None, None, "test",
            )))
            .build()
    }

    #[tokio::test]
    async fn test_loader_applies_overrides() {
        let config = ConfigLoader::default()
            .bucket("test-bucket")
            .work_dir("/work/")
            .list_page_size(10)
            .operation_timeout(Duration::from_secs(5))
            .force_path_style(true)
            .build_with(&shared_config())
            .unwrap();

        assert_eq!("test-bucket", config.bucket());
        assert_eq!("/work/", config.work_dir());
        assert_eq!(10, config.list_page_size());
        assert_eq!(Some(Duration::from_secs(5)), config.operation_timeout());
        assert_eq!(
            Some("eu-west-1"),
            config.client().config().region().map(|r| r.as_ref())
        );

        // path-style addressing against the custom endpoint
        let request = Client::new(config)
            .read()
            .path("a.txt")
            .presigned(Duration::from_secs(60))
            .await
            .unwrap();
        assert!(request
            .uri()
            .starts_with("http://localhost:9000/test-bucket/work/a.txt?"));
    }

    #[test]
    fn test_loader_requires_bucket() {
        let err = ConfigLoader::default()
            .build_with(&shared_config())
            .unwrap_err();
        assert!(err.to_string().contains("bucket"));
    }
}
