/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::{self, Error};
use crate::path::PathMapper;
use crate::runtime::cancellation::CancellationGuard;
use crate::types::{Object, ObjectMode, StorageFeatures, StorageMeta};
use crate::Config;

/// Maximum object size for a single `PutObject` request
pub(crate) const WRITE_SIZE_MAXIMUM: u64 = 5 * 1024 * 1024 * 1024;
/// Maximum number of parts of a multipart upload
pub(crate) const MULTIPART_NUMBER_MAXIMUM: u32 = 10_000;
/// Maximum size of a single part
pub(crate) const MULTIPART_SIZE_MAXIMUM: u64 = 5 * 1024 * 1024 * 1024;
/// Minimum size of every part except the last one
pub(crate) const MULTIPART_SIZE_MINIMUM: u64 = 5 * 1024 * 1024;

/// Storage client for a single Amazon S3 bucket.
///
/// Cheap to clone, clones share the same configuration and SDK client.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations: config, path mapping and request bounds
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: Config,
    pub(crate) paths: PathMapper,
    pub(crate) guard: CancellationGuard,
}

impl Handle {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }

    pub(crate) fn bucket(&self) -> &str {
        self.config.bucket()
    }

    pub(crate) fn features(&self) -> &StorageFeatures {
        self.config.features()
    }

    /// Map the path of a (possibly directory) object to its S3 key.
    ///
    /// Directory objects get a trailing `/` and require virtual directories.
    pub(crate) fn object_key(&self, path: &str, mode: Option<ObjectMode>) -> Result<String, Error> {
        let mut key = self.paths.abs_path(path);
        if mode.is_some_and(ObjectMode::is_dir) {
            if !self.features().virtual_dir {
                return Err(error::unsupported_option(
                    "directory object mode requires virtual directories to be enabled",
                ));
            }
            key.push('/');
        }
        Ok(key)
    }

    /// Send a single request, bounded by the cancellation token and operation timeout.
    pub(crate) async fn send<F, T, E>(&self, request: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<Error>,
    {
        self.guard.run(request).await
    }
}

impl Client {
    /// Creates a new client from a storage config.
    pub fn new(config: Config) -> Client {
        let paths = PathMapper::new(config.work_dir());
        let guard = CancellationGuard::new(config.operation_timeout());
        let handle = Arc::new(Handle {
            config,
            paths,
            guard,
        });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Returns a view of this client whose requests fail with
    /// [`OperationCancelled`](crate::error::ErrorKind::OperationCancelled) once `token` is
    /// cancelled.
    ///
    /// Requests already in flight are aborted. Listing cursors are not advanced by a cancelled
    /// page fetch.
    pub fn with_cancellation(&self, token: CancellationToken) -> Client {
        let handle = Arc::new(Handle {
            config: self.handle.config.clone(),
            paths: self.handle.paths.clone(),
            guard: self.handle.guard.with_token(token),
        });
        Client { handle }
    }

    /// Static information and service limits of this storage
    pub fn metadata(&self) -> StorageMeta {
        StorageMeta {
            name: self.handle.bucket().to_owned(),
            work_dir: self.handle.config.work_dir().to_owned(),
            write_size_maximum: WRITE_SIZE_MAXIMUM,
            multipart_number_maximum: MULTIPART_NUMBER_MAXIMUM,
            multipart_size_maximum: MULTIPART_SIZE_MAXIMUM,
            multipart_size_minimum: MULTIPART_SIZE_MINIMUM,
        }
    }

    /// Construct an object view locally, without sending any request.
    ///
    /// * with a `multipart_id` the object is an in-progress multipart upload ([`ObjectMode::PART`])
    /// * with a directory `mode` the object is a directory marker ([`ObjectMode::DIR`]), which
    ///   requires virtual directories
    /// * otherwise the object is a readable file ([`ObjectMode::READ`])
    pub fn create(
        &self,
        path: &str,
        mode: Option<ObjectMode>,
        multipart_id: Option<&str>,
    ) -> Result<Object, Error> {
        if let Some(multipart_id) = multipart_id {
            let mut object = Object::new(self.handle.paths.abs_path(path), path, ObjectMode::PART);
            object.multipart_id = Some(multipart_id.to_owned());
            return Ok(object);
        }

        let key = self.handle.object_key(path, mode)?;
        let mode = if mode.is_some_and(ObjectMode::is_dir) {
            ObjectMode::DIR
        } else {
            ObjectMode::READ
        };
        Ok(Object::new(key, path, mode))
    }

    /// Read an object, or a byte range of it.
    ///
    /// Constructs a fluent builder for the
    /// [`Read`](crate::operation::read::builders::ReadFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn read(client: &aws_s3_storage::Client) -> Result<u64, aws_s3_storage::error::Error> {
    ///     let mut out = tokio::io::sink();
    ///     let output = client.read().path("logs/app.log").offset(1024).send().await?;
    ///     output.copy_to(&mut out).await
    /// }
    /// ```
    pub fn read(&self) -> crate::operation::read::builders::ReadFluentBuilder {
        crate::operation::read::builders::ReadFluentBuilder::new(self.handle.clone())
    }

    /// Write an object with a single `PutObject` request (at most 5 GiB).
    ///
    /// Constructs a fluent builder for the
    /// [`Write`](crate::operation::write::builders::WriteFluentBuilder) operation.
    pub fn write(&self) -> crate::operation::write::builders::WriteFluentBuilder {
        crate::operation::write::builders::WriteFluentBuilder::new(self.handle.clone())
    }

    /// Delete an object, directory marker, or in-progress multipart upload.
    ///
    /// Deleting something that does not exist succeeds.
    ///
    /// Constructs a fluent builder for the
    /// [`Delete`](crate::operation::delete::builders::DeleteFluentBuilder) operation.
    pub fn delete(&self) -> crate::operation::delete::builders::DeleteFluentBuilder {
        crate::operation::delete::builders::DeleteFluentBuilder::new(self.handle.clone())
    }

    /// Fetch the metadata of an object, directory marker, or multipart upload.
    ///
    /// Constructs a fluent builder for the
    /// [`Stat`](crate::operation::stat::builders::StatFluentBuilder) operation.
    pub fn stat(&self) -> crate::operation::stat::builders::StatFluentBuilder {
        crate::operation::stat::builders::StatFluentBuilder::new(self.handle.clone())
    }

    /// Create a directory marker object. Requires virtual directories.
    ///
    /// Constructs a fluent builder for the
    /// [`CreateDir`](crate::operation::create_dir::builders::CreateDirFluentBuilder) operation.
    pub fn create_dir(&self) -> crate::operation::create_dir::builders::CreateDirFluentBuilder {
        crate::operation::create_dir::builders::CreateDirFluentBuilder::new(self.handle.clone())
    }

    /// Create a virtual link object pointing at another path.
    ///
    /// Constructs a fluent builder for the
    /// [`CreateLink`](crate::operation::create_link::builders::CreateLinkFluentBuilder) operation.
    pub fn create_link(&self) -> crate::operation::create_link::builders::CreateLinkFluentBuilder {
        crate::operation::create_link::builders::CreateLinkFluentBuilder::new(self.handle.clone())
    }

    /// List objects, directories, or in-progress multipart uploads below a path.
    ///
    /// Constructs a fluent builder for the
    /// [`List`](crate::operation::list::builders::ListFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_storage::types::ListMode;
    ///
    /// async fn list(client: &aws_s3_storage::Client) -> Result<(), aws_s3_storage::error::Error> {
    ///     let mut pages = client.list().path("photos/").list_mode(ListMode::Dir).into_paginator()?;
    ///     while let Some(page) = pages.next_page().await {
    ///         for object in page? {
    ///             println!("{:?} {}", object.mode(), object.path());
    ///         }
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list(&self) -> crate::operation::list::builders::ListFluentBuilder {
        crate::operation::list::builders::ListFluentBuilder::new(self.handle.clone())
    }

    /// Start a multipart upload.
    ///
    /// Constructs a fluent builder for the
    /// [`CreateMultipart`](crate::operation::create_multipart::builders::CreateMultipartFluentBuilder)
    /// operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_sdk_s3::primitives::ByteStream;
    ///
    /// async fn upload(client: &aws_s3_storage::Client) -> Result<(), aws_s3_storage::error::Error> {
    ///     let object = client.create_multipart().path("big.bin").send().await?;
    ///     let first = client
    ///         .write_multipart()
    ///         .object(object.clone())
    ///         .index(0)
    ///         .size(5 * 1024 * 1024)
    ///         .body(ByteStream::from(vec![0u8; 5 * 1024 * 1024]))
    ///         .send()
    ///         .await?;
    ///     let object = client
    ///         .complete_multipart()
    ///         .object(object)
    ///         .parts(vec![first.part().clone()])
    ///         .send()
    ///         .await?;
    ///     assert!(object.mode().contains(aws_s3_storage::types::ObjectMode::READ));
    ///     Ok(())
    /// }
    /// ```
    pub fn create_multipart(
        &self,
    ) -> crate::operation::create_multipart::builders::CreateMultipartFluentBuilder {
        crate::operation::create_multipart::builders::CreateMultipartFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Upload one part of a multipart upload.
    ///
    /// Constructs a fluent builder for the
    /// [`WriteMultipart`](crate::operation::write_multipart::builders::WriteMultipartFluentBuilder)
    /// operation.
    pub fn write_multipart(
        &self,
    ) -> crate::operation::write_multipart::builders::WriteMultipartFluentBuilder {
        crate::operation::write_multipart::builders::WriteMultipartFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Complete a multipart upload from its uploaded parts.
    ///
    /// Constructs a fluent builder for the
    /// [`CompleteMultipart`](crate::operation::complete_multipart::builders::CompleteMultipartFluentBuilder)
    /// operation.
    pub fn complete_multipart(
        &self,
    ) -> crate::operation::complete_multipart::builders::CompleteMultipartFluentBuilder {
        crate::operation::complete_multipart::builders::CompleteMultipartFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Abort a multipart upload. Aborting an unknown upload succeeds.
    ///
    /// Constructs a fluent builder for the
    /// [`AbortMultipart`](crate::operation::abort_multipart::builders::AbortMultipartFluentBuilder)
    /// operation.
    pub fn abort_multipart(
        &self,
    ) -> crate::operation::abort_multipart::builders::AbortMultipartFluentBuilder {
        crate::operation::abort_multipart::builders::AbortMultipartFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// List the uploaded parts of a multipart upload.
    ///
    /// Constructs a fluent builder for the
    /// [`ListMultipart`](crate::operation::list_multipart::builders::ListMultipartFluentBuilder)
    /// operation.
    pub fn list_multipart(
        &self,
    ) -> crate::operation::list_multipart::builders::ListMultipartFluentBuilder {
        crate::operation::list_multipart::builders::ListMultipartFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
