/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::ProvideErrorMetadata;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of storage errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// The object, key or multipart upload does not exist
    NotFound,

    /// Access to the resource was refused
    PermissionDenied,

    /// A service limit (object size, part size, part number) would be exceeded.
    ///
    /// Always raised before any request is sent.
    RestrictionViolated,

    /// The requested feature (e.g. virtual directories) is disabled for this storage
    UnsupportedOption,

    /// The server-side encryption customer key is not a 256 bit key
    EncryptionKeyInvalid,

    /// I/O errors
    IOError,

    /// The operation was cancelled or its deadline elapsed before it completed
    OperationCancelled,

    /// Any other service or runtime failure
    Unexpected,
}

impl Error {
    /// Creates a new storage [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::PermissionDenied => write!(f, "permission denied"),
            ErrorKind::RestrictionViolated => write!(f, "service restriction violated"),
            ErrorKind::UnsupportedOption => write!(f, "unsupported option"),
            ErrorKind::EncryptionKeyInvalid => {
                write!(f, "invalid server-side encryption customer key")
            }
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::OperationCancelled => write!(f, "operation cancelled"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<aws_sdk_s3::presigning::PresigningConfigError> for Error {
    fn from(value: aws_sdk_s3::presigning::PresigningConfigError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<aws_sigv4::http_request::SigningError> for Error {
    fn from(value: aws_sigv4::http_request::SigningError) -> Self {
        Self::new(ErrorKind::Unexpected, value)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(value: quick_xml::Error) -> Self {
        Self::new(ErrorKind::Unexpected, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn restriction_violated<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::RestrictionViolated, err)
}

pub(crate) fn unsupported_option<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::UnsupportedOption, err)
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        // the SDK derives "NotFound" from the status code for bodiless responses (e.g. HeadObject)
        let kind = match value.code() {
            Some("NotFound" | "NoSuchKey" | "NoSuchUpload" | "NoSuchBucket") => ErrorKind::NotFound,
            Some("AccessDenied") => ErrorKind::PermissionDenied,
            _ => ErrorKind::Unexpected,
        };

        Error::new(kind, value)
    }
}

static CANCELLATION_ERROR: &str = "the operation was cancelled before the request completed";

pub(crate) fn operation_cancelled() -> Error {
    Error::new(ErrorKind::OperationCancelled, CANCELLATION_ERROR)
}

pub(crate) fn deadline_elapsed(elapsed: tokio::time::error::Elapsed) -> Error {
    Error::new(ErrorKind::OperationCancelled, elapsed)
}
