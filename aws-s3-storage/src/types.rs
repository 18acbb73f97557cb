/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use aws_smithy_types::DateTime;

/// The set of modes an [`Object`] is in.
///
/// Modes combine: a listed object may be `READ` and later discovered to also be a `LINK`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjectMode(u8);

impl ObjectMode {
    /// The object content can be read.
    pub const READ: ObjectMode = ObjectMode(1);
    /// The object is a directory (a `/` terminated marker key or a common prefix).
    pub const DIR: ObjectMode = ObjectMode(1 << 1);
    /// The object is an in-progress multipart upload.
    pub const PART: ObjectMode = ObjectMode(1 << 2);
    /// The object is a virtual link to another path.
    pub const LINK: ObjectMode = ObjectMode(1 << 3);

    /// An empty mode set.
    pub const fn empty() -> Self {
        ObjectMode(0)
    }

    /// Returns true if all of the modes in `other` are set.
    pub const fn contains(self, other: ObjectMode) -> bool {
        self.0 & other.0 == other.0
    }

    /// Add the modes in `other`.
    pub fn insert(&mut self, other: ObjectMode) {
        self.0 |= other.0;
    }

    /// Remove the modes in `other`.
    pub fn remove(&mut self, other: ObjectMode) {
        self.0 &= !other.0;
    }

    /// Returns true if the directory mode is set.
    pub const fn is_dir(self) -> bool {
        self.contains(Self::DIR)
    }

    /// Returns true if the multipart mode is set.
    pub const fn is_part(self) -> bool {
        self.contains(Self::PART)
    }
}

impl BitOr for ObjectMode {
    type Output = ObjectMode;

    fn bitor(self, rhs: Self) -> Self::Output {
        ObjectMode(self.0 | rhs.0)
    }
}

impl BitOrAssign for ObjectMode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs)
    }
}

impl fmt::Debug for ObjectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::READ, "READ"),
            (Self::DIR, "DIR"),
            (Self::PART, "PART"),
            (Self::LINK, "LINK"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(mode, _)| self.contains(*mode))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "ObjectMode({})", set.join(" | "))
    }
}

/// S3 specific system metadata of an object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ObjectSystemMetadata {
    /// Storage class of the object
    pub storage_class: Option<String>,
    /// Server-side encryption algorithm (e.g. `AES256`, `aws:kms`)
    pub server_side_encryption: Option<String>,
    /// ID of the KMS key used for the object
    pub aws_kms_key_id: Option<String>,
    /// Base64 encoded KMS encryption context
    pub encryption_context: Option<String>,
    /// Customer provided key algorithm
    pub customer_algorithm: Option<String>,
    /// Base64 MD5 digest of the customer provided key
    pub customer_key_md5: Option<String>,
    /// Whether an S3 Bucket Key is used for SSE-KMS
    pub bucket_key_enabled: Option<bool>,
}

/// A transient view over a remote object, upload, or directory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    pub(crate) id: String,
    pub(crate) path: String,
    pub(crate) mode: ObjectMode,
    pub(crate) multipart_id: Option<String>,
    pub(crate) link_target: Option<String>,
    pub(crate) content_length: Option<u64>,
    pub(crate) content_type: Option<String>,
    pub(crate) e_tag: Option<String>,
    pub(crate) last_modified: Option<DateTime>,
    pub(crate) system_metadata: ObjectSystemMetadata,
}

impl Object {
    pub(crate) fn new(id: impl Into<String>, path: impl Into<String>, mode: ObjectMode) -> Self {
        Object {
            id: id.into(),
            path: path.into(),
            mode,
            ..Default::default()
        }
    }

    /// The absolute S3 key of the object
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The path relative to the storage working directory
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The object's mode set
    pub fn mode(&self) -> ObjectMode {
        self.mode
    }

    /// The multipart upload ID, if this object is an in-progress multipart upload
    pub fn multipart_id(&self) -> Option<&str> {
        self.multipart_id.as_deref()
    }

    /// The link target, if this object is a virtual link
    pub fn link_target(&self) -> Option<&str> {
        self.link_target.as_deref()
    }

    /// Size of the object content in bytes
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// The content type reported by the service
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Entity tag of the object
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Last modification time of the object
    pub fn last_modified(&self) -> Option<&DateTime> {
        self.last_modified.as_ref()
    }

    /// S3 specific metadata
    pub fn system_metadata(&self) -> &ObjectSystemMetadata {
        &self.system_metadata
    }

    pub(crate) fn require_multipart_id(&self) -> Result<&str, crate::error::Error> {
        self.multipart_id.as_deref().ok_or_else(|| {
            crate::error::invalid_input(format!(
                "object {} is not a multipart upload (no multipart ID)",
                self.path
            ))
        })
    }
}

/// A single uploaded part of a multipart upload.
///
/// `index` is zero-based. The S3 part number on the wire is always `index + 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Part {
    /// Zero-based part index
    pub index: u32,
    /// Size of the part in bytes
    pub size: u64,
    /// Entity tag returned by S3 for the part
    pub e_tag: String,
}

/// How a listing should interpret the given path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum ListMode {
    /// All keys beginning with the path, no grouping.
    #[default]
    Prefix,
    /// Only the direct children of the path, grouped by `/`.
    Dir,
    /// In-progress multipart uploads whose key begins with the path.
    Part,
}

/// Feature switches of a storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StorageFeatures {
    /// Emulate directories with `/` terminated zero-length marker objects.
    pub virtual_dir: bool,
    /// Emulate symbolic links through user-defined object metadata.
    pub virtual_link: bool,
}

/// Static information and service limits of a storage.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct StorageMeta {
    /// Bucket name
    pub name: String,
    /// Working directory all paths are relative to
    pub work_dir: String,
    /// Maximum object size for a single `PutObject`
    pub write_size_maximum: u64,
    /// Maximum number of parts of a multipart upload
    pub multipart_number_maximum: u32,
    /// Maximum size of a single part
    pub multipart_size_maximum: u64,
    /// Minimum size of every part except the last
    pub multipart_size_minimum: u64,
}

/// A server-side encryption customer provided key (SSE-C).
///
/// The key is never printed by the `Debug` implementation.
#[derive(Clone, PartialEq, Eq)]
pub struct SseCustomerKey {
    algorithm: String,
    key: Vec<u8>,
}

impl SseCustomerKey {
    /// Create a customer key for the given algorithm (usually `AES256`).
    ///
    /// The key length is validated when a request is formatted.
    pub fn new(algorithm: impl Into<String>, key: impl Into<Vec<u8>>) -> Self {
        SseCustomerKey {
            algorithm: algorithm.into(),
            key: key.into(),
        }
    }

    /// The encryption algorithm
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub(crate) fn key(&self) -> &[u8] {
        &self.key
    }
}

impl fmt::Debug for SseCustomerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("SseCustomerKey");
        formatter.field("algorithm", &self.algorithm);
        formatter.field("key", &"** redacted **");
        formatter.finish()
    }
}

/// Server-side encryption settings applied when an object or upload is created.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ServerSideEncryptionConfig {
    /// Server-side encryption algorithm
    pub algorithm: Option<aws_sdk_s3::types::ServerSideEncryption>,
    /// ID of the KMS key to use for SSE-KMS
    pub aws_kms_key_id: Option<String>,
    /// Encryption context for SSE-KMS (JSON, base64-encoded before sending)
    pub context: Option<String>,
    /// Use an S3 Bucket Key for SSE-KMS
    pub bucket_key_enabled: Option<bool>,
}

impl ServerSideEncryptionConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server-side encryption algorithm
    pub fn algorithm(mut self, algorithm: aws_sdk_s3::types::ServerSideEncryption) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the KMS key ID
    pub fn aws_kms_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.aws_kms_key_id = Some(key_id.into());
        self
    }

    /// Set the KMS encryption context
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Enable or disable the S3 Bucket Key
    pub fn bucket_key_enabled(mut self, enabled: bool) -> Self {
        self.bucket_key_enabled = Some(enabled);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{ObjectMode, SseCustomerKey};

    #[test]
    fn test_object_mode_flags() {
        let mut mode = ObjectMode::PART;
        assert!(mode.is_part());
        assert!(!mode.contains(ObjectMode::READ));

        mode.remove(ObjectMode::PART);
        mode |= ObjectMode::READ;
        assert_eq!(ObjectMode::READ, mode);
        assert!((ObjectMode::READ | ObjectMode::LINK).contains(ObjectMode::LINK));
        assert_eq!("ObjectMode(READ | LINK)", format!("{:?}", ObjectMode::READ | ObjectMode::LINK));
    }

    #[test]
    fn test_customer_key_debug_is_redacted() {
        let key = SseCustomerKey::new("AES256", vec![7u8; 32]);
        let printed = format!("{:?}", key);
        assert!(printed.contains("AES256"));
        assert!(printed.contains("redacted"));
        assert!(!printed.contains("7, 7"));
    }
}
