/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_smithy_types::base64;

use crate::error::{Error, ErrorKind};
use crate::types::SseCustomerKey;

/// Required length of an SSE-C key (AES-256)
const CUSTOMER_KEY_LEN: usize = 32;

/// The three SSE-C request headers derived from a customer key.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct CustomerKeyHeaders {
    pub(crate) algorithm: String,
    pub(crate) key: String,
    pub(crate) key_md5: String,
}

impl CustomerKeyHeaders {
    pub(crate) fn from_key(key: &SseCustomerKey) -> Result<Self, Error> {
        let raw = key.key();
        if raw.len() != CUSTOMER_KEY_LEN {
            return Err(Error::new(
                ErrorKind::EncryptionKeyInvalid,
                format!(
                    "customer key must be {} bytes, got {}",
                    CUSTOMER_KEY_LEN,
                    raw.len()
                ),
            ));
        }

        let digest = md5::compute(raw);
        Ok(Self {
            algorithm: key.algorithm().to_owned(),
            key: base64::encode(raw),
            key_md5: base64::encode(digest.0),
        })
    }

    /// Derive headers for an optional key, `None` stays unset.
    pub(crate) fn from_optional(key: Option<&SseCustomerKey>) -> Result<Option<Self>, Error> {
        key.map(Self::from_key).transpose()
    }
}

impl fmt::Debug for CustomerKeyHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("CustomerKeyHeaders");
        formatter.field("algorithm", &self.algorithm);
        formatter.field("key", &"** redacted **");
        formatter.field("key_md5", &self.key_md5);
        formatter.finish()
    }
}

/// Base64 encode a KMS encryption context before it goes on the wire.
pub(crate) fn encode_kms_context(context: &str) -> String {
    base64::encode(context.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::{encode_kms_context, CustomerKeyHeaders};
    use crate::error::ErrorKind;
    use crate::types::SseCustomerKey;

    #[test]
    fn test_invalid_key_length() {
        for len in [0, 16, 31, 33, 64] {
            let key = SseCustomerKey::new("AES256", vec![1u8; len]);
            let err = CustomerKeyHeaders::from_key(&key).unwrap_err();
            assert_eq!(&ErrorKind::EncryptionKeyInvalid, err.kind());
        }
    }

    #[test]
    fn test_headers_are_stable() {
        let key = SseCustomerKey::new("AES256", vec![0u8; 32]);
        let first = CustomerKeyHeaders::from_key(&key).unwrap();
        let second = CustomerKeyHeaders::from_key(&key).unwrap();
        assert_eq!(first, second);

        assert_eq!("AES256", first.algorithm);
        assert_eq!("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=", first.key);
        // md5 of 32 zero bytes
        assert_eq!("cLyPS3KoaSFGi/joRB3OUQ==", first.key_md5);
    }

    #[test]
    fn test_debug_hides_key() {
        let key = SseCustomerKey::new("AES256", vec![0u8; 32]);
        let headers = CustomerKeyHeaders::from_key(&key).unwrap();
        let printed = format!("{:?}", headers);
        assert!(!printed.contains(&headers.key));
    }

    #[test]
    fn test_optional_key() {
        assert!(CustomerKeyHeaders::from_optional(None).unwrap().is_none());
    }

    #[test]
    fn test_kms_context_encoding() {
        assert_eq!("eyJhIjoiYiJ9", encode_kms_context(r#"{"a":"b"}"#));
    }
}
