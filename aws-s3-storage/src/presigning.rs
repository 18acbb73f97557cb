/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::time::Duration;

use aws_sdk_s3::presigning::PresigningConfig;
use bytes::Bytes;

use crate::error::Error;

mod sigv4;
pub(crate) use sigv4::{presign_captured, RequestCapture};

/// A signed HTTP request that can be sent later by anyone, without the signing credentials.
///
/// The signature is valid until the expiry given at signing time, which is enforced by S3.
#[derive(Clone)]
pub struct PresignedRequest {
    method: String,
    uri: String,
    headers: Vec<(String, String)>,
    body: Option<Bytes>,
    content_length: Option<u64>,
}

impl PresignedRequest {
    pub(crate) fn new(request: aws_sdk_s3::presigning::PresignedRequest) -> Self {
        let headers = request
            .headers()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();
        Self {
            method: request.method().to_owned(),
            uri: request.uri().to_owned(),
            headers,
            body: None,
            content_length: None,
        }
    }

    pub(crate) fn from_parts(method: String, uri: String, headers: Vec<(String, String)>) -> Self {
        Self {
            method,
            uri,
            headers,
            body: None,
            content_length: None,
        }
    }

    pub(crate) fn with_body(mut self, body: Bytes) -> Self {
        self.content_length = Some(body.len() as u64);
        self.body = Some(body);
        self
    }

    pub(crate) fn with_content_length(mut self, content_length: u64) -> Self {
        self.content_length = Some(content_length);
        self
    }

    /// HTTP method (`GET`, `PUT`, `POST` or `DELETE`)
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The signed URI, including the signature query parameters
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Headers that must be sent with the request
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Request body that must be sent as is.
    ///
    /// Only set for requests whose payload cannot travel in headers or query parameters,
    /// e.g. `CompleteMultipartUpload`.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Expected `Content-Length` of the request body
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }
}

impl fmt::Debug for PresignedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the URI carries the signature, keep it out of logs
        let mut formatter = f.debug_struct("PresignedRequest");
        formatter.field("method", &self.method);
        formatter.field("uri", &"** redacted **");
        formatter.field("body", &self.body.as_ref().map(|b| b.len()));
        formatter.field("content_length", &self.content_length);
        formatter.finish()
    }
}

pub(crate) fn presigning_config(expires_in: Duration) -> Result<PresigningConfig, Error> {
    Ok(PresigningConfig::expires_in(expires_in)?)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::error::ErrorKind;

    use super::presigning_config;

    #[test]
    fn test_expiry_limit() {
        assert!(presigning_config(Duration::from_secs(3600)).is_ok());
        let err = presigning_config(Duration::from_secs(8 * 24 * 3600)).unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }
}
