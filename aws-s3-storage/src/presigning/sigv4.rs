/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use aws_sdk_s3::config::interceptors::BeforeTransmitInterceptorContextRef;
use aws_sdk_s3::config::{ConfigBag, Intercept, ProvideCredentials, RuntimeComponents};
use aws_sigv4::http_request::{
    sign, PercentEncodingMode, SignableBody, SignableRequest, SignatureLocation, SigningParams,
    SigningSettings, UriPathNormalizationMode,
};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::box_error::BoxError;
use aws_smithy_runtime_api::client::identity::Identity;

use crate::error::{self, Error, ErrorKind};
use crate::presigning::{presigning_config, PresignedRequest};

const SIGNING_NAME: &str = "s3";

/// Request line and headers of an SDK request that has not been signed yet
#[derive(Debug, Clone)]
struct UnsignedRequest {
    method: String,
    uri: String,
    headers: Vec<(String, String)>,
}

/// Interceptor that records the fully resolved request right before signing and stops the
/// operation there. Nothing is ever transmitted.
#[derive(Debug, Clone, Default)]
pub(crate) struct RequestCapture {
    captured: Arc<Mutex<Option<UnsignedRequest>>>,
}

impl RequestCapture {
    fn take(&self) -> Option<UnsignedRequest> {
        self.captured.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl Intercept for RequestCapture {
    fn name(&self) -> &'static str {
        "RequestCapture"
    }

    fn read_before_signing(
        &self,
        context: &BeforeTransmitInterceptorContextRef<'_>,
        _runtime_components: &RuntimeComponents,
        _cfg: &mut ConfigBag,
    ) -> Result<(), BoxError> {
        let request = context.request();
        let headers = request
            .headers()
            .iter()
            .filter(|(name, _)| is_signed_header(name))
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();
        let unsigned = UnsignedRequest {
            method: request.method().to_owned(),
            uri: request.uri().to_owned(),
            headers,
        };
        *self.captured.lock().map_err(|err| err.to_string())? = Some(unsigned);
        Err("request captured for presigning".into())
    }
}

/// Headers the holder of a presigned request has to send as is.
///
/// SDK bookkeeping, payload checksums and the body length are left out, the latter is reported
/// separately.
fn is_signed_header(name: &str) -> bool {
    if name == "content-type" {
        return true;
    }
    name.starts_with("x-amz-")
        && name != "x-amz-user-agent"
        && name != "x-amz-content-sha256"
        && name != "x-amz-sdk-checksum-algorithm"
        && !name.starts_with("x-amz-checksum-")
}

/// Presign an SDK operation that has no presigning support of its own.
///
/// `send` must be the operation sent with `capture` installed as an interceptor. The captured
/// request is signed with SigV4 query parameters, using the credentials, region and time source
/// of `client`.
pub(crate) async fn presign_captured<F, T, E>(
    client: &aws_sdk_s3::Client,
    capture: RequestCapture,
    send: F,
    expires_in: Duration,
) -> Result<PresignedRequest, Error>
where
    F: Future<Output = Result<T, E>>,
    E: Into<Error>,
{
    presigning_config(expires_in)?;

    let result = send.await;
    let unsigned = match (capture.take(), result) {
        (Some(unsigned), _) => unsigned,
        (None, Err(err)) => return Err(err.into()),
        (None, Ok(_)) => {
            return Err(Error::new(
                ErrorKind::Unexpected,
                "request was sent instead of being captured for presigning",
            ))
        }
    };
    tracing::trace!(method = %unsigned.method, "captured request for presigning");

    let config = client.config();
    let region = config
        .region()
        .ok_or_else(|| error::invalid_input("a region is required for presigning"))?;
    let credentials = config
        .credentials_provider()
        .ok_or_else(|| error::invalid_input("credentials are required for presigning"))?
        .provide_credentials()
        .await
        .map_err(|err| Error::new(ErrorKind::PermissionDenied, err))?;
    let identity = Identity::from(credentials);
    let time = config
        .time_source()
        .map(|source| source.now())
        .unwrap_or_else(SystemTime::now);

    let mut settings = SigningSettings::default();
    settings.signature_location = SignatureLocation::QueryParams;
    settings.expires_in = Some(expires_in);
    settings.percent_encoding_mode = PercentEncodingMode::Single;
    settings.uri_path_normalization_mode = UriPathNormalizationMode::Disabled;

    let params: SigningParams<'_> = v4::SigningParams::builder()
        .identity(&identity)
        .region(region.as_ref())
        .name(SIGNING_NAME)
        .time(time)
        .settings(settings)
        .build()
        .map_err(|err| Error::new(ErrorKind::Unexpected, err))?
        .into();

    let signable = SignableRequest::new(
        &unsigned.method,
        unsigned.uri.as_str(),
        unsigned
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
        SignableBody::UnsignedPayload,
    )?;
    let (instructions, _signature) = sign(signable, &params)?.into_parts();

    let mut request = http::Request::builder()
        .method(unsigned.method.as_str())
        .uri(unsigned.uri.as_str())
        .body(())
        .map_err(|err| Error::new(ErrorKind::Unexpected, err))?;
    instructions.apply_to_request_http1x(&mut request);

    Ok(PresignedRequest::from_parts(
        unsigned.method,
        request.uri().to_string(),
        unsigned.headers,
    ))
}

#[cfg(test)]
mod tests {
    use super::is_signed_header;

    #[test]
    fn test_signed_headers() {
        for name in [
            "content-type",
            "x-amz-expected-bucket-owner",
            "x-amz-server-side-encryption-customer-key",
            "x-amz-storage-class",
            "x-amz-meta-owner",
        ] {
            assert!(is_signed_header(name), "{name}");
        }
        for name in [
            "user-agent",
            "x-amz-user-agent",
            "amz-sdk-invocation-id",
            "amz-sdk-request",
            "content-length",
            "content-md5",
            "x-amz-checksum-crc32",
            "x-amz-sdk-checksum-algorithm",
        ] {
            assert!(!is_signed_header(name), "{name}");
        }
    }
}
