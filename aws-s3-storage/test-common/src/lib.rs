/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use aws_smithy_mocks_experimental;
pub use aws_smithy_runtime;
pub use http_02x;

/// Build a mocked SDK client whose HTTP layer is stubbed with an always-200 response.
///
/// The mock interceptor replaces the output/error of every matched request so the
/// stubbed HTTP response is never deserialized for a matched rule.
#[macro_export]
macro_rules! mock_client_with_stubbed_http_client {
    ($aws_crate: ident, $rules: expr) => {
        $crate::mock_client_with_stubbed_http_client!(
            $aws_crate,
            $crate::aws_smithy_mocks_experimental::RuleMode::Sequential,
            $rules
        )
    };
    ($aws_crate: ident, $rule_mode: expr, $rules: expr) => {{
        let client = $crate::aws_smithy_mocks_experimental::mock_client!($aws_crate, $rule_mode, $rules);
        $aws_crate::Client::from_conf(
            client
                .config()
                .to_builder()
                .http_client(
                    $crate::aws_smithy_runtime::client::http::test_util::infallible_client_fn(
                        |_req| {
                            $crate::http_02x::Response::builder()
                                .status(200)
                                .body("")
                                .unwrap()
                        },
                    ),
                )
                .build(),
        )
    }};
}

/// A client usable for presigning: test credentials, a fixed clock and region.
///
/// Any request that reaches the HTTP layer gets an empty 200 response.
pub fn presigning_client() -> aws_sdk_s3::Client {
    let config = aws_sdk_s3::Config::builder()
        .with_test_defaults()
        .region(aws_sdk_s3::config::Region::from_static("us-east-1"))
        .http_client(
            aws_smithy_runtime::client::http::test_util::infallible_client_fn(|_req| {
                http_02x::Response::builder().status(200).body("").unwrap()
            }),
        )
        .build();
    aws_sdk_s3::Client::from_conf(config)
}

/// A 32 byte customer key for SSE-C tests.
pub fn customer_key() -> Vec<u8> {
    (0u8..32).collect()
}
