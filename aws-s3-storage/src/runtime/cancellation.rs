/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::{self, Error};

/// Bounds every request future by an optional cancellation token and an optional deadline.
///
/// Dropping the returned future drops the request future, which aborts the in-flight request.
#[derive(Debug, Clone, Default)]
pub(crate) struct CancellationGuard {
    token: Option<CancellationToken>,
    timeout: Option<Duration>,
}

impl CancellationGuard {
    pub(crate) fn new(timeout: Option<Duration>) -> Self {
        Self {
            token: None,
            timeout,
        }
    }

    pub(crate) fn with_token(&self, token: CancellationToken) -> Self {
        Self {
            token: Some(token),
            timeout: self.timeout,
        }
    }

    /// Drive `fut` to completion unless the token fires or the deadline elapses first.
    pub(crate) async fn run<F, T, E>(&self, fut: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<Error>,
    {
        let bounded = async {
            match self.timeout {
                Some(timeout) => match tokio::time::timeout(timeout, fut).await {
                    Ok(result) => result.map_err(Into::into),
                    Err(elapsed) => Err(error::deadline_elapsed(elapsed)),
                },
                None => fut.await.map_err(Into::into),
            }
        };

        match &self.token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!("request cancelled");
                        Err(error::operation_cancelled())
                    }
                    result = bounded => result,
                }
            }
            None => bounded.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio_util::sync::CancellationToken;

    use crate::error::{Error, ErrorKind};

    use super::CancellationGuard;

    #[tokio::test]
    async fn test_passthrough() {
        let guard = CancellationGuard::new(None);
        let result = guard.run(async { Ok::<_, Error>(7) }).await.unwrap();
        assert_eq!(7, result);
    }

    #[tokio::test]
    async fn test_cancelled_token() {
        let token = CancellationToken::new();
        let guard = CancellationGuard::new(None).with_token(token.clone());
        token.cancel();

        let err = guard
            .run(std::future::pending::<Result<(), Error>>())
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::OperationCancelled, err.kind());
    }

    #[tokio::test]
    async fn test_deadline() {
        let guard = CancellationGuard::new(Some(Duration::from_millis(10)));
        let err = guard
            .run(std::future::pending::<Result<(), Error>>())
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::OperationCancelled, err.kind());
    }
}
