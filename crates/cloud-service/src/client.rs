//! Request plumbing shared by the cloud services.

use std::future::Future;
use std::time::Duration;

use symmetry_core::{DataError, Result};

use crate::config::CloudConfig;
use crate::BACKEND;

/// Issues calls against the remote API.
#[derive(Debug, Clone)]
pub struct CloudClient {
    config: CloudConfig,
}

impl CloudClient {
    pub fn new(config: CloudConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    /// Perform `operation`. No endpoint is live yet, so this always fails
    /// with `NotImplemented` (or `Timeout` if that takes too long).
    pub async fn call<T>(&self, operation: &'static str) -> Result<T> {
        tracing::debug!(api_url = %self.config.api_url, operation, "Cloud request");
        let request = async {
            Err(DataError::NotImplemented {
                backend: BACKEND,
                operation,
            })
        };
        with_timeout(operation, self.config.timeout, request).await
    }
}

/// Run `request`, failing with `Timeout` if it does not finish within `timeout`.
pub(crate) async fn with_timeout<T, F>(
    operation: &'static str,
    timeout: Duration,
    request: F,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, request).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!("{} timed out after {:?}", operation, timeout);
            Err(DataError::Timeout { operation, timeout })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_call_is_not_implemented() {
        let client = CloudClient::new(CloudConfig::default());
        let result: Result<()> = client.call("getUser").await;
        assert!(matches!(
            result,
            Err(DataError::NotImplemented {
                backend: "cloud",
                operation: "getUser"
            })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_request_times_out() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(42)
        };
        let result = with_timeout("getWorkoutPlans", Duration::from_secs(10), slow).await;
        assert!(matches!(
            result,
            Err(DataError::Timeout {
                operation: "getWorkoutPlans",
                ..
            })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_request_passes_through() {
        let fast = async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(42)
        };
        let result = with_timeout("getWorkoutPlans", Duration::from_secs(10), fast).await;
        assert_eq!(result.unwrap(), 42);
    }
}
