use std::sync::Arc;

use symmetry_core::DataService;

use crate::client::CloudClient;
use crate::config::CloudConfig;
use crate::{CloudProgressService, CloudUserService, CloudWorkoutService};

/// Builds a [`DataService`] backed by the remote API.
pub struct CloudDataService;

impl CloudDataService {
    pub fn build(config: CloudConfig) -> DataService {
        tracing::info!(
            "Using cloud data service ({}, timeout {:?})",
            config.api_url,
            config.timeout
        );
        let client = CloudClient::new(config);

        DataService::new(
            Arc::new(CloudWorkoutService::new(client.clone())),
            Arc::new(CloudProgressService::new(client.clone())),
            Arc::new(CloudUserService::new(client)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_services_cloud() {
        let data = CloudDataService::build(CloudConfig::default());
        assert_eq!(data.backend(), "cloud");
        assert_eq!(data.user.backend(), "cloud");
        assert_eq!(data.progress.backend(), "cloud");
    }
}
