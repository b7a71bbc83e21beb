//! Configuration shared by the orchestrator and the front-end.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `Dashboard` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Number of news cards requested per render pass.
    ///
    /// The rendered count is bounded by how many articles the provider
    /// actually returns; fewer available articles is not an error.
    pub news_count: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(5),
            news_count: 10,
        }
    }
}
