//! Planner configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::partition::StopSource;
use crate::visibility::{DEFAULT_INITIAL_REVEAL, DEFAULT_PALETTE};

/// Environment variable overriding [`PlannerConfig::ml_api_url`].
pub const ML_API_URL_ENV: &str = "FLEET_ROUTES_ML_API_URL";

/// Settings shared by the planner and the visibility model.
///
/// Every field has a default, so a partial JSON document is enough.
///
/// # Examples
///
/// ```
/// use fleet_routes::config::PlannerConfig;
///
/// let config = PlannerConfig::from_json(r#"{"initial_reveal": 3}"#).unwrap();
/// assert_eq!(config.initial_reveal, 3);
/// assert_eq!(config.ml_api_url, "http://localhost:8000");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Base URL of the route optimization service.
    pub ml_api_url: String,
    /// Timeout for one optimization request.
    pub request_timeout_secs: u64,
    /// Stops revealed per route when a route set is installed.
    pub initial_reveal: usize,
    /// Route colours, cycled by route position.
    pub palette: Vec<String>,
    /// Which locations the fallback partition distributes as stops.
    pub stop_source: StopSource,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            ml_api_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 30,
            initial_reveal: DEFAULT_INITIAL_REVEAL,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            stop_source: StopSource::default(),
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        trace!("Parsing planner config from json: {}", json);
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by environment variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ML_API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.ml_api_url = url;
        }
        self
    }

    /// Checks the values a planner cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.ml_api_url.trim().is_empty() {
            return Err(Error::Config("ml_api_url must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be positive".to_string(),
            ));
        }
        if self.palette.is_empty() {
            return Err(Error::Config("palette must not be empty".to_string()));
        }
        Ok(())
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Full URL of the route optimization endpoint.
    pub fn optimize_routes_url(&self) -> String {
        format!("{}/optimize-routes", self.ml_api_url.trim_end_matches('/'))
    }
}
