//! Blocking HTTP client for the route optimization service.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::error::{Error, Result};

use super::{OptimizeRoutesRequest, OptimizeRoutesResponse, RouteOptimizer};

/// Calls `POST {ml_api_url}/optimize-routes`.
///
/// Transport failures, non-2xx answers and undecodable bodies all surface
/// as errors, which the planner turns into a fallback.
#[derive(Debug, Clone)]
pub struct HttpOptimizer {
    client: Client,
    url: String,
}

impl HttpOptimizer {
    /// Builds a client with the configured endpoint and timeout.
    pub fn new(config: &PlannerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self {
            client,
            url: config.optimize_routes_url(),
        })
    }

    /// Endpoint this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RouteOptimizer for HttpOptimizer {
    fn optimize(&self, request: &OptimizeRoutesRequest) -> Result<OptimizeRoutesResponse> {
        debug!(
            "Requesting {} routes for {} locations from {}",
            request.n_vehicles,
            request.locations.len(),
            self.url
        );
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        let body = response
            .text()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }
}
