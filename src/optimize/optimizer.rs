//! Optimizer seam and the in-process optimizer.

use std::time::Instant;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::RouteSet;
use crate::partition::{nearest_neighbor_route, RoutePartitioner};

use super::{OptimizeRoutesRequest, OptimizeRoutesResponse};

/// Something that turns delivery locations into per-vehicle routes.
///
/// Implemented by the HTTP client for the optimization service, by
/// [`LocalOptimizer`], and by any closure with the same signature, which
/// keeps planners testable without a network.
pub trait RouteOptimizer {
    /// Computes routes for `request`.
    fn optimize(&self, request: &OptimizeRoutesRequest) -> Result<OptimizeRoutesResponse>;
}

impl<F> RouteOptimizer for F
where
    F: Fn(&OptimizeRoutesRequest) -> Result<OptimizeRoutesResponse>,
{
    fn optimize(&self, request: &OptimizeRoutesRequest) -> Result<OptimizeRoutesResponse> {
        self(request)
    }
}

/// In-process optimizer mirroring the optimization service.
///
/// Splits the stops contiguously like the fallback, then orders each
/// vehicle's stops by nearest neighbor from the depot. Vehicles left
/// without stops are omitted from the response.
///
/// # Examples
///
/// ```
/// use fleet_routes::models::Location;
/// use fleet_routes::optimize::{LocalOptimizer, OptimizeRoutesRequest, RouteOptimizer};
///
/// let d = Location::new(0.0, 0.0);
/// let request = OptimizeRoutesRequest::new(
///     vec![d, Location::new(0.0, 3.0), Location::new(0.0, 1.0)],
///     3,
/// );
/// let response = LocalOptimizer::new().optimize(&request).unwrap();
/// assert_eq!(response.routes.len(), 2);
/// assert!(response.total_distance.unwrap() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOptimizer {
    partitioner: RoutePartitioner,
}

impl LocalOptimizer {
    /// Creates an optimizer using the default partitioner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer that chunks stops with `partitioner`.
    pub fn with_partitioner(partitioner: RoutePartitioner) -> Self {
        Self { partitioner }
    }
}

impl RouteOptimizer for LocalOptimizer {
    fn optimize(&self, request: &OptimizeRoutesRequest) -> Result<OptimizeRoutesResponse> {
        if request.n_vehicles == 0 {
            return Err(Error::InvalidVehicleCount);
        }
        let start = Instant::now();
        let chunks = self
            .partitioner
            .partition(&request.locations, request.n_vehicles);

        let mut routes = RouteSet::new();
        for (vehicle, chunk) in chunks.iter() {
            if chunk.has_no_stops() {
                continue;
            }
            let route = nearest_neighbor_route(chunk.depot(), chunk.stops());
            routes.push_anchored(vehicle.to_string(), route);
        }

        let total_distance = routes.total_distance_meters();
        let elapsed = start.elapsed().as_secs_f64();
        debug!(
            "Local optimizer built {} routes ({:.0} m) in {:.3}s",
            routes.len(),
            total_distance,
            elapsed
        );
        Ok(OptimizeRoutesResponse::from_route_set(&routes).with_metrics(total_distance, elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, SAMPLE_LOCATIONS};

    #[test]
    fn test_local_optimizer_covers_stops() {
        let request = OptimizeRoutesRequest::new(SAMPLE_LOCATIONS.to_vec(), 3);
        let response = LocalOptimizer::new().optimize(&request).expect("optimize");
        let routes = response.into_route_set(&request).expect("valid routes");
        assert_eq!(routes.len(), 3);
        assert_eq!(routes.total_stops(), SAMPLE_LOCATIONS.len() - 1);
        for (_, route) in routes.iter() {
            assert_eq!(route.depot(), SAMPLE_LOCATIONS[0]);
            for stop in route.stops() {
                assert!(SAMPLE_LOCATIONS[1..].contains(stop));
            }
        }
    }

    #[test]
    fn test_local_optimizer_skips_empty_vehicles() {
        let locs = vec![Location::new(0.0, 0.0), Location::new(0.0, 1.0)];
        let request = OptimizeRoutesRequest::new(locs, 4);
        let response = LocalOptimizer::new().optimize(&request).expect("optimize");
        assert_eq!(response.routes.keys().collect::<Vec<_>>(), vec!["0"]);
    }

    #[test]
    fn test_local_optimizer_empty_locations() {
        let request = OptimizeRoutesRequest::new(Vec::new(), 2);
        let response = LocalOptimizer::new().optimize(&request).expect("optimize");
        assert!(response.routes.is_empty());
        assert_eq!(response.total_distance, Some(0.0));
    }

    #[test]
    fn test_local_optimizer_zero_vehicles() {
        let request = OptimizeRoutesRequest::new(SAMPLE_LOCATIONS.to_vec(), 0);
        assert!(matches!(
            LocalOptimizer::new().optimize(&request),
            Err(Error::InvalidVehicleCount)
        ));
    }

    #[test]
    fn test_local_reorders_within_fallback_chunks() {
        let request = OptimizeRoutesRequest::new(SAMPLE_LOCATIONS.to_vec(), 2);
        let optimized = LocalOptimizer::new()
            .optimize(&request)
            .expect("optimize")
            .into_route_set(&request)
            .expect("valid");
        let fallback = RoutePartitioner::new().partition(&SAMPLE_LOCATIONS, 2);
        for (key, route) in optimized.iter() {
            let chunk = fallback.get(key).expect("same keys");
            assert_eq!(route.total_stops(), chunk.total_stops());
            for stop in route.stops() {
                assert!(chunk.stops().contains(stop));
            }
        }
    }

    #[test]
    fn test_closure_optimizer() {
        let failing = |_: &OptimizeRoutesRequest| -> Result<OptimizeRoutesResponse> {
            Err(Error::Status(503))
        };
        let request = OptimizeRoutesRequest::new(SAMPLE_LOCATIONS.to_vec(), 1);
        assert!(matches!(failing.optimize(&request), Err(Error::Status(503))));
    }
}
