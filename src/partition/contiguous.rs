//! Contiguous fallback partition.
//!
//! # Algorithm
//!
//! Splits the delivery stops into `n` consecutive slices of
//! `ceil(stops / n)` elements and wraps each slice in a round trip from the
//! depot. Input order is preserved inside every route; no distances are
//! consulted. This is the shape-compatible stand-in used when the external
//! optimizer cannot be reached.
//!
//! # Complexity
//!
//! O(n + m) where n = vehicles and m = locations.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Location, Route, RouteSet};

/// Which input locations are distributed as stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopSource {
    /// `locations[1..]`; index 0 only anchors the routes.
    #[default]
    ExcludeDepot,
    /// Every location, so vehicle `"0"` also lists the depot as its first
    /// stop. Matches the legacy dashboard behaviour.
    AllLocations,
}

/// Deterministic contiguous partitioner.
///
/// # Examples
///
/// ```
/// use fleet_routes::models::Location;
/// use fleet_routes::partition::RoutePartitioner;
///
/// let d = Location::new(0.0, 0.0);
/// let a = Location::new(0.0, 1.0);
/// let b = Location::new(0.0, 2.0);
/// let c = Location::new(0.0, 3.0);
/// let e = Location::new(0.0, 4.0);
///
/// let routes = RoutePartitioner::new().partition(&[d, a, b, c, e], 2);
/// assert_eq!(routes.get("0").unwrap().points(), &[d, a, b, d]);
/// assert_eq!(routes.get("1").unwrap().points(), &[d, c, e, d]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoutePartitioner {
    stop_source: StopSource,
}

impl RoutePartitioner {
    /// Creates a partitioner that excludes the depot from the stops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects which locations are distributed as stops.
    pub fn with_stop_source(mut self, stop_source: StopSource) -> Self {
        self.stop_source = stop_source;
        self
    }

    /// The configured stop source.
    pub fn stop_source(&self) -> StopSource {
        self.stop_source
    }

    /// Partitions `locations` among `vehicle_count` vehicles.
    ///
    /// `locations[0]` anchors every route. Returns an empty set when
    /// `locations` is empty or `vehicle_count` is zero. Otherwise every
    /// vehicle `"0"..` receives a route, possibly with no stops.
    pub fn partition(&self, locations: &[Location], vehicle_count: usize) -> RouteSet {
        let mut routes = RouteSet::new();
        let Some(&depot) = locations.first() else {
            return routes;
        };
        if vehicle_count == 0 {
            return routes;
        }

        let stops = match self.stop_source {
            StopSource::ExcludeDepot => &locations[1..],
            StopSource::AllLocations => locations,
        };

        for (vehicle, range) in contiguous_chunks(stops.len(), vehicle_count)
            .into_iter()
            .enumerate()
        {
            let route = Route::round_trip(depot, stops[range].iter().copied());
            routes.push_anchored(vehicle.to_string(), route);
        }

        debug!(
            "Partitioned {} stops among {} vehicles",
            stops.len(),
            vehicle_count
        );
        routes
    }
}

/// Partitions `locations` with the default [`RoutePartitioner`].
pub fn partition_contiguous(locations: &[Location], vehicle_count: usize) -> RouteSet {
    RoutePartitioner::new().partition(locations, vehicle_count)
}

/// Index ranges of `chunks` consecutive slices of `ceil(len / chunks)`
/// elements. Trailing ranges are empty when `len` runs out early.
pub fn contiguous_chunks(len: usize, chunks: usize) -> Vec<Range<usize>> {
    if chunks == 0 {
        return Vec::new();
    }
    let per_chunk = len.div_ceil(chunks);
    (0..chunks)
        .map(|i| {
            let start = (i * per_chunk).min(len);
            let end = (start + per_chunk).min(len);
            start..end
        })
        .collect()
}
