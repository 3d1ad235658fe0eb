//! Nearest-neighbor stop ordering.
//!
//! Starting from the depot, repeatedly visits the closest unvisited stop,
//! then returns to the depot. Used by the in-process optimizer to order the
//! stops of each contiguous slice.
//!
//! # Complexity
//!
//! O(k²) per route where k = number of stops.

use crate::models::{Location, Route};

/// Orders `stops` greedily by nearest neighbor, starting at `depot`.
///
/// Returns the closed round trip. Ties go to the stop listed first.
///
/// # Examples
///
/// ```
/// use fleet_routes::models::Location;
/// use fleet_routes::partition::nearest_neighbor_route;
///
/// let depot = Location::new(0.0, 0.0);
/// let far = Location::new(0.0, 3.0);
/// let near = Location::new(0.0, 1.0);
///
/// let route = nearest_neighbor_route(depot, &[far, near]);
/// assert_eq!(route.points(), &[depot, near, far, depot]);
/// ```
pub fn nearest_neighbor_route(depot: Location, stops: &[Location]) -> Route {
    let mut remaining: Vec<Location> = stops.to_vec();
    let mut order = Vec::with_capacity(stops.len());
    let mut current = depot;

    while let Some(i) = nearest_index(current, &remaining) {
        current = remaining.remove(i);
        order.push(current);
    }

    Route::round_trip(depot, order)
}

/// Index of the candidate closest to `from`; the earliest wins ties.
fn nearest_index(from: Location, candidates: &[Location]) -> Option<usize> {
    candidates
        .iter()
        .map(|c| from.distance_to(c))
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}
