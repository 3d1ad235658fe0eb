//! Per-vehicle route collection.

use super::{Location, Route};
use crate::error::{Error, Result};

/// Routes keyed by vehicle, all anchored at the same depot.
///
/// Keys are arbitrary strings and need not be contiguous. Iteration follows
/// insertion order, which is also the order colours are assigned in when
/// the set is drawn.
///
/// # Examples
///
/// ```
/// use fleet_routes::models::{Location, Route, RouteSet};
///
/// let depot = Location::new(0.0, 0.0);
/// let mut set = RouteSet::new();
/// set.insert("0", Route::round_trip(depot, [Location::new(0.0, 1.0)])).unwrap();
/// set.insert("1", Route::round_trip(depot, [])).unwrap();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.depot(), Some(depot));
/// assert_eq!(set.keys().collect::<Vec<_>>(), vec!["0", "1"]);
///
/// // Routes from another depot are rejected.
/// let other = Route::round_trip(Location::new(5.0, 5.0), []);
/// assert!(set.insert("2", other).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteSet {
    routes: Vec<(String, Route)>,
}

impl RouteSet {
    /// Creates an empty route set.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Inserts or replaces the route for `vehicle`.
    ///
    /// A replaced route keeps its original position. Fails with
    /// [`Error::DepotMismatch`] if the route starts at a different depot
    /// than the routes already in the set.
    pub fn insert(&mut self, vehicle: impl Into<String>, route: Route) -> Result<()> {
        let vehicle = vehicle.into();
        if let Some(depot) = self.depot() {
            if route.depot() != depot {
                return Err(Error::DepotMismatch { vehicle });
            }
        }
        match self.position(&vehicle) {
            Some(i) => self.routes[i].1 = route,
            None => self.routes.push((vehicle, route)),
        }
        Ok(())
    }

    /// Appends a route whose depot the caller has already matched.
    pub(crate) fn push_anchored(&mut self, vehicle: String, route: Route) {
        debug_assert!(self
            .depot()
            .map_or(true, |d| same_bits(d, route.depot())));
        self.routes.push((vehicle, route));
    }

    /// Route for `vehicle`, if present.
    pub fn get(&self, vehicle: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|(key, _)| key == vehicle)
            .map(|(_, route)| route)
    }

    /// Returns `true` if a route exists for `vehicle`.
    pub fn contains_key(&self, vehicle: &str) -> bool {
        self.position(vehicle).is_some()
    }

    /// Insertion index of `vehicle`.
    pub fn position(&self, vehicle: &str) -> Option<usize> {
        self.routes.iter().position(|(key, _)| key == vehicle)
    }

    /// Vehicle keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(key, _)| key.as_str())
    }

    /// `(vehicle, route)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.routes.iter().map(|(key, route)| (key.as_str(), route))
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the set holds no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The shared depot, or `None` for an empty set.
    pub fn depot(&self) -> Option<Location> {
        self.routes.first().map(|(_, route)| route.depot())
    }

    /// Stops across all routes.
    pub fn total_stops(&self) -> usize {
        self.routes.iter().map(|(_, r)| r.total_stops()).sum()
    }

    /// Combined length of all routes, in meters.
    pub fn total_distance_meters(&self) -> f64 {
        self.routes.iter().map(|(_, r)| r.distance_meters()).sum()
    }
}

fn same_bits(a: Location, b: Location) -> bool {
    a.to_pair().map(f64::to_bits) == b.to_pair().map(f64::to_bits)
}
