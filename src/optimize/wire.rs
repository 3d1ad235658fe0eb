//! JSON shapes exchanged with the route optimization service.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Location, Route, RouteSet};

/// Body of `POST /optimize-routes`.
///
/// # Examples
///
/// ```
/// use fleet_routes::models::Location;
/// use fleet_routes::optimize::OptimizeRoutesRequest;
///
/// let request = OptimizeRoutesRequest::new(vec![Location::new(-33.4, -70.6)], 3);
/// let json = serde_json::to_string(&request).unwrap();
/// assert_eq!(json, r#"{"locations":[{"lat":-33.4,"long":-70.6}],"n_vehicles":3}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRoutesRequest {
    pub locations: Vec<Location>,
    pub n_vehicles: usize,
}

impl OptimizeRoutesRequest {
    /// Creates a request for `n_vehicles` vehicles. `locations[0]` is the
    /// depot.
    pub fn new(locations: Vec<Location>, n_vehicles: usize) -> Self {
        Self {
            locations,
            n_vehicles,
        }
    }
}

/// Answer of `POST /optimize-routes`: one closed `[lat, long]` polyline per
/// vehicle key, plus optional metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRoutesResponse {
    pub routes: BTreeMap<String, Vec<[f64; 2]>>,
    /// Combined route length, in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    /// Solver wall time, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
}

impl OptimizeRoutesResponse {
    /// Encodes a route set in the response shape.
    pub fn from_route_set(routes: &RouteSet) -> Self {
        Self {
            routes: routes
                .iter()
                .map(|(key, route)| (key.to_string(), route.coordinates()))
                .collect(),
            total_distance: None,
            execution_time: None,
        }
    }

    /// Attaches the solver metrics.
    pub fn with_metrics(mut self, total_distance: f64, execution_time: f64) -> Self {
        self.total_distance = Some(total_distance);
        self.execution_time = Some(execution_time);
        self
    }

    /// Validates the polylines against `request` and collects them into a
    /// [`RouteSet`].
    ///
    /// Integer keys come first in numeric order (`"2"` before `"10"`),
    /// followed by any other keys in lexicographic order. Fails if a route
    /// is not closed at `request.locations[0]`, or if no routes came back
    /// although the request had stops.
    pub fn into_route_set(self, request: &OptimizeRoutesRequest) -> Result<RouteSet> {
        if self.routes.is_empty() && request.locations.len() > 1 {
            return Err(Error::EmptyResponse);
        }
        let depot = request.locations.first().copied();

        let mut entries: Vec<(String, Vec<[f64; 2]>)> = self.routes.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| vehicle_key_order(a, b));

        let mut routes = RouteSet::new();
        for (key, coords) in entries {
            let points = coords.into_iter().map(Location::from).collect();
            let route = Route::from_points(&key, points)?;
            if matches!(depot, Some(d) if d != route.depot()) {
                return Err(Error::DepotMismatch { vehicle: key });
            }
            routes.insert(key, route)?;
        }
        Ok(routes)
    }
}

fn vehicle_key_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_at(depot: Location) -> OptimizeRoutesRequest {
        OptimizeRoutesRequest::new(vec![depot, Location::new(1.0, 1.0)], 2)
    }

    #[test]
    fn test_request_round_trips_field_names() {
        let json = r#"{"locations":[{"lat":1.0,"long":2.0},{"lat":3.0,"long":4.0}],"n_vehicles":2}"#;
        let request: OptimizeRoutesRequest = serde_json::from_str(json).expect("parse");
        assert_eq!(request.n_vehicles, 2);
        assert_eq!(request.locations[1], Location::new(3.0, 4.0));
    }

    #[test]
    fn test_response_parses_without_metrics() {
        let json = r#"{"routes":{"0":[[0.0,0.0],[1.0,1.0],[0.0,0.0]]}}"#;
        let response: OptimizeRoutesResponse = serde_json::from_str(json).expect("parse");
        assert!(response.total_distance.is_none());
        let routes = response
            .into_route_set(&request_at(Location::new(0.0, 0.0)))
            .expect("valid");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes.get("0").expect("route").total_stops(), 1);
    }

    #[test]
    fn test_response_key_order_numeric() {
        let mut response = OptimizeRoutesResponse::default();
        for key in ["10", "2", "b", "0", "a"] {
            response
                .routes
                .insert(key.to_string(), vec![[0.0, 0.0], [0.0, 0.0]]);
        }
        let routes = response
            .into_route_set(&request_at(Location::new(0.0, 0.0)))
            .expect("valid");
        assert_eq!(
            routes.keys().collect::<Vec<_>>(),
            vec!["0", "2", "10", "a", "b"]
        );
    }

    #[test]
    fn test_response_rejects_open_route() {
        let json = r#"{"routes":{"0":[[0.0,0.0],[1.0,1.0]]}}"#;
        let response: OptimizeRoutesResponse = serde_json::from_str(json).expect("parse");
        assert!(matches!(
            response.into_route_set(&request_at(Location::new(0.0, 0.0))),
            Err(Error::MalformedRoute { .. })
        ));
    }

    #[test]
    fn test_response_rejects_mixed_depots() {
        let json = r#"{"routes":{"0":[[0.0,0.0],[0.0,0.0]],"1":[[5.0,5.0],[5.0,5.0]]}}"#;
        let response: OptimizeRoutesResponse = serde_json::from_str(json).expect("parse");
        assert!(matches!(
            response.into_route_set(&request_at(Location::new(0.0, 0.0))),
            Err(Error::DepotMismatch { .. })
        ));
    }

    #[test]
    fn test_response_rejects_foreign_depot() {
        let json = r#"{"routes":{"0":[[5.0,5.0],[1.0,1.0],[5.0,5.0]]}}"#;
        let response: OptimizeRoutesResponse = serde_json::from_str(json).expect("parse");
        let err = response
            .into_route_set(&request_at(Location::new(0.0, 0.0)))
            .expect_err("depot differs from request");
        assert!(matches!(err, Error::DepotMismatch { vehicle } if vehicle == "0"));
    }

    #[test]
    fn test_response_without_routes() {
        let d = Location::new(0.0, 0.0);
        assert!(matches!(
            OptimizeRoutesResponse::default().into_route_set(&request_at(d)),
            Err(Error::EmptyResponse)
        ));
        // A lone depot has nothing to route.
        let depot_only = OptimizeRoutesRequest::new(vec![d], 2);
        let routes = OptimizeRoutesResponse::default()
            .into_route_set(&depot_only)
            .expect("nothing to serve");
        assert!(routes.is_empty());
    }

    #[test]
    fn test_response_from_route_set() {
        let d = Location::new(0.0, 0.0);
        let mut routes = RouteSet::new();
        routes
            .insert("0", Route::round_trip(d, [Location::new(1.0, 2.0)]))
            .expect("insert");
        let response = OptimizeRoutesResponse::from_route_set(&routes).with_metrics(10.0, 0.5);
        let json = serde_json::to_string(&response).expect("serialize");
        assert_eq!(
            json,
            r#"{"routes":{"0":[[0.0,0.0],[1.0,2.0],[0.0,0.0]]},"total_distance":10.0,"execution_time":0.5}"#
        );
        let request = OptimizeRoutesRequest::new(vec![d, Location::new(1.0, 2.0)], 1);
        assert_eq!(response.into_route_set(&request).expect("valid"), routes);
    }
}
