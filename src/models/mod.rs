//! Domain model types for delivery-route planning.
//!
//! Provides geographic locations, depot-anchored round-trip routes, the
//! per-vehicle route set produced by one planning call, and the bounding
//! box used to filter upstream data.

mod bounds;
mod location;
mod route;
mod route_set;

pub use bounds::{GeoBounds, SAMPLE_LOCATIONS};
pub use location::{Location, EARTH_RADIUS_M};
pub use route::Route;
pub use route_set::RouteSet;
