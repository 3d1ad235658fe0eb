//! # fleet-routes
//!
//! Delivery-route planning core for fleet dashboards: splits delivery
//! locations among vehicles, falls back to a deterministic partition when
//! the optimization service is unavailable, and tracks the progressive
//! reveal of every route on the map.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Route, RouteSet, GeoBounds)
//! - [`partition`] — Contiguous fallback partition and nearest-neighbor ordering
//! - [`optimize`] — Optimizer seam, wire types, and the request planner
//! - [`visibility`] — Per-vehicle reveal state and derived draw lists
//! - [`config`] — Planner configuration
//! - [`error`] — Crate-wide error type

pub mod config;
pub mod error;
pub mod models;
pub mod optimize;
pub mod partition;
pub mod visibility;
