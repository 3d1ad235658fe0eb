//! Progressive route reveal on the delivery map.
//!
//! - [`VisibilityState`] — per-vehicle visibility and revealed stop count
//! - [`RouteVisibilityModel`] — controller owning the installed routes and
//!   every vehicle's state
//! - [`RouteFrame`] — plain-data draw list derived from the model, free of
//!   any map library

mod frame;
mod model;
mod state;

pub use frame::{RouteFrame, StopMarker, VehicleLayer, DEFAULT_PALETTE};
pub use model::{RouteVisibilityModel, DEFAULT_INITIAL_REVEAL};
pub use state::{RevealPhase, VisibilityState};
