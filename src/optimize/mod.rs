//! Route optimization requests with local fallback.
//!
//! - [`OptimizeRoutesRequest`] / [`OptimizeRoutesResponse`] — JSON shapes of
//!   the optimization service
//! - [`RouteOptimizer`] — the optimizer seam; [`LocalOptimizer`] runs in
//!   process, `HttpOptimizer` (feature `http`) calls the service
//! - [`RoutePlanner`] — sequences requests, drops stale answers and falls
//!   back to the contiguous partition on failure

#[cfg(feature = "http")]
mod http;
mod optimizer;
mod planner;
mod wire;

#[cfg(feature = "http")]
pub use http::HttpOptimizer;
pub use optimizer::{LocalOptimizer, RouteOptimizer};
pub use planner::{PlanOutcome, RequestTicket, RoutePlanner, RouteSource};
pub use wire::{OptimizeRoutesRequest, OptimizeRoutesResponse};
