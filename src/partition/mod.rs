//! Splitting delivery locations into per-vehicle routes.
//!
//! - [`RoutePartitioner`] — deterministic contiguous split, the fallback
//!   when no optimizer answers
//! - [`nearest_neighbor_route`] — greedy stop ordering inside one route

mod contiguous;
mod greedy;

pub use contiguous::{contiguous_chunks, partition_contiguous, RoutePartitioner, StopSource};
pub use greedy::nearest_neighbor_route;
