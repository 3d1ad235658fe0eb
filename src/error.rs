//! Crate-wide error type.

/// Errors raised while building route sets or talking to an optimizer.
///
/// Optimizer failures never reach the view layer as errors: the
/// [`RoutePlanner`](crate::optimize::RoutePlanner) recovers them with the
/// fallback partition and reports an advisory instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The optimizer could not be reached.
    #[error("optimizer transport failed: {0}")]
    Transport(String),

    /// The optimizer answered with a non-success status.
    #[error("optimizer returned status {0}")]
    Status(u16),

    /// The optimizer's answer is not valid JSON for the expected shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A route does not start and end at its depot.
    #[error("route for vehicle {vehicle:?} is malformed: {reason}")]
    MalformedRoute {
        /// Vehicle the route belongs to.
        vehicle: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A route was anchored at a different depot than the rest of the set.
    #[error("route for vehicle {vehicle:?} uses a different depot")]
    DepotMismatch {
        /// Vehicle the route belongs to.
        vehicle: String,
    },

    /// The optimizer returned no routes although there were stops to serve.
    #[error("optimizer returned no routes")]
    EmptyResponse,

    /// At least one vehicle is required to plan routes.
    #[error("vehicle count must be at least 1")]
    InvalidVehicleCount,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
