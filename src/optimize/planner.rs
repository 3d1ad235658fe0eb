//! Request sequencing and optimizer fallback.

use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::error::{Error, Result};
use crate::models::{Location, RouteSet};
use crate::partition::RoutePartitioner;
use crate::visibility::RouteVisibilityModel;

use super::{OptimizeRoutesRequest, OptimizeRoutesResponse, RouteOptimizer};

/// Where the routes of a [`PlanOutcome`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSource {
    /// The optimizer answered with valid routes.
    Optimizer,
    /// The optimizer failed and the contiguous partition was used.
    Fallback,
    /// There was nothing to plan.
    NoLocations,
}

/// One in-flight optimization request.
///
/// Carries its sequence number and the exact inputs, so a fallback is
/// computed from the same locations the optimizer saw.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTicket {
    seq: u64,
    request: OptimizeRoutesRequest,
}

impl RequestTicket {
    /// Sequence number, increasing with every issued request.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The request to send to the optimizer.
    pub fn request(&self) -> &OptimizeRoutesRequest {
        &self.request
    }
}

/// Result of one planning call, already installed into the model.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    pub routes: RouteSet,
    pub source: RouteSource,
    /// User-facing note when the routes are not optimizer output.
    pub advisory: Option<String>,
    /// Combined route length in meters: the optimizer's figure, or the
    /// measured length of the fallback partition.
    pub total_distance: Option<f64>,
    /// Optimizer wall time in seconds.
    pub execution_time: Option<f64>,
}

/// Turns optimizer answers into installed route sets.
///
/// Every call to [`begin`](Self::begin) supersedes the previous one: only
/// the ticket issued last is applied by [`finish`](Self::finish), so a slow
/// response arriving after a newer request was issued is dropped instead of
/// overwriting fresher routes.
///
/// # Examples
///
/// ```
/// use fleet_routes::error::{Error, Result};
/// use fleet_routes::models::SAMPLE_LOCATIONS;
/// use fleet_routes::optimize::{OptimizeRoutesRequest, OptimizeRoutesResponse, RoutePlanner, RouteSource};
/// use fleet_routes::visibility::RouteVisibilityModel;
///
/// let offline = |_: &OptimizeRoutesRequest| -> Result<OptimizeRoutesResponse> {
///     Err(Error::Transport("connection refused".into()))
/// };
/// let mut planner = RoutePlanner::new();
/// let mut model = RouteVisibilityModel::new();
///
/// let outcome = planner.plan(&offline, &SAMPLE_LOCATIONS, 3, &mut model).unwrap();
/// assert_eq!(outcome.source, RouteSource::Fallback);
/// assert!(outcome.advisory.is_some());
/// assert_eq!(model.vehicle_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    partitioner: RoutePartitioner,
    latest: u64,
}

impl RoutePlanner {
    /// Creates a planner with the default fallback partitioner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner whose fallback follows `config.stop_source`.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::with_partitioner(RoutePartitioner::new().with_stop_source(config.stop_source))
    }

    /// Creates a planner using `partitioner` as its fallback.
    pub fn with_partitioner(partitioner: RoutePartitioner) -> Self {
        Self {
            partitioner,
            latest: 0,
        }
    }

    /// Issues a ticket for a new request, superseding any earlier one.
    ///
    /// Fails with [`Error::InvalidVehicleCount`] if `vehicle_count` is zero.
    pub fn begin(&mut self, locations: &[Location], vehicle_count: usize) -> Result<RequestTicket> {
        if vehicle_count == 0 {
            return Err(Error::InvalidVehicleCount);
        }
        self.latest += 1;
        debug!(
            "Issued route request #{} for {} locations and {} vehicles",
            self.latest,
            locations.len(),
            vehicle_count
        );
        Ok(RequestTicket {
            seq: self.latest,
            request: OptimizeRoutesRequest::new(locations.to_vec(), vehicle_count),
        })
    }

    /// Returns `true` if `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.seq == self.latest
    }

    /// Applies the optimizer's answer for `ticket`.
    ///
    /// Stale tickets are dropped and return `None`. Otherwise the routes
    /// (or the fallback partition if the answer is an error or malformed)
    /// are installed into `model` in one step.
    pub fn finish(
        &self,
        ticket: RequestTicket,
        answer: Result<OptimizeRoutesResponse>,
        model: &mut RouteVisibilityModel,
    ) -> Option<PlanOutcome> {
        if !self.is_current(&ticket) {
            debug!(
                "Dropping stale route response #{} (latest is #{})",
                ticket.seq, self.latest
            );
            return None;
        }
        let outcome = self.resolve(&ticket, answer);
        model.install(outcome.routes.clone());
        Some(outcome)
    }

    /// Computes the outcome for `ticket` without touching any model.
    pub fn resolve(
        &self,
        ticket: &RequestTicket,
        answer: Result<OptimizeRoutesResponse>,
    ) -> PlanOutcome {
        let request = &ticket.request;
        if request.locations.is_empty() {
            return PlanOutcome {
                routes: RouteSet::new(),
                source: RouteSource::NoLocations,
                advisory: Some("No locations available to plan routes.".to_string()),
                total_distance: None,
                execution_time: None,
            };
        }

        let error = match answer {
            Ok(response) => {
                let total_distance = response.total_distance;
                let execution_time = response.execution_time;
                match response.into_route_set(request) {
                    Ok(routes) => {
                        return PlanOutcome {
                            routes,
                            source: RouteSource::Optimizer,
                            advisory: None,
                            total_distance,
                            execution_time,
                        }
                    }
                    Err(e) => e,
                }
            }
            Err(e) => e,
        };

        warn!("Route optimization failed, using fallback partition: {error}");
        let routes = self
            .partitioner
            .partition(&request.locations, request.n_vehicles);
        PlanOutcome {
            total_distance: Some(routes.total_distance_meters()),
            routes,
            source: RouteSource::Fallback,
            advisory: Some(format!(
                "Route optimization failed ({error}). Showing demonstration routes."
            )),
            execution_time: None,
        }
    }

    /// Runs one request synchronously against `optimizer` and installs the
    /// result into `model`.
    ///
    /// Empty `locations` skip the optimizer entirely and clear the model.
    pub fn plan<O>(
        &mut self,
        optimizer: &O,
        locations: &[Location],
        vehicle_count: usize,
        model: &mut RouteVisibilityModel,
    ) -> Result<PlanOutcome>
    where
        O: RouteOptimizer + ?Sized,
    {
        let ticket = self.begin(locations, vehicle_count)?;
        let answer = if locations.is_empty() {
            Ok(OptimizeRoutesResponse::default())
        } else {
            optimizer.optimize(ticket.request())
        };
        let outcome = self.resolve(&ticket, answer);
        model.install(outcome.routes.clone());
        Ok(outcome)
    }
}
