//! Route visibility controller.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::config::PlannerConfig;
use crate::models::{Location, RouteSet};

use super::frame::{markers_for, path_for, DEFAULT_PALETTE};
use super::{RevealPhase, RouteFrame, StopMarker, VehicleLayer, VisibilityState};

/// Stops revealed per route right after a route set is installed.
pub const DEFAULT_INITIAL_REVEAL: usize = 2;

/// Owns the installed [`RouteSet`] and the reveal state of every vehicle.
///
/// All mutations are keyed by vehicle. Unknown keys are ignored, so stale
/// callbacks arriving after [`clear`](Self::clear) are harmless, and all
/// counts are clamped instead of rejected. Derivations never touch the
/// route data; they only read it together with the current state.
///
/// # Examples
///
/// ```
/// use fleet_routes::models::{Location, Route, RouteSet};
/// use fleet_routes::visibility::RouteVisibilityModel;
///
/// let d = Location::new(0.0, 0.0);
/// let s = [Location::new(0.0, 1.0), Location::new(0.0, 2.0), Location::new(0.0, 3.0)];
/// let mut routes = RouteSet::new();
/// routes.insert("0", Route::round_trip(d, s)).unwrap();
///
/// let mut model = RouteVisibilityModel::new();
/// model.install(routes);
/// assert_eq!(model.rendered_path("0"), vec![d, s[0], s[1]]);
///
/// model.reveal_next_for_all();
/// assert_eq!(model.rendered_path("0"), vec![d, s[0], s[1], s[2], d]);
///
/// model.toggle_visibility("0");
/// assert!(model.rendered_path("0").is_empty());
/// assert_eq!(model.depot_marker(), Some(d));
/// ```
#[derive(Debug, Clone)]
pub struct RouteVisibilityModel {
    routes: RouteSet,
    states: HashMap<String, VisibilityState>,
    initial_reveal: usize,
    palette: Vec<String>,
}

impl RouteVisibilityModel {
    /// Creates an empty model revealing two stops per route on install.
    pub fn new() -> Self {
        Self {
            routes: RouteSet::new(),
            states: HashMap::new(),
            initial_reveal: DEFAULT_INITIAL_REVEAL,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Creates an empty model using the reveal and palette settings of
    /// `config`.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new()
            .with_initial_reveal(config.initial_reveal)
            .with_palette(config.palette.clone())
    }

    /// Sets how many stops are revealed when a route set is installed.
    pub fn with_initial_reveal(mut self, initial_reveal: usize) -> Self {
        self.initial_reveal = initial_reveal;
        self
    }

    /// Replaces the colour palette. An empty palette is ignored.
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        if !palette.is_empty() {
            self.palette = palette;
        }
        self
    }

    /// Installs a new route set, discarding the previous one and resetting
    /// every vehicle to visible with its initial reveal.
    pub fn install(&mut self, routes: RouteSet) {
        self.states = routes
            .iter()
            .map(|(key, route)| {
                (
                    key.to_string(),
                    VisibilityState::initial(route.total_stops(), self.initial_reveal),
                )
            })
            .collect();
        self.routes = routes;
        debug!(
            "Installed {} routes with {} stops",
            self.routes.len(),
            self.routes.total_stops()
        );
    }

    /// Drops the route set and all reveal state.
    pub fn clear(&mut self) {
        self.routes = RouteSet::new();
        self.states.clear();
        debug!("Cleared route visibility");
    }

    /// Shows or hides one vehicle, keeping its reveal progress.
    pub fn toggle_visibility(&mut self, vehicle: &str) {
        if let Some(state) = self.states.get_mut(vehicle) {
            state.toggle();
            trace!("Vehicle {vehicle} visible: {}", state.visible());
        }
    }

    /// Reveals one more stop on every route that is not yet complete.
    pub fn reveal_next_for_all(&mut self) {
        for state in self.states.values_mut() {
            state.reveal_next();
        }
        trace!("Revealed next stop for {} vehicles", self.states.len());
    }

    /// Sets the revealed stop count of one vehicle, clamped to its route.
    pub fn set_revealed_count(&mut self, vehicle: &str, count: usize) {
        if let Some(state) = self.states.get_mut(vehicle) {
            state.set_revealed(count);
            trace!(
                "Vehicle {vehicle} revealed {}/{}",
                state.revealed_stop_count(),
                state.total_stops()
            );
        }
    }

    /// Handles a click on stop marker `stop_index` (1-based).
    ///
    /// Clicking a revealed stop hides it and every stop after it; clicking
    /// a hidden stop reveals everything up to and including it. Index 0 is
    /// the depot and is ignored.
    pub fn click_stop(&mut self, vehicle: &str, stop_index: usize) {
        let Some(state) = self.states.get(vehicle) else {
            return;
        };
        if stop_index == 0 {
            return;
        }
        let count = if stop_index <= state.revealed_stop_count() {
            stop_index - 1
        } else {
            stop_index
        };
        self.set_revealed_count(vehicle, count);
    }

    /// Hides every vehicle if all are visible, otherwise shows all.
    pub fn toggle_all(&mut self) {
        let show = !self.all_visible();
        for state in self.states.values_mut() {
            state.set_visible(show);
        }
        trace!("Toggled all vehicles visible: {show}");
    }

    /// Reveal state of `vehicle`.
    pub fn state(&self, vehicle: &str) -> Option<&VisibilityState> {
        self.states.get(vehicle)
    }

    /// Reveal phase of `vehicle`.
    pub fn phase(&self, vehicle: &str) -> Option<RevealPhase> {
        self.states.get(vehicle).map(VisibilityState::phase)
    }

    /// The installed route set.
    pub fn route_set(&self) -> &RouteSet {
        &self.routes
    }

    /// Number of vehicles with a route.
    pub fn vehicle_count(&self) -> usize {
        self.states.len()
    }

    /// Number of vehicles currently shown.
    pub fn visible_count(&self) -> usize {
        self.states.values().filter(|s| s.visible()).count()
    }

    /// Returns `true` if every vehicle is shown (vacuously for none).
    pub fn all_visible(&self) -> bool {
        self.visible_count() == self.vehicle_count()
    }

    /// Returns `true` if no route set is installed.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The polyline currently drawn for `vehicle`.
    ///
    /// Empty for hidden or unknown vehicles.
    pub fn rendered_path(&self, vehicle: &str) -> Vec<Location> {
        match (self.routes.get(vehicle), self.states.get(vehicle)) {
            (Some(route), Some(state)) => path_for(route, state),
            _ => Vec::new(),
        }
    }

    /// Markers for the revealed stops of `vehicle`, in stop order.
    ///
    /// The depot and the closing point are never included.
    pub fn stop_markers(&self, vehicle: &str) -> Vec<StopMarker> {
        match (self.routes.get(vehicle), self.states.get(vehicle)) {
            (Some(route), Some(state)) => markers_for(route, state),
            _ => Vec::new(),
        }
    }

    /// The single depot marker, drawn whenever a route set is installed.
    pub fn depot_marker(&self) -> Option<Location> {
        self.routes.depot()
    }

    /// Colour of `vehicle`, assigned by its position in the route set.
    pub fn color_of(&self, vehicle: &str) -> Option<&str> {
        self.routes
            .position(vehicle)
            .map(|i| self.palette[i % self.palette.len()].as_str())
    }

    /// Everything to draw right now, in route-set order.
    pub fn frame(&self) -> RouteFrame {
        let layers = self
            .routes
            .iter()
            .enumerate()
            .filter_map(|(i, (vehicle, route))| {
                let state = self.states.get(vehicle)?;
                if !state.visible() {
                    return None;
                }
                Some(VehicleLayer {
                    vehicle: vehicle.to_string(),
                    color: self.palette[i % self.palette.len()].clone(),
                    path: path_for(route, state),
                    markers: markers_for(route, state),
                })
            })
            .collect();
        RouteFrame {
            depot: self.depot_marker(),
            layers,
        }
    }
}

impl Default for RouteVisibilityModel {
    fn default() -> Self {
        Self::new()
    }
}
