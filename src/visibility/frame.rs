//! Draw lists derived from the visibility model.

use serde::Serialize;

use crate::models::{Location, Route};

use super::VisibilityState;

/// Route colours, assigned by route position and cycled past the end.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#3b82f6", // blue
    "#ef4444", // red
    "#22c55e", // green
    "#f97316", // orange
    "#8b5cf6", // purple
    "#06b6d4", // cyan
    "#ec4899", // pink
    "#eab308", // yellow
];

/// A numbered stop marker. `stop_index` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StopMarker {
    pub location: Location,
    pub stop_index: usize,
}

/// Everything drawn for one visible vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleLayer {
    pub vehicle: String,
    pub color: String,
    pub path: Vec<Location>,
    pub markers: Vec<StopMarker>,
}

/// The complete map overlay for the current state.
///
/// The depot marker is present whenever any route is installed, even if
/// every vehicle is hidden. Layers appear in route-set order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteFrame {
    pub depot: Option<Location>,
    pub layers: Vec<VehicleLayer>,
}

impl RouteFrame {
    /// Returns `true` if nothing at all would be drawn.
    pub fn is_empty(&self) -> bool {
        self.depot.is_none() && self.layers.is_empty()
    }

    /// Layer for `vehicle`, if it is drawn.
    pub fn layer(&self, vehicle: &str) -> Option<&VehicleLayer> {
        self.layers.iter().find(|l| l.vehicle == vehicle)
    }
}

/// Polyline for `route` under `state`.
///
/// `[depot, stop_1 .. stop_n]` for `n` revealed stops, closed back to the
/// depot only when every stop is revealed. Hidden routes yield nothing.
pub(crate) fn path_for(route: &Route, state: &VisibilityState) -> Vec<Location> {
    if !state.visible() {
        return Vec::new();
    }
    let points = route.points();
    let revealed = state.revealed_stop_count();
    let mut path = points[..=revealed].to_vec();
    if state.is_fully_revealed() {
        path.push(route.depot());
    }
    path
}

/// Numbered markers for the revealed stops of `route` under `state`.
pub(crate) fn markers_for(route: &Route, state: &VisibilityState) -> Vec<StopMarker> {
    if !state.visible() {
        return Vec::new();
    }
    let points = route.points();
    (1..=state.revealed_stop_count())
        .map(|stop_index| StopMarker {
            location: points[stop_index],
            stop_index,
        })
        .collect()
}
