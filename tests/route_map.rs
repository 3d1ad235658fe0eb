use fleet_routes::error::{Error, Result};
use fleet_routes::models::{GeoBounds, Location, Route, RouteSet, SAMPLE_LOCATIONS};
use fleet_routes::optimize::{
    LocalOptimizer, OptimizeRoutesRequest, OptimizeRoutesResponse, RouteOptimizer, RoutePlanner,
    RouteSource,
};
use fleet_routes::partition::partition_contiguous;
use fleet_routes::visibility::{RevealPhase, RouteVisibilityModel};

fn unreachable_service(_: &OptimizeRoutesRequest) -> Result<OptimizeRoutesResponse> {
    Err(Error::Status(502))
}

fn points() -> [Location; 5] {
    [
        Location::new(-33.4489, -70.6693),
        Location::new(-33.4372, -70.6506),
        Location::new(-33.4052, -70.5751),
        Location::new(-33.4569, -70.5987),
        Location::new(-33.5138, -70.6052),
    ]
}

#[test]
fn test_fallback_partition_and_default_reveal() {
    let [d, a, b, c, e] = points();
    let mut planner = RoutePlanner::new();
    let mut model = RouteVisibilityModel::new();

    let outcome = planner
        .plan(&unreachable_service, &points(), 2, &mut model)
        .expect("plan");
    assert_eq!(outcome.source, RouteSource::Fallback);
    assert_eq!(outcome.routes.get("0").expect("v0").points(), &[d, a, b, d]);
    assert_eq!(outcome.routes.get("1").expect("v1").points(), &[d, c, e, d]);

    for key in ["0", "1"] {
        assert_eq!(model.phase(key), Some(RevealPhase::FullyRevealed));
    }
    assert_eq!(model.rendered_path("0"), vec![d, a, b, d]);
    assert_eq!(model.depot_marker(), Some(d));
}

#[test]
fn test_partial_reveal_and_click_to_retract() {
    let [d, s1, s2, s3, _] = points();
    let mut routes = RouteSet::new();
    routes
        .insert("0", Route::round_trip(d, [s1, s2, s3]))
        .expect("insert");
    let mut model = RouteVisibilityModel::new();
    model.install(routes);

    assert_eq!(model.rendered_path("0"), vec![d, s1, s2]);
    model.reveal_next_for_all();
    assert_eq!(model.rendered_path("0"), vec![d, s1, s2, s3, d]);

    // Clicking revealed stop 3 hides it.
    model.click_stop("0", 3);
    let markers = model.stop_markers("0");
    assert_eq!(model.state("0").expect("state").revealed_stop_count(), 2);
    assert!(markers.iter().all(|m| m.stop_index != 3));
    assert_eq!(model.rendered_path("0"), vec![d, s1, s2]);
}

#[test]
fn test_optimizer_routes_drive_the_frame() {
    let bounds = GeoBounds::default();
    let locations = bounds.filter_locations(&SAMPLE_LOCATIONS);
    let mut planner = RoutePlanner::new();
    let mut model = RouteVisibilityModel::new();

    let outcome = planner
        .plan(&LocalOptimizer::new(), &locations, 3, &mut model)
        .expect("plan");
    assert_eq!(outcome.source, RouteSource::Optimizer);

    let frame = model.frame();
    assert_eq!(frame.depot, Some(SAMPLE_LOCATIONS[0]));
    assert_eq!(frame.layers.len(), 3);
    for layer in &frame.layers {
        assert_eq!(layer.path[0], SAMPLE_LOCATIONS[0]);
        assert!(layer.markers.len() <= 2);
    }

    model.toggle_all();
    let hidden = model.frame();
    assert!(hidden.layers.is_empty());
    assert_eq!(hidden.depot, Some(SAMPLE_LOCATIONS[0]));
}

#[test]
fn test_stale_answer_never_overwrites_newer_routes() {
    let mut planner = RoutePlanner::new();
    let mut model = RouteVisibilityModel::new();

    let first = planner.begin(&SAMPLE_LOCATIONS, 1).expect("ticket");
    let second = planner.begin(&SAMPLE_LOCATIONS, 3).expect("ticket");

    planner
        .finish(second, Err(Error::Status(500)), &mut model)
        .expect("current ticket applies");
    assert_eq!(model.vehicle_count(), 3);

    let late = LocalOptimizer::new().optimize(first.request());
    assert!(planner.finish(first, late, &mut model).is_none());
    assert_eq!(model.vehicle_count(), 3);
}

#[test]
fn test_cleared_model_ignores_stale_callbacks() {
    let mut model = RouteVisibilityModel::new();
    model.install(partition_contiguous(&SAMPLE_LOCATIONS, 2));
    model.clear();
    model.set_revealed_count("0", 5);
    model.click_stop("1", 1);
    model.toggle_visibility("0");
    assert!(model.frame().is_empty());
    assert!(model.rendered_path("0").is_empty());
}
