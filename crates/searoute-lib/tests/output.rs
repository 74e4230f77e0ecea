use searoute_lib::{
    Error, GridCell, OceanGrid, RoutePlanner, RouteSummary, VesselParameters, WeatherSample,
};

fn cell(lat: usize, lon: usize) -> GridCell {
    GridCell::new(lat, lon)
}

#[test]
fn summary_breaks_a_route_into_legs() {
    let grid = OceanGrid::filled(3, 3, 1, WeatherSample::CALM).expect("valid dimensions");
    let planner = RoutePlanner::new(&grid, VesselParameters::default());
    let plan = planner
        .plan(cell(0, 0), cell(2, 2), 12.0)
        .expect("valid request");

    let summary = RouteSummary::from_plan(
        &grid,
        planner.model(),
        planner.config(),
        &plan,
    )
    .expect("plan has waypoints");

    assert_eq!(summary.hops, 2);
    assert_eq!(summary.legs.len(), 3);
    assert_eq!(summary.legs[0].leg_fuel_tonnes, 0.0);
    let last = summary.legs.last().unwrap();
    assert!((last.cumulative_fuel_tonnes - summary.total_fuel_tonnes).abs() < 1e-9);
    assert!((summary.total_fuel_tonnes - 5.18278828213238).abs() < 1e-9);

    let text = summary.render_text();
    assert!(text.starts_with("Route: 2 hops"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn summary_serializes_to_json() {
    let grid = OceanGrid::filled(3, 3, 1, WeatherSample::CALM).expect("valid dimensions");
    let planner = RoutePlanner::new(&grid, VesselParameters::default());
    let plan = planner
        .plan(cell(0, 0), cell(0, 2), 12.0)
        .expect("valid request");
    let summary =
        RouteSummary::from_plan(&grid, planner.model(), planner.config(), &plan).expect("summary");

    let value = serde_json::to_value(&summary).expect("serializable");
    assert_eq!(value["hops"], 2);
    assert_eq!(value["legs"].as_array().unwrap().len(), 3);
    assert_eq!(value["legs"][1]["cell"]["lat_index"], 0);
    assert_eq!(value["legs"][1]["cell"]["lon_index"], 1);
}

#[test]
fn empty_plan_cannot_be_summarized() {
    let mut grid = OceanGrid::filled(3, 3, 1, WeatherSample::CALM).expect("valid dimensions");
    for lat in 0..3 {
        grid.clear(cell(lat, 1), 0);
    }
    let planner = RoutePlanner::new(&grid, VesselParameters::default());
    let plan = planner
        .plan(cell(0, 0), cell(0, 2), 12.0)
        .expect("no path is a valid outcome");
    assert!(!plan.found());

    let error = RouteSummary::from_plan(&grid, planner.model(), planner.config(), &plan)
        .expect_err("nothing to summarize");
    assert!(matches!(error, Error::EmptyRoutePlan));
}

#[test]
fn summary_reports_missing_weather_on_the_route() {
    let grid = OceanGrid::filled(3, 3, 1, WeatherSample::CALM).expect("valid dimensions");
    let vessel = VesselParameters::default();
    let plan = {
        let planner = RoutePlanner::new(&grid, vessel);
        planner
            .plan(cell(0, 0), cell(2, 2), 12.0)
            .expect("valid request")
    };

    // The field loses a waypoint's data between planning and reporting.
    let mut stale = grid.clone();
    let lost = plan.steps[1];
    stale.clear(lost, 0);

    let planner = RoutePlanner::new(&stale, vessel);
    let error = RouteSummary::from_plan(&stale, planner.model(), planner.config(), &plan)
        .expect_err("waypoint weather is gone");
    assert!(matches!(
        error,
        Error::WeatherUnavailable { time_index: 0, .. }
    ));
}
