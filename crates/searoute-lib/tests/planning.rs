use searoute_lib::path::neighbours;
use searoute_lib::{
    Error, GridBounds, GridCell, OceanGrid, RoutePlanner, VesselParameters, WeatherSample,
};

fn calm_grid(lat_count: usize, lon_count: usize) -> OceanGrid {
    OceanGrid::filled(lat_count, lon_count, 1, WeatherSample::CALM).expect("valid dimensions")
}

fn cell(lat: usize, lon: usize) -> GridCell {
    GridCell::new(lat, lon)
}

#[test]
fn calm_grid_routes_along_the_diagonal() {
    let grid = calm_grid(5, 5);
    let planner = RoutePlanner::new(&grid, VesselParameters::default());

    let plan = planner
        .plan(cell(0, 0), cell(4, 4), 18.0)
        .expect("valid request");

    assert_eq!(
        plan.steps,
        vec![cell(0, 0), cell(1, 1), cell(2, 2), cell(3, 3), cell(4, 4)]
    );
    // Four diagonal legs in flat calm at 18 kn.
    assert!((plan.total_fuel_tonnes - 23.322547269595717).abs() < 1e-9);
}

#[test]
fn high_wave_cell_forces_a_detour() {
    let mut grid = calm_grid(5, 5);
    grid.set(
        cell(2, 2),
        0,
        WeatherSample {
            u_wind: 0.0,
            v_wind: 0.0,
            wave_height: 6.0,
        },
    );
    let planner = RoutePlanner::new(&grid, VesselParameters::default());

    let plan = planner
        .plan(cell(0, 0), cell(4, 4), 18.0)
        .expect("valid request");

    assert!(plan.found());
    assert!(
        !plan.steps.contains(&cell(2, 2)),
        "route should avoid the high-wave cell, got {:?}",
        plan.steps
    );
    // Cheapest detour swaps one diagonal leg for two orthogonal ones, all
    // in calm water: three diagonals plus two straights.
    assert_eq!(plan.steps.len(), 6);
    assert!((plan.total_fuel_tonnes - 25.737676116634255).abs() < 1e-9);
}

#[test]
fn raising_waves_on_the_optimal_route_never_cheapens_it() {
    let calm = calm_grid(5, 5);
    let planner = RoutePlanner::new(&calm, VesselParameters::default());
    let baseline = planner
        .plan(cell(0, 0), cell(4, 4), 18.0)
        .expect("valid request");

    let mut rough = calm_grid(5, 5);
    rough.set(
        cell(2, 2),
        0,
        WeatherSample {
            u_wind: 0.0,
            v_wind: 0.0,
            wave_height: 1.0,
        },
    );
    let planner = RoutePlanner::new(&rough, VesselParameters::default());
    let perturbed = planner
        .plan(cell(0, 0), cell(4, 4), 18.0)
        .expect("valid request");

    assert!(perturbed.total_fuel_tonnes > baseline.total_fuel_tonnes);
}

#[test]
fn missing_weather_excludes_the_cell_without_failing_the_search() {
    let mut grid = calm_grid(5, 5);
    grid.clear(cell(2, 2), 0);
    let planner = RoutePlanner::new(&grid, VesselParameters::default());

    let plan = planner
        .plan(cell(0, 0), cell(4, 4), 18.0)
        .expect("gap is not an error");

    assert!(plan.found());
    assert!(!plan.steps.contains(&cell(2, 2)));
    // Same calm detour as routing around a storm cell.
    assert!((plan.total_fuel_tonnes - 25.737676116634255).abs() < 1e-9);
}

#[test]
fn fully_blocking_gap_yields_an_empty_plan() {
    let mut grid = calm_grid(5, 5);
    for lat in 0..5 {
        grid.clear(cell(lat, 2), 0);
    }
    let planner = RoutePlanner::new(&grid, VesselParameters::default());

    let plan = planner
        .plan(cell(2, 0), cell(2, 4), 14.0)
        .expect("no path is a valid outcome");

    assert!(!plan.found());
    assert!(plan.steps.is_empty());
    assert_eq!(plan.total_fuel_tonnes, 0.0);
    assert_eq!(plan.hop_count(), 0);
}

#[test]
fn corner_and_edge_cells_only_expand_in_bounds() {
    assert_eq!(neighbours(cell(0, 0), 5, 5).len(), 3);
    assert_eq!(neighbours(cell(4, 4), 5, 5).len(), 3);
    assert_eq!(neighbours(cell(0, 2), 5, 5).len(), 5);
    assert_eq!(neighbours(cell(2, 2), 5, 5).len(), 8);

    for (neighbour, _) in neighbours(cell(0, 0), 5, 5) {
        assert!(neighbour.lat_index < 5 && neighbour.lon_index < 5);
    }
}

#[test]
fn route_from_a_corner_stays_on_the_grid() {
    let grid = calm_grid(3, 3);
    let planner = RoutePlanner::new(&grid, VesselParameters::default());

    let plan = planner
        .plan(cell(0, 0), cell(2, 0), 10.0)
        .expect("valid request");
    assert!(plan.found());
    for step in &plan.steps {
        assert!(step.lat_index < 3 && step.lon_index < 3);
    }
}

#[test]
fn identical_inputs_produce_identical_routes() {
    let grid = OceanGrid::synthetic(GridBounds::default(), 0.5, 4, 42).expect("synthetic field");
    let vessel = VesselParameters::default();

    let planner = RoutePlanner::new(&grid, vessel);
    let first = planner
        .plan(cell(10, 10), cell(40, 55), 14.0)
        .expect("valid request");
    let second = planner
        .plan(cell(10, 10), cell(40, 55), 14.0)
        .expect("valid request");
    assert_eq!(first.steps, second.steps);
    assert_eq!(first.total_fuel_tonnes, second.total_fuel_tonnes);

    // A fresh planner over an identically seeded grid agrees as well.
    let regenerated =
        OceanGrid::synthetic(GridBounds::default(), 0.5, 4, 42).expect("synthetic field");
    let planner = RoutePlanner::new(&regenerated, vessel);
    let third = planner
        .plan(cell(10, 10), cell(40, 55), 14.0)
        .expect("valid request");
    assert_eq!(first.steps, third.steps);
    assert_eq!(first.total_fuel_tonnes, third.total_fuel_tonnes);
}

#[test]
fn out_of_bounds_goal_is_an_error_not_an_empty_plan() {
    let grid = calm_grid(5, 5);
    let planner = RoutePlanner::new(&grid, VesselParameters::default());

    let error = planner
        .plan(cell(0, 0), cell(5, 5), 14.0)
        .expect_err("goal outside grid");
    assert!(matches!(
        error,
        Error::InvalidIndex {
            lat_index: 5,
            lon_index: 5,
            lat_count: 5,
            lon_count: 5,
        }
    ));
}
