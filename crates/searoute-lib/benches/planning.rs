use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use searoute_lib::{
    GridBounds, GridCell, OceanGrid, RoutePlanner, VesselParameters, WeatherSample,
};
use std::hint::black_box;

static SYNTHETIC_GRID: Lazy<OceanGrid> =
    Lazy::new(|| OceanGrid::synthetic(GridBounds::default(), 0.5, 4, 42).expect("synthetic field"));

static CALM_GRID: Lazy<OceanGrid> =
    Lazy::new(|| OceanGrid::filled(40, 40, 1, WeatherSample::CALM).expect("valid dimensions"));

fn benchmark_planning(c: &mut Criterion) {
    let vessel = VesselParameters::default();

    c.bench_function("plan_calm_40x40_diagonal", |b| {
        let planner = RoutePlanner::new(&*CALM_GRID, vessel);
        b.iter(|| {
            let plan = planner
                .plan(GridCell::new(0, 0), GridCell::new(39, 39), 15.0)
                .expect("route exists");
            black_box(plan.hop_count())
        });
    });

    c.bench_function("plan_synthetic_indian_ocean", |b| {
        let planner = RoutePlanner::new(&*SYNTHETIC_GRID, vessel);
        b.iter(|| {
            let plan = planner
                .plan(GridCell::new(10, 10), GridCell::new(50, 50), 18.0)
                .expect("route exists");
            black_box(plan.total_fuel_tonnes)
        });
    });
}

criterion_group!(benches, benchmark_planning);
criterion_main!(benches);
