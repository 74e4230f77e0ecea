//! Per-leg summaries of planned routes for higher-level consumers.

use std::f64::consts::SQRT_2;
use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::{GridCell, WeatherGrid};
use crate::path::PlannerConfig;
use crate::routing::RoutePlan;
use crate::vessel::{FuelModel, KMH_PER_KNOT};

/// One waypoint of a summarized route with the conditions met there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub index: usize,
    pub cell: GridCell,
    /// Wind magnitude at the waypoint in m/s.
    pub wind_speed_ms: f64,
    /// Wave height at the waypoint in metres.
    pub wave_height_m: f64,
    /// Fuel burned reaching this waypoint from the previous one, in tonnes;
    /// zero for the start cell.
    pub leg_fuel_tonnes: f64,
    pub cumulative_fuel_tonnes: f64,
}

/// Structured representation of a planned route that consumers can
/// serialize or render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub speed_knots: f64,
    pub hops: usize,
    pub total_fuel_tonnes: f64,
    pub legs: Vec<RouteLeg>,
}

impl RouteSummary {
    /// Annotate a plan with per-leg weather and fuel.
    ///
    /// Unlike the search, which treats a missing sample as an impassable
    /// neighbour, a summary needs conditions at every waypoint and reports
    /// `WeatherUnavailable` when one is absent. An empty plan (no path
    /// found) cannot be summarized.
    pub fn from_plan(
        grid: &dyn WeatherGrid,
        model: &FuelModel,
        config: &PlannerConfig,
        plan: &RoutePlan,
    ) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let speed_kmh = plan.speed_knots * KMH_PER_KNOT;
        let mut legs = Vec::with_capacity(plan.steps.len());
        let mut cumulative = 0.0;
        let mut previous: Option<GridCell> = None;

        for (index, &cell) in plan.steps.iter().enumerate() {
            let sample =
                grid.sample(cell, config.time_index)
                    .ok_or(Error::WeatherUnavailable {
                        lat_index: cell.lat_index,
                        lon_index: cell.lon_index,
                        time_index: config.time_index,
                    })?;

            let leg_fuel = match previous {
                None => 0.0,
                Some(prev) => {
                    let diagonal =
                        prev.lat_index != cell.lat_index && prev.lon_index != cell.lon_index;
                    let distance_km = config.cell_spacing_km * if diagonal { SQRT_2 } else { 1.0 };
                    let rate = model.fuel_burn_rate(plan.speed_knots, &sample)?;
                    rate * (distance_km / speed_kmh)
                }
            };
            cumulative += leg_fuel;

            legs.push(RouteLeg {
                index,
                cell,
                wind_speed_ms: sample.wind_speed(),
                wave_height_m: sample.wave_height,
                leg_fuel_tonnes: leg_fuel,
                cumulative_fuel_tonnes: cumulative,
            });
            previous = Some(cell);
        }

        Ok(Self {
            speed_knots: plan.speed_knots,
            hops: plan.hop_count(),
            total_fuel_tonnes: plan.total_fuel_tonnes,
            legs,
        })
    }

    /// Plain-text rendering, one line per waypoint.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Route: {} hops at {:.1} kn, {:.3} t fuel",
            self.hops, self.speed_knots, self.total_fuel_tonnes
        );
        for leg in &self.legs {
            let _ = writeln!(
                out,
                "{:>3}. ({}, {})  wind {:>5.1} m/s  waves {:>4.1} m  fuel {:.3} t (total {:.3} t)",
                leg.index,
                leg.cell.lat_index,
                leg.cell.lon_index,
                leg.wind_speed_ms,
                leg.wave_height_m,
                leg.leg_fuel_tonnes,
                leg.cumulative_fuel_tonnes
            );
        }
        out
    }
}
