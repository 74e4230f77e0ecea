//! Route planning entry point.
//!
//! [`RoutePlanner`] binds a weather grid, a vessel's fuel model, and the
//! lattice configuration, and exposes the single [`RoutePlanner::plan`]
//! operation. A plan with no waypoints means the goal is unreachable; that
//! is a valid outcome, not an error.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{GridCell, WeatherGrid};
use crate::path::{find_route_astar, PlannerConfig};
use crate::vessel::{FuelModel, VesselParameters};

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: GridCell,
    pub goal: GridCell,
    pub speed_knots: f64,
    /// Waypoints in start-to-goal order; empty when no route exists.
    pub steps: Vec<GridCell>,
    /// Accumulated fuel along `steps`, in tonnes.
    pub total_fuel_tonnes: f64,
}

impl RoutePlan {
    /// Whether the search reached the goal.
    pub fn found(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Number of legs in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Fuel-minimizing grid planner over a shared, read-only weather field.
///
/// Each `plan` call owns its frontier and cost tables, so independent
/// planners over the same grid may run concurrently.
pub struct RoutePlanner<'a> {
    grid: &'a dyn WeatherGrid,
    model: FuelModel,
    config: PlannerConfig,
}

impl<'a> RoutePlanner<'a> {
    /// Planner with the default lattice configuration.
    pub fn new(grid: &'a dyn WeatherGrid, vessel: VesselParameters) -> Self {
        Self {
            grid,
            model: FuelModel::new(vessel),
            config: PlannerConfig::default(),
        }
    }

    /// Planner with an explicit, validated lattice configuration.
    pub fn with_config(
        grid: &'a dyn WeatherGrid,
        vessel: VesselParameters,
        config: PlannerConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid,
            model: FuelModel::new(vessel),
            config,
        })
    }

    pub fn model(&self) -> &FuelModel {
        &self.model
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Compute the minimum-fuel route from `start` to `goal` at a fixed
    /// transit speed in knots.
    ///
    /// Fails fast with `InvalidIndex` when either endpoint is off the grid
    /// and `InvalidSpeed` for a non-positive or non-finite speed. An empty
    /// step sequence in the returned plan denotes "no path found".
    pub fn plan(&self, start: GridCell, goal: GridCell, speed_knots: f64) -> Result<RoutePlan> {
        self.check_bounds(start)?;
        self.check_bounds(goal)?;
        if !speed_knots.is_finite() || speed_knots <= 0.0 {
            return Err(Error::InvalidSpeed { speed: speed_knots });
        }

        let outcome = find_route_astar(
            self.grid,
            &self.model,
            &self.config,
            start,
            goal,
            speed_knots,
        )?;

        match outcome {
            Some(result) => Ok(RoutePlan {
                start,
                goal,
                speed_knots,
                steps: result.steps,
                total_fuel_tonnes: result.total_fuel_tonnes,
            }),
            None => {
                debug!(
                    "no route from ({}, {}) to ({}, {})",
                    start.lat_index, start.lon_index, goal.lat_index, goal.lon_index
                );
                Ok(RoutePlan {
                    start,
                    goal,
                    speed_knots,
                    steps: Vec::new(),
                    total_fuel_tonnes: 0.0,
                })
            }
        }
    }

    fn check_bounds(&self, cell: GridCell) -> Result<()> {
        if self.grid.contains(cell) {
            return Ok(());
        }
        Err(Error::InvalidIndex {
            lat_index: cell.lat_index,
            lon_index: cell.lon_index,
            lat_count: self.grid.lat_count(),
            lon_count: self.grid.lon_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{OceanGrid, WeatherSample};

    fn calm_grid() -> OceanGrid {
        OceanGrid::filled(4, 4, 1, WeatherSample::CALM).expect("valid dimensions")
    }

    #[test]
    fn default_config_matches_half_degree_lattice() {
        let config = PlannerConfig::default();
        assert_eq!(config.cell_spacing_km, 55.0);
        assert_eq!(config.time_index, 0);
    }

    #[test]
    fn out_of_bounds_start_is_rejected() {
        let grid = calm_grid();
        let planner = RoutePlanner::new(&grid, VesselParameters::default());

        let error = planner
            .plan(GridCell::new(9, 0), GridCell::new(1, 1), 12.0)
            .expect_err("start outside grid");
        assert!(matches!(error, Error::InvalidIndex { lat_index: 9, .. }));
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        let grid = calm_grid();
        let planner = RoutePlanner::new(&grid, VesselParameters::default());

        for speed in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let error = planner
                .plan(GridCell::new(0, 0), GridCell::new(1, 1), speed)
                .expect_err("invalid speed");
            assert!(matches!(error, Error::InvalidSpeed { .. }));
        }
    }

    #[test]
    fn degenerate_route_has_single_waypoint_and_no_fuel() {
        let grid = calm_grid();
        let planner = RoutePlanner::new(&grid, VesselParameters::default());

        let plan = planner
            .plan(GridCell::new(2, 2), GridCell::new(2, 2), 12.0)
            .expect("valid request");
        assert!(plan.found());
        assert_eq!(plan.steps, vec![GridCell::new(2, 2)]);
        assert_eq!(plan.hop_count(), 0);
        assert_eq!(plan.total_fuel_tonnes, 0.0);
    }

    #[test]
    fn invalid_cell_spacing_is_rejected() {
        let grid = calm_grid();
        let config = PlannerConfig {
            cell_spacing_km: 0.0,
            time_index: 0,
        };
        let error = RoutePlanner::with_config(&grid, VesselParameters::default(), config)
            .err()
            .expect("zero spacing rejected");
        assert!(matches!(error, Error::InvalidParameter { .. }));
    }
}
