//! searoute library entry points.
//!
//! This crate models a gridded ocean-weather field, a vessel resistance and
//! fuel-burn model, and a fuel-minimizing A* planner over the grid.
//! Higher-level consumers (the CLI, batch tooling) should depend on the
//! types exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod grid;
pub mod output;
pub mod path;
pub mod routing;
pub mod vessel;

pub use error::{Error, Result};
pub use grid::{GridBounds, GridCell, OceanGrid, WeatherGrid, WeatherSample, KM_PER_DEGREE};
pub use output::{RouteLeg, RouteSummary};
pub use path::{find_route_astar, PlannerConfig, SearchResult};
pub use routing::{RoutePlan, RoutePlanner};
pub use vessel::{FuelModel, VesselParameters};
