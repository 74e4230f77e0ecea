use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::f64::consts::SQRT_2;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::grid::{GridCell, WeatherGrid};
use crate::vessel::{FuelModel, KMH_PER_KNOT};

/// The eight lattice directions as `(d_lat, d_lon)` offsets.
const DIRECTIONS: [(i64, i64); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Fixed lattice geometry and reference time for a planning run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Distance between orthogonally adjacent cells in kilometres.
    pub cell_spacing_km: f64,
    /// Time slice sampled for every weather lookup during the search.
    pub time_index: usize,
}

impl Default for PlannerConfig {
    /// A 0.5 degree lattice at 111 km per degree.
    fn default() -> Self {
        Self {
            cell_spacing_km: 55.0,
            time_index: 0,
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.cell_spacing_km.is_finite() || self.cell_spacing_km <= 0.0 {
            return Err(Error::InvalidParameter {
                message: format!(
                    "cell_spacing_km must be finite and positive, got {}",
                    self.cell_spacing_km
                ),
            });
        }
        Ok(())
    }
}

/// Route found by the search: waypoints in start-to-goal order plus the
/// accumulated fuel to traverse them.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub steps: Vec<GridCell>,
    pub total_fuel_tonnes: f64,
}

/// In-bounds lattice neighbours of a cell, paired with whether the move is
/// diagonal. The lattice has hard edges; indices never wrap.
pub fn neighbours(cell: GridCell, lat_count: usize, lon_count: usize) -> Vec<(GridCell, bool)> {
    let mut out = Vec::with_capacity(DIRECTIONS.len());
    for (d_lat, d_lon) in DIRECTIONS {
        let lat = cell.lat_index as i64 + d_lat;
        let lon = cell.lon_index as i64 + d_lon;
        if lat < 0 || lon < 0 || lat >= lat_count as i64 || lon >= lon_count as i64 {
            continue;
        }
        out.push((
            GridCell::new(lat as usize, lon as usize),
            d_lat != 0 && d_lon != 0,
        ));
    }
    out
}

/// Run A* over the lattice, minimizing accumulated fuel.
///
/// Edge costs are the fuel model's burn rate at the neighbour's weather
/// multiplied by the transit time for the move; the heuristic scales
/// straight-line index distance by the calm-water burn-per-km floor, which
/// never overestimates because weather only ever adds resistance.
///
/// Returns `Ok(None)` when the frontier exhausts without reaching the goal.
/// Neighbours without a weather sample are skipped rather than failing the
/// search; so are samples the fuel model rejects, keeping NaN out of the
/// frontier ordering.
pub fn find_route_astar(
    grid: &dyn WeatherGrid,
    model: &FuelModel,
    config: &PlannerConfig,
    start: GridCell,
    goal: GridCell,
    speed_knots: f64,
) -> Result<Option<SearchResult>> {
    if start == goal {
        return Ok(Some(SearchResult {
            steps: vec![start],
            total_fuel_tonnes: 0.0,
        }));
    }

    let floor_per_km = model.calm_water_burn_per_km(speed_knots)?;
    let speed_kmh = speed_knots * KMH_PER_KNOT;
    let lat_count = grid.lat_count();
    let lon_count = grid.lon_count();

    // Lowest accumulated fuel recorded for a cell so far, pending or settled.
    let mut best_known: HashMap<GridCell, f64> = HashMap::new();
    // Best-cost table: cells whose minimum accumulated fuel is settled.
    let mut finalized: HashMap<GridCell, f64> = HashMap::new();
    let mut came_from: HashMap<GridCell, GridCell> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut pushes: u64 = 0;

    best_known.insert(start, 0.0);
    let seed_estimate = heuristic_fuel(start, goal, config.cell_spacing_km, floor_per_km);
    frontier.push(FrontierEntry::new(start, 0.0, seed_estimate, pushes));

    debug!(
        "searching ({}, {}) -> ({}, {}) at {:.1} kn over {}x{} lattice",
        start.lat_index, start.lon_index, goal.lat_index, goal.lon_index, speed_knots, lat_count,
        lon_count
    );

    while let Some(entry) = frontier.pop() {
        if entry.cell == goal {
            let steps = reconstruct_path(&came_from, start, goal);
            debug!(
                "goal reached after {} pushes, total fuel {:.3} t",
                pushes, entry.cost.0
            );
            return Ok(Some(SearchResult {
                steps,
                total_fuel_tonnes: entry.cost.0,
            }));
        }

        // A node is stale when its cell was already settled at least as
        // cheaply by an earlier pop.
        if let Some(&settled) = finalized.get(&entry.cell) {
            if settled <= entry.cost.0 {
                continue;
            }
        }
        finalized.insert(entry.cell, entry.cost.0);

        for (neighbour, diagonal) in neighbours(entry.cell, lat_count, lon_count) {
            let Some(sample) = grid.sample(neighbour, config.time_index) else {
                // Missing data makes the cell impassable for this step.
                continue;
            };
            let rate = match model.fuel_burn_rate(speed_knots, &sample) {
                Ok(rate) => rate,
                Err(error) => {
                    warn!(
                        "skipping cell ({}, {}) with malformed sample: {error}",
                        neighbour.lat_index, neighbour.lon_index
                    );
                    continue;
                }
            };

            let distance_km = config.cell_spacing_km * if diagonal { SQRT_2 } else { 1.0 };
            let transit_hours = distance_km / speed_kmh;
            let tentative = entry.cost.0 + rate * transit_hours;

            // Push only on strict improvement over the best recorded cost.
            if tentative < *best_known.get(&neighbour).unwrap_or(&f64::INFINITY) {
                best_known.insert(neighbour, tentative);
                came_from.insert(neighbour, entry.cell);
                let estimate =
                    heuristic_fuel(neighbour, goal, config.cell_spacing_km, floor_per_km);
                pushes += 1;
                frontier.push(FrontierEntry::new(neighbour, tentative, estimate, pushes));
            }
        }
    }

    debug!("frontier exhausted after {} pushes, no route", pushes);
    Ok(None)
}

/// Lower bound on the fuel to reach `goal` from `from`: straight-line index
/// distance scaled by the cell spacing and the calm-water burn floor.
fn heuristic_fuel(from: GridCell, goal: GridCell, cell_spacing_km: f64, floor_per_km: f64) -> f64 {
    from.index_distance(&goal) * cell_spacing_km * floor_per_km
}

fn reconstruct_path(
    came_from: &HashMap<GridCell, GridCell>,
    start: GridCell,
    goal: GridCell,
) -> Vec<GridCell> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    cell: GridCell,
    cost: FloatOrd,
    estimate: FloatOrd,
    seq: u64,
}

impl FrontierEntry {
    fn new(cell: GridCell, cost: f64, heuristic: f64, seq: u64) -> Self {
        Self {
            cell,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
            seq,
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap on the estimate;
        // equal estimates pop in insertion order to keep results stable.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
