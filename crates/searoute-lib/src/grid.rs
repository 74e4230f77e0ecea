//! Gridded ocean-weather field and the accessor trait consumed by the planner.
//!
//! The planner only ever talks to [`WeatherGrid`]; [`OceanGrid`] is the
//! in-memory implementation used by tests, benches, and the CLI. Wind
//! components are in m/s, wave heights in metres.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kilometres per degree of latitude, the flat-earth approximation used to
/// convert lattice resolution into cell spacing.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Index of one cell on the latitude/longitude lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub lat_index: usize,
    pub lon_index: usize,
}

impl GridCell {
    pub fn new(lat_index: usize, lon_index: usize) -> Self {
        Self {
            lat_index,
            lon_index,
        }
    }

    /// Euclidean distance to another cell in index units.
    pub fn index_distance(&self, other: &Self) -> f64 {
        let d_lat = self.lat_index as f64 - other.lat_index as f64;
        let d_lon = self.lon_index as f64 - other.lon_index as f64;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }
}

/// Wind and wave conditions at one grid cell and time slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Eastward wind component in m/s.
    pub u_wind: f64,
    /// Northward wind component in m/s.
    pub v_wind: f64,
    /// Significant wave height in metres.
    pub wave_height: f64,
}

impl WeatherSample {
    /// Flat calm: no wind, no waves.
    pub const CALM: WeatherSample = WeatherSample {
        u_wind: 0.0,
        v_wind: 0.0,
        wave_height: 0.0,
    };

    /// Wind magnitude in m/s.
    pub fn wind_speed(&self) -> f64 {
        self.u_wind.hypot(self.v_wind)
    }

    /// Whether every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.u_wind.is_finite() && self.v_wind.is_finite() && self.wave_height.is_finite()
    }
}

/// Read-only accessor over a gridded weather field.
///
/// Implementations must tolerate concurrent readers: independent `plan`
/// calls share one grid and never mutate it.
pub trait WeatherGrid: Send + Sync {
    /// Number of latitude rows in the lattice.
    fn lat_count(&self) -> usize;

    /// Number of longitude columns in the lattice.
    fn lon_count(&self) -> usize;

    /// Conditions at a cell for a time slice, or `None` when no data exists.
    fn sample(&self, cell: GridCell, time_index: usize) -> Option<WeatherSample>;

    /// Whether a cell lies within the lattice.
    fn contains(&self, cell: GridCell) -> bool {
        cell.lat_index < self.lat_count() && cell.lon_index < self.lon_count()
    }
}

/// Geographic window covered by a grid, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Default for GridBounds {
    /// Indian Ocean window used by the synthetic field.
    fn default() -> Self {
        Self {
            min_lat: -10.0,
            max_lat: 30.0,
            min_lon: 50.0,
            max_lon: 100.0,
        }
    }
}

/// In-memory `(time, lat, lon)` weather field.
///
/// Cells can be cleared to model data gaps; cleared cells answer `None`
/// from [`WeatherGrid::sample`].
#[derive(Debug, Clone)]
pub struct OceanGrid {
    lat_count: usize,
    lon_count: usize,
    time_count: usize,
    min_lat: f64,
    min_lon: f64,
    resolution_deg: f64,
    u_wind: Vec<f64>,
    v_wind: Vec<f64>,
    wave_height: Vec<f64>,
}

impl OceanGrid {
    /// Build a grid with the same conditions everywhere.
    pub fn filled(
        lat_count: usize,
        lon_count: usize,
        time_count: usize,
        sample: WeatherSample,
    ) -> Result<Self> {
        if lat_count == 0 || lon_count == 0 || time_count == 0 {
            return Err(Error::InvalidParameter {
                message: format!(
                    "grid dimensions must be non-zero, got {time_count}x{lat_count}x{lon_count}"
                ),
            });
        }
        let len = lat_count * lon_count * time_count;
        Ok(Self {
            lat_count,
            lon_count,
            time_count,
            min_lat: 0.0,
            min_lon: 0.0,
            resolution_deg: 0.5,
            u_wind: vec![sample.u_wind; len],
            v_wind: vec![sample.v_wind; len],
            wave_height: vec![sample.wave_height; len],
        })
    }

    /// Generate a synthetic field over `bounds` at `resolution_deg`.
    ///
    /// Reproducible for a given seed: uniform wind noise around a zonal band
    /// (a sine over latitude strengthening the eastward component toward the
    /// middle of the window), wave height coupled to wind magnitude with its
    /// own noise and clamped non-negative.
    pub fn synthetic(
        bounds: GridBounds,
        resolution_deg: f64,
        time_count: usize,
        seed: u64,
    ) -> Result<Self> {
        if !resolution_deg.is_finite() || resolution_deg <= 0.0 {
            return Err(Error::InvalidParameter {
                message: format!(
                    "grid resolution must be finite and positive, got {resolution_deg}"
                ),
            });
        }
        if bounds.max_lat <= bounds.min_lat || bounds.max_lon <= bounds.min_lon {
            return Err(Error::InvalidParameter {
                message: format!("grid bounds must span a non-empty window, got {bounds:?}"),
            });
        }
        if time_count == 0 {
            return Err(Error::InvalidParameter {
                message: "grid must carry at least one time slice".to_string(),
            });
        }

        let lat_count = ((bounds.max_lat - bounds.min_lat) / resolution_deg).floor() as usize;
        let lon_count = ((bounds.max_lon - bounds.min_lon) / resolution_deg).floor() as usize;
        if lat_count == 0 || lon_count == 0 {
            return Err(Error::InvalidParameter {
                message: "grid bounds are smaller than one cell at this resolution".to_string(),
            });
        }

        let len = lat_count * lon_count * time_count;
        let mut u_wind = Vec::with_capacity(len);
        let mut v_wind = Vec::with_capacity(len);
        let mut wave_height = Vec::with_capacity(len);
        let mut rng = StdRng::seed_from_u64(seed);

        for _time in 0..time_count {
            for lat in 0..lat_count {
                // Zonal band: eastward wind peaks in the middle latitudes of
                // the window and fades toward its edges.
                let band = if lat_count > 1 {
                    (std::f64::consts::PI * lat as f64 / (lat_count - 1) as f64).sin()
                } else {
                    0.0
                };
                for _lon in 0..lon_count {
                    let u = rng.random_range(-5.0..5.0) + 5.0 * band;
                    let v = rng.random_range(-5.0..5.0);
                    let wave = (0.2 * u.hypot(v) + rng.random_range(-0.5..0.5)).max(0.0);
                    u_wind.push(u);
                    v_wind.push(v);
                    wave_height.push(wave);
                }
            }
        }

        Ok(Self {
            lat_count,
            lon_count,
            time_count,
            min_lat: bounds.min_lat,
            min_lon: bounds.min_lon,
            resolution_deg,
            u_wind,
            v_wind,
            wave_height,
        })
    }

    /// Number of time slices held by the grid.
    pub fn time_count(&self) -> usize {
        self.time_count
    }

    /// Lattice resolution in degrees.
    pub fn resolution_deg(&self) -> f64 {
        self.resolution_deg
    }

    /// Distance between orthogonally adjacent cells in kilometres.
    pub fn cell_spacing_km(&self) -> f64 {
        self.resolution_deg * KM_PER_DEGREE
    }

    /// Overwrite the conditions at one cell and time slice.
    ///
    /// Fixture setup only; the planner never mutates a grid.
    pub fn set(&mut self, cell: GridCell, time_index: usize, sample: WeatherSample) {
        if let Some(i) = self.offset(cell, time_index) {
            self.u_wind[i] = sample.u_wind;
            self.v_wind[i] = sample.v_wind;
            self.wave_height[i] = sample.wave_height;
        }
    }

    /// Remove the data at one cell and time slice, leaving a gap.
    pub fn clear(&mut self, cell: GridCell, time_index: usize) {
        if let Some(i) = self.offset(cell, time_index) {
            self.u_wind[i] = f64::NAN;
            self.v_wind[i] = f64::NAN;
            self.wave_height[i] = f64::NAN;
        }
    }

    /// Nearest grid cell to a geographic coordinate, or `None` when the
    /// coordinate falls outside the covered window.
    pub fn nearest(&self, lat_deg: f64, lon_deg: f64) -> Option<GridCell> {
        if !lat_deg.is_finite() || !lon_deg.is_finite() {
            return None;
        }
        let lat_index = ((lat_deg - self.min_lat) / self.resolution_deg).round();
        let lon_index = ((lon_deg - self.min_lon) / self.resolution_deg).round();
        if lat_index < 0.0 || lon_index < 0.0 {
            return None;
        }
        let cell = GridCell::new(lat_index as usize, lon_index as usize);
        self.contains(cell).then_some(cell)
    }

    fn offset(&self, cell: GridCell, time_index: usize) -> Option<usize> {
        if !self.contains(cell) || time_index >= self.time_count {
            return None;
        }
        let plane = self.lat_count * self.lon_count;
        Some(time_index * plane + cell.lat_index * self.lon_count + cell.lon_index)
    }
}

impl WeatherGrid for OceanGrid {
    fn lat_count(&self) -> usize {
        self.lat_count
    }

    fn lon_count(&self) -> usize {
        self.lon_count
    }

    fn sample(&self, cell: GridCell, time_index: usize) -> Option<WeatherSample> {
        let i = self.offset(cell, time_index)?;
        let sample = WeatherSample {
            u_wind: self.u_wind[i],
            v_wind: self.v_wind[i],
            wave_height: self.wave_height[i],
        };
        // Cleared cells are stored as NaN and answer as missing data.
        sample.is_finite().then_some(sample)
    }
}
