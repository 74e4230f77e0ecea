//! Vessel configuration and the resistance/fuel model.
//!
//! - [`parameters`] - validated hull configuration and derived wetted surface
//! - [`resistance`] - resistance terms composed into a fuel-burn rate
//! - [`constants`] - physical constants shared across calculations
//!
//! # Example
//!
//! ```
//! use searoute_lib::vessel::{FuelModel, VesselParameters};
//! use searoute_lib::WeatherSample;
//!
//! let model = FuelModel::new(VesselParameters::default());
//! let calm = model.fuel_burn_rate(15.0, &WeatherSample::CALM).unwrap();
//! let rough = model
//!     .fuel_burn_rate(
//!         15.0,
//!         &WeatherSample {
//!             u_wind: 10.0,
//!             v_wind: 0.0,
//!             wave_height: 4.0,
//!         },
//!     )
//!     .unwrap();
//! assert!(rough > calm);
//! ```

pub mod constants;
pub mod parameters;
pub mod resistance;

pub use constants::{
    AIR_DENSITY, CALM_WATER_DRAG_COEFF, FRONTAL_PROFILE_HEIGHT_M, KMH_PER_KNOT, MS_PER_KNOT,
    PROPULSIVE_EFFICIENCY, SEAWATER_DENSITY, SPECIFIC_FUEL_CONSUMPTION_G_PER_KWH,
    WAVE_RESISTANCE_COEFF, WIND_DRAG_COEFF,
};
pub use parameters::VesselParameters;
pub use resistance::{knots_to_ms, FuelModel};
