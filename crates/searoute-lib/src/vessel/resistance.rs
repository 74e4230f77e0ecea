//! Resistance terms and the composed fuel-burn rate.
//!
//! The model is a pure function of speed and local weather: calm-water,
//! wind, and wave resistance sum to a total force, force times speed gives
//! effective power, and a fixed propulsive efficiency plus specific fuel
//! consumption convert that to tonnes of fuel per hour. Every term is
//! non-negative and monotonically non-decreasing in wind speed and wave
//! height, which is what keeps the planner's heuristic admissible.

use crate::error::{Error, Result};
use crate::grid::WeatherSample;

use super::constants::{
    AIR_DENSITY, CALM_WATER_DRAG_COEFF, FRONTAL_PROFILE_HEIGHT_M, KMH_PER_KNOT, MS_PER_KNOT,
    PROPULSIVE_EFFICIENCY, SEAWATER_DENSITY, SPECIFIC_FUEL_CONSUMPTION_G_PER_KWH,
    WAVE_RESISTANCE_COEFF, WIND_DRAG_COEFF,
};
use super::parameters::VesselParameters;

/// Convert a speed in knots to metres per second.
pub fn knots_to_ms(speed_knots: f64) -> f64 {
    speed_knots * MS_PER_KNOT
}

/// Resistance and fuel-burn model for a fixed vessel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelModel {
    vessel: VesselParameters,
}

impl FuelModel {
    pub fn new(vessel: VesselParameters) -> Self {
        Self { vessel }
    }

    pub fn vessel(&self) -> &VesselParameters {
        &self.vessel
    }

    /// Quadratic frictional drag of the hull through still water, in newtons.
    ///
    /// Zero at zero speed; speed is supplied in knots and converted
    /// internally.
    pub fn calm_water_resistance(&self, speed_knots: f64) -> f64 {
        let v = knots_to_ms(speed_knots);
        0.5 * SEAWATER_DENSITY * self.vessel.wetted_surface_m2() * CALM_WATER_DRAG_COEFF * v * v
    }

    /// Drag on the frontal profile from the relative longitudinal wind, in
    /// newtons.
    ///
    /// `wind_speed_ms` is the wind magnitude in m/s as delivered by the
    /// weather grid. The relative velocity is squared, so a following wind
    /// cannot turn the force negative; the term grows with |relative
    /// velocity|.
    pub fn wind_resistance(&self, speed_knots: f64, wind_speed_ms: f64) -> f64 {
        let frontal_area = self.vessel.beam_m() * FRONTAL_PROFILE_HEIGHT_M;
        let relative = knots_to_ms(speed_knots) + wind_speed_ms;
        0.5 * AIR_DENSITY * WIND_DRAG_COEFF * frontal_area * relative * relative
    }

    /// Added resistance from waves, quadratic in wave height, in newtons.
    ///
    /// Negative or non-finite heights are data faults and are treated as
    /// flat water rather than producing a negative force.
    pub fn wave_resistance(&self, wave_height_m: f64) -> f64 {
        let height = if wave_height_m.is_finite() {
            wave_height_m.max(0.0)
        } else {
            0.0
        };
        WAVE_RESISTANCE_COEFF * height * height * self.vessel.beam_m()
    }

    /// Instantaneous fuel-burn rate in tonnes per hour.
    ///
    /// Total resistance times speed gives effective power; dividing by the
    /// propulsive efficiency gives engine power, and the specific fuel
    /// consumption converts that to a mass flow. Non-finite speed or wind
    /// components are rejected so NaN never leaves the model boundary.
    pub fn fuel_burn_rate(&self, speed_knots: f64, sample: &WeatherSample) -> Result<f64> {
        if !speed_knots.is_finite() || speed_knots < 0.0 {
            return Err(Error::InvalidParameter {
                message: format!("speed must be finite and non-negative, got {speed_knots}"),
            });
        }
        if !sample.u_wind.is_finite() || !sample.v_wind.is_finite() {
            return Err(Error::InvalidParameter {
                message: format!(
                    "wind components must be finite, got ({}, {})",
                    sample.u_wind, sample.v_wind
                ),
            });
        }

        let total_resistance = self.calm_water_resistance(speed_knots)
            + self.wind_resistance(speed_knots, sample.wind_speed())
            + self.wave_resistance(sample.wave_height);

        let effective_power_w = total_resistance * knots_to_ms(speed_knots);
        let engine_power_kw = (effective_power_w / 1000.0) / PROPULSIVE_EFFICIENCY;
        Ok(engine_power_kw * SPECIFIC_FUEL_CONSUMPTION_G_PER_KWH / 1_000_000.0)
    }

    /// Fuel per kilometre in flat calm at the given speed, in tonnes/km.
    ///
    /// This is the cheapest conceivable transit rate for that speed: wind
    /// and wave resistance only ever add to the calm-water baseline, so the
    /// value is a lower bound on the burn-per-distance of any real cell.
    /// The planner multiplies it into its heuristic.
    pub fn calm_water_burn_per_km(&self, speed_knots: f64) -> Result<f64> {
        if !speed_knots.is_finite() || speed_knots <= 0.0 {
            return Err(Error::InvalidSpeed { speed: speed_knots });
        }
        let rate = self.fuel_burn_rate(speed_knots, &WeatherSample::CALM)?;
        Ok(rate / (speed_knots * KMH_PER_KNOT))
    }
}
