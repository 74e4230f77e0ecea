//! Vessel hull parameters and the derived wetted surface area.

use serde::Serialize;

use crate::error::{Error, Result};

/// Immutable hull configuration for one vessel.
///
/// All fields are fixed at construction; the wetted surface area is derived
/// once from the hull dimensions and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VesselParameters {
    length_m: f64,
    beam_m: f64,
    draft_m: f64,
    block_coefficient: f64,
    design_speed_knots: f64,
    wetted_surface_m2: f64,
}

impl VesselParameters {
    /// Build a validated vessel configuration.
    ///
    /// Every input must be a positive finite number and the block
    /// coefficient cannot exceed 1; violations report `InvalidParameter`.
    pub fn new(
        length_m: f64,
        beam_m: f64,
        draft_m: f64,
        block_coefficient: f64,
        design_speed_knots: f64,
    ) -> Result<Self> {
        let fields = [
            (length_m, "length_m"),
            (beam_m, "beam_m"),
            (draft_m, "draft_m"),
            (block_coefficient, "block_coefficient"),
            (design_speed_knots, "design_speed_knots"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParameter {
                    message: format!("{field} must be a finite positive number, got {value}"),
                });
            }
        }

        if block_coefficient > 1.0 {
            return Err(Error::InvalidParameter {
                message: format!("block_coefficient cannot exceed 1, got {block_coefficient}"),
            });
        }

        Ok(Self {
            length_m,
            beam_m,
            draft_m,
            block_coefficient,
            design_speed_knots,
            wetted_surface_m2: wetted_surface(length_m, beam_m, draft_m, block_coefficient),
        })
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    pub fn beam_m(&self) -> f64 {
        self.beam_m
    }

    pub fn draft_m(&self) -> f64 {
        self.draft_m
    }

    pub fn block_coefficient(&self) -> f64 {
        self.block_coefficient
    }

    pub fn design_speed_knots(&self) -> f64 {
        self.design_speed_knots
    }

    /// Hull area in contact with the water, in m^2.
    pub fn wetted_surface_m2(&self) -> f64 {
        self.wetted_surface_m2
    }
}

impl Default for VesselParameters {
    /// Representative mid-size cargo vessel: 200 m length, 32 m beam,
    /// 12 m draft, block coefficient 0.8, 15 kn design speed.
    fn default() -> Self {
        Self::new(200.0, 32.0, 12.0, 0.8, 15.0).expect("default vessel parameters are valid")
    }
}

/// Denny's estimate of the wetted surface from hull dimensions.
fn wetted_surface(length_m: f64, beam_m: f64, draft_m: f64, block_coefficient: f64) -> f64 {
    1.025 * length_m * (block_coefficient * beam_m + 1.7 * draft_m)
}
