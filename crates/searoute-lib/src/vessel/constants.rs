//! Physical constants shared by the resistance and fuel calculations.

/// Density of seawater in kg/m^3.
pub const SEAWATER_DENSITY: f64 = 1025.0;

/// Density of air at sea level in kg/m^3.
pub const AIR_DENSITY: f64 = 1.225;

/// Frictional coefficient for the quadratic calm-water drag term.
pub const CALM_WATER_DRAG_COEFF: f64 = 0.0025;

/// Drag coefficient of the above-water frontal profile.
pub const WIND_DRAG_COEFF: f64 = 0.8;

/// Effective height of the frontal wind profile in metres; frontal area is
/// the beam multiplied by this.
pub const FRONTAL_PROFILE_HEIGHT_M: f64 = 10.0;

/// Added-wave-resistance coefficient in N per metre of beam per square metre
/// of wave height.
pub const WAVE_RESISTANCE_COEFF: f64 = 1500.0;

/// Fraction of engine power delivered as effective towing power.
pub const PROPULSIVE_EFFICIENCY: f64 = 0.7;

/// Specific fuel consumption in grams per kWh of engine power.
pub const SPECIFIC_FUEL_CONSUMPTION_G_PER_KWH: f64 = 180.0;

/// Metres per second in one knot.
pub const MS_PER_KNOT: f64 = 0.514444;

/// Kilometres per hour in one knot.
pub const KMH_PER_KNOT: f64 = 1.852;
