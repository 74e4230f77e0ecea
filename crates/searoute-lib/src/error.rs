use thiserror::Error;

/// Convenient result alias for the searoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a start or goal index falls outside the weather grid.
    #[error("grid index ({lat_index}, {lon_index}) outside bounds {lat_count}x{lon_count}")]
    InvalidIndex {
        lat_index: usize,
        lon_index: usize,
        lat_count: usize,
        lon_count: usize,
    },

    /// Raised when a requested transit speed is non-positive or non-finite.
    #[error("transit speed must be positive and finite, got {speed}")]
    InvalidSpeed { speed: f64 },

    /// Raised when vessel, model, or planner configuration fails validation.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Raised when a weather sample is required but missing for a cell.
    #[error("no weather sample for cell ({lat_index}, {lon_index}) at time slice {time_index}")]
    WeatherUnavailable {
        lat_index: usize,
        lon_index: usize,
        time_index: usize,
    },

    /// Raised when summarizing a route plan that contains no waypoints.
    #[error("route plan was empty")]
    EmptyRoutePlan,
}
