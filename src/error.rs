//! Error handling for station registry operations.
//!
//! All error kinds are recoverable by the caller; none are fatal to the
//! process. Validation errors are raised before any store access, so a
//! failed operation never leaves a partial write behind. "Not found" on
//! id-based reads and deletes is a normal return value, not an error.

use thiserror::Error;

/// Result type alias for station registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds surfaced by the query service and its collaborators
#[derive(Error, Debug)]
pub enum Error {
    /// Negative or malformed station id supplied to an id-based operation
    #[error("invalid station: {message}")]
    InvalidStation { message: String },

    /// Negative user id, or user id that does not resolve to a known user
    #[error("invalid user: {message}")]
    InvalidUser { message: String },

    /// Fuel-type token not in the recognized set
    #[error("unrecognized fuel type token '{token}'")]
    InvalidFuelType { token: String },

    /// Coordinate outside valid latitude/longitude ranges
    #[error("coordinates out of range: latitude {latitude}, longitude {longitude}")]
    GpsData { latitude: f64, longitude: f64 },

    /// A supplied price is negative
    #[error("invalid price: {message}")]
    Price { message: String },

    /// A configuration tunable is outside its sane range
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an invalid station error
    pub fn invalid_station(message: impl Into<String>) -> Self {
        Self::InvalidStation {
            message: message.into(),
        }
    }

    /// Create an invalid user error
    pub fn invalid_user(message: impl Into<String>) -> Self {
        Self::InvalidUser {
            message: message.into(),
        }
    }

    /// Create an invalid fuel type error
    pub fn invalid_fuel_type(token: impl Into<String>) -> Self {
        Self::InvalidFuelType {
            token: token.into(),
        }
    }

    /// Create a GPS data error
    pub fn gps_data(latitude: f64, longitude: f64) -> Self {
        Self::GpsData {
            latitude,
            longitude,
        }
    }

    /// Create a price error
    pub fn price(message: impl Into<String>) -> Self {
        Self::Price {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
