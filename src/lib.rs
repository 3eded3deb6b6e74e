//! Fuelwatch
//!
//! A registry of fuel stations with crowd-sourced prices, exposing
//! geospatial and attribute-based search plus a crowd-report pipeline that
//! updates station price state and user standing.
//!
//! This library provides:
//! - A closed fuel-type enumeration with strict token normalization
//! - Coordinate, fuel-token, and price validators
//! - Haversine proximity search over the registered stations
//! - Multi-criteria filtering (fuel availability, car-sharing brand)
//! - Reputation-bounded report acceptance with dependability tracking
//! - Injected store abstractions with in-memory reference implementations
//!
//! Transport, persistence engines, and UI are intentionally out of scope;
//! callers inject [`app::stores::StationStore`] and [`app::stores::UserStore`]
//! implementations by construction.

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod stores;
    pub mod services {
        pub mod filters;
        pub mod geo;
        pub mod report_aggregator;
        pub mod reputation;
        pub mod station_service;
        pub mod validation;
    }
}

// Re-export commonly used types
pub use app::models::{FuelFilter, FuelType, LastReport, Station, User};
pub use app::services::station_service::StationService;
pub use app::stores::{StationStore, UserStore};
pub use config::ServiceConfig;
pub use error::{Error, Result};
