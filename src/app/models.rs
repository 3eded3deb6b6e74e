//! Data models for the fuel station registry
//!
//! This module contains the core data structures for representing fuel
//! stations, crowd-submitted price reports, and reporting users.

use crate::constants::{coordinates, dependability, reputation};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Fuel Type Enumeration
// =============================================================================

/// Closed enumeration of the fuel kinds a station may sell
///
/// Fuel kinds are matched from free-text tokens by exact comparison after
/// trimming and lower-casing; tokens with embedded whitespace or symbols are
/// rejected rather than fuzzy-matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Diesel,
    Super,
    SuperPlus,
    Gas,
    Methane,
}

impl FuelType {
    /// All fuel kinds, in canonical order
    pub const ALL: [FuelType; 5] = [
        FuelType::Diesel,
        FuelType::Super,
        FuelType::SuperPlus,
        FuelType::Gas,
        FuelType::Methane,
    ];

    /// Canonical token for this fuel kind
    pub fn label(self) -> &'static str {
        match self {
            FuelType::Diesel => "diesel",
            FuelType::Super => "super",
            FuelType::SuperPlus => "superplus",
            FuelType::Gas => "gas",
            FuelType::Methane => "methane",
        }
    }
}

impl FromStr for FuelType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "diesel" => Ok(FuelType::Diesel),
            "super" => Ok(FuelType::Super),
            "superplus" => Ok(FuelType::SuperPlus),
            "gas" => Ok(FuelType::Gas),
            "methane" => Ok(FuelType::Methane),
            _ => Err(Error::invalid_fuel_type(s)),
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Fuel filter axis: either unconstrained or restricted to one fuel kind
///
/// The sentinel spellings `""`, `"null"`, and `"none"` normalize to
/// [`FuelFilter::Any`]; see [`crate::app::services::validation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelFilter {
    /// No constraint on the fuel axis
    Any,
    /// Only stations offering the given fuel kind
    Only(FuelType),
}

// =============================================================================
// Station Structure
// =============================================================================

/// The most recent accepted price report for a station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastReport {
    /// Id of the user who submitted the report; a non-owning reference that
    /// may dangle if the user is later removed
    pub user_id: i32,

    /// Submission time of the report
    pub timestamp: DateTime<Utc>,

    /// Confidence in [0, 1] that the current prices are accurate
    pub dependability: f64,
}

/// A fuel-selling location with fixed coordinates and crowd-updated prices
///
/// A station is created by saving it without an id (the store assigns one),
/// updated in place when saved with a known id, and destroyed only by an
/// explicit delete. A price report never creates a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique id, assigned by the store on first save; immutable thereafter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    /// Human-readable station name
    pub name: String,

    /// Street address
    pub address: String,

    /// Which fuel kinds this station sells; a station may legitimately sell
    /// nothing yet
    pub availability: BTreeMap<FuelType, bool>,

    /// Car-sharing brand hosted at this station, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_sharing: Option<String>,

    /// Latitude in WGS84 decimal degrees
    pub latitude: f64,

    /// Longitude in WGS84 decimal degrees
    pub longitude: f64,

    /// Last reported price per fuel kind, when present
    pub prices: BTreeMap<FuelType, f64>,

    /// The most recent accepted report, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_report: Option<LastReport>,
}

impl Station {
    /// Create a new station with validated coordinates and no id
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let station = Self {
            id: None,
            name: name.into(),
            address: address.into(),
            availability: BTreeMap::new(),
            car_sharing: None,
            latitude,
            longitude,
            prices: BTreeMap::new(),
            last_report: None,
        };

        station.validate()?;
        Ok(station)
    }

    /// Validate station data for consistency and valid ranges
    pub fn validate(&self) -> Result<()> {
        if !(coordinates::MIN_LATITUDE..=coordinates::MAX_LATITUDE).contains(&self.latitude)
            || !(coordinates::MIN_LONGITUDE..=coordinates::MAX_LONGITUDE)
                .contains(&self.longitude)
        {
            return Err(Error::gps_data(self.latitude, self.longitude));
        }

        for (fuel, price) in &self.prices {
            if *price < 0.0 {
                return Err(Error::price(format!(
                    "negative price {} for fuel '{}'",
                    price, fuel
                )));
            }
        }

        if let Some(report) = &self.last_report {
            if !(dependability::MIN..=dependability::MAX).contains(&report.dependability) {
                return Err(Error::price(format!(
                    "dependability {} must be within [{}, {}]",
                    report.dependability,
                    dependability::MIN,
                    dependability::MAX
                )));
            }
        }

        Ok(())
    }

    /// Check whether this station sells the given fuel kind
    pub fn offers(&self, fuel: FuelType) -> bool {
        self.availability.get(&fuel).copied().unwrap_or(false)
    }

    /// Mark a fuel kind as sold or not sold at this station
    pub fn set_availability(&mut self, fuel: FuelType, available: bool) {
        self.availability.insert(fuel, available);
    }

    /// Last reported price for a fuel kind, if one has been reported
    pub fn price_of(&self, fuel: FuelType) -> Option<f64> {
        self.prices.get(&fuel).copied()
    }

    /// Station location as a (latitude, longitude) tuple
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Car-sharing brand hosted here, if any
    pub fn car_sharing_brand(&self) -> Option<&str> {
        self.car_sharing.as_deref()
    }
}

// =============================================================================
// User Structure
// =============================================================================

/// A reporting user with a bounded reputation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id
    pub id: i32,

    /// Standing in [-5, 5], adjusted by at most one unit per completed report
    pub reputation: i32,
}

impl User {
    /// Create a user with an explicit reputation, clamped to the valid range
    pub fn new(id: i32, reputation_value: i32) -> Self {
        Self {
            id,
            reputation: reputation_value.clamp(reputation::MIN, reputation::MAX),
        }
    }

    /// Create a user with the default starting reputation
    pub fn with_default_reputation(id: i32) -> Self {
        Self::new(id, reputation::DEFAULT)
    }

    /// Sign of this user's reputation: +1, 0, or -1
    pub fn reputation_sign(&self) -> i32 {
        self.reputation.signum()
    }
}
