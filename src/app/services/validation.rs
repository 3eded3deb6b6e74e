//! Argument validators for the station query service
//!
//! Pure predicate functions over coordinates, fuel-type tokens, car-sharing
//! brand tokens, and price sets. Every public service operation runs these
//! before touching a store, so an invalid request never causes a partial
//! write.

use crate::app::models::{FuelFilter, FuelType};
use crate::constants::{coordinates, is_sentinel};
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Validate that a coordinate pair is within WGS84 bounds
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    let lat_ok = (coordinates::MIN_LATITUDE..=coordinates::MAX_LATITUDE).contains(&latitude);
    let lon_ok = (coordinates::MIN_LONGITUDE..=coordinates::MAX_LONGITUDE).contains(&longitude);

    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(Error::gps_data(latitude, longitude))
    }
}

/// Normalize a fuel-type token into a filter axis
///
/// Trims and lower-cases the token. The sentinel spellings (`""`, `"null"`,
/// `"none"`) mean "no constraint on the fuel axis"; any other token must name
/// a recognized fuel kind exactly — tokens with embedded whitespace or
/// symbols are rejected, not fuzzy-matched.
pub fn normalize_fuel_token(token: &str) -> Result<FuelFilter> {
    let normalized = token.trim().to_lowercase();
    if is_sentinel(&normalized) {
        return Ok(FuelFilter::Any);
    }
    FuelType::from_str(&normalized).map(FuelFilter::Only)
}

/// Normalize a fuel-type token that must name a concrete fuel kind
///
/// Like [`normalize_fuel_token`], but the sentinel is rejected because the
/// caller requires a specific fuel to be named.
pub fn require_fuel_type(token: &str) -> Result<FuelType> {
    match normalize_fuel_token(token)? {
        FuelFilter::Only(fuel) => Ok(fuel),
        FuelFilter::Any => Err(Error::invalid_fuel_type(token)),
    }
}

/// Normalize a car-sharing brand token
///
/// The sentinel spellings mean "no constraint on the brand axis"; anything
/// else is an exact-match brand name, trimmed. Brands are free text, so no
/// further validation applies.
pub fn normalize_brand_token(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if is_sentinel(&trimmed.to_lowercase()) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validate that no supplied price is negative
pub fn validate_prices(prices: &BTreeMap<FuelType, f64>) -> Result<()> {
    for (fuel, price) in prices {
        if *price < 0.0 {
            return Err(Error::price(format!(
                "negative price {} for fuel '{}'",
                price, fuel
            )));
        }
    }
    Ok(())
}
