//! Attribute filtering over station collections
//!
//! Composes the fuel-availability predicate and the exact car-sharing brand
//! predicate. Each axis is optional; only stations matching every
//! constrained axis pass.

use crate::app::models::{FuelFilter, Station};

/// Multi-criteria attribute filter over stations
#[derive(Debug, Clone, PartialEq)]
pub struct StationFilter {
    /// Fuel-availability axis
    pub fuel: FuelFilter,

    /// Exact car-sharing brand axis, unconstrained when `None`
    pub brand: Option<String>,
}

impl StationFilter {
    /// Create a filter from its two axes
    pub fn new(fuel: FuelFilter, brand: Option<String>) -> Self {
        Self { fuel, brand }
    }

    /// Whether neither axis constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.fuel == FuelFilter::Any && self.brand.is_none()
    }

    /// Whether a station matches every constrained axis
    pub fn matches(&self, station: &Station) -> bool {
        if let FuelFilter::Only(fuel) = self.fuel {
            if !station.offers(fuel) {
                return false;
            }
        }

        if let Some(brand) = &self.brand {
            if station.car_sharing_brand() != Some(brand.as_str()) {
                return false;
            }
        }

        true
    }

    /// Retain only the stations matching this filter
    pub fn apply(&self, stations: Vec<Station>) -> Vec<Station> {
        stations
            .into_iter()
            .filter(|station| self.matches(station))
            .collect()
    }
}
