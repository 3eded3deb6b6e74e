//! Station query service façade
//!
//! Composes the validators, geo search, attribute filters, report
//! aggregator, and reputation tracker behind the public query/command
//! operations. Every operation validates its arguments before touching a
//! store, so an invalid request never causes a partial write.

use crate::app::models::{FuelType, Station};
use crate::app::services::filters::StationFilter;
use crate::app::services::geo;
use crate::app::services::report_aggregator::ReportAggregator;
use crate::app::services::reputation::ReputationTracker;
use crate::app::services::validation::{
    normalize_brand_token, normalize_fuel_token, require_fuel_type, validate_coordinates,
};
use crate::app::stores::{StationStore, UserStore};
use crate::config::ServiceConfig;
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

#[cfg(test)]
pub mod tests;

/// Station query service over injected station and user stores
#[derive(Clone)]
pub struct StationService {
    stations: Arc<dyn StationStore>,
    config: ServiceConfig,
    aggregator: ReportAggregator,
    tracker: ReputationTracker,
}

impl StationService {
    /// Create a service with the default configuration
    pub fn new(stations: Arc<dyn StationStore>, users: Arc<dyn UserStore>) -> Self {
        Self::with_config(stations, users, ServiceConfig::default())
    }

    /// Create a service with a custom configuration
    pub fn with_config(
        stations: Arc<dyn StationStore>,
        users: Arc<dyn UserStore>,
        config: ServiceConfig,
    ) -> Self {
        let aggregator = ReportAggregator::new(stations.clone(), users.clone(), config.clone());
        let tracker = ReputationTracker::new(users);
        Self {
            stations,
            config,
            aggregator,
            tracker,
        }
    }

    /// The configuration this service runs with
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Look up a station by id; `None` when no such record exists
    pub fn get_station_by_id(&self, id: i32) -> Result<Option<Station>> {
        if id < 0 {
            return Err(Error::invalid_station(format!(
                "station id {} must be non-negative",
                id
            )));
        }
        Ok(self.stations.get(id))
    }

    /// Validate and save a station
    ///
    /// When the station carries no id, the store assigns a fresh one; when it
    /// does, the store upserts. Returns the saved record with its id
    /// populated. A station with every availability flag false is valid — it
    /// may legitimately sell nothing yet.
    pub fn save_station(&self, station: Station) -> Result<Station> {
        station.validate()?;

        let saved = self.stations.put(station);
        debug!("Saved station {:?} ('{}')", saved.id, saved.name);
        Ok(saved)
    }

    /// Delete a station; true if a record existed and was removed
    pub fn delete_station(&self, id: i32) -> Result<bool> {
        if id < 0 {
            return Err(Error::invalid_station(format!(
                "station id {} must be non-negative",
                id
            )));
        }
        Ok(self.stations.delete(id))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Every registered station, order unspecified
    pub fn list_all_stations(&self) -> Vec<Station> {
        self.stations.list_all()
    }

    /// Stations selling the named fuel kind
    ///
    /// The token must name a concrete fuel; the no-filter sentinel is
    /// rejected here.
    pub fn find_by_fuel_type(&self, fuel_token: &str) -> Result<Vec<Station>> {
        let fuel = require_fuel_type(fuel_token)?;
        Ok(self.filter_registry(|station| station.offers(fuel)))
    }

    /// Stations within the configured radius of the query point, closest
    /// first
    pub fn find_by_proximity(&self, latitude: f64, longitude: f64) -> Result<Vec<Station>> {
        validate_coordinates(latitude, longitude)?;
        Ok(geo::within_radius(
            self.stations.list_all(),
            latitude,
            longitude,
            self.config.proximity_radius_km,
        ))
    }

    /// Proximity search intersected with optional fuel and brand filters
    ///
    /// Each token may be the sentinel, meaning no constraint on that axis;
    /// both tokens sentinel yields the unfiltered proximity result. Token
    /// validation precedes filtering, so an unrecognized fuel token fails
    /// even when the proximity result would be empty.
    pub fn find_with_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        fuel_token: &str,
        brand_token: &str,
    ) -> Result<Vec<Station>> {
        validate_coordinates(latitude, longitude)?;
        let filter = StationFilter::new(
            normalize_fuel_token(fuel_token)?,
            normalize_brand_token(brand_token),
        );

        let nearby = geo::within_radius(
            self.stations.list_all(),
            latitude,
            longitude,
            self.config.proximity_radius_km,
        );
        Ok(filter.apply(nearby))
    }

    /// Fuel and brand filters over the whole registry, no proximity step
    ///
    /// At least one axis must be constrained; both tokens sentinel is an
    /// invalid request. A concrete fuel with no matching station yields an
    /// empty, non-error result.
    pub fn find_without_coordinates(
        &self,
        fuel_token: &str,
        brand_token: &str,
    ) -> Result<Vec<Station>> {
        let filter = StationFilter::new(
            normalize_fuel_token(fuel_token)?,
            normalize_brand_token(brand_token),
        );
        if filter.is_unconstrained() {
            return Err(Error::invalid_fuel_type(fuel_token));
        }

        Ok(filter.apply(self.stations.list_all()))
    }

    /// Stations hosting exactly the given car-sharing brand
    ///
    /// An empty or unmatched brand yields an empty result.
    pub fn find_by_car_sharing(&self, brand: &str) -> Vec<Station> {
        self.filter_registry(|station| station.car_sharing_brand() == Some(brand))
    }

    // =========================================================================
    // Reports and Reputation
    // =========================================================================

    /// Submit a crowd price report for a station
    ///
    /// Delegates to the report aggregator: overwrites the station's prices,
    /// stamps the last report, moves dependability by the reporter's
    /// reputation sign, and adjusts the reporter's reputation.
    pub fn submit_report(
        &self,
        station_id: i32,
        prices: BTreeMap<FuelType, f64>,
        user_id: i32,
    ) -> Result<Station> {
        self.aggregator.submit(station_id, prices, user_id)
    }

    /// Increase a user's reputation by one, capped at the ceiling
    pub fn increase_user_reputation(&self, user_id: i32) -> Result<i32> {
        self.tracker.increase(user_id)
    }

    /// Decrease a user's reputation by one, floored at the minimum
    pub fn decrease_user_reputation(&self, user_id: i32) -> Result<i32> {
        self.tracker.decrease(user_id)
    }

    fn filter_registry(&self, predicate: impl Fn(&Station) -> bool) -> Vec<Station> {
        self.stations
            .list_all()
            .into_iter()
            .filter(|station| predicate(station))
            .collect()
    }
}
