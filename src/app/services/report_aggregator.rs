//! Crowd-report validation and application
//!
//! A report overwrites a station's per-fuel prices, stamps the station with
//! the reporting user and submission time, and moves the station's
//! dependability by one configured step in the direction of the reporter's
//! reputation sign, clamped to [0, 1]. Every accepted report then adjusts the
//! reporter's own reputation through the tracker; that linkage lives here so
//! the policy can change without touching query logic.

use crate::app::models::{FuelType, LastReport, Station};
use crate::app::services::reputation::ReputationTracker;
use crate::app::services::validation::validate_prices;
use crate::app::stores::{StationStore, UserStore};
use crate::config::ServiceConfig;
use crate::constants::dependability;
use crate::{Error, Result};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Validates and applies crowd-submitted price reports
#[derive(Clone)]
pub struct ReportAggregator {
    stations: Arc<dyn StationStore>,
    users: Arc<dyn UserStore>,
    tracker: ReputationTracker,
    config: ServiceConfig,
}

impl ReportAggregator {
    /// Create an aggregator over the given stores
    pub fn new(
        stations: Arc<dyn StationStore>,
        users: Arc<dyn UserStore>,
        config: ServiceConfig,
    ) -> Self {
        let tracker = ReputationTracker::new(users.clone());
        Self {
            stations,
            users,
            tracker,
            config,
        }
    }

    /// Validate and apply a price report to a station
    ///
    /// Validation order: the station must resolve, the user id must be
    /// non-negative and resolve, and no supplied price may be negative. Only
    /// then are the station and the reporter's reputation mutated; a failed
    /// report leaves both untouched.
    pub fn submit(
        &self,
        station_id: i32,
        prices: BTreeMap<FuelType, f64>,
        user_id: i32,
    ) -> Result<Station> {
        let mut station = self.stations.get(station_id).ok_or_else(|| {
            Error::invalid_station(format!("no station with id {}", station_id))
        })?;

        if user_id < 0 {
            return Err(Error::invalid_user(format!(
                "user id {} must be non-negative",
                user_id
            )));
        }
        let user = self
            .users
            .get(user_id)
            .ok_or_else(|| Error::invalid_user(format!("no user with id {}", user_id)))?;

        validate_prices(&prices)?;

        // Dependability moves by the reporter's reputation sign as it stands
        // before the report's own reputation side effect.
        let previous = station
            .last_report
            .as_ref()
            .map(|report| report.dependability)
            .unwrap_or(self.config.initial_dependability);
        let updated = clamp01(
            previous + f64::from(user.reputation_sign()) * self.config.dependability_step,
        );

        station.prices = prices;
        station.last_report = Some(LastReport {
            user_id,
            timestamp: Utc::now(),
            dependability: updated,
        });
        let station = self.stations.put(station);

        self.tracker.increase(user_id)?;

        debug!(
            "Applied report from user {} to station {}: dependability {} -> {}",
            user_id, station_id, previous, updated
        );
        Ok(station)
    }
}

fn clamp01(value: f64) -> f64 {
    value.clamp(dependability::MIN, dependability::MAX)
}
