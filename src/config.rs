//! Configuration for the station query service.
//!
//! Provides the tunable parameters for proximity search and the
//! reputation-weighted dependability update, with defaults sourced from
//! [`crate::constants`].

use crate::constants::{dependability, geo, reputation};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tunable parameters for the station query service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Proximity search radius in kilometers
    pub proximity_radius_km: f64,

    /// Dependability change applied per accepted report
    pub dependability_step: f64,

    /// Dependability assumed for a station with no prior report
    pub initial_dependability: f64,

    /// Reputation assigned to newly registered users
    pub default_reputation: i32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            proximity_radius_km: geo::DEFAULT_RADIUS_KM,
            dependability_step: dependability::DEFAULT_STEP,
            initial_dependability: dependability::DEFAULT_INITIAL,
            default_reputation: reputation::DEFAULT,
        }
    }
}

impl ServiceConfig {
    /// Create configuration with a custom proximity radius
    pub fn with_proximity_radius_km(mut self, radius_km: f64) -> Self {
        self.proximity_radius_km = radius_km;
        self
    }

    /// Create configuration with a custom dependability step
    pub fn with_dependability_step(mut self, step: f64) -> Self {
        self.dependability_step = step;
        self
    }

    /// Create configuration with a custom initial dependability
    pub fn with_initial_dependability(mut self, initial: f64) -> Self {
        self.initial_dependability = initial;
        self
    }

    /// Create configuration with a custom default reputation
    pub fn with_default_reputation(mut self, default_reputation: i32) -> Self {
        self.default_reputation = default_reputation;
        self
    }

    /// Validate tunables for sane ranges
    pub fn validate(&self) -> Result<()> {
        if !self.proximity_radius_km.is_finite() || self.proximity_radius_km <= 0.0 {
            return Err(Error::configuration(format!(
                "proximity radius {} must be a positive finite number of kilometers",
                self.proximity_radius_km
            )));
        }

        if !self.dependability_step.is_finite() || self.dependability_step < 0.0 {
            return Err(Error::configuration(format!(
                "dependability step {} must be a non-negative finite number",
                self.dependability_step
            )));
        }

        if !(dependability::MIN..=dependability::MAX).contains(&self.initial_dependability) {
            return Err(Error::configuration(format!(
                "initial dependability {} must be within [{}, {}]",
                self.initial_dependability,
                dependability::MIN,
                dependability::MAX
            )));
        }

        if !(reputation::MIN..=reputation::MAX).contains(&self.default_reputation) {
            return Err(Error::configuration(format!(
                "default reputation {} must be within [{}, {}]",
                self.default_reputation,
                reputation::MIN,
                reputation::MAX
            )));
        }

        debug!(
            "Service configuration validated: radius {}km, step {}, initial dependability {}",
            self.proximity_radius_km, self.dependability_step, self.initial_dependability
        );

        Ok(())
    }
}
