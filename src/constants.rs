//! Application constants for the fuel station registry
//!
//! This module contains the validation bounds, default tunables, and token
//! tables used throughout the crate.

// =============================================================================
// Coordinate Bounds
// =============================================================================

/// Valid coordinate ranges (WGS84 decimal degrees)
pub mod coordinates {
    /// Minimum valid latitude
    pub const MIN_LATITUDE: f64 = -90.0;

    /// Maximum valid latitude
    pub const MAX_LATITUDE: f64 = 90.0;

    /// Minimum valid longitude
    pub const MIN_LONGITUDE: f64 = -180.0;

    /// Maximum valid longitude
    pub const MAX_LONGITUDE: f64 = 180.0;
}

// =============================================================================
// Geospatial Search
// =============================================================================

/// Geospatial search parameters
pub mod geo {
    /// Mean earth radius in kilometers, used by the haversine formula
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    /// Default proximity search radius in kilometers
    pub const DEFAULT_RADIUS_KM: f64 = 5.0;
}

// =============================================================================
// User Reputation
// =============================================================================

/// Reputation bounds and defaults
///
/// Reputation is adjusted by at most one unit per completed report and is
/// clamped at the bounds; an adjustment beyond a bound is a no-op.
pub mod reputation {
    /// Lowest reachable reputation
    pub const MIN: i32 = -5;

    /// Highest reachable reputation
    pub const MAX: i32 = 5;

    /// Reputation assigned to a newly registered user
    pub const DEFAULT: i32 = 0;
}

// =============================================================================
// Report Dependability
// =============================================================================

/// Dependability bounds and update tunables
///
/// Dependability is the confidence in [0, 1] that a station's current prices
/// are accurate. Each accepted report moves it by one step in the direction
/// of the reporter's reputation sign.
pub mod dependability {
    /// Lower dependability bound
    pub const MIN: f64 = 0.0;

    /// Upper dependability bound
    pub const MAX: f64 = 1.0;

    /// Default per-report step size
    pub const DEFAULT_STEP: f64 = 0.05;

    /// Dependability assumed for a station that has never been reported on
    pub const DEFAULT_INITIAL: f64 = 0.5;
}

// =============================================================================
// Fuel Tokens
// =============================================================================

/// Recognized fuel-type tokens (trimmed, lower-cased form)
pub const FUEL_TOKENS: &[&str] = &["diesel", "super", "superplus", "gas", "methane"];

/// Sentinel spellings meaning "no constraint on this axis"
///
/// The empty string and `"null"` are the spellings observed in live traffic;
/// `"none"` is accepted as an equivalent.
pub const SENTINEL_TOKENS: &[&str] = &["", "null", "none"];

/// Check whether a normalized token is a no-filter sentinel
pub fn is_sentinel(token: &str) -> bool {
    SENTINEL_TOKENS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_detection() {
        assert!(is_sentinel(""));
        assert!(is_sentinel("null"));
        assert!(is_sentinel("none"));
        assert!(!is_sentinel("diesel"));
        assert!(!is_sentinel("water"));
    }

    #[test]
    fn test_bounds_are_consistent() {
        assert!(reputation::MIN < reputation::MAX);
        assert!((reputation::MIN..=reputation::MAX).contains(&reputation::DEFAULT));
        assert!(dependability::MIN < dependability::MAX);
        assert!(dependability::DEFAULT_STEP > 0.0);
        assert!(
            (dependability::MIN..=dependability::MAX).contains(&dependability::DEFAULT_INITIAL)
        );
    }
}
