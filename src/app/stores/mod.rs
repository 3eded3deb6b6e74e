//! Store abstractions consumed by the query service
//!
//! The core never owns persistence: callers inject implementations of these
//! traits by construction. Both stores surface "not found" as an absence
//! value, never as an error, so the service can distinguish an invalid
//! argument from a missing record.

use crate::app::models::{Station, User};

pub mod memory;

pub use memory::{MemoryStationStore, MemoryUserStore};

/// Keyed lookup/insert/update/delete/list of station records
///
/// Implementations must make each `put` and `delete` atomic with respect to
/// other mutations of the same station, and must assign collision-free ids
/// under concurrent inserts.
pub trait StationStore: Send + Sync {
    /// Look up a station by id
    fn get(&self, id: i32) -> Option<Station>;

    /// Check whether a station with this id exists
    fn exists(&self, id: i32) -> bool;

    /// Insert or overwrite a station, assigning a fresh id when absent;
    /// returns the stored record with its id populated
    fn put(&self, station: Station) -> Station;

    /// Remove a station; true if a record existed and was removed
    fn delete(&self, id: i32) -> bool;

    /// Every station in the registry, order unspecified
    fn list_all(&self) -> Vec<Station>;
}

/// Keyed lookup and update of users and their reputation
pub trait UserStore: Send + Sync {
    /// Look up a user by id
    fn get(&self, id: i32) -> Option<User>;

    /// Check whether a user with this id exists
    fn exists(&self, id: i32) -> bool;

    /// Overwrite a user record
    fn update(&self, user: User);
}
