//! In-memory reference implementations of the store contracts
//!
//! Entities live in `RwLock<HashMap>` registries. Every mutation replaces or
//! removes a whole entity under the write lock, so a reader never observes a
//! torn record. Station ids come from an atomic monotonic counter; an upsert
//! with an explicit id bumps the counter past it so later inserts cannot
//! collide.

use crate::app::models::{Station, User};
use crate::app::stores::{StationStore, UserStore};
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI32, Ordering};
use tracing::debug;

/// First id handed out by a fresh station store
const FIRST_STATION_ID: i32 = 1;

/// In-memory station store
#[derive(Debug)]
pub struct MemoryStationStore {
    stations: RwLock<HashMap<i32, Station>>,
    next_id: AtomicI32,
}

impl Default for MemoryStationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStationStore {
    /// Create a new empty station store
    pub fn new() -> Self {
        Self {
            stations: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(FIRST_STATION_ID),
        }
    }

    /// Number of stations currently stored
    pub fn len(&self) -> usize {
        self.stations
            .read()
            .expect("station registry lock poisoned")
            .len()
    }

    /// Whether the registry holds no stations
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StationStore for MemoryStationStore {
    fn get(&self, id: i32) -> Option<Station> {
        self.stations
            .read()
            .expect("station registry lock poisoned")
            .get(&id)
            .cloned()
    }

    fn exists(&self, id: i32) -> bool {
        self.stations
            .read()
            .expect("station registry lock poisoned")
            .contains_key(&id)
    }

    fn put(&self, mut station: Station) -> Station {
        let id = match station.id {
            Some(id) => {
                // Keep the counter ahead of explicitly supplied ids
                self.next_id.fetch_max(id + 1, Ordering::SeqCst);
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        station.id = Some(id);

        self.stations
            .write()
            .expect("station registry lock poisoned")
            .insert(id, station.clone());

        debug!("Stored station {} ('{}')", id, station.name);
        station
    }

    fn delete(&self, id: i32) -> bool {
        self.stations
            .write()
            .expect("station registry lock poisoned")
            .remove(&id)
            .is_some()
    }

    fn list_all(&self) -> Vec<Station> {
        self.stations
            .read()
            .expect("station registry lock poisoned")
            .values()
            .cloned()
            .collect()
    }
}

/// In-memory user store
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<i32, User>>,
}

impl MemoryUserStore {
    /// Create a new empty user store
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-populated with users
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            users: RwLock::new(map),
        }
    }

    /// Register a user
    pub fn insert(&self, user: User) {
        self.users
            .write()
            .expect("user registry lock poisoned")
            .insert(user.id, user);
    }
}

impl UserStore for MemoryUserStore {
    fn get(&self, id: i32) -> Option<User> {
        self.users
            .read()
            .expect("user registry lock poisoned")
            .get(&id)
            .copied()
    }

    fn exists(&self, id: i32) -> bool {
        self.users
            .read()
            .expect("user registry lock poisoned")
            .contains_key(&id)
    }

    fn update(&self, user: User) {
        self.users
            .write()
            .expect("user registry lock poisoned")
            .insert(user.id, user);
    }
}
