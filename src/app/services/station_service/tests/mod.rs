//! Shared fixtures for station service tests

use crate::app::models::{FuelType, Station, User};
use crate::app::services::station_service::StationService;
use crate::app::stores::{MemoryStationStore, MemoryUserStore};
use crate::config::ServiceConfig;
use std::collections::BTreeMap;
use std::sync::Arc;

pub mod command_tests;
pub mod reputation_tests;

/// Service over fresh in-memory stores
pub fn create_service() -> (StationService, Arc<MemoryStationStore>, Arc<MemoryUserStore>) {
    let stations = Arc::new(MemoryStationStore::new());
    let users = Arc::new(MemoryUserStore::new());
    let service = StationService::new(stations.clone(), users.clone());
    (service, stations, users)
}

/// Service with a custom configuration over fresh in-memory stores
pub fn create_service_with_config(
    config: ServiceConfig,
) -> (StationService, Arc<MemoryStationStore>, Arc<MemoryUserStore>) {
    let stations = Arc::new(MemoryStationStore::new());
    let users = Arc::new(MemoryUserStore::new());
    let service = StationService::with_config(stations.clone(), users.clone(), config);
    (service, stations, users)
}

/// Station with the given fuels available and an optional car-sharing brand
pub fn create_test_station(
    name: &str,
    latitude: f64,
    longitude: f64,
    fuels: &[FuelType],
    brand: Option<&str>,
) -> Station {
    let mut station = Station::new(name, "corso Duca", latitude, longitude).unwrap();
    for fuel in fuels {
        station.set_availability(*fuel, true);
    }
    station.car_sharing = brand.map(str::to_string);
    station
}

/// A price map covering every fuel kind at the same value
pub fn uniform_prices(value: f64) -> BTreeMap<FuelType, f64> {
    FuelType::ALL.iter().map(|fuel| (*fuel, value)).collect()
}

/// Register a user with the given reputation and return its id
pub fn seed_user(users: &MemoryUserStore, id: i32, reputation: i32) -> i32 {
    users.insert(User::new(id, reputation));
    id
}
