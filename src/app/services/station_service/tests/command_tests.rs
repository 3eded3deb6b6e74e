//! Tests for get/save/delete/list commands

use super::*;
use crate::app::models::FuelType;
use crate::app::stores::StationStore;
use crate::error::Error;

#[test]
fn test_get_station_by_id_negative_id_rejected() {
    let (service, _, _) = create_service();
    assert!(matches!(
        service.get_station_by_id(-1),
        Err(Error::InvalidStation { .. })
    ));
    assert!(service.get_station_by_id(-42).is_err());
}

#[test]
fn test_get_station_by_id_unknown_id_is_none() {
    let (service, _, _) = create_service();
    assert_eq!(service.get_station_by_id(7).unwrap(), None);
}

#[test]
fn test_save_station_assigns_id_and_round_trips() {
    let (service, _, _) = create_service();
    let station = create_test_station("ENI", 40.0005, 25.0010, &[FuelType::Diesel], Some("Enjoy"));

    let saved = service.save_station(station.clone()).unwrap();
    let id = saved.id.expect("store must assign an id");

    // Re-reading by the returned id yields the same record, id aside
    let read_back = service.get_station_by_id(id).unwrap().unwrap();
    assert_eq!(read_back, saved);

    let mut expected = station;
    expected.id = Some(id);
    assert_eq!(read_back, expected);
}

#[test]
fn test_save_station_with_known_id_overwrites() {
    let (service, _, _) = create_service();
    let saved = service
        .save_station(create_test_station("ENI", 40.0, 25.0, &[], None))
        .unwrap();

    let mut renamed = saved.clone();
    renamed.name = "ENI-2".to_string();
    let updated = service.save_station(renamed).unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(
        service
            .get_station_by_id(saved.id.unwrap())
            .unwrap()
            .unwrap()
            .name,
        "ENI-2"
    );
    assert_eq!(service.list_all_stations().len(), 1);
}

#[test]
fn test_save_station_with_unknown_explicit_id_inserts() {
    let (service, stations, _) = create_service();
    let mut station = create_test_station("ENI", 40.0, 25.0, &[], None);
    station.id = Some(23);

    let saved = service.save_station(station).unwrap();
    assert_eq!(saved.id, Some(23));
    assert!(stations.exists(23));
}

#[test]
fn test_save_station_invalid_coordinates_rejected() {
    let (service, stations, _) = create_service();
    let mut station = create_test_station("ENI", 40.0, 25.0, &[], None);
    station.latitude = 95.0;

    assert!(matches!(
        service.save_station(station),
        Err(Error::GpsData { .. })
    ));
    // Fail-fast: nothing was written
    assert!(stations.is_empty());
}

#[test]
fn test_save_station_negative_price_rejected() {
    let (service, stations, _) = create_service();
    let mut station = create_test_station("ENI", 40.0, 25.0, &[FuelType::Diesel], None);
    station.prices.insert(FuelType::Diesel, -1.0);

    assert!(matches!(
        service.save_station(station),
        Err(Error::Price { .. })
    ));
    assert!(stations.is_empty());
}

#[test]
fn test_save_station_selling_nothing_succeeds() {
    let (service, _, _) = create_service();
    let station = create_test_station("NEW", 40.0, 25.0, &[], None);
    assert!(service.save_station(station).is_ok());
}

#[test]
fn test_delete_station_semantics() {
    let (service, _, _) = create_service();
    let saved = service
        .save_station(create_test_station("ENI", 40.0, 25.0, &[], None))
        .unwrap();
    let id = saved.id.unwrap();

    assert!(matches!(
        service.delete_station(-1),
        Err(Error::InvalidStation { .. })
    ));
    assert_eq!(service.delete_station(id).unwrap(), true);
    assert_eq!(service.delete_station(id).unwrap(), false);
    assert_eq!(service.get_station_by_id(id).unwrap(), None);
}

#[test]
fn test_list_all_stations() {
    let (service, _, _) = create_service();
    assert!(service.list_all_stations().is_empty());

    service
        .save_station(create_test_station("A", 40.0, 25.0, &[], None))
        .unwrap();
    service
        .save_station(create_test_station("B", 41.0, 26.0, &[], None))
        .unwrap();

    assert_eq!(service.list_all_stations().len(), 2);
}
