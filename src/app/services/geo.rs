//! Geospatial search over registered stations
//!
//! Distances are great-circle kilometers computed with the haversine
//! formula on the stored WGS84 coordinates.

use crate::app::models::Station;
use crate::constants::geo::EARTH_RADIUS_KM;

/// Great-circle distance in kilometers between two coordinate pairs
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * a.sqrt().asin() * EARTH_RADIUS_KM
}

/// Stations within `radius_km` of the query point, closest first
pub fn within_radius(
    stations: Vec<Station>,
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> Vec<Station> {
    let mut nearby: Vec<(f64, Station)> = stations
        .into_iter()
        .map(|station| {
            let (lat, lon) = station.location();
            (distance_km(latitude, longitude, lat, lon), station)
        })
        .filter(|(distance, _)| *distance <= radius_km)
        .collect();

    nearby.sort_by(|a, b| a.0.total_cmp(&b.0));
    nearby.into_iter().map(|(_, station)| station).collect()
}
