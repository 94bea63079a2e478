use crate::models::{GeoPoint, MapBounds};
use geo::{BoundingRect, MultiPoint};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Smallest rectangle containing every point, or `None` for an empty input
pub fn bounds_of<I>(points: I) -> Option<MapBounds>
where
    I: IntoIterator<Item = GeoPoint>,
{
    let multi: MultiPoint<f64> = points
        .into_iter()
        .map(geo::Point::<f64>::from)
        .collect::<Vec<_>>()
        .into();

    multi.bounding_rect().map(|rect| MapBounds {
        south_west: GeoPoint::new(rect.min().y, rect.min().x),
        north_east: GeoPoint::new(rect.max().y, rect.max().x),
    })
}
