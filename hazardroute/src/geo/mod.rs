//! Great-circle geometry shared by graph construction and hazard overlay.
//!
//! Every distance in the crate goes through [`haversine_km`] so that edge
//! creation and risk classification agree on the same metric.

mod types;


pub use types::{CoordError, GeoPoint, EARTH_RADIUS_KM, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Validates a latitude/longitude pair.
///
/// NaN and infinities are rejected along with out-of-range values.
pub fn validate(lat: f64, lon: f64) -> Result<(), CoordError> {
    if !lat.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !lon.is_finite() || !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }
    Ok(())
}

/// Calculate the great-circle distance between two positions.
///
/// Uses the haversine formula over a spherical Earth of radius
/// [`EARTH_RADIUS_KM`].
///
/// # Arguments
///
/// * `from` - First position as (latitude, longitude) in degrees
/// * `to` - Second position as (latitude, longitude) in degrees
///
/// # Example
///
/// ```
/// use hazardroute::geo::haversine_km;
///
/// // One degree of arc along the equator
/// let dist = haversine_km((0.0, 0.0), (0.0, 1.0));
/// assert!((dist - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1 * DEG_TO_RAD;
    let lat2_rad = lat2 * DEG_TO_RAD;
    let delta_lat = (lat2 - lat1) * DEG_TO_RAD;
    let delta_lon = (lon2 - lon1) * DEG_TO_RAD;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Clamp guards against a > 1.0 from rounding on antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Rounds a distance to one decimal place.
///
/// Edge weights are normalized this way, so two pairs whose true distances
/// round to the same tenth of a kilometer cost the same.
#[inline]
pub fn round_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

/// Converts a rounded weight to whole tenths of a kilometer.
///
/// Shortest-path search runs on these integer costs so that equal-weight
/// comparisons are exact.
#[inline]
pub fn to_decikm(km: f64) -> u64 {
    (km * 10.0).round().max(0.0) as u64
}

/// Inverse of [`to_decikm`].
#[inline]
pub fn from_decikm(decikm: u64) -> f64 {
    decikm as f64 / 10.0
}
