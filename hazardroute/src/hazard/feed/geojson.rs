//! USGS GeoJSON summary format.
//!
//! Only the fields needed for risk classification are deserialized:
//!
//! ```text
//! features[].properties.mag        magnitude (may be null)
//! features[].properties.place      human-readable location
//! features[].properties.time       epoch milliseconds
//! features[].geometry.coordinates  [longitude, latitude, depth_km]
//! ```

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::FeedError;
use crate::geo::GeoPoint;
use crate::hazard::HazardEvent;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: Properties,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    mag: Option<f64>,
    place: Option<String>,
    time: Option<i64>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<f64>,
}

/// Parse a GeoJSON FeatureCollection into hazard events.
///
/// Features without a magnitude are skipped. Any other malformed feature
/// fails the whole parse.
pub fn parse_feature_collection(bytes: &[u8]) -> Result<Vec<HazardEvent>, FeedError> {
    let collection: FeatureCollection =
        serde_json::from_slice(bytes).map_err(|e| FeedError::Json(e.to_string()))?;

    let total = collection.features.len();
    let mut events = Vec::with_capacity(total);

    for (index, feature) in collection.features.into_iter().enumerate() {
        let Some(magnitude) = feature.properties.mag else {
            tracing::debug!(index, "Skipping feature without magnitude");
            continue;
        };
        events.push(to_event(index, magnitude, feature)?);
    }

    tracing::debug!(total, parsed = events.len(), "Parsed hazard features");

    Ok(events)
}

fn to_event(index: usize, magnitude: f64, feature: Feature) -> Result<HazardEvent, FeedError> {
    let invalid = |message: String| FeedError::InvalidFeature { index, message };

    let coordinates = feature
        .geometry
        .map(|g| g.coordinates)
        .ok_or_else(|| invalid("missing geometry".to_string()))?;
    let (lon, lat) = match coordinates.as_slice() {
        [lon, lat, ..] => (*lon, *lat),
        _ => return Err(invalid("expected [longitude, latitude]".to_string())),
    };
    let location = GeoPoint::new(lat, lon).map_err(|e| invalid(e.to_string()))?;

    let millis = feature
        .properties
        .time
        .ok_or_else(|| invalid("missing time".to_string()))?;
    let observed_at: DateTime<Utc> = DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| invalid(format!("time out of range: {}", millis)))?;

    let description = feature
        .properties
        .place
        .or(feature.properties.title)
        .unwrap_or_else(|| "Unknown location".to_string());

    Ok(HazardEvent::new(location, magnitude, observed_at, description))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {"count": 3},
        "features": [
            {
                "type": "Feature",
                "properties": {"mag": 6.4, "place": "12 km SW of Searles Valley, CA", "time": 1562383193040, "title": "M 6.4 - Searles Valley"},
                "geometry": {"type": "Point", "coordinates": [-117.5038333, 35.7053333, 10.5]},
                "id": "ci38443183"
            },
            {
                "type": "Feature",
                "properties": {"mag": null, "place": "somewhere", "time": 1562383193040},
                "geometry": {"type": "Point", "coordinates": [0.0, 0.0, 0.0]}
            },
            {
                "type": "Feature",
                "properties": {"mag": 4.6, "place": null, "time": 1700000000000, "title": "M 4.6 - South Sandwich Islands"},
                "geometry": {"type": "Point", "coordinates": [-26.1, -58.4, 35.0]}
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let events = parse_feature_collection(SAMPLE.as_bytes()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].magnitude, 6.4);
        assert_eq!(events[0].location.latitude, 35.7053333);
        assert_eq!(events[0].location.longitude, -117.5038333);
        assert_eq!(events[0].description, "12 km SW of Searles Valley, CA");
        assert_eq!(events[0].observed_at.timestamp_millis(), 1562383193040);
        // place is null, so the title is used
        assert_eq!(events[1].description, "M 4.6 - South Sandwich Islands");
    }

    #[test]
    fn test_empty_collection() {
        let events =
            parse_feature_collection(br#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_feature_collection(b"<html>503</html>");
        assert!(matches!(result, Err(FeedError::Json(_))));
    }

    #[test]
    fn test_out_of_range_coordinates_fail() {
        let json = r#"{"features":[{"properties":{"mag":5.0,"time":0},
            "geometry":{"coordinates":[10.0, 95.0]}}]}"#;
        let result = parse_feature_collection(json.as_bytes());
        assert!(matches!(
            result,
            Err(FeedError::InvalidFeature { index: 0, .. })
        ));
    }

    #[test]
    fn test_missing_geometry_fails() {
        let json = r#"{"features":[{"properties":{"mag":5.0,"time":0},"geometry":null}]}"#;
        let result = parse_feature_collection(json.as_bytes());
        assert!(matches!(result, Err(FeedError::InvalidFeature { .. })));
    }

    #[test]
    fn test_short_coordinates_fail() {
        let json = r#"{"features":[{"properties":{"mag":5.0,"time":0},"geometry":{"coordinates":[1.0]}}]}"#;
        let result = parse_feature_collection(json.as_bytes());
        assert!(matches!(result, Err(FeedError::InvalidFeature { .. })));
    }
}
