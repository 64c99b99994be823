//! Defensive GeoJSON decoding.
//!
//! The feed shape is `{ "features": [ { "properties": { mag, place, time,
//! url } }, ... ] }`. The payload as a whole must be a feature collection;
//! a malformed individual feature is skipped with a diagnostic instead of
//! discarding every other record.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::DecodeError;
use crate::event::{DecodeReport, Quake, Skipped};

#[derive(Deserialize)]
struct FeedDocument {
    features: Vec<Value>,
}

#[derive(Deserialize)]
struct Feature {
    properties: Properties,
}

#[derive(Deserialize)]
struct Properties {
    mag: f64,
    place: String,
    time: i64,
    url: String,
}

/// Decode a feed body into an ordered report.
///
/// Output order equals `features` order and decoding the same body twice
/// yields equal reports. An empty or whitespace-only body (the upstream
/// fetch-failed case) short-circuits to an empty report without raising; an
/// empty `features` array is equally valid.
///
/// # Errors
///
/// [`DecodeError`] when the body is not JSON or has no `features` array.
pub fn decode(body: &str) -> Result<DecodeReport, DecodeError> {
    if body.trim().is_empty() {
        return Ok(DecodeReport::default());
    }

    let doc: FeedDocument = serde_json::from_str(body).map_err(DecodeError::Payload)?;

    let mut report = DecodeReport::default();
    for (index, raw) in doc.features.into_iter().enumerate() {
        match serde_json::from_value::<Feature>(raw) {
            Ok(feature) => {
                let p = feature.properties;
                report.quakes.push(Quake {
                    magnitude: p.mag,
                    place: p.place,
                    time_ms: p.time,
                    details_url: p.url,
                });
            }
            Err(err) => {
                warn!(index, %err, "skipping malformed feature");
                report.skipped.push(Skipped {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(mag: f64, place: &str, time: i64, url: &str) -> String {
        format!(
            r#"{{"properties":{{"mag":{mag},"place":"{place}","time":{time},"url":"{url}"}}}}"#
        )
    }

    #[test]
    fn decodes_features_in_feed_order() {
        let body = format!(
            r#"{{"features":[{},{},{}]}}"#,
            feature(6.7, "88km N of Yelizovo, Russia", 1388620296020, "https://example.org/a"),
            feature(2.1, "6km SW of Volcano, Hawaii", 1407164573000, "https://example.org/b"),
            feature(10.5, "Fiji region", 1423706528060, "https://example.org/c"),
        );

        let report = decode(&body).unwrap();
        assert!(report.skipped.is_empty());
        let places: Vec<&str> = report.quakes.iter().map(|q| q.place.as_str()).collect();
        assert_eq!(
            places,
            [
                "88km N of Yelizovo, Russia",
                "6km SW of Volcano, Hawaii",
                "Fiji region"
            ]
        );
        assert_eq!(report.quakes[0].magnitude, 6.7);
        assert_eq!(report.quakes[0].time_ms, 1388620296020);
        assert_eq!(report.quakes[2].details_url, "https://example.org/c");
    }

    #[test]
    fn decode_is_deterministic() {
        let body = format!(
            r#"{{"features":[{}]}}"#,
            feature(5.4, "Off the coast of Oregon", 0, "https://example.org")
        );
        assert_eq!(decode(&body).unwrap(), decode(&body).unwrap());
    }

    #[test]
    fn empty_body_short_circuits() {
        assert_eq!(decode("").unwrap(), DecodeReport::default());
        assert_eq!(decode("  \n").unwrap(), DecodeReport::default());
    }

    #[test]
    fn empty_features_array_is_valid() {
        let report = decode(r#"{"features":[]}"#).unwrap();
        assert!(report.quakes.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn non_json_body_is_a_payload_error() {
        assert!(matches!(decode("not json"), Err(DecodeError::Payload(_))));
    }

    #[test]
    fn missing_features_array_is_a_payload_error() {
        assert!(matches!(
            decode(r#"{"metadata":{}}"#),
            Err(DecodeError::Payload(_))
        ));
    }

    #[test]
    fn malformed_feature_is_skipped_not_fatal() {
        let body = format!(
            r#"{{"features":[{},{{"properties":{{"mag":"not a number"}}}},{}]}}"#,
            feature(6.7, "a", 1, "https://example.org/a"),
            feature(2.1, "b", 2, "https://example.org/b"),
        );

        let report = decode(&body).unwrap();
        assert_eq!(report.quakes.len(), 2);
        assert_eq!(report.quakes[0].place, "a");
        assert_eq!(report.quakes[1].place, "b");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 1);
        assert!(!report.skipped[0].reason.is_empty());
    }
}
