//! Extraction of a coordinate from free-form model output.
//!
//! The remote service answers in natural language. The first
//! brace-delimited chunk of the text is taken as the JSON object
//! carrying `lat` and `lng`; everything else is ignored.

use crate::types::GeoCoordinate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

lazy_static! {
    static ref JSON_OBJECT: Regex = Regex::new(r"\{[^}]+\}").expect("valid JSON object pattern");
}

#[derive(Debug, Deserialize)]
struct RawCoordinate {
    lat: serde_json::Value,
    lng: serde_json::Value,
}

/// Given raw text, returns a validated coordinate or `None`.
///
/// Both `lat` and `lng` must be JSON numbers. Numeric strings such as
/// `"41.8"` are rejected.
pub fn parse_coordinates(text: &str) -> Option<GeoCoordinate> {
    let Some(found) = JSON_OBJECT.find(text) else {
        resolver_debug!("(parse_coordinates) no JSON object in text: {:?}", text);
        return None;
    };

    let raw: RawCoordinate = match serde_json::from_str(found.as_str()) {
        Ok(raw) => raw,
        Err(e) => {
            resolver_debug!(
                "(parse_coordinates) could not parse [{}]: {}",
                found.as_str(),
                e
            );
            return None;
        }
    };

    let (Some(lat), Some(lng)) = (raw.lat.as_f64(), raw.lng.as_f64()) else {
        resolver_debug!(
            "(parse_coordinates) non numeric lat/lng in [{}]",
            found.as_str()
        );
        return None;
    };

    GeoCoordinate::new(lat, lng)
}
