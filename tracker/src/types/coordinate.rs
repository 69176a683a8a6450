//! Struct definitions and implementations for [`GeoCoordinate`] and
//! [`BoundingBox`].

use serde::{Deserialize, Serialize};

/// A [`GeoCoordinate`] is a geographic position in decimal degrees.
///
/// Coordinates handed out by this crate always carry finite values;
/// use [`GeoCoordinate::new`] when the values come from an untrusted
/// source.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// The latitude, in [-90, 90].
    pub lat: f64,

    /// The longitude, in [-180, 180].
    pub lng: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate, rejecting `NaN` and infinite values.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let coordinate = GeoCoordinate { lat, lng };
        coordinate.is_finite().then_some(coordinate)
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Arithmetic midpoint, each axis averaged independently.
    pub fn midpoint(&self, other: &GeoCoordinate) -> GeoCoordinate {
        GeoCoordinate {
            lat: (self.lat + other.lat) / 2.0,
            lng: (self.lng + other.lng) / 2.0,
        }
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

/// Axis-aligned rectangle in lat/lng space.
///
/// May have zero area when both corners coincide.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum latitude and longitude.
    pub south_west: GeoCoordinate,

    /// Maximum latitude and longitude.
    pub north_east: GeoCoordinate,
}

impl BoundingBox {
    /// Whether the box collapses to a line or a point.
    pub fn is_degenerate(&self) -> bool {
        self.south_west.lat == self.north_east.lat || self.south_west.lng == self.north_east.lng
    }
}
