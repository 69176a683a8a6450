//! Padded bounding box around a departure/arrival pair.

use crate::types::{BoundingBox, GeoCoordinate};

/// Share of each axis' span added on both sides of the box.
pub const BOUNDS_MARGIN_RATIO: f64 = 0.1;

/// Smallest axis-aligned box enclosing both points, widened by
/// [`BOUNDS_MARGIN_RATIO`] of the span on each axis.
///
/// Identical points give a zero-area box; callers showing it need to
/// impose their own minimum viewport.
pub fn padded_bounds(a: &GeoCoordinate, b: &GeoCoordinate) -> BoundingBox {
    let lat_min = a.lat.min(b.lat);
    let lat_max = a.lat.max(b.lat);
    let lng_min = a.lng.min(b.lng);
    let lng_max = a.lng.max(b.lng);

    let lat_margin = (lat_max - lat_min) * BOUNDS_MARGIN_RATIO;
    let lng_margin = (lng_max - lng_min) * BOUNDS_MARGIN_RATIO;

    BoundingBox {
        south_west: GeoCoordinate {
            lat: lat_min - lat_margin,
            lng: lng_min - lng_margin,
        },
        north_east: GeoCoordinate {
            lat: lat_max + lat_margin,
            lng: lng_max + lng_margin,
        },
    }
}
