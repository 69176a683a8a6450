//! Initial bearing between two points on a sphere, using the forward
//! azimuth formula.
//!
//! See [Movable Type](https://www.movable-type.co.uk/scripts/latlong.html#bearing)
//! for more.
//!
//! **Bearing is returned in degrees clockwise from north, in [0, 360)**.

use crate::types::GeoCoordinate;

/// Initial heading when travelling from `start` to `end`.
///
/// # Notes
/// This is the heading at departure only. It is used to orient the
/// aircraft marker and stays constant for a flight, whatever the
/// estimated position.
pub fn initial_bearing(start: &GeoCoordinate, end: &GeoCoordinate) -> f64 {
    let lat1 = start.lat.to_radians();
    let lat2 = end.lat.to_radians();
    let d_lon = (end.lng - start.lng).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

/// Fold any angle into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}
