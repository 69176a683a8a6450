//! Position estimation through the public API.

use chrono::{Duration, TimeZone, Utc};
use flight_tracker::{estimate, estimate_at, GeoCoordinate, ScheduleWindow};

fn coordinate(lat: f64, lng: f64) -> GeoCoordinate {
    GeoCoordinate { lat, lng }
}

#[test]
fn test_schedule_boundaries() {
    let departure = coordinate(45.6306, 8.7281);
    let arrival = coordinate(51.47, -0.4543);
    let departs = Utc.with_ymd_and_hms(2025, 7, 14, 6, 30, 0).unwrap();
    let arrives = departs + Duration::minutes(125);
    let schedule = ScheduleWindow::new(departs, arrives);

    assert_eq!(
        estimate_at(&departure, &arrival, Some(&schedule), departs).position,
        departure
    );
    assert_eq!(
        estimate_at(&departure, &arrival, Some(&schedule), arrives).position,
        arrival
    );

    let halfway = departs + (arrives - departs) / 2;
    let position = estimate_at(&departure, &arrival, Some(&schedule), halfway).position;
    let midpoint = departure.midpoint(&arrival);
    assert!((position.lat - midpoint.lat).abs() < 1e-9);
    assert!((position.lng - midpoint.lng).abs() < 1e-9);
}

#[test]
fn test_progress_moves_towards_arrival() {
    let departure = coordinate(41.8002, 12.2388);
    let arrival = coordinate(40.6413, -73.7781);
    let departs = Utc.with_ymd_and_hms(2025, 7, 14, 9, 0, 0).unwrap();
    let schedule = ScheduleWindow::new(departs, departs + Duration::hours(10));

    let mut previous = departure.lng;
    for hour in 1..10 {
        let now = departs + Duration::hours(hour);
        let position = estimate_at(&departure, &arrival, Some(&schedule), now).position;
        assert!(position.lng < previous);
        assert!(position.lng > arrival.lng);
        previous = position.lng;
    }
}

#[test]
fn test_no_schedule_midpoint() {
    let departure = coordinate(52.3105, 4.7683);
    let arrival = coordinate(40.4983, -3.5676);
    let result = estimate(&departure, &arrival, None);
    assert_eq!(result.position, departure.midpoint(&arrival));
}

#[test]
fn test_bearing_reference_values() {
    let origin = coordinate(0.0, 0.0);

    let east = estimate(&origin, &coordinate(0.0, 90.0), None).bearing_degrees;
    assert!((east - 90.0).abs() < 1e-9);

    let north = estimate(&origin, &coordinate(90.0, 0.0), None).bearing_degrees;
    assert!(north.abs() < 1e-9);
}

#[test]
fn test_bounds() {
    let padded = estimate(&coordinate(40.0, 10.0), &coordinate(50.0, 20.0), None).bounds;
    assert!(padded.south_west.lat < 40.0 && padded.south_west.lng < 10.0);
    assert!(padded.north_east.lat > 50.0 && padded.north_east.lng > 20.0);

    let same = coordinate(37.6213, -122.379);
    let collapsed = estimate(&same, &same, None).bounds;
    assert_eq!(collapsed.south_west, collapsed.north_east);
}
