//! Position Estimator
//!
//! Derives the values needed to draw a flight on a map from its two
//! endpoint coordinates and, when known, its scheduled times: an
//! estimated current position, the marker bearing and a padded
//! bounding box.
//!
//! Interpolation is linear in lat/lng space, not along a great circle.
//! For the short and medium haul pairs this is used with the error is
//! not visible at map scale; long haul estimates drift from the real
//! track.

#[macro_use]
pub mod macros;
pub mod bearing;
pub mod bounds;

pub use bearing::initial_bearing;
pub use bounds::padded_bounds;

use crate::flights::model::Flight;
use crate::types::{BoundingBox, GeoCoordinate};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scheduled times of a single flight. Either end may be unknown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    /// Scheduled departure time
    pub scheduled_departure: Option<DateTime<Utc>>,

    /// Scheduled arrival time
    pub scheduled_arrival: Option<DateTime<Utc>>,
}

impl ScheduleWindow {
    /// Window with both ends known.
    pub fn new(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> Self {
        ScheduleWindow {
            scheduled_departure: Some(departure),
            scheduled_arrival: Some(arrival),
        }
    }

    /// Builds the window from a flight record's scheduled times.
    ///
    /// Missing or unparsable times leave that end unknown.
    pub fn from_flight(flight: &Flight) -> Self {
        let departure = flight
            .departure
            .as_ref()
            .and_then(|d| d.scheduled.as_deref())
            .and_then(parse_timestamp);
        let arrival = flight
            .arrival
            .as_ref()
            .and_then(|a| a.scheduled.as_deref())
            .and_then(parse_timestamp);

        ScheduleWindow {
            scheduled_departure: departure,
            scheduled_arrival: arrival,
        }
    }
}

/// Parses an RFC 3339 timestamp. Values without an offset are taken
/// as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    position_debug!("(parse_timestamp) could not parse timestamp [{}]", value);
    None
}

/// Output of the estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionEstimate {
    /// Estimated current position of the aircraft
    pub position: GeoCoordinate,

    /// Initial bearing from departure to arrival, degrees in [0, 360)
    pub bearing_degrees: f64,

    /// Padded box enclosing both airports
    pub bounds: BoundingBox,
}

/// Estimate against the current wall clock.
///
/// See [`estimate_at`].
pub fn estimate(
    departure: &GeoCoordinate,
    arrival: &GeoCoordinate,
    schedule: Option<&ScheduleWindow>,
) -> PositionEstimate {
    estimate_at(departure, arrival, schedule, Utc::now())
}

/// Estimate as seen at `now`.
///
/// Both coordinates must be finite; passing the placeholder of a
/// failed resolution is a caller bug.
pub fn estimate_at(
    departure: &GeoCoordinate,
    arrival: &GeoCoordinate,
    schedule: Option<&ScheduleWindow>,
    now: DateTime<Utc>,
) -> PositionEstimate {
    debug_assert!(
        departure.is_finite() && arrival.is_finite(),
        "estimate called with non-finite coordinates"
    );

    if let Some(ScheduleWindow {
        scheduled_departure: Some(departs),
        scheduled_arrival: Some(arrives),
    }) = schedule
    {
        if arrives < departs {
            position_warn!(
                "(estimate_at) scheduled arrival {} precedes departure {}.",
                arrives,
                departs
            );
        }
    }

    let position = interpolate(departure, arrival, schedule, now);
    let bearing_degrees = initial_bearing(departure, arrival);
    let bounds = padded_bounds(departure, arrival);

    position_debug!(
        "(estimate_at) {} -> {} at {}: position {}, bearing {:.1}",
        departure,
        arrival,
        now,
        position,
        bearing_degrees
    );

    PositionEstimate {
        position,
        bearing_degrees,
        bounds,
    }
}

/// Length of `span` in seconds, nanosecond precision while it fits.
fn span_seconds(span: Duration) -> f64 {
    match span.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        None => span.num_milliseconds() as f64 / 1e3,
    }
}

/// Time-proportional position between the two endpoints.
pub fn interpolate(
    departure: &GeoCoordinate,
    arrival: &GeoCoordinate,
    schedule: Option<&ScheduleWindow>,
    now: DateTime<Utc>,
) -> GeoCoordinate {
    let Some(ScheduleWindow {
        scheduled_departure: Some(departs),
        scheduled_arrival: Some(arrives),
    }) = schedule.copied()
    else {
        return departure.midpoint(arrival);
    };

    if now <= departs {
        return *departure;
    }

    if now >= arrives {
        return *arrival;
    }

    let elapsed = span_seconds(now - departs);
    let total = span_seconds(arrives - departs);
    if total <= 0.0 {
        return *arrival;
    }
    let progress = (elapsed / total).clamp(0.0, 1.0);

    GeoCoordinate {
        lat: departure.lat + (arrival.lat - departure.lat) * progress,
        lng: departure.lng + (arrival.lng - departure.lng) * progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fco() -> GeoCoordinate {
        GeoCoordinate {
            lat: 41.8002,
            lng: 12.2388,
        }
    }

    fn cdg() -> GeoCoordinate {
        GeoCoordinate {
            lat: 49.0097,
            lng: 2.5479,
        }
    }

    fn window() -> ScheduleWindow {
        let departs = Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
        ScheduleWindow::new(departs, departs + Duration::hours(2))
    }

    #[test]
    fn test_at_departure_and_arrival() {
        let schedule = window();
        let departs = schedule.scheduled_departure.unwrap();
        let arrives = schedule.scheduled_arrival.unwrap();

        let at_departure = estimate_at(&fco(), &cdg(), Some(&schedule), departs);
        assert_eq!(at_departure.position, fco());

        let at_arrival = estimate_at(&fco(), &cdg(), Some(&schedule), arrives);
        assert_eq!(at_arrival.position, cdg());
    }

    #[test]
    fn test_before_departure_and_after_arrival() {
        let schedule = window();
        let departs = schedule.scheduled_departure.unwrap();
        let arrives = schedule.scheduled_arrival.unwrap();

        let early = estimate_at(&fco(), &cdg(), Some(&schedule), departs - Duration::days(1));
        assert_eq!(early.position, fco());

        let late = estimate_at(&fco(), &cdg(), Some(&schedule), arrives + Duration::minutes(1));
        assert_eq!(late.position, cdg());
    }

    #[test]
    fn test_halfway_is_midpoint() {
        let schedule = window();
        let halfway = schedule.scheduled_departure.unwrap() + Duration::hours(1);

        let estimate = estimate_at(&fco(), &cdg(), Some(&schedule), halfway);
        let midpoint = fco().midpoint(&cdg());
        assert!((estimate.position.lat - midpoint.lat).abs() < 1e-9);
        assert!((estimate.position.lng - midpoint.lng).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_progress() {
        let departure = GeoCoordinate { lat: 0.0, lng: 0.0 };
        let arrival = GeoCoordinate { lat: 40.0, lng: -80.0 };
        let schedule = window();
        let quarter = schedule.scheduled_departure.unwrap() + Duration::minutes(30);

        let position = interpolate(&departure, &arrival, Some(&schedule), quarter);
        assert!((position.lat - 10.0).abs() < 1e-9);
        assert!((position.lng + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_without_schedule_is_midpoint() {
        let midpoint = fco().midpoint(&cdg());
        let instants = [
            Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 5, 1, 11, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2100, 12, 31, 23, 59, 59).unwrap(),
        ];

        for now in instants {
            assert_eq!(estimate_at(&fco(), &cdg(), None, now).position, midpoint);
        }
        assert_eq!(estimate(&fco(), &cdg(), None).position, midpoint);
    }

    #[test]
    fn test_partial_schedule_is_midpoint() {
        let departs = Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
        let midpoint = fco().midpoint(&cdg());

        let only_departure = ScheduleWindow {
            scheduled_departure: Some(departs),
            scheduled_arrival: None,
        };
        let only_arrival = ScheduleWindow {
            scheduled_departure: None,
            scheduled_arrival: Some(departs),
        };

        for schedule in [only_departure, only_arrival, ScheduleWindow::default()] {
            let later = departs + Duration::hours(5);
            assert_eq!(
                estimate_at(&fco(), &cdg(), Some(&schedule), later).position,
                midpoint
            );
        }
    }

    #[test]
    fn test_bearing_constant_over_time() {
        let schedule = window();
        let departs = schedule.scheduled_departure.unwrap();

        let first = estimate_at(&fco(), &cdg(), Some(&schedule), departs);
        let later = estimate_at(
            &fco(),
            &cdg(),
            Some(&schedule),
            departs + Duration::minutes(45),
        );
        assert_eq!(first.bearing_degrees, later.bearing_degrees);
        assert_eq!(first.bounds, later.bounds);
        assert_eq!(first.bounds, padded_bounds(&fco(), &cdg()));
    }

    #[test]
    fn test_sub_millisecond_window() {
        let departure = GeoCoordinate {
            lat: 40.0,
            lng: 10.0,
        };
        let arrival = GeoCoordinate {
            lat: 50.0,
            lng: 20.0,
        };
        let departs = Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
        let schedule = ScheduleWindow::new(departs, departs + Duration::microseconds(500));

        let position = interpolate(
            &departure,
            &arrival,
            Some(&schedule),
            departs + Duration::microseconds(200),
        );
        assert!(position.is_finite());
        assert!((position.lat - 44.0).abs() < 1e-9);
        assert!((position.lng - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverted_window_is_finite() {
        let departs = Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
        let schedule = ScheduleWindow::new(departs, departs - Duration::hours(1));

        for now in [
            departs - Duration::hours(2),
            departs - Duration::minutes(30),
            departs + Duration::minutes(30),
        ] {
            let estimate = estimate_at(&fco(), &cdg(), Some(&schedule), now);
            assert!(estimate.position.is_finite());
        }
    }

    #[test]
    fn test_parse_timestamp() {
        let expected = Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2025-05-01T10:00:00+00:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-05-01T12:00:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-05-01T10:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-05-01T10:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-05-01T10:00"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
