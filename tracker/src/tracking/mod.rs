//! Flight Tracker
//!
//! Glues the resolver and the estimator together for one flight: both
//! airports are resolved concurrently, then the estimate is computed
//! from the joined results.
//!
//! Lookups cannot be cancelled. Each call to [`FlightTracker::begin`]
//! supersedes the previous request; results that complete for a
//! superseded request are dropped instead of being handed back.

#[macro_use]
pub mod macros;

use crate::flights::model::Flight;
use crate::position::{estimate_at, PositionEstimate, ScheduleWindow};
use crate::resolver::{AirportTable, CoordinateResolver, GeocodeClient};
use crate::types::{AirportCode, GeoCoordinate};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one lookup issued by a [`FlightTracker`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestId(u64);

/// Map data for a flight whose two airports were resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightPosition {
    pub departure: GeoCoordinate,
    pub arrival: GeoCoordinate,
    pub schedule: ScheduleWindow,
    pub estimate: PositionEstimate,
}

/// Result of [`FlightTracker::track`]
#[derive(Debug, Clone, PartialEq)]
pub enum TrackOutcome {
    /// Both airports resolved
    Located(FlightPosition),

    /// The flight has no departure or arrival code
    MissingAirports,

    /// At least one airport could not be resolved
    Unresolved {
        departure: Option<GeoCoordinate>,
        arrival: Option<GeoCoordinate>,
    },

    /// A newer request was started while this one was running
    Superseded,
}

impl TrackOutcome {
    /// The position, if the flight was located.
    pub fn position(&self) -> Option<&FlightPosition> {
        match self {
            TrackOutcome::Located(position) => Some(position),
            _ => None,
        }
    }
}

/// Per-view lookup driver.
#[derive(Debug)]
pub struct FlightTracker<T, C> {
    resolver: CoordinateResolver<T, C>,
    latest: AtomicU64,
}

impl<T: AirportTable, C: GeocodeClient> FlightTracker<T, C> {
    pub fn new(resolver: CoordinateResolver<T, C>) -> Self {
        FlightTracker {
            resolver,
            latest: AtomicU64::new(0),
        }
    }

    /// The resolver used for lookups.
    pub fn resolver(&self) -> &CoordinateResolver<T, C> {
        &self.resolver
    }

    /// Starts a new request, superseding every earlier one.
    pub fn begin(&self) -> RequestId {
        RequestId(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `request` is still the most recent one.
    pub fn is_current(&self, request: RequestId) -> bool {
        self.latest.load(Ordering::SeqCst) == request.0
    }

    /// Resolve and estimate `flight` for `request` against the wall clock.
    pub async fn track(&self, request: RequestId, flight: &Flight) -> TrackOutcome {
        self.track_at(request, flight, Utc::now()).await
    }

    /// Resolve and estimate `flight` for `request` as seen at `now`.
    pub async fn track_at(
        &self,
        request: RequestId,
        flight: &Flight,
        now: DateTime<Utc>,
    ) -> TrackOutcome {
        let (Some(departure_code), Some(arrival_code)) =
            (flight.departure_iata(), flight.arrival_iata())
        else {
            tracking_info!(
                "(track_at) flight {} has no departure or arrival code.",
                flight.flight_iata()
            );
            return TrackOutcome::MissingAirports;
        };

        self.locate(
            request,
            &AirportCode::from(departure_code),
            &AirportCode::from(arrival_code),
            &ScheduleWindow::from_flight(flight),
            now,
        )
        .await
    }

    /// Resolve both codes concurrently, then estimate.
    pub async fn locate(
        &self,
        request: RequestId,
        departure_code: &AirportCode,
        arrival_code: &AirportCode,
        schedule: &ScheduleWindow,
        now: DateTime<Utc>,
    ) -> TrackOutcome {
        tracking_debug!(
            "(locate) request {:?}: resolving {} and {}",
            request,
            departure_code,
            arrival_code
        );

        let (departure, arrival) = futures::join!(
            self.resolver.resolve(departure_code),
            self.resolver.resolve(arrival_code)
        );

        if !self.is_current(request) {
            tracking_info!(
                "(locate) request {:?} was superseded, dropping its results.",
                request
            );
            return TrackOutcome::Superseded;
        }

        let (Some(departure), Some(arrival)) = (departure, arrival) else {
            tracking_warn!(
                "(locate) could not resolve {} ({:?}) or {} ({:?}).",
                departure_code,
                departure,
                arrival_code,
                arrival
            );
            return TrackOutcome::Unresolved { departure, arrival };
        };

        let estimate = estimate_at(&departure, &arrival, Some(schedule), now);
        TrackOutcome::Located(FlightPosition {
            departure,
            arrival,
            schedule: *schedule,
            estimate,
        })
    }
}
