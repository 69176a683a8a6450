//! Plain text report of a looked up flight.

use crate::flights::format::NOT_AVAILABLE;
use crate::flights::{status_label, Flight, ScheduleFormatter};
use crate::tracking::TrackOutcome;
use std::fmt;

fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_AVAILABLE)
}

/// A flight and the outcome of its position lookup, ready for display.
#[derive(Debug, Clone, Copy)]
pub struct FlightReport<'a> {
    flight: &'a Flight,
    outcome: &'a TrackOutcome,
    formatter: &'a ScheduleFormatter,
}

impl<'a> FlightReport<'a> {
    /// Pairs a flight with its outcome and the formatter for its times.
    pub fn new(
        flight: &'a Flight,
        outcome: &'a TrackOutcome,
        formatter: &'a ScheduleFormatter,
    ) -> Self {
        FlightReport {
            flight,
            outcome,
            formatter,
        }
    }

    fn write_gate(
        f: &mut fmt::Formatter,
        terminal: Option<&str>,
        gate: Option<&str>,
        delay: Option<i64>,
    ) -> fmt::Result {
        if let Some(terminal) = terminal {
            writeln!(f, "    terminal   {}", terminal)?;
        }
        if let Some(gate) = gate {
            writeln!(f, "    gate       {}", gate)?;
        }
        if let Some(delay) = delay.filter(|d| *d > 0) {
            writeln!(f, "    delay      {} minutes", delay)?;
        }
        Ok(())
    }
}

impl fmt::Display for FlightReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let flight = self.flight;
        let formatter = self.formatter;
        let departure = flight.departure.clone().unwrap_or_default();
        let arrival = flight.arrival.clone().unwrap_or_default();

        writeln!(
            f,
            "{} {} - {} [{}]",
            flight.airline_name(),
            flight.flight_iata(),
            formatter.date(Some(flight.flight_date.as_str())),
            status_label(&flight.flight_status)
        )?;

        writeln!(
            f,
            "  Departure  {} ({})",
            or_na(departure.airport.as_deref()),
            or_na(departure.iata.as_deref())
        )?;
        writeln!(
            f,
            "    scheduled  {}",
            formatter.date_time(departure.scheduled.as_deref())
        )?;
        Self::write_gate(
            f,
            departure.terminal.as_deref(),
            departure.gate.as_deref(),
            departure.delay,
        )?;

        writeln!(
            f,
            "  Arrival    {} ({})",
            or_na(arrival.airport.as_deref()),
            or_na(arrival.iata.as_deref())
        )?;
        writeln!(
            f,
            "    scheduled  {}",
            formatter.date_time(arrival.scheduled.as_deref())
        )?;
        writeln!(
            f,
            "    estimated  {}",
            formatter.date_time(arrival.estimated.as_deref())
        )?;
        Self::write_gate(
            f,
            arrival.terminal.as_deref(),
            arrival.gate.as_deref(),
            arrival.delay,
        )?;

        let aircraft = flight.aircraft.clone().unwrap_or_default();
        writeln!(
            f,
            "  Aircraft   {}  registration {}  flight ICAO {}",
            or_na(aircraft.iata.as_deref()),
            or_na(aircraft.registration.as_deref()),
            or_na(flight.flight.as_ref().and_then(|n| n.icao.as_deref()))
        )?;

        match self.outcome {
            TrackOutcome::Located(located) => {
                let estimate = &located.estimate;
                writeln!(
                    f,
                    "  Position   {} heading {:.0}° (estimated)",
                    estimate.position, estimate.bearing_degrees
                )?;
                writeln!(
                    f,
                    "  Map bounds {} - {}",
                    estimate.bounds.south_west, estimate.bounds.north_east
                )
            }
            TrackOutcome::MissingAirports | TrackOutcome::Unresolved { .. } => {
                writeln!(f, "  Position   map unavailable")
            }
            TrackOutcome::Superseded => Ok(()),
        }
    }
}

/// Renders one flight and the outcome of its position lookup.
pub fn render_flight(
    flight: &Flight,
    outcome: &TrackOutcome,
    formatter: &ScheduleFormatter,
) -> String {
    FlightReport::new(flight, outcome, formatter).to_string()
}
