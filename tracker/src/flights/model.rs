//! Flight records as returned by the AviationStack `/flights` endpoint.
//!
//! Only `flight_date` and `flight_status` are always present; every
//! nested field may be missing or `null`.

use serde::{Deserialize, Serialize};

/// Departure side of a flight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Departure {
    pub airport: Option<String>,
    pub timezone: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub terminal: Option<String>,
    pub gate: Option<String>,
    /// Delay in minutes
    pub delay: Option<i64>,
    pub scheduled: Option<String>,
    pub estimated: Option<String>,
    pub actual: Option<String>,
    pub estimated_runway: Option<String>,
    pub actual_runway: Option<String>,
}

/// Arrival side of a flight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arrival {
    pub airport: Option<String>,
    pub timezone: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub terminal: Option<String>,
    pub gate: Option<String>,
    pub baggage: Option<String>,
    /// Delay in minutes
    pub delay: Option<i64>,
    pub scheduled: Option<String>,
    pub estimated: Option<String>,
    pub actual: Option<String>,
    pub estimated_runway: Option<String>,
    pub actual_runway: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Airline {
    pub name: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Codeshare {
    pub airline_name: Option<String>,
    pub airline_iata: Option<String>,
    pub airline_icao: Option<String>,
    pub flight_number: Option<String>,
    pub flight_iata: Option<String>,
    pub flight_icao: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightNumber {
    pub number: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub codeshared: Option<Codeshare>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aircraft {
    pub registration: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub icao24: Option<String>,
}

/// Live transponder data, only present for some airborne flights
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveData {
    pub updated: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub direction: Option<f64>,
    pub speed_horizontal: Option<f64>,
    pub speed_vertical: Option<f64>,
    pub is_ground: Option<bool>,
}

/// A single flight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    #[serde(default)]
    pub flight_date: String,
    /// Raw status, see [`status_label`](super::status::status_label)
    #[serde(default)]
    pub flight_status: String,
    #[serde(default)]
    pub departure: Option<Departure>,
    #[serde(default)]
    pub arrival: Option<Arrival>,
    #[serde(default)]
    pub airline: Option<Airline>,
    #[serde(default)]
    pub flight: Option<FlightNumber>,
    #[serde(default)]
    pub aircraft: Option<Aircraft>,
    #[serde(default)]
    pub live: Option<LiveData>,
}

impl Flight {
    /// Departure airport code, when known.
    pub fn departure_iata(&self) -> Option<&str> {
        self.departure
            .as_ref()
            .and_then(|d| d.iata.as_deref())
            .filter(|code| !code.is_empty())
    }

    /// Arrival airport code, when known.
    pub fn arrival_iata(&self) -> Option<&str> {
        self.arrival
            .as_ref()
            .and_then(|a| a.iata.as_deref())
            .filter(|code| !code.is_empty())
    }

    /// Flight IATA code, falling back to "N/A".
    pub fn flight_iata(&self) -> &str {
        self.flight
            .as_ref()
            .and_then(|f| f.iata.as_deref())
            .unwrap_or("N/A")
    }

    /// Airline name, falling back to "N/A".
    pub fn airline_name(&self) -> &str {
        self.airline
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or("N/A")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
    pub count: u32,
    pub total: u32,
}

/// Response envelope of the `/flights` endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightsResponse {
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub data: Vec<Flight>,
}
