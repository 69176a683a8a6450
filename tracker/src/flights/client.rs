//! AviationStack client

use super::model::{Flight, FlightsResponse};
use crate::Config;

/// Errors returned by [`FlightDataClient`]
#[derive(Debug, Clone, PartialEq)]
pub enum FlightDataError {
    /// The request could not be sent or no response arrived
    Request(String),

    /// The API answered with a non-success status
    Status(u16),

    /// The response body could not be decoded
    Decode(String),
}

impl std::fmt::Display for FlightDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FlightDataError::Request(e) => write!(f, "Request failed: {}", e),
            FlightDataError::Status(code) => write!(f, "API error: status {}", code),
            FlightDataError::Decode(e) => write!(f, "Could not decode response: {}", e),
        }
    }
}

impl std::error::Error for FlightDataError {}

/// Looks up flights by their IATA flight code.
#[derive(Debug, Clone)]
pub struct FlightDataClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl FlightDataClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: &str, access_key: &str) -> Self {
        FlightDataClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key: access_key.to_string(),
        }
    }

    /// Create a client from the flight API settings in [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.flight_api_url, &config.flight_api_key)
    }

    /// URL of the flights endpoint.
    pub fn flights_url(&self) -> String {
        format!("{}/flights", self.base_url)
    }

    /// All flights currently listed for `flight_iata`. An empty list is
    /// a normal answer.
    pub async fn flights_by_iata(&self, flight_iata: &str) -> Result<Vec<Flight>, FlightDataError> {
        flights_info!("(flights_by_iata) looking up flight {}", flight_iata);

        let response = self
            .http
            .get(self.flights_url())
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("flight_iata", flight_iata),
            ])
            .send()
            .await
            .map_err(|e| {
                flights_error!("(flights_by_iata) request failed: {}", e);
                FlightDataError::Request(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            flights_error!(
                "(flights_by_iata) API error: status {}, detail: {}",
                status,
                detail
            );
            return Err(FlightDataError::Status(status.as_u16()));
        }

        let body: FlightsResponse = response.json().await.map_err(|e| {
            flights_error!("(flights_by_iata) could not decode response: {}", e);
            FlightDataError::Decode(e.to_string())
        })?;

        if body.data.is_empty() {
            flights_info!("(flights_by_iata) no flights found for {}", flight_iata);
        } else {
            flights_debug!(
                "(flights_by_iata) {} flight(s) found for {}",
                body.data.len(),
                flight_iata
            );
        }

        Ok(body.data)
    }
}
