//! Coordinate Resolver
//!
//! Resolves an [`AirportCode`] to a [`GeoCoordinate`]. The static table
//! answers first; codes missing from it fall back to a single remote
//! lookup. Every failure of the remote path is logged and collapses to
//! `None`, an expected outcome for callers.

#[macro_use]
pub mod macros;
pub mod gemini;
pub mod parse;
pub mod table;

pub use gemini::GeminiClient;
pub use parse::parse_coordinates;
pub use table::{AirportTable, StaticAirportTable};

use crate::types::{AirportCode, GeoCoordinate};
use async_trait::async_trait;

/// Transport level failures of a remote lookup
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeError {
    /// The request could not be sent or no response arrived
    Request(String),

    /// The service answered with a non-success status
    Status(u16),

    /// The response body was not the expected envelope
    Envelope(String),
}

impl std::fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GeocodeError::Request(e) => write!(f, "Request failed: {}", e),
            GeocodeError::Status(code) => write!(f, "Unexpected status: {}", code),
            GeocodeError::Envelope(e) => write!(f, "Malformed response envelope: {}", e),
        }
    }
}

impl std::error::Error for GeocodeError {}

/// Remote source of free-form text describing an airport's position.
#[async_trait]
pub trait GeocodeClient: Send + Sync {
    /// Ask for the coordinates of `code`, returning the raw answer text.
    async fn airport_text(&self, code: &AirportCode) -> Result<String, GeocodeError>;
}

/// Two-tier airport coordinate lookup.
#[derive(Debug, Clone)]
pub struct CoordinateResolver<T, C> {
    table: T,
    remote: C,
}

impl<C: GeocodeClient> CoordinateResolver<StaticAirportTable, C> {
    /// Resolver over the built-in airport table.
    pub fn with_static_table(remote: C) -> Self {
        Self::new(StaticAirportTable, remote)
    }
}

impl<T: AirportTable, C: GeocodeClient> CoordinateResolver<T, C> {
    /// Create a resolver from a table and a remote fallback.
    pub fn new(table: T, remote: C) -> Self {
        CoordinateResolver { table, remote }
    }

    /// The local table.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// The remote fallback.
    pub fn remote(&self) -> &C {
        &self.remote
    }

    /// Resolve `code` to a coordinate, `None` when no tier yields one.
    pub async fn resolve(&self, code: &AirportCode) -> Option<GeoCoordinate> {
        if let Some(coordinate) = self.table.get(code) {
            resolver_debug!("(resolve) {} found in static table: {}", code, coordinate);
            return Some(coordinate);
        }

        resolver_info!("(resolve) {} not in static table, asking remote service.", code);
        let text = match self.remote.airport_text(code).await {
            Ok(text) => text,
            Err(e) => {
                resolver_error!("(resolve) remote lookup for {} failed: {}", code, e);
                return None;
            }
        };

        let Some(coordinate) = parse_coordinates(&text) else {
            resolver_warn!(
                "(resolve) no usable coordinate for {} in remote answer: {:?}",
                code,
                text
            );
            return None;
        };

        resolver_info!("(resolve) {} resolved remotely: {}", code, coordinate);
        Some(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::GeocodeClientStub;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_tabled_code_never_uses_network() {
        crate::get_log_handle().await;
        ut_info!("(test_tabled_code_never_uses_network) Start.");

        let resolver = CoordinateResolver::with_static_table(GeocodeClientStub::forbidden());
        let coordinate = resolver.resolve(&AirportCode::from("MXP")).await;
        assert_eq!(
            coordinate,
            Some(GeoCoordinate {
                lat: 45.6306,
                lng: 8.7281
            })
        );

        ut_info!("(test_tabled_code_never_uses_network) Success.");
    }

    #[tokio::test]
    async fn test_remote_fallback() {
        crate::get_log_handle().await;
        ut_info!("(test_remote_fallback) Start.");

        let resolver = CoordinateResolver::with_static_table(GeocodeClientStub::text(
            r#"Sure! Here you go: {"lat":10.5,"lng":20.25} Have a nice flight."#,
        ));
        let coordinate = resolver.resolve(&AirportCode::from("PSA")).await;
        assert_eq!(
            coordinate,
            Some(GeoCoordinate {
                lat: 10.5,
                lng: 20.25
            })
        );

        ut_info!("(test_remote_fallback) Success.");
    }

    #[tokio::test]
    async fn test_remote_failures_are_absent() {
        crate::get_log_handle().await;
        ut_info!("(test_remote_failures_are_absent) Start.");

        let code = AirportCode::from("PSA");
        let stubs = vec![
            GeocodeClientStub::text("I am not sure which airport that is."),
            GeocodeClientStub::text(r#"{"lat": "north", "lng": 20.25}"#),
            GeocodeClientStub::failing(GeocodeError::Status(500)),
            GeocodeClientStub::failing(GeocodeError::Status(403)),
            GeocodeClientStub::failing(GeocodeError::Request(String::from(
                "connection refused",
            ))),
            GeocodeClientStub::failing(GeocodeError::Envelope(String::from("expected value"))),
        ];

        for stub in stubs {
            ut_debug!("(test_remote_failures_are_absent) stub: {:?}", stub);
            let resolver = CoordinateResolver::with_static_table(stub);
            assert!(resolver.resolve(&code).await.is_none());
        }

        ut_info!("(test_remote_failures_are_absent) Success.");
    }

    #[tokio::test]
    async fn test_lowercase_code_misses_table() {
        crate::get_log_handle().await;

        // falls through to the remote tier, which knows nothing
        let resolver =
            CoordinateResolver::with_static_table(GeocodeClientStub::text("no idea"));
        assert!(resolver.resolve(&AirportCode::from("fco")).await.is_none());
    }

    #[tokio::test]
    async fn test_injected_table() {
        crate::get_log_handle().await;

        let mut table: HashMap<AirportCode, GeoCoordinate> = HashMap::new();
        table.insert(
            AirportCode::from("PSA"),
            GeoCoordinate {
                lat: 43.6839,
                lng: 10.3927,
            },
        );
        let resolver = CoordinateResolver::new(table, GeocodeClientStub::forbidden());

        assert_eq!(
            resolver.resolve(&AirportCode::from("PSA")).await,
            Some(GeoCoordinate {
                lat: 43.6839,
                lng: 10.3927
            })
        );
    }

    #[test]
    fn test_geocode_error_display() {
        assert_eq!(
            GeocodeError::Status(503).to_string(),
            "Unexpected status: 503"
        );
        assert_eq!(
            GeocodeError::Request(String::from("timeout")).to_string(),
            "Request failed: timeout"
        );
    }
}
