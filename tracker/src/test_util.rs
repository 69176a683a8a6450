//! test utilities. Provides log macros and fixtures shared by unit tests.

use crate::resolver::{GeocodeClient, GeocodeError};
use crate::types::AirportCode;
use async_trait::async_trait;

/// Writes a debug! message to the test::ut logger
#[macro_export]
macro_rules! ut_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "test::ut", $($arg)+)
    };
}

/// Writes an info! message to the test::ut logger
#[macro_export]
macro_rules! ut_info {
    ($($arg:tt)+) => {
        log::info!(target: "test::ut", $($arg)+)
    };
}

/// Canned reply of a [`GeocodeClientStub`]
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Reply with this model text
    Text(String),
    /// Fail with this error
    Fail(GeocodeError),
    /// Fail the test when the network would be used
    Forbidden,
}

/// Geocoding client stub, answers every lookup with the same reply
#[derive(Debug, Clone)]
pub struct GeocodeClientStub {
    reply: StubReply,
}

impl GeocodeClientStub {
    pub fn text(text: &str) -> Self {
        Self {
            reply: StubReply::Text(text.to_string()),
        }
    }

    pub fn failing(error: GeocodeError) -> Self {
        Self {
            reply: StubReply::Fail(error),
        }
    }

    pub fn forbidden() -> Self {
        Self {
            reply: StubReply::Forbidden,
        }
    }
}

#[async_trait]
impl GeocodeClient for GeocodeClientStub {
    async fn airport_text(&self, code: &AirportCode) -> Result<String, GeocodeError> {
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Fail(e) => Err(e.clone()),
            StubReply::Forbidden => panic!("network lookup issued for tabled code {}", code),
        }
    }
}
