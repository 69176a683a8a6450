//! Flight data
//!
//! Client, record types and presentation helpers for the flight-data
//! API.

#[macro_use]
pub mod macros;
pub mod client;
pub mod format;
pub mod model;
pub mod status;

pub use client::{FlightDataClient, FlightDataError};
pub use format::ScheduleFormatter;
pub use model::Flight;
pub use status::status_label;

/// Shortest accepted flight code
pub const MIN_FLIGHT_CODE_LEN: usize = 3;
/// Longest accepted flight code
pub const MAX_FLIGHT_CODE_LEN: usize = 8;

/// Reasons a flight code is rejected before querying the API
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FlightCodeError {
    Empty,
    TooShort,
    TooLong,
}

impl std::fmt::Display for FlightCodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FlightCodeError::Empty => write!(f, "Enter a flight code."),
            FlightCodeError::TooShort => write!(
                f,
                "Flight code is too short, expected at least {} characters.",
                MIN_FLIGHT_CODE_LEN
            ),
            FlightCodeError::TooLong => write!(
                f,
                "Flight code is too long, expected at most {} characters.",
                MAX_FLIGHT_CODE_LEN
            ),
        }
    }
}

impl std::error::Error for FlightCodeError {}

/// Normalizes user input into a flight code: trimmed and uppercased,
/// between [`MIN_FLIGHT_CODE_LEN`] and [`MAX_FLIGHT_CODE_LEN`]
/// characters.
pub fn validate_flight_code(input: &str) -> Result<String, FlightCodeError> {
    let code = input.trim().to_uppercase();
    let len = code.chars().count();

    if len == 0 {
        return Err(FlightCodeError::Empty);
    }
    if len < MIN_FLIGHT_CODE_LEN {
        return Err(FlightCodeError::TooShort);
    }
    if len > MAX_FLIGHT_CODE_LEN {
        return Err(FlightCodeError::TooLong);
    }

    Ok(code)
}
