//! Airport identifiers

use serde::{Deserialize, Serialize};

/// IATA-style airport code, used verbatim as lookup key.
///
/// No length or charset validation happens here, the resolver matches
/// the value exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirportCode(String);

impl AirportCode {
    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AirportCode {
    fn from(code: &str) -> Self {
        AirportCode(code.to_string())
    }
}

impl From<String> for AirportCode {
    fn from(code: String) -> Self {
        AirportCode(code)
    }
}

impl std::fmt::Display for AirportCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
