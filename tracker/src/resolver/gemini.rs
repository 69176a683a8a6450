//! Remote coordinate lookup through a generative text API.
//!
//! The service is asked, in natural language, for an airport's
//! coordinates as a small JSON object. Only the text of the first
//! candidate is returned; turning it into a coordinate is left to
//! [`parse_coordinates`](super::parse::parse_coordinates).

use super::{GeocodeClient, GeocodeError};
use crate::types::AirportCode;
use crate::Config;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate, empty when any
    /// level of the envelope is missing.
    fn first_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .unwrap_or_default()
    }
}

/// Prompt sent for an airport code.
pub fn prompt_for(code: &AirportCode) -> String {
    format!(
        "Give me only the coordinates (latitude and longitude) of the airport with IATA code {} in JSON format as {{\"lat\":..., \"lng\":...}}",
        code
    )
}

/// [`GeocodeClient`] backed by the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client for `{base_url}/models/{model}:generateContent`.
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        GeminiClient {
            http: reqwest::Client::new(),
            endpoint: format!(
                "{}/models/{}:generateContent",
                base_url.trim_end_matches('/'),
                model
            ),
            api_key: api_key.to_string(),
        }
    }

    /// Create a client from the geocoding settings in [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.geocode_api_url,
            &config.geocode_model,
            &config.geocode_api_key,
        )
    }

    /// The generateContent URL, without the key.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GeocodeClient for GeminiClient {
    async fn airport_text(&self, code: &AirportCode) -> Result<String, GeocodeError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt_for(code)),
                }],
            }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let envelope: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::Envelope(e.to_string()))?;

        Ok(envelope.first_text())
    }
}
