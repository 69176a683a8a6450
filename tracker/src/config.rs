//! # Config
//!
//! Define and implement config options for module

use anyhow::Result;
use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// base URL of the flight-data API
    pub flight_api_url: String,

    /// access key for the flight-data API
    pub flight_api_key: String,

    /// base URL of the generative text API used for unknown airports
    pub geocode_api_url: String,

    /// model asked for airport coordinates
    pub geocode_model: String,

    /// key for the generative text API
    pub geocode_api_key: String,

    /// IANA timezone scheduled times are displayed in
    pub display_timezone: String,

    /// hours subtracted from API times before display
    pub schedule_offset_hours: i64,

    /// path to log configuration YAML file
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        Config {
            flight_api_url: String::from("https://api.aviationstack.com/v1"),
            flight_api_key: String::new(),
            geocode_api_url: String::from("https://generativelanguage.googleapis.com/v1beta"),
            geocode_model: String::from("gemini-2.0-flash"),
            geocode_api_key: String::new(),
            display_timezone: String::from("Europe/Rome"),
            schedule_offset_hours: 2,
            log_config: String::from("log4rs.yaml"),
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        config::Config::builder()
            .set_default("flight_api_url", default_config.flight_api_url)?
            .set_default("flight_api_key", default_config.flight_api_key)?
            .set_default("geocode_api_url", default_config.geocode_api_url)?
            .set_default("geocode_model", default_config.geocode_model)?
            .set_default("geocode_api_key", default_config.geocode_api_key)?
            .set_default("display_timezone", default_config.display_timezone)?
            .set_default(
                "schedule_offset_hours",
                default_config.schedule_offset_hours,
            )?
            .set_default("log_config", default_config.log_config)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}
