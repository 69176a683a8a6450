//! Display formatting of scheduled times.
//!
//! Times from the flight API are shifted back by a fixed offset before
//! being converted to the display timezone. The API reports its times
//! two hours ahead of the real instant for the flights this tool was
//! built around, so the default offset is two hours. The offset is
//! configurable because its correctness depends on the upstream API.

use crate::position::parse_timestamp;
use crate::Config;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Placeholder for a missing time.
pub const NOT_AVAILABLE: &str = "N/D";

/// Formats API timestamps for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleFormatter {
    timezone: Tz,
    offset: Duration,
}

impl Default for ScheduleFormatter {
    fn default() -> Self {
        ScheduleFormatter {
            timezone: chrono_tz::Europe::Rome,
            offset: Duration::hours(2),
        }
    }
}

impl ScheduleFormatter {
    /// Formatter for the given IANA timezone and compensation offset.
    pub fn new(timezone: Tz, offset_hours: i64) -> Self {
        ScheduleFormatter {
            timezone,
            offset: Duration::hours(offset_hours),
        }
    }

    /// Formatter from the display settings in [`Config`].
    pub fn from_config(config: &Config) -> Result<Self, String> {
        let timezone: Tz = config.display_timezone.parse().map_err(|e| {
            format!(
                "(from_config) invalid display timezone [{}]: {}",
                config.display_timezone, e
            )
        })?;

        Ok(Self::new(timezone, config.schedule_offset_hours))
    }

    /// The display timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// `dd/mm/yyyy, HH:MM` in the display timezone.
    ///
    /// Missing values give [`NOT_AVAILABLE`], unparsable values are
    /// returned unchanged.
    pub fn date_time(&self, value: Option<&str>) -> String {
        self.format(value, "%d/%m/%Y, %H:%M")
    }

    /// `dd/mm/yyyy` in the display timezone.
    pub fn date(&self, value: Option<&str>) -> String {
        self.format(value, "%d/%m/%Y")
    }

    /// The instant shown for `value`, after offset and timezone
    /// conversion.
    pub fn local_time(&self, value: &str) -> Option<DateTime<Tz>> {
        let instant = parse_api_time(value)?;
        Some((instant - self.offset).with_timezone(&self.timezone))
    }

    fn format(&self, value: Option<&str>, pattern: &str) -> String {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            return NOT_AVAILABLE.to_string();
        };

        match self.local_time(value) {
            Some(local) => local.format(pattern).to_string(),
            None => {
                flights_warn!("(format) could not format time [{}]", value);
                value.to_string()
            }
        }
    }
}

/// Full timestamps, or bare dates taken as midnight UTC.
fn parse_api_time(value: &str) -> Option<DateTime<Utc>> {
    if let Some(instant) = parse_timestamp(value) {
        return Some(instant);
    }

    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
