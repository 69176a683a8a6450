//! Human readable flight status

/// Label for the API's `flight_status`, matched case-insensitively.
///
/// Unknown statuses are shown as given, an empty status as "Unknown".
pub fn status_label(status: &str) -> &str {
    match status.to_lowercase().as_str() {
        "active" => "In flight",
        "scheduled" => "Scheduled",
        "landed" => "Landed",
        "cancelled" => "Cancelled",
        "diverted" => "Diverted",
        "incident" => "Incident",
        "" => "Unknown",
        _ => status,
    }
}
