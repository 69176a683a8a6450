//! log macro's for flights logging

/// Writes a debug! message to the app::flights logger
#[macro_export]
macro_rules! flights_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::flights", $($arg)+)
    };
}

/// Writes an info! message to the app::flights logger
#[macro_export]
macro_rules! flights_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::flights", $($arg)+)
    };
}

/// Writes an warn! message to the app::flights logger
#[macro_export]
macro_rules! flights_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::flights", $($arg)+)
    };
}

/// Writes an error! message to the app::flights logger
#[macro_export]
macro_rules! flights_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::flights", $($arg)+)
    };
}
