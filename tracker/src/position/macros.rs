//! log macro's for position logging

/// Writes a debug! message to the app::position logger
#[macro_export]
macro_rules! position_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::position", $($arg)+)
    };
}

/// Writes an warn! message to the app::position logger
#[macro_export]
macro_rules! position_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::position", $($arg)+)
    };
}
