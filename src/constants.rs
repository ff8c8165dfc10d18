//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Seatplan";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "seatplan";

/// Environment variable overriding the config directory (test isolation).
pub const CONFIG_DIR_ENV: &str = "SEATPLAN_CONFIG_DIR";
