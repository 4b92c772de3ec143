//! Shared constants for the display binding layer.

/// Placeholder rendered for fields with no usable data.
pub const NO_DATA_PLACEHOLDER: &str = "---";

/// Placeholder rendered for identity/status fields of a device that has
/// stopped answering.
pub const UNRESPONSIVE_PLACEHOLDER: &str = "Unresponsive";

/// Textual values treated as "no data" by the refresh policy.
///
/// UPS MIB readouts report absence inconsistently: an empty string, a `-1`
/// numeric text, or the literal strings below all mean the same thing.
pub const NO_DATA_SENTINELS: [&str; 4] = ["", "-1", "No data", "None"];

/// Fields that identify the device itself rather than a measurement.
/// These render [`UNRESPONSIVE_PLACEHOLDER`] instead of
/// [`NO_DATA_PLACEHOLDER`] when data is missing.
pub const IDENTITY_FIELDS: [&str; 2] = ["mib_ups_name", "mib_system_status"];

/// Default maximum display width of a rendered value, in characters.
pub const DEFAULT_MAX_WIDTH: usize = 30;
