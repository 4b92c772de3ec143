//! Telemetry source contract consumed by the display registry.

use serde_json::Value;

/// Read side of a telemetry store holding already-fetched device data.
///
/// The registry never owns a source; it borrows one for the duration of a
/// refresh pass. Acquisition, polling cadence, and protocol parsing are the
/// source implementation's concern. Lookups must be in-memory and
/// non-blocking: `refresh` runs synchronously on the display thread.
pub trait TelemetrySource {
    /// Ids of all devices currently known to the source.
    fn device_ids(&self) -> Vec<String>;

    /// Point lookup of one field of one device. `None` means the source has
    /// no entry for the key, which the registry resolves to a placeholder,
    /// never an error.
    fn get(&self, device_id: &str, field: &str) -> Option<Value>;
}

/// Type-erased telemetry source for dynamic dispatch.
pub type BoxedTelemetrySource = Box<dyn TelemetrySource>;
