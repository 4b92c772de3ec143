//! Registry binding monitored-device fields to on-screen display elements.
//!
//! One [`DisplayBinding`] per (device id, field name) pair, held in a
//! two-level map so a whole device refreshes in one pass. Refreshing pulls
//! current values from a borrowed [`TelemetrySource`], sanitizes them
//! (placeholder substitution for missing/sentinel data, uniform truncation)
//! and pushes the result into the bound label handles.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use serde_json::Value;

use crate::constants::{
    IDENTITY_FIELDS, NO_DATA_PLACEHOLDER, NO_DATA_SENTINELS, UNRESPONSIVE_PLACEHOLDER,
};
use crate::data_source::TelemetrySource;
use crate::error::{DisplayError, Result};
use crate::widget::{ContainerHandle, LabelHandle};

/// One registered display element and its cached rendered value.
pub struct DisplayBinding {
    label: Rc<dyn LabelHandle>,
    container: Option<Rc<dyn ContainerHandle>>,
    container_name: Option<String>,
    last_value: String,
}

impl DisplayBinding {
    /// The most recently rendered value, already sanitized and truncated.
    pub fn last_value(&self) -> &str {
        &self.last_value
    }

    pub fn container(&self) -> Option<&Rc<dyn ContainerHandle>> {
        self.container.as_ref()
    }

    /// Symbolic name of the container, for region-specific styling.
    pub fn container_name(&self) -> Option<&str> {
        self.container_name.as_deref()
    }
}

/// Per-device, per-field registry of display bindings.
///
/// The registry holds references to the widget handles but never owns the
/// telemetry source; one is borrowed per refresh pass. All calls must come
/// from the thread that owns the display surface.
pub struct DisplayRegistry {
    /// device id -> field name -> binding
    bindings: HashMap<String, HashMap<String, DisplayBinding>>,
    max_width: usize,
    static_fields: HashSet<String>,
}

impl DisplayRegistry {
    /// `max_width` is the display width cap in characters, applied uniformly
    /// to every field. `static_fields` is the host-supplied classification
    /// of fields that never change after discovery.
    pub fn new(max_width: usize, static_fields: impl IntoIterator<Item = String>) -> Self {
        Self {
            bindings: HashMap::new(),
            max_width,
            static_fields: static_fields.into_iter().collect(),
        }
    }

    /// Register or overwrite the binding for one device field. Safe to call
    /// again for the same key; the binding is replaced and its cached value
    /// resets to the placeholder.
    pub fn add(
        &mut self,
        device_id: impl Into<String>,
        field: impl Into<String>,
        label: Rc<dyn LabelHandle>,
        container: Option<Rc<dyn ContainerHandle>>,
        container_name: Option<&str>,
    ) {
        if container.is_some() && container_name.is_none() {
            warn!("container registered without a name; dynamic recoloring will not resolve");
        }
        let binding = DisplayBinding {
            label,
            container,
            container_name: container_name.map(str::to_string),
            last_value: NO_DATA_PLACEHOLDER.to_string(),
        };
        self.bindings
            .entry(device_id.into())
            .or_default()
            .insert(field.into(), binding);
    }

    /// Refresh every field registered under one device from the source.
    ///
    /// With `skip_static`, static-classified fields are left completely
    /// untouched: no source read, no label write, no cache update.
    pub fn refresh(
        &mut self,
        source: &dyn TelemetrySource,
        device_id: &str,
        skip_static: bool,
    ) -> Result<()> {
        let fields = self
            .bindings
            .get_mut(device_id)
            .ok_or_else(|| DisplayError::UnknownDevice(device_id.to_string()))?;
        for (field, binding) in fields.iter_mut() {
            if skip_static && self.static_fields.contains(field) {
                continue;
            }
            let text = render_value(field, source.get(device_id, field), self.max_width);
            debug!("refresh {}/{} -> {:?}", device_id, field, text);
            binding.label.set_text(&text);
            binding.last_value = text;
        }
        Ok(())
    }

    /// Refresh every device the source currently knows. A source device with
    /// no registered bindings is a no-op pass, never an error.
    pub fn refresh_all(&mut self, source: &dyn TelemetrySource, skip_static: bool) -> Result<()> {
        for device_id in source.device_ids() {
            if !self.bindings.contains_key(&device_id) {
                debug!("no bindings for device {}, skipping", device_id);
                continue;
            }
            self.refresh(source, &device_id, skip_static)?;
        }
        Ok(())
    }

    /// The cached rendered value of one field, if registered.
    pub fn last_value(&self, device_id: &str, field: &str) -> Option<&str> {
        self.binding(device_id, field).map(DisplayBinding::last_value)
    }

    pub fn binding(&self, device_id: &str, field: &str) -> Option<&DisplayBinding> {
        self.bindings.get(device_id)?.get(field)
    }

    /// Registered device ids, in no particular order.
    pub fn devices(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Field names registered under one device.
    pub fn fields(&self, device_id: &str) -> impl Iterator<Item = &str> {
        self.bindings
            .get(device_id)
            .into_iter()
            .flat_map(|fields| fields.keys().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for DisplayRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (device_id, fields) in &self.bindings {
            let values: HashMap<&str, &str> = fields
                .iter()
                .map(|(field, binding)| (field.as_str(), binding.last_value()))
                .collect();
            map.entry(device_id, &values);
        }
        map.finish()
    }
}

/// Resolve one candidate value to its display text: sentinel/absent values
/// become a placeholder, everything else its textual form, truncated to
/// `max_width` characters.
fn render_value(field: &str, candidate: Option<Value>, max_width: usize) -> String {
    let text = match candidate {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    };
    let text = match text {
        Some(t) if !NO_DATA_SENTINELS.contains(&t.as_str()) => t,
        _ if IDENTITY_FIELDS.contains(&field) => UNRESPONSIVE_PLACEHOLDER.to_string(),
        _ => NO_DATA_PLACEHOLDER.to_string(),
    };
    truncate(text, max_width)
}

fn truncate(text: String, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        text
    } else {
        text.chars().take(max_width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MAX_WIDTH;
    use serde_json::json;
    use std::cell::RefCell;

    /// Records the text pushed into it, like a toolkit label would show.
    struct TextLabel {
        text: RefCell<String>,
    }

    impl TextLabel {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                text: RefCell::new(String::new()),
            })
        }

        fn text(&self) -> String {
            self.text.borrow().clone()
        }
    }

    impl LabelHandle for TextLabel {
        fn set_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
        }
    }

    #[derive(Default)]
    struct MapSource {
        devices: Vec<String>,
        values: HashMap<(String, String), Value>,
    }

    impl MapSource {
        fn set(&mut self, device: &str, field: &str, value: Value) {
            if !self.devices.contains(&device.to_string()) {
                self.devices.push(device.to_string());
            }
            self.values
                .insert((device.to_string(), field.to_string()), value);
        }
    }

    impl TelemetrySource for MapSource {
        fn device_ids(&self) -> Vec<String> {
            self.devices.clone()
        }

        fn get(&self, device_id: &str, field: &str) -> Option<Value> {
            self.values
                .get(&(device_id.to_string(), field.to_string()))
                .cloned()
        }
    }

    fn registry() -> DisplayRegistry {
        DisplayRegistry::new(DEFAULT_MAX_WIDTH, Vec::new())
    }

    #[test]
    fn test_add_starts_at_placeholder() {
        let mut reg = registry();
        reg.add("ups1", "mib_output_load", TextLabel::new(), None, None);
        assert_eq!(reg.last_value("ups1", "mib_output_load"), Some("---"));
    }

    #[test]
    fn test_re_add_resets_to_placeholder() {
        let mut reg = registry();
        let mut source = MapSource::default();
        source.set("ups1", "mib_output_load", json!("42"));

        reg.add("ups1", "mib_output_load", TextLabel::new(), None, None);
        reg.refresh(&source, "ups1", false).unwrap();
        assert_eq!(reg.last_value("ups1", "mib_output_load"), Some("42"));

        reg.add("ups1", "mib_output_load", TextLabel::new(), None, None);
        assert_eq!(reg.last_value("ups1", "mib_output_load"), Some("---"));
        assert_eq!(reg.fields("ups1").count(), 1);
    }

    #[test]
    fn test_refresh_pushes_text_and_caches_it() {
        let mut reg = registry();
        let label = TextLabel::new();
        let mut source = MapSource::default();
        source.set("ups1", "mib_battery_capacity", json!("98"));

        reg.add("ups1", "mib_battery_capacity", label.clone(), None, None);
        reg.refresh(&source, "ups1", false).unwrap();

        assert_eq!(label.text(), "98");
        assert_eq!(reg.last_value("ups1", "mib_battery_capacity"), Some("98"));
    }

    #[test]
    fn test_numeric_values_render_as_text() {
        let mut reg = registry();
        let label = TextLabel::new();
        let mut source = MapSource::default();
        source.set("ups1", "mib_input_voltage", json!(231.5));

        reg.add("ups1", "mib_input_voltage", label.clone(), None, None);
        reg.refresh(&source, "ups1", false).unwrap();
        assert_eq!(label.text(), "231.5");
    }

    #[test]
    fn test_sentinel_none_renders_placeholder() {
        let mut reg = registry();
        let mut source = MapSource::default();
        source.set("ups1", "mib_output_load", json!("None"));

        reg.add("ups1", "mib_output_load", TextLabel::new(), None, None);
        reg.refresh(&source, "ups1", false).unwrap();
        assert_eq!(reg.last_value("ups1", "mib_output_load"), Some("---"));
    }

    #[test]
    fn test_sentinel_none_on_identity_field_renders_unresponsive() {
        let mut reg = registry();
        let mut source = MapSource::default();
        source.set("ups1", "mib_ups_name", json!("None"));
        source.set("ups1", "mib_system_status", json!(""));

        reg.add("ups1", "mib_ups_name", TextLabel::new(), None, None);
        reg.add("ups1", "mib_system_status", TextLabel::new(), None, None);
        reg.refresh(&source, "ups1", false).unwrap();
        assert_eq!(reg.last_value("ups1", "mib_ups_name"), Some("Unresponsive"));
        assert_eq!(
            reg.last_value("ups1", "mib_system_status"),
            Some("Unresponsive")
        );
    }

    #[test]
    fn test_numeric_minus_one_is_a_sentinel() {
        let mut reg = registry();
        let mut source = MapSource::default();
        source.set("ups1", "mib_output_load", json!(-1));

        reg.add("ups1", "mib_output_load", TextLabel::new(), None, None);
        reg.refresh(&source, "ups1", false).unwrap();
        assert_eq!(reg.last_value("ups1", "mib_output_load"), Some("---"));
    }

    #[test]
    fn test_absent_and_null_render_placeholder() {
        let mut reg = registry();
        let label = TextLabel::new();
        let mut source = MapSource::default();
        source.set("ups1", "mib_other", Value::Null);

        reg.add("ups1", "mib_other", TextLabel::new(), None, None);
        reg.add("ups1", "mib_missing", label.clone(), None, None);
        reg.refresh(&source, "ups1", false).unwrap();
        assert_eq!(reg.last_value("ups1", "mib_other"), Some("---"));
        assert_eq!(reg.last_value("ups1", "mib_missing"), Some("---"));
        assert_eq!(label.text(), "---");
    }

    #[test]
    fn test_long_values_truncate_preserving_prefix() {
        let mut reg = DisplayRegistry::new(8, Vec::new());
        let mut source = MapSource::default();
        source.set("ups1", "mib_ups_info", json!("Eaton PW9130 rack mount"));

        reg.add("ups1", "mib_ups_info", TextLabel::new(), None, None);
        reg.refresh(&source, "ups1", false).unwrap();
        assert_eq!(reg.last_value("ups1", "mib_ups_info"), Some("Eaton PW"));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let mut reg = DisplayRegistry::new(4, Vec::new());
        let mut source = MapSource::default();
        source.set("ups1", "mib_ups_location", json!("überwachungsraum"));

        reg.add("ups1", "mib_ups_location", TextLabel::new(), None, None);
        reg.refresh(&source, "ups1", false).unwrap();
        assert_eq!(reg.last_value("ups1", "mib_ups_location"), Some("über"));
    }

    #[test]
    fn test_skip_static_leaves_field_untouched() {
        let static_fields = vec!["mib_ups_name".to_string()];
        let mut reg = DisplayRegistry::new(DEFAULT_MAX_WIDTH, static_fields);
        let label = TextLabel::new();
        let mut source = MapSource::default();
        source.set("ups1", "mib_ups_name", json!("UPS One"));
        source.set("ups1", "mib_output_load", json!("17"));

        reg.add("ups1", "mib_ups_name", label.clone(), None, None);
        reg.add("ups1", "mib_output_load", TextLabel::new(), None, None);
        reg.refresh(&source, "ups1", false).unwrap();
        assert_eq!(label.text(), "UPS One");

        source.set("ups1", "mib_ups_name", json!("Renamed"));
        source.set("ups1", "mib_output_load", json!("18"));
        reg.refresh(&source, "ups1", true).unwrap();

        assert_eq!(reg.last_value("ups1", "mib_ups_name"), Some("UPS One"));
        assert_eq!(label.text(), "UPS One");
        assert_eq!(reg.last_value("ups1", "mib_output_load"), Some("18"));
    }

    #[test]
    fn test_refresh_unknown_device_errors_and_changes_nothing() {
        let mut reg = registry();
        let mut source = MapSource::default();
        source.set("ups1", "mib_output_load", json!("42"));

        reg.add("ups1", "mib_output_load", TextLabel::new(), None, None);
        let err = reg.refresh(&source, "ups2", false).unwrap_err();
        assert!(matches!(err, DisplayError::UnknownDevice(id) if id == "ups2"));
        assert_eq!(reg.last_value("ups1", "mib_output_load"), Some("---"));
    }

    #[test]
    fn test_refresh_all_covers_registered_source_devices() {
        let mut reg = registry();
        let label1 = TextLabel::new();
        let label2 = TextLabel::new();
        let mut source = MapSource::default();
        source.set("ups1", "mib_output_load", json!("10"));
        source.set("ups2", "mib_output_load", json!("20"));
        source.set("ups3", "mib_output_load", json!("30"));

        reg.add("ups1", "mib_output_load", label1.clone(), None, None);
        reg.add("ups2", "mib_output_load", label2.clone(), None, None);
        // ups3 has no bindings: a no-op pass, not an error.
        reg.refresh_all(&source, false).unwrap();

        assert_eq!(label1.text(), "10");
        assert_eq!(label2.text(), "20");
    }

    #[test]
    fn test_container_binding_keeps_name() {
        struct Region;
        impl ContainerHandle for Region {
            fn set_region(&self, _name: &str) {}
        }

        let mut reg = registry();
        reg.add(
            "ups1",
            "mib_system_status",
            TextLabel::new(),
            Some(Rc::new(Region) as Rc<dyn ContainerHandle>),
            Some("sys_stat_box"),
        );
        let binding = reg.binding("ups1", "mib_system_status").unwrap();
        assert!(binding.container().is_some());
        assert_eq!(binding.container_name(), Some("sys_stat_box"));
    }

    #[test]
    fn test_debug_shows_cached_values() {
        let mut reg = registry();
        reg.add("ups1", "mib_output_load", TextLabel::new(), None, None);
        let rendered = format!("{:?}", reg);
        assert!(rendered.contains("ups1"));
        assert!(rendered.contains("---"));
    }
}
