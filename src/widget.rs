//! Capability traits for the toolkit widgets the core drives.
//!
//! The core never depends on a concrete toolkit type. A host bridges these
//! traits onto its widgets (for GTK: `LabelHandle::set_text` onto
//! `Label::set_text`, `ContainerHandle::set_region` onto
//! `Widget::set_widget_name` so `#name` style selectors match, and
//! `PropertyTarget` onto the margin/width/alignment setters).

/// A text display element. The only capability a refreshed value needs.
pub trait LabelHandle {
    fn set_text(&self, text: &str);
}

/// A visual grouping element that supports dynamic background recoloring
/// through a symbolic region name resolved by the active stylesheet.
pub trait ContainerHandle {
    fn set_region(&self, name: &str);
}

/// Margin edges for [`PropertyTarget::set_margin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Layout/metrics setters a widget exposes to [`crate::props::WidgetProps`].
///
/// Invalid values are the underlying toolkit's problem; nothing here
/// validates them.
pub trait PropertyTarget {
    fn set_margin(&self, edge: Edge, px: i32);
    fn set_width_request(&self, px: i32);
    fn set_width_chars(&self, chars: i32);
    fn set_max_width_chars(&self, chars: i32);
    fn set_max_length(&self, chars: i32);
    fn set_alignment(&self, xalign: f32, yalign: f32);
    fn set_xalign(&self, xalign: f32);
}
