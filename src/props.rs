//! Bundle of optional layout properties applied to a widget in one pass.

use serde::{Deserialize, Serialize};

use crate::widget::{Edge, PropertyTarget};

/// Optional layout/metrics settings for a single widget.
///
/// Every field is independent; only present values are applied. `Some(0)` is
/// a real setting (a zero margin), distinct from `None` (leave the widget's
/// current value alone).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WidgetProps {
    /// Top margin in px.
    pub top: Option<i32>,
    /// Bottom margin in px.
    pub bottom: Option<i32>,
    /// Right margin in px.
    pub right: Option<i32>,
    /// Left margin in px.
    pub left: Option<i32>,
    /// Requested width in px.
    pub width: Option<i32>,
    /// Label width in character units.
    pub width_chars: Option<i32>,
    /// Max width in character units.
    pub width_max: Option<i32>,
    /// Max input length of an entry.
    pub max_length: Option<i32>,
    /// (x, y) alignment pair.
    pub align: Option<(f32, f32)>,
    /// Horizontal alignment scalar.
    pub xalign: Option<f32>,
}

impl WidgetProps {
    /// Apply every present option to the target, unconditionally and
    /// independently. Absent options leave the target untouched.
    pub fn apply(&self, target: &dyn PropertyTarget) {
        if let Some(px) = self.top {
            target.set_margin(Edge::Top, px);
        }
        if let Some(px) = self.bottom {
            target.set_margin(Edge::Bottom, px);
        }
        if let Some(px) = self.right {
            target.set_margin(Edge::Right, px);
        }
        if let Some(px) = self.left {
            target.set_margin(Edge::Left, px);
        }
        if let Some(px) = self.width {
            target.set_width_request(px);
        }
        if let Some(chars) = self.width_max {
            target.set_max_width_chars(chars);
        }
        if let Some(chars) = self.width_chars {
            target.set_width_chars(chars);
        }
        if let Some(chars) = self.max_length {
            target.set_max_length(chars);
        }
        if let Some(x) = self.xalign {
            target.set_xalign(x);
        }
        if let Some((x, y)) = self.align {
            target.set_alignment(x, y);
        }
    }
}
