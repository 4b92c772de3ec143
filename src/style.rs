//! Structured style rules and the fixed default theme.
//!
//! The theme is modeled as data (selector + declarations) rather than ad hoc
//! string concatenation, so the region-to-color table is testable on its own.
//! Serialization targets the GTK CSS dialect (`background-image: image(...)`
//! for flat background fills); applying hands one rule at a time to the host's
//! [`StyleEngine`].

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::error::{DisplayError, Result};

/// Styleable property of a UI region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleProperty {
    /// Flat background fill.
    BackgroundImage,
    /// Foreground/text color.
    Color,
}

/// One property/value pair inside a rule. The value is an already resolved
/// `#RRGGBB` hex code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: StyleProperty,
    pub value: String,
}

impl Declaration {
    fn to_css(&self) -> String {
        match self.property {
            StyleProperty::BackgroundImage => {
                format!("background-image: image({});", self.value)
            }
            StyleProperty::Color => format!("color: {};", self.value),
        }
    }
}

/// A single style rule: a region selector with declarations, or raw CSS
/// passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleRule {
    Rule {
        selector: String,
        declarations: Vec<Declaration>,
    },
    Raw(String),
}

impl StyleRule {
    /// CSS text of this rule.
    pub fn to_css(&self) -> String {
        match self {
            StyleRule::Rule {
                selector,
                declarations,
            } => {
                let body: Vec<String> = declarations.iter().map(Declaration::to_css).collect();
                format!("{} {{ {} }}", selector, body.join(" "))
            }
            StyleRule::Raw(css) => css.clone(),
        }
    }
}

/// Region-to-color assignments of the default theme:
/// (selector, background color name, foreground color name).
///
/// This table is fixed configuration data; visual compatibility depends on
/// reproducing it exactly.
const DEFAULT_THEME: &[(&str, Option<&str>, Option<&str>)] = &[
    ("grid", Some("gray80"), None),
    ("#light_grid", Some("gray20"), None),
    ("#dark_grid", Some("gray70"), None),
    ("#dark_box", Some("slate_dk"), None),
    ("#med_box", Some("slate_md"), None),
    ("#light_box", Some("slate_lt"), None),
    ("#head_box", Some("blue"), None),
    ("#warn_box", Some("red"), None),
    ("#button_box", Some("slate_dk"), None),
    ("#out_load_box", Some("slate_md"), None),
    ("#out_load_label", None, Some("white_off")),
    ("#bat_cap_box", Some("slate_md"), None),
    ("#bat_cap_label", None, Some("white_off")),
    ("#sys_stat_box", Some("slate_md"), None),
    ("#sys_stat_label", None, Some("white_off")),
    ("#bat_stat_box", Some("slate_md"), None),
    ("#bat_stat_label", None, Some("white_off")),
    ("#message_box", Some("gray50"), None),
    ("#message_label", None, Some("white_off")),
    ("#warn_label", None, Some("white_pp")),
    ("#white_label", None, Some("white_off")),
    ("#black_label", None, Some("gray95")),
    ("#ppm_combo", Some("green"), Some("black")),
    ("button", Some("slate_lt"), Some("black")),
    ("entry", Some("green"), Some("gray95")),
];

/// Hands style rules to the active rendering/theming engine.
///
/// A GTK host implements this with one `CssProvider` per rule added at
/// application priority for the current display. Errors are reported as
/// plain text and surface from [`StyleSheet::apply`] as
/// [`DisplayError::StyleApply`].
pub trait StyleEngine {
    fn load_rule(&self, css: &str) -> std::result::Result<(), String>;
}

/// An ordered style document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    /// Build the default theme from the fixed region table. Pure: repeated
    /// calls yield structurally identical documents.
    pub fn default_theme(palette: &Palette) -> Result<Self> {
        let mut rules = Vec::with_capacity(DEFAULT_THEME.len());
        for (selector, background, foreground) in DEFAULT_THEME {
            let mut declarations = Vec::with_capacity(2);
            if let Some(name) = background {
                declarations.push(Declaration {
                    property: StyleProperty::BackgroundImage,
                    value: palette.hex(name)?.to_string(),
                });
            }
            if let Some(name) = foreground {
                declarations.push(Declaration {
                    property: StyleProperty::Color,
                    value: palette.hex(name)?.to_string(),
                });
            }
            rules.push(StyleRule::Rule {
                selector: (*selector).to_string(),
                declarations,
            });
        }
        Ok(Self { rules })
    }

    /// Wrap caller-supplied CSS verbatim as a single-rule document. The
    /// grammar is not checked here; a bad document fails at apply time,
    /// inside the engine.
    pub fn from_raw(css: impl Into<String>) -> Self {
        Self {
            rules: vec![StyleRule::Raw(css.into())],
        }
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Serialized CSS text of every rule, in order.
    pub fn to_css_rules(&self) -> Vec<String> {
        self.rules.iter().map(StyleRule::to_css).collect()
    }

    /// Push the document into the engine, one rule at a time. The effect is
    /// global and idempotent; the first engine rejection aborts the pass.
    pub fn apply(&self, engine: &dyn StyleEngine) -> Result<()> {
        let css_rules = self.to_css_rules();
        info!("css {:?}", css_rules);
        for css in &css_rules {
            engine
                .load_rule(css)
                .map_err(DisplayError::StyleApply)?;
            debug!("loaded style rule: {}", css);
        }
        Ok(())
    }
}
