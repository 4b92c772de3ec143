//! ups-display: display binding and theming layer for UPS monitoring dashboards
//!
//! This library connects monitored-device telemetry to on-screen display
//! elements, including:
//! - A per-device, per-field display registry with a refresh protocol that
//!   sanitizes, truncates, and substitutes placeholders for missing data
//! - A fixed named-color palette with hex/RGBA conversion
//! - Structured stylesheet generation for the host's theming engine
//! - A property applier for optional widget layout settings
//!
//! Data acquisition and widget construction stay with the host application;
//! the crate talks to them through the [`TelemetrySource`], [`LabelHandle`],
//! [`ContainerHandle`], [`PropertyTarget`], and [`StyleEngine`] traits.

pub mod color;
pub mod constants;
pub mod data_source;
pub mod error;
pub mod props;
pub mod registry;
pub mod style;
pub mod widget;

// Re-export commonly used types
pub use color::{color_hex, Color, Palette};
pub use data_source::{BoxedTelemetrySource, TelemetrySource};
pub use error::{DisplayError, Result};
pub use props::WidgetProps;
pub use registry::{DisplayBinding, DisplayRegistry};
pub use style::{Declaration, StyleEngine, StyleProperty, StyleRule, StyleSheet};
pub use widget::{ContainerHandle, Edge, LabelHandle, PropertyTarget};
