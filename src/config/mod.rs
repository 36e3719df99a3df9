//! Rendering configuration: resolved defaults plus partial, JSON-loadable overrides.

/// Resolved configuration and partial overrides.
pub mod options;

pub use options::{BackgroundSize, RenderConfig, RenderOptions};
