//! Shared primitives: geometry re-exports, colors, errors and small numeric helpers.

/// CSS-style color values.
pub mod color;
/// Canvas, pixel and timing primitives.
pub mod core;
/// Error taxonomy.
pub mod error;
pub(crate) mod math;
