//! Fitting the fixed-size artwork into an arbitrary target box.

/// Contain/cover fitting, centering and full layout resolution.
pub mod fit;

pub use fit::{Alignment, Fit, Layout, LayoutResult, Margins, SizingPolicy, center, fit, resolve};
