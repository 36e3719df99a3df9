//! Time-driven motion of the mark: per-frame parameters, coordinate warps and the frame loop.

/// Per-frame animation parameters.
pub mod clock;
/// Frame scheduling and the animation loop.
pub mod driver;
/// Coordinate warps for the mark.
pub mod warp;
