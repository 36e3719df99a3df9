//! Procedural effects layered under the artwork.

/// Scrolling binary noise.
pub mod noise;

pub use noise::NoiseField;
