use std::sync::Arc;

use crate::{foundation::math::Rng64, render::plan::PremulImage};

/// Side length of the default noise texture, in texels.
pub const NOISE_RESOLUTION: u32 = 200;

const INK: [u8; 4] = [0, 0, 0, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// A binary noise texture that scrolls down one row per frame.
///
/// Each texel is opaque black with probability one half. Scrolling drops the bottom row and
/// draws a fresh random top row, so the pattern appears to flow downward.
#[derive(Clone, Debug)]
pub struct NoiseField {
    width: u32,
    height: u32,
    texels: Vec<u8>,
    rng: Rng64,
}

impl NoiseField {
    /// A [`NOISE_RESOLUTION`]-square field seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_size(NOISE_RESOLUTION, NOISE_RESOLUTION, seed)
    }

    /// A field of arbitrary size.
    pub fn with_size(width: u32, height: u32, seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        let len = width as usize * height as usize;
        let mut texels = Vec::with_capacity(len * 4);
        for _ in 0..len {
            texels.extend_from_slice(if rng.coin() { &INK } else { &CLEAR });
        }
        Self {
            width,
            height,
            texels,
            rng,
        }
    }

    /// Width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 texels, row-major.
    pub fn texels(&self) -> &[u8] {
        &self.texels
    }

    /// Scroll the field down by one row and regenerate the top row.
    pub fn advance(&mut self) {
        let row = self.width as usize * 4;
        if row == 0 || self.texels.len() < row {
            return;
        }
        let len = self.texels.len();
        self.texels.copy_within(..len - row, row);
        for px in self.texels[..row].chunks_exact_mut(4) {
            px.copy_from_slice(if self.rng.coin() { &INK } else { &CLEAR });
        }
    }

    /// Snapshot of the current texels as a drawable image.
    pub fn image(&self) -> Arc<PremulImage> {
        Arc::new(PremulImage {
            width: self.width,
            height: self.height,
            data: self.texels.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/noise.rs"]
mod tests;
