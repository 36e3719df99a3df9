use std::sync::Arc;

use crate::foundation::{
    color::Color,
    core::{Affine, BezPath, Canvas, Rect, Rgba8Premul},
};

/// Logical layer a draw operation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Background square (and its noise overlay).
    Background,
    /// The manta-ray mark.
    Mark,
    /// The "MAGNET" wordmark.
    Wordmark,
}

/// A premultiplied RGBA8 image used as a paint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PremulImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed premultiplied RGBA8, row-major.
    pub data: Vec<u8>,
}

/// One backend-agnostic drawing command.
///
/// Transforms map artwork units to device pixels.
#[derive(Clone, Debug)]
pub enum DrawOp {
    /// Reset the surface to the given color.
    Clear {
        /// Fill color; usually transparent.
        color: Rgba8Premul,
    },
    /// Fill a path with a solid color.
    FillPath {
        /// Owning layer.
        layer: Layer,
        /// Path in artwork units.
        path: BezPath,
        /// Artwork → device transform.
        transform: Affine,
        /// Fill color.
        color: Color,
        /// Extra group opacity in `[0, 1]`.
        opacity: f32,
    },
    /// Stroke a path with a solid color.
    StrokePath {
        /// Owning layer.
        layer: Layer,
        /// Path in artwork units.
        path: BezPath,
        /// Artwork → device transform.
        transform: Affine,
        /// Stroke color.
        color: Color,
        /// Stroke width in artwork units.
        width: f64,
    },
    /// Draw an image stretched over `dest`.
    FillImage {
        /// Owning layer.
        layer: Layer,
        /// Image pixels.
        image: Arc<PremulImage>,
        /// Destination rectangle in artwork units.
        dest: Rect,
        /// Artwork → device transform.
        transform: Affine,
    },
}

impl DrawOp {
    /// Layer of the operation; `None` for surface-wide operations.
    pub fn layer(&self) -> Option<Layer> {
        match self {
            Self::Clear { .. } => None,
            Self::FillPath { layer, .. }
            | Self::StrokePath { layer, .. }
            | Self::FillImage { layer, .. } => Some(*layer),
        }
    }
}

/// The full list of operations for one render, in paint order.
#[derive(Clone, Debug, Default)]
pub struct DrawPlan {
    /// Surface size the plan targets.
    pub canvas: Canvas,
    /// Operations, executed in order.
    pub ops: Vec<DrawOp>,
}

impl DrawPlan {
    /// Empty plan for a surface.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ops: Vec::new(),
        }
    }

    /// Append an operation.
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Operations belonging to `layer`.
    pub fn ops_for(&self, layer: Layer) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(move |op| op.layer() == Some(layer))
    }

    /// Layers in the order they are first painted, without repeats.
    pub fn layer_order(&self) -> Vec<Layer> {
        let mut out: Vec<Layer> = Vec::with_capacity(3);
        for layer in self.ops.iter().filter_map(DrawOp::layer) {
            if !out.contains(&layer) {
                out.push(layer);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
