use crate::{
    foundation::{core::Canvas, error::LogoResult},
    render::{
        backend::{DrawBackend, FrameRGBA},
        plan::{DrawOp, Layer},
    },
};

/// Backend that keeps the operations of the last executed plan instead of rasterizing them.
///
/// Readback returns a transparent frame of the current canvas size.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    canvas: Canvas,
    pending: Vec<DrawOp>,
    ops: Vec<DrawOp>,
    frames: u64,
}

impl RecordingBackend {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas of the last surface request.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Operations of the last finished plan.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of plans finished so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Operations of the last finished plan that belong to `layer`.
    pub fn ops_for(&self, layer: Layer) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(move |op| op.layer() == Some(layer))
    }

    /// Layers of the last finished plan in first-paint order.
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

impl DrawBackend for RecordingBackend {
    fn ensure_surface(&mut self, canvas: Canvas) -> LogoResult<()> {
        self.canvas = canvas;
        Ok(())
    }

    fn exec_op(&mut self, op: &DrawOp) -> LogoResult<()> {
        if matches!(op, DrawOp::Clear { .. }) {
            self.pending.clear();
        }
        self.pending.push(op.clone());
        Ok(())
    }

    fn finish(&mut self) -> LogoResult<()> {
        self.ops = std::mem::take(&mut self.pending);
        self.frames += 1;
        Ok(())
    }

    fn readback_rgba8(&mut self) -> LogoResult<FrameRGBA> {
        Ok(FrameRGBA::transparent(self.canvas))
    }
}
