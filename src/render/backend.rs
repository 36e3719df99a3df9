use crate::{
    foundation::{core::Canvas, error::LogoResult},
    render::plan::{DrawOp, DrawPlan},
};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the `premultiplied` flag makes that explicit at API
/// boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// A fully transparent frame of the given size.
    pub fn transparent(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; canvas.rgba8_len()],
            premultiplied: true,
        }
    }

    /// Premultiplied RGBA of the pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert the pixel data to straight alpha in place.
    pub fn unpremultiply(&mut self) {
        if !self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.premultiplied = false;
    }
}

/// A drawing surface that executes [`DrawOp`]s.
///
/// Most callers go through [`crate::Logo`], which builds the plan and calls [`execute_plan`].
pub trait DrawBackend {
    /// Make sure a surface of `canvas` size exists, recreating it when the size changed.
    fn ensure_surface(&mut self, canvas: Canvas) -> LogoResult<()>;

    /// Execute one operation against the current surface.
    fn exec_op(&mut self, op: &DrawOp) -> LogoResult<()>;

    /// Flush pending work so that [`DrawBackend::readback_rgba8`] sees every executed op.
    fn finish(&mut self) -> LogoResult<()>;

    /// Read back the current surface contents.
    fn readback_rgba8(&mut self) -> LogoResult<FrameRGBA>;
}

impl<B: DrawBackend + ?Sized> DrawBackend for Box<B> {
    fn ensure_surface(&mut self, canvas: Canvas) -> LogoResult<()> {
        (**self).ensure_surface(canvas)
    }

    fn exec_op(&mut self, op: &DrawOp) -> LogoResult<()> {
        (**self).exec_op(op)
    }

    fn finish(&mut self) -> LogoResult<()> {
        (**self).finish()
    }

    fn readback_rgba8(&mut self) -> LogoResult<FrameRGBA> {
        (**self).readback_rgba8()
    }
}

/// Execute a whole plan: size the surface, run every op in order, then flush.
pub fn execute_plan<B: DrawBackend + ?Sized>(backend: &mut B, plan: &DrawPlan) -> LogoResult<()> {
    backend.ensure_surface(plan.canvas)?;
    for op in &plan.ops {
        backend.exec_op(op)?;
    }
    backend.finish()
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    Cpu,
    /// Backend that only records the executed operations.
    Recording,
}

/// Create a drawing backend implementation.
pub fn create_backend(kind: BackendKind) -> Box<dyn DrawBackend> {
    match kind {
        BackendKind::Cpu => Box::new(crate::render::cpu::CpuBackend::new()),
        BackendKind::Recording => Box::new(crate::render::recording::RecordingBackend::new()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
