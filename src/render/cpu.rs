use std::sync::Arc;

use crate::{
    foundation::{
        color::Color,
        core::{Affine, BezPath, Canvas, Point, Rgba8Premul},
        error::{LogoError, LogoResult},
    },
    render::{
        backend::{DrawBackend, FrameRGBA},
        plan::{DrawOp, PremulImage},
    },
};

/// CPU raster backend powered by `vello_cpu`.
///
/// Keeps one render context and pixmap alive across frames; both are recreated only when the
/// canvas size changes.
#[derive(Default)]
pub struct CpuBackend {
    surface: Option<CpuSurface>,
    canvas: Canvas,
}

struct CpuSurface {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl CpuBackend {
    /// A backend without a surface; the first plan allocates one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the current surface.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }
}

impl DrawBackend for CpuBackend {
    fn ensure_surface(&mut self, canvas: Canvas) -> LogoResult<()> {
        if canvas == self.canvas && (self.surface.is_some() || canvas.is_empty()) {
            return Ok(());
        }
        let width_u16: u16 = canvas
            .width
            .try_into()
            .map_err(|_| LogoError::invalid_dimension("surface width exceeds u16"))?;
        let height_u16: u16 = canvas
            .height
            .try_into()
            .map_err(|_| LogoError::invalid_dimension("surface height exceeds u16"))?;

        self.canvas = canvas;
        self.surface = if canvas.is_empty() {
            None
        } else {
            Some(CpuSurface {
                ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
                pixmap: vello_cpu::Pixmap::new(width_u16, height_u16),
            })
        };
        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            "cpu surface allocated"
        );
        Ok(())
    }

    fn exec_op(&mut self, op: &DrawOp) -> LogoResult<()> {
        let canvas = self.canvas;
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        draw_op(surface, canvas, op)
    }

    fn finish(&mut self) -> LogoResult<()> {
        if let Some(surface) = self.surface.as_mut() {
            surface.ctx.flush();
            surface.ctx.render_to_pixmap(&mut surface.pixmap);
        }
        Ok(())
    }

    fn readback_rgba8(&mut self) -> LogoResult<FrameRGBA> {
        let Some(surface) = self.surface.as_ref() else {
            return Ok(FrameRGBA::transparent(self.canvas));
        };
        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: surface.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn draw_op(surface: &mut CpuSurface, canvas: Canvas, op: &DrawOp) -> LogoResult<()> {
    let ctx = &mut surface.ctx;
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    match op {
        DrawOp::Clear { color } => {
            ctx.reset();
            clear_pixmap(&mut surface.pixmap, *color);
            if color.a != 0 {
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    color.r, color.g, color.b, color.a,
                ));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(canvas.width),
                    f64::from(canvas.height),
                ));
            }
            Ok(())
        }
        DrawOp::FillPath {
            layer: _,
            path,
            transform,
            color,
            opacity,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            if *opacity < 1.0 {
                ctx.push_opacity_layer(*opacity);
            }
            ctx.fill_path(&bezpath_to_cpu(path));
            if *opacity < 1.0 {
                ctx.pop_layer();
            }
            Ok(())
        }
        DrawOp::StrokePath {
            layer: _,
            path,
            transform,
            color,
            width,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
            ctx.stroke_path(&bezpath_to_cpu(path));
            Ok(())
        }
        DrawOp::FillImage {
            layer: _,
            image,
            dest,
            transform,
        } => {
            if image.width == 0 || image.height == 0 || dest.area() == 0.0 {
                return Ok(());
            }
            let paint = image_paint(image)?;
            let sx = dest.width() / f64::from(image.width);
            let sy = dest.height() / f64::from(image.height);

            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint_transform(affine_to_cpu(
                Affine::translate((dest.x0, dest.y0)) * Affine::scale_non_uniform(sx, sy),
            ));
            ctx.set_paint(paint);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                dest.x0, dest.y0, dest.x1, dest.y1,
            ));
            Ok(())
        }
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, color: Rgba8Premul) {
    let rgba = color.to_array();
    for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn color_to_cpu(color: Color) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = color.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_paint(image: &PremulImage) -> LogoResult<vello_cpu::Image> {
    let pixmap = premul_bytes_to_pixmap(&image.data, image.width, image.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> LogoResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| LogoError::invalid_dimension("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| LogoError::invalid_dimension("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(LogoError::render("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
