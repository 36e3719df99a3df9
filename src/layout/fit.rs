use serde::{Deserialize, Serialize};

use crate::{
    artwork::{ArtworkMetrics, Variant},
    config::RenderConfig,
    foundation::core::{Affine, Canvas, Size},
};

/// How the artwork is scaled into the target box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingPolicy {
    /// Largest scale at which the whole artwork fits.
    #[default]
    Contain,
    /// Smallest scale at which the artwork covers the whole box.
    Cover,
}

/// Where the scaled artwork sits inside the target box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Centered between the margins.
    #[default]
    Center,
    /// At the top-left margin corner.
    None,
}

/// Space reserved around the artwork box, in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Above the box.
    pub top: f64,
    /// Right of the box.
    pub right: f64,
    /// Below the box.
    pub bottom: f64,
    /// Left of the box.
    pub left: f64,
}

impl Margins {
    /// Margins with negative or non-finite sides replaced by zero.
    pub fn sanitized(self) -> Self {
        fn side(v: f64) -> f64 {
            if v.is_finite() && v > 0.0 { v } else { 0.0 }
        }
        Self {
            top: side(self.top),
            right: side(self.right),
            bottom: side(self.bottom),
            left: side(self.left),
        }
    }

    /// `left + right`.
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

/// Scale and vertical shift produced by [`fit`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    /// Uniform artwork → logical pixel scale.
    pub scale: f64,
    /// Shift that moves the visible content to the top of the box.
    pub translate_y: f64,
}

/// Scale and translation of the artwork inside the target, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutResult {
    /// Uniform artwork → logical pixel scale.
    pub scale: f64,
    /// Horizontal offset of the artwork origin.
    pub translate_x: f64,
    /// Vertical offset of the artwork origin.
    pub translate_y: f64,
}

/// Everything a render needs to place the artwork on a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Composition variant in use.
    pub variant: Variant,
    /// Intrinsic metrics of that variant.
    pub metrics: ArtworkMetrics,
    /// Box the artwork is fitted into, margins excluded, in logical pixels.
    pub content: Size,
    /// Scale and translation in logical pixels.
    pub result: LayoutResult,
    /// Device pixels per logical pixel.
    pub pixel_ratio: f64,
    /// Surface size in device pixels.
    pub canvas: Canvas,
    /// Artwork units → device pixels.
    pub transform: Affine,
}

/// Scale the intrinsic artwork into a target box.
///
/// `Contain` takes the smaller axis ratio and `Cover` the larger one. A zero-area target yields
/// `scale = 0`. The returned `translate_y` lifts content that starts `top_offset` artwork units
/// below the artwork origin to the top of the box.
pub fn fit(
    target_w: f64,
    target_h: f64,
    intrinsic_w: f64,
    intrinsic_h: f64,
    policy: SizingPolicy,
    top_offset: f64,
) -> Fit {
    let scale = if target_w <= 0.0 || target_h <= 0.0 || intrinsic_w <= 0.0 || intrinsic_h <= 0.0
    {
        0.0
    } else {
        let sx = target_w / intrinsic_w;
        let sy = target_h / intrinsic_h;
        match policy {
            SizingPolicy::Contain => sx.min(sy),
            SizingPolicy::Cover => sx.max(sy),
        }
    };
    Fit {
        scale,
        translate_y: -top_offset * scale,
    }
}

/// Offset that centers the scaled artwork inside the target minus its margins.
///
/// `target_w`/`target_h` include the margins. The offset is zero when the target exactly
/// matches the scaled artwork and there are no margins.
pub fn center(
    target_w: f64,
    target_h: f64,
    scale: f64,
    intrinsic_w: f64,
    intrinsic_h: f64,
    margins: Margins,
) -> (f64, f64) {
    let inner_w = target_w - margins.horizontal();
    let inner_h = target_h - margins.vertical();
    (
        margins.left + (inner_w - scale * intrinsic_w) / 2.0,
        margins.top + (inner_h - scale * intrinsic_h) / 2.0,
    )
}

/// Resolve the full layout of `config` against a container of logical size `container`.
///
/// Negative or non-finite `width`/`height` fall back to the container size, as does every
/// render when `fit_to_client_size` is set.
#[tracing::instrument(level = "debug", skip(config))]
pub fn resolve(config: &RenderConfig, container: Size) -> Layout {
    let content = content_size(config, container);
    let margins = config.margins().sanitized();
    let pixel_ratio = sanitize_ratio(config.pixel_ratio);

    let variant = config.variant();
    let metrics = variant.metrics();

    let fitted = fit(
        content.width,
        content.height,
        metrics.width,
        metrics.height,
        config.sizing_policy,
        metrics.top_offset,
    );

    let target_w = content.width + margins.horizontal();
    let target_h = content.height + margins.vertical();
    let (tx, ty) = match config.alignment {
        Alignment::Center => center(
            target_w,
            target_h,
            fitted.scale,
            metrics.width,
            metrics.height,
            margins,
        ),
        Alignment::None => (margins.left, margins.top),
    };

    let result = LayoutResult {
        scale: fitted.scale,
        translate_x: tx,
        translate_y: ty + fitted.translate_y,
    };

    let canvas = Canvas::new(
        device_px(target_w * pixel_ratio),
        device_px(target_h * pixel_ratio),
    );
    let transform = Affine::scale(pixel_ratio)
        * Affine::translate((result.translate_x, result.translate_y))
        * Affine::scale(result.scale);

    tracing::debug!(
        ?variant,
        scale = result.scale,
        translate_x = result.translate_x,
        translate_y = result.translate_y,
        width = canvas.width,
        height = canvas.height,
        "layout resolved"
    );

    Layout {
        variant,
        metrics,
        content,
        result,
        pixel_ratio,
        canvas,
        transform,
    }
}

fn content_size(config: &RenderConfig, container: Size) -> Size {
    let pick = |requested: Option<f64>, fallback: f64| -> f64 {
        let fallback = if fallback.is_finite() && fallback > 0.0 {
            fallback
        } else {
            0.0
        };
        if config.fit_to_client_size {
            return fallback;
        }
        match requested {
            Some(v) if v.is_finite() && v >= 0.0 => v,
            _ => fallback,
        }
    };
    Size::new(
        pick(config.width, container.width),
        pick(config.height, container.height),
    )
}

fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

fn device_px(v: f64) -> u32 {
    // Absorb float noise such as 689.0000000001 before rounding up.
    let v = (v * 1e6).round() / 1e6;
    v.ceil() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
