use std::sync::Arc;

use kurbo::Shape;

use crate::{
    animation::clock::AnimationState,
    artwork::{self, MARK_HEIGHT, MARK_WIDTH},
    config::{BackgroundSize, RenderConfig},
    foundation::core::{Affine, Rect, Rgba8Premul},
    layout::Layout,
    render::plan::{DrawOp, DrawPlan, Layer, PremulImage},
};

/// Opacity of the background square.
pub const BACKGROUND_OPACITY: f32 = 0.97;
/// Width of the mark outline, in artwork units.
pub const BORDER_WIDTH: f64 = 3.0;

/// Per-frame inputs of an animated render.
#[derive(Clone, Debug)]
pub(crate) struct Motion {
    pub(crate) state: AnimationState,
    pub(crate) noise: Option<Arc<PremulImage>>,
}

/// Build the draw plan for one render.
///
/// Static renders paint background, mark, wordmark. Animated renders paint the wordmark before
/// the mark so the swimming mark passes over it, and warp the mark with the frame's parameters.
#[tracing::instrument(level = "trace", skip_all, fields(animated = motion.is_some()))]
pub(crate) fn compose(
    config: &RenderConfig,
    layout: &Layout,
    motion: Option<&Motion>,
) -> DrawPlan {
    let mut plan = DrawPlan::new(layout.canvas);
    plan.push(DrawOp::Clear {
        color: Rgba8Premul::transparent(),
    });

    if config.background_enabled {
        background(&mut plan, config, layout, motion);
    }

    match motion {
        None => {
            if config.manta_enabled {
                mark(&mut plan, config, layout, None);
            }
            if config.text_enabled {
                wordmark(&mut plan, config, layout);
            }
        }
        Some(m) => {
            if config.text_enabled {
                wordmark(&mut plan, config, layout);
            }
            if config.manta_enabled {
                mark(&mut plan, config, layout, Some(&m.state));
            }
        }
    }

    tracing::trace!(ops = plan.ops.len(), "plan composed");
    plan
}

fn background(
    plan: &mut DrawPlan,
    config: &RenderConfig,
    layout: &Layout,
    motion: Option<&Motion>,
) {
    if let Some(image) = motion.and_then(|m| m.noise.clone()) {
        plan.push(DrawOp::FillImage {
            layer: Layer::Background,
            image,
            dest: Rect::new(0.0, 0.0, MARK_WIDTH - 1.0, MARK_HEIGHT - 1.0),
            transform: layout.transform,
        });
    }

    let rect = match config.background_size {
        BackgroundSize::Contain => Rect::new(0.0, 0.0, MARK_WIDTH, MARK_HEIGHT),
        BackgroundSize::Cover => {
            let (w, h) = (layout.metrics.width, layout.metrics.height);
            Rect::new(-w, -h, 2.0 * w, 2.0 * h)
        }
    };
    plan.push(DrawOp::FillPath {
        layer: Layer::Background,
        path: rect.to_path(0.1),
        transform: layout.transform,
        color: config.background_color,
        opacity: BACKGROUND_OPACITY,
    });
}

fn mark(
    plan: &mut DrawPlan,
    config: &RenderConfig,
    layout: &Layout,
    state: Option<&AnimationState>,
) {
    let warp = state.map(AnimationState::warp);
    let transform = match state {
        Some(s) => layout.transform * Affine::translate((0.0, s.mark_offset_y())),
        None => layout.transform,
    };

    let perimeter = artwork::mark_perimeter().to_bezpath(warp.as_ref());
    plan.push(DrawOp::FillPath {
        layer: Layer::Mark,
        path: perimeter.clone(),
        transform,
        color: config.manta_color,
        opacity: 1.0,
    });
    plan.push(DrawOp::StrokePath {
        layer: Layer::Mark,
        path: perimeter,
        transform,
        color: config.border_color,
        width: BORDER_WIDTH,
    });

    for detail in artwork::mark_details() {
        plan.push(DrawOp::FillPath {
            layer: Layer::Mark,
            path: detail.to_bezpath(warp.as_ref()),
            transform,
            color: config.eyes_color,
            opacity: 1.0,
        });
    }
}

fn wordmark(plan: &mut DrawPlan, config: &RenderConfig, layout: &Layout) {
    let transform = layout.transform * layout.variant.wordmark_placement();
    for letter in artwork::wordmark_letters() {
        plan.push(DrawOp::FillPath {
            layer: Layer::Wordmark,
            path: letter.to_bezpath(None),
            transform,
            color: config.text_color,
            opacity: 1.0,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/logo/compose.rs"]
mod tests;
