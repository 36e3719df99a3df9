use super::*;
use crate::{
    animation::clock::AnimationClock,
    config::RenderOptions,
    effects::NoiseField,
    foundation::core::Size,
    layout::resolve,
};

fn natural(options: RenderOptions) -> (RenderConfig, Layout) {
    let config = RenderConfig::default().merged(&RenderOptions {
        width: Some(600.0),
        height: Some(689.0),
        ..options
    });
    let layout = resolve(&config, Size::ZERO);
    (config, layout)
}

fn motion_at(t: f64) -> Motion {
    Motion {
        state: AnimationClock::default().update_frame(t),
        noise: None,
    }
}

#[test]
fn static_plan_paints_background_mark_wordmark() {
    let (config, layout) = natural(RenderOptions::default());
    let plan = compose(&config, &layout, None);
    assert!(matches!(plan.ops[0], DrawOp::Clear { .. }));
    assert_eq!(
        plan.layer_order(),
        vec![Layer::Background, Layer::Mark, Layer::Wordmark]
    );
    // Perimeter fill + stroke, two eyes, gill.
    assert_eq!(plan.ops_for(Layer::Mark).count(), 5);
    assert_eq!(plan.ops_for(Layer::Wordmark).count(), 6);
}

#[test]
fn animated_plan_paints_wordmark_under_mark() {
    let (config, layout) = natural(RenderOptions::default());
    let plan = compose(&config, &layout, Some(&motion_at(500.0)));
    assert_eq!(
        plan.layer_order(),
        vec![Layer::Background, Layer::Wordmark, Layer::Mark]
    );
}

#[test]
fn wordmark_only_emits_only_wordmark_ops() {
    let (config, layout) = natural(RenderOptions {
        manta_enabled: Some(false),
        background_enabled: Some(false),
        text_enabled: Some(true),
        ..RenderOptions::default()
    });
    let plan = compose(&config, &layout, None);
    assert_eq!(plan.layer_order(), vec![Layer::Wordmark]);
    assert_eq!(plan.ops.len(), 1 + 6);
}

#[test]
fn background_is_slightly_translucent() {
    let (config, layout) = natural(RenderOptions::default());
    let plan = compose(&config, &layout, None);
    let Some(DrawOp::FillPath {
        opacity,
        color,
        path,
        ..
    }) = plan.ops_for(Layer::Background).next()
    else {
        panic!("no background op");
    };
    assert_eq!(*opacity, BACKGROUND_OPACITY);
    assert_eq!(*color, config.background_color);
    let bbox = path.bounding_box();
    assert_eq!(bbox, Rect::new(0.0, 0.0, 600.0, 600.0));
}

#[test]
fn cover_background_bleeds_past_the_artwork() {
    let (config, layout) = natural(RenderOptions {
        background_size: Some(BackgroundSize::Cover),
        ..RenderOptions::default()
    });
    let plan = compose(&config, &layout, None);
    let Some(DrawOp::FillPath { path, .. }) = plan.ops_for(Layer::Background).next() else {
        panic!("no background op");
    };
    assert_eq!(
        path.bounding_box(),
        Rect::new(-600.0, -689.0, 1200.0, 1378.0)
    );
}

#[test]
fn noise_is_drawn_before_background_fill() {
    let (config, layout) = natural(RenderOptions::default());
    let motion = Motion {
        noise: Some(NoiseField::with_size(4, 4, 1).image()),
        ..motion_at(0.0)
    };
    let plan = compose(&config, &layout, Some(&motion));
    let bg: Vec<&DrawOp> = plan.ops_for(Layer::Background).collect();
    assert_eq!(bg.len(), 2);
    let DrawOp::FillImage { dest, .. } = bg[0] else {
        panic!("noise must come first");
    };
    assert_eq!(*dest, Rect::new(0.0, 0.0, 599.0, 599.0));
    assert!(matches!(bg[1], DrawOp::FillPath { .. }));
}

#[test]
fn animated_mark_is_shifted_by_breathing_and_swim() {
    let (config, layout) = natural(RenderOptions::default());
    let motion = motion_at(0.0);
    let plan = compose(&config, &layout, Some(&motion));
    let Some(DrawOp::FillPath { transform, .. }) = plan.ops_for(Layer::Mark).next() else {
        panic!("no mark op");
    };
    let offset = transform.as_coeffs()[5];
    assert!((offset - motion.state.mark_offset_y()).abs() < 1e-9);
    assert!((offset + 15.0).abs() < 1e-9);
}

#[test]
fn static_mark_is_unwarped() {
    let (config, layout) = natural(RenderOptions::default());
    let plan = compose(&config, &layout, None);
    let Some(DrawOp::FillPath {
        path, transform, ..
    }) = plan.ops_for(Layer::Mark).next()
    else {
        panic!("no mark op");
    };
    assert_eq!(*path, artwork::mark_perimeter().to_bezpath(None));
    assert_eq!(*transform, layout.transform);
}

#[test]
fn horizontal_wordmark_sits_beside_the_mark() {
    let config = RenderConfig::default().merged(&RenderOptions {
        horizontal: Some(true),
        width: Some(2190.0),
        height: Some(600.0),
        ..RenderOptions::default()
    });
    let layout = resolve(&config, Size::ZERO);
    let plan = compose(&config, &layout, None);
    let bbox = plan
        .ops_for(Layer::Wordmark)
        .filter_map(|op| match op {
            DrawOp::FillPath {
                path, transform, ..
            } => Some(transform.transform_rect_bbox(path.bounding_box())),
            _ => None,
        })
        .reduce(|a, b| a.union(b))
        .unwrap();
    assert!(bbox.x0 > 600.0, "wordmark starts at {}", bbox.x0);
    assert!(bbox.y0 > 0.0 && bbox.y1 < 600.0, "{bbox:?}");
}
