//! Magnet logo renderer.
//!
//! Draws the manta-ray mark and the "MAGNET" wordmark onto a drawing backend:
//!
//! - Configure layers, colors, margins and sizing with [`RenderOptions`]
//! - Bind a [`Logo`] to a [`Target`] and a [`DrawBackend`] ([`CpuBackend`] rasterizes)
//! - [`Logo::render`] a still, or [`Logo::animate`] and drive frames with [`run_loop`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod artwork;
mod foundation;

/// Swim animation: clock, warps and frame loop.
pub mod animation;
/// Rendering configuration.
pub mod config;
/// Procedural background effects.
pub mod effects;
/// Fit and centering.
pub mod layout;
mod logo;
/// Draw plans and backends.
pub mod render;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, Point, Rect, Rgba8Premul, Size, Vec2,
};
pub use crate::foundation::error::{LogoError, LogoResult};

pub use crate::animation::clock::{AnimationClock, AnimationState, SwimPhase};
pub use crate::animation::driver::{
    FixedRateScheduler, FrameScheduler, RealtimeScheduler, Schedule, StopHandle, run_loop,
};
pub use crate::animation::warp::Warp;
pub use crate::artwork::{ArtworkMetrics, Variant};
pub use crate::config::{BackgroundSize, RenderConfig, RenderOptions};
pub use crate::layout::{Alignment, Layout, LayoutResult, Margins, SizingPolicy};
pub use crate::logo::{Logo, NOISE_SEED, Target};
pub use crate::render::backend::{BackendKind, DrawBackend, FrameRGBA, create_backend};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::recording::RecordingBackend;
