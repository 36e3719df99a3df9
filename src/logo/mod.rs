//! The logo renderer: configuration, layout, animation and a drawing backend in one object.

pub(crate) mod compose;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    animation::{
        clock::{AnimationClock, AnimationState},
        driver::{Schedule, StopHandle},
    },
    config::{RenderConfig, RenderOptions},
    effects::NoiseField,
    foundation::{
        core::{Canvas, Rgba8Premul, Size},
        error::{LogoError, LogoResult},
    },
    layout::{self, Fit, Layout},
    render::{
        backend::{DrawBackend, FrameRGBA, execute_plan},
        plan::{DrawOp, DrawPlan},
    },
};

use compose::{Motion, compose};

/// Seed of the background noise generator.
pub const NOISE_SEED: u64 = 0x6D61_676E_6574;

/// Where a logo draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target {
    /// An existing surface; its pixel size doubles as the container size.
    Surface(Canvas),
    /// A container that receives a surface sized by the layout.
    Container {
        /// Inner width of the container in logical pixels.
        client_width: f64,
        /// Inner height of the container in logical pixels.
        client_height: f64,
    },
}

impl Target {
    fn container_size(self) -> LogoResult<Size> {
        match self {
            Self::Surface(canvas) => Ok(Size::new(
                f64::from(canvas.width),
                f64::from(canvas.height),
            )),
            Self::Container {
                client_width,
                client_height,
            } => {
                let valid = |v: f64| v.is_finite() && v >= 0.0;
                if !valid(client_width) || !valid(client_height) {
                    return Err(LogoError::invalid_target(format!(
                        "container size {client_width}x{client_height} is not measurable"
                    )));
                }
                Ok(Size::new(client_width, client_height))
            }
        }
    }
}

/// A configurable, optionally animated logo bound to one drawing backend.
///
/// ```
/// use magnet_logo::{Logo, RecordingBackend, RenderOptions, Target};
///
/// let target = Target::Container { client_width: 600.0, client_height: 689.0 };
/// let mut logo = Logo::new(Some(target), RecordingBackend::new(), RenderOptions::default())
///     .unwrap();
/// logo.render(None).unwrap();
/// assert_eq!(logo.layout().result.scale, 1.0);
/// ```
pub struct Logo<B: DrawBackend> {
    backend: B,
    config: RenderConfig,
    container: Size,
    clock: AnimationClock,
    running: Arc<AtomicBool>,
    noise: Option<NoiseField>,
}

impl<B: DrawBackend> Logo<B> {
    /// Bind a logo to `target`, drawing through `backend`, starting from default options merged
    /// with `options`. Nothing is drawn until [`Logo::render`] or [`Logo::render_frame`].
    ///
    /// `target` is optional so that a host whose target lookup came back empty gets an error
    /// instead of a panic: `None` fails with [`LogoError::InvalidTarget`], as does a container
    /// whose size is negative or not finite.
    pub fn new(target: Option<Target>, backend: B, options: RenderOptions) -> LogoResult<Self> {
        let target = target.ok_or_else(|| LogoError::invalid_target("no target given"))?;
        let container = target.container_size()?;
        Ok(Self {
            backend,
            config: RenderConfig::default().merged(&options),
            container,
            clock: AnimationClock::default(),
            running: Arc::new(AtomicBool::new(false)),
            noise: None,
        })
    }

    /// Merge `options` into the current configuration.
    pub fn configure(&mut self, options: &RenderOptions) {
        self.config = self.config.merged(options);
    }

    /// The current configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Report a new container size, e.g. after the host resized it.
    pub fn resize_container(&mut self, client_width: f64, client_height: f64) -> LogoResult<()> {
        self.container = Target::Container {
            client_width,
            client_height,
        }
        .container_size()?;
        Ok(())
    }

    /// The container size used when `width`/`height` are unset or invalid.
    pub fn container(&self) -> Size {
        self.container
    }

    /// Layout of the current configuration.
    pub fn layout(&self) -> Layout {
        layout::resolve(&self.config, self.container)
    }

    /// Scale (and top-offset shift) that fits the artwork into the configured box.
    pub fn fit_container(&self) -> Fit {
        let l = self.layout();
        layout::fit(
            l.content.width,
            l.content.height,
            l.metrics.width,
            l.metrics.height,
            self.config.sizing_policy,
            l.metrics.top_offset,
        )
    }

    /// Offset that centers the fitted artwork between the margins.
    pub fn center(&self) -> (f64, f64) {
        let l = self.layout();
        let margins = self.config.margins().sanitized();
        layout::center(
            l.content.width + margins.horizontal(),
            l.content.height + margins.vertical(),
            l.result.scale,
            l.metrics.width,
            l.metrics.height,
            margins,
        )
    }

    /// Merge `options` (if any) and draw a still logo: background, mark, wordmark.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn render(&mut self, options: Option<&RenderOptions>) -> LogoResult<()> {
        if let Some(options) = options {
            self.configure(options);
        }
        let layout = self.layout();
        let plan = compose(&self.config, &layout, None);
        self.execute(&plan)
    }

    /// Draw one animation frame at `timestamp_ms` and return its animation parameters.
    ///
    /// Advances the swim cycle, so call it once per displayed frame.
    pub fn render_frame(&mut self, timestamp_ms: f64) -> LogoResult<AnimationState> {
        let layout = self.layout();
        let state = self.clock.update_frame(timestamp_ms);

        let noise = if self.config.background_noise && self.config.background_enabled {
            let field = self
                .noise
                .get_or_insert_with(|| NoiseField::new(NOISE_SEED));
            field.advance();
            Some(field.image())
        } else {
            None
        };

        let plan = compose(&self.config, &layout, Some(&Motion { state, noise }));
        self.execute(&plan)?;
        Ok(state)
    }

    /// Start animating: later [`Logo::tick`] calls render frames until [`Logo::stop`].
    ///
    /// The swim cycle restarts from its initial waiting state.
    pub fn animate(&mut self) -> StopHandle {
        if !self.is_animating() {
            self.clock = AnimationClock::default();
            self.noise = None;
            tracing::debug!("animation started");
        }
        self.running.store(true, Ordering::SeqCst);
        self.stop_handle()
    }

    /// Stop animating. A frame already being drawn completes; no further frame is drawn.
    pub fn stop(&mut self) {
        if self.running.swap(false, Ordering::SeqCst) {
            tracing::debug!("animation stopped");
        }
    }

    /// Whether the logo is between [`Logo::animate`] and [`Logo::stop`].
    pub fn is_animating(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// A handle that can stop the animation from elsewhere.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle::new(Arc::clone(&self.running))
    }

    /// One scheduled animation callback: draw a frame if running, and say whether to continue.
    pub fn tick(&mut self, timestamp_ms: f64) -> LogoResult<Schedule> {
        if !self.is_animating() {
            return Ok(Schedule::Stop);
        }
        self.render_frame(timestamp_ms)?;
        Ok(Schedule::Continue)
    }

    /// Wipe the surface to transparent.
    pub fn clear(&mut self) -> LogoResult<()> {
        let mut plan = DrawPlan::new(self.layout().canvas);
        plan.push(DrawOp::Clear {
            color: Rgba8Premul::transparent(),
        });
        self.execute(&plan)
    }

    /// Read back the pixels of the last render.
    pub fn frame(&mut self) -> LogoResult<FrameRGBA> {
        self.backend.readback_rgba8()
    }

    /// The drawing backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The drawing backend, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Give back the drawing backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn execute(&mut self, plan: &DrawPlan) -> LogoResult<()> {
        tracing::trace!(
            ops = plan.ops.len(),
            width = plan.canvas.width,
            height = plan.canvas.height,
            "executing plan"
        );
        execute_plan(&mut self.backend, plan)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/logo/logo.rs"]
mod tests;
