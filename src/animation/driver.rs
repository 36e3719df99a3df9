use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

use crate::{
    Logo,
    foundation::{core::Fps, error::LogoResult},
    render::backend::DrawBackend,
};

/// What a scheduled animation callback asks for next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Request another frame.
    Continue,
    /// Do not reschedule; the animation has stopped.
    Stop,
}

/// Requests that a running animation stop before its next frame.
///
/// Cloneable and `Send`, so a stop can come from another thread or owner.
#[derive(Clone, Debug)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    pub(crate) fn new(running: Arc<AtomicBool>) -> Self {
        Self { running }
    }

    /// Ask the animation to stop.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Whether the animation is still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Source of frame callbacks, standing in for the host's display refresh.
pub trait FrameScheduler {
    /// Wait for the next frame and return its timestamp in milliseconds, or `None` when the
    /// scheduler has no more frames to give.
    fn next_frame(&mut self) -> Option<f64>;
}

/// Deterministic timestamps at a fixed frame rate, without waiting.
#[derive(Clone, Debug)]
pub struct FixedRateScheduler {
    fps: Fps,
    frame: u64,
    limit: Option<u64>,
}

impl FixedRateScheduler {
    /// Unbounded schedule at `fps`, starting at timestamp 0.
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            frame: 0,
            limit: None,
        }
    }

    /// Schedule that yields exactly `frames` timestamps.
    pub fn with_limit(fps: Fps, frames: u64) -> Self {
        Self {
            limit: Some(frames),
            ..Self::new(fps)
        }
    }

    /// Frames handed out so far.
    pub fn frames_emitted(&self) -> u64 {
        self.frame
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        if self.limit.is_some_and(|limit| self.frame >= limit) {
            return None;
        }
        let t = self.fps.frames_to_ms(self.frame);
        self.frame += 1;
        Some(t)
    }
}

const MIN_INTERVAL: Duration = Duration::from_nanos(1);

/// Wall-clock schedule: sleeps until the next refresh and stamps frames with elapsed time.
#[derive(Clone, Debug)]
pub struct RealtimeScheduler {
    start: Instant,
    interval: Duration,
    next: Instant,
    limit: Option<u64>,
    frame: u64,
}

impl RealtimeScheduler {
    /// Refresh at `fps`, measured from now.
    ///
    /// Rates above one frame per nanosecond refresh every nanosecond.
    pub fn new(fps: Fps) -> Self {
        let start = Instant::now();
        Self {
            start,
            interval: Duration::from_secs_f64(fps.frame_duration_ms() / 1000.0)
                .max(MIN_INTERVAL),
            next: start,
            limit: None,
            frame: 0,
        }
    }

    /// Stop after `frames` callbacks.
    pub fn with_limit(fps: Fps, frames: u64) -> Self {
        Self {
            limit: Some(frames),
            ..Self::new(fps)
        }
    }
}

impl FrameScheduler for RealtimeScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        if self.limit.is_some_and(|limit| self.frame >= limit) {
            return None;
        }
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        }
        // Skip missed refreshes instead of bursting to catch up.
        let now = Instant::now();
        if self.next <= now {
            let step = self.interval.as_nanos();
            let missed = now.duration_since(self.next).as_nanos() / step + 1;
            self.next += Duration::from_nanos(u64::try_from(missed * step).unwrap_or(u64::MAX));
        }
        self.frame += 1;
        Some(now.duration_since(self.start).as_secs_f64() * 1000.0)
    }
}

/// Drive `logo` from `scheduler` until it stops or the scheduler runs dry.
///
/// Each callback runs [`Logo::tick`]; after every drawn frame `on_frame` sees the logo and the
/// frame timestamp, and may call [`Logo::stop`]. Frames are strictly sequential. Returns the
/// number of frames drawn. Call [`Logo::animate`] first; an idle logo draws nothing.
pub fn run_loop<B, S, F>(
    logo: &mut Logo<B>,
    scheduler: &mut S,
    mut on_frame: F,
) -> LogoResult<u64>
where
    B: DrawBackend,
    S: FrameScheduler + ?Sized,
    F: FnMut(&mut Logo<B>, f64) -> LogoResult<()>,
{
    tracing::debug!(animating = logo.is_animating(), "animation loop entered");
    let mut frames = 0u64;
    while let Some(timestamp_ms) = scheduler.next_frame() {
        match logo.tick(timestamp_ms)? {
            Schedule::Continue => {
                frames += 1;
                on_frame(logo, timestamp_ms)?;
            }
            Schedule::Stop => break,
        }
    }
    tracing::debug!(frames, "animation loop exited");
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
