use std::f64::consts::TAU;

use crate::{animation::warp::Warp, artwork, foundation::math::wrap_ms};

/// Length of the wing-flap oscillation.
pub const FLAP_PERIOD_MS: f64 = 2_000.0;
/// Length of one swim cycle.
pub const SWIM_PERIOD_MS: f64 = 20_000.0;
/// Horizontal correction added to the artwork width when computing the pivot.
pub const PIVOT_CORRECTION: f64 = 20.0;
/// Amplitude of the per-flap vertical breathing of the mark, in artwork units.
pub const BREATH_AMPLITUDE: f64 = 30.0;

const SWIM_TURN: f64 = 0.4;
const SWIM_END: f64 = 0.85;

/// Where the mark is within the current swim cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwimPhase {
    /// Holding still for this cycle.
    #[default]
    Waiting,
    /// Rising out through the top of the box.
    Departing,
    /// Re-entering from below and settling back into place.
    Returning,
}

/// Animation parameters derived from one frame timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Position in the 2 s flap cycle, `[0, 1)`.
    pub phase: f64,
    /// Position in the 20 s swim cycle, `[0, 1)`.
    pub slow_phase: f64,
    /// Flap angle, a quarter turn ahead of `phase`.
    pub angle_radians: f64,
    /// `(sin(angle) + 1) / 2`.
    pub sin_time_norm: f64,
    /// `(cos(angle) + 1) / 2`.
    pub cos_time_norm: f64,
    /// Wing-flap factor in `[0.7, 1.0]`.
    pub horizontal_factor: f64,
    /// Pivot for the wing warps.
    pub center_x: f64,
    /// Swim-cycle state for this frame.
    pub swim: SwimPhase,
    /// Vertical swim displacement in artwork units.
    pub move_y: f64,
}

impl AnimationState {
    /// Warp parameters for this frame.
    pub fn warp(&self) -> Warp {
        Warp::new(self.center_x, self.horizontal_factor)
    }

    /// Total vertical offset of the mark: swim displacement plus breathing.
    pub fn mark_offset_y(&self) -> f64 {
        self.move_y - BREATH_AMPLITUDE * self.cos_time_norm
    }
}

/// Derives [`AnimationState`] from monotonic timestamps.
///
/// The flap values are a pure function of the timestamp. The swim cycle is not: a reset flag
/// armed past 85% of a cycle toggles the wait flag at the start of the next one, so consecutive
/// cycles alternate between holding still and bobbing. Call [`AnimationClock::update_frame`]
/// exactly once per displayed frame.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    intrinsic_width: f64,
    full_height: f64,
    swim_wait: bool,
    reset: bool,
    state: Option<AnimationState>,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(artwork::MARK_WIDTH, artwork::FULL_HEIGHT)
    }
}

impl AnimationClock {
    /// Build a clock for artwork of the given width (pivot) and height (swim amplitude).
    pub fn new(intrinsic_width: f64, full_height: f64) -> Self {
        Self {
            intrinsic_width,
            full_height,
            swim_wait: true,
            reset: false,
            state: None,
        }
    }

    /// State committed by the last [`AnimationClock::update_frame`], if any.
    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    /// Compute and commit the state for the frame at `timestamp_ms`.
    pub fn update_frame(&mut self, timestamp_ms: f64) -> AnimationState {
        let phase = wrap_ms(timestamp_ms, FLAP_PERIOD_MS) / FLAP_PERIOD_MS;
        let slow_phase = wrap_ms(timestamp_ms, SWIM_PERIOD_MS) / SWIM_PERIOD_MS;

        let angle_radians = TAU * (phase + 0.25);
        let sin_time_norm = (angle_radians.sin() + 1.0) / 2.0;
        let cos_time_norm = (angle_radians.cos() + 1.0) / 2.0;

        let (swim, move_y) = self.swim(slow_phase);

        let state = AnimationState {
            phase,
            slow_phase,
            angle_radians,
            sin_time_norm,
            cos_time_norm,
            horizontal_factor: 0.7 + 0.3 * sin_time_norm,
            center_x: (self.intrinsic_width + PIVOT_CORRECTION) / 2.0,
            swim,
            move_y,
        };
        tracing::trace!(
            timestamp_ms,
            phase,
            slow_phase,
            ?swim,
            move_y,
            "animation frame"
        );
        self.state = Some(state);
        state
    }

    fn swim(&mut self, slow_phase: f64) -> (SwimPhase, f64) {
        if slow_phase > SWIM_END {
            self.reset = true;
            return (SwimPhase::Waiting, 0.0);
        }

        if self.reset {
            self.swim_wait = !self.swim_wait;
            self.reset = false;
        }

        if self.swim_wait {
            return (SwimPhase::Waiting, 0.0);
        }

        if slow_phase < SWIM_TURN {
            (SwimPhase::Departing, self.full_height * (-2.0 * slow_phase))
        } else {
            (
                SwimPhase::Returning,
                self.full_height * (2.0 - 2.0 * (slow_phase + 0.15)),
            )
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
