use super::*;

const EPS: f64 = 1e-9;

#[test]
fn frame_zero_starts_at_the_neutral_pose() {
    let mut clock = AnimationClock::default();
    let s = clock.update_frame(0.0);
    assert_eq!(s.phase, 0.0);
    assert_eq!(s.slow_phase, 0.0);
    assert!((s.sin_time_norm - 1.0).abs() < EPS);
    assert!((s.cos_time_norm - 0.5).abs() < EPS);
    assert!((s.horizontal_factor - 1.0).abs() < EPS);
    assert_eq!(s.center_x, 310.0);
    assert_eq!(s.swim, SwimPhase::Waiting);
    assert_eq!(s.move_y, 0.0);
}

#[test]
fn flap_values_repeat_every_two_seconds() {
    for t in [0.0, 333.0, 1234.0, 1999.0, 7777.0] {
        let a = AnimationClock::default().update_frame(t);
        let b = AnimationClock::default().update_frame(t + FLAP_PERIOD_MS);
        assert!((a.sin_time_norm - b.sin_time_norm).abs() < EPS, "t={t}");
        assert!((a.cos_time_norm - b.cos_time_norm).abs() < EPS, "t={t}");
        assert!(
            (a.horizontal_factor - b.horizontal_factor).abs() < EPS,
            "t={t}"
        );
    }
}

#[test]
fn normalized_values_stay_in_range() {
    let mut clock = AnimationClock::default();
    let mut t = 0.0;
    while t < 4_000.0 {
        let s = clock.update_frame(t);
        assert!((0.0..1.0).contains(&s.phase));
        assert!((0.0..=1.0).contains(&s.sin_time_norm));
        assert!((0.0..=1.0).contains(&s.cos_time_norm));
        assert!(s.horizontal_factor >= 0.7 - EPS && s.horizontal_factor <= 1.0 + EPS);
        t += 16.0;
    }
}

#[test]
fn swim_bob_alternates_between_cycles() {
    let mut clock = AnimationClock::default();
    let cycles = 6;
    let mut bobbed = vec![false; cycles];
    let mut t = 0.0;
    while t < SWIM_PERIOD_MS * cycles as f64 {
        let s = clock.update_frame(t);
        if s.move_y != 0.0 {
            bobbed[(t / SWIM_PERIOD_MS) as usize] = true;
        }
        t += 100.0;
    }
    assert_eq!(bobbed, vec![false, true, false, true, false, true]);
}

#[test]
fn swim_displacement_follows_cycle_thresholds() {
    let mut clock = AnimationClock::default();
    // Arm the reset in the first (waiting) cycle.
    clock.update_frame(18_000.0);

    let s = clock.update_frame(SWIM_PERIOD_MS + 4_000.0);
    assert_eq!(s.swim, SwimPhase::Departing);
    assert!((s.move_y - artwork::FULL_HEIGHT * -0.4).abs() < EPS);

    let s = clock.update_frame(SWIM_PERIOD_MS + 10_000.0);
    assert_eq!(s.swim, SwimPhase::Returning);
    assert!((s.move_y - artwork::FULL_HEIGHT * (2.0 - 2.0 * 0.65)).abs() < 1e-6);

    let s = clock.update_frame(SWIM_PERIOD_MS + 18_000.0);
    assert_eq!(s.swim, SwimPhase::Waiting);
    assert_eq!(s.move_y, 0.0);
}

#[test]
fn repeated_timestamp_toggles_only_once_per_crossing() {
    let mut clock = AnimationClock::default();
    clock.update_frame(18_000.0);
    let first = clock.update_frame(24_000.0);
    let second = clock.update_frame(24_000.0);
    assert_eq!(first.swim, SwimPhase::Departing);
    assert_eq!(second, first);
}

#[test]
fn degenerate_timestamps_behave_like_zero() {
    let mut clock = AnimationClock::default();
    let a = clock.update_frame(f64::NAN);
    let b = AnimationClock::default().update_frame(-50.0);
    assert_eq!(a.phase, 0.0);
    assert_eq!(b.phase, 0.0);
}

#[test]
fn mark_offset_combines_swim_and_breathing() {
    let mut clock = AnimationClock::default();
    let s = clock.update_frame(0.0);
    assert!((s.mark_offset_y() - (-15.0)).abs() < EPS);
    assert_eq!(clock.state().copied(), Some(s));
    assert_eq!(s.warp(), Warp::new(310.0, s.horizontal_factor));
}
