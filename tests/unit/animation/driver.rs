use super::*;
use crate::{RecordingBackend, RenderOptions, Target};

fn logo() -> Logo<RecordingBackend> {
    Logo::new(
        Some(Target::Container {
            client_width: 60.0,
            client_height: 69.0,
        }),
        RecordingBackend::new(),
        RenderOptions::default(),
    )
    .unwrap()
}

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn fixed_rate_timestamps_follow_frame_duration() {
    let mut s = FixedRateScheduler::with_limit(Fps::new(10, 1).unwrap(), 3);
    assert_eq!(s.next_frame(), Some(0.0));
    assert_eq!(s.next_frame(), Some(100.0));
    assert_eq!(s.next_frame(), Some(200.0));
    assert_eq!(s.next_frame(), None);
    assert_eq!(s.frames_emitted(), 3);
}

#[test]
fn idle_logo_draws_nothing() {
    let mut logo = logo();
    let mut scheduler = FixedRateScheduler::new(fps30());
    let frames = run_loop(&mut logo, &mut scheduler, |_, _| Ok(())).unwrap();
    assert_eq!(frames, 0);
    assert_eq!(logo.backend().frames(), 0);
}

#[test]
fn loop_runs_until_scheduler_is_exhausted() {
    let mut logo = logo();
    logo.animate();
    let mut seen = Vec::new();
    let frames = run_loop(
        &mut logo,
        &mut FixedRateScheduler::with_limit(fps30(), 5),
        |_, t| {
            seen.push(t);
            Ok(())
        },
    )
    .unwrap();
    assert_eq!(frames, 5);
    assert_eq!(seen.len(), 5);
    assert_eq!(logo.backend().frames(), 5);
    assert!(logo.is_animating());
}

#[test]
fn stop_inside_a_frame_prevents_the_next_one() {
    let mut logo = logo();
    logo.animate();
    let frames = run_loop(&mut logo, &mut FixedRateScheduler::new(fps30()), |logo, _| {
        if logo.backend().frames() == 3 {
            logo.stop();
        }
        Ok(())
    })
    .unwrap();
    assert_eq!(frames, 3);
    assert_eq!(logo.backend().frames(), 3);
    assert!(!logo.is_animating());
}

#[test]
fn stop_handle_stops_from_outside() {
    let mut logo = logo();
    let handle = logo.animate();
    assert!(handle.is_running());
    let remote = handle.clone();
    let frames = run_loop(&mut logo, &mut FixedRateScheduler::new(fps30()), |_, t| {
        if t >= 90.0 {
            remote.stop();
        }
        Ok(())
    })
    .unwrap();
    // 0, 33.3, 66.7, 100 are drawn; the stop lands before the fifth.
    assert_eq!(frames, 4);
    assert!(!handle.is_running());
}

#[test]
fn tick_on_idle_logo_does_not_render() {
    let mut logo = logo();
    assert_eq!(logo.tick(0.0).unwrap(), Schedule::Stop);
    assert_eq!(logo.backend().frames(), 0);
    logo.animate();
    assert_eq!(logo.tick(16.0).unwrap(), Schedule::Continue);
    assert_eq!(logo.backend().frames(), 1);
}

#[test]
fn realtime_timestamps_are_monotonic() {
    let mut s = RealtimeScheduler::with_limit(Fps::new(1000, 1).unwrap(), 3);
    let a = s.next_frame().unwrap();
    let b = s.next_frame().unwrap();
    let c = s.next_frame().unwrap();
    assert!(a <= b && b <= c);
    assert_eq!(s.next_frame(), None);
}

#[test]
fn realtime_scheduler_survives_sub_nanosecond_rates() {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let mut s = RealtimeScheduler::with_limit(Fps::new(u32::MAX, 1).unwrap(), 3);
        let stamps = [s.next_frame(), s.next_frame(), s.next_frame(), s.next_frame()];
        let _ = tx.send(stamps);
    });
    let stamps = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("next_frame did not return");
    assert!(stamps[..3].iter().all(Option::is_some));
    assert_eq!(stamps[3], None);
}
