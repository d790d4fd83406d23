//! Duration timer scenarios driven by a manual clock.

use ursinity_core::{DurationTimer, ManualClock, TimerState};

fn timer(duration_ms: u64) -> (DurationTimer<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (DurationTimer::with_clock(duration_ms, clock.clone()), clock)
}

#[test]
fn one_second_timer_scenario() {
    let (mut t, clock) = timer(1_000);
    t.start();

    clock.advance_ms(500);
    assert!(!t.is_elapsed());

    clock.advance_ms(501);
    assert!(t.is_elapsed());

    assert!(t.check_and_reset());
    assert!(!t.is_elapsed());
}

#[test]
fn is_elapsed_matches_strict_comparison_for_many_waits() {
    for duration in [0_u64, 1, 16, 1_000] {
        for wait in [0_u64, 1, 15, 16, 17, 999, 1_000, 1_001, 5_000] {
            let (mut t, clock) = timer(duration);
            t.start();
            clock.advance_ms(wait);
            assert_eq!(
                t.is_elapsed(),
                wait > duration,
                "duration={duration} wait={wait}"
            );
        }
    }
}

#[test]
fn check_and_reset_without_elapse_leaves_queries_unchanged() {
    let (mut t, clock) = timer(100);
    t.start();
    clock.advance_ms(100);

    let before = (t.is_elapsed(), t.elapsed_ms(), t.state());
    assert!(!t.check_and_reset());
    assert_eq!(before, (t.is_elapsed(), t.elapsed_ms(), t.state()));

    clock.advance_ms(1);
    assert!(t.is_elapsed());
}

#[test]
fn restart_from_every_state_runs_from_zero() {
    // Idle
    let (mut t, _clock) = timer(50);
    t.restart();
    assert_eq!((t.state(), t.elapsed_ms()), (TimerState::Running, 0));

    // Running
    let (mut t, clock) = timer(50);
    t.start();
    clock.advance_ms(80);
    t.restart();
    assert_eq!((t.state(), t.elapsed_ms()), (TimerState::Running, 0));

    // Paused
    let (mut t, clock) = timer(50);
    t.start();
    clock.advance_ms(30);
    t.stop();
    assert_eq!(t.state(), TimerState::Paused);
    t.restart();
    assert_eq!((t.state(), t.elapsed_ms()), (TimerState::Running, 0));
}

#[test]
fn periodic_timer_fires_once_per_period() {
    let (mut t, clock) = timer(100);
    t.start();

    // 16 ms frames for about one second of game time.
    let mut fired = 0;
    for _ in 0..64 {
        clock.advance_ms(16);
        if t.check_and_reset() {
            fired += 1;
        }
    }
    // Each period needs 7 frames (112 ms > 100 ms); 64 / 7 = 9.
    assert_eq!(fired, 9);
}

#[test]
fn real_clock_timer_eventually_elapses() {
    let mut t = DurationTimer::new(200);
    t.start();
    assert!(!t.is_elapsed());
    std::thread::sleep(std::time::Duration::from_millis(300));
    assert!(t.is_elapsed());
    assert!(t.check_and_reset());
    assert!(t.elapsed_ms() < 200);
}
