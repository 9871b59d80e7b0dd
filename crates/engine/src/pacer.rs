//! Frame pacing: measure each frame and sleep out the rest of its budget.

use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The process monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Blocks the calling thread for roughly `duration`.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// OS sleep for the bulk of the wait, then spin until the deadline.
///
/// OS sleeps routinely overshoot by a millisecond or more, which is a large
/// share of a 16.6ms frame.
#[derive(Debug, Clone, Copy)]
pub struct PreciseSleeper {
    spin_window: Duration,
}

impl PreciseSleeper {
    pub fn new(spin_window: Duration) -> Self {
        Self { spin_window }
    }
}

impl Default for PreciseSleeper {
    fn default() -> Self {
        Self::new(Duration::from_millis(2))
    }
}

impl Sleeper for PreciseSleeper {
    fn sleep(&mut self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        let deadline = Instant::now() + duration;
        loop {
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            let remaining = deadline - now;
            if remaining > self.spin_window {
                std::thread::sleep(remaining - self.spin_window);
            } else {
                std::hint::spin_loop();
            }
        }
    }
}

/// Diagnostics for one finished frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTimings {
    /// Whole frame, including the pacing sleep.
    pub elapsed: Duration,
    /// Input, simulation and rendering only.
    pub computation: Duration,
    pub target: Duration,
}

impl FrameTimings {
    pub fn fps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            1.0 / secs
        } else {
            0.0
        }
    }

    /// Computation alone used up the frame budget, so no sleep happened.
    pub fn over_budget(&self) -> bool {
        self.computation >= self.target
    }
}

/// Fixed-rate frame pacer.
///
/// Call [`FramePacer::begin_frame`] at the top of each iteration and
/// [`FramePacer::end_frame`] once the frame's work is done.
#[derive(Debug)]
pub struct FramePacer<C: Clock = SystemClock, S: Sleeper = PreciseSleeper> {
    clock: C,
    sleeper: S,
    target: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(target: Duration) -> Self {
        Self::with_parts(SystemClock, PreciseSleeper::default(), target)
    }
}

impl<C: Clock, S: Sleeper> FramePacer<C, S> {
    pub fn with_parts(clock: C, sleeper: S, target: Duration) -> Self {
        let frame_start = clock.now();
        Self {
            clock,
            sleeper,
            target,
            frame_start,
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = self.clock.now();
    }

    /// Sleep for whatever remains of the frame budget and report timings.
    pub fn end_frame(&mut self) -> FrameTimings {
        let computation = self.clock.now().saturating_duration_since(self.frame_start);

        if let Some(remaining) = self.target.checked_sub(computation) {
            if !remaining.is_zero() {
                self.sleeper.sleep(remaining);
            }
        }

        FrameTimings {
            elapsed: self.clock.now().saturating_duration_since(self.frame_start),
            computation,
            target: self.target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Clock that only moves when told to; sleeping advances it exactly.
    #[derive(Clone)]
    struct ManualClock {
        now: Rc<Cell<Instant>>,
        slept: Rc<Cell<Duration>>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                now: Rc::new(Cell::new(Instant::now())),
                slept: Rc::new(Cell::new(Duration::ZERO)),
            }
        }

        fn advance(&self, d: Duration) {
            self.now.set(self.now.get() + d);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.now.get()
        }
    }

    impl Sleeper for ManualClock {
        fn sleep(&mut self, duration: Duration) {
            self.slept.set(self.slept.get() + duration);
            self.advance(duration);
        }
    }

    fn pacer(target_ms: u64) -> (FramePacer<ManualClock, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let pacer = FramePacer::with_parts(
            clock.clone(),
            clock.clone(),
            Duration::from_millis(target_ms),
        );
        (pacer, clock)
    }

    #[test]
    fn test_sleeps_out_remaining_budget() {
        let (mut pacer, clock) = pacer(16);
        pacer.begin_frame();
        clock.advance(Duration::from_millis(4));
        let t = pacer.end_frame();

        assert_eq!(t.computation, Duration::from_millis(4));
        assert_eq!(t.elapsed, Duration::from_millis(16));
        assert_eq!(t.target, Duration::from_millis(16));
        assert_eq!(clock.slept.get(), Duration::from_millis(12));
        assert!(!t.over_budget());
    }

    #[test]
    fn test_no_sleep_when_over_budget() {
        let (mut pacer, clock) = pacer(16);
        pacer.begin_frame();
        clock.advance(Duration::from_millis(20));
        let t = pacer.end_frame();

        assert_eq!(clock.slept.get(), Duration::ZERO);
        assert_eq!(t.elapsed, Duration::from_millis(20));
        assert!(t.over_budget());
    }

    #[test]
    fn test_exact_budget_does_not_sleep() {
        let (mut pacer, clock) = pacer(16);
        pacer.begin_frame();
        clock.advance(Duration::from_millis(16));
        pacer.end_frame();
        assert_eq!(clock.slept.get(), Duration::ZERO);
    }

    #[test]
    fn test_fps_from_elapsed() {
        let t = FrameTimings {
            elapsed: Duration::from_millis(20),
            computation: Duration::from_millis(1),
            target: Duration::from_millis(16),
        };
        assert!((t.fps() - 50.0).abs() < 1e-9);
        assert_eq!(FrameTimings::default().fps(), 0.0);
    }

    #[test]
    fn test_precise_sleeper_waits_at_least_duration() {
        let mut sleeper = PreciseSleeper::default();
        let start = Instant::now();
        sleeper.sleep(Duration::from_millis(3));
        assert!(start.elapsed() >= Duration::from_millis(3));

        let start = Instant::now();
        sleeper.sleep(Duration::ZERO);
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
