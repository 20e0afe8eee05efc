use std::time::{Duration, Instant};

use tracing::debug;

/// Fixed-interval tick source consumed by the animation driver.
pub trait FrameTimer {
    fn start(&mut self, interval: Duration);
    /// Stopping a timer that is not running is a no-op.
    fn stop(&mut self);
    fn is_running(&self) -> bool;
    /// Ticks that have elapsed by `now` and not yet been reported.
    fn due_ticks(&mut self, now: Instant) -> u32;
}

/// Hands out one fresh timer per animation run.
pub trait TimerSource {
    type Timer: FrameTimer;
    fn create(&mut self) -> Self::Timer;
}

/// Wall-clock timer polled from the UI repaint loop.
#[derive(Debug, Default)]
pub struct IntervalTimer {
    interval: Duration,
    next_deadline: Option<Instant>,
}

/// Upper bound on ticks reported by one poll, so a stalled UI does not replay
/// a long backlog in a single repaint.
const MAX_CATCH_UP_TICKS: u32 = 8;

impl IntervalTimer {
    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn start_at(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next_deadline = Some(now + interval);
    }
}

impl FrameTimer for IntervalTimer {
    fn start(&mut self, interval: Duration) {
        debug!(interval_ms = interval.as_secs_f64() * 1e3, "timer start");
        self.start_at(interval, Instant::now());
    }

    fn stop(&mut self) {
        if self.next_deadline.take().is_some() {
            debug!("timer stop");
        }
    }

    fn is_running(&self) -> bool {
        self.next_deadline.is_some()
    }

    fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.next_deadline else {
            return 0;
        };
        if self.interval.is_zero() {
            self.next_deadline = Some(now);
            return 1;
        }
        let mut ticks = 0;
        while deadline <= now && ticks < MAX_CATCH_UP_TICKS {
            deadline += self.interval;
            ticks += 1;
        }
        if deadline <= now {
            // overrun: resync instead of replaying the backlog
            deadline = now + self.interval;
        }
        self.next_deadline = Some(deadline);
        ticks
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IntervalTimers;

impl TimerSource for IntervalTimers {
    type Timer = IntervalTimer;

    fn create(&mut self) -> IntervalTimer {
        IntervalTimer::default()
    }
}

/// Timer that only ticks when the caller says so. Used by the headless runner.
#[derive(Debug, Default)]
pub struct ManualTimer {
    interval: Duration,
    running: bool,
    pending: u32,
}

impl ManualTimer {
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn fire(&mut self, ticks: u32) {
        if self.running {
            self.pending = self.pending.saturating_add(ticks);
        }
    }
}

impl FrameTimer for ManualTimer {
    fn start(&mut self, interval: Duration) {
        self.interval = interval;
        self.running = true;
        self.pending = 0;
    }

    fn stop(&mut self) {
        self.running = false;
        self.pending = 0;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn due_ticks(&mut self, _now: Instant) -> u32 {
        std::mem::take(&mut self.pending)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ManualTimers;

impl TimerSource for ManualTimers {
    type Timer = ManualTimer;

    fn create(&mut self) -> ManualTimer {
        ManualTimer::default()
    }
}
