//! Frame timing utilities.
//!
//! `Time` is produced once per frame by the runner's `TimeClock` and passed
//! into every callback through `AppContext`.  The renderer also forwards
//! `elapsed` to shaders so vertex displacement can animate.

use std::time::{Duration, Instant};

/// A snapshot of timing information for the current frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    /// Seconds elapsed since the previous frame, clamped to 0.1.
    pub delta: f32,

    /// Total seconds elapsed since the application started.
    pub elapsed: f64,

    /// Number of frames rendered so far (starts at 0 for the first frame).
    pub frame_count: u64,

    /// Instantaneous frames-per-second derived from `delta`.
    pub fps: f32,
}

/// Stateful timer that produces [`Time`] snapshots.
///
/// Besides per-frame snapshots it keeps a one-second window of frames so
/// the runner can report a stable FPS figure instead of the jittery
/// instantaneous one.
pub struct TimeClock {
    start:        Instant,
    last_tick:    Instant,
    frame_count:  u64,
    window_start: Instant,
    window_count: u32,
}

impl TimeClock {
    const MAX_DELTA: f32 = 0.1;
    const REPORT_WINDOW: Duration = Duration::from_secs(1);

    /// Create a new clock, starting the epoch now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start:        now,
            last_tick:    now,
            frame_count:  0,
            window_start: now,
            window_count: 0,
        }
    }

    /// Return the current [`Time`] snapshot without advancing the clock.
    pub fn peek(&self) -> Time {
        self.snapshot(Instant::now())
    }

    /// Advance by one frame.  Returns the [`Time`] snapshot for this frame.
    pub fn tick(&mut self) -> Time {
        let now  = Instant::now();
        let time = self.snapshot(now);

        self.last_tick     = now;
        self.frame_count  += 1;
        self.window_count += 1;

        time
    }

    /// Frames per second averaged over the last full second, or `None` while
    /// the current window is still open.  Resets the window when it reports.
    pub fn take_average_fps(&mut self) -> Option<f32> {
        let span = self.last_tick - self.window_start;
        if span < Self::REPORT_WINDOW {
            return None;
        }
        let fps = self.window_count as f32 / span.as_secs_f32();
        self.window_start = self.last_tick;
        self.window_count = 0;
        Some(fps)
    }

    fn snapshot(&self, now: Instant) -> Time {
        let raw_dt  = (now - self.last_tick).as_secs_f32();
        let delta   = raw_dt.min(Self::MAX_DELTA);
        let elapsed = (now - self.start).as_secs_f64();
        let fps     = if delta > 0.0 { 1.0 / delta } else { 0.0 };
        Time { delta, elapsed, frame_count: self.frame_count, fps }
    }
}

impl Default for TimeClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_counts_frames() {
        let mut clock = TimeClock::new();
        assert_eq!(clock.tick().frame_count, 0);
        assert_eq!(clock.tick().frame_count, 1);
        assert_eq!(clock.peek().frame_count, 2);
    }

    #[test]
    fn delta_is_clamped() {
        let clock = TimeClock::new();
        let t = clock.peek();
        assert!(t.delta <= TimeClock::MAX_DELTA);
        assert!(t.elapsed >= 0.0);
    }

    #[test]
    fn average_fps_waits_for_a_full_window() {
        let mut clock = TimeClock::new();
        clock.tick();
        assert!(clock.take_average_fps().is_none());
    }
}
