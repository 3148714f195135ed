use std::time::{Duration, Instant};

use crate::config::SimConfig;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous frame, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,

    /// Fixed simulation ticks to run for this frame.
    pub ticks: u32,
}

/// Converts frame time into fixed simulation ticks.
///
/// Frame delta is clamped to `[dt_min, dt_max]` so a debugger pause or a
/// minimized window cannot release a burst of movement. Ticks beyond
/// `max_ticks_per_frame` are dropped rather than carried over.
#[derive(Debug, Clone)]
pub struct SimClock {
    last: Instant,
    frame_index: u64,
    step: Duration,
    max_ticks: u32,
    accumulator: Duration,
    dt_min: Duration,
    dt_max: Duration,
}

impl SimClock {
    pub fn new(config: &SimConfig) -> Self {
        debug_assert!(!config.tick.is_zero());
        Self {
            last: Instant::now(),
            frame_index: 0,
            step: config.tick,
            max_ticks: config.max_ticks_per_frame,
            accumulator: Duration::ZERO,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Resets the baseline and drops any partial tick.
    pub fn reset(&mut self) {
        self.last = Instant::now();
        self.accumulator = Duration::ZERO;
    }

    /// Measures wall time since the previous call and advances.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;

        let dt = elapsed.clamp(self.dt_min, self.dt_max);
        let ticks = self.advance(dt);

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
            ticks,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }

    /// Adds `dt` (clamped) to the accumulator and returns the ticks now due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accumulator += dt.clamp(self.dt_min, self.dt_max);

        let mut ticks = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            ticks += 1;
        }

        if ticks > self.max_ticks {
            log::trace!("dropping {} simulation ticks", ticks - self.max_ticks);
            ticks = self.max_ticks;
        }
        ticks
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(tick_ms: u64, max: u32) -> SimClock {
        SimClock::new(&SimConfig {
            tick: Duration::from_millis(tick_ms),
            max_ticks_per_frame: max,
        })
    }

    #[test]
    fn whole_ticks_released() {
        let mut c = clock(10, 8);
        assert_eq!(c.advance(Duration::from_millis(25)), 2);
        // 5 ms carried over
        assert_eq!(c.advance(Duration::from_millis(5)), 1);
        assert_eq!(c.advance(Duration::from_millis(9)), 0);
    }

    #[test]
    fn long_stall_is_clamped() {
        let mut c = clock(10, 100);
        assert_eq!(c.advance(Duration::from_secs(5)), 25);
    }

    #[test]
    fn excess_ticks_dropped() {
        let mut c = clock(10, 3);
        assert_eq!(c.advance(Duration::from_millis(100)), 3);
        assert_eq!(c.advance(Duration::from_millis(1)), 0);
    }

    #[test]
    fn reset_discards_partial_tick() {
        let mut c = clock(10, 8);
        c.advance(Duration::from_millis(9));
        c.reset();
        assert_eq!(c.advance(Duration::from_millis(2)), 0);
    }

    #[test]
    fn frame_index_increments() {
        let mut c = SimClock::default();
        assert_eq!(c.tick().frame_index, 0);
        assert_eq!(c.tick().frame_index, 1);
    }
}
