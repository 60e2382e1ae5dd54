//! Wall-clock frame driver.
//!
//! The physics core only needs an elapsed time per step. [`FrameClock`]
//! measures that between successive ticks and can drive a simple fixed-cadence
//! loop for tools and demos that have no display-synchronised callback.

use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

use log::trace;

/// Measures the time between frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    running: bool,
    last: Instant,
    elapsed: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Creates a stopped clock whose reference instant is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            running: false,
            last: Instant::now(),
            elapsed: 0.0,
        }
    }

    /// Marks the clock running and resets the reference instant so the first
    /// tick does not include time spent stopped.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Like [`FrameClock::start`] with an explicit reference instant.
    pub const fn start_at(&mut self, now: Instant) {
        self.running = true;
        self.last = now;
    }

    /// Stops the clock; [`FrameClock::run`] returns after the current tick.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the clock is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds accumulated over all ticks.
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Records a tick now and returns the seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Records a tick at `now` and returns the seconds since the previous one.
    ///
    /// An instant earlier than the previous tick yields `0.0`.
    ///
    /// # Examples
    /// ```
    /// use std::time::{Duration, Instant};
    /// use voxel_body::FrameClock;
    /// let start = Instant::now();
    /// let mut clock = FrameClock::new();
    /// clock.start_at(start);
    /// let dt = clock.tick_at(start + Duration::from_millis(250));
    /// assert!((dt - 0.25).abs() < 1e-6);
    /// ```
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last);
        self.last = now;
        self.elapsed += delta.as_secs_f64();
        delta.as_secs_f32()
    }

    /// Ticks repeatedly, sleeping `interval` between ticks, until `on_tick`
    /// breaks or calls [`FrameClock::stop`] through the clock it is handed.
    pub fn run<F>(&mut self, interval: Duration, mut on_tick: F)
    where
        F: FnMut(&mut Self, f32) -> ControlFlow<()>,
    {
        self.start();
        while self.running {
            thread::sleep(interval);
            let dt = self.tick();
            trace!("frame clock tick: {dt}s");
            if on_tick(self, dt).is_break() {
                self.stop();
            }
        }
    }
}
