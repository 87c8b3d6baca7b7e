//! Time source for the frame loop
//!
//! The same reading feeds both `dt` and event timestamps (dash, explosion
//! start, interact debounce), so tests swap in a [`ManualClock`].

use std::cell::Cell;
use std::time::Instant;

/// Seconds since an arbitrary, fixed origin
pub trait Clock {
    fn now(&self) -> f32;
}

/// Wall clock measured from construction
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f32>,
}

impl ManualClock {
    pub fn new(start: f32) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, seconds: f32) {
        self.now.set(self.now.get() + seconds);
    }

    pub fn set(&self, seconds: f32) {
        self.now.set(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f32 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f32 {
        (**self).now()
    }
}
