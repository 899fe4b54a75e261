// src/domain/carousel.rs

use crate::domain::screen::Screen;
use std::time::{Duration, Instant};

pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index % len + len - 1) % len
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    Suspended,
    Running { next_due: Instant },
}

/// Auto-rotating index into a fixed list of banner slides.
///
/// Time is passed in by the caller, so the schedule is deterministic.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    interval: Duration,
    current: usize,
    rotation: Rotation,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            interval: interval.max(Duration::from_millis(1)),
            current: 0,
            rotation: Rotation::Suspended,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        matches!(self.rotation, Rotation::Running { .. })
    }

    /// Starts rotation with a fresh interval. No-op if already running.
    pub fn resume(&mut self, now: Instant) {
        if !self.is_running() {
            self.rotation = Rotation::Running {
                next_due: now + self.interval,
            };
        }
    }

    pub fn suspend(&mut self) {
        self.rotation = Rotation::Suspended;
    }

    /// Runs while `screen` shows the hero, suspended everywhere else.
    pub fn follow(&mut self, screen: Screen, now: Instant) {
        if screen.shows_carousel() {
            self.resume(now);
        } else {
            self.suspend();
        }
    }

    /// Jumps to `index` (wrapped). The rotation schedule is left as it was.
    pub fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.current = index % self.len;
        }
    }

    /// Applies every advance that fell due up to `now` and returns the current index.
    pub fn tick(&mut self, now: Instant) -> usize {
        if let Rotation::Running { mut next_due } = self.rotation {
            if self.len > 1 {
                while now >= next_due {
                    self.current = wrap_next(self.current, self.len);
                    next_due += self.interval;
                }
            } else if now >= next_due {
                next_due = now + self.interval;
            }
            self.rotation = Rotation::Running { next_due };
        }
        self.current
    }
}
