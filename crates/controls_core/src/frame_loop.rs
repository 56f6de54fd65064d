// crates/controls_core/src/frame_loop.rs

use std::time::{Duration, Instant};

/// Fixed-rate frame scheduling for the event loop.
/// One logic frame per tick; a backlog is dropped rather than chased, so a
/// stalled window (dragging, breakpoints) does not replay a burst of frames.
pub struct FramePacer {
    frame: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            next: now,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// When the event loop should wake up next.
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// True if a frame is due at `now`; schedules the following one.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        self.next += self.frame;
        if self.next <= now {
            self.next = now + self.frame;
        }
        true
    }
}
