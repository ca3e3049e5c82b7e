//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Sleeps out the remainder of each frame budget
#[derive(Debug)]
pub struct FramePacer {
    frame: Duration,
    last: Instant,
}

impl FramePacer {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / rate_hz.max(1),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until the current frame budget is spent.
    ///
    /// Returns the real seconds since the previous call (or construction).
    pub fn wait(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt.as_secs_f32()
    }
}
