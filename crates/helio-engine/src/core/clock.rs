use std::time::Instant;

/// Monotonic time source in seconds since an arbitrary epoch.
/// The engine is purely time-driven; this is its only external input
/// besides the held-control set.
pub trait Clock {
    fn elapsed_seconds(&self) -> f64;
}

/// Wall-clock source backed by `std::time::Instant`.
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
    fn elapsed_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Derives per-frame deltas from absolute clock readings.
///
/// The first sample yields `dt = 0` so startup cannot produce a spike,
/// and a backwards clock reading clamps to zero so angles never move
/// backward.
pub struct FrameTimer {
    last: Option<f64>,
    elapsed: f64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: None,
            elapsed: 0.0,
        }
    }

    /// Feed the current absolute time; returns the frame delta in seconds.
    pub fn delta(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            None => 0.0,
            Some(prev) => {
                let d = now - prev;
                if d < 0.0 {
                    log::warn!("clock went backwards by {:.6}s; clamping dt to zero", -d);
                    0.0
                } else {
                    d
                }
            }
        };
        self.last = Some(now);
        self.elapsed = now;
        dt as f32
    }

    /// Most recent absolute time fed to `delta`. Used for effects that
    /// run on global time even while the simulation is paused.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
