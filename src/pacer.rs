/// Frame pacing.
///
/// The pacer is the loop's only blocking point. `wait` returns the time
/// since the previous tick so the timers can advance by real elapsed time.

use std::thread;
use std::time::{Duration, Instant};

pub trait Pace {
    fn wait(&mut self) -> Duration;
}

/// Sleeps until a fixed period has passed since the previous tick.
#[derive(Debug)]
pub struct FramePacer {
    period: Duration,
    last_tick: Instant,
}

impl FramePacer {
    pub fn new(period: Duration) -> Self {
        Self { period, last_tick: Instant::now() }
    }
}

impl Pace for FramePacer {
    fn wait(&mut self) -> Duration {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.period {
            thread::sleep(self.period - elapsed);
        }
        let now = Instant::now();
        let dt = now - self.last_tick;
        self.last_tick = now;
        dt
    }
}

/// Reports the same step every tick without sleeping. Lets the loop run at
/// full speed with deterministic timer behaviour.
#[derive(Clone, Copy, Debug)]
pub struct FixedStep(pub Duration);

impl Pace for FixedStep {
    fn wait(&mut self) -> Duration {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_pacer_waits_at_least_one_period() {
        let mut pacer = FramePacer::new(Duration::from_millis(5));
        let dt = pacer.wait();
        assert!(dt >= Duration::from_millis(5));
        let dt = pacer.wait();
        assert!(dt >= Duration::from_millis(5));
    }

    #[test]
    fn fixed_step_never_varies() {
        let mut pacer = FixedStep(Duration::from_millis(16));
        assert_eq!(pacer.wait(), Duration::from_millis(16));
        assert_eq!(pacer.wait(), Duration::from_millis(16));
    }
}
