//! Session stopwatch
//!
//! Independent of scoring. Elapsed time accumulates across pause/resume
//! and only a reset zeroes it.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct Stopwatch {
    accumulated: Duration,
    started_at: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or resume) counting. No-op when already running.
    pub fn start(&mut self) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(Instant::now());
        true
    }

    /// Pause counting, keeping the accumulated time. No-op when paused.
    pub fn pause(&mut self) -> bool {
        match self.started_at.take() {
            Some(started) => {
                self.accumulated += started.elapsed();
                true
            }
            None => false,
        }
    }

    /// Stop and zero the elapsed time.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started) => self.accumulated + started.elapsed(),
            None => self.accumulated,
        }
    }

    /// Elapsed time as `HH:MM:SS`
    pub fn formatted(&self) -> String {
        let total_seconds = self.elapsed().as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_start_pause_accumulates() {
        let mut sw = Stopwatch::new();
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed(), Duration::ZERO);

        assert!(sw.start());
        assert!(sw.is_running());
        // a second start while running changes nothing
        assert!(!sw.start());

        sleep(Duration::from_millis(20));
        assert!(sw.pause());
        let after_first_run = sw.elapsed();
        assert!(after_first_run >= Duration::from_millis(20));

        // paused time does not count
        sleep(Duration::from_millis(20));
        assert_eq!(sw.elapsed(), after_first_run);
        assert!(!sw.pause());

        // resuming keeps the accumulated time
        assert!(sw.start());
        sleep(Duration::from_millis(20));
        assert!(sw.elapsed() > after_first_run);
    }

    #[test]
    fn test_reset_zeroes() {
        let mut sw = Stopwatch::new();
        sw.start();
        sleep(Duration::from_millis(10));
        sw.reset();
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed(), Duration::ZERO);
        assert_eq!(sw.formatted(), "00:00:00");
    }

    #[test]
    fn test_formatting() {
        let sw = Stopwatch {
            accumulated: Duration::from_secs(2 * 3600 + 5 * 60 + 9),
            started_at: None,
        };
        assert_eq!(sw.formatted(), "02:05:09");
    }
}
