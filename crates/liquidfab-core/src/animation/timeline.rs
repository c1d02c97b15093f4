//! Open/close timeline with per-cell stagger.

use super::easing::ease_in_ease_out;
use crate::config::AnimationConfig;

/// Which way the cells are moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Opening,
    Closing,
}

/// Elapsed-time bookkeeping for one open or close run.
#[derive(Debug, Clone)]
pub struct Timeline {
    phase: Phase,
    elapsed: f64,
    /// Stagger between consecutive cells, in seconds.
    delay: f64,
    /// Motion duration of a single cell, in seconds.
    duration: f64,
    cell_count: usize,
}

impl Timeline {
    pub fn new(phase: Phase, delay: f64, duration: f64, cell_count: usize) -> Self {
        Self {
            phase,
            elapsed: 0.0,
            delay,
            duration,
            cell_count,
        }
    }

    pub fn opening(config: &AnimationConfig, cell_count: usize) -> Self {
        Self::new(Phase::Opening, config.open_delay, config.open_duration, cell_count)
    }

    pub fn closing(config: &AnimationConfig, cell_count: usize) -> Self {
        Self::new(Phase::Closing, config.close_delay, config.close_duration, cell_count)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
    }

    /// Total run time: one duration plus the stagger of every cell.
    pub fn max_duration(&self) -> f64 {
        self.duration + self.cell_count as f64 * self.delay
    }

    /// Eased progress of the whole run.
    pub fn all_ratio(&self) -> f64 {
        ease_in_ease_out(self.elapsed / self.max_duration())
    }

    pub fn is_complete(&self) -> bool {
        self.cell_count == 0 || self.all_ratio() >= 1.0
    }

    /// Eased progress of cell `index`, which starts `index * delay` late.
    pub fn cell_ratio(&self, index: usize) -> f64 {
        let cell_delay = self.delay * index as f64;
        ease_in_ease_out((self.elapsed - cell_delay) / self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_duration() {
        let timeline = Timeline::new(Phase::Opening, 0.1, 0.6, 3);
        assert!((timeline.max_duration() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_staggered_ratios() {
        let mut timeline = Timeline::new(Phase::Opening, 0.1, 0.6, 3);
        assert!(timeline.cell_ratio(0).abs() < f64::EPSILON);
        timeline.advance(0.15);
        assert!(timeline.cell_ratio(0) > timeline.cell_ratio(1));
        assert!(timeline.cell_ratio(1) > 0.0);
        assert!(timeline.cell_ratio(2).abs() < f64::EPSILON);
        assert!(!timeline.is_complete());
    }

    #[test]
    fn test_completion() {
        let mut timeline = Timeline::new(Phase::Closing, 0.0, 0.2, 2);
        timeline.advance(0.19);
        assert!(!timeline.is_complete());
        timeline.advance(0.02);
        assert!(timeline.is_complete());
    }

    #[test]
    fn test_empty_timeline_completes_immediately() {
        let timeline = Timeline::new(Phase::Opening, 0.1, 0.6, 0);
        assert!(timeline.is_complete());
    }
}
