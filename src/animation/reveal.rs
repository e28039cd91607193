use crate::config;

use super::easing::Ease;
use super::timeline::{Keyframe, Step};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the viewport height the section top has to rise above.
    pub trigger_fraction: f64,
    pub from: Keyframe,
    pub duration: f64,
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            trigger_fraction: config::REVEAL_TRIGGER_FRACTION,
            from: Keyframe::rise(config::REVEAL_DISTANCE_PX),
            duration: config::REVEAL_DURATION_SECS,
            ease: Ease::Power3Out,
        }
    }
}

impl RevealConfig {
    pub fn step(&self) -> Step<()> {
        Step {
            target: (),
            from: self.from,
            start: 0.0,
            duration: self.duration,
            ease: self.ease,
        }
    }
}

/// One-shot reveal bookkeeping for a fixed list of sections.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    trigger_fraction: f64,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(sections: usize, trigger_fraction: f64) -> Self {
        Self {
            trigger_fraction,
            revealed: vec![false; sections],
        }
    }

    /// `tops` holds the current top edge of each section, `None` when the
    /// section is not mounted. Returns the sections that crossed the trigger
    /// line for the first time.
    pub fn crossings(&mut self, tops: &[Option<f64>], viewport_height: f64) -> Vec<usize> {
        let line = viewport_height * self.trigger_fraction;
        let mut fresh = Vec::new();
        for (idx, top) in tops.iter().enumerate() {
            let Some(top) = top else { continue };
            match self.revealed.get_mut(idx) {
                Some(done) if !*done && *top <= line => {
                    *done = true;
                    fresh.push(idx);
                }
                _ => {}
            }
        }
        fresh
    }

    pub fn is_revealed(&self, idx: usize) -> bool {
        self.revealed.get(idx).copied().unwrap_or(false)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|done| *done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_when_top_reaches_eighty_percent() {
        let mut tracker = RevealTracker::new(2, 0.8);
        assert!(tracker.crossings(&[Some(900.0), Some(1400.0)], 1000.0).is_empty());
        assert_eq!(tracker.crossings(&[Some(800.0), Some(1200.0)], 1000.0), vec![0]);
        assert!(tracker.crossings(&[Some(300.0), Some(1100.0)], 1000.0).is_empty());
        assert!(tracker.is_revealed(0));
        assert!(!tracker.is_revealed(1));
    }

    #[test]
    fn scrolling_back_does_not_hide_again() {
        let mut tracker = RevealTracker::new(1, 0.8);
        assert_eq!(tracker.crossings(&[Some(100.0)], 1000.0), vec![0]);
        assert!(tracker.crossings(&[Some(2000.0)], 1000.0).is_empty());
        assert!(tracker.crossings(&[Some(100.0)], 1000.0).is_empty());
        assert!(tracker.all_revealed());
    }

    #[test]
    fn unmounted_sections_are_not_counted() {
        let mut tracker = RevealTracker::new(3, 0.8);
        assert_eq!(tracker.crossings(&[None, Some(10.0), None], 800.0), vec![1]);
        assert!(!tracker.all_revealed());
        assert_eq!(tracker.crossings(&[Some(10.0), Some(10.0), Some(-50.0)], 800.0), vec![0, 2]);
        assert!(tracker.all_revealed());
    }

    #[test]
    fn default_reveal_rises_eighty_pixels_over_a_second() {
        let step = RevealConfig::default().step();
        assert_eq!(step.from, Keyframe::rise(80.0));
        assert_eq!(step.duration, 1.0);
        assert!(step.transition_css().starts_with("transform 1s "));
    }
}
