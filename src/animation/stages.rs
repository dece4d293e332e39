use std::ops::Range;

use super::progress::clamp_progress;

/// Reveals a prefix of an ordered stage list as progress grows.
///
/// The overshoot factor paces reveals ahead of linear progress so the last
/// stage is on screen well before progress reaches 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageRevealController {
    stage_count: usize,
    overshoot: f64,
}

impl StageRevealController {
    pub fn new(stage_count: usize, overshoot: f64) -> Self {
        Self {
            stage_count,
            overshoot,
        }
    }

    /// Number of stages revealed at `progress`.
    pub fn revealed_count(&self, progress: f64) -> usize {
        if self.stage_count == 0 {
            return 0;
        }
        let progress = clamp_progress(progress);
        let steps = (progress * self.stage_count as f64 * self.overshoot).floor();
        let steps = if steps.is_finite() && steps > 0.0 {
            steps as usize
        } else {
            0
        };
        self.stage_count.min(steps.saturating_add(1))
    }

    /// Indices of the revealed stages, in original order.
    pub fn revealed(&self, progress: f64) -> Range<usize> {
        0..self.revealed_count(progress)
    }

    pub fn is_revealed(&self, index: usize, progress: f64) -> bool {
        self.revealed(progress).contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_stage_is_visible_from_the_start() {
        let stages = StageRevealController::new(4, 1.5);
        assert_eq!(stages.revealed(0.0), 0..1);
    }

    #[test]
    fn all_stages_visible_before_progress_ends() {
        let stages = StageRevealController::new(4, 1.5);
        // floor(0.5 * 4 * 1.5) = 3 -> 4 stages
        assert_eq!(stages.revealed_count(0.5), 4);
        assert_eq!(stages.revealed_count(1.0), 4);
    }

    #[test]
    fn reveal_thresholds() {
        let stages = StageRevealController::new(4, 1.5);
        assert_eq!(stages.revealed_count(0.16), 1);
        assert_eq!(stages.revealed_count(0.17), 2);
        assert_eq!(stages.revealed_count(0.34), 3);
        assert!(stages.is_revealed(2, 0.34));
        assert!(!stages.is_revealed(3, 0.34));
    }

    #[test]
    fn reveal_is_monotonic_and_shrinks_back() {
        let stages = StageRevealController::new(6, 1.5);
        let mut previous = 0;
        for step in 0..=200 {
            let count = stages.revealed_count(step as f64 / 200.0);
            assert!(count >= previous);
            previous = count;
        }
        for step in (0..=200).rev() {
            let count = stages.revealed_count(step as f64 / 200.0);
            assert!(count <= previous);
            previous = count;
        }
        assert_eq!(previous, 1);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let stages = StageRevealController::new(4, 1.5);
        assert_eq!(stages.revealed(-3.0), stages.revealed(0.0));
        assert_eq!(stages.revealed(42.0), stages.revealed(1.0));
        assert_eq!(stages.revealed(f64::NAN), 0..1);
    }

    #[test]
    fn no_stages_reveals_nothing() {
        let stages = StageRevealController::new(0, 1.5);
        assert!(stages.revealed(1.0).is_empty());
    }

    #[test]
    fn same_progress_same_set() {
        let stages = StageRevealController::new(4, 1.5);
        assert_eq!(stages.revealed(0.42), stages.revealed(0.42));
    }
}
