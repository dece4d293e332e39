/// Nested rotation through action and target words: the target advances on
/// every tick and the action advances each time the target wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordCycle {
    actions: usize,
    targets: usize,
    action: usize,
    target: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleStep {
    pub action_changed: bool,
}

impl WordCycle {
    pub fn new(actions: usize, targets: usize) -> Self {
        Self {
            actions,
            targets,
            action: 0,
            target: 0,
        }
    }

    pub fn action(&self) -> usize {
        self.action
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn advance(&mut self) -> CycleStep {
        if self.targets == 0 || self.actions == 0 {
            return CycleStep {
                action_changed: false,
            };
        }
        self.target = (self.target + 1) % self.targets;
        let action_changed = self.target == 0;
        if action_changed {
            self.action = (self.action + 1) % self.actions;
        }
        CycleStep { action_changed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_moves_only_on_wrap() {
        let mut cycle = WordCycle::new(3, 3);
        assert!(!cycle.advance().action_changed);
        assert!(!cycle.advance().action_changed);
        assert_eq!((cycle.action(), cycle.target()), (0, 2));
        assert!(cycle.advance().action_changed);
        assert_eq!((cycle.action(), cycle.target()), (1, 0));
    }

    #[test]
    fn full_cycle_returns_home() {
        let mut cycle = WordCycle::new(3, 4);
        for _ in 0..12 {
            cycle.advance();
        }
        assert_eq!((cycle.action(), cycle.target()), (0, 0));
    }

    #[test]
    fn empty_lists_stay_put() {
        let mut cycle = WordCycle::new(0, 3);
        cycle.advance();
        assert_eq!((cycle.action(), cycle.target()), (0, 0));
    }
}
