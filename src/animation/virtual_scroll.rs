//! Wheel-driven virtual scroll that holds the page still while a sequence
//! plays out.

use super::progress::clamp_progress;

/// What the wheel handler should do with the native event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// The accumulator took the delta; call `preventDefault`.
    Consumed,
    /// Let the page scroll normally.
    PassThrough,
}

impl WheelOutcome {
    pub fn suppresses_native(self) -> bool {
        self == WheelOutcome::Consumed
    }
}

/// One wheel event as seen by the accumulator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    pub delta_y: f64,
    /// The owning section currently covers the viewport top.
    pub engaged: bool,
    /// Native page scroll is at its top boundary.
    pub page_at_top: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VirtualScrollAccumulator {
    accumulated: f64,
    max: f64,
    completed: bool,
    speed_factor: f64,
    rollback_margin: f64,
}

impl VirtualScrollAccumulator {
    pub fn new(max: f64, speed_factor: f64, rollback_margin: f64) -> Self {
        let max = if max.is_finite() { max.max(0.0) } else { 0.0 };
        Self {
            accumulated: 0.0,
            max,
            completed: max == 0.0,
            speed_factor,
            rollback_margin: rollback_margin.max(0.0),
        }
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn progress(&self) -> f64 {
        if self.max <= 0.0 {
            return 1.0;
        }
        clamp_progress(self.accumulated / self.max)
    }

    pub fn on_wheel(&mut self, input: WheelInput) -> WheelOutcome {
        let dy = input.delta_y;
        if dy.is_nan() {
            return WheelOutcome::PassThrough;
        }

        if dy > 0.0 && !self.completed && input.engaged {
            self.accumulated = (self.accumulated + dy * self.speed_factor).min(self.max);
            if self.accumulated >= self.max {
                self.accumulated = self.max;
                self.completed = true;
                log::debug!("virtual scroll sequence completed at {}", self.max);
            }
            return WheelOutcome::Consumed;
        }

        if dy < 0.0 && self.completed && input.page_at_top && self.max > 0.0 {
            self.completed = false;
            self.accumulated = (self.max - self.rollback_margin).max(0.0);
            log::debug!("re-entering virtual scroll sequence at {}", self.accumulated);
            return WheelOutcome::Consumed;
        }

        if dy < 0.0 && !self.completed && input.engaged && self.accumulated > 0.0 {
            self.accumulated = (self.accumulated + dy * self.speed_factor).max(0.0);
            return WheelOutcome::Consumed;
        }

        WheelOutcome::PassThrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(delta_y: f64) -> WheelInput {
        WheelInput {
            delta_y,
            engaged: true,
            page_at_top: true,
        }
    }

    #[test]
    fn fills_to_max_and_latches_on_exact_event() {
        let mut acc = VirtualScrollAccumulator::new(100.0, 1.0, 10.0);
        let mut seen = Vec::new();
        let mut completed_at = None;
        for (i, dy) in [50.0, 50.0, 50.0].into_iter().enumerate() {
            let was_completed = acc.is_completed();
            acc.on_wheel(down(dy));
            seen.push(acc.accumulated());
            if !was_completed && acc.is_completed() {
                completed_at = Some(i);
            }
        }
        assert_eq!(seen, vec![50.0, 100.0, 100.0]);
        assert_eq!(completed_at, Some(1));
    }

    #[test]
    fn never_exceeds_bounds() {
        let mut acc = VirtualScrollAccumulator::new(100.0, 1.5, 10.0);
        for dy in [7.0, 33.0, 120.0, 1e9, 3.0] {
            acc.on_wheel(down(dy));
            assert!(acc.accumulated() <= acc.max);
        }
        let mut acc = VirtualScrollAccumulator::new(100.0, 1.5, 10.0);
        acc.on_wheel(down(40.0));
        for dy in [-7.0, -33.0, -120.0, -1e9] {
            acc.on_wheel(down(dy));
            assert!(acc.accumulated() >= 0.0);
        }
        assert_eq!(acc.accumulated(), 0.0);
    }

    #[test]
    fn scaled_by_speed_factor() {
        let mut acc = VirtualScrollAccumulator::new(1440.0, 1.5, 10.0);
        assert_eq!(acc.on_wheel(down(100.0)), WheelOutcome::Consumed);
        assert_eq!(acc.accumulated(), 150.0);
        acc.on_wheel(down(-20.0));
        assert_eq!(acc.accumulated(), 120.0);
    }

    #[test]
    fn completed_sequence_lets_page_scroll_down() {
        let mut acc = VirtualScrollAccumulator::new(100.0, 1.0, 10.0);
        acc.on_wheel(down(100.0));
        assert!(acc.is_completed());
        assert_eq!(acc.on_wheel(down(30.0)), WheelOutcome::PassThrough);
        assert_eq!(acc.accumulated(), 100.0);
    }

    #[test]
    fn scrolling_up_at_page_top_re_enters_with_margin() {
        let mut acc = VirtualScrollAccumulator::new(100.0, 1.0, 10.0);
        acc.on_wheel(down(100.0));
        let outcome = acc.on_wheel(WheelInput {
            delta_y: -5.0,
            engaged: false,
            page_at_top: true,
        });
        assert!(outcome.suppresses_native());
        assert!(!acc.is_completed());
        assert_eq!(acc.accumulated(), 90.0);
    }

    #[test]
    fn scrolling_up_below_page_top_stays_native() {
        let mut acc = VirtualScrollAccumulator::new(100.0, 1.0, 10.0);
        acc.on_wheel(down(100.0));
        let outcome = acc.on_wheel(WheelInput {
            delta_y: -5.0,
            engaged: false,
            page_at_top: false,
        });
        assert_eq!(outcome, WheelOutcome::PassThrough);
        assert!(acc.is_completed());
    }

    #[test]
    fn disengaged_section_ignores_wheel() {
        let mut acc = VirtualScrollAccumulator::new(100.0, 1.0, 10.0);
        acc.on_wheel(down(30.0));
        let away = |delta_y| WheelInput {
            delta_y,
            engaged: false,
            page_at_top: false,
        };
        assert_eq!(acc.on_wheel(away(10.0)), WheelOutcome::PassThrough);
        assert_eq!(acc.on_wheel(away(-10.0)), WheelOutcome::PassThrough);
        assert_eq!(acc.accumulated(), 30.0);
    }

    #[test]
    fn upward_wheel_at_zero_passes_through() {
        let mut acc = VirtualScrollAccumulator::new(100.0, 1.0, 10.0);
        assert_eq!(acc.on_wheel(down(-10.0)), WheelOutcome::PassThrough);
    }

    #[test]
    fn zero_max_is_already_complete() {
        let acc = VirtualScrollAccumulator::new(0.0, 1.0, 10.0);
        assert!(acc.is_completed());
        assert_eq!(acc.progress(), 1.0);
    }

    #[test]
    fn margin_larger_than_max_clamps_to_zero() {
        let mut acc = VirtualScrollAccumulator::new(5.0, 1.0, 10.0);
        acc.on_wheel(down(5.0));
        acc.on_wheel(WheelInput {
            delta_y: -1.0,
            engaged: true,
            page_at_top: true,
        });
        assert_eq!(acc.accumulated(), 0.0);
    }
}
