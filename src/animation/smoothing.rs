/// Exponential chase of `current` toward `target`, stepped once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedValue {
    current: f64,
    target: f64,
    damping: f64,
    snap_within: Option<f64>,
}

impl SmoothedValue {
    pub fn new(initial: f64, damping: f64) -> Self {
        Self {
            current: initial,
            target: initial,
            damping: damping.clamp(0.0, 1.0),
            snap_within: None,
        }
    }

    /// Jump straight to the target once the gap falls below `epsilon`.
    pub fn with_snap(mut self, epsilon: f64) -> Self {
        self.snap_within = Some(epsilon.abs());
        self
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn step(&mut self) -> f64 {
        let diff = self.target - self.current;
        match self.snap_within {
            Some(epsilon) if diff.abs() < epsilon => self.current = self.target,
            _ => self.current += diff * self.damping,
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap(value: &SmoothedValue) -> f64 {
        (value.target - value.current).abs()
    }

    #[test]
    fn converges_geometrically() {
        let mut value = SmoothedValue::new(0.0, 0.1);
        value.set_target(1.0);
        for _ in 0..100 {
            value.step();
        }
        assert!(value.current > 0.99995);
        let expected = 1.0 - 0.9f64.powi(100);
        assert!((value.current - expected).abs() < 1e-12);
    }

    #[test]
    fn never_overshoots() {
        let mut value = SmoothedValue::new(10.0, 0.12);
        value.set_target(-4.0);
        for _ in 0..500 {
            let current = value.step();
            assert!(current >= -4.0);
        }
        assert!(gap(&value) < 1e-6);
    }

    #[test]
    fn without_snap_never_reaches_target_exactly_early() {
        let mut value = SmoothedValue::new(0.0, 0.1);
        value.set_target(1.0);
        for _ in 0..20 {
            value.step();
        }
        assert!(value.current < 1.0);
        assert!(gap(&value) >= 1e-3);
    }

    #[test]
    fn snap_lands_on_target() {
        let mut value = SmoothedValue::new(0.0, 0.12).with_snap(0.001);
        value.set_target(1.0);
        for _ in 0..200 {
            value.step();
        }
        assert_eq!(value.current, 1.0);
    }

    #[test]
    fn late_target_change_is_picked_up_next_step() {
        let mut value = SmoothedValue::new(0.0, 0.1);
        value.step();
        assert_eq!(value.current, 0.0);
        value.set_target(2.0);
        assert!((value.step() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn non_finite_targets_are_ignored() {
        let mut value = SmoothedValue::new(0.5, 0.1);
        value.set_target(f64::NAN);
        value.set_target(f64::INFINITY);
        assert_eq!(value.target(), 0.5);
    }
}
