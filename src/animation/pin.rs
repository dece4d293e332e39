use super::progress::{Regime, ScrollReading};

/// Where a pinnable container sits inside its scroll range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinAnchor {
    /// In flow, at the top of the range (not reached yet, or pinning off).
    FlowTop,
    /// Fixed to the viewport.
    Fixed,
    /// In flow, at the bottom of the range (scrolled past).
    FlowBottom,
}

impl PinAnchor {
    pub fn from_reading(reading: &ScrollReading) -> Self {
        match reading.regime {
            Regime::Before => PinAnchor::FlowTop,
            Regime::Engaged => PinAnchor::Fixed,
            Regime::After => PinAnchor::FlowBottom,
        }
    }

    pub fn is_fixed(self) -> bool {
        self == PinAnchor::Fixed
    }

    pub fn style(self) -> &'static str {
        match self {
            PinAnchor::Fixed => "position: fixed; top: 0; left: 0; right: 0; height: 100vh; z-index: 10;",
            PinAnchor::FlowTop => "position: absolute; top: 0; left: 0; right: 0; height: 100vh;",
            PinAnchor::FlowBottom => "position: absolute; bottom: 0; left: 0; right: 0; height: 100vh;",
        }
    }
}

/// Minimum viewport width for the scroll-driven variant of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub min_width: f64,
}

impl Breakpoint {
    pub const fn new(min_width: f64) -> Self {
        Self { min_width }
    }

    pub fn allows(&self, viewport_width: f64) -> bool {
        viewport_width >= self.min_width
    }
}

/// Pin anchor with the breakpoint applied: below it the container never pins.
pub fn resolve_anchor(reading: &ScrollReading, breakpoint: Breakpoint, viewport_width: f64) -> PinAnchor {
    if !breakpoint.allows(viewport_width) {
        return PinAnchor::FlowTop;
    }
    PinAnchor::from_reading(reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(progress: f64, regime: Regime) -> ScrollReading {
        ScrollReading { progress, regime }
    }

    #[test]
    fn anchors_follow_regime() {
        let bp = Breakpoint::new(768.0);
        assert_eq!(resolve_anchor(&reading(0.0, Regime::Before), bp, 1200.0), PinAnchor::FlowTop);
        assert_eq!(resolve_anchor(&reading(0.4, Regime::Engaged), bp, 1200.0), PinAnchor::Fixed);
        assert_eq!(resolve_anchor(&reading(1.0, Regime::After), bp, 1200.0), PinAnchor::FlowBottom);
    }

    #[test]
    fn narrow_viewport_never_pins() {
        let bp = Breakpoint::new(768.0);
        assert_eq!(resolve_anchor(&reading(0.4, Regime::Engaged), bp, 767.0), PinAnchor::FlowTop);
        assert!(bp.allows(768.0));
    }

    #[test]
    fn only_fixed_anchor_uses_fixed_position() {
        assert!(PinAnchor::Fixed.style().contains("position: fixed"));
        assert!(PinAnchor::FlowBottom.style().contains("bottom: 0"));
        assert!(!PinAnchor::FlowTop.is_fixed());
    }
}
