//! Scroll progress through a bounded section.
//!
//! A section drives its animation from how far its top edge has travelled
//! above the viewport. Before the top reaches the viewport the section is
//! idle, after its bottom is on screen it is finished, and in between it is
//! engaged and should be pinned.

/// Clamp any progress-like value into `[0, 1]`. NaN becomes 0.
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Fraction of the whole document scrolled. A page that cannot scroll reads 0.
pub fn page_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !(scrollable > 0.0) {
        return 0.0;
    }
    clamp_progress(scroll_y / scrollable)
}

/// Viewport-relative geometry of a section, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// The section covers the viewport top: its top edge is at or above it and
    /// its bottom edge still below it.
    pub fn covers_viewport_top(&self) -> bool {
        self.top <= 0.0 && self.bottom > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regime {
    /// Section top is still below the viewport top.
    Before,
    /// Section is being scrolled through.
    Engaged,
    /// Section bottom is inside the viewport.
    After,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollReading {
    pub progress: f64,
    pub regime: Regime,
}

impl ScrollReading {
    pub fn idle() -> Self {
        Self {
            progress: 0.0,
            regime: Regime::Before,
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.regime == Regime::Engaged
    }
}

/// Maps section geometry to progress. `scroll_distance` is how many pixels of
/// scrolling take progress from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollProgressTracker {
    scroll_distance: f64,
}

impl ScrollProgressTracker {
    pub fn new(scroll_distance: f64) -> Self {
        Self { scroll_distance }
    }

    /// Tracker whose distance is a multiple of the viewport height.
    pub fn for_viewport(viewport_height: f64, multiplier: f64) -> Self {
        Self::new(viewport_height * multiplier)
    }

    pub fn read(&self, rect: SectionRect, viewport_height: f64) -> ScrollReading {
        if rect.top > 0.0 {
            return ScrollReading::idle();
        }
        if rect.bottom <= viewport_height {
            return ScrollReading {
                progress: 1.0,
                regime: Regime::After,
            };
        }
        let progress = if self.scroll_distance.is_finite() && self.scroll_distance > 0.0 {
            clamp_progress(-rect.top / self.scroll_distance)
        } else {
            1.0
        };
        ScrollReading {
            progress,
            regime: Regime::Engaged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midway_through_section_is_pinned() {
        let tracker = ScrollProgressTracker::new(800.0);
        let reading = tracker.read(SectionRect::new(-400.0, 2000.0), 800.0);
        assert!((reading.progress - 0.5).abs() < f64::EPSILON);
        assert!(reading.is_pinned());
    }

    #[test]
    fn section_below_viewport_top_is_idle() {
        let tracker = ScrollProgressTracker::new(800.0);
        let reading = tracker.read(SectionRect::new(100.0, 2500.0), 800.0);
        assert_eq!(reading.progress, 0.0);
        assert_eq!(reading.regime, Regime::Before);
        assert!(!reading.is_pinned());
    }

    #[test]
    fn passed_section_is_complete_and_unpinned() {
        let tracker = ScrollProgressTracker::new(800.0);
        let reading = tracker.read(SectionRect::new(-2350.0, 50.0), 800.0);
        assert_eq!(reading.progress, 1.0);
        assert_eq!(reading.regime, Regime::After);
        assert!(!reading.is_pinned());
    }

    #[test]
    fn progress_saturates_inside_tall_section() {
        let tracker = ScrollProgressTracker::new(800.0);
        let reading = tracker.read(SectionRect::new(-1200.0, 1600.0), 800.0);
        assert_eq!(reading.progress, 1.0);
        assert!(reading.is_pinned());
    }

    #[test]
    fn zero_or_negative_distance_reads_complete() {
        for distance in [0.0, -10.0, f64::NAN] {
            let tracker = ScrollProgressTracker::new(distance);
            let reading = tracker.read(SectionRect::new(-10.0, 900.0), 800.0);
            assert_eq!(reading.progress, 1.0);
        }
    }

    #[test]
    fn repeated_reads_agree() {
        let tracker = ScrollProgressTracker::for_viewport(900.0, 2.0);
        let rect = SectionRect::new(-321.5, 1800.0);
        assert_eq!(tracker.read(rect, 900.0), tracker.read(rect, 900.0));
    }

    #[test]
    fn clamp_handles_out_of_range_and_nan() {
        assert_eq!(clamp_progress(-0.3), 0.0);
        assert_eq!(clamp_progress(1.7), 1.0);
        assert_eq!(clamp_progress(f64::NAN), 0.0);
        assert_eq!(clamp_progress(0.25), 0.25);
    }

    #[test]
    fn page_progress_over_document() {
        assert_eq!(page_progress(500.0, 3000.0, 1000.0), 0.25);
        assert_eq!(page_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(page_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn covers_viewport_top_edges() {
        assert!(SectionRect::new(0.0, 800.0).covers_viewport_top());
        assert!(SectionRect::new(-100.0, 1.0).covers_viewport_top());
        assert!(!SectionRect::new(1.0, 800.0).covers_viewport_top());
        assert!(!SectionRect::new(-900.0, 0.0).covers_viewport_top());
    }
}
