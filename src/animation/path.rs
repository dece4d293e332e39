use super::progress::clamp_progress;

/// Stroke that draws itself along with progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathReveal {
    pub length: f64,
}

impl PathReveal {
    pub fn new(length: f64) -> Self {
        Self {
            length: length.max(0.0),
        }
    }

    pub fn dash_offset(&self, progress: f64) -> f64 {
        self.length - self.length * clamp_progress(progress)
    }

    pub fn is_visible(&self, progress: f64) -> bool {
        clamp_progress(progress) > 0.0
    }
}
