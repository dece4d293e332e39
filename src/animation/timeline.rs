//! Scroll-scrubbed timeline.
//!
//! Every tween lasts `tween_duration` timeline units, and a staggered item `i`
//! starts `i * stagger` after its track's start. Progress maps linearly onto
//! the whole timeline length, so the lag between staggered items in progress
//! terms is `stagger / length`.

use super::progress::clamp_progress;

/// Visual parameters of one animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub scale: f64,
    pub opacity: f64,
    pub y_percent: f64,
}

impl Frame {
    pub const IDENTITY: Frame = Frame {
        scale: 1.0,
        opacity: 1.0,
        y_percent: 0.0,
    };

    pub fn lerp(&self, other: &Frame, t: f64) -> Frame {
        let t = clamp_progress(t);
        Frame {
            scale: self.scale + (other.scale - self.scale) * t,
            opacity: self.opacity + (other.opacity - self.opacity) * t,
            y_percent: self.y_percent + (other.y_percent - self.y_percent) * t,
        }
    }

    /// Inline CSS for the frame.
    pub fn to_style(&self) -> String {
        format!(
            "transform: translateY({:.3}%) scale({:.4}); opacity: {:.4};",
            self.y_percent, self.scale, self.opacity
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: &'static str,
    pub from: Frame,
    pub to: Frame,
    pub items: usize,
    pub stagger: f64,
    pub start: f64,
    pub tween_duration: f64,
}

impl Track {
    pub fn single(id: &'static str, from: Frame, to: Frame, tween_duration: f64) -> Self {
        Self::staggered(id, from, to, 1, 0.0, tween_duration)
    }

    pub fn staggered(
        id: &'static str,
        from: Frame,
        to: Frame,
        items: usize,
        stagger: f64,
        tween_duration: f64,
    ) -> Self {
        Self {
            id,
            from,
            to,
            items,
            stagger: stagger.max(0.0),
            start: 0.0,
            tween_duration: tween_duration.max(0.0),
        }
    }

    /// Timeline time at which item `index` begins to move.
    fn item_start(&self, index: usize) -> f64 {
        self.start + index as f64 * self.stagger
    }

    fn end(&self) -> f64 {
        if self.items == 0 {
            return self.start;
        }
        self.item_start(self.items - 1) + self.tween_duration
    }

    /// Fraction of item `index`'s tween completed at `time`.
    fn local_fraction(&self, index: usize, time: f64) -> f64 {
        let elapsed = time - self.item_start(index);
        if self.tween_duration > 0.0 {
            clamp_progress(elapsed / self.tween_duration)
        } else if elapsed >= 0.0 {
            1.0
        } else {
            0.0
        }
    }

    fn sample_at(&self, time: f64) -> Vec<Frame> {
        (0..self.items)
            .map(|i| self.from.lerp(&self.to, self.local_fraction(i, time)))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackSample {
    pub id: &'static str,
    pub frames: Vec<Frame>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineSample {
    pub progress: f64,
    pub tracks: Vec<TrackSample>,
}

impl TimelineSample {
    pub fn track(&self, id: &str) -> Option<&[Frame]> {
        self.tracks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.frames.as_slice())
    }

    /// Frame for item `index` of track `id`, identity when absent.
    pub fn frame(&self, id: &str, index: usize) -> Frame {
        self.track(id)
            .and_then(|frames| frames.get(index).copied())
            .unwrap_or(Frame::IDENTITY)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PinnedScrubTimeline {
    tracks: Vec<Track>,
    duration: f64,
}

impl PinnedScrubTimeline {
    pub const CENTER: &'static str = "center";
    pub const LEFT: &'static str = "left";
    pub const RIGHT: &'static str = "right";

    pub fn new(tracks: Vec<Track>) -> Self {
        let duration = tracks.iter().map(Track::end).fold(0.0, f64::max);
        Self { tracks, duration }
    }

    /// Center card grows in while the side columns slide out in opposite
    /// directions, one card after another.
    pub fn panels(left_items: usize, right_items: usize, stagger: f64, tween_duration: f64) -> Self {
        let fade_out = |y_percent| Frame {
            scale: 1.0,
            opacity: 0.0,
            y_percent,
        };
        Self::new(vec![
            Track::single(
                Self::CENTER,
                Frame {
                    scale: 0.9,
                    opacity: 0.8,
                    y_percent: 0.0,
                },
                Frame::IDENTITY,
                tween_duration,
            ),
            Track::staggered(
                Self::LEFT,
                Frame::IDENTITY,
                fade_out(-100.0),
                left_items,
                stagger,
                tween_duration,
            ),
            Track::staggered(
                Self::RIGHT,
                Frame::IDENTITY,
                fade_out(100.0),
                right_items,
                stagger,
                tween_duration,
            ),
        ])
    }


    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn sample(&self, progress: f64) -> TimelineSample {
        let progress = clamp_progress(progress);
        let time = progress * self.duration;
        TimelineSample {
            progress,
            tracks: self
                .tracks
                .iter()
                .map(|track| TrackSample {
                    id: track.id,
                    frames: track.sample_at(time),
                })
                .collect(),
        }
    }

    /// Start frames, used when scrubbing is disabled.
    pub fn at_rest(&self) -> TimelineSample {
        self.sample(0.0)
    }
}
