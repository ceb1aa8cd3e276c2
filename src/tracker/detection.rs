//! Per-frame detection input.

use crate::tracker::error::TrackError;
use crate::tracker::rect::Rect;

/// One frame's raw observation of an object: a bounding box plus a
/// confidence score in [0, 1].
///
/// Detections are validated when built and are ephemeral: the caller
/// produces a fresh batch every frame and the tracker consumes it once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    bbox: Rect,
    score: f32,
}

impl Detection {
    /// Build a detection from corner coordinates.
    ///
    /// Fails on a non-positive-area box or a score outside [0, 1];
    /// malformed input is never clamped into "valid" data.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, score: f32) -> Result<Self, TrackError> {
        Self::from_rect(Rect::new(x1, y1, x2, y2), score)
    }

    pub fn from_rect(bbox: Rect, score: f32) -> Result<Self, TrackError> {
        if !bbox.is_valid() {
            return Err(TrackError::InvalidBox {
                x1: bbox.x1,
                y1: bbox.y1,
                x2: bbox.x2,
                y2: bbox.y2,
            });
        }
        if !(0.0..=1.0).contains(&score) || score.is_nan() {
            return Err(TrackError::InvalidScore(score));
        }
        Ok(Self { bbox, score })
    }

    #[inline]
    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    #[inline]
    pub fn score(&self) -> f32 {
        self.score
    }
}
