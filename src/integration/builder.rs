//! Builder for creating detections from the box formats detectors emit.

use crate::tracker::{Detection, TrackError};

/// Builds a validated [`Detection`] from TLBR, XYWH, or TLWH box input.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    score: f32,
}

impl DetectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Corner format: (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
        self
    }

    /// Center format: (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x1 = cx - w / 2.0;
        self.y1 = cy - h / 2.0;
        self.x2 = cx + w / 2.0;
        self.y2 = cy + h / 2.0;
        self
    }

    /// Top-left format: (top-left x, top-left y, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.x1 = x;
        self.y1 = y;
        self.x2 = x + w;
        self.y2 = y + h;
        self
    }

    pub fn score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Validate and build. Fails like [`Detection::new`] on a degenerate
    /// box or an out-of-range score.
    pub fn build(self) -> Result<Detection, TrackError> {
        Detection::new(self.x1, self.y1, self.x2, self.y2, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tlbr_build() {
        let det = DetectionBuilder::new()
            .tlbr(10.0, 20.0, 50.0, 80.0)
            .score(0.95)
            .build()
            .unwrap();
        assert_eq!(det.score(), 0.95);
        assert_eq!(det.bbox().width(), 40.0);
    }

    #[test]
    fn test_formats_agree() {
        let a = DetectionBuilder::new()
            .tlbr(10.0, 20.0, 50.0, 80.0)
            .score(0.5)
            .build()
            .unwrap();
        let b = DetectionBuilder::new()
            .xywh(30.0, 50.0, 40.0, 60.0)
            .score(0.5)
            .build()
            .unwrap();
        let c = DetectionBuilder::new()
            .tlwh(10.0, 20.0, 40.0, 60.0)
            .score(0.5)
            .build()
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_build_rejects_invalid() {
        assert!(DetectionBuilder::new().score(0.9).build().is_err()); // empty box
        assert!(
            DetectionBuilder::new()
                .tlbr(0.0, 0.0, 10.0, 10.0)
                .score(2.0)
                .build()
                .is_err()
        );
    }
}
