//! End-to-end frame pipeline: detection source + tracker.

use crate::tracker::{Track, Tracker, TrackerConfig};

use super::DetectionSource;

/// Bundles a [`DetectionSource`] with a [`Tracker`] so callers can feed raw
/// frames and read back identified tracks.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: Tracker,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    pub fn new(detector: D, config: TrackerConfig) -> Self {
        Self {
            detector,
            tracker: Tracker::new(config),
        }
    }

    pub fn with_default_config(detector: D) -> Self {
        Self::new(detector, TrackerConfig::default())
    }

    /// Run detection on one frame and update the tracker.
    ///
    /// Returns every live track; filter on
    /// [`Track::is_confirmed`] (or use
    /// [`Tracker::confirmed_tracks`] via [`TrackerPipeline::tracker`]) when
    /// rendering only trusted identities.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<&[Track], D::Error> {
        let detections = self.detector.detect(input, width, height)?;
        Ok(self.tracker.update(&detections))
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }
}
