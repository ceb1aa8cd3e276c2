//! The per-frame tracking state machine: predict, associate, update.

use tracing::{debug, trace};

use crate::tracker::assignment::{self, CostMetric, IouCost};
use crate::tracker::detection::Detection;
use crate::tracker::kalman_filter::KalmanFilter;
use crate::tracker::rect::Rect;
use crate::tracker::store::TrackStore;
use crate::tracker::track::Track;

/// Tracker tuning knobs.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Minimum IoU between a predicted track box and a detection for the
    /// pair to be matchable (the association gate).
    pub min_iou: f32,
    /// Consecutive matches required to promote Tentative -> Confirmed.
    pub n_init: u32,
    /// Consecutive misses a track survives; one more and it is removed.
    pub max_age: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            min_iou: 0.3,
            n_init: 3,
            max_age: 30,
        }
    }
}

/// Online multi-object tracker.
///
/// One `update` call per video frame: detections in, the current live track
/// set out. The update runs predict -> associate -> lifecycle as a single
/// synchronous step with no I/O. The tracker is not internally synchronized;
/// concurrent callers must serialize whole `update` calls behind a mutex,
/// since a partially applied update is not a consistent state to observe.
///
/// The association metric defaults to 1 − IoU and can be swapped via
/// [`Tracker::with_metric`] without touching lifecycle behavior.
pub struct Tracker<M: CostMetric = IouCost> {
    config: TrackerConfig,
    metric: M,
    kf: KalmanFilter,
    store: TrackStore,
    frame_id: u64,
}

impl Tracker<IouCost> {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_metric(config, IouCost)
    }
}

impl Default for Tracker<IouCost> {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl<M: CostMetric> Tracker<M> {
    pub fn with_metric(config: TrackerConfig, metric: M) -> Self {
        Self {
            config,
            metric,
            kf: KalmanFilter::default(),
            store: TrackStore::new(),
            frame_id: 0,
        }
    }

    /// Ingest one frame's detections and return the live track set.
    ///
    /// Detections must already be filtered by the caller's confidence
    /// threshold; the tracker does not re-filter by score. The returned
    /// slice contains every live track regardless of status, in stable
    /// insertion order; use [`Tracker::confirmed_tracks`] to render only
    /// trusted tracks.
    pub fn update(&mut self, detections: &[Detection]) -> &[Track] {
        self.frame_id += 1;

        if self.store.is_empty() && detections.is_empty() {
            return self.store.tracks();
        }

        self.store.predict_all(&self.kf);

        let predicted: Vec<Rect> = self.store.tracks().iter().map(|t| t.bbox()).collect();
        let costs = assignment::cost_matrix(&self.metric, &predicted, detections);
        let gate = 1.0 - self.config.min_iou;
        let assoc = assignment::min_cost_matching(&costs, gate);

        let tracks = self.store.tracks_mut();
        for &(track_idx, det_idx) in &assoc.matches {
            tracks[track_idx].apply_update(&detections[det_idx], &self.kf, self.config.n_init);
        }
        for &track_idx in &assoc.unmatched_tracks {
            tracks[track_idx].mark_missed(self.config.max_age);
            if tracks[track_idx].is_lost() {
                trace!(id = tracks[track_idx].id(), "track exceeded miss budget");
            }
        }
        for &det_idx in &assoc.unmatched_detections {
            let id = self
                .store
                .insert(&detections[det_idx], &self.kf, self.config.n_init);
            trace!(id, "spawned track from unmatched detection");
        }

        // Lost tracks leave the store in the same frame that marks them;
        // there is no re-acquisition grace period.
        let before = self.store.len();
        self.store.remove_lost();

        debug!(
            frame = self.frame_id,
            detections = detections.len(),
            matched = assoc.matches.len(),
            spawned = assoc.unmatched_detections.len(),
            removed = before - self.store.len(),
            live = self.store.len(),
            "frame update"
        );

        self.store.tracks()
    }

    /// Every live track, in stable insertion order.
    #[inline]
    pub fn tracks(&self) -> &[Track] {
        self.store.tracks()
    }

    /// Only Confirmed tracks; what callers should normally render.
    pub fn confirmed_tracks(&self) -> impl Iterator<Item = &Track> {
        self.store.tracks().iter().filter(|t| t.is_confirmed())
    }

    /// Number of frames ingested so far.
    #[inline]
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::track_status::TrackStatus;

    fn det(x1: f32, y1: f32, x2: f32, y2: f32) -> Detection {
        Detection::new(x1, y1, x2, y2, 0.9).unwrap()
    }

    fn config(n_init: u32, max_age: u32) -> TrackerConfig {
        TrackerConfig {
            min_iou: 0.3,
            n_init,
            max_age,
        }
    }

    #[test]
    fn test_empty_frames_are_noops() {
        let mut tracker = Tracker::default();
        assert!(tracker.update(&[]).is_empty());
        assert!(tracker.update(&[]).is_empty());
    }

    #[test]
    fn test_unmatched_detection_spawns_one_tentative_track() {
        let mut tracker = Tracker::new(config(3, 5));
        let tracks = tracker.update(&[det(0.0, 0.0, 10.0, 10.0)]);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].status(), TrackStatus::Tentative);

        // A second, disjoint detection spawns exactly one more.
        let tracks = tracker.update(&[
            det(0.5, 0.5, 10.5, 10.5),
            det(100.0, 100.0, 120.0, 120.0),
        ]);
        assert_eq!(tracks.len(), 2);
    }

    #[test]
    fn test_zero_tracks_and_zero_detections_edges() {
        let mut tracker = Tracker::new(config(1, 3));

        // Zero tracks: every detection is unmatched and spawns.
        let tracks = tracker.update(&[det(0.0, 0.0, 10.0, 10.0), det(50.0, 50.0, 60.0, 60.0)]);
        assert_eq!(tracks.len(), 2);

        // Zero detections: every track is unmatched but survives the budget.
        let tracks = tracker.update(&[]);
        assert_eq!(tracks.len(), 2);
        assert!(tracks.iter().all(|t| t.misses() == 1));
    }

    #[test]
    fn test_confirmed_tracks_filter() {
        let mut tracker = Tracker::new(config(2, 5));
        tracker.update(&[det(0.0, 0.0, 10.0, 10.0)]);
        assert_eq!(tracker.confirmed_tracks().count(), 0);

        tracker.update(&[det(0.5, 0.5, 10.5, 10.5)]);
        assert_eq!(tracker.confirmed_tracks().count(), 1);
    }

    #[test]
    fn test_gate_blocks_implausible_jump() {
        let mut tracker = Tracker::new(config(1, 0));
        let first_id = tracker.update(&[det(0.0, 0.0, 10.0, 10.0)])[0].id();

        // Far-away detection: no overlap, so the old track misses (and is
        // removed under a zero budget) while a fresh track spawns.
        let tracks = tracker.update(&[det(500.0, 500.0, 510.0, 510.0)]);
        assert_eq!(tracks.len(), 1);
        assert_ne!(tracks[0].id(), first_id);
    }

    #[test]
    fn test_custom_metric_is_used() {
        // A metric that refuses every pair: tracks can never be matched.
        struct NeverMatch;
        impl CostMetric for NeverMatch {
            fn cost(&self, _: &Rect, _: &Detection) -> f32 {
                1.0
            }
        }

        let mut tracker = Tracker::with_metric(config(1, 5), NeverMatch);
        tracker.update(&[det(0.0, 0.0, 10.0, 10.0)]);
        let tracks = tracker.update(&[det(0.0, 0.0, 10.0, 10.0)]);
        // Identical box, but the metric gates it out: a second track spawns.
        assert_eq!(tracks.len(), 2);
    }
}
