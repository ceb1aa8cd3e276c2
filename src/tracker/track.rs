//! A single tracked object and its counter transitions.

use crate::tracker::detection::Detection;
use crate::tracker::kalman_filter::{KalmanFilter, MotionState};
use crate::tracker::rect::Rect;
use crate::tracker::track_status::TrackStatus;

/// One persistent hypothesis about a physical object's position across
/// frames. Identifiers are assigned monotonically by the store and never
/// reused while the owning tracker is alive.
#[derive(Debug, Clone)]
pub struct Track {
    id: u64,
    status: TrackStatus,
    motion: MotionState,
    /// Frames since creation, counting the creation frame.
    age: u32,
    /// Consecutive frames matched, including the creation detection.
    hits: u32,
    /// Consecutive frames missed.
    misses: u32,
    /// Confidence of the most recent matched detection.
    score: f32,
}

impl Track {
    pub(crate) fn new(id: u64, detection: &Detection, kf: &KalmanFilter, n_init: u32) -> Self {
        let m = detection.bbox().to_xyah();
        let motion = kf.initiate([m[0] as f64, m[1] as f64, m[2] as f64, m[3] as f64]);

        // The creation detection counts as the first hit, so a threshold of
        // one (or zero) confirms immediately.
        let status = if n_init <= 1 {
            TrackStatus::Confirmed
        } else {
            TrackStatus::Tentative
        };

        Self {
            id,
            status,
            motion,
            age: 1,
            hits: 1,
            misses: 0,
            score: detection.score(),
        }
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn status(&self) -> TrackStatus {
        self.status
    }

    /// Best estimate of the object's position at the current frame.
    #[inline]
    pub fn bbox(&self) -> Rect {
        self.motion.bbox()
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn hits(&self) -> u32 {
        self.hits
    }

    #[inline]
    pub fn misses(&self) -> u32 {
        self.misses
    }

    #[inline]
    pub fn score(&self) -> f32 {
        self.score
    }

    #[inline]
    pub fn is_confirmed(&self) -> bool {
        self.status == TrackStatus::Confirmed
    }

    #[inline]
    pub fn is_lost(&self) -> bool {
        self.status == TrackStatus::Lost
    }

    /// Advance the motion state one frame. Called for every live track
    /// before association.
    pub(crate) fn predict(&mut self, kf: &KalmanFilter) {
        kf.predict(&mut self.motion);
        self.age += 1;
    }

    /// Apply a matched detection: Kalman correction plus counter refresh.
    /// Tentative tracks confirm once the consecutive hit count reaches
    /// `n_init`.
    pub(crate) fn apply_update(&mut self, detection: &Detection, kf: &KalmanFilter, n_init: u32) {
        let m = detection.bbox().to_xyah();
        kf.update(
            &mut self.motion,
            [m[0] as f64, m[1] as f64, m[2] as f64, m[3] as f64],
        );

        self.hits += 1;
        self.misses = 0;
        self.score = detection.score();

        if self.status == TrackStatus::Tentative && self.hits >= n_init {
            self.status = TrackStatus::Confirmed;
        }
    }

    /// Record a frame with no matching detection. The position keeps the
    /// predicted value. Exceeding `max_age` consecutive misses marks the
    /// track Lost; the same budget applies to Tentative and Confirmed.
    pub(crate) fn mark_missed(&mut self, max_age: u32) {
        self.hits = 0;
        self.misses += 1;
        if self.misses > max_age {
            self.status = TrackStatus::Lost;
        }
    }
}
