//! The track state store: exclusive owner of all live tracks.

use crate::tracker::detection::Detection;
use crate::tracker::kalman_filter::KalmanFilter;
use crate::tracker::track::Track;

/// Owns the live track set and the monotonic identifier counter.
///
/// Iteration order is insertion order, which is stable within a frame and
/// across frames until a removal; identifiers come from the counter, never
/// from positions, so identity survives mid-vector removals.
#[derive(Debug, Default)]
pub struct TrackStore {
    tracks: Vec<Track>,
    next_id: u64,
}

impl TrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[inline]
    pub fn tracks_mut(&mut self) -> &mut [Track] {
        &mut self.tracks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Advance every live track's motion state by one frame.
    pub fn predict_all(&mut self, kf: &KalmanFilter) {
        for track in &mut self.tracks {
            track.predict(kf);
        }
    }

    /// Spawn a new track from an unmatched detection. Returns its id.
    pub fn insert(&mut self, detection: &Detection, kf: &KalmanFilter, n_init: u32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tracks.push(Track::new(id, detection, kf, n_init));
        id
    }

    /// Drop every Lost track. Their identifiers are never reassigned.
    pub fn remove_lost(&mut self) {
        self.tracks.retain(|t| !t.is_lost());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det() -> Detection {
        Detection::new(0.0, 0.0, 10.0, 10.0, 0.9).unwrap()
    }

    #[test]
    fn test_ids_are_monotonic() {
        let kf = KalmanFilter::default();
        let mut store = TrackStore::new();
        assert!(store.is_empty());
        assert_eq!(store.insert(&det(), &kf, 3), 0);
        assert_eq!(store.insert(&det(), &kf, 3), 1);
        assert_eq!(store.insert(&det(), &kf, 3), 2);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let kf = KalmanFilter::default();
        let mut store = TrackStore::new();
        store.insert(&det(), &kf, 1);
        store.insert(&det(), &kf, 1);

        // Age out the first track only.
        store.tracks_mut()[0].mark_missed(0);
        store.remove_lost();
        assert_eq!(store.len(), 1);
        assert_eq!(store.tracks()[0].id(), 1);

        // The freed slot never resurrects id 0.
        assert_eq!(store.insert(&det(), &kf, 1), 2);
    }

    #[test]
    fn test_predict_all_ages_every_track() {
        let kf = KalmanFilter::default();
        let mut store = TrackStore::new();
        store.insert(&det(), &kf, 3);
        store.insert(&det(), &kf, 3);
        store.predict_all(&kf);
        assert!(store.tracks().iter().all(|t| t.age() == 2));
    }
}
