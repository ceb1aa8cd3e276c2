//! Track-to-detection association: cost matrix, gating, optimal assignment.
//!
//! The solver is a stateless function over a 2-D cost array; the metric that
//! fills the array sits behind [`CostMetric`] so it can be swapped (IoU,
//! appearance, combined) without touching lifecycle logic.

use ndarray::Array2;

use crate::tracker::detection::Detection;
use crate::tracker::rect::Rect;

/// Cost assigned to gated-out pairs so the solver can never pick them over
/// a valid pair. Anything at or above this is treated as "no valid match".
const GATED_COST: f32 = 1e5;

/// Dissimilarity between a predicted track box and a detection.
/// Lower is better; must be >= 0.
pub trait CostMetric {
    fn cost(&self, track_box: &Rect, detection: &Detection) -> f32;
}

/// The default metric: 1 − IoU. Depends only on the two boxes, not on
/// track history or detection confidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct IouCost;

impl CostMetric for IouCost {
    #[inline]
    fn cost(&self, track_box: &Rect, detection: &Detection) -> f32 {
        1.0 - track_box.iou(&detection.bbox())
    }
}

/// Cost matrix of shape (tracks, detections) under 1 − IoU.
pub fn iou_cost(track_boxes: &[Rect], detections: &[Detection]) -> Array2<f32> {
    cost_matrix(&IouCost, track_boxes, detections)
}

/// Cost matrix of shape (tracks, detections) under an arbitrary metric.
pub fn cost_matrix<M: CostMetric>(
    metric: &M,
    track_boxes: &[Rect],
    detections: &[Detection],
) -> Array2<f32> {
    let mut costs = Array2::zeros((track_boxes.len(), detections.len()));
    for (i, t) in track_boxes.iter().enumerate() {
        for (j, d) in detections.iter().enumerate() {
            costs[[i, j]] = metric.cost(t, d);
        }
    }
    costs
}

/// Output partition of one association round. Every track index and every
/// detection index appears in exactly one of {matches, unmatched}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    /// (track index, detection index) pairs, in ascending track order.
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Solve the minimum-total-cost one-to-one assignment, then reject pairs
/// whose cost exceeds `gate`.
///
/// The rectangular matrix is padded square with a large constant and solved
/// exactly with Jonker-Volgenant, so the accepted pairing is globally
/// optimal over all gated pairs, not a greedy approximation. A degenerate
/// matrix (all entries gated, or a solver failure) yields the empty-match
/// partition rather than an error.
pub fn min_cost_matching(costs: &Array2<f32>, gate: f32) -> Association {
    let (num_tracks, num_dets) = costs.dim();

    if num_tracks == 0 || num_dets == 0 {
        return Association {
            matches: vec![],
            unmatched_tracks: (0..num_tracks).collect(),
            unmatched_detections: (0..num_dets).collect(),
        };
    }

    let size = num_tracks.max(num_dets);
    let mut padded = Array2::<f64>::from_elem((size, size), GATED_COST as f64);
    for i in 0..num_tracks {
        for j in 0..num_dets {
            // Gated pairs enter the solver at the sentinel cost so they can
            // only be picked when no valid alternative exists, and are then
            // rejected below.
            let c = costs[[i, j]];
            if c <= gate {
                padded[[i, j]] = c as f64;
            }
        }
    }

    let mut matches = vec![];
    let mut unmatched_tracks = vec![];
    let mut matched_det = vec![false; num_dets];

    match lapjv::lapjv(&padded) {
        Ok((row_to_col, _)) => {
            for (track_idx, &det_idx) in row_to_col.iter().enumerate().take(num_tracks) {
                if det_idx < num_dets && costs[[track_idx, det_idx]] <= gate {
                    matches.push((track_idx, det_idx));
                    matched_det[det_idx] = true;
                } else {
                    unmatched_tracks.push(track_idx);
                }
            }
        }
        Err(err) => {
            tracing::warn!(?err, "assignment solver failed, treating frame as unmatched");
            unmatched_tracks = (0..num_tracks).collect();
        }
    }

    let unmatched_detections = matched_det
        .iter()
        .enumerate()
        .filter_map(|(j, &hit)| (!hit).then_some(j))
        .collect();

    Association {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}
