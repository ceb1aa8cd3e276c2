//! Online multi-object tracking over per-frame bounding box detections.
//!
//! The tracker turns each frame's detections into temporally-consistent
//! object identities: it predicts where every live track should be, solves
//! an optimal IoU-based assignment between predictions and detections, and
//! runs a Tentative/Confirmed/Lost lifecycle over the results.
//!
//! Detector inference and video I/O are not part of this crate; the
//! [`integration`] module exposes the trait seams to plug them in.

pub mod integration;
pub mod tracker;

pub use integration::{DetectionBuilder, DetectionSource, IntoDetections, TrackerPipeline};
pub use tracker::{
    Association, CostMetric, Detection, IouCost, Rect, Track, TrackError, TrackStatus, Tracker,
    TrackerConfig,
};
