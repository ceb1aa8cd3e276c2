//! Seams for the tracker's external collaborators.
//!
//! The tracker itself is box-in/box-out; detector inference and video I/O
//! live behind the traits here so any backend can feed it.

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::TrackerPipeline;
