//! Trait for object detection backends.

use crate::tracker::Detection;

/// An object detector consumed as an opaque collaborator: raw frame pixels
/// in, per-frame detections out.
///
/// Implementations are expected to apply their own confidence threshold;
/// the tracker does not re-filter by score.
///
/// # Example
///
/// ```ignore
/// use motrack::{Detection, DetectionSource};
///
/// struct MyDetector { /* model handle */ }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<Detection>, Self::Error> {
///         // Run inference, build validated detections.
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data.
    ///
    /// `input` holds raw image bytes in whatever layout the implementation
    /// expects; `width` and `height` are in pixels.
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Detection>, Self::Error>;
}

/// Conversion from a model-specific output batch into detections.
pub trait IntoDetections {
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}
