use thiserror::Error;

/// Input-validation errors. The tracker itself has no I/O and no fatal
/// internal conditions; malformed detections are rejected at construction
/// rather than silently repaired.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    #[error("invalid bounding box ({x1}, {y1}, {x2}, {y2}): width and height must be positive")]
    InvalidBox { x1: f32, y1: f32, x2: f32, y2: f32 },
    #[error("confidence score {0} outside [0, 1]")]
    InvalidScore(f32),
}
