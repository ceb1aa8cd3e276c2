mod assignment;
mod detection;
mod error;
mod iou_tracker;
mod kalman_filter;
mod rect;
mod store;
mod track;
mod track_status;

pub use assignment::{Association, CostMetric, IouCost, cost_matrix, iou_cost, min_cost_matching};
pub use detection::Detection;
pub use error::TrackError;
pub use iou_tracker::{Tracker, TrackerConfig};
pub use kalman_filter::{KalmanFilter, MotionState};
pub use rect::Rect;
pub use track::Track;
pub use track_status::TrackStatus;
