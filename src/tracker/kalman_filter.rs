//! Constant-velocity Kalman filter over XYAH bounding-box state.
//!
//! State is 8-dimensional: (cx, cy, aspect, height) plus their velocities.
//! Uses ndarray for the linear algebra and nalgebra for the 4x4 innovation
//! inverse to stay free of BLAS/LAPACK.

use ndarray::{Array1, Array2};

use crate::tracker::rect::Rect;

/// Position/velocity estimate owned by one track. Always initialized from
/// the track's first detection; there is no "empty" motion state.
#[derive(Debug, Clone)]
pub struct MotionState {
    /// 8-dim mean: (cx, cy, a, h, vcx, vcy, va, vh).
    pub mean: Array1<f64>,
    /// 8x8 covariance.
    pub covariance: Array2<f64>,
}

impl MotionState {
    /// Current position estimate as a corner-coordinate box.
    pub fn bbox(&self) -> Rect {
        Rect::from_xyah(
            self.mean[0] as f32,
            self.mean[1] as f32,
            self.mean[2] as f32,
            self.mean[3] as f32,
        )
    }
}

#[derive(Debug, Clone)]
pub struct KalmanFilter {
    motion_mat: Array2<f64>,
    update_mat: Array2<f64>,
    std_weight_position: f64,
    std_weight_velocity: f64,
}

impl Default for KalmanFilter {
    fn default() -> Self {
        let ndim = 4;
        let mut motion_mat = Array2::eye(2 * ndim);
        for i in 0..ndim {
            motion_mat[[i, ndim + i]] = 1.0;
        }

        let mut update_mat = Array2::zeros((ndim, 2 * ndim));
        for i in 0..ndim {
            update_mat[[i, i]] = 1.0;
        }

        Self {
            motion_mat,
            update_mat,
            std_weight_position: 1.0 / 20.0,
            std_weight_velocity: 1.0 / 160.0,
        }
    }
}

impl KalmanFilter {
    /// Create the initial state for a new track from an XYAH measurement.
    /// Velocities start at zero with wide uncertainty.
    pub fn initiate(&self, measurement: [f64; 4]) -> MotionState {
        let mut mean = Array1::zeros(8);
        for i in 0..4 {
            mean[i] = measurement[i];
        }

        let h = measurement[3];
        let std = [
            2.0 * self.std_weight_position * h,
            2.0 * self.std_weight_position * h,
            1e-2,
            2.0 * self.std_weight_position * h,
            10.0 * self.std_weight_velocity * h,
            10.0 * self.std_weight_velocity * h,
            1e-5,
            10.0 * self.std_weight_velocity * h,
        ];

        let mut covariance = Array2::zeros((8, 8));
        for i in 0..8 {
            covariance[[i, i]] = std[i] * std[i];
        }

        MotionState { mean, covariance }
    }

    /// Advance the state one frame under the constant-velocity model.
    pub fn predict(&self, state: &mut MotionState) {
        let h = state.mean[3];
        let std = [
            self.std_weight_position * h,
            self.std_weight_position * h,
            1e-2,
            self.std_weight_position * h,
            self.std_weight_velocity * h,
            self.std_weight_velocity * h,
            1e-5,
            self.std_weight_velocity * h,
        ];

        let mut motion_cov = Array2::zeros((8, 8));
        for i in 0..8 {
            motion_cov[[i, i]] = std[i] * std[i];
        }

        state.mean = self.motion_mat.dot(&state.mean);
        state.covariance =
            self.motion_mat.dot(&state.covariance).dot(&self.motion_mat.t()) + motion_cov;
    }

    /// Project the state into measurement space: (mean, innovation covariance).
    fn project(&self, state: &MotionState) -> (Array1<f64>, Array2<f64>) {
        let h = state.mean[3];
        let std = [
            self.std_weight_position * h,
            self.std_weight_position * h,
            1e-1,
            self.std_weight_position * h,
        ];

        let mut innovation_cov = Array2::zeros((4, 4));
        for i in 0..4 {
            innovation_cov[[i, i]] = std[i] * std[i];
        }

        let mean = self.update_mat.dot(&state.mean);
        let covariance =
            self.update_mat.dot(&state.covariance).dot(&self.update_mat.t()) + innovation_cov;

        (mean, covariance)
    }

    /// Correct the state with an XYAH measurement.
    pub fn update(&self, state: &mut MotionState, measurement: [f64; 4]) {
        let (projected_mean, projected_cov) = self.project(state);

        let innovation = Array1::from_vec(measurement.to_vec()) - projected_mean;

        // K = P H^T S^-1; H is [I 0], so P H^T is the first 4 columns of P.
        let s_inv = invert_4x4(&projected_cov);
        let pht = state.covariance.dot(&self.update_mat.t());
        let gain = pht.dot(&s_inv);

        state.mean = &state.mean + &gain.dot(&innovation);
        state.covariance = &state.covariance - &gain.dot(&projected_cov).dot(&gain.t());
    }
}

/// Invert the 4x4 innovation covariance via nalgebra. The matrix is a
/// projected covariance plus a positive diagonal, so it is invertible.
fn invert_4x4(m: &Array2<f64>) -> Array2<f64> {
    let mut nm = nalgebra::Matrix4::zeros();
    for i in 0..4 {
        for j in 0..4 {
            nm[(i, j)] = m[[i, j]];
        }
    }
    let inv = nm.try_inverse().expect("4x4 matrix inversion failed");
    let mut res = Array2::zeros((4, 4));
    for i in 0..4 {
        for j in 0..4 {
            res[[i, j]] = inv[(i, j)];
        }
    }
    res
}
