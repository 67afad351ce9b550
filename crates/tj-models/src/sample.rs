//! Sampled trajectory data.

use serde::{Deserialize, Serialize};
use tj_core::vec3::{Vec3, ZERO3, norm3};

/// One kinematic sample along a trajectory. Immutable once produced.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Sample {
    /// Time (s)
    pub t: f64,
    /// Position (x, y, z)
    pub pos: Vec3,
    /// Velocity (vx, vy, vz)
    pub vel: Vec3,
    /// Scalar speed = |vel|
    pub speed: f64,
    /// Acceleration, if the model produces one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acc: Option<Vec3>,
    /// Scalar acceleration magnitude = |acc|
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acc_mag: Option<f64>,
}

impl Sample {
    /// Sample with position, velocity and acceleration, scalars derived.
    pub fn new(t: f64, pos: Vec3, vel: Vec3, acc: Vec3) -> Self {
        Self {
            t,
            pos,
            vel,
            speed: norm3(vel),
            acc: Some(acc),
            acc_mag: Some(norm3(acc)),
        }
    }

    /// The all-zero sample at a given time (initial rest state).
    pub fn at_rest(t: f64) -> Self {
        Self::new(t, ZERO3, ZERO3, ZERO3)
    }
}

/// One simulated realization: samples ordered by non-decreasing `t`,
/// from 0 to the model's plot horizon (final `t` clamped).
pub type Trajectory = Vec<Sample>;

/// N index-aligned realizations. All trajectories share the same length and
/// the same nominal time at each index. N=1 for deterministic models.
pub type TrajectoryBatch = Vec<Trajectory>;
