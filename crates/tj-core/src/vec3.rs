//! Minimal 3-component vector helpers over plain `[f64; 3]`.
//!
//! The engine only needs component-wise math and Euclidean norms, so plain
//! arrays keep the sample types trivially serializable and copyable.

use crate::numeric::Real;

/// 3-component vector (x, y, z).
pub type Vec3 = [Real; 3];

/// Zero vector.
pub const ZERO3: Vec3 = [0.0, 0.0, 0.0];

/// Euclidean norm.
pub fn norm3(v: Vec3) -> Real {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Component-wise difference scaled by `1/dt` (finite-difference rate).
pub fn rate3(curr: Vec3, prev: Vec3, dt: Real) -> Vec3 {
    [
        (curr[0] - prev[0]) / dt,
        (curr[1] - prev[1]) / dt,
        (curr[2] - prev[2]) / dt,
    ]
}
