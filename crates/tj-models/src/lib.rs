//! Trajectory models for trajkit.
//!
//! Provides:
//! - Parameter schema types (name -> value sets plus UI bound/step specs)
//! - Sample/Trajectory/TrajectoryBatch data model
//! - The `TrajectoryModel` capability trait shared by all variants
//! - Lissajous closed-form curve model with ramp-limited progress
//! - Langevin noise-driven oscillator (Euler-Maruyama + output smoothing)
//! - Seeded Box-Muller noise source
//! - Immutable model registry

pub mod error;
pub mod langevin;
pub mod lissajous;
pub mod model;
pub mod noise;
pub mod params;
pub mod registry;
pub mod sample;

// Re-exports for public API
pub use error::{ModelError, ModelResult};
pub use langevin::Langevin;
pub use lissajous::Lissajous;
pub use model::{SimOptions, TrajectoryModel};
pub use noise::NoiseGenerator;
pub use params::{ParamSet, ParamSpec};
pub use registry::{default_model, lookup, model_ids, models};
pub use sample::{Sample, Trajectory, TrajectoryBatch};
