//! The capability trait shared by all trajectory model variants.

use crate::error::{ModelError, ModelResult};
use crate::params::{ParamSet, ParamSpec};
use crate::sample::{Sample, TrajectoryBatch};

/// Options for simulation runs.
#[derive(Clone, Copy, Debug)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Number of realizations to simulate (deterministic models replicate)
    pub n_samples: usize,
    /// Base seed for stochastic models; `None` seeds from entropy.
    ///
    /// Each realization derives its own independent stream from this, so a
    /// fixed seed reproduces the whole batch without sharing generator state
    /// across realizations.
    pub seed: Option<u64>,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 0.05,
            n_samples: 1,
            seed: None,
        }
    }
}

/// Trait for trajectory models.
///
/// Models are pure functions of a parameter set: no validation, no shared
/// state. Non-finite parameter values propagate into the output samples
/// rather than raising errors. Adding a trajectory type means adding an
/// implementation, never touching dispatch logic.
pub trait TrajectoryModel: Send + Sync {
    /// Stable identifier used for registry lookup and command strings.
    fn id(&self) -> &'static str;

    /// Human-readable display name.
    fn name(&self) -> &'static str;

    /// Whether `simulate` draws randomness (independent realizations).
    fn is_stochastic(&self) -> bool;

    /// Schema of tunable parameters (UI bounds and steps; not enforced).
    fn param_specs(&self) -> &'static [ParamSpec];

    /// Default parameter set. Every key here has a schema entry.
    fn default_params(&self) -> ParamSet {
        ParamSet::from_specs(self.param_specs())
    }

    /// Plot horizon in seconds. 0 for degenerate parameter sets.
    fn plot_time(&self, params: &ParamSet) -> f64;

    /// Simulate a batch of trajectories over `[0, plot_time]`.
    ///
    /// Produces `opts.n_samples` index-aligned trajectories: identical
    /// replicas for deterministic models, independent realizations for
    /// stochastic ones. A non-positive plot horizon yields an empty batch.
    fn simulate(&self, params: &ParamSet, opts: &SimOptions) -> TrajectoryBatch;

    /// Whether this parameter set implies a kinematic discontinuity at t=0.
    fn has_singularity(&self, params: &ParamSet) -> bool;

    /// Single-line control command embedding the model id and parameter
    /// values in this model's fixed positional order. Byte-exact contract.
    fn command(&self, params: &ParamSet) -> String;

    /// Closed-form sample at time `t`.
    ///
    /// Only deterministic models have one; the default fails fast with
    /// `NoClosedForm` rather than fabricating data.
    fn evaluate(&self, t: f64, params: &ParamSet) -> ModelResult<Sample> {
        let _ = (t, params);
        Err(ModelError::NoClosedForm { model: self.id() })
    }
}
