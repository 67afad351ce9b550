//! Immutable model registry.
//!
//! The model set is fixed at compile time, so the registry is a plain
//! ordered table built once. Unknown ids are an ordinary `None`, not an
//! error; UI layers fall back to [`default_model`] when lookup fails.

use crate::langevin::Langevin;
use crate::lissajous::Lissajous;
use crate::model::TrajectoryModel;

static LISSAJOUS: Lissajous = Lissajous;
static LANGEVIN: Langevin = Langevin;

/// Registry order: the first entry is the default model.
static MODELS: [&dyn TrajectoryModel; 2] = [&LISSAJOUS, &LANGEVIN];

/// All registered models, in registry order.
pub fn models() -> &'static [&'static dyn TrajectoryModel] {
    &MODELS
}

/// Registered ids, in registry order.
pub fn model_ids() -> Vec<&'static str> {
    MODELS.iter().map(|m| m.id()).collect()
}

/// Resolve a model by id. Unknown ids yield `None`.
pub fn lookup(id: &str) -> Option<&'static dyn TrajectoryModel> {
    MODELS.iter().copied().find(|m| m.id() == id)
}

/// First model in registry order; the fallback when lookup fails.
pub fn default_model() -> &'static dyn TrajectoryModel {
    MODELS[0]
}
