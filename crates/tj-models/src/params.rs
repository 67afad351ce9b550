//! Parameter sets and their UI-facing schemas.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema entry for one tunable parameter.
///
/// Bounds and step are slider/UI metadata only; the models never enforce
/// them. Invariant: every key in a model's default set has a schema entry.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    /// Display label, e.g. "Duration [s]"
    pub label: &'static str,
    pub default: f64,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Slider step granularity
    pub step: f64,
}

/// Named parameter values for one model.
///
/// A plain `name -> f64` map. Reading a missing key yields NaN, which then
/// propagates through the model math the same way any non-finite input does.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamSet(BTreeMap<String, f64>);

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|&(name, value)| (name.to_string(), value))
                .collect(),
        )
    }

    /// Defaults from a schema slice.
    pub fn from_specs(specs: &[ParamSpec]) -> Self {
        Self(
            specs
                .iter()
                .map(|s| (s.name.to_string(), s.default))
                .collect(),
        )
    }

    /// Value for `name`, NaN if absent.
    pub fn get(&self, name: &str) -> f64 {
        self.0.get(name).copied().unwrap_or(f64::NAN)
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
