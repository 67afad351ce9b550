//! Batch reduction to per-timestep statistic records.

use serde::{Deserialize, Serialize};
use tj_models::{Sample, TrajectoryBatch};

/// Spread of one scalar series across a batch at a single time index.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StatBand {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation (divide by N, not N−1)
    pub std: f64,
    /// mean − std
    pub lower: f64,
    /// mean + std
    pub upper: f64,
}

impl StatBand {
    /// Band of a single value: no spread.
    fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            mean: value,
            std: 0.0,
            lower: value,
            upper: value,
        }
    }

    /// Band over N values (population statistics).
    fn over(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        let std = var.sqrt();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            min,
            max,
            mean,
            std,
            lower: mean - std,
            upper: mean + std,
        }
    }
}

/// One statistic record per time index, derived on demand from a batch.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StatRecord {
    pub t: f64,
    pub speed: StatBand,
    pub acc: StatBand,
}

fn acc_mag(sample: &Sample) -> f64 {
    sample.acc_mag.unwrap_or(0.0)
}

/// Reduce a batch to per-timestep statistics.
///
/// Assumes the batch invariant: all trajectories index-aligned with the same
/// length and nominal times (guaranteed by every model's `simulate`). Output
/// length equals the trajectory length; an empty batch yields empty output.
pub fn aggregate(batch: &TrajectoryBatch) -> Vec<StatRecord> {
    let Some(first) = batch.first() else {
        return Vec::new();
    };

    if batch.len() == 1 {
        return first
            .iter()
            .map(|s| StatRecord {
                t: s.t,
                speed: StatBand::single(s.speed),
                acc: StatBand::single(acc_mag(s)),
            })
            .collect();
    }

    let mut speeds = vec![0.0; batch.len()];
    let mut accs = vec![0.0; batch.len()];
    (0..first.len())
        .map(|i| {
            for (k, traj) in batch.iter().enumerate() {
                speeds[k] = traj[i].speed;
                accs[k] = acc_mag(&traj[i]);
            }
            StatRecord {
                t: first[i].t,
                speed: StatBand::over(&speeds),
                acc: StatBand::over(&accs),
            }
        })
        .collect()
}
