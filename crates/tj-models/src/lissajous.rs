//! Lissajous-type closed-form curve model.

use crate::error::ModelResult;
use crate::model::{SimOptions, TrajectoryModel};
use crate::params::{ParamSet, ParamSpec};
use crate::sample::{Sample, Trajectory, TrajectoryBatch};
use std::f64::consts::TAU;
use tj_core::numeric::gcd_real;
use tj_core::vec3::norm3;

/// Deterministic 3-axis sinusoid with a ramp-limited progress variable.
///
/// ## Model
///
/// A progress angle θ(t) runs from 0 at the origin, accelerating linearly
/// over `ramp_time` and advancing at constant rate afterwards:
///
/// ```text
/// s(t)   = min(t, ramp) / ramp                      (1 when ramp == 0)
/// θ(t)   = (s·min(t, ramp)/2 + max(0, t − ramp)) · 2π / duration
/// θ̇(t)   = 2π·s / duration
/// θ̈(t)   = 2π / (ramp·duration)  while t < ramp, else 0
/// ```
///
/// Per axis with amplitude A and frequency f:
///
/// ```text
/// x = A·sin(f·θ)
/// v = A·f·cos(f·θ)·θ̇
/// a = A·f·(−f·sin(f·θ)·θ̇² + cos(f·θ)·θ̈)
/// ```
///
/// θ̈ drops to 0 discontinuously at `t = ramp_time`; the acceleration signal
/// is not smooth there and downstream consumers rely on exactly this shape.
///
/// The plot horizon covers the ramp plus one full recurrence of the curve:
/// `ramp_time + duration / gcd(active frequencies)`, where an axis is active
/// when both its amplitude and frequency are non-zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lissajous;

/// Command-line positional order follows this slice.
const SPECS: &[ParamSpec] = &[
    ParamSpec {
        name: "duration",
        label: "Duration [s]",
        default: 10.0,
        min: 1.0,
        max: 60.0,
        step: 0.5,
    },
    ParamSpec {
        name: "ramp_time",
        label: "Ramp time [s]",
        default: 2.0,
        min: 0.0,
        max: 10.0,
        step: 0.1,
    },
    ParamSpec {
        name: "amp_x",
        label: "Amplitude X [m]",
        default: 1.0,
        min: 0.0,
        max: 5.0,
        step: 0.1,
    },
    ParamSpec {
        name: "amp_y",
        label: "Amplitude Y [m]",
        default: 1.0,
        min: 0.0,
        max: 5.0,
        step: 0.1,
    },
    ParamSpec {
        name: "amp_z",
        label: "Amplitude Z [m]",
        default: 0.5,
        min: 0.0,
        max: 5.0,
        step: 0.1,
    },
    ParamSpec {
        name: "freq_x",
        label: "Frequency X",
        default: 2.0,
        min: 0.0,
        max: 10.0,
        step: 0.5,
    },
    ParamSpec {
        name: "freq_y",
        label: "Frequency Y",
        default: 1.0,
        min: 0.0,
        max: 10.0,
        step: 0.5,
    },
    ParamSpec {
        name: "freq_z",
        label: "Frequency Z",
        default: 1.0,
        min: 0.0,
        max: 10.0,
        step: 0.5,
    },
];

/// Tolerance below which a frequency counts as zero.
const FREQ_EPS: f64 = 1e-9;

fn amps(params: &ParamSet) -> [f64; 3] {
    [
        params.get("amp_x"),
        params.get("amp_y"),
        params.get("amp_z"),
    ]
}

fn freqs(params: &ParamSet) -> [f64; 3] {
    [
        params.get("freq_x"),
        params.get("freq_y"),
        params.get("freq_z"),
    ]
}

impl Lissajous {
    /// One full recurrence of the multi-frequency curve.
    ///
    /// GCD of the active frequencies sets how much of `duration` one cycle
    /// spans; with no active component the cycle is `duration` itself.
    fn cycle_time(&self, params: &ParamSet) -> f64 {
        let amp = amps(params);
        let freq = freqs(params);
        let duration = params.get("duration");

        let mut g = 0.0;
        for axis in 0..3 {
            if amp[axis] != 0.0 && freq[axis] != 0.0 {
                g = gcd_real(g, freq[axis], FREQ_EPS);
            }
        }
        if g > FREQ_EPS {
            duration / g
        } else {
            duration
        }
    }

    fn eval(&self, t: f64, params: &ParamSet) -> Sample {
        let duration = params.get("duration");
        let ramp = params.get("ramp_time");
        let amp = amps(params);
        let freq = freqs(params);

        let time_velocity = if ramp > 0.0 { t.min(ramp) / ramp } else { 1.0 };
        let ramp_progress = time_velocity * t.min(ramp) / 2.0;
        let progress = (ramp_progress + (t - ramp).max(0.0)) * TAU / duration;
        let d_progress = TAU * time_velocity / duration;
        let dd_progress = if ramp > 0.0 && t < ramp {
            TAU / (ramp * duration)
        } else {
            0.0
        };

        let mut pos = [0.0; 3];
        let mut vel = [0.0; 3];
        let mut acc = [0.0; 3];
        for axis in 0..3 {
            let (a, f) = (amp[axis], freq[axis]);
            let (sin_fp, cos_fp) = (f * progress).sin_cos();
            pos[axis] = a * sin_fp;
            vel[axis] = a * f * cos_fp * d_progress;
            acc[axis] = a * f * (-f * sin_fp * d_progress * d_progress + cos_fp * dd_progress);
        }
        Sample::new(t, pos, vel, acc)
    }
}

impl TrajectoryModel for Lissajous {
    fn id(&self) -> &'static str {
        "lissajous"
    }

    fn name(&self) -> &'static str {
        "Lissajous curve"
    }

    fn is_stochastic(&self) -> bool {
        false
    }

    fn param_specs(&self) -> &'static [ParamSpec] {
        SPECS
    }

    fn plot_time(&self, params: &ParamSet) -> f64 {
        let duration = params.get("duration");
        if duration <= 0.0 {
            return 0.0;
        }
        params.get("ramp_time") + self.cycle_time(params)
    }

    fn simulate(&self, params: &ParamSet, opts: &SimOptions) -> TrajectoryBatch {
        let plot_time = self.plot_time(params);
        if !(plot_time > 0.0) {
            return TrajectoryBatch::new();
        }
        let steps = ((plot_time / opts.dt).floor() as usize).max(1);
        tracing::debug!(model = self.id(), steps, plot_time, "simulate");

        let trajectory: Trajectory = (0..=steps)
            .map(|i| self.eval((i as f64 * opts.dt).min(plot_time), params))
            .collect();
        // Deterministic: every realization is the same curve
        vec![trajectory; opts.n_samples.max(1)]
    }

    fn has_singularity(&self, params: &ParamSet) -> bool {
        if params.get("ramp_time") != 0.0 {
            return false;
        }
        // No ramp: the commanded velocity jumps from rest to this at t=0
        let duration = params.get("duration");
        let amp = amps(params);
        let freq = freqs(params);
        let d_progress = TAU / duration;
        let v0 = [
            amp[0] * freq[0] * d_progress,
            amp[1] * freq[1] * d_progress,
            amp[2] * freq[2] * d_progress,
        ];
        norm3(v0) > 1e-9
    }

    fn command(&self, params: &ParamSet) -> String {
        format!(
            "traj lissajous {} {} {} {} {} {} {} {}",
            params.get("duration"),
            params.get("ramp_time"),
            params.get("amp_x"),
            params.get("amp_y"),
            params.get("amp_z"),
            params.get("freq_x"),
            params.get("freq_y"),
            params.get("freq_z"),
        )
    }

    fn evaluate(&self, t: f64, params: &ParamSet) -> ModelResult<Sample> {
        Ok(self.eval(t, params))
    }
}
