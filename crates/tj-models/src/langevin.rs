//! Langevin-type noise-driven oscillator model.

use crate::model::{SimOptions, TrajectoryModel};
use crate::noise::NoiseGenerator;
use crate::params::{ParamSet, ParamSpec};
use crate::sample::{Sample, Trajectory, TrajectoryBatch};
use tj_core::vec3::{Vec3, ZERO3, rate3};

/// Damped, noise-driven oscillator integrated with Euler-Maruyama, with
/// exponential smoothing of the output signal.
///
/// ## Model
///
/// Per axis, independently, a raw state (x_r, v_r) follows
///
/// ```text
/// dv_r = (−γ·v_r − ω²·x_r)·dt + σ·dW        dW = sqrt(dt)·N(0,1)
/// dx_r = v_r·dt                              (updated v_r)
/// ```
///
/// and the published output is a smoothed copy:
///
/// ```text
/// v_s ← α·v_r + (1−α)·v_s
/// x_s ← x_s + v_s·dt
/// ```
///
/// Acceleration is the one-step finite difference of the smoothed velocity,
/// `(v_s − v_s_prev)/dt`. The smoothing time constant is baked into that
/// signal; downstream stat bands are defined over it, so it must not be
/// replaced with the raw-state acceleration.
///
/// With σ=0 the noise term vanishes entirely and every run reduces to the
/// same damped decay, regardless of the random draws.
#[derive(Clone, Copy, Debug, Default)]
pub struct Langevin;

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
        name: "gamma",
        label: "Damping γ",
        default: 1.0,
        min: 0.0,
        max: 10.0,
        step: 0.1,
    },
    ParamSpec {
        name: "omega",
        label: "Stiffness ω",
        default: 2.0,
        min: 0.0,
        max: 10.0,
        step: 0.1,
    },
    ParamSpec {
        name: "sigma",
        label: "Noise σ",
        default: 1.0,
        min: 0.0,
        max: 5.0,
        step: 0.05,
    },
    ParamSpec {
        name: "alpha",
        label: "Smoothing α",
        default: 0.2,
        min: 0.0,
        max: 1.0,
        step: 0.01,
    },
];

/// Raw and smoothed integration state for one realization.
struct OscillatorState {
    x_raw: Vec3,
    v_raw: Vec3,
    x_smooth: Vec3,
    v_smooth: Vec3,
}

impl OscillatorState {
    fn at_rest() -> Self {
        Self {
            x_raw: ZERO3,
            v_raw: ZERO3,
            x_smooth: ZERO3,
            v_smooth: ZERO3,
        }
    }

    /// Advance one Euler-Maruyama step; returns the smoothed velocity from
    /// before the step (for the finite-difference acceleration).
    fn step(&mut self, params: &ParamSet, dt: f64, noise: &mut NoiseGenerator) -> Vec3 {
        let gamma = params.get("gamma");
        let omega = params.get("omega");
        let sigma = params.get("sigma");
        let alpha = params.get("alpha");
        let sqrt_dt = dt.sqrt();

        let v_prev = self.v_smooth;
        for axis in 0..3 {
            let dw = noise.brownian_increment(sqrt_dt);
            self.v_raw[axis] +=
                (-gamma * self.v_raw[axis] - omega * omega * self.x_raw[axis]) * dt + sigma * dw;
            self.x_raw[axis] += self.v_raw[axis] * dt;
            self.v_smooth[axis] = alpha * self.v_raw[axis] + (1.0 - alpha) * self.v_smooth[axis];
            self.x_smooth[axis] += self.v_smooth[axis] * dt;
        }
        v_prev
    }
}

impl Langevin {
    fn realize(
        &self,
        params: &ParamSet,
        dt: f64,
        steps: usize,
        plot_time: f64,
        noise: &mut NoiseGenerator,
    ) -> Trajectory {
        let mut state = OscillatorState::at_rest();
        let mut trajectory = Vec::with_capacity(steps + 1);
        trajectory.push(Sample::at_rest(0.0));
        for i in 1..=steps {
            let t = (i as f64 * dt).min(plot_time);
            let v_prev = state.step(params, dt, noise);
            let acc = rate3(state.v_smooth, v_prev, dt);
            trajectory.push(Sample::new(t, state.x_smooth, state.v_smooth, acc));
        }
        trajectory
    }
}

impl TrajectoryModel for Langevin {
    fn id(&self) -> &'static str {
        "langevin"
    }

    fn name(&self) -> &'static str {
        "Langevin oscillator"
    }

    fn is_stochastic(&self) -> bool {
        true
    }

    fn param_specs(&self) -> &'static [ParamSpec] {
        SPECS
    }

    fn plot_time(&self, params: &ParamSet) -> f64 {
        let duration = params.get("duration");
        if duration > 0.0 { duration } else { 0.0 }
    }

    fn simulate(&self, params: &ParamSet, opts: &SimOptions) -> TrajectoryBatch {
        let plot_time = self.plot_time(params);
        if !(plot_time > 0.0) {
            return TrajectoryBatch::new();
        }
        let steps = ((plot_time / opts.dt).floor() as usize).max(1);
        let n_samples = opts.n_samples.max(1);
        tracing::debug!(model = self.id(), steps, n_samples, "simulate");

        (0..n_samples)
            .map(|path| {
                // Each realization gets its own stream: independent draws,
                // never a replication of a previous run
                let mut noise = match opts.seed {
                    Some(seed) => NoiseGenerator::from_path_id(seed, path as u64),
                    None => NoiseGenerator::from_entropy(),
                };
                self.realize(params, opts.dt, steps, plot_time, &mut noise)
            })
            .collect()
    }

    fn has_singularity(&self, _params: &ParamSet) -> bool {
        false
    }

    fn command(&self, params: &ParamSet) -> String {
        format!(
            "traj langevin {} {} {} {} {}",
            params.get("duration"),
            params.get("gamma"),
            params.get("omega"),
            params.get("sigma"),
            params.get("alpha"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    fn model() -> Langevin {
        Langevin
    }

    fn defaults() -> ParamSet {
        model().default_params()
    }

    #[test]
    fn defaults_match_schema() {
        let p = defaults();
        for spec in model().param_specs() {
            assert!(p.contains(spec.name), "missing spec key {}", spec.name);
            assert_eq!(p.get(spec.name), spec.default);
        }
    }

    #[test]
    fn evaluate_has_no_closed_form() {
        let err = model().evaluate(1.0, &defaults()).unwrap_err();
        assert!(matches!(err, ModelError::NoClosedForm { model: "langevin" }));
    }

    #[test]
    fn batch_shape_and_initial_sample() {
        let p = defaults();
        let opts = SimOptions {
            dt: 0.1,
            n_samples: 4,
            seed: Some(1),
        };
        let batch = model().simulate(&p, &opts);
        assert_eq!(batch.len(), 4);
        let steps = (model().plot_time(&p) / opts.dt).floor() as usize;
        for traj in &batch {
            assert_eq!(traj.len(), steps + 1);
            assert_eq!(traj[0].t, 0.0);
            assert_eq!(traj[0].pos, ZERO3);
            assert_eq!(traj[0].speed, 0.0);
            assert!((traj.last().unwrap().t - model().plot_time(&p)).abs() < 1e-9);
        }
    }

    #[test]
    fn times_are_index_aligned_across_realizations() {
        let batch = model().simulate(
            &defaults(),
            &SimOptions {
                dt: 0.05,
                n_samples: 3,
                seed: Some(7),
            },
        );
        for traj in &batch[1..] {
            for (a, b) in batch[0].iter().zip(traj) {
                assert_eq!(a.t, b.t);
            }
        }
    }

    #[test]
    fn realizations_are_independent() {
        let batch = model().simulate(
            &defaults(),
            &SimOptions {
                dt: 0.1,
                n_samples: 2,
                seed: Some(3),
            },
        );
        let diverged = batch[0]
            .iter()
            .zip(&batch[1])
            .any(|(a, b)| a.pos != b.pos);
        assert!(diverged, "two realizations should not coincide");
    }

    #[test]
    fn seeded_runs_reproduce() {
        let opts = SimOptions {
            dt: 0.1,
            n_samples: 2,
            seed: Some(11),
        };
        let a = model().simulate(&defaults(), &opts);
        let b = model().simulate(&defaults(), &opts);
        for (ta, tb) in a.iter().zip(&b) {
            for (sa, sb) in ta.iter().zip(tb) {
                assert_eq!(sa.pos, sb.pos);
                assert_eq!(sa.vel, sb.vel);
            }
        }
    }

    #[test]
    fn zero_sigma_removes_all_randomness() {
        let mut p = defaults();
        p.set("sigma", 0.0);
        // different seeds, identical dynamics: dW is multiplied by zero
        let a = model().simulate(&p, &SimOptions { dt: 0.1, n_samples: 1, seed: Some(1) });
        let b = model().simulate(&p, &SimOptions { dt: 0.1, n_samples: 1, seed: Some(999) });
        for (sa, sb) in a[0].iter().zip(&b[0]) {
            assert_eq!(sa.pos, sb.pos);
            assert_eq!(sa.vel, sb.vel);
            assert_eq!(sa.acc_mag, sb.acc_mag);
        }
    }

    #[test]
    fn zero_sigma_from_rest_stays_at_rest() {
        // x=v=0 is an equilibrium of the noiseless oscillator
        let mut p = defaults();
        p.set("sigma", 0.0);
        let batch = model().simulate(&p, &SimOptions { dt: 0.1, n_samples: 1, seed: Some(5) });
        for s in &batch[0] {
            assert_eq!(s.pos, ZERO3);
            assert_eq!(s.speed, 0.0);
        }
    }

    #[test]
    fn acceleration_is_velocity_finite_difference() {
        let p = defaults();
        let dt = 0.1;
        let batch = model().simulate(&p, &SimOptions { dt, n_samples: 1, seed: Some(2) });
        let traj = &batch[0];
        for i in 1..traj.len() {
            let acc = traj[i].acc.unwrap();
            let expected = rate3(traj[i].vel, traj[i - 1].vel, dt);
            for axis in 0..3 {
                assert!((acc[axis] - expected[axis]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn never_singular() {
        assert!(!model().has_singularity(&defaults()));
    }

    #[test]
    fn empty_batch_for_degenerate_duration() {
        let mut p = defaults();
        p.set("duration", 0.0);
        assert!(model().simulate(&p, &SimOptions::default()).is_empty());
        p.set("duration", -1.0);
        assert!(model().simulate(&p, &SimOptions::default()).is_empty());
    }

    #[test]
    fn command_token_order() {
        assert_eq!(model().command(&defaults()), "traj langevin 10 1 2 1 0.2");
    }
}
