//! Integration test: simulate -> aggregate round trip.
//!
//! Feeding any batch produced by a model's `simulate` into the aggregator
//! must never panic for N >= 1, and the output must match each trajectory's
//! length record-for-record.

use tj_models::{SimOptions, models};
use tj_stats::aggregate;

#[test]
fn round_trip_all_models_all_batch_sizes() {
    for model in models() {
        let params = model.default_params();
        for n_samples in [1usize, 2, 5] {
            let opts = SimOptions {
                dt: 0.1,
                n_samples,
                seed: Some(42),
            };
            let batch = model.simulate(&params, &opts);
            assert_eq!(batch.len(), n_samples, "{}", model.id());
            let stats = aggregate(&batch);
            for traj in &batch {
                assert_eq!(stats.len(), traj.len(), "{}", model.id());
            }
            // nominal times carried through unchanged
            for (s, orig) in stats.iter().zip(&batch[0]) {
                assert_eq!(s.t, orig.t);
            }
        }
    }
}

#[test]
fn deterministic_batch_aggregates_to_zero_spread() {
    let model = tj_models::lookup("lissajous").unwrap();
    let batch = model.simulate(
        &model.default_params(),
        &SimOptions {
            dt: 0.1,
            n_samples: 5,
            seed: None,
        },
    );
    for s in aggregate(&batch) {
        // identical replicas: zero spread up to summation rounding
        assert!(s.speed.std < 1e-9);
        assert_eq!(s.speed.min, s.speed.max);
        assert!(s.acc.std < 1e-9);
    }
}

#[test]
fn stochastic_batch_develops_spread() {
    let model = tj_models::lookup("langevin").unwrap();
    let batch = model.simulate(
        &model.default_params(),
        &SimOptions {
            dt: 0.1,
            n_samples: 8,
            seed: Some(7),
        },
    );
    let stats = aggregate(&batch);
    // t=0 is the shared rest sample; later records must show spread
    assert_eq!(stats[0].speed.std, 0.0);
    assert!(stats.iter().skip(1).any(|s| s.speed.std > 0.0));
}

#[test]
fn degenerate_domain_yields_empty_stats() {
    let model = tj_models::lookup("lissajous").unwrap();
    let mut params = model.default_params();
    params.set("duration", 0.0);
    let batch = model.simulate(&params, &SimOptions::default());
    assert!(batch.is_empty());
    assert!(aggregate(&batch).is_empty());
}
