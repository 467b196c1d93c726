//! Integration tests for both evaluators, serial and multithreaded
use fencepost::{
    CoefficientTable, Complex64, EvalConfig, PiecewisePoly, Samples,
    StepResampler,
    axis::{Axis, last_at_or_before},
    config::ThreadPool,
    resample, resample_sorted,
};
use rand::{Rng, SeedableRng, distributions::Uniform, rngs::StdRng};

/// Seeded uniform queries in `[-range, range]`
fn queries(n: usize, range: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0x2545F4914F6CDD1D);
    let dist = Uniform::new_inclusive(-range, range);
    (0..n).map(|_| rng.sample(dist)).collect()
}

fn custom_pool(n: usize) -> ThreadPool {
    ThreadPool::with_threads(n).unwrap()
}

#[test]
fn resample_boundary_scenario() {
    let axis = [0.0, 1.0, 2.0];
    let samples = Samples::Real(vec![1.0, 2.0, 3.0]);
    let out = resample(
        Axis::new(&axis).unwrap(),
        &samples,
        &[-1.0, 0.0, 0.5, 2.0, 5.0],
        &EvalConfig::default(),
    )
    .unwrap();
    assert_eq!(out, Samples::Real(vec![0.0, 1.0, 1.0, 3.0, 3.0]));
}

#[test]
fn ppoly_boundary_scenario() {
    let coefs = CoefficientTable::from_rows(&[[1.0, 0.0], [1.0, 1.0]]).unwrap();
    let p = PiecewisePoly::new(vec![0.0, 1.0, 2.0], coefs).unwrap();
    assert_eq!(
        p.eval_with(&[-1.0, 0.0, 1.0, 1.5, 5.0], &EvalConfig::default()),
        [-1.0, 0.0, 1.0, 1.5, 5.0]
    );
}

#[test]
fn empty_queries() {
    let axis = [0.0, 1.0];
    let r = StepResampler::new(Axis::new(&axis).unwrap(), &[1.0, 2.0]).unwrap();
    assert!(r.eval_with(&[], &EvalConfig::default()).is_empty());

    let coefs = CoefficientTable::from_rows(&[[1.0]]).unwrap();
    let p = PiecewisePoly::new(vec![0.0, 1.0], coefs).unwrap();
    assert!(p.eval_with(&[], &EvalConfig::default()).is_empty());
}

#[test]
fn query_generator() {
    let a = queries(1000, 3.0);
    assert_eq!(a, queries(1000, 3.0));
    assert!(a.iter().all(|q| (-3.0..=3.0).contains(q)));
    assert!(a.iter().any(|q| *q < 0.0) && a.iter().any(|q| *q > 0.0));
}

#[test]
fn resample_matches_definition() {
    let axis = [-5.0, -2.5, -2.5, 0.0, 1.0, 1.0, 1.0, 3.75, 8.0];
    let samples = (0..axis.len())
        .map(|i| Complex64::new(i as f64, -(i as f64)))
        .collect::<Vec<_>>();
    let r = StepResampler::new(Axis::new(&axis).unwrap(), &samples).unwrap();
    for q in queries(2000, 10.0) {
        let expected = axis
            .iter()
            .rposition(|a| *a <= q)
            .map(|j| samples[j])
            .unwrap_or_default();
        assert_eq!(r.eval_point(q), expected, "mismatch at {q}");
        assert_eq!(
            last_at_or_before(&axis, q),
            axis.iter().rposition(|a| *a <= q)
        );
    }
}

#[test]
fn parallel_matches_serial() {
    let breaks =
        (0..=64).map(|i| (i as f64 * 0.37).powi(2)).collect::<Vec<_>>();
    let rows = (0..64)
        .map(|i| {
            let i = i as f64;
            [i.sin(), i.cos(), 0.5 * i, -1.0]
        })
        .collect::<Vec<_>>();
    let coefs = CoefficientTable::from_rows(&rows).unwrap();
    let p = PiecewisePoly::new(breaks.clone(), coefs).unwrap();

    let samples = breaks.iter().map(|b| b * 3.0).collect::<Vec<_>>();
    let r = StepResampler::new(Axis::new(&breaks).unwrap(), &samples).unwrap();

    let qs = queries(100_000, 600.0);
    let ser_p = p.eval(&qs);
    let ser_r = r.eval(&qs);

    let pool = custom_pool(4);
    for threads in [Some(&pool), Some(&ThreadPool::Global)] {
        for chunk_size in [1, 333, 4096, 1_000_000] {
            let cfg = EvalConfig {
                threads,
                chunk_size,
            };
            let par_p = p.eval_with(&qs, &cfg);
            assert!(
                par_p
                    .iter()
                    .zip(&ser_p)
                    .all(|(a, b)| a.to_bits() == b.to_bits())
            );
            assert_eq!(r.eval_with(&qs, &cfg), ser_r);
        }
    }
}

#[test]
fn sorted_cursor_matches_search() {
    let axis = [0.0, 0.5, 0.5, 1.0, 4.0, 9.0];
    let re = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let im = [-1.0, -2.0, -3.0, -4.0, -5.0, -6.0];
    let samples = Samples::from_parts(re, Some(&im)).unwrap();
    let axis = Axis::new(&axis).unwrap();

    let mut qs = queries(5000, 12.0);
    qs.extend_from_slice(&[0.0, 0.5, 1.0, 4.0, 9.0]);
    qs.sort_by(f64::total_cmp);

    let a = resample(axis, &samples, &qs, &EvalConfig::default()).unwrap();
    let b = resample_sorted(axis, &samples, &qs).unwrap();
    assert_eq!(a, b);
    assert!(b.is_complex());
    assert_eq!(b.len(), qs.len());
}

#[test]
fn ppoly_interval_monotonic() {
    let breaks = vec![-1.0, 0.0, 0.0, 2.0, 2.5, 10.0];
    let coefs = CoefficientTable::from_row_slice(&[1.0; 5], 5, 1).unwrap();
    let p = PiecewisePoly::new(breaks, coefs).unwrap();
    let mut qs = queries(3000, 15.0);
    qs.sort_by(f64::total_cmp);
    let intervals = qs.iter().map(|q| p.interval(*q)).collect::<Vec<_>>();
    assert!(intervals.windows(2).all(|w| w[0] <= w[1]));
    assert!(intervals.iter().all(|i| *i < p.pieces()));
}

#[test]
fn column_major_table() {
    // Same pieces as the boundary scenario, stored power-by-power
    let coefs =
        CoefficientTable::from_column_major(&[1.0, 1.0, 0.0, 1.0], 2, 2)
            .unwrap();
    let p = PiecewisePoly::new(vec![0.0, 1.0, 2.0], coefs).unwrap();
    assert_eq!(p.eval(&[0.5, 1.5]), [0.5, 1.5]);
}
