use std::convert::Infallible;

use approx::assert_relative_eq;
use proptest::prelude::*;
use thiserror::Error;

use pame_core::{EquationProblem, Model};

use crate::equation::ScalarFn;

use super::{
    Action, BracketError, Config, Error, Event, Status, solve, solve_unobserved,
};

/// Squares its input.
struct Square;

impl Model for Square {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(x * x)
    }
}

/// Drives the model output to a target value.
struct TargetOutput(f64);

impl EquationProblem<1> for TargetOutput {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([output - self.0])
    }
}

#[derive(Debug, Error)]
#[error("input {0} is out of range")]
struct OutOfRange(f64);

/// Identity model that refuses inputs above a limit.
struct Limited(f64);

impl Model for Limited {
    type Input = f64;
    type Output = f64;
    type Error = OutOfRange;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x > self.0 {
            Err(OutOfRange(*x))
        } else {
            Ok(*x)
        }
    }
}

#[test]
fn finds_square_root() {
    let solution = solve_unobserved(&Square, &TargetOutput(9.0), [0.0, 10.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-7);
    assert_relative_eq!(solution.snapshot.output, 9.0, epsilon = 1e-7);
}

#[test]
fn returns_linear_target() {
    let c = 0.123_456;
    let f = ScalarFn::new(|x: f64| x - c);
    let solution = solve_unobserved(&f, &f, [-1.0, 1.0], &Config::default()).unwrap();

    assert!(solution.is_converged());
    assert!((solution.x - c).abs() < 1e-7);
}

#[test]
fn solves_classic_cubic() {
    let f = ScalarFn::new(|x: f64| x.powi(3) - 2.0 * x - 5.0);
    let config = Config::new(100, 1e-6).unwrap();

    let solution = solve_unobserved(&f, &f, [2.0, 3.0], &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters <= 25);
    assert_relative_eq!(solution.x, 2.094_551, epsilon = 1e-6);
    assert!(solution.residual.abs() < 1e-6);
}

#[test]
fn rejects_reversed_and_empty_brackets() {
    let f = ScalarFn::new(|x: f64| x);
    let config = Config::default();

    let reversed = solve_unobserved(&f, &f, [1.0, -1.0], &config);
    assert!(matches!(
        reversed,
        Err(Error::InvalidBracket { low, high, reason: BracketError::NotIncreasing })
            if low == 1.0 && high == -1.0
    ));

    let empty = solve_unobserved(&f, &f, [2.0, 2.0], &config);
    assert!(matches!(empty, Err(Error::InvalidBracket { .. })));

    let nan = solve_unobserved(&f, &f, [f64::NAN, 2.0], &config);
    assert!(matches!(
        nan,
        Err(Error::InvalidBracket { reason: BracketError::NonFinite, .. })
    ));
}

#[test]
fn non_bracketing_interval_runs_out_of_iterations() {
    let f = ScalarFn::new(|x: f64| x * x + 1.0);
    let config = Config::new(50, 1e-7).unwrap();

    let solution = solve_unobserved(&f, &f, [0.0, 1.0], &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 50);
    // Every midpoint shares the sign at `low`, so the bracket slides to `high`.
    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-12);
}

#[test]
fn zero_iterations_returns_low_endpoint() {
    let f = ScalarFn::new(|x: f64| x - 0.5);
    let config = Config::new(0, 1e-7).unwrap();

    let solution = solve_unobserved(&f, &f, [0.0, 1.0], &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.x, 0.0);
}

#[test]
fn low_endpoint_sign_picks_between_roots() {
    // Roots at 1, 2, and 3. From 0.5 the first midpoint (2.25) shares the
    // sign at `low`, so the search moves right and settles on 3.
    let f = ScalarFn::new(|x: f64| (x - 1.0) * (x - 2.0) * (x - 3.0));

    let solution = solve_unobserved(&f, &f, [0.5, 4.0], &Config::default()).unwrap();

    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-7);
}

#[test]
fn observer_can_stop_early() {
    let f = ScalarFn::new(|x: f64| x - 0.3);
    let mut seen = Vec::new();

    let observer = |event: &Event<'_, f64, f64>| {
        seen.push((event.iter, event.bracket));
        (event.iter == 3).then_some(Action::StopEarly)
    };

    let solution = solve(&f, &f, [0.0, 1.0], &Config::default(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.x, 0.375);
    assert_eq!(seen, vec![(1, [0.0, 1.0]), (2, [0.0, 0.5]), (3, [0.25, 0.5])]);
}

#[test]
fn model_errors_are_propagated() {
    let result = solve_unobserved(&Limited(0.4), &TargetOutput(0.3), [0.0, 1.0], &Config::default());

    match result {
        Err(Error::Model(err)) => assert_eq!(err.to_string(), "input 0.5 is out of range"),
        other => panic!("expected a model error, got {other:?}"),
    }
}

#[test]
fn repeated_solves_are_bit_identical() {
    let f = ScalarFn::new(|x: f64| x.exp() - 3.0);
    let config = Config::default();

    let first = solve_unobserved(&f, &f, [0.0, 2.0], &config).unwrap();
    let second = solve_unobserved(&f, &f, [0.0, 2.0], &config).unwrap();

    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert_eq!(first.residual.to_bits(), second.residual.to_bits());
    assert_eq!(first.iters, second.iters);
}

proptest! {
    #[test]
    fn monotone_residual_converges_within_halving_bound(
        low in -100.0..0.0_f64,
        width in 0.1..100.0_f64,
        fraction in 0.01..0.99_f64,
    ) {
        let high = low + width;
        let root = low + fraction * width;
        let tol = 1e-6;
        let f = ScalarFn::new(move |x: f64| x - root);
        let config = Config::new(1000, tol).unwrap();

        let solution = solve_unobserved(&f, &f, [low, high], &config).unwrap();

        let bound = ((high - low) / tol).log2().ceil() as usize;
        prop_assert!(solution.is_converged());
        prop_assert!(solution.iters <= bound, "{} > {}", solution.iters, bound);
    }
}
