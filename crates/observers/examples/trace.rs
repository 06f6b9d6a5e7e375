//! Solves `x³ − 2x − 5 = 0` with every method and logs each iterate.
//!
//! Run with `RUST_LOG=trace` to see the iterates, or `RUST_LOG=debug` for
//! one line per solve.

use pame_observers::{History, TraceObserver};
use pame_solvers::equation::{Config, ScalarFn, bisection, chord, newton, secant};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let f = ScalarFn::new(|x: f64| x.powi(3) - 2.0 * x - 5.0)
        .with_derivative(|x: f64| 3.0 * x * x - 2.0);
    let config = Config::new(100, 1e-10)?;

    let mut history = History::new();
    let solution = bisection::solve(&f, &f, [2.0, 3.0], &config, &mut history)?;
    tracing::info!(x = solution.x, iters = solution.iters, "bisection");

    let solution = newton::solve(&f, &f, 2.0, &config, TraceObserver::new("newton"))?;
    tracing::info!(x = solution.x, iters = solution.iters, "newton");

    let solution = chord::solve(&f, &f, 2.0, &config, TraceObserver::new("chord"))?;
    tracing::info!(x = solution.x, iters = solution.iters, "chord");

    let solution = secant::solve_from(&f, &f, 2.0, &config, TraceObserver::new("secant"))?;
    tracing::info!(x = solution.x, iters = solution.iters, "secant");

    for sample in history.samples().iter().step_by(5) {
        println!("{:>3}  {:.12}  {:+.3e}", sample.iter, sample.x, sample.residual);
    }

    Ok(())
}
