//! Reusable observers for the pame root finders.
//!
//! Every solver in [`pame_solvers::equation`] reports one event per
//! iterate to an [`Observer`]. The observers here work across solvers by
//! relying on the capability traits in [`traits`] rather than on concrete
//! event types.
//!
//! - [`TraceObserver`] forwards each iterate to [`tracing`]
//! - [`History`] records `(iter, x, residual)` samples
//! - [`EarlyStop`] stops a solver once a looser tolerance is met
//!
//! [`Observer`]: pame_core::Observer

pub mod traits;

mod history;
mod stop;
mod trace;

pub use history::{History, Sample};
pub use stop::EarlyStop;
pub use trace::TraceObserver;
