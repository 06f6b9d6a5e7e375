/// Control actions an observer can request from an equation solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the most recent evaluation.
    StopEarly,
}
