use thiserror::Error;

/// Errors reported by the evaluator front doors.
///
/// The numeric kernels themselves never fail: non-finite inputs propagate
/// through IEEE-754 arithmetic like any other value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A precondition on an argument was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A strategy name did not match any known strategy.
    #[error("unknown strategy: {0:?} (expected fused, one-expr or two-step)")]
    UnknownStrategy(String),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;
