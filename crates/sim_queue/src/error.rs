//! Queue-analysis error types.

/// Errors returned by the queue trace and rate formulas.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QueueError {
    /// An input was rejected before any computation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A formula would have divided by zero. The payload names the divisor.
    #[error("division by zero: {0} is zero")]
    DivisionByZero(&'static str),
}
