//! Integrator error types.

/// Errors that can occur before a Lorenz run starts.
///
/// Numeric blow-up during a run is not an error: non-finite states are
/// written into the trajectory as-is.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LorenzError {
    /// A run input was rejected before any state was computed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
