//! Lorenz run configuration.

use serde::{Deserialize, Serialize};

use crate::error::LorenzError;
use crate::state::{LorenzParameters, LorenzState};

/// Everything needed to reproduce a Lorenz trajectory.
///
/// The defaults reproduce the classic picture: `rho = 28`, start at
/// `(7.5, 22.5, 35)`, `10_000` steps of `0.01`. Changing `step_size` or
/// `num_steps` changes the shape of the output; fixed-step Euler on a chaotic
/// system is sensitive to both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LorenzConfig {
    /// Vector-field constants.
    pub parameters: LorenzParameters,
    /// State at index 0 of the trajectory.
    pub initial_state: LorenzState,
    /// Fixed Euler step size. Must be finite and strictly positive.
    pub step_size: f64,
    /// Number of Euler steps. The trajectory holds `num_steps + 1` states.
    pub num_steps: usize,
}

impl LorenzConfig {
    pub const DEFAULT_STEP_SIZE: f64 = 0.01;
    pub const DEFAULT_NUM_STEPS: usize = 10_000;

    /// Override the control parameter `rho`.
    #[must_use]
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.parameters.rho = rho;
        self
    }

    /// Replace the vector-field parameters.
    #[must_use]
    pub fn with_parameters(mut self, parameters: LorenzParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Override the starting point.
    #[must_use]
    pub fn with_initial_state(mut self, initial_state: LorenzState) -> Self {
        self.initial_state = initial_state;
        self
    }

    /// Override the Euler step size.
    #[must_use]
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Override the number of steps.
    #[must_use]
    pub fn with_num_steps(mut self, num_steps: usize) -> Self {
        self.num_steps = num_steps;
        self
    }

    /// Check the inputs that cannot be expressed in the types.
    ///
    /// # Errors
    ///
    /// Returns [`LorenzError::InvalidInput`] if the step size is not a finite,
    /// strictly positive number.
    pub fn validate(&self) -> Result<(), LorenzError> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(LorenzError::InvalidInput(format!(
                "step size must be finite and > 0, got {}",
                self.step_size
            )));
        }
        Ok(())
    }
}

impl Default for LorenzConfig {
    fn default() -> Self {
        Self {
            parameters: LorenzParameters::default(),
            initial_state: LorenzState::DEFAULT_INITIAL,
            step_size: Self::DEFAULT_STEP_SIZE,
            num_steps: Self::DEFAULT_NUM_STEPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = LorenzConfig::default();
        assert_eq!(c.parameters, LorenzParameters::new(28.0));
        assert_eq!(c.initial_state, LorenzState::new(7.5, 22.5, 35.0));
        assert_eq!(c.step_size, 0.01);
        assert_eq!(c.num_steps, 10_000);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let c = LorenzConfig::default()
            .with_rho(14.0)
            .with_step_size(0.005)
            .with_num_steps(20)
            .with_initial_state(LorenzState::ORIGIN);
        assert_eq!(c.parameters.rho, 14.0);
        assert_eq!(c.parameters.sigma, 10.0);
        assert_eq!(c.step_size, 0.005);
        assert_eq!(c.num_steps, 20);
        assert_eq!(c.initial_state, LorenzState::ORIGIN);
    }

    #[test]
    fn test_rejects_bad_step_size() {
        for step in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let c = LorenzConfig::default().with_step_size(step);
            assert!(matches!(c.validate(), Err(LorenzError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let c = LorenzConfig::default().with_rho(99.0).with_num_steps(3);
        let bytes = rmp_serde::to_vec(&c).unwrap();
        let restored: LorenzConfig = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(c, restored);
    }
}
