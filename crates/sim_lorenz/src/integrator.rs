//! Explicit Euler integration of the Lorenz vector field.
//!
//! Each step computes the derivative at the current state and advances every
//! coordinate by `derivative * step_size`. The method is first order; for a
//! chaotic system the result diverges from the exact solution exponentially
//! with the step count, so runs are reproducible only for identical inputs.

use glam::DVec3;
use tracing::{debug, info};

use crate::config::LorenzConfig;
use crate::error::LorenzError;
use crate::state::{LorenzParameters, LorenzState};
use crate::trajectory::LorenzTrajectory;

/// The Lorenz vector field at `state`.
///
/// ```text
/// x' = sigma * (y - x)
/// y' = rho * x - y - x * z
/// z' = x * y - beta * z
/// ```
#[must_use]
pub fn derivative(parameters: &LorenzParameters, state: LorenzState) -> DVec3 {
    let (x, y, z) = (state.x(), state.y(), state.z());
    DVec3::new(
        parameters.sigma * (y - x),
        parameters.rho * x - y - x * z,
        x * y - parameters.beta * z,
    )
}

/// Advance `state` by one explicit Euler step of size `step_size`.
#[must_use]
pub fn euler_step(parameters: &LorenzParameters, state: LorenzState, step_size: f64) -> LorenzState {
    LorenzState::from(state.as_vec() + derivative(parameters, state) * step_size)
}

/// Integrate `num_steps` Euler steps from `initial_state`.
///
/// The returned trajectory has `num_steps + 1` states. Overflow to infinity
/// or NaN is carried through unchanged.
///
/// # Errors
///
/// Returns [`LorenzError::InvalidInput`] if `step_size` is not finite and
/// strictly positive.
pub fn generate(
    parameters: LorenzParameters,
    initial_state: LorenzState,
    step_size: f64,
    num_steps: usize,
) -> Result<LorenzTrajectory, LorenzError> {
    LorenzIntegrator::new(LorenzConfig {
        parameters,
        initial_state,
        step_size,
        num_steps,
    })
    .generate()
}

/// Runs the Euler loop for a fixed [`LorenzConfig`].
///
/// The integrator holds no state between calls; [`generate`](Self::generate)
/// can be called any number of times and returns bit-identical trajectories.
#[derive(Debug, Clone, Default)]
pub struct LorenzIntegrator {
    config: LorenzConfig,
}

impl LorenzIntegrator {
    /// Create an integrator for the given configuration.
    #[must_use]
    pub fn new(config: LorenzConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LorenzConfig {
        &self.config
    }

    /// Produce the trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`LorenzError::InvalidInput`] if the configuration fails
    /// [`LorenzConfig::validate`].
    pub fn generate(&self) -> Result<LorenzTrajectory, LorenzError> {
        self.config.validate()?;

        let LorenzConfig {
            parameters,
            initial_state,
            step_size,
            num_steps,
        } = self.config;

        info!(
            rho = parameters.rho,
            sigma = parameters.sigma,
            beta = parameters.beta,
            step_size,
            num_steps,
            "integrating lorenz system"
        );

        let mut trajectory = LorenzTrajectory::with_capacity(initial_state, num_steps + 1);
        let mut state = initial_state;
        let mut diverged = !state.is_finite();

        for step in 0..num_steps {
            state = euler_step(&parameters, state, step_size);
            trajectory.push(state);

            if !diverged && !state.is_finite() {
                diverged = true;
                debug!(step = step + 1, rho = parameters.rho, "state became non-finite");
            }
        }

        let last = trajectory.last();
        info!(
            states = trajectory.len(),
            x = last.x(),
            y = last.y(),
            z = last.z(),
            "lorenz trajectory complete"
        );

        Ok(trajectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_derivative_at_default_state() {
        let d = derivative(&LorenzParameters::new(28.0), LorenzState::DEFAULT_INITIAL);
        assert!(approx_eq(d.x, 150.0));
        assert!(approx_eq(d.y, -75.0));
        assert!(approx_eq(d.z, 75.405));
    }

    #[test]
    fn test_first_step_matches_formula() {
        let trajectory = generate(
            LorenzParameters::new(28.0),
            LorenzState::new(7.5, 22.5, 35.0),
            0.01,
            1,
        )
        .unwrap();
        assert_eq!(trajectory.len(), 2);

        let (x, y, z) = (7.5_f64, 22.5_f64, 35.0_f64);
        let expected = LorenzState::new(
            x + (10.0 * (y - x)) * 0.01,
            y + (28.0 * x - y - x * z) * 0.01,
            z + (x * y - 2.667 * z) * 0.01,
        );
        let s1 = trajectory.states()[1];
        assert_eq!(s1.x().to_bits(), expected.x().to_bits());
        assert_eq!(s1.y().to_bits(), expected.y().to_bits());
        assert_eq!(s1.z().to_bits(), expected.z().to_bits());

        assert!(approx_eq(s1.x(), 9.0));
        assert!(approx_eq(s1.y(), 21.75));
        assert!(approx_eq(s1.z(), 35.75405));
    }

    #[test]
    fn test_origin_is_fixed_point() {
        let config = LorenzConfig::default()
            .with_rho(1.0)
            .with_initial_state(LorenzState::ORIGIN)
            .with_num_steps(1_000);
        let trajectory = LorenzIntegrator::new(config).generate().unwrap();
        assert_eq!(trajectory.len(), 1_001);
        assert!(trajectory.iter().all(|s| *s == LorenzState::ORIGIN));
    }

    #[test]
    fn test_integrator_config() {
        let config = LorenzConfig::default().with_rho(14.0).with_num_steps(5);
        let integrator = LorenzIntegrator::new(config);
        assert_eq!(integrator.config(), &config);
        assert_eq!(integrator.generate().unwrap().len(), 6);
    }

    #[test]
    fn test_zero_steps_returns_initial_state() {
        let trajectory = LorenzIntegrator::new(LorenzConfig::default().with_num_steps(0))
            .generate()
            .unwrap();
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.initial(), LorenzState::DEFAULT_INITIAL);
    }

    #[test]
    fn test_default_run_length() {
        let trajectory = LorenzIntegrator::default().generate().unwrap();
        assert_eq!(trajectory.len(), 10_001);
        assert_eq!(trajectory.initial(), LorenzState::DEFAULT_INITIAL);
    }

    #[test]
    fn test_deterministic() {
        let integrator = LorenzIntegrator::new(LorenzConfig::default().with_num_steps(2_000));
        let a = integrator.generate().unwrap();
        let b = integrator.generate().unwrap();
        assert_eq!(a.len(), b.len());
        for (sa, sb) in a.iter().zip(b.iter()) {
            assert_eq!(sa.x().to_bits(), sb.x().to_bits());
            assert_eq!(sa.y().to_bits(), sb.y().to_bits());
            assert_eq!(sa.z().to_bits(), sb.z().to_bits());
        }
    }

    #[test]
    fn test_each_state_is_one_step_from_previous() {
        let config = LorenzConfig::default().with_num_steps(50);
        let trajectory = LorenzIntegrator::new(config).generate().unwrap();
        for pair in trajectory.states().windows(2) {
            let next = euler_step(&config.parameters, pair[0], config.step_size);
            assert_eq!(next, pair[1]);
        }
    }

    #[test]
    fn test_overflow_propagates_without_error() {
        let config = LorenzConfig::default().with_rho(1e300).with_num_steps(10);
        let trajectory = LorenzIntegrator::new(config).generate().unwrap();
        assert_eq!(trajectory.len(), 11);
        assert!(!trajectory.last().is_finite());
        assert!(trajectory.first_non_finite().is_some());
    }

    #[test]
    fn test_rejects_non_positive_step_size() {
        let err = generate(LorenzParameters::default(), LorenzState::ORIGIN, 0.0, 10).unwrap_err();
        assert!(matches!(err, LorenzError::InvalidInput(_)));
    }
}
