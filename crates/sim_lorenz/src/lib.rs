//! # sim_lorenz
//!
//! Fixed-step integration of the Lorenz system.
//!
//! The crate is split into:
//!
//! - [`state`]: [`LorenzState`] and [`LorenzParameters`], the phase-space
//!   point and the vector-field constants.
//! - [`config`]: [`LorenzConfig`], the full set of run inputs with their
//!   conventional defaults.
//! - [`integrator`]: the derivative function, a single explicit Euler step,
//!   and [`LorenzIntegrator`].
//! - [`trajectory`]: [`LorenzTrajectory`], the ordered output of a run.
//! - [`error`]: [`LorenzError`].
//!
//! ## Usage
//!
//! ```rust
//! use sim_lorenz::{DVec3, LorenzConfig, LorenzIntegrator, LorenzState, derivative};
//!
//! let config = LorenzConfig::default().with_rho(28.0).with_num_steps(100);
//! let trajectory = LorenzIntegrator::new(config).generate().unwrap();
//! assert_eq!(trajectory.len(), 101);
//!
//! let d: DVec3 = derivative(&config.parameters, LorenzState::ORIGIN);
//! assert_eq!(d, DVec3::ZERO);
//! ```

pub mod config;
pub mod error;
pub mod integrator;
pub mod state;
pub mod trajectory;

// Re-export the vector type used for derivatives.
pub use glam::DVec3;

pub use config::LorenzConfig;
pub use error::LorenzError;
pub use integrator::{LorenzIntegrator, derivative, euler_step, generate};
pub use state::{LorenzParameters, LorenzState};
pub use trajectory::LorenzTrajectory;
