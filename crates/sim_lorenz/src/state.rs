//! Phase-space point and vector-field parameters.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A point `(x, y, z)` in the Lorenz phase space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct LorenzState(DVec3);

impl LorenzState {
    /// The origin, an equilibrium of the system for every parameter set.
    pub const ORIGIN: Self = Self(DVec3::ZERO);

    /// The conventional starting point `(7.5, 22.5, 35)`.
    pub const DEFAULT_INITIAL: Self = Self(DVec3::new(7.5, 22.5, 35.0));

    /// Create a state from its three coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// The state as a vector.
    #[must_use]
    pub fn as_vec(&self) -> DVec3 {
        self.0
    }

    /// Returns `true` if all three coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for LorenzState {
    fn default() -> Self {
        Self::DEFAULT_INITIAL
    }
}

impl From<DVec3> for LorenzState {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<LorenzState> for DVec3 {
    fn from(s: LorenzState) -> Self {
        s.0
    }
}

/// Constants of the Lorenz vector field.
///
/// `rho` is the control parameter varied between runs. `sigma` and `beta`
/// default to the classic chaotic-regime values; note `beta` is `2.667`,
/// not `8/3`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LorenzParameters {
    pub rho: f64,
    pub sigma: f64,
    pub beta: f64,
}

impl LorenzParameters {
    pub const DEFAULT_RHO: f64 = 28.0;
    pub const DEFAULT_SIGMA: f64 = 10.0;
    pub const DEFAULT_BETA: f64 = 2.667;

    /// Parameters with the given `rho` and default `sigma`/`beta`.
    #[must_use]
    pub fn new(rho: f64) -> Self {
        Self {
            rho,
            sigma: Self::DEFAULT_SIGMA,
            beta: Self::DEFAULT_BETA,
        }
    }

    /// Override `sigma`.
    #[must_use]
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Override `beta`.
    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }
}

impl Default for LorenzParameters {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RHO)
    }
}
