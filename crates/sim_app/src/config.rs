//! Run configuration for the simulation binary.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use sim_lorenz::LorenzConfig;
use sim_queue::{QueueConfig, RateConfig};

/// Inputs for all three computations.
///
/// Every section is optional in a config file; missing sections and fields
/// fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub lorenz: LorenzConfig,
    pub queue: QueueConfig,
    pub rates: RateConfig,
}

impl SimulationConfig {
    /// Parse a config from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse simulation config")
    }

    /// Load a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in config file {}", path.display()))
    }

    /// Override the Lorenz control parameter.
    #[must_use]
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.lorenz = self.lorenz.with_rho(rho);
        self
    }

    /// Override the Lorenz step count.
    #[must_use]
    pub fn with_num_steps(mut self, num_steps: usize) -> Self {
        self.lorenz = self.lorenz.with_num_steps(num_steps);
        self
    }
}

#[cfg(test)]
mod tests {
    use sim_lorenz::LorenzState;
    use sim_queue::QueueRecord;

    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = SimulationConfig::from_json("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.queue.records.len(), 15);
    }

    #[test]
    fn test_partial_json() {
        let config = SimulationConfig::from_json(
            r#"{
                "lorenz": { "parameters": { "rho": 14.0 }, "num_steps": 50 },
                "queue": { "records": [ { "arrival_time": 1.0, "service_duration": 2.0 } ] },
                "rates": { "scale_factor": 3.0 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.lorenz.parameters.rho, 14.0);
        assert_eq!(config.lorenz.parameters.sigma, 10.0);
        assert_eq!(config.lorenz.num_steps, 50);
        assert_eq!(config.lorenz.step_size, 0.01);
        assert_eq!(config.lorenz.initial_state, LorenzState::DEFAULT_INITIAL);
        assert_eq!(config.queue.records, vec![QueueRecord::new(1.0, 2.0)]);
        assert_eq!(config.rates.arrival_rate, 0.5);
        assert_eq!(config.rates.scale_factor, 3.0);
    }

    #[test]
    fn test_initial_state_as_array() {
        let config =
            SimulationConfig::from_json(r#"{ "lorenz": { "initial_state": [0.0, 1.0, 2.0] } }"#)
                .unwrap();
        assert_eq!(config.lorenz.initial_state, LorenzState::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_negative_steps_rejected() {
        assert!(SimulationConfig::from_json(r#"{ "lorenz": { "num_steps": -1 } }"#).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = SimulationConfig::default().with_rho(99.0).with_num_steps(7);
        assert_eq!(config.lorenz.parameters.rho, 99.0);
        assert_eq!(config.lorenz.num_steps, 7);
    }
}
