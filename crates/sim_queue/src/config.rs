//! Queue and rate-scenario configuration.

use serde::{Deserialize, Serialize};

use crate::record::{DEFAULT_TRACE, QueueRecord};

/// Input records for a queue trace run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QueueConfig {
    /// Customers in arrival order.
    pub records: Vec<QueueRecord>,
}

impl QueueConfig {
    /// Create a config from the given records.
    #[must_use]
    pub fn new(records: impl Into<Vec<QueueRecord>>) -> Self {
        Self {
            records: records.into(),
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TRACE)
    }
}

/// Baseline M/M/1 rates and the factor applied to both in the scaled scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RateConfig {
    /// Baseline arrival rate (lambda).
    pub arrival_rate: f64,
    /// Baseline service rate (mu).
    pub service_rate: f64,
    /// Multiplier applied to both rates for the updated scenario.
    pub scale_factor: f64,
}

impl RateConfig {
    /// Override the baseline rates.
    #[must_use]
    pub fn with_rates(mut self, arrival_rate: f64, service_rate: f64) -> Self {
        self.arrival_rate = arrival_rate;
        self.service_rate = service_rate;
        self
    }

    /// Override the scale factor.
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            arrival_rate: 0.5,
            service_rate: 1.0,
            scale_factor: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_config_defaults_to_builtin_trace() {
        let c = QueueConfig::default();
        assert_eq!(c.records.len(), 15);
        assert_eq!(c.records[..], DEFAULT_TRACE[..]);
    }

    #[test]
    fn test_rate_config_defaults() {
        let c = RateConfig::default();
        assert_eq!(c.arrival_rate, 0.5);
        assert_eq!(c.service_rate, 1.0);
        assert_eq!(c.scale_factor, 2.0);
    }

    #[test]
    fn test_queue_config_serialization_roundtrip() {
        let c = QueueConfig::new(vec![QueueRecord::new(1.0, 2.0)]);
        let bytes = rmp_serde::to_vec(&c).unwrap();
        let restored: QueueConfig = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(c, restored);
    }
}
