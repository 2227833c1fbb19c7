//! Rate formulas and the proportional rate-scaling scenario.
//!
//! `lambda` is the arrival rate and `mu` the service rate. The M/M/1 closed
//! forms are only used for the baseline; the scaled scenario reuses the
//! baseline mean time in system through Little's Law.

use serde::Serialize;
use tracing::info;

use crate::config::RateConfig;
use crate::error::QueueError;

/// Server utilization `lambda / mu`.
///
/// # Errors
///
/// Returns [`QueueError::DivisionByZero`] if `mu` is zero.
pub fn utilization_ratio(lambda: f64, mu: f64) -> Result<f64, QueueError> {
    if mu == 0.0 {
        return Err(QueueError::DivisionByZero("service rate"));
    }
    Ok(lambda / mu)
}

/// Throughput of a single server: the smaller of the two rates.
#[must_use]
pub fn system_throughput(lambda: f64, mu: f64) -> f64 {
    lambda.min(mu)
}

/// Little's Law: `E[N] = lambda * E[T]`. `mu` does not enter the formula.
#[must_use]
pub fn mean_number_in_system(lambda: f64, _mu: f64, expected_time: f64) -> f64 {
    lambda * expected_time
}

/// Little's Law solved for time: `E[T] = E[N] / lambda`.
///
/// # Errors
///
/// Returns [`QueueError::DivisionByZero`] if `lambda` is zero.
pub fn mean_time_in_system(expected_number: f64, lambda: f64) -> Result<f64, QueueError> {
    if lambda == 0.0 {
        return Err(QueueError::DivisionByZero("arrival rate"));
    }
    Ok(expected_number / lambda)
}

/// M/M/1 closed form `E[N] = 1 / (mu - lambda)`.
///
/// # Errors
///
/// - [`QueueError::InvalidInput`] if either rate is not finite, or `mu < lambda`.
/// - [`QueueError::DivisionByZero`] if `mu == lambda`.
pub fn mm1_mean_number_in_system(lambda: f64, mu: f64) -> Result<f64, QueueError> {
    if !(lambda.is_finite() && mu.is_finite()) {
        return Err(QueueError::InvalidInput(format!(
            "rates must be finite, got lambda={lambda} mu={mu}"
        )));
    }
    if mu == lambda {
        return Err(QueueError::DivisionByZero("mu - lambda"));
    }
    if mu < lambda {
        return Err(QueueError::InvalidInput(format!(
            "saturated system: mu={mu} < lambda={lambda}"
        )));
    }
    Ok(1.0 / (mu - lambda))
}

/// M/M/1 mean time in system, `E[N] / lambda` with the closed-form `E[N]`.
///
/// # Errors
///
/// Same as [`mm1_mean_number_in_system`], plus
/// [`QueueError::DivisionByZero`] if `lambda` is zero.
pub fn mm1_mean_time_in_system(lambda: f64, mu: f64) -> Result<f64, QueueError> {
    mean_time_in_system(mm1_mean_number_in_system(lambda, mu)?, lambda)
}

/// The four headline figures for one scenario.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RateMetrics {
    pub arrival_rate: f64,
    pub service_rate: f64,
    /// Utilization (rho).
    pub utilization: f64,
    /// Throughput (X).
    pub throughput: f64,
    /// Mean number in system (E[N]).
    pub mean_number_in_system: f64,
    /// Mean time in system (E[T]).
    pub mean_time_in_system: f64,
}

/// Baseline versus both-rates-scaled scenario.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RateComparison {
    pub original: RateMetrics,
    pub updated: RateMetrics,
}

impl RateComparison {
    /// Labels for [`pairs`](Self::pairs), in order.
    pub const LABELS: [&'static str; 4] = [
        "Utilization (ρ)",
        "Throughput (X)",
        "Mean number in system (E[N])",
        "Mean time in system (E[T])",
    ];

    /// Evaluate both scenarios.
    ///
    /// # Errors
    ///
    /// - [`QueueError::InvalidInput`] if the scale factor is not finite and
    ///   positive, or the baseline is saturated.
    /// - [`QueueError::DivisionByZero`] if the baseline has `mu == lambda` or
    ///   a zero rate.
    pub fn compute(config: &RateConfig) -> Result<Self, QueueError> {
        let RateConfig {
            arrival_rate: lambda,
            service_rate: mu,
            scale_factor: k,
        } = *config;

        if !(k.is_finite() && k > 0.0) {
            return Err(QueueError::InvalidInput(format!(
                "scale factor must be finite and > 0, got {k}"
            )));
        }

        let original_number = mm1_mean_number_in_system(lambda, mu)?;
        let original = RateMetrics {
            arrival_rate: lambda,
            service_rate: mu,
            utilization: utilization_ratio(lambda, mu)?,
            throughput: system_throughput(lambda, mu),
            mean_number_in_system: original_number,
            mean_time_in_system: mean_time_in_system(original_number, lambda)?,
        };

        let (lambda_k, mu_k) = (k * lambda, k * mu);
        let updated_number = mean_number_in_system(lambda_k, mu_k, original.mean_time_in_system);
        let updated = RateMetrics {
            arrival_rate: lambda_k,
            service_rate: mu_k,
            utilization: utilization_ratio(lambda_k, mu_k)?,
            throughput: system_throughput(lambda_k, mu_k),
            mean_number_in_system: updated_number,
            mean_time_in_system: mean_time_in_system(updated_number, lambda_k)?,
        };

        info!(
            lambda,
            mu,
            scale_factor = k,
            original_utilization = original.utilization,
            updated_throughput = updated.throughput,
            "rate comparison computed"
        );

        Ok(Self { original, updated })
    }

    /// `(label, original, updated)` for each of the four figures.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, f64, f64); 4] {
        let (o, u) = (&self.original, &self.updated);
        [
            (Self::LABELS[0], o.utilization, u.utilization),
            (Self::LABELS[1], o.throughput, u.throughput),
            (
                Self::LABELS[2],
                o.mean_number_in_system,
                u.mean_number_in_system,
            ),
            (Self::LABELS[3], o.mean_time_in_system, u.mean_time_in_system),
        ]
    }
}
