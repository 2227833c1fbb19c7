//! Derived per-customer series and summary scalars.

use serde::Serialize;
use tracing::info;

use crate::error::QueueError;

/// Per-customer series derived from a list of [`QueueRecord`](crate::QueueRecord)s.
///
/// All vectors have one entry per input record, in input order.
///
/// `waiting_times` reproduces the formula
/// `max(0, departure - arrival - service_duration)`. That is the time spent
/// waiting before service starts, clamped to be non-negative, not a
/// time-in-system figure.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct QueueTrace {
    pub arrival_times: Vec<f64>,
    pub service_durations: Vec<f64>,
    pub service_start_times: Vec<f64>,
    pub departure_times: Vec<f64>,
    pub waiting_times: Vec<f64>,
    pub customers_in_system: Vec<i64>,
    pub customers_in_queue: Vec<i64>,
}

/// One customer's line of a [`QueueTrace`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TraceRow {
    pub arrival_time: f64,
    pub service_duration: f64,
    pub service_start_time: f64,
    pub departure_time: f64,
    pub waiting_time: f64,
    pub customers_in_system: i64,
    pub customers_in_queue: i64,
}

impl QueueTrace {
    /// Number of customers in the trace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arrival_times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrival_times.is_empty()
    }

    /// The `i`-th customer's values, or `None` if out of range.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<TraceRow> {
        if i >= self.len() {
            return None;
        }
        Some(TraceRow {
            arrival_time: self.arrival_times[i],
            service_duration: self.service_durations[i],
            service_start_time: self.service_start_times[i],
            departure_time: self.departure_times[i],
            waiting_time: self.waiting_times[i],
            customers_in_system: self.customers_in_system[i],
            customers_in_queue: self.customers_in_queue[i],
        })
    }

    /// Iterate over all rows in input order.
    pub fn rows(&self) -> impl Iterator<Item = TraceRow> + '_ {
        (0..self.len()).filter_map(|i| self.row(i))
    }

    /// Sum of the waiting-time series, accumulated in input order.
    #[must_use]
    pub fn total_waiting_time(&self) -> f64 {
        self.waiting_times.iter().fold(0.0, |acc, w| acc + w)
    }
}

/// Scalars derived once from a completed [`QueueTrace`].
///
/// Both are the summed waiting times divided by a time span: the last
/// departure for `average_queue_length`, the last arrival for
/// `average_queue_length_per_arrival`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SummaryMetrics {
    pub average_queue_length: f64,
    pub average_queue_length_per_arrival: f64,
}

impl SummaryMetrics {
    /// Compute the summary for a finished trace.
    ///
    /// # Errors
    ///
    /// - [`QueueError::InvalidInput`] if the trace is empty.
    /// - [`QueueError::DivisionByZero`] if the last departure time or the last
    ///   arrival time is zero.
    pub fn from_trace(trace: &QueueTrace) -> Result<Self, QueueError> {
        let (Some(&total_time), Some(&last_arrival)) =
            (trace.departure_times.last(), trace.arrival_times.last())
        else {
            return Err(QueueError::InvalidInput("queue trace is empty".into()));
        };

        if total_time == 0.0 {
            return Err(QueueError::DivisionByZero("total time"));
        }
        if last_arrival == 0.0 {
            return Err(QueueError::DivisionByZero("last arrival time"));
        }

        let total_waiting = trace.total_waiting_time();
        let summary = Self {
            average_queue_length: total_waiting / total_time,
            average_queue_length_per_arrival: total_waiting / last_arrival,
        };

        info!(
            total_time,
            total_waiting,
            l_q = summary.average_queue_length,
            l_q_arrival = summary.average_queue_length_per_arrival,
            "queue summary computed"
        );

        Ok(summary)
    }
}

/// A processed trace together with its summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueueReport {
    pub trace: QueueTrace,
    pub summary: SummaryMetrics,
}
