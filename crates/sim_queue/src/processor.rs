//! Sequential FCFS single-server recurrence.
//!
//! Customer 0 starts service on arrival. Every later customer starts at the
//! later of their own arrival and the previous departure:
//!
//! ```text
//! start[i]     = max(departure[i-1], arrival[i])
//! departure[i] = start[i] + duration[i]
//! waiting[i]   = max(0, departure[i] - arrival[i] - duration[i])
//! ```
//!
//! The two count series are evaluated at each arrival instant. Arrivals are
//! counted over the whole record set, departures only over customers
//! `0..=i`, the ones whose departure has already been computed.

use tracing::{debug, info};

use crate::config::QueueConfig;
use crate::error::QueueError;
use crate::record::QueueRecord;
use crate::trace::{QueueReport, QueueTrace, SummaryMetrics};

/// Process `records` into a trace and its summary.
///
/// # Errors
///
/// - [`QueueError::InvalidInput`] if `records` is empty.
/// - [`QueueError::DivisionByZero`] if the last departure or last arrival
///   time is zero.
pub fn process(records: &[QueueRecord]) -> Result<QueueReport, QueueError> {
    if records.is_empty() {
        return Err(QueueError::InvalidInput(
            "queue trace needs at least one record".into(),
        ));
    }

    let n = records.len();
    info!(records = n, "processing queue trace");

    let arrival_times: Vec<f64> = records.iter().map(|r| r.arrival_time).collect();
    let service_durations: Vec<f64> = records.iter().map(|r| r.service_duration).collect();

    let mut trace = QueueTrace {
        service_start_times: Vec::with_capacity(n),
        departure_times: Vec::with_capacity(n),
        waiting_times: Vec::with_capacity(n),
        customers_in_system: Vec::with_capacity(n),
        customers_in_queue: Vec::with_capacity(n),
        arrival_times,
        service_durations,
    };

    for i in 0..n {
        let arrival = trace.arrival_times[i];
        let duration = trace.service_durations[i];

        let start = match i {
            0 => arrival,
            _ => trace.departure_times[i - 1].max(arrival),
        };
        let departure = start + duration;
        trace.service_start_times.push(start);
        trace.departure_times.push(departure);
        trace.waiting_times.push((departure - arrival - duration).max(0.0));

        let (in_system, in_queue) = match i {
            0 => (1, 0),
            _ => {
                let arrived = count_at_or_before(&trace.arrival_times, arrival);
                let departed = count_at_or_before(&trace.departure_times, arrival);
                (arrived - departed, i as i64 - departed)
            }
        };
        trace.customers_in_system.push(in_system);
        trace.customers_in_queue.push(in_queue);

        debug!(
            customer = i,
            arrival,
            start,
            departure,
            in_system,
            in_queue,
            "customer processed"
        );
    }

    let summary = SummaryMetrics::from_trace(&trace)?;
    Ok(QueueReport { trace, summary })
}

/// Number of entries in `times` that are `<= instant`.
fn count_at_or_before(times: &[f64], instant: f64) -> i64 {
    times.iter().filter(|&&t| t <= instant).count() as i64
}

/// Runs [`process`] over a configured record list.
#[derive(Debug, Clone, Default)]
pub struct QueueTraceProcessor {
    config: QueueConfig,
}

impl QueueTraceProcessor {
    /// Create a processor for the given records.
    #[must_use]
    pub fn new(config: QueueConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Process the configured records.
    ///
    /// # Errors
    ///
    /// See [`process`].
    pub fn process(&self) -> Result<QueueReport, QueueError> {
        process(&self.config.records)
    }
}
