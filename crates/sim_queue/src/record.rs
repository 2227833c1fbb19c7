//! Queue input records.

use serde::{Deserialize, Serialize};

/// One customer: when they arrive and how long their service takes.
///
/// Records are expected in arrival order; nothing reorders them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct QueueRecord {
    pub arrival_time: f64,
    pub service_duration: f64,
}

impl QueueRecord {
    #[must_use]
    pub const fn new(arrival_time: f64, service_duration: f64) -> Self {
        Self {
            arrival_time,
            service_duration,
        }
    }
}

impl From<(f64, f64)> for QueueRecord {
    fn from((arrival_time, service_duration): (f64, f64)) -> Self {
        Self::new(arrival_time, service_duration)
    }
}

/// The fixed fifteen-customer trace analysed by default.
pub const DEFAULT_TRACE: [QueueRecord; 15] = [
    QueueRecord::new(1.0, 2.22),
    QueueRecord::new(2.0, 1.76),
    QueueRecord::new(3.0, 2.13),
    QueueRecord::new(4.0, 0.14),
    QueueRecord::new(5.0, 0.76),
    QueueRecord::new(6.0, 0.70),
    QueueRecord::new(7.0, 0.47),
    QueueRecord::new(8.0, 0.22),
    QueueRecord::new(9.0, 0.18),
    QueueRecord::new(10.0, 2.41),
    QueueRecord::new(11.0, 0.41),
    QueueRecord::new(12.0, 0.46),
    QueueRecord::new(13.0, 1.37),
    QueueRecord::new(14.0, 0.27),
    QueueRecord::new(15.0, 0.27),
];
