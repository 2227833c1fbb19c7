//! # sim_queue
//!
//! Single-server first-come-first-served queue analysis.
//!
//! This crate provides:
//!
//! - [`record`]: [`QueueRecord`] input pairs and the built-in trace.
//! - [`trace`]: [`QueueTrace`], [`SummaryMetrics`] and [`QueueReport`].
//! - [`processor`]: the sequential recurrence that turns records into a trace.
//! - [`rates`]: closed-form utilization/throughput/Little's-Law helpers and
//!   the rate-scaling comparison.
//! - [`config`]: run inputs with their defaults.
//! - [`error`]: [`QueueError`].

pub mod config;
pub mod error;
pub mod processor;
pub mod rates;
pub mod record;
pub mod trace;

pub use config::{QueueConfig, RateConfig};
pub use error::QueueError;
pub use processor::{QueueTraceProcessor, process};
pub use rates::{RateComparison, RateMetrics};
pub use record::{DEFAULT_TRACE, QueueRecord};
pub use trace::{QueueReport, QueueTrace, SummaryMetrics, TraceRow};
