//! Text rendering of simulation results.
//!
//! Everything here consumes structured output and returns a `String`; the
//! caller decides where it goes.

use sim_lorenz::LorenzTrajectory;
use sim_queue::{QueueReport, RateComparison};

const TABLE_HEADINGS: [(&str, usize); 7] = [
    ("Arrival Time", 12),
    ("Service Duration", 16),
    ("Service Start Time", 18),
    ("Departure Time", 15),
    ("Waiting Time", 13),
    ("Customers in System", 22),
    ("Customers in Queue", 22),
];

/// One-line description of a trajectory.
#[must_use]
pub fn render_lorenz_summary(rho: f64, trajectory: &LorenzTrajectory) -> String {
    let last = trajectory.last();
    let mut out = format!(
        "Lorenz attractor for rho = {rho}: {} states, final state ({:.4}, {:.4}, {:.4})",
        trajectory.len(),
        last.x(),
        last.y(),
        last.z()
    );
    if let Some(step) = trajectory.first_non_finite() {
        out.push_str(&format!(", diverged at step {step}"));
    }
    out
}

/// The `L_q` lines followed by the per-customer table.
///
/// Every numeric column except the arrival time is printed at two decimals,
/// the customer counts included.
#[must_use]
pub fn render_queue_report(report: &QueueReport, with_table: bool) -> String {
    let mut out = format!(
        "L_q: {}\nL_q(A): {}\n",
        report.summary.average_queue_length, report.summary.average_queue_length_per_arrival
    );

    if !with_table {
        return out;
    }

    let header: String = TABLE_HEADINGS
        .iter()
        .map(|&(title, width)| format!(" {title:<width$} |"))
        .collect();
    let header = format!("|{header}");
    out.push('\n');
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.chars().count()));
    out.push('\n');

    let w = TABLE_HEADINGS.map(|(_, width)| width);
    for row in report.trace.rows() {
        out.push_str(&format!(
            "| {:<w0$} | {:<w1$.2} | {:<w2$.2} | {:<w3$.2} | {:<w4$.2} | {:<w5$.2} | {:<w6$.2} |\n",
            row.arrival_time,
            row.service_duration,
            row.service_start_time,
            row.departure_time,
            row.waiting_time,
            row.customers_in_system as f64,
            row.customers_in_queue as f64,
            w0 = w[0],
            w1 = w[1],
            w2 = w[2],
            w3 = w[3],
            w4 = w[4],
            w5 = w[5],
            w6 = w[6],
        ));
    }
    out
}

/// Original versus updated values for each rate figure.
#[must_use]
pub fn render_rate_comparison(comparison: &RateComparison) -> String {
    let mut out = String::from("Effect of increasing arrival and service rates\n");
    out.push_str(&format!("{:<30} {:>10} {:>10}\n", "", "Original", "Updated"));
    for (label, original, updated) in comparison.pairs() {
        out.push_str(&format!("{label:<30} {original:>10.4} {updated:>10.4}\n"));
    }
    out
}
