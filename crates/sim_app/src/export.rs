//! Structured output for external plotting tools.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use uuid::Uuid;

use sim_lorenz::LorenzTrajectory;
use sim_queue::{QueueReport, RateComparison};

/// Coordinate sequences for a 3D line plot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LorenzSeries {
    pub rho: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl LorenzSeries {
    #[must_use]
    pub fn new(rho: f64, trajectory: &LorenzTrajectory) -> Self {
        Self {
            rho,
            x: trajectory.xs(),
            y: trajectory.ys(),
            z: trajectory.zs(),
        }
    }
}

/// One labeled original/updated pair for a grouped bar chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RateBar {
    pub label: &'static str,
    pub original: f64,
    pub updated: f64,
}

/// Everything a run produced, tagged with a run identifier.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutput {
    pub run_id: Uuid,
    pub lorenz: LorenzSeries,
    pub queue: QueueReport,
    pub rates: RateComparison,
    pub rate_bars: Vec<RateBar>,
}

impl SimulationOutput {
    #[must_use]
    pub fn new(
        run_id: Uuid,
        lorenz: LorenzSeries,
        queue: QueueReport,
        rates: RateComparison,
    ) -> Self {
        let rate_bars = rates
            .pairs()
            .into_iter()
            .map(|(label, original, updated)| RateBar {
                label,
                original,
                updated,
            })
            .collect();
        Self {
            run_id,
            lorenz,
            queue,
            rates,
            rate_bars,
        }
    }

    /// Write the output as pretty-printed JSON.
    ///
    /// Non-finite trajectory values are written as `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create export file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("failed to write export file {}", path.display()))?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sim_lorenz::{LorenzConfig, LorenzIntegrator};
    use sim_queue::{QueueTraceProcessor, RateConfig};

    use super::*;

    fn sample_output() -> SimulationOutput {
        let trajectory = LorenzIntegrator::new(LorenzConfig::default().with_num_steps(3))
            .generate()
            .unwrap();
        SimulationOutput::new(
            Uuid::new_v4(),
            LorenzSeries::new(28.0, &trajectory),
            QueueTraceProcessor::default().process().unwrap(),
            RateComparison::compute(&RateConfig::default()).unwrap(),
        )
    }

    #[test]
    fn test_lorenz_series_lengths() {
        let output = sample_output();
        assert_eq!(output.lorenz.x.len(), 4);
        assert_eq!(output.lorenz.y.len(), 4);
        assert_eq!(output.lorenz.z.len(), 4);
        assert_eq!(output.lorenz.x[0], 7.5);
    }

    #[test]
    fn test_rate_bars() {
        let output = sample_output();
        assert_eq!(output.rate_bars.len(), 4);
        assert_eq!(output.rate_bars[1].label, "Throughput (X)");
        assert_eq!(output.rate_bars[1].original, 0.5);
        assert_eq!(output.rate_bars[1].updated, 1.0);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample_output()).unwrap();
        assert_eq!(value["queue"]["trace"]["customers_in_queue"][1], 1);
        assert_eq!(value["queue"]["trace"]["service_start_times"][0], 1.0);
        assert_eq!(value["rates"]["updated"]["utilization"], 0.5);
        assert!(value["run_id"].is_string());
    }

    #[test]
    fn test_write_json() {
        let path = std::env::temp_dir().join(format!("sim_app_export_{}.json", Uuid::new_v4()));
        sample_output().write_json(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["lorenz"]["rho"], 28.0);
    }
}
