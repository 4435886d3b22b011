use crate::report::{ensure_parent, Report, ReportSink};
use anyhow::Context;
use ecotravel::model::EvaluationRecord;
use std::path::{Path, PathBuf};

pub const RESULTS_FILENAME: &str = "travel_analysis_results.csv";

/// Dumps the results table as CSV; absent values become empty cells.
pub struct CsvTableSink {
    path: PathBuf,
}

impl CsvTableSink {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            path: output_dir.join(RESULTS_FILENAME),
        }
    }
}

impl ReportSink for CsvTableSink {
    fn name(&self) -> &'static str {
        "results table"
    }

    fn publish(&self, report: &Report<'_>) -> anyhow::Result<PathBuf> {
        ensure_parent(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .with_context(|| format!("creating {}", self.path.display()))?;

        // header is written explicitly so an empty table still has columns
        writer.write_record(EvaluationRecord::COLUMNS)?;
        for record in &report.output.records {
            writer
                .serialize(record)
                .with_context(|| format!("writing row {} / {}", record.scenario, record.route))?;
        }
        writer.flush()?;
        Ok(self.path.clone())
    }
}
