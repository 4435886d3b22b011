//! Report sinks. Each sink reads the finished pipeline output and writes one
//! artifact; a failing sink is logged and skipped so the others still run.

pub mod charts;
pub mod findings;
pub mod slides;
pub mod table;

use crate::workflow::config::TripEndpoints;
use ecotravel::PipelineOutput;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

pub use charts::ChartDataSink;
pub use findings::FindingsTextSink;
pub use slides::SlideOutlineSink;
pub use table::CsvTableSink;

pub const VISUALIZATION_DIR: &str = "visualizations";
pub const PRESENTATION_DIR: &str = "presentation";

/// Read-only view handed to every sink.
pub struct Report<'a> {
    pub output: &'a PipelineOutput,
    pub trip: &'a TripEndpoints,
}

pub trait ReportSink {
    fn name(&self) -> &'static str;
    /// Writes the artifact and returns where it landed.
    fn publish(&self, report: &Report<'_>) -> anyhow::Result<PathBuf>;
}

#[derive(Debug, Default)]
pub struct PublishSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(&'static str, String)>,
}

impl PublishSummary {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

pub fn default_sinks(output_dir: &Path) -> Vec<Box<dyn ReportSink>> {
    vec![
        Box::new(CsvTableSink::new(output_dir)),
        Box::new(FindingsTextSink::new(output_dir)),
        Box::new(ChartDataSink::new(output_dir.join(VISUALIZATION_DIR))),
        Box::new(SlideOutlineSink::new(output_dir.join(PRESENTATION_DIR))),
    ]
}

pub fn publish_all(sinks: &[Box<dyn ReportSink>], report: &Report<'_>) -> PublishSummary {
    let mut summary = PublishSummary::default();
    for sink in sinks {
        match sink.publish(report) {
            Ok(path) => {
                info!("{} written to {}", sink.name(), path.display());
                summary.written.push(path);
            }
            Err(err) => {
                error!("{} failed: {:#}", sink.name(), err);
                summary.failed.push((sink.name(), format!("{err:#}")));
            }
        }
    }
    summary
}

pub(crate) fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
