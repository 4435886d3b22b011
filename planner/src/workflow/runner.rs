use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use ecotravel::{run_pipeline, PipelineOutput};
use log::info;

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<PipelineOutput> {
        let trip = &self.config.trip;
        info!(
            "Analysing {} ({:.0} km great-circle)",
            trip.label(),
            trip.great_circle_km()
        );

        let output = run_pipeline(&self.config.tables, &self.config.findings)
            .with_context(|| format!("running travel analysis for {}", trip.label()))?;

        info!(
            "{} routes, {} rows ({} feasible), {} findings",
            output.routes.len(),
            output.records.len(),
            output.feasible_count(),
            output.findings.len()
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecotravel::model::{Segment, TransportMode};

    #[test]
    fn runner_executes_workflow() {
        let runner = Runner::new(WorkflowConfig::default());
        let output = runner.execute().unwrap();
        assert_eq!(output.routes.len(), 3);
        assert_eq!(output.records.len(), 18);
    }

    #[test]
    fn runner_surfaces_configuration_errors() {
        let mut config = WorkflowConfig::default();
        config.tables.routes[0]
            .segments
            .push(Segment::new(TransportMode::Car, -5.0, "detour"));
        let err = Runner::new(config).execute().unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("running travel analysis for Grenoble to Abuja"));
        assert!(message.contains("configuration error"));
    }
}
