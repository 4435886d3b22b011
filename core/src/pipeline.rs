use crate::model::{EvaluationRecord, MeasuredRoute, TravelTables};
use crate::prelude::{AnalysisStage, StageResult};
use crate::processing::{FindingsSettings, FindingsStage, RouteMetricsStage, ScenarioStage};
use serde::{Deserialize, Serialize};

/// Everything a run produces; report sinks only read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub routes: Vec<MeasuredRoute>,
    pub records: Vec<EvaluationRecord>,
    pub findings: Vec<String>,
}

impl PipelineOutput {
    pub fn feasible_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_feasible()).count()
    }
}

/// Validates the tables, then runs aggregation, evaluation and findings.
pub fn run_pipeline(tables: &TravelTables, settings: &FindingsSettings) -> StageResult<PipelineOutput> {
    tables.validate()?;

    let routes = RouteMetricsStage::new(&tables.emission_factors).execute(&tables.routes)?;
    let records = ScenarioStage::new(&tables.accommodations, &tables.scenarios).execute(&routes)?;
    let findings = FindingsStage::new(settings).execute(&records)?;

    Ok(PipelineOutput {
        routes,
        records,
        findings,
    })
}
