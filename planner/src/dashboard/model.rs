use crate::workflow::config::TripEndpoints;
use ecotravel::model::{EvaluationRecord, MeasuredRoute};
use ecotravel::PipelineOutput;
use serde::{Deserialize, Serialize};

/// Snapshot of the last run as served to dashboard clients.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardModel {
    pub trip: String,
    pub great_circle_km: f64,
    pub routes: Vec<MeasuredRoute>,
    pub records: Vec<EvaluationRecord>,
    pub findings: Vec<String>,
}

impl DashboardModel {
    pub fn from_output(trip: &TripEndpoints, output: &PipelineOutput) -> Self {
        Self {
            trip: trip.label(),
            great_circle_km: trip.great_circle_km(),
            routes: output.routes.clone(),
            records: output.records.clone(),
            findings: output.findings.clone(),
        }
    }
}
