use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feasibility {
    #[serde(rename = "Feasible")]
    Feasible,
    #[serde(rename = "Not feasible")]
    NotFeasible,
}

impl Feasibility {
    pub fn label(self) -> &'static str {
        match self {
            Feasibility::Feasible => "Feasible",
            Feasibility::NotFeasible => "Not feasible",
        }
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the results table for a (scenario, route, accommodation)
/// triple. The serialized column names are consumed by the report sinks.
///
/// When the row is not feasible, `travel_days_round_trip`, `carbon_per_day`
/// and `total_cost_eur` are all `None` and `days_at_destination` is 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    #[serde(rename = "Scenario")]
    pub scenario: String,
    #[serde(rename = "Route")]
    pub route: String,
    #[serde(rename = "Accommodation")]
    pub accommodation: String,
    #[serde(rename = "Travel Days (Round Trip)")]
    pub travel_days_round_trip: Option<u32>,
    #[serde(rename = "Days at Destination")]
    pub days_at_destination: u32,
    #[serde(rename = "Carbon Footprint (kg CO2e)")]
    pub carbon_round_trip_kg: f64,
    #[serde(rename = "Carbon per Vacation Day")]
    pub carbon_per_day: Option<f64>,
    #[serde(rename = "Total Cost (EUR)")]
    pub total_cost_eur: Option<f64>,
    #[serde(rename = "Feasibility")]
    pub feasibility: Feasibility,
}

impl EvaluationRecord {
    pub const COLUMNS: [&'static str; 9] = [
        "Scenario",
        "Route",
        "Accommodation",
        "Travel Days (Round Trip)",
        "Days at Destination",
        "Carbon Footprint (kg CO2e)",
        "Carbon per Vacation Day",
        "Total Cost (EUR)",
        "Feasibility",
    ];

    pub fn is_feasible(&self) -> bool {
        self.feasibility == Feasibility::Feasible
    }
}
