use crate::report::{ensure_parent, Report, ReportSink};
use anyhow::Context;
use ecotravel::model::{EvaluationRecord, MeasuredRoute, TransportMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CHART_DATA_FILENAME: &str = "chart_data.json";

/// Series consumed by the external chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub carbon_footprint: Vec<ScenarioValue>,
    pub carbon_per_vacation_day: Vec<ScenarioValue>,
    pub time_distribution: Vec<TimeSplit>,
    pub cost_comparison: Vec<CostSeries>,
    pub carbon_breakdown: Vec<RouteBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioValue {
    pub route: String,
    pub scenario: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSplit {
    pub route: String,
    pub scenario: String,
    pub travel_days: u32,
    pub destination_days: u32,
}

/// Total cost per (route, scenario) for one accommodation tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSeries {
    pub accommodation: String,
    pub points: Vec<ScenarioValue>,
}

/// One-way carbon per mode for a route, plus how far the route strays from
/// the great-circle line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteBreakdown {
    pub route: String,
    pub total_distance_km: f64,
    pub detour_ratio: Option<f64>,
    pub modes: Vec<ModeShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeShare {
    pub mode: TransportMode,
    pub carbon_kg: f64,
}

impl ChartData {
    pub fn build(report: &Report<'_>) -> Self {
        let feasible: Vec<&EvaluationRecord> = report
            .output
            .records
            .iter()
            .filter(|r| r.is_feasible())
            .collect();
        let per_pair = first_per_route_and_scenario(&feasible);

        let carbon_footprint = per_pair
            .iter()
            .map(|r| point(r, r.carbon_round_trip_kg))
            .collect();
        let carbon_per_vacation_day = per_pair
            .iter()
            .filter_map(|r| r.carbon_per_day.map(|value| point(r, value)))
            .collect();
        let time_distribution = per_pair
            .iter()
            .filter_map(|r| {
                r.travel_days_round_trip.map(|travel_days| TimeSplit {
                    route: r.route.clone(),
                    scenario: r.scenario.clone(),
                    travel_days,
                    destination_days: r.days_at_destination,
                })
            })
            .collect();

        let mut cost_comparison: Vec<CostSeries> = Vec::new();
        for record in &feasible {
            let Some(cost) = record.total_cost_eur else {
                continue;
            };
            let series = match cost_comparison
                .iter()
                .position(|s| s.accommodation == record.accommodation)
            {
                Some(idx) => &mut cost_comparison[idx],
                None => {
                    cost_comparison.push(CostSeries {
                        accommodation: record.accommodation.clone(),
                        points: Vec::new(),
                    });
                    let last = cost_comparison.len() - 1;
                    &mut cost_comparison[last]
                }
            };
            series.points.push(point(record, cost));
        }

        let great_circle_km = report.trip.great_circle_km();
        let carbon_breakdown = report
            .output
            .routes
            .iter()
            .map(|route| breakdown(route, great_circle_km))
            .collect();

        Self {
            title: format!("Eco-Friendly Travel Analysis: {}", report.trip.label()),
            carbon_footprint,
            carbon_per_vacation_day,
            time_distribution,
            cost_comparison,
            carbon_breakdown,
        }
    }
}

fn point(record: &EvaluationRecord, value: f64) -> ScenarioValue {
    ScenarioValue {
        route: record.route.clone(),
        scenario: record.scenario.clone(),
        value,
    }
}

fn first_per_route_and_scenario<'r>(records: &[&'r EvaluationRecord]) -> Vec<&'r EvaluationRecord> {
    let mut picked: Vec<&EvaluationRecord> = Vec::new();
    for record in records {
        if !picked
            .iter()
            .any(|p| p.route == record.route && p.scenario == record.scenario)
        {
            picked.push(*record);
        }
    }
    picked
}

fn breakdown(route: &MeasuredRoute, great_circle_km: f64) -> RouteBreakdown {
    let detour_ratio = (great_circle_km > 0.0).then(|| route.total_distance_km / great_circle_km);
    RouteBreakdown {
        route: route.name.clone(),
        total_distance_km: route.total_distance_km,
        detour_ratio,
        modes: route
            .carbon_by_mode()
            .into_iter()
            .map(|(mode, carbon_kg)| ModeShare { mode, carbon_kg })
            .collect(),
    }
}

pub struct ChartDataSink {
    path: PathBuf,
}

impl ChartDataSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(CHART_DATA_FILENAME),
        }
    }
}

impl ReportSink for ChartDataSink {
    fn name(&self) -> &'static str {
        "chart data"
    }

    fn publish(&self, report: &Report<'_>) -> anyhow::Result<PathBuf> {
        ensure_parent(&self.path)?;
        let data = ChartData::build(report);
        let json = serde_json::to_string_pretty(&data).context("serializing chart data")?;
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::builtin_output;

    #[test]
    fn chart_series_use_one_row_per_route_and_scenario() {
        let (config, output) = builtin_output();
        let data = ChartData::build(&Report {
            output: &output,
            trip: &config.trip,
        });

        // Air Travel fits both scenarios, the overland routes only the month.
        assert_eq!(data.carbon_footprint.len(), 4);
        assert_eq!(data.carbon_per_vacation_day.len(), 4);
        assert_eq!(data.time_distribution.len(), 4);
        assert_eq!(
            data.time_distribution[0],
            TimeSplit {
                route: "Air Travel".into(),
                scenario: "1-week".into(),
                travel_days: 2,
                destination_days: 5,
            }
        );

        let tiers: Vec<&str> = data
            .cost_comparison
            .iter()
            .map(|s| s.accommodation.as_str())
            .collect();
        assert_eq!(tiers, vec!["Hotel", "Hostel", "Airbnb"]);
        assert!(data.cost_comparison.iter().all(|s| s.points.len() == 4));
    }

    #[test]
    fn breakdown_groups_modes_and_reports_detour() {
        let (config, output) = builtin_output();
        let data = ChartData::build(&Report {
            output: &output,
            trip: &config.trip,
        });

        let air = &data.carbon_breakdown[0];
        assert_eq!(air.route, "Air Travel");
        assert_eq!(air.modes.len(), 2);
        assert_eq!(air.modes[0].mode, TransportMode::Train);
        assert_eq!(air.modes[1].carbon_kg, 100.0 + 1050.0);
        let ratio = air.detour_ratio.unwrap();
        assert!(ratio > 1.0 && ratio < 1.3, "ratio {ratio}");
    }

    #[test]
    fn sink_writes_json() {
        let (config, output) = builtin_output();
        let dir = tempfile::tempdir().unwrap();
        let path = ChartDataSink::new(dir.path().join("visualizations"))
            .publish(&Report {
                output: &output,
                trip: &config.trip,
            })
            .unwrap();
        let parsed: ChartData = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed.title, "Eco-Friendly Travel Analysis: Grenoble to Abuja");
    }
}
