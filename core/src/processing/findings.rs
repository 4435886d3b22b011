use crate::math::stats::{first_min_by, GroupedMean};
use crate::model::EvaluationRecord;
use crate::prelude::{AnalysisStage, StageResult};
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};

pub const NO_FEASIBLE_OPTIONS: &str = "No feasible travel options found for the given scenarios.";

/// Heading of the recommendation block; report sinks split on this prefix.
pub const RECOMMENDATION_HEADING: &str = "5. Environmental Recommendation Summary:";

/// Prefix of the indented lines that belong to the preceding numbered finding.
pub const SUB_ITEM_PREFIX: &str = "   - ";

/// Names the findings refer to. Scenarios are picked by name, not by length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindingsSettings {
    pub short_scenario: String,
    pub long_scenario: String,
    pub reference_accommodation: String,
    pub baseline_route: String,
}

impl Default for FindingsSettings {
    fn default() -> Self {
        Self {
            short_scenario: "1-week".into(),
            long_scenario: "1-month".into(),
            reference_accommodation: "Hostel".into(),
            baseline_route: "Air Travel".into(),
        }
    }
}

/// Condenses the results table into numbered, display-ready findings.
pub struct FindingsStage<'a> {
    settings: &'a FindingsSettings,
    logger: LogManager,
}

impl<'a> FindingsStage<'a> {
    pub fn new(settings: &'a FindingsSettings) -> Self {
        Self {
            settings,
            logger: LogManager::new("findings"),
        }
    }

    /// Average round-trip carbon per route. Every feasible row counts, so a
    /// route is weighted by its number of accommodation rows.
    fn carbon_ranking(&self, avg_carbon: &GroupedMean, findings: &mut Vec<String>) {
        let Some((best, min_carbon)) = avg_carbon.min() else {
            return;
        };
        findings.push(format!(
            "1. Carbon Footprint: '{best}' has the lowest average carbon footprint ({min_carbon:.1} kg CO2e round trip)."
        ));

        let baseline = self.settings.baseline_route.as_str();
        let worst = avg_carbon.max().map(|(route, _)| route);
        if best == baseline || worst == Some(best) {
            return;
        }
        if let Some(baseline_carbon) = avg_carbon.mean(baseline).filter(|carbon| *carbon > 0.0) {
            let reduction = (1.0 - min_carbon / baseline_carbon) * 100.0;
            findings.push(format!(
                "{SUB_ITEM_PREFIX}This is {reduction:.1}% less than '{baseline}' ({baseline_carbon:.1} kg CO2e)."
            ));
        }
    }

    fn short_feasibility(&self, short_routes: &[&str], findings: &mut Vec<String>) {
        let name = &self.settings.short_scenario;
        let label = title_case(name);
        if short_routes.is_empty() {
            findings.push(format!(
                "2. {label} Feasibility: No routes are feasible for a {name} trip."
            ));
        } else {
            findings.push(format!(
                "2. {label} Feasibility: Only these routes are feasible for a {name} trip: {}.",
                short_routes.join(", ")
            ));
        }
    }

    fn long_efficiency(&self, feasible: &[&EvaluationRecord], findings: &mut Vec<String>) {
        let name = &self.settings.long_scenario;
        let label = title_case(name);

        let mut per_day = GroupedMean::new();
        for record in feasible.iter().filter(|r| &r.scenario == name) {
            if let Some(carbon_per_day) = record.carbon_per_day {
                per_day.add(&record.route, carbon_per_day);
            }
        }

        match per_day.min() {
            Some((route, value)) => findings.push(format!(
                "3. {label} Carbon Efficiency: '{route}' has the lowest carbon footprint per day at the destination ({value:.1} kg CO2e/day)."
            )),
            None => findings.push(format!(
                "3. {label} Carbon Efficiency: No feasible routes found for {name} trip to calculate efficiency."
            )),
        }
    }

    fn cheapest_per_scenario(&self, feasible: &[&EvaluationRecord], findings: &mut Vec<String>) {
        let tier = &self.settings.reference_accommodation;
        let priced: Vec<(&EvaluationRecord, f64)> = feasible
            .iter()
            .filter(|r| &r.accommodation == tier)
            .filter_map(|r| r.total_cost_eur.map(|cost| (*r, cost)))
            .collect();

        if priced.is_empty() {
            findings.push(format!(
                "4. Cheapest Options: Could not determine cheapest options (no feasible {} data).",
                tier.to_lowercase()
            ));
            return;
        }

        findings.push(format!("4. Cheapest Options ({tier} Accommodation):"));
        // one line per scenario, ordered by scenario name
        let mut scenarios = distinct(priced.iter().map(|(r, _)| r.scenario.as_str()));
        scenarios.sort_unstable();
        for scenario in scenarios {
            let cheapest = first_min_by(
                priced.iter().filter(|(r, _)| r.scenario == scenario),
                |(_, cost)| *cost,
            );
            if let Some((record, cost)) = cheapest {
                findings.push(format!(
                    "{SUB_ITEM_PREFIX}{scenario}: '{}' at approximately €{cost:.0}.",
                    record.route
                ));
            }
        }
    }

    fn recommendations(
        &self,
        avg_carbon: &GroupedMean,
        short_routes: &[&str],
        long_routes: &[&str],
        findings: &mut Vec<String>,
    ) {
        findings.push(RECOMMENDATION_HEADING.to_string());

        let short = &self.settings.short_scenario;
        if short_routes.is_empty() {
            findings.push(format!("{SUB_ITEM_PREFIX}{short} vacation: No feasible options."));
        } else {
            match avg_carbon.min_where(|route| short_routes.contains(&route)) {
                Some((route, _)) => findings.push(format!(
                    "{SUB_ITEM_PREFIX}{short} vacation: '{route}' (lowest carbon among feasible options)."
                )),
                None => findings.push(format!(
                    "{SUB_ITEM_PREFIX}{short} vacation: No recommendation possible (no feasible carbon data)."
                )),
            }
        }

        let long = &self.settings.long_scenario;
        match avg_carbon.min_where(|route| long_routes.contains(&route)) {
            Some((route, _)) => findings.push(format!(
                "{SUB_ITEM_PREFIX}{long} vacation: '{route}' (lowest overall carbon footprint among feasible options)."
            )),
            None => findings.push(format!("{SUB_ITEM_PREFIX}{long} vacation: No feasible options.")),
        }
    }
}

impl AnalysisStage for FindingsStage<'_> {
    type Input = [EvaluationRecord];
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        self.logger.stage()
    }

    fn execute(&self, input: &[EvaluationRecord]) -> StageResult<Vec<String>> {
        let feasible: Vec<&EvaluationRecord> = input.iter().filter(|r| r.is_feasible()).collect();
        if feasible.is_empty() {
            self.logger.caution("no feasible rows; skipping findings");
            return Ok(vec![NO_FEASIBLE_OPTIONS.to_string()]);
        }

        let mut avg_carbon = GroupedMean::new();
        for record in &feasible {
            avg_carbon.add(&record.route, record.carbon_round_trip_kg);
        }
        let short_routes = feasible_routes_in(&feasible, &self.settings.short_scenario);
        let long_routes = feasible_routes_in(&feasible, &self.settings.long_scenario);

        let mut findings = Vec::new();
        self.carbon_ranking(&avg_carbon, &mut findings);
        self.short_feasibility(&short_routes, &mut findings);
        self.long_efficiency(&feasible, &mut findings);
        self.cheapest_per_scenario(&feasible, &mut findings);
        self.recommendations(&avg_carbon, &short_routes, &long_routes, &mut findings);

        self.logger
            .record(&format!("{} findings from {} feasible rows", findings.len(), feasible.len()));
        Ok(findings)
    }
}

fn feasible_routes_in<'r>(feasible: &[&'r EvaluationRecord], scenario: &str) -> Vec<&'r str> {
    distinct(
        feasible
            .iter()
            .filter(|r| r.scenario == scenario)
            .map(|r| r.route.as_str()),
    )
}

/// Unique values in first-seen order.
fn distinct<'r>(values: impl Iterator<Item = &'r str>) -> Vec<&'r str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// "1-week" -> "1-Week".
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch == '-' || ch.is_whitespace();
    }
    out
}
