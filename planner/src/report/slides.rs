use crate::report::charts::CHART_DATA_FILENAME;
use crate::report::{ensure_parent, Report, ReportSink, VISUALIZATION_DIR};
use anyhow::Context;
use ecotravel::processing::findings::{RECOMMENDATION_HEADING, SUB_ITEM_PREFIX};
use std::fs;
use std::path::{Path, PathBuf};

pub const OUTLINE_FILENAME: &str = "outline.md";

const CHART_SLIDES: [(&str, &str, &str); 5] = [
    (
        "Carbon Footprint Comparison (Round Trip)",
        "carbon_footprint",
        "Total CO2e per route for each scenario.",
    ),
    (
        "Carbon Footprint Breakdown (One-Way)",
        "carbon_breakdown",
        "Which transport modes dominate each route's footprint.",
    ),
    (
        "Time Distribution: Travel vs. Destination",
        "time_distribution",
        "How each trip splits between travelling and staying.",
    ),
    (
        "Carbon Footprint per Vacation Day",
        "carbon_per_vacation_day",
        "Carbon cost of every day actually spent at the destination.",
    ),
    (
        "Total Cost Comparison (All Accommodation Tiers)",
        "cost_comparison",
        "Transport plus accommodation for the feasible options.",
    ),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: String,
    pub bullets: Vec<String>,
    pub notes: Option<String>,
}

impl Slide {
    fn new(title: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            title: title.into(),
            bullets,
            notes: None,
        }
    }

    fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Lines after the recommendation heading, without their sub-item indent.
pub fn recommendation_lines(findings: &[String]) -> Vec<String> {
    match findings
        .iter()
        .position(|f| f.starts_with(RECOMMENDATION_HEADING))
    {
        Some(idx) => findings[idx + 1..]
            .iter()
            .map(|f| f.replace(SUB_ITEM_PREFIX, ""))
            .collect(),
        None => vec!["Recommendations could not be automatically extracted.".to_string()],
    }
}

/// Headline findings plus the recommendations, without their numbering.
/// Findings with no numbered lines are passed through unchanged.
pub fn conclusion_lines(findings: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = ["1. ", "2. "]
        .iter()
        .filter_map(|prefix| findings.iter().find_map(|f| f.strip_prefix(*prefix)))
        .map(str::to_string)
        .collect();
    if findings.iter().any(|f| f.starts_with(RECOMMENDATION_HEADING)) {
        lines.extend(recommendation_lines(findings));
    }
    if lines.is_empty() {
        return findings.to_vec();
    }
    lines
}

pub fn build_slides(report: &Report<'_>) -> Vec<Slide> {
    let trip = report.trip;
    let output = report.output;

    let mut scenarios: Vec<&str> = Vec::new();
    for record in &output.records {
        if !scenarios.contains(&record.scenario.as_str()) {
            scenarios.push(&record.scenario);
        }
    }

    let mut slides = vec![
        Slide::new(
            format!("Eco-Friendly Travel: {}", trip.label()),
            vec!["An Environmental Analysis of Travel Options".to_string()],
        ),
        Slide::new(
            "Introduction",
            vec![
                format!("Departure: {}", trip.origin.name),
                format!("Arrival: {}", trip.destination.name),
                format!("Distance: ~{:.0} km (direct)", trip.great_circle_km()),
                "Objective: Analyze cost, duration, and carbon footprint of travel options."
                    .to_string(),
                format!(
                    "Scenarios: {} vacation (including travel time)",
                    scenarios.join(" vs. ")
                ),
            ],
        ),
        Slide::new(
            "Transportation Options Overview",
            output
                .routes
                .iter()
                .map(|route| {
                    format!(
                        "{}: ~{:.0} hrs one-way, {:.1} kg CO2e one-way, €{:.0} one-way",
                        route.name,
                        route.travel_time_hours,
                        route.total_carbon_one_way_kg,
                        route.cost_eur / 2.0
                    )
                })
                .collect(),
        ),
    ];

    for (title, series, notes) in CHART_SLIDES {
        slides.push(
            Slide::new(
                title,
                vec![format!(
                    "Chart: {VISUALIZATION_DIR}/{CHART_DATA_FILENAME} → {series}"
                )],
            )
            .with_notes(notes),
        );
    }

    slides.push(Slide::new("Key Findings", output.findings.clone()));
    slides.push(Slide::new(
        "Recommendations",
        recommendation_lines(&output.findings),
    ));
    slides.push(Slide::new("Conclusion", conclusion_lines(&output.findings)));
    slides.push(Slide::new("Q&A", vec!["Thank you!".to_string()]));
    slides
}

pub fn render_outline(slides: &[Slide]) -> String {
    let mut text = String::new();
    for (idx, slide) in slides.iter().enumerate() {
        if idx > 0 {
            text.push_str("\n---\n\n");
        }
        text.push_str(&format!("## {}. {}\n\n", idx + 1, slide.title));
        for bullet in &slide.bullets {
            text.push_str(&format!("- {bullet}\n"));
        }
        if let Some(notes) = &slide.notes {
            text.push_str(&format!("\n> Notes: {notes}\n"));
        }
    }
    text
}

/// Slide-deck outline for the presentation generator.
pub struct SlideOutlineSink {
    path: PathBuf,
}

impl SlideOutlineSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(OUTLINE_FILENAME),
        }
    }
}

impl ReportSink for SlideOutlineSink {
    fn name(&self) -> &'static str {
        "slide outline"
    }

    fn publish(&self, report: &Report<'_>) -> anyhow::Result<PathBuf> {
        ensure_parent(&self.path)?;
        let outline = render_outline(&build_slides(report));
        fs::write(&self.path, outline).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::builtin_output;

    #[test]
    fn recommendations_follow_the_heading() {
        let findings = vec![
            "4. Cheapest Options (Hostel Accommodation):".to_string(),
            "   - 1-week: 'A' at approximately €950.".to_string(),
            RECOMMENDATION_HEADING.to_string(),
            "   - 1-week vacation: 'A' (lowest carbon among feasible options).".to_string(),
            "   - 1-month vacation: No feasible options.".to_string(),
        ];
        assert_eq!(
            recommendation_lines(&findings),
            vec![
                "1-week vacation: 'A' (lowest carbon among feasible options).",
                "1-month vacation: No feasible options.",
            ]
        );
    }

    #[test]
    fn missing_heading_falls_back() {
        let findings = vec!["No feasible travel options found for the given scenarios.".to_string()];
        assert_eq!(
            recommendation_lines(&findings),
            vec!["Recommendations could not be automatically extracted."]
        );
    }

    #[test]
    fn outline_covers_all_slides() {
        let (config, output) = builtin_output();
        let report = Report {
            output: &output,
            trip: &config.trip,
        };
        let slides = build_slides(&report);
        assert_eq!(slides.len(), 3 + CHART_SLIDES.len() + 4);
        assert_eq!(slides[0].title, "Eco-Friendly Travel: Grenoble to Abuja");
        assert_eq!(
            slides[1].bullets[4],
            "Scenarios: 1-week vs. 1-month vacation (including travel time)"
        );
        let air = &slides[2].bullets[0];
        assert!(air.starts_with("Air Travel: ~10 hrs one-way, 115"), "{air}");
        assert!(air.ends_with("kg CO2e one-way, €410 one-way"), "{air}");

        assert_eq!(
            slides[7].title,
            "Total Cost Comparison (All Accommodation Tiers)"
        );

        let conclusion = &slides[slides.len() - 2];
        assert_eq!(conclusion.title, "Conclusion");
        assert!(conclusion.bullets[0].starts_with("Carbon Footprint: 'Land & Sea'"));
        assert!(conclusion.bullets[1].starts_with("1-Week Feasibility:"));
        assert!(conclusion
            .bullets
            .iter()
            .any(|b| b.starts_with("1-month vacation: 'Land & Sea'")));
        assert_eq!(slides[slides.len() - 1].title, "Q&A");

        let outline = render_outline(&slides);
        assert!(outline.starts_with("## 1. Eco-Friendly Travel: Grenoble to Abuja\n\n- "));
        assert!(outline.contains("- 1-month vacation: 'Land & Sea'"));
        assert!(outline.contains("## 11. Conclusion\n"));
    }

    #[test]
    fn conclusion_without_numbered_findings_repeats_them() {
        let findings = vec!["No feasible travel options found for the given scenarios.".to_string()];
        assert_eq!(conclusion_lines(&findings), findings);
    }
}
