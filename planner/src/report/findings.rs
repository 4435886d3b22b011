use crate::report::{ensure_parent, Report, ReportSink};
use crate::workflow::config::TripEndpoints;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

pub const FINDINGS_FILENAME: &str = "key_findings.txt";

pub struct FindingsTextSink {
    path: PathBuf,
}

impl FindingsTextSink {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            path: output_dir.join(FINDINGS_FILENAME),
        }
    }
}

/// Plain-text findings: title, underline, blank line, one bullet per finding.
pub fn render_findings(trip: &TripEndpoints, findings: &[String]) -> String {
    let title = format!("Key Findings from Eco-Travel Analysis ({}):", trip.label());
    let mut text = String::new();
    text.push_str(&title);
    text.push('\n');
    text.push_str(&"=".repeat(title.chars().count()));
    text.push_str("\n\n");
    for finding in findings {
        text.push_str("- ");
        text.push_str(finding);
        text.push('\n');
    }
    text
}

impl ReportSink for FindingsTextSink {
    fn name(&self) -> &'static str {
        "key findings"
    }

    fn publish(&self, report: &Report<'_>) -> anyhow::Result<PathBuf> {
        ensure_parent(&self.path)?;
        let text = render_findings(report.trip, &report.output.findings);
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::defaults;

    #[test]
    fn rendering_has_title_rule_and_bullets() {
        let findings = vec!["first".to_string(), "   - nested".to_string()];
        let text = render_findings(&defaults::trip(), &findings);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Key Findings from Eco-Travel Analysis (Grenoble to Abuja):"
        );
        assert_eq!(lines[1].len(), lines[0].chars().count());
        assert!(lines[1].chars().all(|c| c == '='));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "- first");
        assert_eq!(lines[4], "-    - nested");
    }

    #[test]
    fn sink_writes_file() {
        let (config, output) = crate::report::test_support::builtin_output();
        let dir = tempfile::tempdir().unwrap();
        let path = FindingsTextSink::new(dir.path())
            .publish(&Report {
                output: &output,
                trip: &config.trip,
            })
            .unwrap();
        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("- 1. Carbon Footprint: 'Land & Sea'"));
    }
}
