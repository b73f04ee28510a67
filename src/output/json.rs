//! JSON output formatting

use super::report::Report;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::path::Path;

/// Render a run report as pretty-printed JSON
pub fn render_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
}

/// Write a run report to a JSON file
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    serde_json::to_writer_pretty(file, report).context("Failed to write JSON report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::{JobReport, Summary};

    fn sample_report() -> Report {
        Report::new(vec![JobReport {
            label: "normal".to_string(),
            distribution: "normal".to_string(),
            count: 3,
            seed: 42,
            summary: Summary::from_samples(&[1.0, 2.0, 3.0]),
            values: None,
        }])
    }

    #[test]
    fn test_render_roundtrip() {
        let rendered = render_report(&sample_report()).unwrap();
        let parsed: Report = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed.jobs.len(), 1);
        assert_eq!(parsed.jobs[0].distribution, "normal");
        assert_eq!(parsed.jobs[0].count, 3);
    }

    #[test]
    fn test_values_omitted_when_absent() {
        let rendered = render_report(&sample_report()).unwrap();
        assert!(!rendered.contains("\"values\""));
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_report(&sample_report(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: Report = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.jobs[0].seed, 42);
    }
}
