//! JSON output formatter for machine processing
//!
//! Unlike the text table, the JSON output keeps failure kinds explicit so
//! downstream tooling can tell a missing package from a network failure.

use crate::domain::{CheckReport, ResolvedVersion, VersionResult};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput {
    /// Total number of rows
    total: usize,
    /// Number of resolved rows
    resolved: usize,
    /// Number of failed rows
    failed: usize,
    /// Whether the run was cancelled before completing
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    cancelled: bool,
    /// One entry per declaration, in declaration order
    results: Vec<JsonRow>,
}

/// JSON representation of one result row
#[derive(Serialize)]
struct JsonRow {
    /// The declaration literal as written
    library: String,
    /// The configuration keyword it was attached to
    configuration: String,
    group: String,
    artifact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    declared_version: Option<String>,
    /// The metadata document that was queried
    metadata_url: String,
    /// The resolved version, absent on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    latest_version: Option<String>,
    /// Failure label, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<String>,
}

impl JsonRow {
    fn from_result(result: &VersionResult) -> Self {
        let (latest_version, failure) = match &result.resolved {
            ResolvedVersion::Found(version) => (Some(version.clone()), None),
            ResolvedVersion::Failed(kind) => (None, Some(kind.label())),
        };

        Self {
            library: result.declaration.text.clone(),
            configuration: result.declaration.configuration.clone(),
            group: result.declaration.coordinate.group.clone(),
            artifact: result.declaration.coordinate.artifact.clone(),
            declared_version: result.declaration.coordinate.declared_version.clone(),
            metadata_url: result.metadata_url.clone(),
            latest_version,
            failure,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            total: report.len(),
            resolved: report.resolved_count(),
            failed: report.failed_count(),
            cancelled: report.cancelled,
            results: report.results.iter().map(JsonRow::from_result).collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, FailureKind, LibraryDeclaration};

    fn result(literal: &str, resolved: ResolvedVersion) -> VersionResult {
        let coordinate = Coordinate::parse(literal).unwrap();
        let url = format!(
            "https://repo1.maven.org/maven2/{}/{}/maven-metadata.xml",
            coordinate.group.replace('.', "/"),
            coordinate.artifact
        );
        VersionResult::new(
            LibraryDeclaration::new(literal, "implementation", coordinate),
            url,
            resolved,
        )
    }

    fn render(report: &CheckReport) -> serde_json::Value {
        let mut buffer = Vec::new();
        JsonFormatter::new().format(report, &mut buffer).unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_json_shape() {
        let report = CheckReport::new(
            vec![
                result(
                    "com.squareup.okhttp3:okhttp:4.9.0",
                    ResolvedVersion::Found("5.0.0".to_string()),
                ),
                result(
                    "junit:junit:4.12",
                    ResolvedVersion::Failed(FailureKind::NotFound),
                ),
            ],
            false,
        );
        let value = render(&report);

        assert_eq!(value["total"], 2);
        assert_eq!(value["resolved"], 1);
        assert_eq!(value["failed"], 1);
        assert!(value.get("cancelled").is_none());

        let rows = value["results"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["library"], "com.squareup.okhttp3:okhttp:4.9.0");
        assert_eq!(rows[0]["group"], "com.squareup.okhttp3");
        assert_eq!(rows[0]["artifact"], "okhttp");
        assert_eq!(rows[0]["declared_version"], "4.9.0");
        assert_eq!(rows[0]["latest_version"], "5.0.0");
        assert!(rows[0].get("failure").is_none());
    }

    #[test]
    fn test_json_failure_kind_explicit() {
        let report = CheckReport::new(
            vec![result(
                "junit:junit:4.12",
                ResolvedVersion::Failed(FailureKind::Http(500)),
            )],
            false,
        );
        let value = render(&report);

        let row = &value["results"][0];
        assert!(row.get("latest_version").is_none());
        assert_eq!(row["failure"], "http 500");
    }

    #[test]
    fn test_json_cancelled_flag() {
        let report = CheckReport::new(
            vec![result(
                "junit:junit:4.12",
                ResolvedVersion::Failed(FailureKind::Cancelled),
            )],
            true,
        );
        let value = render(&report);
        assert_eq!(value["cancelled"], true);
        assert_eq!(value["results"][0]["failure"], "cancelled");
    }

    #[test]
    fn test_json_empty_report() {
        let value = render(&CheckReport::default());
        assert_eq!(value["total"], 0);
        assert!(value["results"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_metadata_url_present() {
        let report = CheckReport::new(
            vec![result(
                "junit:junit:4.12",
                ResolvedVersion::Found("4.13.2".to_string()),
            )],
            false,
        );
        let value = render(&report);
        assert_eq!(
            value["results"][0]["metadata_url"],
            "https://repo1.maven.org/maven2/junit/junit/maven-metadata.xml"
        );
    }
}
