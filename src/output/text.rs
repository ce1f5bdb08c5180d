//! Text output formatter for human-readable display
//!
//! This module provides:
//! - A two-column table: declaration text and latest version
//! - Metadata URLs and failure kinds in verbose mode
//! - A summary line with resolved/failed counts

use crate::domain::{CheckReport, ResolvedVersion, VersionResult};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Calculate the widest declaration text for column alignment
    fn max_text_length(&self, results: &[VersionResult]) -> usize {
        results
            .iter()
            .map(|r| r.declaration.text.len())
            .max()
            .unwrap_or(0)
            .max("Library".len())
    }

    fn format_version(&self, result: &VersionResult) -> String {
        match &result.resolved {
            ResolvedVersion::Found(version) => {
                if self.color {
                    version.green().to_string()
                } else {
                    version.clone()
                }
            }
            ResolvedVersion::Failed(kind) => {
                let sentinel = result.latest_version();
                let display = if self.verbosity == Verbosity::Verbose {
                    format!("{} ({})", sentinel, kind.label())
                } else {
                    sentinel.to_string()
                };
                if self.color {
                    display.red().to_string()
                } else {
                    display
                }
            }
        }
    }

    fn format_row(
        &self,
        result: &VersionResult,
        width: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "{:width$}  {}",
            result.declaration.text,
            self.format_version(result),
            width = width
        )?;

        if self.verbosity == Verbosity::Verbose {
            let url_line = format!("  {}", result.metadata_url);
            if self.color {
                writeln!(writer, "{}", url_line.dimmed())?;
            } else {
                writeln!(writer, "{}", url_line)?;
            }
        }

        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if report.is_empty() {
            if self.verbosity != Verbosity::Quiet {
                writeln!(writer, "No dependency declarations found.")?;
            }
            return Ok(());
        }

        let width = self.max_text_length(&report.results);

        if self.verbosity != Verbosity::Quiet {
            let header = format!("{:width$}  {}", "Library", "Latest version", width = width);
            if self.color {
                writeln!(writer, "{}", header.bold())?;
            } else {
                writeln!(writer, "{}", header)?;
            }
        }

        for result in &report.results {
            self.format_row(result, width, writer)?;
        }

        if self.verbosity != Verbosity::Quiet {
            writeln!(writer)?;
            let mut summary = format!(
                "{} libraries checked, {} resolved, {} not found",
                report.len(),
                report.resolved_count(),
                report.failed_count()
            );
            if report.cancelled {
                summary.push_str(" (cancelled)");
            }
            if self.color {
                writeln!(writer, "{}", summary.dimmed())?;
            } else {
                writeln!(writer, "{}", summary)?;
            }
        }

        Ok(())
    }
}
