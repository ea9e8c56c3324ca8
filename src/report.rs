// src/report.rs
//! Report generation: one `Report` value, two serializations.
//!
//! The structured (JSON) and text renderings are produced from the same
//! `Report`, never computed independently, so counts and ordering can
//! not drift between formats.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{Result, ScanError};
use crate::types::{Finding, Severity};

/// Output format for a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Text,
}

/// Severity counts over a finding list.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub total_conditions: usize,
    pub high_severity: usize,
    pub medium_severity: usize,
    pub low_severity: usize,
}

/// Summary plus the ordered finding list, in detection order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub summary: ReportSummary,
    pub conditions: Vec<Finding>,
}

impl Report {
    /// Builds a report from a finding list, preserving its order.
    #[must_use]
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let count = |s: Severity| findings.iter().filter(|f| f.severity == s).count();
        let summary = ReportSummary {
            total_conditions: findings.len(),
            high_severity: count(Severity::High),
            medium_severity: count(Severity::Medium),
            low_severity: count(Severity::Low),
        };
        Self {
            summary,
            conditions: findings,
        }
    }

    /// Renders the report in the requested format.
    #[must_use]
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Json => self.to_json(),
            ReportFormat::Text => self.to_text(),
        }
    }

    fn to_json(&self) -> String {
        // Serialization of these derive-only types cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Race Condition Security Report");
        let _ = writeln!(out, "{}", "=".repeat(50));
        let _ = writeln!(out);
        let _ = writeln!(out, "Total conditions found: {}", self.summary.total_conditions);
        let _ = writeln!(out, "High severity: {}", self.summary.high_severity);
        let _ = writeln!(out, "Medium severity: {}", self.summary.medium_severity);
        let _ = writeln!(out, "Low severity: {}", self.summary.low_severity);
        let _ = writeln!(out);

        for finding in &self.conditions {
            let _ = writeln!(out, "File: {}:{}", finding.file_path, finding.line_number);
            let _ = writeln!(out, "Type: {}", finding.category);
            let _ = writeln!(out, "Severity: {}", finding.severity);
            let _ = writeln!(out, "Description: {}", finding.description);
            let _ = writeln!(out, "Code: {}", finding.snippet);
            let _ = writeln!(out, "Recommendations:");
            for rec in &finding.recommendations {
                let _ = writeln!(out, "  - {rec}");
            }
            let _ = writeln!(out);
        }

        out
    }

    /// Writes the rendered report to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path, format: ReportFormat) -> Result<()> {
        fs::write(path, self.render(format)).map_err(|e| ScanError::io(e, path))
    }
}

/// Convenience wrapper: builds and renders in one call.
#[must_use]
pub fn generate_report(findings: Vec<Finding>, format: ReportFormat) -> String {
    Report::from_findings(findings).render(format)
}
