//! Rendering of gate results.

use anyhow::Result;
use clap::ValueEnum;
use console::style;
use serde::Serialize;

use vergate_semver::{Approval, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Outcome of a single gate
#[derive(Debug, Clone, Serialize)]
pub struct GateRecord {
    pub component: String,
    pub package: String,
    pub version: Option<String>,
    pub status: &'static str,
    pub message: String,
}

impl GateRecord {
    pub fn new(
        component: &str,
        package: &str,
        version: Option<&str>,
        outcome: &Result<Approval, ValidationError>,
    ) -> Self {
        let (status, message) = match outcome {
            Ok(approval) => ("approved", approval.to_string()),
            Err(err) => (err.kind(), err.to_string()),
        };

        GateRecord {
            component: component.to_string(),
            package: package.to_string(),
            version: version.map(str::to_string),
            status,
            message,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == "approved"
    }
}

#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub passed: bool,
    pub results: Vec<GateRecord>,
}

impl Report {
    pub fn new(results: Vec<GateRecord>) -> Self {
        Report {
            passed: results.iter().all(GateRecord::is_approved),
            results,
        }
    }

    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| !r.is_approved()).count()
    }

    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }

    pub fn render(&self, format: Format, quiet: bool) -> Result<String> {
        match format {
            Format::Json => Ok(serde_json::to_string_pretty(self)?),
            Format::Text => Ok(self.render_text(quiet)),
        }
    }

    fn render_text(&self, quiet: bool) -> String {
        let mut lines = Vec::new();

        for record in &self.results {
            if record.is_approved() {
                if !quiet {
                    lines.push(format!(
                        "{} [{}] {} {}",
                        style("✓").green(),
                        record.component,
                        style(&record.package).bold(),
                        record.version.as_deref().unwrap_or("-")
                    ));
                }
            } else {
                lines.push(format!(
                    "{} [{}] {}: {}",
                    style("✗").red(),
                    record.component,
                    style(&record.package).bold(),
                    style(&record.message).red()
                ));
            }
        }

        if !quiet && self.results.len() > 1 {
            let failures = self.failures();
            let summary = format!(
                "{} gate(s) checked, {} failed",
                self.results.len(),
                failures
            );
            lines.push(if failures == 0 {
                style(summary).green().to_string()
            } else {
                style(summary).red().to_string()
            });
        }

        lines.join("\n")
    }
}
