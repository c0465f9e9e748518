// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for accessibility findings.
//!
//! Supports multiple output formats:
//! - Text: human-readable findings with WCAG criterion references
//! - JSON: the serialized [`FindingSet`]
//! - SARIF: Static Analysis Results Interchange Format 2.1.0 for IDE/CI

use crate::checks::Check;
use crate::error::Result;
use crate::finding::{Finding, FindingSet, Severity};
use serde::Serialize;
use std::collections::BTreeMap;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report from findings
pub fn generate_report(findings: &FindingSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(generate_text_report(findings)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(findings)?),
        OutputFormat::Sarif => generate_sarif_report(findings),
    }
}

fn generate_text_report(findings: &FindingSet) -> String {
    let mut output = String::new();

    output.push_str("=== a11y-heuristics Report ===\n\n");
    output.push_str(&format!("Files scanned: {}\n", findings.files_scanned));

    if findings.is_empty() {
        output.push_str("No accessibility issues found. All checks passed.\n");
        return output;
    }

    let errors = findings.errors().len();
    let warnings = findings.warnings().len();

    output.push_str(&format!(
        "Found {} issue(s): {} error(s), {} warning(s)\n\n",
        findings.len(),
        errors,
        warnings
    ));

    for severity in [Severity::Error, Severity::Warning] {
        let sev_findings = findings.by_severity(severity);
        if sev_findings.is_empty() {
            continue;
        }

        output.push_str(&format!("--- {} ({}) ---\n", severity, sev_findings.len()));
        for finding in sev_findings {
            push_finding(&mut output, finding);
        }
    }

    output.push_str("Per check:\n");
    for check in Check::ALL {
        output.push_str(&format!("  {:<18} {}\n", check, findings.by_check(check).len()));
    }
    output.push('\n');

    if findings.blocks_release() {
        output.push_str("RESULT: RELEASE BLOCKED (errors found)\n");
    } else if warnings > 0 {
        output.push_str("RESULT: PASS WITH WARNINGS\n");
    } else {
        output.push_str("RESULT: PASS\n");
    }

    output
}

fn push_finding(output: &mut String, finding: &Finding) {
    output.push_str(&format!("[{}] {}\n", finding.rule_id, finding.message));

    if finding.file.is_some() {
        output.push_str(&format!("  Location: {}\n", finding.location_string()));
    }
    if let Some(ref element) = finding.element {
        output.push_str(&format!("  Element: {}\n", element));
    }
    if let (Some(criterion), Some(level)) = (&finding.wcag_criterion, finding.wcag_level) {
        output.push_str(&format!("  WCAG: {} (Level {})\n", criterion, level));
    }
    if let Some(ref suggestion) = finding.suggestion {
        output.push_str(&format!("  Fix: {}\n", suggestion));
    }
    if let Some(ref impact) = finding.impact {
        let groups = impact.affected_groups();
        if !groups.is_empty() {
            output.push_str(&format!("  Affects: {}\n", groups.join(", ")));
        }
    }

    output.push('\n');
}

#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: &'static str,
    version: &'static str,
    rules: Vec<SarifRule>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    name: String,
    short_description: SarifMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<SarifMessage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<SarifRegion>,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRegion {
    start_line: usize,
}

fn generate_sarif_report(findings: &FindingSet) -> Result<String> {
    // One descriptor per rule id, in stable order
    let mut rules: BTreeMap<&str, SarifRule> = BTreeMap::new();
    for f in &findings.findings {
        rules.entry(f.rule_id.as_str()).or_insert_with(|| SarifRule {
            id: f.rule_id.clone(),
            name: f.rule_name.clone(),
            short_description: SarifMessage { text: f.rule_name.clone() },
            help: f.suggestion.as_ref().map(|s| SarifMessage { text: s.clone() }),
        });
    }

    let results = findings
        .findings
        .iter()
        .map(|f| {
            let locations = f
                .file
                .as_ref()
                .map(|file| SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: file.display().to_string(),
                        },
                        region: f.line.map(|l| SarifRegion { start_line: l }),
                    },
                })
                .into_iter()
                .collect();

            SarifResult {
                rule_id: f.rule_id.clone(),
                level: f.severity.sarif_level(),
                message: SarifMessage { text: f.message.clone() },
                locations,
            }
        })
        .collect();

    let report = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json",
        version: "2.1.0",
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                    rules: rules.into_values().collect(),
                },
            },
            results,
        }],
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
