// SPDX-License-Identifier: PMPL-1.0-or-later
//! Finding model shared by the analyzers, scanner and reports.
//!
//! A failed check occurrence becomes a [`Finding`] carrying the rule it
//! broke, the WCAG criterion behind it, where it was found and who it
//! affects. Findings are collected into a [`FindingSet`].

use crate::checks::Check;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Severity levels for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks release
    Error,
    /// Should be addressed
    Warning,
}

impl Severity {
    /// Whether this severity blocks releases
    pub fn blocks_release(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// SARIF result level
    pub fn sarif_level(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    A,
    AA,
    AAA,
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

/// Who is affected by an accessibility issue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    /// Screen reader users
    pub blind: bool,
    pub low_vision: bool,
    pub motor: bool,
    pub cognitive: bool,
}

impl ImpactAssessment {
    /// Impact on screen reader users only
    pub fn blind() -> Self {
        Self { blind: true, ..Self::default() }
    }

    /// Impact on screen reader users and users relying on clear wording
    pub fn blind_and_cognitive() -> Self {
        Self { blind: true, cognitive: true, ..Self::default() }
    }

    /// Describe affected groups
    pub fn affected_groups(&self) -> Vec<&'static str> {
        let mut groups = Vec::new();
        if self.blind { groups.push("blind"); }
        if self.low_vision { groups.push("low-vision"); }
        if self.motor { groups.push("motor"); }
        if self.cognitive { groups.push("cognitive"); }
        groups
    }
}

/// A single accessibility issue located in a file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Unique identifier
    pub id: Uuid,
    /// Producing tool
    pub source: String,
    /// Rule identifier (e.g. "WCAG-1.1.1-missing-alt")
    pub rule_id: String,
    /// Human-readable rule name
    pub rule_name: String,
    /// Check that produced this finding
    pub check: Option<Check>,
    pub severity: Severity,
    pub message: String,
    /// Category (e.g. "accessibility/wcag-a")
    pub category: String,
    pub file: Option<PathBuf>,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Offending markup snippet
    pub element: Option<String>,
    pub suggestion: Option<String>,
    /// Whether a mechanical fix exists
    pub fixable: bool,
    pub created_at: DateTime<Utc>,
    pub wcag_criterion: Option<String>,
    pub wcag_level: Option<WcagLevel>,
    pub impact: Option<ImpactAssessment>,
}

impl Finding {
    /// Create a new finding
    pub fn new(rule_id: &str, severity: Severity, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: env!("CARGO_PKG_NAME").to_string(),
            rule_id: rule_id.to_string(),
            rule_name: rule_id.to_string(),
            check: None,
            severity,
            message: message.to_string(),
            category: String::new(),
            file: None,
            line: None,
            element: None,
            suggestion: None,
            fixable: false,
            created_at: Utc::now(),
            wcag_criterion: None,
            wcag_level: None,
            impact: None,
        }
    }

    /// Set the WCAG criterion and level; also derives the category
    pub fn with_wcag(mut self, criterion: &str, level: WcagLevel) -> Self {
        self.wcag_criterion = Some(criterion.to_string());
        self.wcag_level = Some(level);
        self.category = match level {
            WcagLevel::A => "accessibility/wcag-a".to_string(),
            WcagLevel::AA => "accessibility/wcag-aa".to_string(),
            WcagLevel::AAA => "accessibility/wcag-aaa".to_string(),
        };
        self
    }

    pub fn with_check(mut self, check: Check) -> Self {
        self.check = Some(check);
        self
    }

    pub fn with_rule_name(mut self, name: &str) -> Self {
        self.rule_name = name.to_string();
        self
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the offending element, shortened to at most 120 characters
    pub fn with_element(mut self, element: &str) -> Self {
        let snippet = if element.chars().count() > 120 {
            format!("{}...", element.chars().take(120).collect::<String>())
        } else {
            element.to_string()
        };
        self.element = Some(snippet);
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn as_fixable(mut self) -> Self {
        self.fixable = true;
        self
    }

    pub fn with_impact(mut self, impact: ImpactAssessment) -> Self {
        self.impact = Some(impact);
        self
    }

    /// Location string for display
    pub fn location_string(&self) -> String {
        match (&self.file, self.line) {
            (Some(f), Some(l)) => format!("{}:{}", f.display(), l),
            (Some(f), None) => f.display().to_string(),
            _ => "<unknown>".to_string(),
        }
    }
}

/// A collection of findings with aggregation methods
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingSet {
    pub findings: Vec<Finding>,
    /// Number of files analyzed to produce this set
    #[serde(default)]
    pub files_scanned: usize,
}

impl FindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Merge another set, including its scanned-file count
    pub fn merge(&mut self, other: FindingSet) {
        self.findings.extend(other.findings);
        self.files_scanned += other.files_scanned;
    }

    pub fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.severity == severity).collect()
    }

    pub fn by_check(&self, check: Check) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.check == Some(check)).collect()
    }

    pub fn errors(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&Finding> {
        self.by_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Whether any finding blocks a release
    pub fn blocks_release(&self) -> bool {
        self.findings.iter().any(|f| f.severity.blocks_release())
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

impl Extend<Finding> for FindingSet {
    fn extend<I: IntoIterator<Item = Finding>>(&mut self, iter: I) {
        self.findings.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_category_from_level() {
        let f = Finding::new("R", Severity::Error, "msg").with_wcag("1.1.1", WcagLevel::A);
        assert_eq!(f.category, "accessibility/wcag-a");
        assert_eq!(f.wcag_criterion.as_deref(), Some("1.1.1"));
        assert_eq!(f.source, "a11y-heuristics");
    }

    #[test]
    fn test_element_snippet_is_truncated() {
        let long = format!("<a href=\"/{}\"></a>", "x".repeat(200));
        let f = Finding::new("R", Severity::Error, "msg").with_element(&long);
        let element = f.element.unwrap();
        assert!(element.ends_with("..."));
        assert_eq!(element.chars().count(), 123);
    }

    #[test]
    fn test_location_string() {
        let f = Finding::new("R", Severity::Warning, "m")
            .with_file(PathBuf::from("index.html"))
            .with_line(4);
        assert_eq!(f.location_string(), "index.html:4");
        assert_eq!(Finding::new("R", Severity::Warning, "m").location_string(), "<unknown>");
    }

    #[test]
    fn test_finding_set_aggregation() {
        let mut set = FindingSet::new();
        set.add(Finding::new("A", Severity::Error, "a").with_check(Check::AltText));
        set.add(Finding::new("B", Severity::Warning, "b").with_check(Check::HeadingStructure));
        assert_eq!(set.len(), 2);
        assert!(set.has_errors());
        assert!(set.blocks_release());
        assert_eq!(set.warnings().len(), 1);
        assert_eq!(set.by_check(Check::AltText).len(), 1);
        assert!(set.by_check(Check::LinkText).is_empty());
    }

    #[test]
    fn test_warnings_do_not_block_release() {
        let mut set = FindingSet::new();
        set.add(Finding::new("B", Severity::Warning, "b"));
        assert!(!set.blocks_release());
    }

    #[test]
    fn test_severity_serialization() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
        assert_eq!(Severity::Error.sarif_level(), "error");
        assert!(serde_json::from_str::<Severity>("\"info\"").is_err());
    }

    #[test]
    fn test_impact_groups() {
        assert_eq!(ImpactAssessment::blind().affected_groups(), vec!["blind"]);
        assert_eq!(
            ImpactAssessment::blind_and_cognitive().affected_groups(),
            vec!["blind", "cognitive"]
        );
    }
}
