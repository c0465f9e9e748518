// SPDX-License-Identifier: PMPL-1.0-or-later
//! Button name analyzer - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! A `<button>...</button>` is named by its text content, an `aria-label`,
//! or a `title`. Only buttons opened and closed on the same line are seen;
//! self-closing or unterminated buttons are not reported.

use crate::analyzers::Analyzer;
use crate::checks::{self, Check};
use crate::finding::{Finding, ImpactAssessment, Severity, WcagLevel};
use std::path::Path;

/// Button accessible-name analyzer
pub struct ButtonNameAnalyzer;

impl Analyzer for ButtonNameAnalyzer {
    fn name(&self) -> &str {
        "Button Name Analyzer"
    }

    fn description(&self) -> &str {
        "Checks <button> elements for an accessible name (WCAG 4.1.2)"
    }

    fn check(&self) -> Check {
        Check::ButtonNames
    }

    fn analyze_file(&self, path: &Path, content: &str) -> Vec<Finding> {
        checks::unnamed_buttons(content)
            .into_iter()
            .map(|button| {
                Finding::new(
                    "WCAG-4.1.2-button-no-name",
                    Severity::Error,
                    "Button has no accessible name. Screen readers will announce it only as \"button\".",
                )
                .with_check(Check::ButtonNames)
                .with_wcag("4.1.2", WcagLevel::A)
                .with_rule_name("Name, Role, Value: Button Without Name")
                .with_file(path.to_path_buf())
                .with_line(button.line)
                .with_element(button.text)
                .with_suggestion("Add visible text, an aria-label, or a title to the button")
                .with_impact(ImpactAssessment::blind())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_buttons() {
        let html = r#"
            <button>Submit Form</button>
            <button aria-label="Close dialog">×</button>
            <button title="Help">?</button>
        "#;
        assert!(ButtonNameAnalyzer.analyze_file(Path::new("test.html"), html).is_empty());
    }

    #[test]
    fn test_empty_button() {
        let html = r#"
            <button>Submit Form</button>
            <button></button>
        "#;
        let findings = ButtonNameAnalyzer.analyze_file(Path::new("test.html"), html);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_id, "WCAG-4.1.2-button-no-name");
        assert_eq!(findings[0].line, Some(3));
    }

    #[test]
    fn test_icon_only_button() {
        let html = r#"<button class="icon"><i class="fa fa-close"></i></button>"#;
        let findings = ButtonNameAnalyzer.analyze_file(Path::new("test.html"), html);
        assert_eq!(findings.len(), 1);
    }
}
