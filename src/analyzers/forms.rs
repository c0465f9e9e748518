// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form label analyzer - WCAG 3.3.2 Labels or Instructions (Level A)
//!
//! An `<input>` that declares an `id` must be named by a `<label for>`
//! pointing at that id, or by `aria-label` / `aria-labelledby`. Inputs
//! without an `id` are out of reach of this heuristic and are not reported.

use crate::analyzers::Analyzer;
use crate::checks::{self, Check};
use crate::finding::{Finding, ImpactAssessment, Severity, WcagLevel};
use std::path::Path;

/// Form input labelling analyzer
pub struct FormLabelAnalyzer;

impl Analyzer for FormLabelAnalyzer {
    fn name(&self) -> &str {
        "Form Label Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that identified <input> elements have a label (WCAG 3.3.2)"
    }

    fn check(&self) -> Check {
        Check::FormLabels
    }

    fn analyze_file(&self, path: &Path, content: &str) -> Vec<Finding> {
        checks::unlabeled_inputs(content)
            .into_iter()
            .map(|input| {
                Finding::new(
                    "WCAG-3.3.2-input-no-label",
                    Severity::Error,
                    &format!(
                        "<input id=\"{}\"> has no associated label. Add a <label for=\"{}\">, aria-label, or aria-labelledby.",
                        input.id, input.id
                    ),
                )
                .with_check(Check::FormLabels)
                .with_wcag("3.3.2", WcagLevel::A)
                .with_rule_name("Labels or Instructions: Missing Input Label")
                .with_file(path.to_path_buf())
                .with_line(input.occurrence.line)
                .with_element(input.occurrence.text)
                .with_suggestion(&format!(
                    "Add <label for=\"{}\">...</label> or an aria-label attribute",
                    input.id
                ))
                .as_fixable()
                .with_impact(ImpactAssessment::blind())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_inputs() {
        let html = r#"
            <form>
                <label for="name">Name:</label>
                <input id="name" type="text" />
                <label for="email">Email:</label>
                <input id="email" type="email" />
                <button type="submit">Submit</button>
            </form>
        "#;
        let findings = FormLabelAnalyzer.analyze_file(Path::new("test.html"), html);
        assert!(findings.is_empty(), "Labelled inputs should not produce findings");
    }

    #[test]
    fn test_unlabelled_input() {
        let html = r#"
            <form>
                <input id="name" type="text" />
                <label for="email">Email:</label>
                <input id="email" type="email" />
            </form>
        "#;
        let findings = FormLabelAnalyzer.analyze_file(Path::new("test.html"), html);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, Some(3));
        assert!(findings[0].message.contains("id=\"name\""));
    }

    #[test]
    fn test_input_without_id_not_reported() {
        let html = r#"<form><input type="text" placeholder="Anything"></form>"#;
        let findings = FormLabelAnalyzer.analyze_file(Path::new("test.html"), html);
        assert!(findings.is_empty());
    }
}
