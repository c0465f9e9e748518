// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link text analyzer - WCAG 2.4.4 Link Purpose (Level A)
//!
//! Same naming rule as buttons: text content, `aria-label`, or `title`.

use crate::analyzers::Analyzer;
use crate::checks::{self, Check};
use crate::finding::{Finding, ImpactAssessment, Severity, WcagLevel};
use std::path::Path;

/// Link text analyzer
pub struct LinkTextAnalyzer;

impl Analyzer for LinkTextAnalyzer {
    fn name(&self) -> &str {
        "Link Text Analyzer"
    }

    fn description(&self) -> &str {
        "Checks <a> elements for link text or an accessible name (WCAG 2.4.4)"
    }

    fn check(&self) -> Check {
        Check::LinkText
    }

    fn analyze_file(&self, path: &Path, content: &str) -> Vec<Finding> {
        checks::unnamed_links(content)
            .into_iter()
            .map(|link| {
                Finding::new(
                    "WCAG-2.4.4-link-no-text",
                    Severity::Error,
                    "Link has no text or accessible name. Its purpose cannot be determined.",
                )
                .with_check(Check::LinkText)
                .with_wcag("2.4.4", WcagLevel::A)
                .with_rule_name("Link Purpose: Empty Link")
                .with_file(path.to_path_buf())
                .with_line(link.line)
                .with_element(link.text)
                .with_suggestion("Add descriptive link text, an aria-label, or a title")
                .with_impact(ImpactAssessment::blind_and_cognitive())
            })
            .collect()
    }
}
