// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading hierarchy analyzer - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Headings may move back up to any level, but moving down must go one
//! level at a time (h1 to h3 skips h2). The first heading counts as a move
//! down from level 0, so a fragment starting with h2 is already a skip.

use crate::analyzers::Analyzer;
use crate::checks::{self, Check};
use crate::finding::{Finding, ImpactAssessment, Severity, WcagLevel};
use std::path::Path;

/// Heading hierarchy analyzer
pub struct HeadingAnalyzer;

impl Analyzer for HeadingAnalyzer {
    fn name(&self) -> &str {
        "Heading Hierarchy Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that h1-h6 headings do not skip levels (WCAG 1.3.1)"
    }

    fn check(&self) -> Check {
        Check::HeadingStructure
    }

    fn analyze_file(&self, path: &Path, content: &str) -> Vec<Finding> {
        checks::heading_skips(content)
            .into_iter()
            .map(|skip| {
                let message = if skip.previous == 0 {
                    format!(
                        "First heading is <h{}>. The heading outline should start at <h1>.",
                        skip.level
                    )
                } else {
                    format!(
                        "Heading level skipped from <h{}> to <h{}>. Do not skip heading levels.",
                        skip.previous, skip.level
                    )
                };

                Finding::new("WCAG-1.3.1-heading-skip", Severity::Warning, &message)
                    .with_check(Check::HeadingStructure)
                    .with_wcag("1.3.1", WcagLevel::A)
                    .with_rule_name("Info and Relationships: Heading Skip")
                    .with_file(path.to_path_buf())
                    .with_line(skip.occurrence.line)
                    .with_element(skip.occurrence.text)
                    .with_suggestion(&format!(
                        "Use <h{}> instead of <h{}>, or add intermediate heading levels",
                        skip.previous + 1,
                        skip.level
                    ))
                    .with_impact(ImpactAssessment::blind())
            })
            .collect()
    }
}
