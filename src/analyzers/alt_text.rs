// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text analyzer - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Every `<img>` tag must carry an `alt` attribute. Only presence is
//! checked: `alt=""` is the correct marking for decorative images and
//! passes.

use crate::analyzers::Analyzer;
use crate::checks::{self, Check};
use crate::finding::{Finding, ImpactAssessment, Severity, WcagLevel};
use std::path::Path;

/// Analyzer for image alt text presence
pub struct AltTextAnalyzer;

impl Analyzer for AltTextAnalyzer {
    fn name(&self) -> &str {
        "Alt Text Analyzer"
    }

    fn description(&self) -> &str {
        "Checks <img> elements for an alt attribute (WCAG 1.1.1)"
    }

    fn check(&self) -> Check {
        Check::AltText
    }

    fn analyze_file(&self, path: &Path, content: &str) -> Vec<Finding> {
        checks::missing_alt_text(content)
            .into_iter()
            .map(|img| {
                Finding::new(
                    "WCAG-1.1.1-missing-alt",
                    Severity::Error,
                    "Image is missing alt attribute. Every <img> must have an alt attribute.",
                )
                .with_check(Check::AltText)
                .with_wcag("1.1.1", WcagLevel::A)
                .with_rule_name("Non-text Content: Missing Alt")
                .with_file(path.to_path_buf())
                .with_line(img.line)
                .with_element(img.text)
                .with_suggestion(
                    "Add alt=\"description\" for informative images or alt=\"\" for decorative images",
                )
                .as_fixable()
                .with_impact(ImpactAssessment::blind())
            })
            .collect()
    }
}
