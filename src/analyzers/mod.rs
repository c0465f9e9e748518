// SPDX-License-Identifier: PMPL-1.0-or-later
//! Analyzers turning failed check occurrences into findings.
//!
//! Each analyzer wraps one heuristic from [`crate::checks`] and attaches the
//! WCAG criterion, severity and remediation advice for it.

pub mod alt_text;
pub mod buttons;
pub mod forms;
pub mod headings;
pub mod links;

use crate::checks::Check;
use crate::config::Config;
use crate::finding::{Finding, FindingSet};
use std::path::Path;
use tracing::debug;

/// Trait implemented by all analyzers
pub trait Analyzer: Send + Sync {
    /// Human-readable name of this analyzer
    fn name(&self) -> &str;

    /// Short description of what this analyzer checks
    fn description(&self) -> &str;

    /// The heuristic this analyzer reports on
    fn check(&self) -> Check;

    /// Analyze a single file and return findings
    fn analyze_file(&self, path: &Path, content: &str) -> Vec<Finding>;

    /// File extensions this analyzer applies to; `"*"` matches any
    fn applicable_extensions(&self) -> &[&str] {
        &["html", "htm", "jsx", "tsx", "svelte", "vue"]
    }
}

/// All analyzers, one per check
pub fn all_analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(alt_text::AltTextAnalyzer),
        Box::new(forms::FormLabelAnalyzer),
        Box::new(headings::HeadingAnalyzer),
        Box::new(buttons::ButtonNameAnalyzer),
        Box::new(links::LinkTextAnalyzer),
    ]
}

/// Run all enabled analyzers applicable to the file's extension
pub fn analyze_file(path: &Path, content: &str, config: &Config) -> FindingSet {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut findings = FindingSet::new();
    findings.files_scanned = 1;

    for analyzer in all_analyzers() {
        if !config.is_enabled(analyzer.check()) {
            continue;
        }

        let exts = analyzer.applicable_extensions();
        if exts.contains(&ext.as_str()) || exts.contains(&"*") {
            let file_findings = analyzer.analyze_file(path, content);
            debug!(
                analyzer = analyzer.name(),
                file = %path.display(),
                count = file_findings.len(),
                "Analyzer finished"
            );
            findings.extend(file_findings);
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROKEN: &str = r#"
        <h1>Title</h1>
        <h3>Skipped</h3>
        <img src="a.png">
        <input id="email" type="email">
        <button></button>
        <a href="/x"></a>
    "#;

    #[test]
    fn test_one_analyzer_per_check() {
        let checks: Vec<Check> = all_analyzers().iter().map(|a| a.check()).collect();
        assert_eq!(checks, Check::ALL.to_vec());
    }

    #[test]
    fn test_every_check_reports() {
        let findings = analyze_file(Path::new("page.html"), BROKEN, &Config::default());
        for check in Check::ALL {
            assert_eq!(findings.by_check(check).len(), 1, "expected one finding for {}", check);
        }
    }

    #[test]
    fn test_disabled_checks_are_skipped() {
        let config = Config { checks: vec![Check::AltText], ..Config::default() };
        let findings = analyze_file(Path::new("page.html"), BROKEN, &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings.findings[0].check, Some(Check::AltText));
    }

    #[test]
    fn test_unrelated_extension_is_skipped() {
        let findings = analyze_file(Path::new("styles.css"), BROKEN, &Config::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let findings = analyze_file(Path::new("PAGE.HTML"), BROKEN, &Config::default());
        assert_eq!(findings.len(), 5);
    }

    #[test]
    fn test_findings_agree_with_verdicts() {
        let findings = analyze_file(Path::new("page.html"), BROKEN, &Config::default());
        for (check, passed) in crate::checks::evaluate(BROKEN) {
            assert_eq!(passed, findings.by_check(check).is_empty());
        }
    }
}
