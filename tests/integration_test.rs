// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for a11y-heuristics

use a11y_heuristics::checks::Check;
use a11y_heuristics::config::Config;
use a11y_heuristics::report::{generate_report, OutputFormat};
use a11y_heuristics::scanner;
use std::path::Path;

fn scan(fixture: &str) -> a11y_heuristics::finding::FindingSet {
    scanner::scan_file(&Path::new("tests/fixtures").join(fixture), &Config::default())
        .expect("scan should succeed")
}

#[test]
fn test_scan_accessible_fixture() {
    let findings = scan("accessible.html");
    assert!(
        findings.is_empty(),
        "Accessible fixture should have no findings, got: {:?}",
        findings.findings.iter().map(|f| &f.rule_id).collect::<Vec<_>>()
    );
}

#[test]
fn test_scan_inaccessible_fixture() {
    let findings = scan("inaccessible.html");

    assert_eq!(findings.by_check(Check::AltText).len(), 2);
    assert_eq!(findings.by_check(Check::FormLabels).len(), 1);
    // h1 -> h3 and h3 -> h5
    assert_eq!(findings.by_check(Check::HeadingStructure).len(), 2);
    assert_eq!(findings.by_check(Check::ButtonNames).len(), 2);
    assert_eq!(findings.by_check(Check::LinkText).len(), 1);
    assert!(findings.has_errors());
}

#[test]
fn test_inaccessible_fixture_lines() {
    let findings = scan("inaccessible.html");
    let mut lines: Vec<usize> = findings
        .by_check(Check::HeadingStructure)
        .iter()
        .filter_map(|f| f.line)
        .collect();
    lines.sort_unstable();
    assert_eq!(lines, vec![5, 17]);

    let label = findings.by_check(Check::FormLabels);
    assert_eq!(label[0].line, Some(9));
}

#[test]
fn test_scan_partial_fixture() {
    let findings = scan("partial.vue");
    // The leading h2 and the empty button
    assert_eq!(findings.len(), 2);
    assert_eq!(findings.by_check(Check::ButtonNames).len(), 1);
    assert_eq!(findings.by_check(Check::HeadingStructure).len(), 1);
}

#[test]
fn test_scan_fixtures_directory() {
    let findings = scanner::scan_directory(Path::new("tests/fixtures"), &Config::default())
        .expect("scan should succeed");
    assert_eq!(findings.files_scanned, 3);
    assert_eq!(findings.len(), 10);
}

#[test]
fn test_json_report_valid() {
    let findings = scan("inaccessible.html");
    let report = generate_report(&findings, OutputFormat::Json).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&report).expect("JSON report should be valid JSON");

    assert_eq!(parsed["findings"].as_array().unwrap().len(), findings.len());
    assert_eq!(parsed["files_scanned"], 1);
}

#[test]
fn test_sarif_report_valid() {
    let findings = scan("inaccessible.html");
    let report = generate_report(&findings, OutputFormat::Sarif).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&report).expect("SARIF report should be valid JSON");

    assert_eq!(parsed["version"], "2.1.0");
    assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "a11y-heuristics");
    assert_eq!(parsed["runs"][0]["tool"]["driver"]["rules"].as_array().unwrap().len(), 5);
    assert!(parsed["runs"][0]["results"].is_array());
}

#[test]
fn test_text_report_format() {
    let findings = scan("inaccessible.html");
    let report = generate_report(&findings, OutputFormat::Text).unwrap();

    assert!(report.contains("a11y-heuristics Report"));
    assert!(report.contains("WCAG"));
    assert!(report.contains("RELEASE BLOCKED"));
}

#[test]
fn test_config_limits_checks() {
    let config = Config { checks: vec![Check::LinkText], ..Config::default() };
    let findings = scanner::scan_file(Path::new("tests/fixtures/inaccessible.html"), &config)
        .expect("scan should succeed");
    assert_eq!(findings.len(), 1);
}
