// SPDX-License-Identifier: PMPL-1.0-or-later
//! Example-based tests for the five heuristic checks

use a11y_heuristics::checks::*;

#[test]
fn test_proper_image_alt_text() {
    let html = r#"
      <img src="test.jpg" alt="Test image description" />
      <img src="decorative.jpg" alt="" />
    "#;
    assert!(has_alt_text(html));
}

#[test]
fn test_proper_form_labels() {
    let html = r#"
      <form>
        <label for="name">Name:</label>
        <input id="name" type="text" />
        <label for="email">Email:</label>
        <input id="email" type="email" />
        <button type="submit">Submit</button>
      </form>
    "#;
    assert!(has_form_labels(html));
}

#[test]
fn test_proper_heading_structure() {
    let html = r#"
      <h1>Main Heading</h1>
      <h2>Sub Heading</h2>
      <h3>Sub Sub Heading</h3>
    "#;
    assert!(has_valid_heading_structure(html));
}

#[test]
fn test_proper_button_names() {
    let html = r#"
      <button>Submit Form</button>
      <button aria-label="Close dialog">×</button>
      <button title="Help">?</button>
    "#;
    assert!(has_button_names(html));
}

#[test]
fn test_proper_link_text() {
    let html = r#"
      <a href="/about">About Us</a>
      <a href="/contact">Contact Information</a>
      <a href="/help" aria-label="Help and support page">Learn more</a>
    "#;
    assert!(has_link_text(html));
}

#[test]
fn test_detects_missing_alt_text() {
    let html = r#"
      <img src="test.jpg" />
      <img src="decorative.jpg" alt="" />
    "#;
    assert!(!has_alt_text(html));
}

#[test]
fn test_detects_missing_form_labels() {
    let html = r#"
      <form>
        <input id="name" type="text" />
        <label for="email">Email:</label>
        <input id="email" type="email" />
      </form>
    "#;
    assert!(!has_form_labels(html));
}

#[test]
fn test_detects_improper_heading_structure() {
    let html = r#"
      <h1>Main Heading</h1>
      <h3>Sub Sub Heading</h3>
    "#;
    assert!(!has_valid_heading_structure(html));
}

#[test]
fn test_detects_missing_button_names() {
    let html = r#"
      <button>Submit Form</button>
      <button></button>
    "#;
    assert!(!has_button_names(html));
}

#[test]
fn test_detects_missing_link_text() {
    let html = r#"
      <a href="/about">About Us</a>
      <a href="/contact"></a>
    "#;
    assert!(!has_link_text(html));
}

#[test]
fn test_checks_are_independent_of_each_other() {
    let html = r#"<h1>A</h1><h3>B</h3>"#;
    let heading_first = has_valid_heading_structure(html);
    let _ = evaluate(html);
    assert_eq!(heading_first, has_valid_heading_structure(html));
    assert!(has_alt_text(html) && has_form_labels(html));
}

#[test]
fn test_checks_are_safe_across_threads() {
    let inputs = [
        "<img src=\"a\">",
        "<h1>a</h1><h2>b</h2>",
        "<a href=\"/\"></a>",
        "",
    ];
    let expected: Vec<_> = inputs.iter().map(|h| evaluate(h)).collect();

    let handles: Vec<_> = inputs
        .iter()
        .map(|h| {
            let h = h.to_string();
            std::thread::spawn(move || evaluate(&h))
        })
        .collect();

    for (handle, want) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), want);
    }
}
