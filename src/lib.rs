// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-heuristics - lightweight accessibility checks for markup fragments
//!
//! Five pattern-based heuristics flag the most common accessibility slips in
//! HTML-like text without building a document tree. They work on partial
//! templates and malformed snippets alike and never fail on input.
//!
//! ## Checks
//!
//! - **Alt Text** (1.1.1): images carry an `alt` attribute
//! - **Form Labels** (3.3.2): identified inputs have a label
//! - **Heading Structure** (1.3.1): headings do not skip levels
//! - **Button Names** (4.1.2): buttons have text, `aria-label` or `title`
//! - **Link Text** (2.4.4): links have text, `aria-label` or `title`
//!
//! ```
//! use a11y_heuristics::checks;
//!
//! assert!(checks::has_alt_text(r#"<img src="a.jpg" alt="" />"#));
//! assert!(!checks::has_valid_heading_structure("<h1>A</h1><h3>B</h3>"));
//! ```

pub mod analyzers;
pub mod checks;
pub mod config;
pub mod error;
pub mod finding;
pub mod report;
pub mod scanner;

pub use error::{Error, Result};
