// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heuristic accessibility checks over raw markup text.
//!
//! Every check is a pure function from a markup fragment to a pass/fail
//! verdict. Elements are located with regular expressions, not a parsed
//! document tree, so the checks accept any string (empty, partial,
//! malformed) and never fail. A fragment with no relevant elements passes.
//!
//! Each boolean check has a finder companion that returns the failing
//! occurrences in document order. A check passes exactly when its finder
//! returns nothing.
//!
//! | Check | Located by | Fails when |
//! |-------|------------|------------|
//! | [`has_alt_text`] | `<img ...>` | an image has no `alt=` |
//! | [`has_form_labels`] | `<input ...>` | an input with an `id` has no `<label for>` and no ARIA label |
//! | [`has_valid_heading_structure`] | `<h1>`..`<h6>` | a heading is more than one level below the previous one |
//! | [`has_button_names`] | `<button ...>...</button>` | no text, `aria-label=` or `title=` |
//! | [`has_link_text`] | `<a ...>...</a>` | no text, `aria-label=` or `title=` |

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<img[^>]*>").expect("valid regex"));

static INPUT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<input[^>]*>").expect("valid regex"));

static ID_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"id="([^"]*)""#).expect("valid regex"));

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h([1-6])[^>]*>").expect("valid regex"));

static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<label[^>]*>").expect("valid regex"));

// Element content never crosses a line terminator (LF, CR, LS, PS), so an
// element split across lines is never matched.
static BUTTON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<button[^>]*>[^\n\r\x{2028}\x{2029}]*?</button>").expect("valid regex")
});

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<a[^>]*>[^\n\r\x{2028}\x{2029}]*?</a>").expect("valid regex")
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// The five heuristic checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    /// Images carry an `alt` attribute
    AltText,
    /// Inputs with an `id` have a matching label
    FormLabels,
    /// Headings never skip a level going down
    HeadingStructure,
    /// Buttons have an accessible name
    ButtonNames,
    /// Links have an accessible name
    LinkText,
}

impl Check {
    /// All checks, in evaluation order
    pub const ALL: [Check; 5] = [
        Check::AltText,
        Check::FormLabels,
        Check::HeadingStructure,
        Check::ButtonNames,
        Check::LinkText,
    ];

    /// Stable kebab-case identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Check::AltText => "alt-text",
            Check::FormLabels => "form-labels",
            Check::HeadingStructure => "heading-structure",
            Check::ButtonNames => "button-names",
            Check::LinkText => "link-text",
        }
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Check {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Check::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| format!("Unknown check: {}", s))
    }
}

/// A single located element match within a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    /// Byte offset of the match start
    pub offset: usize,
    /// 1-based line of the match start
    pub line: usize,
    /// Matched text
    pub text: &'a str,
}

impl<'a> Occurrence<'a> {
    fn new(m: regex::Match<'a>, line: usize) -> Self {
        Self {
            offset: m.start(),
            line,
            text: m.as_str(),
        }
    }
}

/// An input whose `id` has no matching `<label for>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlabeledInput<'a> {
    pub occurrence: Occurrence<'a>,
    pub id: &'a str,
}

/// A heading that jumps more than one level below its predecessor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingSkip<'a> {
    pub occurrence: Occurrence<'a>,
    /// Level of the preceding heading, 0 when this is the first
    pub previous: u8,
    pub level: u8,
}

/// Running 1-based line number for offsets visited in ascending order
struct LineCounter<'a> {
    html: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> LineCounter<'a> {
    fn new(html: &'a str) -> Self {
        Self { html, pos: 0, line: 1 }
    }

    /// Line of `offset`; offsets must not decrease between calls
    fn line_at(&mut self, offset: usize) -> usize {
        self.line += self.html.as_bytes()[self.pos..offset]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        self.pos = offset;
        self.line
    }

    fn occurrence(&mut self, m: regex::Match<'a>) -> Occurrence<'a> {
        Occurrence::new(m, self.line_at(m.start()))
    }
}

fn missing_alt_matches(html: &str) -> impl Iterator<Item = regex::Match<'_>> {
    IMG_RE.find_iter(html).filter(|m| !m.as_str().contains("alt="))
}

/// Images whose tag carries no `alt=`
pub fn missing_alt_text(html: &str) -> Vec<Occurrence<'_>> {
    let mut lines = LineCounter::new(html);
    missing_alt_matches(html).map(|m| lines.occurrence(m)).collect()
}

fn unlabeled_input_matches(html: &str) -> impl Iterator<Item = (regex::Match<'_>, &str)> {
    // Built on first need, then shared by every input in the fragment.
    let mut targets: Option<HashSet<&str>> = None;

    INPUT_RE.find_iter(html).filter_map(move |m| {
        let tag = m.as_str();
        let has_aria_label = tag.contains("aria-label=") || tag.contains("aria-labelledby=");
        if has_aria_label || !tag.contains("id=") {
            return None;
        }

        // An unquoted id cannot be paired with a label; let it pass.
        let id = ID_VALUE_RE.captures(tag)?.get(1)?.as_str();

        let targets = targets.get_or_insert_with(|| label_targets(html));
        (!targets.contains(id)).then_some((m, id))
    })
}

/// Every value `v` such that some `<label ...>` tag contains `for="v"`
fn label_targets(html: &str) -> HashSet<&str> {
    let mut targets = HashSet::new();
    for m in LABEL_RE.find_iter(html) {
        let tag = m.as_str();
        for (pos, needle) in tag.match_indices(r#"for=""#) {
            let rest = &tag[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                targets.insert(&rest[..end]);
            }
        }
    }
    targets
}

/// Inputs declaring a quoted `id` with neither an ARIA label nor a `<label for>`
pub fn unlabeled_inputs(html: &str) -> Vec<UnlabeledInput<'_>> {
    let mut lines = LineCounter::new(html);
    unlabeled_input_matches(html)
        .map(|(m, id)| UnlabeledInput { occurrence: lines.occurrence(m), id })
        .collect()
}

fn heading_skip_matches(html: &str) -> impl Iterator<Item = (regex::Match<'_>, u8, u8)> {
    let mut previous = 0u8;

    HEADING_RE.captures_iter(html).filter_map(move |caps| {
        let whole = caps.get(0)?;
        let level = caps.get(1)?.as_str().as_bytes()[0] - b'0';
        let prev = std::mem::replace(&mut previous, level);
        (level > prev + 1).then_some((whole, prev, level))
    })
}

/// Headings that descend more than one level from the previous heading
pub fn heading_skips(html: &str) -> Vec<HeadingSkip<'_>> {
    let mut lines = LineCounter::new(html);
    heading_skip_matches(html)
        .map(|(m, previous, level)| HeadingSkip {
            occurrence: lines.occurrence(m),
            previous,
            level,
        })
        .collect()
}

fn unnamed_matches<'a>(re: &'a Regex, html: &'a str) -> impl Iterator<Item = regex::Match<'a>> {
    re.find_iter(html).filter(|m| !has_accessible_name(m.as_str()))
}

/// Buttons with no visible text, `aria-label` or `title`
pub fn unnamed_buttons(html: &str) -> Vec<Occurrence<'_>> {
    let mut lines = LineCounter::new(html);
    unnamed_matches(&BUTTON_RE, html).map(|m| lines.occurrence(m)).collect()
}

/// Links with no visible text, `aria-label` or `title`
pub fn unnamed_links(html: &str) -> Vec<Occurrence<'_>> {
    let mut lines = LineCounter::new(html);
    unnamed_matches(&LINK_RE, html).map(|m| lines.occurrence(m)).collect()
}

fn has_accessible_name(element: &str) -> bool {
    let has_text = !TAG_RE.replace_all(element, "").trim().is_empty();
    has_text || element.contains("aria-label=") || element.contains("title=")
}

/// Every image has an `alt` attribute (empty `alt=""` counts)
pub fn has_alt_text(html: &str) -> bool {
    missing_alt_matches(html).next().is_none()
}

/// Every input with an `id` is labelled
///
/// Inputs without an `id` are never flagged.
pub fn has_form_labels(html: &str) -> bool {
    unlabeled_input_matches(html).next().is_none()
}

/// No heading skips a level on the way down
pub fn has_valid_heading_structure(html: &str) -> bool {
    heading_skip_matches(html).next().is_none()
}

/// Every matched `<button>...</button>` has a name
pub fn has_button_names(html: &str) -> bool {
    unnamed_matches(&BUTTON_RE, html).next().is_none()
}

/// Every matched `<a>...</a>` has a name
pub fn has_link_text(html: &str) -> bool {
    unnamed_matches(&LINK_RE, html).next().is_none()
}

/// Run a single check by name
pub fn check(check: Check, html: &str) -> bool {
    match check {
        Check::AltText => has_alt_text(html),
        Check::FormLabels => has_form_labels(html),
        Check::HeadingStructure => has_valid_heading_structure(html),
        Check::ButtonNames => has_button_names(html),
        Check::LinkText => has_link_text(html),
    }
}

/// Verdict of every check, in [`Check::ALL`] order
pub fn evaluate(html: &str) -> Vec<(Check, bool)> {
    Check::ALL.into_iter().map(|c| (c, check(c, html))).collect()
}
