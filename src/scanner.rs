// SPDX-License-Identifier: PMPL-1.0-or-later
//! Directory scanner for running the heuristics across a project.
//!
//! Walks directory trees, picks files by extension and runs the enabled
//! analyzers on each.

use crate::analyzers;
use crate::config::Config;
use crate::error::Result;
use crate::finding::FindingSet;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Scan a directory for accessibility issues
///
/// Unreadable entries and files are logged and skipped. A missing root
/// yields an empty set.
pub fn scan_directory(dir: &Path, config: &Config) -> Result<FindingSet> {
    let mut all_findings = FindingSet::new();

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(config.follow_links)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_str().unwrap_or("");
            !config.skips_dir(name) && !name.starts_with('.')
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("Skipping entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !config.scans_extension(ext) {
            continue;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        debug!("Analyzing {}", path.display());
        all_findings.merge(analyzers::analyze_file(path, &content, config));
    }

    info!(
        "Scanned {} files, found {} issues",
        all_findings.files_scanned,
        all_findings.len()
    );

    Ok(all_findings)
}

/// Scan a single file for accessibility issues
///
/// The configured extension filter does not apply; the caller chose the file.
pub fn scan_file(path: &Path, config: &Config) -> Result<FindingSet> {
    let content = std::fs::read_to_string(path)?;
    debug!("Analyzing {}", path.display());
    Ok(analyzers::analyze_file(path, &content, config))
}
