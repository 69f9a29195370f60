//! Resolves the command-line source into the list of reports to process.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Extension of lsdvd XML reports. Matched case-sensitively.
const REPORT_EXTENSION: &str = "xml";

/// Returns `source` itself when it is a file, or the `*.xml` files directly
/// inside it (sorted by name) when it is a directory.
pub fn collect_reports(source: &Path) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(source)
        .with_context(|| format!("cannot access {}", source.display()))?;

    if !metadata.is_dir() {
        return Ok(vec![source.to_path_buf()]);
    }

    let mut reports = Vec::new();
    for entry in WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == REPORT_EXTENSION) {
            reports.push(path.to_path_buf());
        }
    }

    Ok(reports)
}
