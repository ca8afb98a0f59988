//! Function page enumeration.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Landing page of the function reference; documents no function.
const INDEX_PAGE: &str = "index.mdx";

/// List the function pages in `dir`, sorted by file name, skipping the index.
pub fn list_pages(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir_str = dir
        .to_str()
        .with_context(|| format!("non UTF-8 directory: {}", dir.display()))?;
    let pattern = format!("{}/*", glob::Pattern::escape(dir_str));

    let mut pages: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .filter(|p| p.file_name().and_then(|n| n.to_str()) != Some(INDEX_PAGE))
        .collect();
    // Sort for deterministic output
    pages.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(pages)
}

/// Default function name for a page: its file name minus the last extension.
/// "upper.mdx" → "upper", "Makefile" → "Makefile"
pub fn stem_name(path: &Path) -> String {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    match filename.rfind('.') {
        Some(i) => filename[..i].to_string(),
        None => filename,
    }
}
