//! Page-to-fixture pipeline: scan, override, classify.

use crate::error::GenerateError;
use crate::model::{Classification, FixtureEntry, FunctionRecord};
use crate::{pages, parser, tables};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Scan every page in `functions_dir`, in file name order.
pub fn collect(functions_dir: &Path) -> Result<Vec<FixtureEntry>> {
    let pages = pages::list_pages(functions_dir)?;
    tracing::info!("scanning {} function pages", pages.len());

    let mut entries = Vec::with_capacity(pages.len());
    for path in &pages {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let record = parser::scan(&pages::stem_name(path), &content);
        entries.push(resolve(record)?);
    }
    Ok(entries)
}

/// Apply overrides, require at least one example, then classify.
pub fn resolve(mut record: FunctionRecord) -> Result<FixtureEntry, GenerateError> {
    if let Some(over) = tables::override_for(&record.name) {
        record.examples = over.examples();
    } else if record.examples.is_empty() {
        return Err(GenerateError::NoExamples {
            function: record.name,
        });
    }

    let class = tables::classify(&record.name);
    tracing::debug!("{}: {:?}, {} example(s)", record.name, class, record.examples.len());
    Ok(FixtureEntry { record, class })
}

/// Log table entries that are both experimental and unsupported.
pub fn warn_on_overlap() {
    for name in tables::overlapping() {
        tracing::warn!("{} is both experimental and unsupported; skipping it", name);
    }
}

/// Per-class counts for the run summary: (supported, experimental, unsupported).
pub fn summary(entries: &[FixtureEntry]) -> (usize, usize, usize) {
    entries.iter().fold((0, 0, 0), |(s, e, u), entry| match entry.class {
        Classification::Supported => (s + 1, e, u),
        Classification::Experimental => (s, e + 1, u),
        Classification::Unsupported => (s, e, u + 1),
    })
}
