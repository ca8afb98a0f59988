//! gen-builtins — regenerate the HCL builtins test fixture.
//!
//! Scrapes the example snippets from the Terraform function reference,
//! applies the hand-maintained overrides and classification tables, and
//! writes one `main.tf` with an `output` per example:
//!
//! - **default**: `gen-builtins` clones the docs and rewrites the fixture
//! - **offline**: `gen-builtins -s ../terraform` reads an existing checkout
//! - **check**: `gen-builtins --check` fails if the fixture is stale

mod error;
mod generate;
mod model;
mod pages;
mod parser;
mod render;
mod source;
mod tables;

use anyhow::{Context, Result};
use clap::Parser;
use source::DocsSource;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Fixture location, relative to this crate.
const DEFAULT_OUTPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/builtins/main.tf");

#[derive(Parser)]
#[command(
    name = "gen-builtins",
    about = "Generate the builtins test fixture from the Terraform function docs"
)]
struct Cli {
    /// Repository to clone the documentation from
    #[arg(long, default_value = source::DEFAULT_REPO)]
    repo: String,

    /// Use an existing checkout instead of cloning
    #[arg(short = 's', long, conflicts_with = "repo")]
    source: Option<PathBuf>,

    /// Fixture file to write
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Compare with the existing fixture instead of writing it
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    generate::warn_on_overlap();

    let docs = match cli.source {
        Some(ref path) => DocsSource::Local(path.clone()),
        None => DocsSource::clone_repo(&cli.repo)?,
    };
    let entries = generate::collect(&docs.functions_dir()?)?;
    let fixture = render::render(&entries);

    let (supported, experimental, unsupported) = generate::summary(&entries);
    tracing::info!(
        "{} supported, {} experimental, {} unsupported functions",
        supported,
        experimental,
        unsupported
    );

    if cli.check {
        return check_fixture(&cli.output, &fixture);
    }
    write_fixture(&cli.output, &fixture)
}

/// Replace the fixture, creating its directory if needed.
fn write_fixture(path: &Path, fixture: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, fixture).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

/// Fail unless the fixture on disk matches what would be written.
fn check_fixture(path: &Path, fixture: &str) -> Result<()> {
    let current = match fs::read_to_string(path) {
        Ok(current) => Some(current),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
    };
    if current.as_deref() != Some(fixture) {
        anyhow::bail!("{} is out of date; rerun gen-builtins", path.display());
    }
    tracing::info!("{} is up to date", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("testdata/builtins/main.tf");

        write_fixture(&path, "a").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a");
    }

    #[test]
    fn write_truncates_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.tf");
        fs::write(&path, "a much longer previous fixture").unwrap();

        write_fixture(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn check_matches() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.tf");
        fs::write(&path, "same").unwrap();

        assert!(check_fixture(&path, "same").is_ok());
        assert!(check_fixture(&path, "different").is_err());
    }

    #[test]
    fn check_unreadable_fixture_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.tf");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = check_fixture(&path, "x").unwrap_err();
        assert!(err.to_string().contains("failed to read"), "got: {}", err);
    }

    #[test]
    fn check_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = check_fixture(dir.path(), "x").unwrap_err();
        assert!(!err.to_string().contains("out of date"), "got: {}", err);
    }

    #[test]
    fn check_missing_file_is_stale() {
        let dir = TempDir::new().unwrap();
        let err = check_fixture(&dir.path().join("main.tf"), "x").unwrap_err();
        assert!(err.to_string().contains("out of date"));
    }
}
