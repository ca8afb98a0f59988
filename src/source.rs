//! Documentation source acquisition — a scoped clone or an existing checkout.

use crate::error::GenerateError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Upstream repository holding the function reference pages.
pub const DEFAULT_REPO: &str = "https://github.com/hashicorp/terraform.git";

/// Location of the function pages inside the repository.
pub const FUNCTIONS_SUBDIR: &str = "website/docs/language/functions";

/// A documentation tree on disk. A cloned tree is removed when dropped.
pub enum DocsSource {
    Cloned(TempDir),
    Local(PathBuf),
}

impl DocsSource {
    /// Shallow-clone `url` into a fresh temporary directory.
    pub fn clone_repo(url: &str) -> Result<Self> {
        let dir = TempDir::new().context("failed to create temporary directory")?;
        tracing::info!("cloning {} into {}", url, dir.path().display());

        let output = Command::new("git")
            .args(["clone", "--depth", "1", "--quiet", url])
            .arg(dir.path())
            .output()
            .map_err(GenerateError::GitUnavailable)?;
        if !output.status.success() {
            return Err(GenerateError::CloneFailed {
                url: url.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(DocsSource::Cloned(dir))
    }

    pub fn root(&self) -> &Path {
        match self {
            DocsSource::Cloned(dir) => dir.path(),
            DocsSource::Local(path) => path,
        }
    }

    /// Directory holding one page per function.
    pub fn functions_dir(&self) -> Result<PathBuf> {
        let dir = self.root().join(FUNCTIONS_SUBDIR);
        if !dir.is_dir() {
            return Err(GenerateError::MissingFunctionsDir(dir).into());
        }
        Ok(dir)
    }
}
