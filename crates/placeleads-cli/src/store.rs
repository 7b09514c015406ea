//! JSON file persistence for the working set.
//!
//! The file is read once at startup and rewritten whole after each change.
//! Writes go to a sibling temp file first and are renamed into place, so an
//! interrupted save never leaves a truncated store behind.

use std::path::{Path, PathBuf};

use anyhow::Context;
use placeleads_core::WorkingSet;
use serde::{Deserialize, Serialize};

const STORE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    working_set: WorkingSet,
}

#[derive(Debug, Clone)]
pub(crate) struct LeadStore {
    path: PathBuf,
}

impl LeadStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored working set. A missing file is an empty set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or was
    /// written by an incompatible version.
    pub(crate) fn load(&self) -> anyhow::Result<WorkingSet> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no lead store yet; starting empty");
                return Ok(WorkingSet::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", self.path.display()))
            }
        };

        let file: StoreFile = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        if file.version != STORE_VERSION {
            anyhow::bail!(
                "incompatible lead store version: {} has version {} but current version is {}",
                self.path.display(),
                file.version,
                STORE_VERSION
            );
        }
        Ok(file.working_set)
    }

    /// Writes `working_set`, replacing the previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the temp file cannot be written or renamed.
    pub(crate) fn save(&self, working_set: &WorkingSet) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let file = StoreFile {
            version: STORE_VERSION,
            working_set: working_set.clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        let temp_path = self.temp_path();
        {
            let mut out = std::fs::File::create(&temp_path)
                .with_context(|| format!("failed to create {}", temp_path.display()))?;
            std::io::Write::write_all(&mut out, content.as_bytes())?;
            out.sync_all()?;
        }
        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;

        tracing::debug!(
            path = %self.path.display(),
            leads = working_set.len(),
            "lead store saved"
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
