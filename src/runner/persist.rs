// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! On-disk persistence for [`RunState`].
//!
//! ```text
//! <cache dir>/git-town/<repo-id>/runstate.json
//!     repo-id = absolute repo root, separators sanitized
//!     written atomically (temp file + rename)
//! ```
//!
//! The file's mere presence is the advisory signal that a run exists; there
//! is no locking.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::state::{RUNSTATE_VERSION, RunState};
use crate::error::{RunstateError, TownResult};

/// Loads, saves, and deletes the runstate file of one repository.
pub struct RunstateStore {
    path: PathBuf,
}

impl RunstateStore {
    /// The store for the repository rooted at `repo_root`.
    #[must_use]
    pub fn for_repo(repo_root: &Path) -> Self {
        let cache = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
        let repo_id: String = repo_root
            .display()
            .to_string()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect();
        Self {
            path: cache.join("git-town").join(repo_id).join("runstate.json"),
        }
    }

    /// A store at an explicit path. Used by tests.
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the runstate file lives.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted runstate, `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns `RunstateError::Incompatible` for unknown step tags or a
    /// version mismatch, `RunstateError::Io` for access failures.
    pub fn load(&self) -> TownResult<Option<RunState>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RunstateError::Io {
                    path: self.path.display().to_string(),
                    source: e,
                }
                .into());
            }
        };
        let state: RunState =
            serde_json::from_str(&contents).map_err(|e| RunstateError::Incompatible {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
        if state.version != RUNSTATE_VERSION {
            return Err(RunstateError::Incompatible {
                path: self.path.display().to_string(),
                message: format!(
                    "schema version {} (this binary writes {RUNSTATE_VERSION})",
                    state.version
                ),
            }
            .into());
        }
        debug!(path = %self.path.display(), command = %state.command, "runstate loaded");
        Ok(Some(state))
    }

    /// Persists the runstate atomically.
    ///
    /// # Errors
    ///
    /// Returns `RunstateError::Io` if writing fails.
    pub fn save(&self, state: &RunState) -> TownResult<()> {
        debug!(path = %self.path.display(), command = %state.command, "writing runstate");
        let io_err = |e: std::io::Error| RunstateError::Io {
            path: self.path.display().to_string(),
            source: e,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let mut contents = serde_json::to_string_pretty(state).map_err(|e| {
            RunstateError::Incompatible {
                path: self.path.display().to_string(),
                message: e.to_string(),
            }
        })?;
        contents.push('\n');
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents).map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;
        Ok(())
    }

    /// Removes the runstate file. No-op if none exists.
    ///
    /// # Errors
    ///
    /// Returns `RunstateError::Io` if removal fails.
    pub fn delete(&self) -> TownResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "runstate deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RunstateError::Io {
                path: self.path.display().to_string(),
                source: e,
            }
            .into()),
        }
    }
}
