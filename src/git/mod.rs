// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! Backend (facade, owns the repo path)
//!    |                |
//!    v                v
//! GitQuery (read)  GitMutation (write)
//! GixBackend       ShellBackend
//! pure Rust gix    git CLI subprocess
//! ```
//!
//! Steps and validation talk to [`Backend`] only; the traits exist so tests
//! can exercise query and mutation paths independently.

pub mod backend;

pub use backend::Backend;

use serde::{Deserialize, Serialize};

/// A branch name. Non-empty, case-sensitive, no leading `refs/heads/`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchName(String);

impl std::fmt::Debug for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl BranchName {
    /// Wraps a raw branch name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tracking branch on origin for this branch.
    #[must_use]
    pub fn at_origin(&self) -> String {
        format!("origin/{}", self.0)
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BranchName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for BranchName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An opaque 40-hex commit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sha(String);

impl Sha {
    /// Wraps a raw commit id.
    #[must_use]
    pub fn new(sha: impl Into<String>) -> Self {
        Self(sha.into())
    }

    /// The raw hex form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The abbreviated form used in messages.
    #[must_use]
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(7)]
    }
}

impl std::fmt::Display for Sha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
