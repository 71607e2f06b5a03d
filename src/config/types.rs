// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration value types.
//!
//! ```text
//! SyncStrategy:  merge (default for feature branches)
//!                rebase (default for perennial branches)
//! BranchKind:    Main | Perennial | Feature (derived, never stored)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a parent branch gets integrated into its child during sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStrategy {
    #[default]
    Merge,
    Rebase,
}

impl std::fmt::Display for SyncStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
            Self::Rebase => write!(f, "rebase"),
        }
    }
}

impl std::str::FromStr for SyncStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "merge" => Ok(Self::Merge),
            "rebase" => Ok(Self::Rebase),
            _ => Err(ConfigError::InvalidValue {
                key: "sync-strategy".to_string(),
                message: format!("expected 'merge' or 'rebase', got '{s}'"),
            }),
        }
    }
}

/// The kind of a branch, derived from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    /// The single main development branch.
    Main,
    /// A long-lived branch treated as a root; never has a parent.
    Perennial,
    /// Everything else; participates in lineage and sync.
    Feature,
}

/// Parse the boolean spellings accepted in git-town configuration and on
/// the command line.
///
/// # Errors
///
/// Returns a `ConfigError::InvalidValue` for anything that is not a
/// recognized yes/no spelling.
pub fn parse_bool(text: &str, key: &str) -> std::result::Result<bool, ConfigError> {
    match text.to_lowercase().as_str() {
        "yes" | "true" | "on" | "1" => Ok(true),
        "no" | "false" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("please provide either \"yes\" or \"no\", got {text:?}"),
        }),
    }
}

/// Render a boolean the way git-town prints settings.
#[must_use]
pub const fn format_bool(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
