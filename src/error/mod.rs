// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              TownError (~16 bytes)
//!                     |
//!   +----+----+----+----+----+----+----+
//!   |    |    |    |    |    |    |    |
//!   v    v    v    v    v    v    v    v
//! Bail  Git Forge Cfg  Run  Val  Io  Other
//!       Box  Box  Box  Box  Box  Box Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git      Gix, CommandFailed, BranchNotFound
//!   Forge    Reqwest, HttpError, NoConnector
//!   Config   InvalidValue, MissingKey, LineageCycle
//!   Runstate Incompatible, Io, NothingToDo
//!   Validate NotARepository, UnfinishedRun, ...
//!
//! All variants boxed => TownError stays pointer-sized.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`TownError`].
pub type TownResult<T> = std::result::Result<T, TownError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum TownError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("{0}")]
    Git(#[from] Box<GitError>),

    /// Forge (hosting service) operation failed.
    #[error("forge error: {0}")]
    Forge(#[from] Box<ForgeError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Runstate persistence error.
    #[error("runstate error: {0}")]
    Runstate(#[from] Box<RunstateError>),

    /// Validation error.
    #[error("{0}")]
    Validate(#[from] Box<ValidateError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`TownError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> TownError {
    TownError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for TownError {
                fn from(err: $error) -> Self {
                    TownError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ForgeError => Forge,
    ConfigError => Config,
    RunstateError => Runstate,
    ValidateError => Validate,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// gix has multiple error types that are converted through this enum.
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),

    /// Failed to resolve a revision to a commit.
    #[error("failed to resolve revision: {0}")]
    RevParse(#[from] Box<gix::revision::spec::parse::single::Error>),

    /// Failed to iterate references.
    #[error("failed to iterate references: {0}")]
    RefIter(String),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found at the specified path.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// Git command execution failed.
    ///
    /// Carries the stderr tail and exit code so the runner can classify
    /// the failure (conflict vs. transient vs. fatal).
    #[error("git command failed: {command}\n{stderr}")]
    CommandFailed {
        command: String,
        stderr: String,
        exit_code: i32,
    },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// HEAD is detached where a branch is required.
    #[error("HEAD is detached; please check out a branch first")]
    DetachedHead,

    /// Branch not found.
    #[error("there is no branch named {branch:?}")]
    BranchNotFound { branch: String },

    /// Branch already exists.
    #[error("a branch named {branch:?} already exists")]
    BranchAlreadyExists { branch: String },
}

// --- Forge Errors ---

/// Forge (hosting service) operation errors.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// No forge connector is configured for this repository.
    #[error(
        "this repository has no recognized hosting service; \
         configure \"git-town.code-hosting-driver\" to enable forge features"
    )]
    NoConnector,

    /// HTTP error response from the forge API.
    #[error("forge API error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The forge does not support this operation.
    #[error("{forge} does not support {operation}")]
    Unsupported {
        forge: &'static str,
        operation: &'static str,
    },

    /// An API token is required but not configured.
    #[error("no API token configured; set \"git-town.{key}\"")]
    MissingToken { key: &'static str },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for {key:?}: {message}")]
    InvalidValue { key: String, message: String },

    /// Missing required configuration key.
    #[error("missing required configuration {key:?}")]
    MissingKey { key: String },

    /// A lineage edit would create a cycle.
    #[error("setting the parent of {child:?} to {parent:?} would create a lineage cycle")]
    LineageCycle { child: String, parent: String },
}

// --- Runstate Errors ---

/// Errors around the persisted state of an interrupted command.
#[derive(Debug, Error)]
pub enum RunstateError {
    /// The persisted runstate cannot be understood by this version.
    #[error(
        "cannot resume: the runstate at {path} was written by an \
         incompatible version ({message})"
    )]
    Incompatible { path: String, message: String },

    /// Reading or writing the runstate file failed.
    #[error("cannot access runstate at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A recovery command was invoked but nothing is in progress.
    #[error("nothing to {command}")]
    NothingToDo { command: &'static str },
}

// --- Validation Errors ---

/// Pre-flight validation errors.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The working directory is not inside a git repository.
    #[error("this is not a git repository")]
    NotARepository,

    /// A previous command is unfinished.
    #[error(
        "you have an unfinished `{command}` in progress\n\
         please run \"git-town continue\", \"git-town abort\", or \"git-town skip\""
    )]
    UnfinishedRun { command: String },

    /// The working tree has uncommitted changes where a clean tree is required.
    #[error("this command requires a clean working tree; please commit or stash your changes")]
    DirtyWorkspace,

    /// The command targets a branch kind it cannot operate on.
    #[error("branch {branch:?} is not a feature branch; {command} only works on feature branches")]
    NotAFeatureBranch { branch: String, command: &'static str },

    /// The interactive prompt was aborted or returned no usable answer.
    #[error("aborted: {0}")]
    PromptAborted(String),
}

#[cfg(test)]
mod tests;
