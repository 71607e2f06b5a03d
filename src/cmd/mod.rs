// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! ```text
//! handler
//!   Workspace::load()        backend + config + runstate store
//!   validate                 pre-flight checks, prompts
//!   build StepList           per-command expansion
//!   Workspace::execute_new() RunState -> Runner
//! ```
//!
//! Handlers return the runner outcome; exit-code mapping happens in main.

pub mod config;
pub mod hack;
pub mod kill;
pub mod proposal;
pub mod prune;
pub mod recovery;
pub mod rename;
pub mod ship;
pub mod switch;
pub mod sync;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::{Result, ValidateError};
use crate::git::Backend;
use crate::runner::{Outcome, RunState, Runner, RunstateStore};
use crate::step::{RunContext, Step};

/// The collaborators every command works with.
pub struct Workspace {
    pub backend: Backend,
    pub config: Config,
    pub cancel: CancellationToken,
}

impl Workspace {
    /// Discovers the repository containing the current working directory.
    ///
    /// # Errors
    ///
    /// Returns `ValidateError::NotARepository` outside a git work tree.
    pub fn load(cancel: CancellationToken) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let backend =
            Backend::discover(&cwd).map_err(|_| ValidateError::NotARepository)?;
        let config = Config::new(backend.root());
        Ok(Self {
            backend,
            config,
            cancel,
        })
    }

    /// The runstate store of this repository.
    #[must_use]
    pub fn store(&self) -> RunstateStore {
        RunstateStore::for_repo(self.backend.root())
    }

    /// Builds and runs a fresh runstate for the given command.
    ///
    /// # Errors
    ///
    /// Propagates fatal runner errors.
    pub async fn execute_new(
        &self,
        command: &str,
        steps: Vec<Step>,
        dry_run: bool,
    ) -> Result<Outcome> {
        self.execute_state(RunState::new(command, steps), dry_run)
            .await
    }

    /// Runs an existing runstate (continue/abort/skip/undo).
    ///
    /// # Errors
    ///
    /// Propagates fatal runner errors.
    pub async fn execute_state(&self, state: RunState, dry_run: bool) -> Result<Outcome> {
        let connector = crate::forge::detect(&self.backend, &self.config)?;
        let ctx = RunContext {
            backend: &self.backend,
            config: &self.config,
            connector: connector.as_deref(),
        };
        let runner = Runner::new(ctx, self.store())
            .with_cancel_token(self.cancel.clone())
            .with_dry_run(dry_run);
        Ok(runner.execute(state).await?)
    }
}
