// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   workflow:  hack | append | prepend | kill | rename-branch
//!              ship | sync | new-pull-request | repo | switch
//!              prune-branches
//!   recovery:  continue | abort | skip | undo | status
//!   setup:     config | completions | version | aliases
//!
//! exit codes: 0 success, 1 user-visible failure (incl. paused runs),
//!             2 unexpected internal errors
//! ```

use std::process::ExitCode;

use clap::CommandFactory;
use tokio_util::sync::CancellationToken;

use git_town_rs::cli::{self, Cli, Command};
use git_town_rs::cli::global::GlobalOptions;
use git_town_rs::cmd::Workspace;
use git_town_rs::cmd::config::{run_aliases_command, run_config_command};
use git_town_rs::cmd::hack::{run_append_command, run_hack_command, run_prepend_command};
use git_town_rs::cmd::kill::run_kill_command;
use git_town_rs::cmd::proposal::{run_new_pull_request_command, run_repo_command};
use git_town_rs::cmd::prune::run_prune_command;
use git_town_rs::cmd::recovery::{
    run_abort_command, run_continue_command, run_skip_command, run_status_command,
    run_undo_command,
};
use git_town_rs::cmd::rename::run_rename_command;
use git_town_rs::cmd::ship::run_ship_command;
use git_town_rs::cmd::switch::run_switch_command;
use git_town_rs::cmd::sync::run_sync_command;
use git_town_rs::error::{
    ConfigError, ForgeError, GitError, RunstateError, TownError, ValidateError,
};
use git_town_rs::logging::{LogConfig, LogLevel, init_logging};
use git_town_rs::prompt::TerminalPrompter;
use git_town_rs::runner::Outcome;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = if global.debug {
        LogLevel::DEBUG
    } else {
        LogLevel::INFO
    };
    LogConfig::builder()
        .with_console_level(console_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &Cli) -> ExitCode {
    // commands that work outside a repository
    match &cli.command {
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
        Some(Command::Version) => {
            println!(
                "Git Town {} ({})",
                env!("CARGO_PKG_VERSION"),
                env!("GIT_TOWN_BUILD_DATE")
            );
            return ExitCode::SUCCESS;
        }
        Some(Command::Completions(args)) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "git-town",
                &mut std::io::stdout(),
            );
            return ExitCode::SUCCESS;
        }
        Some(_) => {}
    }

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let ws = match Workspace::load(cancel) {
        Ok(ws) => ws,
        Err(e) => return report_error(&e),
    };
    let mut prompter = TerminalPrompter;

    let Some(command) = &cli.command else {
        unreachable!("handled above");
    };
    let result = match command {
        Command::Hack(args) => run_hack_command(args, &ws, &mut prompter).await,
        Command::Append(args) => run_append_command(args, &ws, &mut prompter).await,
        Command::Prepend(args) => run_prepend_command(args, &ws, &mut prompter).await,
        Command::Kill(args) => run_kill_command(args, &ws, &mut prompter).await,
        Command::RenameBranch(args) => run_rename_command(args, &ws).await,
        Command::Ship(args) => run_ship_command(args, &ws, &mut prompter).await,
        Command::Sync(args) => run_sync_command(args, &ws, &mut prompter).await,
        Command::NewPullRequest => run_new_pull_request_command(&ws, &mut prompter).await,
        Command::PruneBranches => run_prune_command(&ws, &mut prompter).await,
        Command::Continue => run_continue_command(&ws).await,
        Command::Abort => run_abort_command(&ws).await,
        Command::Skip => run_skip_command(&ws).await,
        Command::Undo => run_undo_command(&ws).await,
        Command::Repo => run_repo_command(&ws).map(|()| Outcome::Completed),
        Command::Switch => run_switch_command(&ws, &mut prompter).map(|()| Outcome::Completed),
        Command::Status => run_status_command(&ws).map(|()| Outcome::Completed),
        Command::Config(args) => {
            run_config_command(args, &ws, &mut prompter).map(|()| Outcome::Completed)
        }
        Command::Aliases(args) => run_aliases_command(args, &ws).map(|()| Outcome::Completed),
        Command::Version | Command::Completions(_) => unreachable!("handled above"),
    };

    match result {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        // the runner already printed the recovery instructions
        Ok(Outcome::Paused) => ExitCode::FAILURE,
        Err(e) => report_error(&e),
    }
}

fn report_error(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {err:#}");
    if is_expected_error(err) {
        ExitCode::FAILURE
    } else {
        // reserved for unexpected internal errors
        ExitCode::from(2)
    }
}

fn is_expected_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<TownError>().is_some()
        || err.downcast_ref::<GitError>().is_some()
        || err.downcast_ref::<ForgeError>().is_some()
        || err.downcast_ref::<ConfigError>().is_some()
        || err.downcast_ref::<RunstateError>().is_some()
        || err.downcast_ref::<ValidateError>().is_some()
}
