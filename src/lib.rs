// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          hack / sync / ship / ...
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |  validate --> plan        |
//!              |  prompts      StepList    |
//!              '-----+----------+----------'
//!                    |          |
//!                    v          v
//!                 config      runner <---> persist
//!               git config   state machine  runstate.json
//!                    |          |
//!                    v          v
//!                   git        step
//!                 gix/CLI    catalog ----> forge
//!                                        HTTP APIs
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, prompt    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod forge;
pub mod git;
pub mod logging;
pub mod plan;
pub mod prompt;
pub mod runner;
pub mod step;
pub mod validate;
