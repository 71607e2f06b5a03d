// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive dialogs as a capability.
//!
//! ```text
//! Prompter (trait)
//!    |                 |
//!    v                 v
//! TerminalPrompter  ScriptedPrompter
//! stdin/stdout      canned answers (tests)
//! ```
//!
//! Production code never reads stdin directly; everything interactive goes
//! through [`Prompter`] so tests can inject scripted answers.

use std::io::{BufRead, Write};

use crate::error::{TownResult, ValidateError};

/// Capability for asking the user to pick from a list.
pub trait Prompter {
    /// Pick exactly one of `options`. `default` is an index into `options`.
    ///
    /// # Errors
    ///
    /// Returns `ValidateError::PromptAborted` if no usable answer can be
    /// obtained.
    fn single_select(
        &mut self,
        message: &str,
        options: &[String],
        default: Option<usize>,
    ) -> TownResult<String>;

    /// Pick any subset of `options`. `defaults` are preselected entries.
    ///
    /// # Errors
    ///
    /// Returns `ValidateError::PromptAborted` if no usable answer can be
    /// obtained.
    fn multi_select(
        &mut self,
        message: &str,
        options: &[String],
        defaults: &[String],
    ) -> TownResult<Vec<String>>;
}

/// Prompter that talks to the terminal.
///
/// Renders a numbered list and reads index answers from stdin. Deliberately
/// plain: no raw-mode dependency, works in any shell and in CI transcripts.
#[derive(Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn read_line() -> TownResult<String> {
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| ValidateError::PromptAborted(e.to_string()))?;
        if line.is_empty() {
            // EOF without input
            return Err(ValidateError::PromptAborted("end of input".to_string()).into());
        }
        Ok(line.trim().to_string())
    }

    fn print_options(message: &str, options: &[String], marked: &[String]) {
        println!("{message}");
        for (i, option) in options.iter().enumerate() {
            let mark = if marked.contains(option) { "*" } else { " " };
            println!("  {:>2}{mark} {option}", i + 1);
        }
        let _ = std::io::stdout().flush();
    }
}

impl Prompter for TerminalPrompter {
    fn single_select(
        &mut self,
        message: &str,
        options: &[String],
        default: Option<usize>,
    ) -> TownResult<String> {
        Self::print_options(message, options, &[]);
        loop {
            match default {
                Some(i) => print!("enter a number (default {}): ", i + 1),
                None => print!("enter a number: "),
            }
            let _ = std::io::stdout().flush();
            let answer = Self::read_line()?;
            if answer.is_empty()
                && let Some(i) = default
                && let Some(choice) = options.get(i)
            {
                return Ok(choice.clone());
            }
            if let Ok(number) = answer.parse::<usize>()
                && number >= 1
                && let Some(choice) = options.get(number - 1)
            {
                return Ok(choice.clone());
            }
            println!("invalid choice: {answer:?}");
        }
    }

    fn multi_select(
        &mut self,
        message: &str,
        options: &[String],
        defaults: &[String],
    ) -> TownResult<Vec<String>> {
        Self::print_options(message, options, defaults);
        print!("enter numbers separated by spaces (empty keeps the current selection): ");
        let _ = std::io::stdout().flush();
        let answer = Self::read_line()?;
        if answer.is_empty() {
            return Ok(defaults.to_vec());
        }
        let mut selected = Vec::new();
        for token in answer.split_whitespace() {
            let number: usize = token.parse().map_err(|_| {
                ValidateError::PromptAborted(format!("not a number: {token:?}"))
            })?;
            let choice = options
                .get(number.wrapping_sub(1))
                .ok_or_else(|| ValidateError::PromptAborted(format!("no option {number}")))?;
            if !selected.contains(choice) {
                selected.push(choice.clone());
            }
        }
        Ok(selected)
    }
}

/// Prompter with canned answers, for tests and non-interactive runs.
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
}

impl ScriptedPrompter {
    /// Creates a prompter that will answer with the given values in order.
    /// Single-select answers are option labels; multi-select answers are
    /// space-separated label lists.
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    fn next_answer(&mut self) -> TownResult<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| ValidateError::PromptAborted("no scripted answer left".to_string()).into())
    }
}

impl Prompter for ScriptedPrompter {
    fn single_select(
        &mut self,
        _message: &str,
        options: &[String],
        _default: Option<usize>,
    ) -> TownResult<String> {
        let answer = self.next_answer()?;
        options
            .iter()
            .find(|option| **option == answer)
            .cloned()
            .ok_or_else(|| {
                ValidateError::PromptAborted(format!("scripted answer {answer:?} is not an option"))
                    .into()
            })
    }

    fn multi_select(
        &mut self,
        _message: &str,
        options: &[String],
        _defaults: &[String],
    ) -> TownResult<Vec<String>> {
        let answer = self.next_answer()?;
        let mut selected = Vec::new();
        for token in answer.split_whitespace() {
            let choice = options
                .iter()
                .find(|option| *option == token)
                .cloned()
                .ok_or_else(|| -> crate::error::TownError {
                    ValidateError::PromptAborted(format!(
                        "scripted answer {token:?} is not an option"
                    ))
                    .into()
                })?;
            selected.push(choice);
        }
        Ok(selected)
    }
}
