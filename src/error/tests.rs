// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitError, TownError, TownResult, ValidateError};

#[test]
fn test_command_failed_display_includes_stderr() {
    let err = GitError::CommandFailed {
        command: "git merge --no-edit main".to_string(),
        stderr: "CONFLICT (content): Merge conflict in src/lib.rs".to_string(),
        exit_code: 1,
    };
    insta::assert_snapshot!(err.to_string());
}

#[test]
fn test_unfinished_run_mentions_recovery_commands() {
    let err = ValidateError::UnfinishedRun {
        command: "sync".to_string(),
    };
    let text = err.to_string();
    assert!(text.contains("git-town continue"), "got: {text}");
    assert!(text.contains("git-town abort"), "got: {text}");
    assert!(text.contains("git-town skip"), "got: {text}");
}

#[test]
fn test_town_error_size() {
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<TownError>();
    assert!(size <= 24, "TownError is {size} bytes, expected <= 24");
}

#[test]
fn test_town_result_size() {
    let size = std::mem::size_of::<TownResult<()>>();
    assert!(size <= 24, "TownResult<()> is {size} bytes, expected <= 24");
}
