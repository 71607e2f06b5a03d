// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Steps that talk to the forge connector.

use super::RunContext;
use crate::error::{ForgeError, TownResult};
use crate::git::BranchName;

/// Open the browser on the forge's new-proposal form for `branch`.
pub(super) fn create_proposal(ctx: &RunContext<'_>, branch: &BranchName) -> TownResult<()> {
    let connector = ctx.connector.ok_or(ForgeError::NoConnector)?;
    let parent = ctx
        .config
        .parent_of(branch)
        .or_else(|| ctx.config.main_branch())
        .ok_or_else(|| crate::error::ConfigError::MissingKey {
            key: "main-branch".to_string(),
        })?;
    let url = connector.new_proposal_url(branch, &parent);
    tracing::info!(%branch, url, "opening proposal form");
    ctx.backend.open_browser(&url);
    Ok(())
}

/// Squash-merge the proposal with the given number via the forge API.
pub(super) async fn merge_proposal(
    ctx: &RunContext<'_>,
    number: u64,
    message: &str,
) -> TownResult<()> {
    let connector = ctx.connector.ok_or(ForgeError::NoConnector)?;
    connector.merge_proposal(number, message).await
}

/// Point the proposal with the given number at a different target branch.
///
/// A forge without a retargeting API gets a warning instead of an error;
/// the branch workflow must not die over a proposal the forge cannot move.
pub(super) async fn retarget_proposal(
    ctx: &RunContext<'_>,
    number: u64,
    new_target: &BranchName,
) -> TownResult<()> {
    let connector = ctx.connector.ok_or(ForgeError::NoConnector)?;
    match connector.update_proposal_target(number, new_target).await {
        Err(crate::error::TownError::Forge(e))
            if matches!(e.as_ref(), ForgeError::Unsupported { .. }) =>
        {
            tracing::warn!(number, forge = connector.forge_name(), "{e}");
            Ok(())
        }
        result => result,
    }
}
