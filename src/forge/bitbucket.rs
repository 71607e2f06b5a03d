// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bitbucket connector.
//!
//! URL building only; Bitbucket's proposal API is not supported.

use futures_util::future::BoxFuture;

use super::{Connector, OriginUrl, Proposal};
use crate::error::{ForgeError, TownResult};
use crate::git::BranchName;

/// Connector for bitbucket.org.
pub struct BitbucketConnector {
    origin: OriginUrl,
}

impl BitbucketConnector {
    /// Creates a connector from a parsed origin URL.
    #[must_use]
    pub fn new(origin: OriginUrl) -> Self {
        Self { origin }
    }
}

impl Connector for BitbucketConnector {
    fn forge_name(&self) -> &'static str {
        "Bitbucket"
    }

    fn repo_url(&self) -> String {
        format!("https://{}/{}", self.origin.host, self.origin.path)
    }

    fn new_proposal_url(&self, branch: &BranchName, parent: &BranchName) -> String {
        format!(
            "{}/pull-requests/new?source={branch}&dest={parent}",
            self.repo_url()
        )
    }

    fn find_proposal<'a>(
        &'a self,
        _branch: &'a BranchName,
        _target: &'a BranchName,
    ) -> BoxFuture<'a, TownResult<Option<Proposal>>> {
        Box::pin(async move { Ok(None) })
    }

    fn merge_proposal<'a>(
        &'a self,
        _number: u64,
        _message: &'a str,
    ) -> BoxFuture<'a, TownResult<()>> {
        Box::pin(async move {
            Err(ForgeError::Unsupported {
                forge: "Bitbucket",
                operation: "merging pull requests via API",
            }
            .into())
        })
    }

    fn update_proposal_target<'a>(
        &'a self,
        _number: u64,
        _target: &'a BranchName,
    ) -> BoxFuture<'a, TownResult<()>> {
        Box::pin(async move {
            Err(ForgeError::Unsupported {
                forge: "Bitbucket",
                operation: "retargeting pull requests via API",
            }
            .into())
        })
    }
}
