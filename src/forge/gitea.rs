// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Gitea connector (API v1).

use futures_util::future::BoxFuture;
use serde::Deserialize;
use tracing::debug;

use super::{Connector, OriginUrl, Proposal, global_client};
use crate::error::{ForgeError, TownResult};
use crate::git::BranchName;

/// Pull request data from the Gitea API.
#[derive(Debug, Deserialize)]
struct PullRequest {
    number: u64,
    title: String,
    html_url: String,
    head: RefInfo,
    base: RefInfo,
}

/// Branch reference in a Gitea pull request.
#[derive(Debug, Deserialize)]
struct RefInfo {
    #[serde(rename = "ref")]
    ref_name: String,
}

/// Connector for Gitea instances.
pub struct GiteaConnector {
    origin: OriginUrl,
    token: Option<String>,
}

impl GiteaConnector {
    /// Creates a connector from a parsed origin URL and an optional token.
    #[must_use]
    pub fn new(origin: OriginUrl, token: Option<String>) -> Self {
        Self { origin, token }
    }

    fn api_base(&self) -> String {
        format!("https://{}/api/v1", self.origin.host)
    }

    fn token(&self) -> TownResult<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| ForgeError::MissingToken { key: "gitea-token" }.into())
    }
}

impl Connector for GiteaConnector {
    fn forge_name(&self) -> &'static str {
        "Gitea"
    }

    fn repo_url(&self) -> String {
        format!("https://{}/{}", self.origin.host, self.origin.path)
    }

    fn new_proposal_url(&self, branch: &BranchName, parent: &BranchName) -> String {
        format!("{}/compare/{parent}...{branch}", self.repo_url())
    }

    fn find_proposal<'a>(
        &'a self,
        branch: &'a BranchName,
        target: &'a BranchName,
    ) -> BoxFuture<'a, TownResult<Option<Proposal>>> {
        Box::pin(async move {
            // the Gitea list endpoint cannot filter by head branch
            let url = format!(
                "{}/repos/{}/pulls?state=open",
                self.api_base(),
                self.origin.path
            );
            debug!(%branch, %target, "looking for open Gitea pull request");
            let response = global_client()
                .get(&url)
                .header("Authorization", format!("token {}", self.token()?))
                .send()
                .await
                .map_err(ForgeError::from)?;
            if !response.status().is_success() {
                return Err(ForgeError::HttpError {
                    status: response.status().as_u16(),
                    url,
                }
                .into());
            }
            let pulls: Vec<PullRequest> = response.json().await.map_err(ForgeError::from)?;
            Ok(pulls
                .into_iter()
                .find(|pr| pr.head.ref_name == branch.as_str() && pr.base.ref_name == target.as_str())
                .map(|pr| Proposal {
                    number: pr.number,
                    title: pr.title,
                    target: BranchName::new(pr.base.ref_name),
                    url: pr.html_url,
                }))
        })
    }

    fn merge_proposal<'a>(
        &'a self,
        number: u64,
        message: &'a str,
    ) -> BoxFuture<'a, TownResult<()>> {
        Box::pin(async move {
            let url = format!(
                "{}/repos/{}/pulls/{number}/merge",
                self.api_base(),
                self.origin.path
            );
            debug!(number, "squash-merging Gitea pull request");
            let response = global_client()
                .post(&url)
                .header("Authorization", format!("token {}", self.token()?))
                .json(&serde_json::json!({
                    "Do": "squash",
                    "MergeTitleField": message,
                }))
                .send()
                .await
                .map_err(ForgeError::from)?;
            if !response.status().is_success() {
                return Err(ForgeError::HttpError {
                    status: response.status().as_u16(),
                    url,
                }
                .into());
            }
            Ok(())
        })
    }

    fn update_proposal_target<'a>(
        &'a self,
        _number: u64,
        _target: &'a BranchName,
    ) -> BoxFuture<'a, TownResult<()>> {
        Box::pin(async move {
            Err(ForgeError::Unsupported {
                forge: "Gitea",
                operation: "retargeting pull requests",
            }
            .into())
        })
    }
}
