// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub connector (REST v3).

use futures_util::future::BoxFuture;
use serde::Deserialize;
use tracing::debug;

use super::{Connector, OriginUrl, Proposal, global_client};
use crate::error::{ForgeError, TownResult};
use crate::git::BranchName;

/// Pull request data from the GitHub API.
#[derive(Debug, Deserialize)]
struct PullRequest {
    number: u64,
    title: String,
    html_url: String,
    base: BaseRef,
}

/// Base branch information of a pull request.
#[derive(Debug, Deserialize)]
struct BaseRef {
    #[serde(rename = "ref")]
    ref_name: String,
}

/// Connector for github.com and GitHub Enterprise instances.
pub struct GithubConnector {
    origin: OriginUrl,
    token: Option<String>,
}

impl GithubConnector {
    /// Creates a connector from a parsed origin URL and an optional token.
    #[must_use]
    pub fn new(origin: OriginUrl, token: Option<String>) -> Self {
        Self { origin, token }
    }

    fn api_base(&self) -> String {
        if self.origin.host == "github.com" {
            "https://api.github.com".to_string()
        } else {
            format!("https://{}/api/v3", self.origin.host)
        }
    }

    fn token(&self) -> TownResult<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| ForgeError::MissingToken { key: "github-token" }.into())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> TownResult<T> {
        let response = global_client()
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token()?))
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await
            .map_err(ForgeError::from)?;
        if !response.status().is_success() {
            return Err(ForgeError::HttpError {
                status: response.status().as_u16(),
                url: url.to_string(),
            }
            .into());
        }
        Ok(response.json::<T>().await.map_err(ForgeError::from)?)
    }

    async fn send_json(
        &self,
        method: reqwest::Method,
        url: &str,
        body: serde_json::Value,
    ) -> TownResult<()> {
        let response = global_client()
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.token()?))
            .header("Accept", "application/vnd.github.v3+json")
            .json(&body)
            .send()
            .await
            .map_err(ForgeError::from)?;
        if !response.status().is_success() {
            return Err(ForgeError::HttpError {
                status: response.status().as_u16(),
                url: url.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Connector for GithubConnector {
    fn forge_name(&self) -> &'static str {
        "GitHub"
    }

    fn repo_url(&self) -> String {
        format!("https://{}/{}", self.origin.host, self.origin.path)
    }

    fn new_proposal_url(&self, branch: &BranchName, parent: &BranchName) -> String {
        format!(
            "{}/compare/{parent}...{branch}?expand=1",
            self.repo_url()
        )
    }

    fn find_proposal<'a>(
        &'a self,
        branch: &'a BranchName,
        target: &'a BranchName,
    ) -> BoxFuture<'a, TownResult<Option<Proposal>>> {
        Box::pin(async move {
            let url = format!(
                "{}/repos/{}/pulls?head={}:{branch}&base={target}&state=open",
                self.api_base(),
                self.origin.path,
                self.origin.org(),
            );
            debug!(%branch, %target, "looking for open GitHub pull request");
            let pulls: Vec<PullRequest> = self.get_json(&url).await?;
            Ok(pulls.into_iter().next().map(|pr| Proposal {
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
            debug!(number, "squash-merging GitHub pull request");
            self.send_json(
                reqwest::Method::PUT,
                &url,
                serde_json::json!({
                    "commit_title": message,
                    "merge_method": "squash",
                }),
            )
            .await
        })
    }

    fn update_proposal_target<'a>(
        &'a self,
        number: u64,
        target: &'a BranchName,
    ) -> BoxFuture<'a, TownResult<()>> {
        Box::pin(async move {
            let url = format!(
                "{}/repos/{}/pulls/{number}",
                self.api_base(),
                self.origin.path
            );
            debug!(number, %target, "retargeting GitHub pull request");
            self.send_json(
                reqwest::Method::PATCH,
                &url,
                serde_json::json!({ "base": target.as_str() }),
            )
            .await
        })
    }
}
