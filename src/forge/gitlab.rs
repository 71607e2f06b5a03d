// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitLab connector (API v4).

use futures_util::future::BoxFuture;
use serde::Deserialize;
use tracing::debug;

use super::{Connector, OriginUrl, Proposal, global_client};
use crate::error::{ForgeError, TownResult};
use crate::git::BranchName;

/// Merge request data from the GitLab API.
#[derive(Debug, Deserialize)]
struct MergeRequest {
    iid: u64,
    title: String,
    web_url: String,
    target_branch: String,
}

/// Connector for gitlab.com and self-hosted GitLab instances.
pub struct GitlabConnector {
    origin: OriginUrl,
    token: Option<String>,
}

impl GitlabConnector {
    /// Creates a connector from a parsed origin URL and an optional token.
    #[must_use]
    pub fn new(origin: OriginUrl, token: Option<String>) -> Self {
        Self { origin, token }
    }

    fn api_base(&self) -> String {
        format!("https://{}/api/v4", self.origin.host)
    }

    /// GitLab addresses projects by their URL-encoded full path.
    fn project_id(&self) -> String {
        self.origin.path.replace('/', "%2F")
    }

    fn token(&self) -> TownResult<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| ForgeError::MissingToken { key: "gitlab-token" }.into())
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> TownResult<T> {
        let mut request = global_client()
            .request(method, url)
            .header("PRIVATE-TOKEN", self.token()?);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await.map_err(ForgeError::from)?;
        if !response.status().is_success() {
            return Err(ForgeError::HttpError {
                status: response.status().as_u16(),
                url: url.to_string(),
            }
            .into());
        }
        Ok(response.json::<T>().await.map_err(ForgeError::from)?)
    }
}

impl Connector for GitlabConnector {
    fn forge_name(&self) -> &'static str {
        "GitLab"
    }

    fn repo_url(&self) -> String {
        format!("https://{}/{}", self.origin.host, self.origin.path)
    }

    fn new_proposal_url(&self, branch: &BranchName, parent: &BranchName) -> String {
        format!(
            "{}/-/merge_requests/new?merge_request%5Bsource_branch%5D={branch}&merge_request%5Btarget_branch%5D={parent}",
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
                "{}/projects/{}/merge_requests?state=opened&source_branch={branch}&target_branch={target}",
                self.api_base(),
                self.project_id(),
            );
            debug!(%branch, %target, "looking for open GitLab merge request");
            let requests: Vec<MergeRequest> =
                self.request(reqwest::Method::GET, &url, None).await?;
            Ok(requests.into_iter().next().map(|mr| Proposal {
                number: mr.iid,
                title: mr.title,
                target: BranchName::new(mr.target_branch),
                url: mr.web_url,
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
                "{}/projects/{}/merge_requests/{number}/merge",
                self.api_base(),
                self.project_id(),
            );
            debug!(number, "squash-merging GitLab merge request");
            let _: serde_json::Value = self
                .request(
                    reqwest::Method::PUT,
                    &url,
                    Some(serde_json::json!({
                        "squash": true,
                        "squash_commit_message": message,
                    })),
                )
                .await?;
            Ok(())
        })
    }

    fn update_proposal_target<'a>(
        &'a self,
        number: u64,
        target: &'a BranchName,
    ) -> BoxFuture<'a, TownResult<()>> {
        Box::pin(async move {
            let url = format!(
                "{}/projects/{}/merge_requests/{number}",
                self.api_base(),
                self.project_id(),
            );
            debug!(number, %target, "retargeting GitLab merge request");
            let _: serde_json::Value = self
                .request(
                    reqwest::Method::PUT,
                    &url,
                    Some(serde_json::json!({ "target_branch": target.as_str() })),
                )
                .await?;
            Ok(())
        })
    }
}
