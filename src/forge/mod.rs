// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Forge (code hosting service) connectors.
//!
//! ```text
//! origin URL --> OriginUrl::parse --> host recognition
//!                                        |
//!         +------------+------------+---+--------+
//!         v            v            v            v
//!      GitHub       GitLab       Gitea      Bitbucket
//!      REST v3      API v4       API v1     URLs only
//!
//! All connectors implement the dyn-safe Connector trait;
//! commands hold an Option<Box<dyn Connector>> - absent for
//! repositories without a recognized forge.
//! ```

pub mod bitbucket;
pub mod gitea;
pub mod github;
pub mod gitlab;
pub mod origin;

pub use origin::OriginUrl;

use std::sync::OnceLock;

use futures_util::future::BoxFuture;
use reqwest::Client;

use crate::config::Config;
use crate::error::TownResult;
use crate::git::{Backend, BranchName};

/// Global HTTP client - initialized once, reused across all API calls.
/// Falls back to a basic client if custom configuration fails.
pub(crate) fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("git-town-rs/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// An open proposal (pull request / merge request) on a forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    /// The forge-assigned number (GitHub PR number, GitLab MR iid, ...).
    pub number: u64,
    /// The proposal title.
    pub title: String,
    /// The branch this proposal merges into.
    pub target: BranchName,
    /// Web URL of the proposal.
    pub url: String,
}

/// Capability interface for one hosting service.
///
/// Methods return boxed futures so the connector can live behind
/// `Box<dyn Connector>`.
pub trait Connector: Send + Sync {
    /// Human-readable service name ("GitHub", ...).
    fn forge_name(&self) -> &'static str;

    /// Web URL of the repository homepage.
    fn repo_url(&self) -> String;

    /// Web URL that opens a new-proposal form for `branch` onto `parent`.
    fn new_proposal_url(&self, branch: &BranchName, parent: &BranchName) -> String;

    /// Find the open proposal from `branch` into `target`, if any.
    fn find_proposal<'a>(
        &'a self,
        branch: &'a BranchName,
        target: &'a BranchName,
    ) -> BoxFuture<'a, TownResult<Option<Proposal>>>;

    /// Squash-merge the proposal with the given number, using `message` as
    /// the commit message.
    fn merge_proposal<'a>(
        &'a self,
        number: u64,
        message: &'a str,
    ) -> BoxFuture<'a, TownResult<()>>;

    /// Retarget the proposal with the given number onto `target`.
    fn update_proposal_target<'a>(
        &'a self,
        number: u64,
        target: &'a BranchName,
    ) -> BoxFuture<'a, TownResult<()>>;
}

/// Detect the forge connector for the repository, if any.
///
/// Recognition is driven by the `origin` remote URL hostname, with the
/// `git-town.code-hosting-driver` and `git-town.code-hosting-origin-hostname`
/// overrides applied first.
///
/// # Errors
///
/// Returns an error only on config access failures; an unrecognized or
/// missing origin yields `Ok(None)`.
pub fn detect(backend: &Backend, config: &Config) -> TownResult<Option<Box<dyn Connector>>> {
    let Some(raw_url) = backend.remote_url("origin") else {
        return Ok(None);
    };
    let Some(mut origin) = OriginUrl::parse(&raw_url) else {
        return Ok(None);
    };
    if let Some(hostname) = config.origin_hostname_override() {
        origin.host = hostname;
    }

    let driver = config
        .hosting_driver()
        .map(|name| name.to_lowercase())
        .or_else(|| recognize_host(&origin.host).map(ToString::to_string));

    Ok(match driver.as_deref() {
        Some("github") => Some(Box::new(github::GithubConnector::new(
            origin,
            config.forge_token("github-token"),
        ))),
        Some("gitlab") => Some(Box::new(gitlab::GitlabConnector::new(
            origin,
            config.forge_token("gitlab-token"),
        ))),
        Some("gitea") => Some(Box::new(gitea::GiteaConnector::new(
            origin,
            config.forge_token("gitea-token"),
        ))),
        Some("bitbucket") => Some(Box::new(bitbucket::BitbucketConnector::new(origin))),
        _ => None,
    })
}

fn recognize_host(host: &str) -> Option<&'static str> {
    if host == "github.com" {
        Some("github")
    } else if host == "gitlab.com" {
        Some("gitlab")
    } else if host == "bitbucket.org" {
        Some("bitbucket")
    } else if host.contains("gitea") {
        Some("gitea")
    } else if host.contains("github") {
        Some("github")
    } else if host.contains("gitlab") {
        Some("gitlab")
    } else {
        None
    }
}
