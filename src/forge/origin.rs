// git-town-rs: Git Town Branching Workflow Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsing of `origin` remote URLs.
//!
//! ```text
//! git@github.com:org/repo.git        \
//! ssh://git@github.com/org/repo.git  +--> OriginUrl { host, path }
//! https://github.com/org/repo.git    /        path = "org/repo"
//! ```

use std::sync::OnceLock;

use regex::Regex;

/// Host and repository path extracted from an origin remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginUrl {
    /// Hostname, e.g. `github.com`.
    pub host: String,
    /// Repository path without leading slash or `.git`, e.g. `org/repo`.
    /// GitLab subgroups keep their full path.
    pub path: String,
}

fn scp_like() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:ssh://)?(?:[\w.-]+@)?([\w.-]+)[:/](.+?)(?:\.git)?/?$")
            .unwrap_or_else(|e| unreachable!("static regex: {e}"))
    })
}

fn http_like() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://(?:[\w.-]+@)?([\w.-]+)(?::\d+)?/(.+?)(?:\.git)?/?$")
            .unwrap_or_else(|e| unreachable!("static regex: {e}"))
    })
}

impl OriginUrl {
    /// Parse an origin remote URL. Returns `None` for URLs that do not look
    /// like a hosted repository (e.g. local paths).
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();
        if url.is_empty() || url.starts_with("file://") || url.starts_with('/') {
            return None;
        }
        let re = if url.starts_with("http://") || url.starts_with("https://") {
            http_like()
        } else {
            scp_like()
        };
        let captures = re.captures(url)?;
        let host = captures.get(1)?.as_str().to_string();
        let path = captures.get(2)?.as_str().to_string();
        if path.is_empty() || !path.contains('/') {
            return None;
        }
        Some(Self { host, path })
    }

    /// The organization / namespace part of the path.
    #[must_use]
    pub fn org(&self) -> &str {
        self.path.rsplit_once('/').map_or("", |(org, _)| org)
    }

    /// The bare repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        self.path.rsplit_once('/').map_or(&self.path, |(_, repo)| repo)
    }
}
