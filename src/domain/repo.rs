use crate::error::{Result, VersionInfoError};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

const GITHUB_URL_PATTERN: &str = r"^https://github\.com/([^/]+)/(.+)\.git$";

fn github_url_regex() -> Result<&'static Regex> {
    static GITHUB_URL: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();

    GITHUB_URL
        .get_or_init(|| Regex::new(GITHUB_URL_PATTERN))
        .as_ref()
        .map_err(|e| VersionInfoError::repository(format!("Invalid URL pattern: {}", e)))
}

/// Owner and name of the GitHub repository a package is published from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoInfo {
    pub owner: String,
    pub repo: String,
}

impl RepoInfo {
    /// Parse a `https://github.com/<owner>/<repo>.git` URL
    ///
    /// SSH remotes, other hosts and URLs without the `.git` suffix are rejected.
    pub fn parse(url: &str) -> Result<Self> {
        let caps = github_url_regex()?.captures(url.trim()).ok_or_else(|| {
            VersionInfoError::repository(format!(
                "'{}' does not match https://github.com/<owner>/<repo>.git",
                url
            ))
        })?;

        Ok(RepoInfo {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
        })
    }
}

impl fmt::Display for RepoInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
