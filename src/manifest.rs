//! Project manifest discovery and parsing
//!
//! The manifest is the `package.json` (or configured equivalent) of the
//! project being versioned. It is found by walking up from a starting
//! directory and is loaded once per run.

use crate::domain::{BranchRange, RepoInfo};
use crate::error::{Result, VersionInfoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parsed project manifest
///
/// Only `repository.url` and `branchVersion` are required; every other field
/// is kept in `extra` so the manifest can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    pub repository: RepositoryField,

    pub branch_version: String,

    /// Release line pattern such as `1.4.*`, used to seed the first snapshot of a branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_pattern: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// `repository` as either `"url"` or `{ "type": "git", "url": "..." }`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Url(String),
    Detailed {
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        url: String,
    },
}

impl RepositoryField {
    pub fn url(&self) -> &str {
        match self {
            RepositoryField::Url(url) => url,
            RepositoryField::Detailed { url, .. } => url,
        }
    }
}

impl Manifest {
    /// Parse manifest JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| VersionInfoError::manifest(format!("Invalid manifest: {}", e)))
    }

    /// The manifest's `branchVersion` as a range
    pub fn branch_range(&self) -> Result<BranchRange> {
        BranchRange::parse(&self.branch_version)
    }

    /// Owner and name parsed from `repository.url`
    pub fn repo_info(&self) -> Result<RepoInfo> {
        RepoInfo::parse(self.repository.url())
    }
}

/// Find the manifest by walking up from `start`
///
/// Returns the first `<dir>/<file_name>` that exists. When the filesystem root
/// is reached without a match, the path at the root is returned anyway so the
/// subsequent read reports the failure.
pub fn find_manifest(start: &Path, file_name: &str) -> Result<PathBuf> {
    let mut dir = fs::canonicalize(start).map_err(|e| {
        VersionInfoError::manifest(format!(
            "Cannot resolve directory '{}': {}",
            start.display(),
            e
        ))
    })?;

    loop {
        let candidate = dir.join(file_name);
        if candidate.is_file() {
            return Ok(candidate);
        }
        match dir.parent() {
            Some(parent) if parent != dir => dir = parent.to_path_buf(),
            _ => return Ok(candidate),
        }
    }
}

/// Locate and parse the manifest starting from `start`
pub fn load_manifest(start: &Path, file_name: &str) -> Result<Manifest> {
    let path = find_manifest(start, file_name)?;
    debug!(path = %path.display(), "loading manifest");

    let content = fs::read_to_string(&path).map_err(|e| {
        VersionInfoError::manifest(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    Manifest::from_json(&content).map_err(|e| match e {
        VersionInfoError::Manifest(msg) => {
            VersionInfoError::manifest(format!("{} ({})", msg, path.display()))
        }
        other => other,
    })
}
