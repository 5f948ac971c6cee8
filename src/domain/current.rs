use crate::domain::SemVer;
use regex::Regex;
use serde::ser::{Serialize, Serializer};
use std::sync::OnceLock;

/// Code name given to every snapshot version
pub const SNAPSHOT_CODE_NAME: &str = "snapshot";

/// Where the current version came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// HEAD carries an annotated release tag
    Tagged { tag: String },
    /// Synthetic development version derived from the latest branch release
    Snapshot,
}

/// The version the checked-out commit builds as
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentVersion {
    pub version: SemVer,
    pub code_name: String,
    pub full: String,
    pub source: VersionSource,
}

impl CurrentVersion {
    pub fn tagged(tag: impl Into<String>, version: SemVer, code_name: impl Into<String>) -> Self {
        CurrentVersion {
            full: version.full(),
            version,
            code_name: code_name.into(),
            source: VersionSource::Tagged { tag: tag.into() },
        }
    }

    pub fn snapshot(version: SemVer) -> Self {
        CurrentVersion {
            full: version.full(),
            version,
            code_name: SNAPSHOT_CODE_NAME.to_string(),
            source: VersionSource::Snapshot,
        }
    }

    pub fn is_snapshot(&self) -> bool {
        self.source == VersionSource::Snapshot
    }

    /// Release tag at HEAD, if this is a tagged release
    pub fn tag(&self) -> Option<&str> {
        match &self.source {
            VersionSource::Tagged { tag } => Some(tag),
            VersionSource::Snapshot => None,
        }
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CurrentVersionRecord<'a> {
    #[serde(flatten)]
    version: &'a SemVer,
    code_name: &'a str,
    full: &'a str,
    is_snapshot: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
}

impl Serialize for CurrentVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CurrentVersionRecord {
            version: &self.version,
            code_name: &self.code_name,
            full: &self.full,
            is_snapshot: self.is_snapshot(),
            tag: self.tag(),
        }
        .serialize(serializer)
    }
}

/// Extract a release code name from an annotated tag message
///
/// Looks at the lines mentioning `codename` and returns the text inside the
/// first `codename(...)` with a non-empty body.
pub fn extract_code_name(annotation: &str) -> Option<String> {
    static CODE_NAME: OnceLock<Option<Regex>> = OnceLock::new();
    let re = CODE_NAME
        .get_or_init(|| Regex::new(r"codename\((.*)\)").ok())
        .as_ref()?;

    annotation
        .lines()
        .filter(|line| line.contains("codename"))
        .filter_map(|line| re.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .find(|name| !name.is_empty())
}
