use crate::config::{DocsConfig, StableConfig};
use crate::domain::SemVer;
use crate::error::{Result, VersionInfoError};
use serde::Serialize;

/// A released version found among the repository tags
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalVersion {
    #[serde(flatten)]
    pub version: SemVer,
    pub is_stable: bool,
    pub docs_url: String,
}

/// Decides which versions are stable releases
///
/// A version is stable when its `major.minor` is one of the configured
/// release lines and it has no prerelease identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StablePolicy {
    lines: Vec<(u64, u64)>,
}

impl StablePolicy {
    pub fn new(lines: Vec<(u64, u64)>) -> Self {
        StablePolicy { lines }
    }

    /// Build from `"major.minor"` strings
    pub fn from_config(config: &StableConfig) -> Result<Self> {
        let lines = config
            .lines
            .iter()
            .map(|line| parse_line(line))
            .collect::<Result<Vec<_>>>()?;
        Ok(StablePolicy { lines })
    }

    pub fn is_stable(&self, version: &SemVer) -> bool {
        !version.is_prerelease()
            && self
                .lines
                .contains(&(version.major(), version.minor()))
    }
}

fn parse_line(line: &str) -> Result<(u64, u64)> {
    let invalid = || {
        VersionInfoError::config(format!(
            "Invalid stable line '{}' - expected MAJOR.MINOR",
            line
        ))
    };
    let (major, minor) = line.trim().split_once('.').ok_or_else(invalid)?;
    let major = major.parse::<u64>().map_err(|_| invalid())?;
    let minor = minor.parse::<u64>().map_err(|_| invalid())?;
    Ok((major, minor))
}

/// Builds documentation URLs of the form `http://<host>/<version>/docs`
///
/// Releases before `legacy_before` lived in a folder suffixed with the
/// version, e.g. `http://<host>/1.0.1/docs-1.0.1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsUrlPolicy {
    host: String,
    legacy_before: (u64, u64, u64),
}

impl DocsUrlPolicy {
    pub fn new(host: impl Into<String>, legacy_before: &SemVer) -> Self {
        DocsUrlPolicy {
            host: host.into(),
            legacy_before: (
                legacy_before.major(),
                legacy_before.minor(),
                legacy_before.patch(),
            ),
        }
    }

    pub fn from_config(config: &DocsConfig) -> Result<Self> {
        let legacy_before = SemVer::parse(&config.legacy_before)
            .map_err(|e| VersionInfoError::config(format!("docs.legacy_before: {}", e)))?;
        Ok(DocsUrlPolicy::new(config.host.clone(), &legacy_before))
    }

    /// Prerelease identifiers do not make a version legacy
    pub fn is_legacy(&self, version: &SemVer) -> bool {
        (version.major(), version.minor(), version.patch()) < self.legacy_before
    }

    pub fn docs_url(&self, version: &SemVer) -> String {
        let rendered = version.version_string();
        let mut url = format!("http://{}/{}/docs", self.host, rendered);
        if self.is_legacy(version) {
            url.push('-');
            url.push_str(&rendered);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemVer {
        SemVer::parse(s).unwrap()
    }

    fn default_docs() -> DocsUrlPolicy {
        DocsUrlPolicy::from_config(&DocsConfig::default()).unwrap()
    }

    #[test]
    fn test_stable_lines() {
        let policy = StablePolicy::from_config(&StableConfig::default()).unwrap();
        assert!(policy.is_stable(&v("1.2.3")));
        assert!(policy.is_stable(&v("1.0.8")));
        assert!(!policy.is_stable(&v("1.2.3-beta.1")));
        assert!(!policy.is_stable(&v("2.0.0")));
        assert!(!policy.is_stable(&v("1.1.5")));
    }

    #[test]
    fn test_custom_stable_lines() {
        let policy = StablePolicy::new(vec![(2, 4)]);
        assert!(policy.is_stable(&v("2.4.1")));
        assert!(!policy.is_stable(&v("1.2.3")));
    }

    #[test]
    fn test_invalid_stable_line() {
        let config = StableConfig {
            lines: vec!["1".to_string()],
        };
        assert!(StablePolicy::from_config(&config).is_err());
    }

    #[test]
    fn test_docs_url_legacy_suffix() {
        let docs = default_docs();
        assert_eq!(
            docs.docs_url(&v("1.0.1")),
            "http://code.angularjs.org/1.0.1/docs-1.0.1"
        );
        assert_eq!(
            docs.docs_url(&v("0.9.19")),
            "http://code.angularjs.org/0.9.19/docs-0.9.19"
        );
    }

    #[test]
    fn test_docs_url_modern() {
        let docs = default_docs();
        assert_eq!(
            docs.docs_url(&v("1.0.2")),
            "http://code.angularjs.org/1.0.2/docs"
        );
        assert_eq!(
            docs.docs_url(&v("v1.2.0-rc.3")),
            "http://code.angularjs.org/1.2.0-rc.3/docs"
        );
    }

    #[test]
    fn test_docs_url_prerelease_of_threshold_is_not_legacy() {
        assert!(!default_docs().is_legacy(&v("1.0.2-rc.1")));
    }

    #[test]
    fn test_historical_version_serializes_flat() {
        let version = v("v1.2.3");
        let entry = HistoricalVersion {
            docs_url: default_docs().docs_url(&version),
            is_stable: true,
            version,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["version"], "1.2.3");
        assert_eq!(json["isStable"], true);
        assert_eq!(json["docsUrl"], "http://code.angularjs.org/1.2.3/docs");
    }
}
