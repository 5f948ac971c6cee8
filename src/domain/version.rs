use crate::error::{Result, VersionInfoError};
use semver::{BuildMetadata, Prerelease, Version};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Semantic version parsed from a tag, keeping the text it was parsed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemVer {
    version: Version,
    raw: String,
}

impl SemVer {
    /// Create a plain release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        let version = Version::new(major, minor, patch);
        SemVer {
            raw: version.to_string(),
            version,
        }
    }

    /// Parse a version loosely from a tag string (e.g., "v1.2.3", "=1.2.3-rc.1")
    ///
    /// Leading whitespace, `v`, `V` and `=` are ignored. Everything after that
    /// must be a strict semantic version.
    pub fn parse(tag: &str) -> Result<Self> {
        let raw = tag.trim();
        let clean = raw.trim_start_matches(|c: char| {
            c == 'v' || c == 'V' || c == '=' || c.is_whitespace()
        });

        let version = Version::parse(clean).map_err(|e| {
            VersionInfoError::version(format!("Invalid semantic version '{}': {}", tag, e))
        })?;

        Ok(SemVer {
            version,
            raw: raw.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.version.major
    }

    pub fn minor(&self) -> u64 {
        self.version.minor
    }

    pub fn patch(&self) -> u64 {
        self.version.patch
    }

    /// Dot-separated prerelease identifiers, empty for a release
    pub fn prerelease(&self) -> Vec<&str> {
        if self.version.pre.is_empty() {
            Vec::new()
        } else {
            self.version.pre.as_str().split('.').collect()
        }
    }

    pub fn is_prerelease(&self) -> bool {
        !self.version.pre.is_empty()
    }

    /// Build metadata without the leading `+`, empty when absent
    pub fn build(&self) -> &str {
        self.version.build.as_str()
    }

    /// The text this version was parsed from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn as_semver(&self) -> &Version {
        &self.version
    }

    /// Canonical `major.minor.patch[-prerelease]` rendering, build metadata excluded
    pub fn version_string(&self) -> String {
        if self.version.pre.is_empty() {
            format!(
                "{}.{}.{}",
                self.version.major, self.version.minor, self.version.patch
            )
        } else {
            format!(
                "{}.{}.{}-{}",
                self.version.major, self.version.minor, self.version.patch, self.version.pre
            )
        }
    }

    /// `<version>+<build>`; the `+` is kept even when the build metadata is empty
    pub fn full(&self) -> String {
        format!("{}+{}", self.version_string(), self.version.build)
    }

    /// Semantic-version precedence; build metadata does not take part
    pub fn cmp_precedence(&self, other: &SemVer) -> Ordering {
        self.version.cmp_precedence(&other.version)
    }

    /// Copy of this version with the prerelease identifiers replaced
    pub fn with_prerelease(&self, identifiers: &[&str]) -> Result<Self> {
        let joined = identifiers.join(".");
        let pre = Prerelease::new(&joined).map_err(|e| {
            VersionInfoError::version(format!("Invalid prerelease '{}': {}", joined, e))
        })?;

        let mut version = self.version.clone();
        version.pre = pre;
        Ok(SemVer {
            raw: version.to_string(),
            version,
        })
    }

    /// Copy of this version with the build metadata replaced
    pub fn with_build(&self, build: &str) -> Result<Self> {
        let metadata = BuildMetadata::new(build).map_err(|e| {
            VersionInfoError::version(format!("Invalid build metadata '{}': {}", build, e))
        })?;

        let mut version = self.version.clone();
        version.build = metadata;
        Ok(SemVer {
            raw: version.to_string(),
            version,
        })
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version_string())
    }
}

impl Serialize for SemVer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SemVer", 7)?;
        state.serialize_field("major", &self.version.major)?;
        state.serialize_field("minor", &self.version.minor)?;
        state.serialize_field("patch", &self.version.patch)?;
        state.serialize_field("prerelease", &self.prerelease())?;
        state.serialize_field("build", self.build())?;
        state.serialize_field("version", &self.version_string())?;
        state.serialize_field("raw", &self.raw)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = SemVer::parse("v1.2.3").unwrap();
        assert_eq!(v.major(), 1);
        assert_eq!(v.minor(), 2);
        assert_eq!(v.patch(), 3);
        assert_eq!(v.raw(), "v1.2.3");
        assert!(v.prerelease().is_empty());
    }

    #[test]
    fn test_version_parse_loose_prefixes() {
        assert_eq!(SemVer::parse("1.2.3").unwrap().to_string(), "1.2.3");
        assert_eq!(SemVer::parse("V1.2.3").unwrap().to_string(), "1.2.3");
        assert_eq!(SemVer::parse(" =v1.2.3 ").unwrap().to_string(), "1.2.3");
    }

    #[test]
    fn test_version_parse_prerelease_and_build() {
        let v = SemVer::parse("v1.3.0-beta.2+exp.sha.5114f85").unwrap();
        assert_eq!(v.prerelease(), vec!["beta", "2"]);
        assert_eq!(v.build(), "exp.sha.5114f85");
        assert_eq!(v.version_string(), "1.3.0-beta.2");
        assert_eq!(v.full(), "1.3.0-beta.2+exp.sha.5114f85");
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(SemVer::parse("1.2").is_err());
        assert!(SemVer::parse("v1.2.3.4").is_err());
        assert!(SemVer::parse("release-1.2.3").is_err());
        assert!(SemVer::parse("g1.0.0").is_err());
    }

    #[test]
    fn test_full_without_build_keeps_separator() {
        assert_eq!(SemVer::parse("v1.2.3").unwrap().full(), "1.2.3+");
    }

    #[test]
    fn test_precedence_ignores_build() {
        let a = SemVer::parse("1.2.3+a").unwrap();
        let b = SemVer::parse("1.2.3+b").unwrap();
        assert_eq!(a.cmp_precedence(&b), Ordering::Equal);
    }

    #[test]
    fn test_precedence_prerelease_is_lower() {
        let pre = SemVer::parse("1.3.0-beta").unwrap();
        let release = SemVer::parse("1.3.0").unwrap();
        let older = SemVer::parse("1.2.9").unwrap();
        assert_eq!(pre.cmp_precedence(&release), Ordering::Less);
        assert_eq!(older.cmp_precedence(&pre), Ordering::Less);
    }

    #[test]
    fn test_with_prerelease_and_build() {
        let base = SemVer::parse("v1.2.1").unwrap();
        let snapshot = base
            .with_prerelease(&["build", "42"])
            .unwrap()
            .with_build("sha.abc1234")
            .unwrap();

        assert_eq!(snapshot.prerelease(), vec!["build", "42"]);
        assert_eq!(snapshot.build(), "sha.abc1234");
        assert_eq!(snapshot.full(), "1.2.1-build.42+sha.abc1234");
        // the original is untouched
        assert_eq!(base.raw(), "v1.2.1");
        assert!(base.prerelease().is_empty());
    }

    #[test]
    fn test_with_prerelease_rejects_invalid_identifier() {
        let base = SemVer::new(1, 2, 1);
        assert!(base.with_prerelease(&["build", "4 2"]).is_err());
    }

    #[test]
    fn test_serialize_fields() {
        let v = SemVer::parse("v1.2.3-rc.1").unwrap();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["version"], "1.2.3-rc.1");
        assert_eq!(json["raw"], "v1.2.3-rc.1");
        assert_eq!(json["prerelease"], serde_json::json!(["rc", "1"]));
        assert_eq!(json["build"], "");
    }
}
