//! Branch version ranges as written in a project manifest
//!
//! Manifests use the npm range grammar (`1.2.x`, `>=1.2.0 <1.4.0`,
//! `1.2.x || 1.3.x`, `1.2.0 - 1.4`). Each `||` alternative is translated into
//! a [`semver::VersionReq`]; a version satisfies the range when any
//! alternative matches it.

use crate::domain::SemVer;
use crate::error::{Result, VersionInfoError};
use regex::Regex;
use semver::VersionReq;
use std::fmt;
use std::sync::OnceLock;

/// Range expression identifying the release line a branch produces
#[derive(Debug, Clone, PartialEq)]
pub struct BranchRange {
    expression: String,
    alternatives: Vec<VersionReq>,
}

impl BranchRange {
    /// Parse a range expression such as "1.2.x"
    pub fn parse(expression: &str) -> Result<Self> {
        let alternatives = expression
            .split("||")
            .map(|alternative| {
                let translated = translate_alternative(alternative)?;
                VersionReq::parse(&translated).map_err(|e| {
                    VersionInfoError::version(format!(
                        "Invalid branch version range '{}': {}",
                        expression, e
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(BranchRange {
            expression: expression.trim().to_string(),
            alternatives,
        })
    }

    /// Check whether a version belongs to this range
    pub fn satisfies(&self, version: &SemVer) -> bool {
        self.alternatives
            .iter()
            .any(|req| req.matches(version.as_semver()))
    }

    pub fn as_str(&self) -> &str {
        &self.expression
    }
}

impl fmt::Display for BranchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

fn hyphen_range_regex() -> Result<&'static Regex> {
    static HYPHEN_RANGE: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();

    HYPHEN_RANGE
        .get_or_init(|| Regex::new(r"^(\S+)\s+-\s+(\S+)$"))
        .as_ref()
        .map_err(|e| VersionInfoError::version(format!("Invalid range pattern: {}", e)))
}

/// Rewrite one npm comparator set into `semver` crate syntax
fn translate_alternative(alternative: &str) -> Result<String> {
    let alternative = alternative.trim();
    if alternative.is_empty() || matches!(alternative, "*" | "x" | "X") {
        return Ok("*".to_string());
    }

    if let Some(caps) = hyphen_range_regex()?.captures(alternative) {
        return Ok(format!(
            ">={}, <={}",
            strip_v(&caps[1]),
            strip_v(&caps[2])
        ));
    }

    // Join operators written apart from their version (">= 1.2.0")
    let mut comparators: Vec<String> = Vec::new();
    let mut pending_op: Option<&str> = None;
    for token in alternative.split_whitespace() {
        if is_operator(token) {
            pending_op = Some(token);
            continue;
        }
        let comparator = match pending_op.take() {
            Some(op) => format!("{}{}", op, strip_v(token)),
            None => translate_comparator(token),
        };
        comparators.push(comparator);
    }

    if let Some(op) = pending_op {
        return Err(VersionInfoError::version(format!(
            "Dangling operator '{}' in range '{}'",
            op, alternative
        )));
    }

    Ok(comparators.join(", "))
}

fn is_operator(token: &str) -> bool {
    matches!(token, "=" | "<" | "<=" | ">" | ">=" | "~" | "^")
}

fn strip_v(version: &str) -> &str {
    version.trim_start_matches(['v', 'V'])
}

/// A bare npm comparator is an exact match when fully specified and a
/// wildcard otherwise; operators keep their meaning.
fn translate_comparator(token: &str) -> String {
    let token = token.trim_start_matches('=');
    let bare = strip_v(token);
    if !bare.starts_with(|c: char| c.is_ascii_digit()) {
        return token.to_string();
    }

    let core = bare.split(['-', '+']).next().unwrap_or(bare);
    let parts: Vec<&str> = core.split('.').collect();
    let is_wildcard = parts.iter().any(|p| matches!(*p, "x" | "X" | "*"));

    if is_wildcard {
        bare.to_string()
    } else if parts.len() < 3 {
        format!("{}.*", core)
    } else {
        format!("={}", bare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_range_regex_is_built_once() {
        let first = hyphen_range_regex().unwrap();
        let second = hyphen_range_regex().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    fn v(s: &str) -> SemVer {
        SemVer::parse(s).unwrap()
    }

    #[test]
    fn test_wildcard_patch() {
        let range = BranchRange::parse("1.2.x").unwrap();
        assert!(range.satisfies(&v("1.2.0")));
        assert!(range.satisfies(&v("1.2.17")));
        assert!(!range.satisfies(&v("1.3.0")));
        assert!(!range.satisfies(&v("1.3.0-beta")));
    }

    #[test]
    fn test_wildcard_excludes_prereleases() {
        let range = BranchRange::parse("1.2.*").unwrap();
        assert!(!range.satisfies(&v("1.2.1-rc.1")));
    }

    #[test]
    fn test_partial_version_is_wildcard() {
        let range = BranchRange::parse("1.2").unwrap();
        assert!(range.satisfies(&v("1.2.5")));
        assert!(!range.satisfies(&v("1.4.0")));
    }

    #[test]
    fn test_bare_full_version_is_exact() {
        let range = BranchRange::parse("1.2.3").unwrap();
        assert!(range.satisfies(&v("1.2.3")));
        assert!(!range.satisfies(&v("1.2.4")));
    }

    #[test]
    fn test_space_separated_comparators() {
        let range = BranchRange::parse(">= 1.2.0 <1.4.0").unwrap();
        assert!(range.satisfies(&v("1.3.9")));
        assert!(!range.satisfies(&v("1.4.0")));
        assert!(!range.satisfies(&v("1.1.0")));
    }

    #[test]
    fn test_alternatives() {
        let range = BranchRange::parse("1.0.x || 1.2.x").unwrap();
        assert!(range.satisfies(&v("1.0.8")));
        assert!(range.satisfies(&v("1.2.8")));
        assert!(!range.satisfies(&v("1.1.0")));
    }

    #[test]
    fn test_hyphen_range() {
        let range = BranchRange::parse("1.2.0 - 1.4").unwrap();
        assert!(range.satisfies(&v("1.4.7")));
        assert!(!range.satisfies(&v("1.5.0")));
    }

    #[test]
    fn test_star() {
        let range = BranchRange::parse("*").unwrap();
        assert!(range.satisfies(&v("0.9.0")));
    }

    #[test]
    fn test_invalid_range() {
        assert!(BranchRange::parse("not a range").is_err());
        assert!(BranchRange::parse(">=").is_err());
    }

    #[test]
    fn test_display_keeps_expression() {
        assert_eq!(BranchRange::parse(" 1.2.x ").unwrap().to_string(), "1.2.x");
    }
}
