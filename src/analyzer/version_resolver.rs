use crate::boundary::BoundaryWarning;
use crate::domain::{extract_code_name, BranchRange, CurrentVersion, HistoricalVersion, SemVer};
use crate::error::{Result, VersionInfoError};
use crate::git::Repository;
use tracing::{debug, info};

/// Outcome of version resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub current: CurrentVersion,
    pub warnings: Vec<BoundaryWarning>,
}

/// Determines the version the checked-out commit represents
///
/// A commit carrying an annotated release tag within the branch range is that
/// release. Anything else is a snapshot of the newest release on the branch.
pub struct VersionResolver {
    range: BranchRange,
    branch_pattern: Option<String>,
    build_number: Option<String>,
}

impl VersionResolver {
    /// Create a resolver for the given branch range
    pub fn new(range: BranchRange) -> Self {
        VersionResolver {
            range,
            branch_pattern: None,
            build_number: None,
        }
    }

    /// Pattern like `1.4.*` used when the branch has no release yet
    pub fn with_branch_pattern(mut self, pattern: Option<String>) -> Self {
        self.branch_pattern = pattern;
        self
    }

    /// CI build number to put in snapshot prereleases
    pub fn with_build_number(mut self, build_number: Option<String>) -> Self {
        self.build_number = build_number;
        self
    }

    /// Resolve the current version
    ///
    /// `history` must be sorted ascending, as returned by the history collector.
    pub fn resolve<R: Repository + ?Sized>(
        &self,
        repo: &R,
        history: &[HistoricalVersion],
    ) -> Result<Resolution> {
        let mut warnings = Vec::new();

        let current = match self.tagged_version(repo, &mut warnings)? {
            Some(current) => current,
            None => self.snapshot_version(repo, history, &mut warnings)?,
        };

        info!(
            version = %current.version,
            full = %current.full,
            code_name = %current.code_name,
            snapshot = current.is_snapshot(),
            "resolved current version"
        );

        Ok(Resolution { current, warnings })
    }

    fn tagged_version<R: Repository + ?Sized>(
        &self,
        repo: &R,
        warnings: &mut Vec<BoundaryWarning>,
    ) -> Result<Option<CurrentVersion>> {
        let tag = match repo.describe_exact_tag_at_head()? {
            Some(tag) => tag,
            None => {
                debug!("HEAD has no exact release tag");
                return Ok(None);
            }
        };

        let version = match SemVer::parse(&tag) {
            Ok(version) => version,
            Err(e) => {
                warnings.push(BoundaryWarning::UnparsableTag {
                    tag,
                    reason: e.to_string(),
                });
                return Ok(None);
            }
        };

        if !self.range.satisfies(&version) {
            warnings.push(BoundaryWarning::TagOutsideBranch {
                tag,
                range: self.range.to_string(),
            });
            return Ok(None);
        }

        let code_name = repo
            .read_tag_annotation(&tag)?
            .as_deref()
            .and_then(extract_code_name)
            .ok_or_else(|| {
                VersionInfoError::code_name(format!(
                    "Could not extract release code name. The message of tag {} must match '*codename(some release name)*'",
                    tag
                ))
            })?;

        Ok(Some(CurrentVersion::tagged(tag, version, code_name)))
    }

    fn snapshot_version<R: Repository + ?Sized>(
        &self,
        repo: &R,
        history: &[HistoricalVersion],
        warnings: &mut Vec<BoundaryWarning>,
    ) -> Result<CurrentVersion> {
        let base = match history
            .iter()
            .rev()
            .find(|entry| self.range.satisfies(&entry.version))
        {
            Some(entry) => entry.version.clone(),
            None => self.seed_version(warnings)?,
        };

        let prerelease: Vec<&str> = match self.build_number.as_deref() {
            Some(build_number) => vec!["build", build_number],
            None => vec!["local"],
        };
        let build = format!("sha.{}", repo.short_head_hash()?.trim());

        let version = base.with_prerelease(&prerelease)?.with_build(&build)?;
        Ok(CurrentVersion::snapshot(version))
    }

    fn seed_version(&self, warnings: &mut Vec<BoundaryWarning>) -> Result<SemVer> {
        let pattern = self.branch_pattern.as_deref().ok_or_else(|| {
            VersionInfoError::version(format!(
                "No released version satisfies branch version '{}' and the manifest has no branchPattern",
                self.range
            ))
        })?;

        let seed = SemVer::parse(&pattern.replace('*', "0-beta.1"))?;
        warnings.push(BoundaryWarning::NoBranchRelease {
            range: self.range.to_string(),
            seed: seed.to_string(),
        });
        Ok(seed)
    }
}

/// First non-empty value among the given variables, looked up with `lookup`
pub fn build_number_from<F>(vars: &[String], lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    vars.iter()
        .filter_map(|var| lookup(var.as_str()))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// CI build number from the process environment
pub fn build_number_from_env(vars: &[String]) -> Option<String> {
    build_number_from(vars, |var| std::env::var(var).ok())
}
