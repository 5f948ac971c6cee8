//! Main workflow orchestration logic
//!
//! Runs the four stages in dependency order: manifest, repository info,
//! version history, current version. Keeps CLI parsing out of the way so the
//! workflow can be called programmatically.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::analyzer::{build_number_from_env, HistoryCollector, VersionResolver};
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{CurrentVersion, HistoricalVersion, RepoInfo};
use crate::error::Result;
use crate::git::{Git2Repository, GitCli, Repository};
use crate::manifest::{load_manifest, Manifest};

/// Which git implementation answers repository queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Backend {
    /// libgit2, in process
    #[default]
    Git2,
    /// The `git` executable on PATH
    Cli,
}

/// Arguments for the version-info workflow
#[derive(Debug, Clone, PartialEq)]
pub struct VersionInfoArgs {
    /// Directory to start the manifest search and repository discovery from
    pub start_dir: PathBuf,

    pub backend: Backend,
}

/// Everything computed for one invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionInfo {
    #[serde(rename = "package")]
    pub manifest: Manifest,

    #[serde(rename = "repo")]
    pub repo_info: RepoInfo,

    #[serde(rename = "previousVersions")]
    pub history: Vec<HistoricalVersion>,

    #[serde(rename = "currentVersion")]
    pub current: CurrentVersion,

    #[serde(skip)]
    pub warnings: Vec<BoundaryWarning>,
}

/// Open the repository containing `args.start_dir` with the chosen backend
pub fn open_repository(args: &VersionInfoArgs) -> Result<Box<dyn Repository>> {
    let repo: Box<dyn Repository> = match args.backend {
        Backend::Git2 => Box::new(Git2Repository::open(&args.start_dir)?),
        Backend::Cli => Box::new(GitCli::new(args.start_dir.clone())),
    };
    Ok(repo)
}

/// Main version-info workflow
///
/// Loads the manifest, opens the repository and computes the version info,
/// reading the CI build number from the environment.
pub fn run_version_info(args: &VersionInfoArgs, config: &Config) -> Result<VersionInfo> {
    let manifest = load_manifest(&args.start_dir, &config.manifest_file)?;
    let repo = open_repository(args)?;
    let build_number = build_number_from_env(&config.build_number_vars);

    compute_version_info(&repo, manifest, config, build_number)
}

/// Compute version info from an already loaded manifest and an open repository
pub fn compute_version_info<R: Repository + ?Sized>(
    repo: &R,
    manifest: Manifest,
    config: &Config,
    build_number: Option<String>,
) -> Result<VersionInfo> {
    let repo_info = manifest.repo_info()?;
    let range = manifest.branch_range()?;

    let history = HistoryCollector::from_config(config)?.collect(repo)?;

    let resolution = VersionResolver::new(range)
        .with_branch_pattern(manifest.branch_pattern.clone())
        .with_build_number(build_number)
        .resolve(repo, &history)?;

    for warning in &resolution.warnings {
        debug!(%warning, "boundary warning");
    }

    Ok(VersionInfo {
        manifest,
        repo_info,
        history,
        current: resolution.current,
        warnings: resolution.warnings,
    })
}
