//! Pure formatting functions for UI output.
//!
//! The `format_*` functions build text without printing; the `display_*`
//! functions write status lines to stderr.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::VersionInfo;
use crate::domain::{CurrentVersion, HistoricalVersion, RepoInfo};
use crate::manifest::Manifest;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a boundary warning in yellow.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Key/value block describing the current version.
pub fn format_current(current: &CurrentVersion) -> String {
    let mut out = String::new();
    out.push_str(&format!("version:   {}\n", current.version));
    out.push_str(&format!("full:      {}\n", current.full));
    out.push_str(&format!("code name: {}\n", current.code_name));
    match current.tag() {
        Some(tag) => out.push_str(&format!("tag:       {}\n", tag)),
        None => out.push_str("snapshot:  yes\n"),
    }
    out
}

/// One line per released version, oldest first.
///
/// Stable releases are marked with `*`.
pub fn format_history(history: &[HistoricalVersion]) -> String {
    if history.is_empty() {
        return "(no released versions)\n".to_string();
    }

    let width = history
        .iter()
        .map(|h| h.version.version_string().len())
        .max()
        .unwrap_or(0);

    history
        .iter()
        .map(|h| {
            format!(
                "{} {:<width$}  {}\n",
                if h.is_stable { "*" } else { " " },
                h.version.version_string(),
                h.docs_url,
                width = width
            )
        })
        .collect()
}

pub fn format_repo(repo: &RepoInfo) -> String {
    format!("{}\n", repo)
}

pub fn format_package(manifest: &Manifest) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "name:           {}\n",
        manifest.name.as_deref().unwrap_or("(unnamed)")
    ));
    if let Some(version) = &manifest.version {
        out.push_str(&format!("version:        {}\n", version));
    }
    out.push_str(&format!("branch version: {}\n", manifest.branch_version));
    out.push_str(&format!("repository:     {}\n", manifest.repository.url()));
    out
}

/// All sections, each under a bold heading.
pub fn format_all(info: &VersionInfo) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}\n{}\n{}\n{}",
        style("Package").bold(),
        format_package(&info.manifest),
        style("Repository").bold(),
        format_repo(&info.repo_info),
        style("Current version").bold(),
        format_current(&info.current),
        style("Previous versions").bold(),
        format_history(&info.history),
    )
}
