//! User interface module - output selection and rendering.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - choosing a section and an output format

pub mod formatter;

pub use formatter::{display_boundary_warning, display_error};

use crate::cli::VersionInfo;
use crate::error::Result;

/// Part of the version info to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Section {
    #[default]
    All,
    /// Resolved current version
    Current,
    /// Sorted released versions
    History,
    /// Repository owner and name
    Repo,
    /// The project manifest
    Package,
}

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render one section of the version info
pub fn render(info: &VersionInfo, section: Section, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match section {
            Section::All => formatter::format_all(info),
            Section::Current => formatter::format_current(&info.current),
            Section::History => formatter::format_history(&info.history),
            Section::Repo => formatter::format_repo(&info.repo_info),
            Section::Package => formatter::format_package(&info.manifest),
        }),
        OutputFormat::Json => {
            let json = match section {
                Section::All => serde_json::to_string_pretty(info)?,
                Section::Current => serde_json::to_string_pretty(&info.current)?,
                Section::History => serde_json::to_string_pretty(&info.history)?,
                Section::Repo => serde_json::to_string_pretty(&info.repo_info)?,
                Section::Package => serde_json::to_string_pretty(&info.manifest)?,
            };
            Ok(json + "\n")
        }
    }
}
