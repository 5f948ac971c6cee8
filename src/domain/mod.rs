//! Domain logic - pure version rules independent of git operations

pub mod current;
pub mod history;
pub mod range;
pub mod repo;
pub mod version;

pub use current::{extract_code_name, CurrentVersion, VersionSource, SNAPSHOT_CODE_NAME};
pub use history::{DocsUrlPolicy, HistoricalVersion, StablePolicy};
pub use range::BranchRange;
pub use repo::RepoInfo;
pub use version::SemVer;
