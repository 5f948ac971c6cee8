use std::fmt;

/// Non-fatal conditions met while resolving the current version.
/// Each one made the resolver fall back to a snapshot and is reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// HEAD is tagged, but the tag is not a semantic version
    UnparsableTag { tag: String, reason: String },
    /// HEAD is tagged with a release outside the branch's version range
    TagOutsideBranch { tag: String, range: String },
    /// No released version on this branch yet; the snapshot base came from the branch pattern
    NoBranchRelease { range: String, seed: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::TagOutsideBranch { tag, range } => {
                write!(
                    f,
                    "Tag '{}' at HEAD does not satisfy branch version '{}'",
                    tag, range
                )
            }
            BoundaryWarning::NoBranchRelease { range, seed } => {
                write!(
                    f,
                    "No release satisfies branch version '{}'; snapshot based on {}",
                    range, seed
                )
            }
        }
    }
}
