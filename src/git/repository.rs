use crate::error::{Result, VersionInfoError};
use git2::{DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode, Repository as Git2Repo};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn describe_exact_tag_at_head(&self) -> Result<Option<String>> {
        let mut options = DescribeOptions::new();
        options.max_candidates_tags(0);

        let head = self.repo.head()?.peel_to_commit()?;
        let description = match head.as_object().describe(&options) {
            Ok(description) => description,
            // libgit2 reports both "no tags at all" and "no exact match" as describe errors
            Err(e) if e.class() == ErrorClass::Describe || e.code() == ErrorCode::NotFound => {
                debug!("no annotated tag points at HEAD: {}", e.message());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let tag = description.format(Some(&DescribeFormatOptions::new()))?;
        Ok(Some(tag))
    }

    fn read_tag_annotation(&self, tag: &str) -> Result<Option<String>> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag))
            .map_err(|e| {
                VersionInfoError::command(format!("Cannot find tag '{}': {}", tag, e))
            })?;

        let oid = reference.resolve()?.target().ok_or_else(|| {
            VersionInfoError::command(format!("Tag '{}' has no target", tag))
        })?;
        let object = self.repo.find_object(oid, None)?;

        match object.as_tag() {
            Some(annotated) => Ok(Some(annotated.message().unwrap_or_default().to_string())),
            None => {
                debug!(tag, kind = ?object.kind(), "tag is lightweight");
                Ok(None)
            }
        }
    }

    fn short_head_hash(&self) -> Result<String> {
        let commit = self.repo.head()?.peel_to_commit()?;
        let short_id = commit.as_object().short_id()?;

        short_id
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| VersionInfoError::command("HEAD short id is not valid UTF-8"))
    }
}
