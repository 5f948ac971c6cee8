use crate::error::{Result, VersionInfoError};
use crate::git::Repository;
use std::collections::{HashMap, HashSet};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: Vec<String>,
    annotations: HashMap<String, String>,
    head_tag: Option<String>,
    short_hash: String,
    fail_tag_listing: bool,
    fail_short_hash: bool,
    unreadable_tags: HashSet<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            annotations: HashMap::new(),
            head_tag: None,
            short_hash: "0000000".to_string(),
            fail_tag_listing: false,
            fail_short_hash: false,
            unreadable_tags: HashSet::new(),
        }
    }

    /// Add a lightweight tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Add an annotated tag with a message
    pub fn add_annotated_tag(&mut self, name: impl Into<String>, message: impl Into<String>) {
        let name = name.into();
        self.annotations.insert(name.clone(), message.into());
        self.tags.push(name);
    }

    /// Point HEAD exactly at the given tag
    pub fn set_head_tag(&mut self, name: impl Into<String>) {
        self.head_tag = Some(name.into());
    }

    /// Set the abbreviated HEAD hash
    pub fn set_short_hash(&mut self, hash: impl Into<String>) {
        self.short_hash = hash.into();
    }

    /// Make `list_tags` fail like a broken git invocation
    pub fn fail_tag_listing(&mut self) {
        self.fail_tag_listing = true;
    }

    /// Make `short_head_hash` fail, as `git rev-parse` does on an unborn branch
    pub fn fail_short_hash(&mut self) {
        self.fail_short_hash = true;
    }

    /// Make reading the tag object of `name` fail
    pub fn fail_tag_annotation(&mut self, name: impl Into<String>) {
        self.unreadable_tags.insert(name.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        if self.fail_tag_listing {
            return Err(VersionInfoError::command("git tag --list exited unsuccessfully"));
        }
        Ok(self.tags.clone())
    }

    fn describe_exact_tag_at_head(&self) -> Result<Option<String>> {
        // describe --exact-match only sees annotated tags
        Ok(self
            .head_tag
            .clone()
            .filter(|tag| self.annotations.contains_key(tag)))
    }

    fn read_tag_annotation(&self, tag: &str) -> Result<Option<String>> {
        if self.unreadable_tags.contains(tag) {
            return Err(VersionInfoError::command(format!(
                "git cat-file -p {} exited unsuccessfully",
                tag
            )));
        }
        if !self.tags.iter().any(|t| t == tag) {
            return Err(VersionInfoError::command(format!("Cannot find tag '{}'", tag)));
        }
        Ok(self.annotations.get(tag).cloned())
    }

    fn short_head_hash(&self) -> Result<String> {
        if self.fail_short_hash {
            return Err(VersionInfoError::command(
                "git rev-parse --short HEAD exited unsuccessfully",
            ));
        }
        Ok(self.short_hash.clone())
    }
}
