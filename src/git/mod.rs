//! Git operations abstraction layer
//!
//! Version resolution needs four read-only questions answered by the
//! version-control system. The [Repository] trait asks them; the
//! implementations are:
//!
//! - [repository::Git2Repository]: in-process via the `git2` crate
//! - [cli::GitCli]: shells out to the `git` binary
//! - [mock::MockRepository]: in-memory fake for tests
//!
//! ```rust
//! # use version_info::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> version_info::Result<()> {
//! if let Some(tag) = repo.describe_exact_tag_at_head()? {
//!     let message = repo.read_tag_annotation(&tag)?;
//!     println!("{}: {:?}", tag, message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;
pub mod repository;

pub use cli::GitCli;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only git queries used for version resolution
///
/// Methods return [crate::error::Result<T>]; failures to talk to git are
/// errors, while "nothing there" answers are `Ok(None)`.
pub trait Repository {
    /// All tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Name of the annotated tag pointing exactly at HEAD
    ///
    /// Behaves like `git describe --exact-match`: lightweight tags are not
    /// considered, and `Ok(None)` means HEAD is not tagged.
    fn describe_exact_tag_at_head(&self) -> Result<Option<String>>;

    /// Message of an annotated tag
    ///
    /// Returns `Ok(None)` when the tag is lightweight and has no message.
    fn read_tag_annotation(&self, tag: &str) -> Result<Option<String>>;

    /// Abbreviated hash of the HEAD commit (at least 7 hex characters)
    fn short_head_hash(&self) -> Result<String>;
}

impl<R: Repository + ?Sized> Repository for Box<R> {
    fn list_tags(&self) -> Result<Vec<String>> {
        (**self).list_tags()
    }

    fn describe_exact_tag_at_head(&self) -> Result<Option<String>> {
        (**self).describe_exact_tag_at_head()
    }

    fn read_tag_annotation(&self, tag: &str) -> Result<Option<String>> {
        (**self).read_tag_annotation(tag)
    }

    fn short_head_hash(&self) -> Result<String> {
        (**self).short_head_hash()
    }
}
