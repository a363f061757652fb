//! Git subprocess facade.
//!
//! Every operation shells out to the `git` binary and parses plain-text
//! output; nothing links against libgit2. A non-zero exit from git is
//! surfaced as [`GitError::CommandFailed`] carrying the attempted command
//! and git's own diagnostics. No retries, no timeouts.

mod error;
mod repository;
mod url;

pub use error::GitError;
pub use repository::Repository;
pub use url::GitRemoteUrl;
