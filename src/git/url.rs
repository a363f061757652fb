//! Remote URL parsing.
//!
//! Only scp-style SSH remotes are recognized:
//!
//! ```text
//! <user>@<host>:<owner>/<repo>[.git]
//! ```
//!
//! Anything else (HTTPS, ssh://, nested group paths) is rejected with
//! `None` rather than producing garbled components; callers surface that as
//! [`GitError::UnparsableRemoteUrl`](super::GitError::UnparsableRemoteUrl).

/// Parsed remote with host, owner, and repository components.
///
/// # Example
///
/// ```
/// use branchkit::git::GitRemoteUrl;
///
/// let url = GitRemoteUrl::parse("git@github.com:owner/repo.git").unwrap();
/// assert_eq!(url.host(), "github.com");
/// assert_eq!(url.owner(), "owner");
/// assert_eq!(url.repo(), "repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRemoteUrl {
    host: String,
    owner: String,
    repo: String,
}

impl GitRemoteUrl {
    /// Parse an scp-style remote URL. `None` for any other shape.
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();

        let (user, rest) = url.split_once('@')?;
        let (host, path) = rest.split_once(':')?;
        let (owner, repo_with_suffix) = path.split_once('/')?;

        // A second slash means a nested path (e.g. GitLab subgroups), which
        // doesn't fit the owner/repo model.
        if repo_with_suffix.contains('/') {
            return None;
        }

        let repo = repo_with_suffix
            .strip_suffix(".git")
            .unwrap_or(repo_with_suffix);

        if user.is_empty() || host.is_empty() || owner.is_empty() || repo.is_empty() {
            return None;
        }

        Some(Self {
            host: host.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// The hostname (e.g. "github.com").
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The repository owner or organization.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name without the .git suffix.
    pub fn repo(&self) -> &str {
        &self.repo
    }
}
