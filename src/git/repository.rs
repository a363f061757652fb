use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;
use once_cell::sync::OnceCell;

use super::{GitError, GitRemoteUrl};

/// Repository context for git operations.
///
/// Encapsulates the working directory every subprocess runs in. Each
/// operation blocks until git exits; a non-zero exit becomes
/// [`GitError::CommandFailed`] and aborts the caller's remaining steps.
#[derive(Debug)]
pub struct Repository {
    path: PathBuf,
    /// Branch names don't change underneath a single invocation, so the
    /// current branch is looked up at most once per instance.
    current_branch: OnceCell<Option<String>>,
}

impl Repository {
    /// Create a repository context at the specified path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current_branch: OnceCell::new(),
        }
    }

    /// Create a repository context for the current directory.
    pub fn current() -> Self {
        Self::at(".")
    }

    /// Run a git command in this repository's context, capturing stdout.
    pub fn run_command(&self, args: &[&str]) -> anyhow::Result<String> {
        log::debug!("git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .with_context(|| format!("Failed to execute: git {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            for line in stderr.trim().lines() {
                log::debug!("  ! {line}");
            }
            // Some git commands print errors to stdout (e.g. `commit` with
            // nothing to commit)
            let stdout = String::from_utf8_lossy(&output.stdout);
            let diagnostics = [stderr.trim(), stdout.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                output: diagnostics,
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        for line in stdout.trim().lines() {
            log::debug!("  {line}");
        }
        Ok(stdout)
    }

    /// Run a git command with inherited stdio, for passthrough commands
    /// (log, diff, status, pull) whose output goes straight to the user.
    pub fn run_passthrough(&self, args: &[&str]) -> anyhow::Result<()> {
        log::debug!("git {} (passthrough)", args.join(" "));

        let status = Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .status()
            .with_context(|| format!("Failed to execute: git {}", args.join(" ")))?;

        if !status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                output: String::new(),
            }
            .into());
        }
        Ok(())
    }

    /// Get the current branch name, or None in detached HEAD state.
    /// Result is cached for the lifetime of this instance.
    pub fn current_branch(&self) -> anyhow::Result<Option<&str>> {
        self.current_branch
            .get_or_try_init(|| {
                let stdout = self.run_command(&["branch", "--show-current"])?;
                let branch = stdout.trim();
                Ok(if branch.is_empty() {
                    None
                } else {
                    Some(branch.to_string())
                })
            })
            .map(|opt| opt.as_deref())
    }

    /// Get the current branch name, or error in detached HEAD state.
    ///
    /// `action` describes what requires being on a branch (e.g. "commit").
    pub fn require_current_branch(&self, action: &str) -> anyhow::Result<String> {
        self.current_branch()?.map(str::to_string).ok_or_else(|| {
            GitError::DetachedHead {
                action: action.to_string(),
            }
            .into()
        })
    }

    /// The branch the remote's symbolic HEAD points to.
    ///
    /// Reads `refs/remotes/origin/HEAD`; when the remote has no symbolic
    /// HEAD configured this fails with [`GitError::NoDefaultBranch`], whose
    /// message suggests the remedial `git remote set-head` invocation.
    pub fn default_branch(&self) -> anyhow::Result<String> {
        let stdout = self
            .run_command(&["symbolic-ref", "refs/remotes/origin/HEAD"])
            .map_err(|_| GitError::NoDefaultBranch)?;
        let full_ref = stdout.trim();
        Ok(full_ref
            .strip_prefix("refs/remotes/origin/")
            .unwrap_or(full_ref)
            .to_string())
    }

    /// List local branch names in git's ref order.
    pub fn local_branches(&self) -> anyhow::Result<Vec<String>> {
        // lstrip=2 instead of refname:short - git adds a "heads/" prefix to
        // short names when disambiguation against a remote is needed.
        let stdout = self.run_command(&["branch", "--format=%(refname:lstrip=2)"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// Ordered subsequence of local branches whose name contains `pattern`.
    ///
    /// The order matches [`local_branches`](Self::local_branches); it is
    /// stable for a fixed repository state, which the issue-checkout menu
    /// relies on.
    pub fn branches_matching(&self, pattern: &str) -> anyhow::Result<Vec<String>> {
        Ok(self
            .local_branches()?
            .into_iter()
            .filter(|branch| branch.contains(pattern))
            .collect())
    }

    /// Check out an existing branch.
    pub fn checkout(&self, branch: &str) -> anyhow::Result<()> {
        self.run_command(&["checkout", branch]).map(drop)
    }

    /// Create a branch at HEAD without switching to it.
    pub fn create_branch(&self, name: &str) -> anyhow::Result<()> {
        self.run_command(&["branch", name]).map(drop)
    }

    /// Delete a local branch. `force` uses `-D` (delete even if unmerged).
    pub fn delete_branch(&self, name: &str, force: bool) -> anyhow::Result<()> {
        let flag = if force { "-D" } else { "-d" };
        self.run_command(&["branch", flag, name]).map(drop)
    }

    /// Restore a file's content from another branch.
    pub fn restore_file(&self, from_branch: &str, path: &str) -> anyhow::Result<()> {
        self.run_command(&["restore", "--source", from_branch, "--", path])
            .map(drop)
    }

    /// Stage all changes, including untracked files.
    pub fn stage_all(&self) -> anyhow::Result<()> {
        self.run_command(&["add", "--all"]).map(drop)
    }

    /// Commit staged changes with the given message.
    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        self.run_command(&["commit", "-m", message]).map(drop)
    }

    /// Push `branch` to origin, creating upstream tracking if absent.
    pub fn push(&self, branch: &str, force_with_lease: bool) -> anyhow::Result<()> {
        let mut args = vec!["push", "--set-upstream", "origin", branch];
        if force_with_lease {
            args.push("--force-with-lease");
        }
        self.run_command(&args).map(drop)
    }

    /// Undo the last commit, keeping its changes staged.
    pub fn undo_last_commit(&self) -> anyhow::Result<()> {
        self.run_command(&["reset", "--soft", "HEAD^"]).map(drop)
    }

    /// The SHA of HEAD, abbreviated when `short` is set.
    pub fn current_sha(&self, short: bool) -> anyhow::Result<String> {
        let args: &[&str] = if short {
            &["rev-parse", "--short", "HEAD"]
        } else {
            &["rev-parse", "HEAD"]
        };
        Ok(self.run_command(args)?.trim().to_string())
    }

    /// The configured URL of the origin remote.
    pub fn remote_url(&self) -> anyhow::Result<String> {
        // ls-remote --get-url only reads config, no network round-trip
        Ok(self
            .run_command(&["ls-remote", "--get-url", "origin"])?
            .trim()
            .to_string())
    }

    /// Host, owner, and repository parsed from the origin remote URL.
    pub fn remote_parts(&self) -> anyhow::Result<GitRemoteUrl> {
        let url = self.remote_url()?;
        GitRemoteUrl::parse(&url).ok_or_else(|| GitError::UnparsableRemoteUrl { url }.into())
    }
}
