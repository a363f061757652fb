//! Typed domain errors with styled display.
//!
//! `GitError` is a typed enum that can be pattern-matched and tested; use
//! `.into()` to convert to `anyhow::Error` while preserving the type for
//! downcasting. `Display` produces user-ready styled output (symbol, color,
//! follow-up hint), so `main` can print an error without further formatting.

use color_print::cformat;

use crate::styling::{error_message, hint_message};
use crate::text;

/// Domain errors for git and command-layer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitError {
    /// The external git tool exited non-zero. `output` is git's own
    /// diagnostic text (stderr, falling back to stdout).
    CommandFailed { command: String, output: String },

    /// The remote has no symbolic HEAD configured.
    NoDefaultBranch,

    /// HEAD is not on a branch.
    DetachedHead { action: String },

    /// The remote URL does not match the supported `user@host:owner/repo.git`
    /// shape (HTTPS remotes are unsupported).
    UnparsableRemoteUrl { url: String },

    /// Delete refused: the branch is in the protected set.
    ProtectedBranch {
        branch: String,
        protected: Vec<String>,
    },

    /// The issue ID does not match the configured pattern.
    InvalidIssueId { id: String, pattern: String },

    /// The current branch has no leading issue ID to derive a commit key from.
    MissingIssueId { branch: String },

    /// A pull request cannot target the branch it is from.
    SamePrTarget { branch: String },

    /// Menu input was not a number in `[1, count]`.
    InvalidSelection { input: String, count: usize },
}

impl std::fmt::Display for GitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitError::CommandFailed { command, output } => {
                write!(f, "{}", error_message(cformat!("<bold>{command}</> failed")))?;
                if !output.trim().is_empty() {
                    let lines: Vec<&str> = output.trim().lines().collect();
                    write!(f, "\n{}", text::prefixed_lines("  ", &lines))?;
                }
                Ok(())
            }

            GitError::NoDefaultBranch => {
                write!(
                    f,
                    "{}\n{}",
                    error_message("The remote has no default branch configured"),
                    hint_message(cformat!(
                        "Run <bright-black>git remote set-head origin --auto</> to detect it"
                    ))
                )
            }

            GitError::DetachedHead { action } => {
                write!(
                    f,
                    "{}\n{}",
                    error_message(format!("Cannot {action}: not on a branch (detached HEAD)")),
                    hint_message(cformat!(
                        "To switch to a branch, run <bright-black>git switch <<branch>></>"
                    ))
                )
            }

            GitError::UnparsableRemoteUrl { url } => {
                write!(
                    f,
                    "{}\n{}",
                    error_message(cformat!("Cannot parse remote URL <bold>{url}</>")),
                    hint_message(
                        "Only SSH remotes of the form user@host:owner/repo.git are supported"
                    )
                )
            }

            GitError::ProtectedBranch { branch, protected } => {
                write!(
                    f,
                    "{}\n{}\n{}",
                    error_message(cformat!(
                        "Refusing to delete protected branch <bold>{branch}</>"
                    )),
                    hint_message("Protected branches:"),
                    text::prefixed_lines("  ", protected)
                )
            }

            GitError::InvalidIssueId { id, pattern } => {
                write!(
                    f,
                    "{}",
                    error_message(cformat!(
                        "Invalid issue ID <bold>{id}</> (expected to match <bright-black>{pattern}</>)"
                    ))
                )
            }

            GitError::MissingIssueId { branch } => {
                write!(
                    f,
                    "{}\n{}",
                    error_message(cformat!(
                        "Branch <bold>{branch}</> does not start with an issue ID"
                    )),
                    hint_message(
                        "Include the issue key in the message, or switch to an issue branch"
                    )
                )
            }

            GitError::SamePrTarget { branch } => {
                write!(
                    f,
                    "{}",
                    error_message(cformat!(
                        "Cannot open a pull request from <bold>{branch}</> against itself"
                    ))
                )
            }

            GitError::InvalidSelection { input, count } => {
                write!(
                    f,
                    "{}",
                    error_message(cformat!(
                        "Invalid selection <bold>{input}</> (expected a number between 1 and {count})"
                    ))
                )
            }
        }
    }
}

impl std::error::Error for GitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_includes_diagnostics() {
        let err = GitError::CommandFailed {
            command: "git push".to_string(),
            output: "remote: denied".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("git push"));
        assert!(rendered.contains("remote: denied"));
    }

    #[test]
    fn test_protected_branch_lists_protected_set() {
        let err = GitError::ProtectedBranch {
            branch: "main".to_string(),
            protected: vec!["main".to_string(), "master".to_string()],
        };
        let rendered = err.to_string();
        assert!(rendered.contains("main"));
        assert!(rendered.contains("  master"));
    }

    #[test]
    fn test_no_default_branch_suggests_remedy() {
        let rendered = GitError::NoDefaultBranch.to_string();
        assert!(rendered.contains("git remote set-head origin --auto"));
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = GitError::NoDefaultBranch.into();
        assert!(matches!(
            err.downcast_ref::<GitError>(),
            Some(GitError::NoDefaultBranch)
        ));
    }
}
