//! Commit with issue-key prefixing, and uncommit.

use branchkit::config::Config;
use branchkit::git::{GitError, Repository};
use branchkit::styling::{eprintln, success_message};
use branchkit::text;
use color_print::cformat;

use crate::cli;

/// Stage all changes, commit, and push with upstream tracking.
///
/// A failing subprocess step aborts the remaining steps; git's own
/// atomicity governs, there is no rollback.
pub fn handle_commit(
    repo: &Repository,
    config: &Config,
    message_words: &[String],
) -> anyhow::Result<()> {
    if message_words.is_empty() {
        return cli::print_subcommand_help("commit");
    }
    let message = message_words.join(" ");
    if text::is_blank(&message) {
        return cli::print_subcommand_help("commit");
    }

    let branch = repo.require_current_branch("commit")?;
    let message = prefixed_message(config, &branch, &message)?;

    repo.stage_all()?;
    repo.commit(&message)?;
    repo.push(&branch, false)?;

    let sha = repo.current_sha(true)?;
    eprintln!(
        "{}",
        success_message(cformat!("Committed and pushed <bold>{sha}</>"))
    );
    Ok(())
}

/// Undo the last commit, leaving its changes staged.
pub fn handle_uncommit(repo: &Repository) -> anyhow::Result<()> {
    repo.undo_last_commit()?;
    let sha = repo.current_sha(true)?;
    eprintln!(
        "{}",
        success_message(cformat!(
            "Last commit undone, HEAD now at <bold>{sha}</> (changes kept staged)"
        ))
    );
    Ok(())
}

/// Apply the `<project-key>-<issue-id> - ` prefix when required.
///
/// Left unchanged when the key isn't required or the message already starts
/// with it. The issue ID is the longest leading run of the branch name
/// matching the configured pattern; a branch without one is an error rather
/// than a silent empty prefix.
fn prefixed_message(config: &Config, branch: &str, message: &str) -> anyhow::Result<String> {
    if !config.commits_require_issue_key || config.has_issue_key(message)? {
        return Ok(message.to_string());
    }

    let issue_id = config
        .leading_issue_id(branch)?
        .ok_or_else(|| GitError::MissingIssueId {
            branch: branch.to_string(),
        })?;

    Ok(format!(
        "{}-{issue_id} - {message}",
        config.project_key
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn devu_config() -> Config {
        Config {
            commits_require_issue_key: true,
            project_key: "DEVU".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_prefix_derived_from_branch() {
        let message = prefixed_message(&devu_config(), "1234-fix_bug", "fix typo").unwrap();
        assert_eq!(message, "DEVU-1234 - fix typo");
    }

    #[test]
    fn test_message_with_key_left_alone() {
        let message =
            prefixed_message(&devu_config(), "1234-fix_bug", "DEVU-99 - already tagged").unwrap();
        assert_eq!(message, "DEVU-99 - already tagged");
    }

    #[test]
    fn test_key_not_required_leaves_message_alone() {
        let message = prefixed_message(&Config::default(), "whatever", "fix typo").unwrap();
        assert_eq!(message, "fix typo");
    }

    #[test]
    fn test_branch_without_issue_id_is_an_error() {
        let err = prefixed_message(&devu_config(), "no_issue_here", "fix typo").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GitError>(),
            Some(GitError::MissingIssueId { branch }) if branch == "no_issue_here"
        ));
    }

    #[test]
    fn test_longest_leading_run_wins() {
        // [0-9]+ is greedy: the whole leading digit run is the issue ID
        let message = prefixed_message(&devu_config(), "10234/fix", "m").unwrap();
        assert_eq!(message, "DEVU-10234 - m");
    }
}
