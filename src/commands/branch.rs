//! Branch creation and deletion.

use branchkit::config::Config;
use branchkit::git::{GitError, Repository};
use branchkit::styling::{eprintln, success_message};
use branchkit::text;
use color_print::cformat;

use crate::cli;

/// Create `<issue-id><issue-separator><words...>` and switch to it.
pub fn handle_branch(
    repo: &Repository,
    config: &Config,
    issue_id: Option<&str>,
    words: &[String],
) -> anyhow::Result<()> {
    let Some(issue_id) = issue_id.filter(|id| text::is_present(id)) else {
        return cli::print_subcommand_help("branch");
    };
    if words.is_empty() {
        return cli::print_subcommand_help("branch");
    }

    if !config.is_valid_issue_id(issue_id)? {
        return Err(GitError::InvalidIssueId {
            id: issue_id.to_string(),
            pattern: config.issue_pattern.clone(),
        }
        .into());
    }

    let description = text::join(&config.word_separator, words);
    let name = format!("{issue_id}{}{description}", config.issue_separator);

    repo.create_branch(&name)?;
    repo.checkout(&name)?;

    eprintln!(
        "{}",
        success_message(cformat!("Created and switched to <bold>{name}</>"))
    );
    Ok(())
}

/// Delete a local branch, refusing protected names before any git call.
pub fn handle_delete(
    repo: &Repository,
    config: &Config,
    branch: Option<&str>,
    force: bool,
) -> anyhow::Result<()> {
    let Some(branch) = branch.filter(|b| text::is_present(b)) else {
        return cli::print_subcommand_help("delete");
    };

    if config.is_protected(branch) {
        return Err(GitError::ProtectedBranch {
            branch: branch.to_string(),
            protected: config.protected_branches.clone(),
        }
        .into());
    }

    repo.delete_branch(branch, force)?;
    eprintln!(
        "{}",
        success_message(cformat!("Deleted branch <bold>{branch}</>"))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_delete_never_reaches_git() {
        // The repository points at a nonexistent directory; if the facade
        // were invoked the error would be a spawn failure, not
        // ProtectedBranch.
        let repo = Repository::at("/no/such/repo");
        let config = Config::default();

        let err = handle_delete(&repo, &config, Some("main"), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GitError>(),
            Some(GitError::ProtectedBranch { branch, .. }) if branch == "main"
        ));

        // Force doesn't bypass protection either
        let err = handle_delete(&repo, &config, Some("master"), true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GitError>(),
            Some(GitError::ProtectedBranch { .. })
        ));
    }

    #[test]
    fn test_invalid_issue_id_never_reaches_git() {
        let repo = Repository::at("/no/such/repo");
        let config = Config::default();

        let err =
            handle_branch(&repo, &config, Some("12a4"), &["fix".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GitError>(),
            Some(GitError::InvalidIssueId { id, .. }) if id == "12a4"
        ));
    }
}
