//! Pull-request URL construction.

use branchkit::git::{GitError, GitRemoteUrl, Repository};
use branchkit::styling::{eprintln, println, warning_message};
use branchkit::text;

/// Build the comparison URL for the current branch and open it.
///
/// The target is the explicit argument when present and non-blank, else the
/// remote's default branch. Targeting the current branch itself is invalid
/// input, caught before any URL is built.
pub fn handle_pr(repo: &Repository, target: Option<&str>) -> anyhow::Result<()> {
    let target = match target.filter(|t| text::is_present(t)) {
        Some(explicit) => explicit.to_string(),
        None => repo.default_branch()?,
    };

    let current = repo.require_current_branch("open a pull request")?;
    validate_target(&target, &current)?;

    let remote = repo.remote_parts()?;
    let url = compare_url(&remote, &target, &current);
    println!("{url}");

    // Opening the browser is best-effort; the URL is already printed.
    if let Err(e) = open::that(&url) {
        eprintln!("{}", warning_message(format!("Could not open browser: {e}")));
    }
    Ok(())
}

/// Self-comparison is invalid input, not merely a no-op.
fn validate_target(target: &str, current: &str) -> Result<(), GitError> {
    if target == current {
        return Err(GitError::SamePrTarget {
            branch: current.to_string(),
        });
    }
    Ok(())
}

/// `https://<host>/<owner>/<repo>/compare/<target>...<source>` with the
/// branch names percent-encoded.
fn compare_url(remote: &GitRemoteUrl, target: &str, source: &str) -> String {
    format!(
        "https://{}/{}/{}/compare/{}...{}",
        remote.host(),
        remote.owner(),
        remote.repo(),
        urlencoding::encode(target),
        urlencoding::encode(source),
    )
}
