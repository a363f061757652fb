//! Restore a file from another branch.

use branchkit::git::Repository;
use branchkit::styling::{eprintln, success_message};
use branchkit::text;
use color_print::cformat;

use crate::cli;

/// Restore `path` from `--from` (or the default branch when omitted).
pub fn handle_restore(
    repo: &Repository,
    path: Option<&str>,
    from: Option<&str>,
) -> anyhow::Result<()> {
    let Some(path) = path.filter(|p| text::is_present(p)) else {
        return cli::print_subcommand_help("restore");
    };

    let from = match from.filter(|b| text::is_present(b)) {
        Some(branch) => branch.to_string(),
        None => repo.default_branch()?,
    };

    repo.restore_file(&from, path)?;
    eprintln!(
        "{}",
        success_message(cformat!("Restored <bold>{path}</> from <bold>{from}</>"))
    );
    Ok(())
}
