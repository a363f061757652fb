//! Checkout, including issue-branch disambiguation.

use std::io::{BufRead, Write};

use branchkit::config::Config;
use branchkit::git::{GitError, Repository};
use branchkit::styling::{self, PROMPT_SYMBOL, eprintln, info_message, println, success_message};
use branchkit::text;
use color_print::cformat;

use crate::cli;

/// Plain checkout by branch name.
pub fn handle_checkout(repo: &Repository, branch: Option<&str>) -> anyhow::Result<()> {
    let Some(branch) = branch.filter(|b| text::is_present(b)) else {
        return cli::print_subcommand_help("checkout");
    };

    repo.checkout(branch)?;
    eprintln!(
        "{}",
        success_message(cformat!("Switched to <bold>{branch}</>"))
    );
    Ok(())
}

/// Check out the branch belonging to an issue ID.
///
/// Branches match when they contain the issue ID immediately followed by the
/// issue separator. One match checks out directly; several present a
/// numbered menu with a single prompt attempt - invalid input reports an
/// error and performs no checkout.
pub fn handle_issue(
    repo: &Repository,
    config: &Config,
    issue_id: Option<&str>,
) -> anyhow::Result<()> {
    let Some(issue_id) = issue_id.filter(|id| text::is_present(id)) else {
        return cli::print_subcommand_help("issue");
    };

    let needle = format!("{issue_id}{}", config.issue_separator);
    let matches = repo.branches_matching(&needle)?;

    match matches.as_slice() {
        [] => {
            eprintln!(
                "{}",
                info_message(cformat!("No branches found for issue <bold>{issue_id}</>"))
            );
            Ok(())
        }
        [only] => {
            repo.checkout(only)?;
            eprintln!("{}", success_message(cformat!("Switched to <bold>{only}</>")));
            Ok(())
        }
        _ => {
            for (index, branch) in matches.iter().enumerate() {
                println!("{}", cformat!("<cyan>{})</> {branch}", index + 1));
            }
            styling::print!("{PROMPT_SYMBOL} Select a branch [1-{}]: ", matches.len());
            styling::stdout().flush()?;

            let mut input = String::new();
            std::io::stdin().lock().read_line(&mut input)?;

            let selected = &matches[parse_selection(&input, matches.len())?];
            repo.checkout(selected)?;
            eprintln!(
                "{}",
                success_message(cformat!("Switched to <bold>{selected}</>"))
            );
            Ok(())
        }
    }
}

/// Parse a 1-based menu selection into a 0-based index.
///
/// Single attempt: anything non-numeric or outside `[1, count]` is an
/// error, with no retry loop.
fn parse_selection(input: &str, count: usize) -> Result<usize, GitError> {
    let input = input.trim();

    let invalid = || GitError::InvalidSelection {
        input: input.to_string(),
        count,
    };

    if !text::is_numeric(input) {
        return Err(invalid());
    }
    let number: usize = input.parse().map_err(|_| invalid())?;
    if (1..=count).contains(&number) {
        Ok(number - 1)
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_selection_within_range() {
        assert_eq!(parse_selection("1", 2).unwrap(), 0);
        assert_eq!(parse_selection("2", 2).unwrap(), 1);
        assert_eq!(parse_selection(" 2 \n", 2).unwrap(), 1);
    }

    #[rstest]
    #[case("0")]
    #[case("3")]
    #[case("-1")]
    #[case("1.5")]
    #[case("two")]
    #[case("")]
    fn test_selection_rejected(#[case] input: &str) {
        let err = parse_selection(input, 2).unwrap_err();
        assert!(matches!(err, GitError::InvalidSelection { count: 2, .. }));
    }
}
