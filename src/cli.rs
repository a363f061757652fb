//! Command-line interface definition.
//!
//! Convention: a command invoked without its required positional argument
//! prints that subcommand's help block and exits successfully, rather than
//! failing argument parsing. Positional arguments are therefore optional at
//! the clap level and checked in the handlers.

use clap::builder::styling::{AnsiColor, Color, Styles};
use clap::{CommandFactory, Parser, Subcommand};

/// Custom styles for help output - green headers, cyan literals
fn help_styles() -> Styles {
    Styles::styled()
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .usage(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .literal(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .placeholder(anstyle::Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
}

#[derive(Parser)]
#[command(name = "bk")]
#[command(about = "Git shortcuts for issue-driven branch workflows")]
#[command(version)]
#[command(styles = help_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (-v shows the git commands being run)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an issue branch and switch to it
    ///
    /// The branch name is <issue-id><issue-separator><description>, with the
    /// description words joined by the word separator, e.g. `bk branch 1234
    /// fix the bug` creates `1234/fix-the-bug`.
    #[command(visible_alias = "b")]
    Branch {
        /// Issue ID (must match the configured issue pattern)
        issue_id: Option<String>,

        /// Description words, joined by the word separator
        words: Vec<String>,
    },

    /// Check out a branch by name
    #[command(visible_alias = "co")]
    Checkout {
        /// Branch to check out
        branch: Option<String>,
    },

    /// Check out the branch for an issue, with a menu when several match
    #[command(visible_alias = "i")]
    Issue {
        /// Issue ID to look up
        issue_id: Option<String>,
    },

    /// Delete a local branch (protected branches are refused)
    #[command(visible_alias = "rm")]
    Delete {
        /// Branch to delete
        branch: Option<String>,

        /// Delete even if not fully merged
        #[arg(short, long)]
        force: bool,
    },

    /// Stage everything, commit, and push
    ///
    /// With commits-require-issue-key set, the message gets
    /// `<project-key>-<issue-id> - ` prepended, deriving the issue ID from
    /// the current branch name when the message doesn't carry it already.
    #[command(visible_alias = "c")]
    Commit {
        /// Commit message (words are joined with spaces)
        message: Vec<String>,
    },

    /// Undo the last commit, keeping its changes staged
    Uncommit,

    /// Restore a file from another branch
    Restore {
        /// File to restore
        path: Option<String>,

        /// Branch to restore from (default: the remote's default branch)
        #[arg(long)]
        from: Option<String>,
    },

    /// Print and open the pull-request comparison URL
    #[command(visible_alias = "p")]
    Pr {
        /// Target branch (default: the remote's default branch)
        target: Option<String>,
    },

    /// Show the commit log
    Log {
        /// Limit the number of commits shown
        limit: Option<u32>,
    },

    /// Show working tree status
    #[command(visible_alias = "st")]
    Status,

    /// Show uncommitted changes
    #[command(visible_alias = "d")]
    Diff,

    /// Pull the current branch
    Pull,
}

/// Print the help block for a subcommand, used when a required positional
/// argument is missing. Returning normally afterwards keeps the exit status
/// at 0.
pub fn print_subcommand_help(name: &str) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    cmd.build();
    if let Some(sub) = cmd.find_subcommand_mut(name) {
        sub.print_help()?;
    }
    Ok(())
}
