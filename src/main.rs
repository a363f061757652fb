use std::path::Path;
use std::process;

use clap::Parser;

use branchkit::config::Config;
use branchkit::git::{GitError, Repository};
use branchkit::styling::{eprintln, error_message};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        // GitError Display is already styled; anything else gets the
        // standard error formatting with its context chain.
        match e.downcast_ref::<GitError>() {
            Some(err) => eprintln!("{err}"),
            None => eprintln!("{}", error_message(format!("{e:#}"))),
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Resolved fresh on every invocation and threaded into each command;
    // there is no ambient settings state.
    let config = Config::resolve(Path::new("."))?;
    let repo = Repository::current();

    match cli.command {
        Commands::Branch { issue_id, words } => {
            commands::handle_branch(&repo, &config, issue_id.as_deref(), &words)
        }
        Commands::Checkout { branch } => commands::handle_checkout(&repo, branch.as_deref()),
        Commands::Issue { issue_id } => {
            commands::handle_issue(&repo, &config, issue_id.as_deref())
        }
        Commands::Delete { branch, force } => {
            commands::handle_delete(&repo, &config, branch.as_deref(), force)
        }
        Commands::Commit { message } => commands::handle_commit(&repo, &config, &message),
        Commands::Uncommit => commands::handle_uncommit(&repo),
        Commands::Restore { path, from } => {
            commands::handle_restore(&repo, path.as_deref(), from.as_deref())
        }
        Commands::Pr { target } => commands::handle_pr(&repo, target.as_deref()),
        Commands::Log { limit } => commands::handle_log(&repo, limit),
        Commands::Status => commands::handle_status(&repo),
        Commands::Diff => commands::handle_diff(&repo),
        Commands::Pull => commands::handle_pull(&repo),
    }
}
