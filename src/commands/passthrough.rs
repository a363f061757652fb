//! Passthroughs to git with inherited stdio.
//!
//! These keep git's own coloring and pager behavior; branchkit adds nothing
//! beyond the shortened invocation.

use branchkit::git::Repository;

pub fn handle_log(repo: &Repository, limit: Option<u32>) -> anyhow::Result<()> {
    match limit {
        Some(n) => repo.run_passthrough(&["log", "-n", &n.to_string()]),
        None => repo.run_passthrough(&["log"]),
    }
}

pub fn handle_status(repo: &Repository) -> anyhow::Result<()> {
    repo.run_passthrough(&["status"])
}

pub fn handle_diff(repo: &Repository) -> anyhow::Result<()> {
    repo.run_passthrough(&["diff"])
}

pub fn handle_pull(repo: &Repository) -> anyhow::Result<()> {
    repo.run_passthrough(&["pull"])
}
