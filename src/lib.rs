//! Git shortcuts for issue-driven branch workflows.
//!
//! Branchkit is a thin convenience layer over the `git` binary: branch names
//! are built from issue IDs, commit messages get the issue key prepended, and
//! pull-request URLs are derived from the remote. All git state is read and
//! written by shelling out to `git`; nothing is persisted beyond the
//! configuration file.
//!
//! The library API exists for the `bk` binary and its tests and is not
//! stable.

pub mod config;
pub mod git;
pub mod styling;
pub mod text;
pub mod util;
