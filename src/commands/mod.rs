//! User-invoked operations.
//!
//! Each handler takes the resolved [`Config`](branchkit::config::Config) and
//! a [`Repository`](branchkit::git::Repository) explicitly; there is no
//! ambient settings state. Handlers validate arguments (showing help for
//! missing ones), then issue facade calls, aborting on the first failure.

mod branch;
mod checkout;
mod commit;
mod passthrough;
mod pr;
mod restore;

pub use branch::{handle_branch, handle_delete};
pub use checkout::{handle_checkout, handle_issue};
pub use commit::{handle_commit, handle_uncommit};
pub use passthrough::{handle_diff, handle_log, handle_pull, handle_status};
pub use pr::handle_pr;
pub use restore::handle_restore;
