//! Shell prompt summary of a Git working tree
//!
//! Prints the current branch (or short hash when detached), how far it has
//! diverged from its upstream, and a count of staged, modified, deleted,
//! conflicted and untracked paths, formatted with zsh prompt escapes.
//!
//! Everything is computed from `git` queries run one after another through
//! `sh -c`. Any unexpected condition aborts the whole render: the caller
//! prints nothing rather than a broken prompt.

pub mod areas;
pub mod artifacts;
pub mod commands;
