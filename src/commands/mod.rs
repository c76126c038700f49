//! Prompt command implementations
//!
//! This module contains the commands, organized into two categories following
//! Git's architecture:
//!
//! - `plumbing`: single `git` queries, each returning its raw result
//! - `porcelain`: the prompt itself, composed from the plumbing queries
//!
//! Plumbing commands provide building blocks, while the porcelain command
//! decides which failures are fatal and which merely skip a prompt section.

pub mod plumbing;
pub mod porcelain;
