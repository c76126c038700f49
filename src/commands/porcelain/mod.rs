//! Porcelain commands (user-facing output)
//!
//! ## Commands
//!
//! - `prompt`: render the branch, divergence and change summary line

pub mod prompt;
