//! Plumbing commands (single `git` queries)
//!
//! Each query is run through the repository's [`CommandRunner`] and fully
//! completes before returning. Queries report failure through their exit
//! code; only channel and spawn problems are errors at this level.
//!
//! ## Commands
//!
//! - `rev_parse`: symbolic branch name, abbreviated ref, short hash
//! - `config`: upstream remote of a branch
//! - `rev_list`: one-sided commit counts against the upstream
//! - `status`: porcelain status listing
//!
//! [`CommandRunner`]: crate::areas::runner::CommandRunner

pub mod config;
pub mod rev_list;
pub mod rev_parse;
pub mod status;

use crate::artifacts::core::BoundedBuffer;
use std::ffi::OsString;
use std::os::unix::ffi::OsStringExt;

pub const COMMAND_CAPACITY: usize = 1024;

/// Output limit for queries that print a ref, hash or remote name.
pub const NAME_OUTPUT_LIMIT: usize = 256;

/// Output limit for queries that print a commit count.
pub const COUNT_OUTPUT_LIMIT: usize = 32;

/// Join `pieces` into a command line, failing if it would not fit.
///
/// Pieces are raw bytes so that ref and remote names reach the shell
/// unchanged.
pub(crate) fn command_line(pieces: &[&[u8]]) -> anyhow::Result<OsString> {
    let mut command = BoundedBuffer::with_capacity(COMMAND_CAPACITY);
    command.push_all(pieces)?;
    Ok(OsString::from_vec(command.into_bytes()))
}
