//! Working tree status classification
//!
//! `git status --porcelain` prints one record per changed or untracked path,
//! each starting with a two-letter code: the index state X followed by the
//! worktree state Y. The path itself is irrelevant for the prompt.
//!
//! ## Components
//!
//! - `status_code`: the XY prefix of one record
//! - `change_kind`: the set of counters a code contributes to
//! - `change_counts`: running totals over a whole listing

pub mod change_counts;
pub mod change_kind;
pub mod status_code;
