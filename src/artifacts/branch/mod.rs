pub mod branch_identity;

/// Name `rev-parse --abbrev-ref` reports when HEAD is not on a branch.
pub const DETACHED_HEAD: &str = "HEAD";
