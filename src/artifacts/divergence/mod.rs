//! Upstream divergence
//!
//! Ahead/behind counts relative to the configured remote-tracking branch. A
//! count is kept as the bytes `rev-list --count` printed; it is only present
//! when the query succeeded and reported something other than `0`.

use crate::areas::runner::QueryResult;

const NO_COMMITS: &[u8] = b"0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitCount(Vec<u8>);

impl CommitCount {
    pub fn from_query(result: &QueryResult) -> Option<Self> {
        if !result.success() {
            return None;
        }

        match result.trimmed() {
            count if count == NO_COMMITS => None,
            count => Some(Self(count.to_vec())),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Divergence {
    pub ahead: Option<CommitCount>,
    pub behind: Option<CommitCount>,
}
