use crate::areas::repository::Repository;
use crate::areas::runner::{CommandRunner, QueryResult};
use crate::commands::plumbing::NAME_OUTPUT_LIMIT;
use std::ffi::OsStr;

const SYMBOLIC_REF: &str = "git symbolic-ref --short HEAD";
const ABBREV_REF: &str = "git rev-parse --abbrev-ref HEAD";
const SHORT_HASH: &str = "git rev-parse --short HEAD";

impl<R: CommandRunner> Repository<R> {
    /// Branch HEAD points at; fails when HEAD is detached.
    pub fn symbolic_ref(&self) -> anyhow::Result<QueryResult> {
        self.runner().run(OsStr::new(SYMBOLIC_REF), NAME_OUTPUT_LIMIT)
    }

    /// Abbreviated name of HEAD, `HEAD` itself when detached.
    pub fn abbrev_ref(&self) -> anyhow::Result<QueryResult> {
        self.runner().run(OsStr::new(ABBREV_REF), NAME_OUTPUT_LIMIT)
    }

    pub fn short_hash(&self) -> anyhow::Result<QueryResult> {
        self.runner().run(OsStr::new(SHORT_HASH), NAME_OUTPUT_LIMIT)
    }
}
