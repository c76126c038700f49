use crate::areas::repository::Repository;
use crate::areas::runner::{CommandRunner, QueryResult};
use crate::artifacts::branch::branch_identity::BranchIdentity;
use crate::commands::plumbing::{NAME_OUTPUT_LIMIT, command_line};

impl<R: CommandRunner> Repository<R> {
    /// Remote configured as upstream for `branch`; fails when there is none.
    pub fn upstream_remote(&self, branch: &BranchIdentity) -> anyhow::Result<QueryResult> {
        let command = command_line(&[b"git config branch.", branch.as_bytes(), b".remote"])?;

        self.runner().run(&command, NAME_OUTPUT_LIMIT)
    }
}
