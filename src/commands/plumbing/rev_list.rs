use crate::areas::repository::Repository;
use crate::areas::runner::{CommandRunner, QueryResult};
use crate::artifacts::branch::branch_identity::BranchIdentity;
use crate::commands::plumbing::{COUNT_OUTPUT_LIMIT, command_line};

/// Side of the `<upstream>...HEAD` symmetric difference to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Commits only on the upstream: how far behind HEAD is.
    Left,
    /// Commits only on HEAD: how far ahead it is.
    Right,
}

impl From<Side> for &str {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => "--left-only",
            Side::Right => "--right-only",
        }
    }
}

impl<R: CommandRunner> Repository<R> {
    pub fn count_commits(
        &self,
        side: Side,
        remote: &[u8],
        branch: &BranchIdentity,
    ) -> anyhow::Result<QueryResult> {
        let command = command_line(&[
            b"git rev-list ",
            <&str>::from(side).as_bytes(),
            b" refs/remotes/",
            remote,
            b"/",
            branch.as_bytes(),
            b"...HEAD --count",
        ])?;

        self.runner().run(&command, COUNT_OUTPUT_LIMIT)
    }
}
