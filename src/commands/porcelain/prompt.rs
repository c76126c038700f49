use crate::areas::repository::Repository;
use crate::areas::runner::CommandRunner;
use crate::artifacts::branch::DETACHED_HEAD;
use crate::artifacts::branch::branch_identity::BranchIdentity;
use crate::artifacts::divergence::{CommitCount, Divergence};
use crate::artifacts::prompt::fragment::PromptFragment;
use crate::artifacts::status::change_counts::ChangeCounts;
use crate::commands::plumbing::rev_list::Side;
use std::io::Write;
use tracing::debug;

// Query order is fixed: branch, upstream remote, ahead, behind, status.
// Every query completes before the next one is issued.
impl<R: CommandRunner> Repository<R> {
    pub fn prompt(&self) -> anyhow::Result<()> {
        let prompt = self.build_prompt()?;
        let mut writer = self.writer();
        writer.write_all(prompt.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(())
    }

    pub fn build_prompt(&self) -> anyhow::Result<PromptFragment> {
        let branch = self.resolve_branch()?;
        let mut prompt = PromptFragment::default();
        prompt.push_branch(&branch)?;

        if let Some(divergence) = self.resolve_divergence(&branch)? {
            prompt.push_divergence(&divergence)?;
        }
        prompt.push_separator()?;

        let counts = self.count_changes()?;
        prompt.push_changes(&counts)?;

        Ok(prompt)
    }

    pub fn resolve_branch(&self) -> anyhow::Result<BranchIdentity> {
        let symbolic_ref = self.symbolic_ref()?;
        if symbolic_ref.success() {
            return Ok(BranchIdentity::branch(symbolic_ref.trimmed()));
        }

        let abbrev_ref = self.abbrev_ref()?;
        anyhow::ensure!(
            abbrev_ref.success(),
            "cannot resolve HEAD (exit code {})",
            abbrev_ref.exit_code()
        );

        let name = abbrev_ref.trimmed();
        if name != DETACHED_HEAD.as_bytes() {
            return Ok(BranchIdentity::branch(name));
        }

        let short_hash = self.short_hash()?;
        anyhow::ensure!(
            short_hash.success(),
            "cannot abbreviate detached HEAD (exit code {})",
            short_hash.exit_code()
        );

        Ok(BranchIdentity::detached(short_hash.trimmed()))
    }

    /// `None` when the branch has no upstream remote configured.
    pub fn resolve_divergence(
        &self,
        branch: &BranchIdentity,
    ) -> anyhow::Result<Option<Divergence>> {
        let remote = self.upstream_remote(branch)?;
        if !remote.success() {
            debug!(%branch, "no upstream remote");
            return Ok(None);
        }

        let remote = remote.trimmed();
        let ahead = self.count_commits(Side::Right, remote, branch)?;
        let behind = self.count_commits(Side::Left, remote, branch)?;

        Ok(Some(Divergence {
            ahead: CommitCount::from_query(&ahead),
            behind: CommitCount::from_query(&behind),
        }))
    }

    pub fn count_changes(&self) -> anyhow::Result<ChangeCounts> {
        let mut counts = ChangeCounts::default();
        let exit_code = self.porcelain_status(&mut |record: &[u8]| counts.record(record))?;
        anyhow::ensure!(
            exit_code == 0,
            "cannot list working tree status (exit code {})",
            exit_code
        );

        debug!(?counts, "counted working tree changes");
        Ok(counts)
    }
}
