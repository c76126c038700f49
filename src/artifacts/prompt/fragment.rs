use crate::artifacts::branch::branch_identity::BranchIdentity;
use crate::artifacts::core::BoundedBuffer;
use crate::artifacts::divergence::Divergence;
use crate::artifacts::prompt::style::{self, Badge};
use crate::artifacts::status::change_counts::ChangeCounts;

pub const PROMPT_CAPACITY: usize = 1024;

/// The rendered prompt, written section by section in display order:
/// branch, divergence, separator, changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptFragment {
    buffer: BoundedBuffer,
}

impl Default for PromptFragment {
    fn default() -> Self {
        Self::with_capacity(PROMPT_CAPACITY)
    }
}

impl PromptFragment {
    pub fn with_capacity(capacity: usize) -> Self {
        PromptFragment {
            buffer: BoundedBuffer::with_capacity(capacity),
        }
    }

    pub fn push_branch(&mut self, identity: &BranchIdentity) -> anyhow::Result<()> {
        self.buffer.push_all(&[
            style::SEPARATOR.as_bytes(),
            style::BRANCH_START.as_bytes(),
            identity.as_bytes(),
            style::COLOR_END.as_bytes(),
        ])
    }

    /// Ahead always goes before behind.
    pub fn push_divergence(&mut self, divergence: &Divergence) -> anyhow::Result<()> {
        if let Some(ahead) = &divergence.ahead {
            self.buffer
                .push_all(&[style::AHEAD.as_bytes(), ahead.as_bytes()])?;
        }
        if let Some(behind) = &divergence.behind {
            self.buffer
                .push_all(&[style::BEHIND.as_bytes(), behind.as_bytes()])?;
        }

        Ok(())
    }

    pub fn push_separator(&mut self) -> anyhow::Result<()> {
        self.buffer.push(style::SEPARATOR.as_bytes())
    }

    pub fn push_changes(&mut self, counts: &ChangeCounts) -> anyhow::Result<()> {
        if counts.is_clean() {
            return self.push_badge(&style::CLEAN, "");
        }

        for (badge, count) in [
            (&style::INDEXED, counts.indexed),
            (&style::MODIFIED, counts.modified),
            (&style::DELETED, counts.deleted),
            (&style::UNMERGED, counts.unmerged),
        ] {
            if count > 0 {
                self.push_badge(badge, &count.to_string())?;
            }
        }

        // only presence matters for untracked files
        if counts.untracked > 0 {
            self.push_badge(&style::UNTRACKED, "")?;
        }

        Ok(())
    }

    fn push_badge(&mut self, badge: &Badge, suffix: &str) -> anyhow::Result<()> {
        self.buffer.push_all(&[
            badge.start.as_bytes(),
            badge.glyph.as_bytes(),
            suffix.as_bytes(),
            badge.end.as_bytes(),
        ])
    }

    /// The prompt line without its terminator, exactly as written to stdout.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }
}
