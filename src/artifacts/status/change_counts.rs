use crate::artifacts::status::change_kind::ChangeKind;
use crate::artifacts::status::status_code::StatusCode;
use tracing::trace;

/// Running totals over a status listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeCounts {
    pub indexed: usize,
    pub modified: usize,
    pub deleted: usize,
    pub unmerged: usize,
    pub untracked: usize,
}

impl ChangeCounts {
    /// Classify one status record and add it to the totals.
    pub fn record(&mut self, line: &[u8]) {
        let code = StatusCode::parse(line);
        let kind = ChangeKind::classify(code);
        trace!(%code, ?kind, "classified status record");

        self.add(kind);
    }

    pub fn add(&mut self, kind: ChangeKind) {
        for (flag, counter) in [
            (ChangeKind::INDEXED, &mut self.indexed),
            (ChangeKind::MODIFIED, &mut self.modified),
            (ChangeKind::DELETED, &mut self.deleted),
            (ChangeKind::UNMERGED, &mut self.unmerged),
            (ChangeKind::UNTRACKED, &mut self.untracked),
        ] {
            if kind.contains(flag) {
                *counter += 1;
            }
        }
    }

    pub fn total(&self) -> usize {
        self.indexed + self.modified + self.deleted + self.unmerged + self.untracked
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}
