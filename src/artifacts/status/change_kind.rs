use crate::artifacts::status::status_code::StatusCode;
use bitflags::bitflags;

/// Codes that mark an unresolved merge conflict.
const UNMERGED_CODES: phf::Set<&'static str> = phf::phf_set! {
    "AA", "AU", "DD", "DU", "UA", "UD", "UU",
};

bitflags! {
    /// Counters a single status record contributes to.
    ///
    /// A record may touch several counters (a staged file modified again is
    /// both indexed and modified) but each at most once, which a flag set
    /// enforces by construction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChangeKind: u8 {
        const INDEXED = 0b00001;
        const MODIFIED = 0b00010;
        const DELETED = 0b00100;
        const UNMERGED = 0b01000;
        const UNTRACKED = 0b10000;
    }
}

impl ChangeKind {
    pub fn classify(code: StatusCode) -> Self {
        let (index, worktree) = (code.index(), code.worktree());

        if index == b'?' && worktree == b'?' {
            return Self::UNTRACKED;
        }

        if Self::is_unmerged(code) {
            return Self::UNMERGED;
        }

        match index {
            b' ' => match worktree {
                b'M' => Self::MODIFIED,
                b'D' => Self::DELETED,
                _ => Self::empty(),
            },
            b'D' => match worktree {
                b'M' => Self::INDEXED | Self::MODIFIED,
                _ => Self::INDEXED,
            },
            b'M' | b'A' | b'R' | b'C' => match worktree {
                b'M' => Self::INDEXED | Self::MODIFIED,
                b'D' => Self::INDEXED | Self::DELETED,
                _ => Self::INDEXED,
            },
            _ => Self::empty(),
        }
    }

    fn is_unmerged(code: StatusCode) -> bool {
        std::str::from_utf8(&code.as_bytes()).is_ok_and(|code| UNMERGED_CODES.contains(code))
    }
}
