/// Two-letter porcelain status code, index state first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode {
    index: u8,
    worktree: u8,
}

impl StatusCode {
    pub fn new(index: u8, worktree: u8) -> Self {
        StatusCode { index, worktree }
    }

    /// Take the code from the start of a status record.
    ///
    /// Records too short to hold a code get a zero byte in the missing
    /// positions, which no classification rule matches.
    pub fn parse(record: &[u8]) -> Self {
        let index = record.first().copied().unwrap_or_default();
        let worktree = record.get(1).copied().unwrap_or_default();

        Self::new(index, worktree)
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn worktree(&self) -> u8 {
        self.worktree
    }

    pub fn as_bytes(&self) -> [u8; 2] {
        [self.index, self.worktree]
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            self.index.escape_ascii(),
            self.worktree.escape_ascii()
        )
    }
}
