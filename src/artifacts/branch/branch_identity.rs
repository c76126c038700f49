use crate::artifacts::branch::DETACHED_HEAD;

/// What the prompt shows as the current position.
///
/// Names are kept as the raw bytes git printed; ref names need not be UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BranchIdentity {
    Branch(Vec<u8>),
    Detached(Vec<u8>),
    #[default]
    Unresolved,
}

impl BranchIdentity {
    pub fn branch(name: &[u8]) -> Self {
        if name.is_empty() {
            Self::Unresolved
        } else {
            Self::Branch(name.to_vec())
        }
    }

    pub fn detached(short_hash: &[u8]) -> Self {
        if short_hash.is_empty() {
            Self::Unresolved
        } else {
            Self::Detached(short_hash.to_vec())
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Branch(name) => name,
            Self::Detached(short_hash) => short_hash,
            Self::Unresolved => DETACHED_HEAD.as_bytes(),
        }
    }
}

impl std::fmt::Display for BranchIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
