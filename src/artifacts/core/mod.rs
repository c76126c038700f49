//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application.

/// Append-only byte buffer with a hard capacity.
///
/// Unlike a truncating writer, pushing past the capacity is an error and leaves
/// the buffer untouched, so a caller can never observe a half-written piece.
///
/// ## Usage
///
/// ```ignore
/// let mut command = BoundedBuffer::with_capacity(1024);
/// command.push_all(&[b"git config branch.", branch, b".remote"])?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl BoundedBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        BoundedBuffer {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, piece: &[u8]) -> anyhow::Result<()> {
        self.push_all(&[piece])
    }

    /// Append every piece in order, or none of them.
    pub fn push_all(&mut self, pieces: &[&[u8]]) -> anyhow::Result<()> {
        let required = self.bytes.len() + pieces.iter().map(|piece| piece.len()).sum::<usize>();
        anyhow::ensure!(
            required <= self.capacity,
            "buffer overflow: {} bytes needed, capacity is {}",
            required,
            self.capacity
        );

        pieces
            .iter()
            .for_each(|piece| self.bytes.extend_from_slice(piece));
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
