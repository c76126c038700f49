//! Prompt data structures and algorithms
//!
//! This module contains the types the prompt is computed from:
//!
//! - `branch`: identity of the current position (branch, detached hash)
//! - `core`: shared utilities (bounded buffer)
//! - `divergence`: ahead/behind counts against the upstream
//! - `prompt`: colour tokens, glyphs and the output fragment
//! - `status`: porcelain status record classification

pub mod branch;
pub mod core;
pub mod divergence;
pub mod prompt;
pub mod status;
