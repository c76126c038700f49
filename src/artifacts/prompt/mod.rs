//! Prompt fragment assembly
//!
//! - `style`: colour tokens and glyphs
//! - `fragment`: the bounded output buffer and its section writers

pub mod fragment;
pub mod style;
