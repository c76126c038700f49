//! Core repository components
//!
//! This module contains the building blocks used to query a Git working tree:
//!
//! - `process`: `sh -c` subprocess with merged stdout/stderr
//! - `runner`: query execution seam and captured results
//! - `repository`: the working tree being described, plus its output writer

pub mod process;
pub mod repository;
pub mod runner;
#[cfg(test)]
pub(crate) mod scripted;
