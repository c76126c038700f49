use crate::areas::process::Process;
use derive_new::new;
use std::ffi::OsStr;
use std::io::{BufRead, BufReader};

/// Captured outcome of one query.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct QueryResult {
    output: Vec<u8>,
    exit_code: i32,
}

impl QueryResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Output with leading and trailing whitespace removed.
    ///
    /// Ref and remote names are arbitrary bytes, so no decoding happens here.
    pub fn trimmed(&self) -> &[u8] {
        trim_space(&self.output)
    }
}

/// Whitespace as the C locale's `isspace` sees it, vertical tab included.
fn is_space(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn trim_space(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|byte| !is_space(byte))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|byte| !is_space(byte))
        .map_or(start, |last| last + 1);

    &bytes[start..end]
}

/// Executes query command lines one at a time.
pub trait CommandRunner {
    /// Run `command` to completion, keeping at most `limit` bytes of output.
    fn run(&self, command: &OsStr, limit: usize) -> anyhow::Result<QueryResult>;

    /// Run `command` to completion, handing every output line (without its
    /// terminator) to `on_line`, and return the exit code.
    fn for_each_line(
        &self,
        command: &OsStr,
        on_line: &mut dyn FnMut(&[u8]),
    ) -> anyhow::Result<i32>;
}

/// Runs queries through the system shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &OsStr, limit: usize) -> anyhow::Result<QueryResult> {
        let mut process = Process::open(command)?;
        let output = process.read_to_limit(limit)?;
        let exit_code = process.close()?;

        Ok(QueryResult::new(output, exit_code))
    }

    fn for_each_line(
        &self,
        command: &OsStr,
        on_line: &mut dyn FnMut(&[u8]),
    ) -> anyhow::Result<i32> {
        let mut process = Process::open(command)?;

        for line in BufReader::new(process.output()?).split(b'\n') {
            on_line(&line?);
        }

        process.close()
    }
}
