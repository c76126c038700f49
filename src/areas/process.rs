//! Shell subprocess with a merged output stream
//!
//! A [`Process`] runs one command line through `sh -c` with both stdout and
//! stderr attached to the write end of a single anonymous pipe, so whatever
//! the command prints reaches the reader in arrival order as one stream.
//!
//! The lifecycle is strictly open → drain → close. Dropping a `Process` that
//! was never closed still closes the pipe and reaps the child.

use anyhow::Context;
use std::ffi::OsStr;
use std::io::{self, PipeReader, Read};
use std::process::{Child, Command};
use tracing::debug;

const SHELL: &str = "sh";

#[derive(Debug)]
pub struct Process {
    child: Option<Child>,
    output: Option<PipeReader>,
}

impl Process {
    pub fn open(command: impl AsRef<OsStr>) -> anyhow::Result<Self> {
        let command = command.as_ref();
        let (reader, writer) = io::pipe().context("failed to create output pipe")?;
        let error_writer = writer
            .try_clone()
            .context("failed to duplicate output pipe")?;

        // the command holds the write ends; it must go out of scope right after
        // spawning so the reader observes end-of-file once the child exits
        let child = {
            let mut shell = Command::new(SHELL);
            shell
                .arg("-c")
                .arg(command)
                .stdout(writer)
                .stderr(error_writer);
            shell
                .spawn()
                .with_context(|| format!("failed to spawn {command:?}"))?
        };

        debug!(pid = child.id(), ?command, "spawned query");

        Ok(Process {
            child: Some(child),
            output: Some(reader),
        })
    }

    /// Read at most `limit` bytes of output, discarding whatever follows.
    pub fn read_to_limit(&mut self, limit: usize) -> anyhow::Result<Vec<u8>> {
        let Some(output) = self.output.as_mut() else {
            anyhow::bail!("output stream already closed");
        };

        let mut captured = Vec::new();
        output
            .by_ref()
            .take(limit as u64)
            .read_to_end(&mut captured)
            .context("failed to read query output")?;
        io::copy(output, &mut io::sink()).context("failed to drain query output")?;

        Ok(captured)
    }

    /// Access the merged output stream for incremental reads.
    pub fn output(&mut self) -> anyhow::Result<&mut PipeReader> {
        self.output
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("output stream already closed"))
    }

    /// Close the output stream and wait for the child to terminate.
    ///
    /// A child terminated by a signal has no exit code and is reported as `0`.
    pub fn close(mut self) -> anyhow::Result<i32> {
        self.output.take();

        let Some(mut child) = self.child.take() else {
            anyhow::bail!("process already reaped");
        };
        let status = child.wait().context("failed to wait for query")?;
        let exit_code = status.code().unwrap_or(0);

        debug!(pid = child.id(), exit_code, "query finished");

        Ok(exit_code)
    }
}

impl Drop for Process {
    fn drop(&mut self) {
        self.output.take();

        if let Some(mut child) = self.child.take() {
            let _ = child.wait();
        }
    }
}
