use crate::areas::runner::{CommandRunner, QueryResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::rc::Rc;

/// Exit code a shell reports for a command it cannot find.
const NOT_FOUND: i32 = 127;

/// Replays canned results per command line and records what was asked.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<OsString, QueryResult>,
    issued: RefCell<Vec<OsString>>,
}

impl ScriptedRunner {
    pub fn respond(
        mut self,
        command: impl AsRef<OsStr>,
        output: impl AsRef<[u8]>,
        exit_code: i32,
    ) -> Self {
        self.responses.insert(
            command.as_ref().to_os_string(),
            QueryResult::new(output.as_ref().to_vec(), exit_code),
        );
        self
    }

    pub fn issued(&self) -> Vec<OsString> {
        self.issued.borrow().clone()
    }

    fn lookup(&self, command: &OsStr) -> QueryResult {
        self.issued.borrow_mut().push(command.to_os_string());

        self.responses.get(command).cloned().unwrap_or_else(|| {
            let message = format!("sh: {}: not found\n", command.to_string_lossy());
            QueryResult::new(message.into_bytes(), NOT_FOUND)
        })
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &OsStr, limit: usize) -> anyhow::Result<QueryResult> {
        let result = self.lookup(command);
        let output = result.output().iter().take(limit).copied().collect();

        Ok(QueryResult::new(output, result.exit_code()))
    }

    /// Splits like a buffered reader does: every `\n` ends a record, blank
    /// records included, and a final unterminated record is still delivered.
    fn for_each_line(
        &self,
        command: &OsStr,
        on_line: &mut dyn FnMut(&[u8]),
    ) -> anyhow::Result<i32> {
        let result = self.lookup(command);
        result
            .output()
            .split_inclusive(|byte| *byte == b'\n')
            .for_each(|line| on_line(line.strip_suffix(b"\n").unwrap_or(line)));

        Ok(result.exit_code())
    }
}

/// In-memory writer whose contents stay readable after being boxed.
#[derive(Debug, Default, Clone)]
pub struct SharedWriter(Rc<RefCell<Vec<u8>>>);

impl SharedWriter {
    pub fn bytes(&self) -> Vec<u8> {
        self.0.borrow().clone()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).to_string()
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("a\n\nb\n", vec!["a", "", "b"])]
    #[case("a\nb", vec!["a", "b"])]
    #[case("\n", vec![""])]
    #[case("", vec![])]
    fn lines_split_like_a_buffered_reader(#[case] output: &str, #[case] expected: Vec<&str>) {
        let runner = ScriptedRunner::default().respond("list", output, 0);
        let mut lines = Vec::new();

        runner
            .for_each_line(OsStr::new("list"), &mut |line: &[u8]| {
                lines.push(String::from_utf8_lossy(line).to_string())
            })
            .unwrap();

        assert_eq!(lines, expected);
    }
}
