use crate::areas::runner::{CommandRunner, ShellRunner};
use std::cell::{RefCell, RefMut};

/// The working tree of the current directory, as seen through `git` queries.
pub struct Repository<R: CommandRunner = ShellRunner> {
    runner: R,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Repository<ShellRunner> {
    pub fn from_shell(writer: Box<dyn std::io::Write>) -> Self {
        Self::new(ShellRunner, writer)
    }
}

impl<R: CommandRunner> Repository<R> {
    pub fn new(runner: R, writer: Box<dyn std::io::Write>) -> Self {
        Repository {
            runner,
            writer: RefCell::new(writer),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
