use crate::areas::repository::Repository;
use crate::areas::runner::CommandRunner;
use std::ffi::OsStr;

const PORCELAIN_STATUS: &str = "git status --porcelain";

impl<R: CommandRunner> Repository<R> {
    /// Stream `git status --porcelain` records to `on_record`, returning the
    /// exit code once the listing is exhausted.
    pub fn porcelain_status(&self, on_record: &mut dyn FnMut(&[u8])) -> anyhow::Result<i32> {
        self.runner()
            .for_each_line(OsStr::new(PORCELAIN_STATUS), on_record)
    }
}
