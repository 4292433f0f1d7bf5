use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Context};
use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

pub trait PathBufExt {
    fn check_writable(&self, allow_overwrite: bool) -> anyhow::Result<()>;
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>>;
}

impl PathBufExt for PathBuf {
    fn check_writable(&self, allow_overwrite: bool) -> anyhow::Result<()> {
        if !allow_overwrite && self.exists() {
            bail!(
                "file already exists: {} (use -q to overwrite)",
                self.to_string_lossy()
            );
        }
        Ok(())
    }

    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>> {
        let mut file_options = File::options();

        if allow_overwrite {
            file_options.write(true).truncate(true).create(true);
        } else {
            file_options.write(true).create_new(true);
        };

        let file = file_options
            .open(self)
            .context(format!("failed to create file: {}", self.to_string_lossy()))?;

        Ok(BufWriter::new(file))
    }
}

pub fn init_logging(log_level: LevelFilter) -> anyhow::Result<()> {
    // stdout may be carrying the alignment, so logs always go to stderr
    TermLogger::init(
        log_level,
        Default::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialize logger")
}

pub fn set_threads(num_threads: usize) -> anyhow::Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .context("failed to build rayon global threadpool")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_check_writable_creates_nothing() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.fa");

        path.check_writable(false)?;
        check!(!path.exists());

        std::fs::write(&path, ">a\nA\n")?;
        check!(path.check_writable(false).is_err());
        path.check_writable(true)?;
        Ok(())
    }
}
