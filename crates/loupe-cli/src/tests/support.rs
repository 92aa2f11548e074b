//! Harness for running the CLI in-process against files in a temporary
//! directory.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, ensure};
use tempfile::TempDir;

use crate::run;

/// Captured result of one CLI run.
pub(super) struct Outcome {
    pub(super) exit: ExitCode,
    pub(super) stdout: String,
    pub(super) stderr: String,
}

/// A temporary directory holding the documents a test works on.
pub(super) struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub(super) fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary directory")?;
        Ok(Self { dir })
    }

    pub(super) fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub(super) fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    pub(super) fn read(&self, name: &str) -> Result<String> {
        let path = self.path(name);
        ensure!(path.exists(), "{} does not exist", path.display());
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }

    /// Expands arguments of the form `@name` to paths inside the workspace.
    pub(super) fn arguments<'a>(&self, args: impl IntoIterator<Item = &'a str>) -> Vec<OsString> {
        std::iter::once(OsString::from("loupe"))
            .chain(args.into_iter().map(|arg| {
                arg.strip_prefix('@')
                    .map_or_else(|| OsString::from(arg), |name| self.path(name).into_os_string())
            }))
            .collect()
    }

    pub(super) fn run<'a>(&self, args: impl IntoIterator<Item = &'a str>) -> Outcome {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run(self.arguments(args), &mut stdout, &mut stderr);
        Outcome {
            exit,
            stdout: String::from_utf8(stdout).expect("stdout should be UTF-8"),
            stderr: String::from_utf8(stderr).expect("stderr should be UTF-8"),
        }
    }
}

/// Collects the bytes a log subscriber writes.
#[derive(Clone, Default)]
pub(super) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub(super) fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer lock").clone();
        String::from_utf8(bytes).expect("logs should be UTF-8")
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
