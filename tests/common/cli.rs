use assert_cmd::Command;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tempfile::TempDir;

/// Scratch directory the binary runs in.
pub struct MergeWorkspace {
    _dir: TempDir,
    pub root: PathBuf,
}

impl MergeWorkspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp workspace");
        let root = dir.path().to_path_buf();
        Self { _dir: dir, root }
    }

    /// Write `content` to `rel` under the workspace root, creating parents.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel)).expect("read output")
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `jsonl-merge` with `args` from the workspace root.
pub fn run_merge<I, S>(workspace: &MergeWorkspace, args: I, label: &str) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_merge_in(&workspace.root, args, label)
}

pub fn run_merge_in<I, S>(cwd: &Path, args: I, label: &str) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::cargo_bin("jsonl-merge")
        .expect("binary built")
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run jsonl-merge: {e}"));

    RunOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
