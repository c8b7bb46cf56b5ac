//! Shared testing harness for `mlpush` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_repository;

pub(crate) const RUN_CONFIG: &str = "\
default_settings: null
behaviors:
  Walker:
    trainer_type: ppo
    hyperparameters:
      batch_size: 2048
      learning_rate: 0.0003
    max_steps: 30000000
";

/// Isolated environment holding a fake `$HOME`, a training run and a bare remote.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create test home");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Directory CLI invocations run in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Run directory written by [`write_run`](Self::write_run).
    pub(crate) fn run_dir(&self) -> PathBuf {
        self.work_dir.join("results").join("walker-run")
    }

    /// Write a finished training run: an ONNX model, its config and a checkpoint folder.
    pub(crate) fn write_run(&self) -> PathBuf {
        let run = self.run_dir();
        fs::create_dir_all(run.join("Walker")).expect("create run dir");
        fs::write(run.join("Walker.onnx"), b"\x08\x01onnx-model").expect("write model");
        fs::write(run.join("configuration.yaml"), RUN_CONFIG).expect("write config");
        fs::write(run.join("Walker").join("checkpoint.pt"), b"weights").expect("write checkpoint");
        run
    }

    /// Bare repository standing in for the hub's git remote.
    pub(crate) fn remote(&self) -> PathBuf {
        self.root.path().join("remote.git")
    }

    /// Create the bare remote, seeded with one commit holding `files`.
    pub(crate) fn init_remote(&self, files: &[(&str, &str)]) -> PathBuf {
        let remote = self.remote();
        git_repository::init_bare_repo(&remote);
        if !files.is_empty() {
            git_repository::seed_remote(&remote, &self.root.path().join("seed"), files);
        }
        remote
    }

    /// `file://` URL of the bare remote.
    pub(crate) fn remote_url(&self) -> String {
        url::Url::from_file_path(self.remote()).expect("absolute remote path").to_string()
    }

    /// Parent of the local working copy.
    pub(crate) fn hub_dir(&self) -> PathBuf {
        self.work_dir.join("hub")
    }

    /// Build a command for invoking the compiled `mlpush` binary with no ambient token.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mlpush").expect("Failed to locate mlpush binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("GIT_TERMINAL_PROMPT", "0")
            .env_remove("HF_TOKEN")
            .env_remove("HUGGING_FACE_HUB_TOKEN")
            .env_remove("HF_HOME")
            .env_remove("HF_ENDPOINT")
            .env_remove("RUST_LOG");
        cmd
    }
}
