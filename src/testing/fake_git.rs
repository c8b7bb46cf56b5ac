use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use url::Url;

use crate::domain::AppError;
use crate::ports::Git;

/// In-memory git double bound to a real working copy directory.
///
/// `clone_from` only creates the directory; file content is left to the
/// code under test.
pub struct FakeGit {
    root: PathBuf,
    pub calls: Mutex<Vec<String>>,
    pub cloned_from: Mutex<Option<Url>>,
    pub config: Mutex<BTreeMap<String, String>>,
    pub commit_messages: Mutex<Vec<String>>,
    repository: Mutex<bool>,
    remote: Mutex<Option<String>>,
    remote_has_branches: bool,
    dirty: bool,
    lfs_missing: bool,
}

impl FakeGit {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            calls: Mutex::new(Vec::new()),
            cloned_from: Mutex::new(None),
            config: Mutex::new(BTreeMap::new()),
            commit_messages: Mutex::new(Vec::new()),
            repository: Mutex::new(false),
            remote: Mutex::new(None),
            remote_has_branches: true,
            dirty: true,
            lfs_missing: false,
        }
    }

    /// Treat the root as an existing clone of `remote`.
    pub fn with_repository(self, remote: &str) -> Self {
        *self.repository.lock().unwrap() = true;
        *self.remote.lock().unwrap() = Some(remote.to_string());
        self
    }

    pub fn with_empty_remote(mut self) -> Self {
        self.remote_has_branches = false;
        self
    }

    /// Report no changes after staging.
    pub fn with_clean_tree(mut self) -> Self {
        self.dirty = false;
        self
    }

    /// Fail `install_lfs` as on a machine without git-lfs.
    pub fn without_lfs(mut self) -> Self {
        self.lfs_missing = true;
        self
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

impl Git for FakeGit {
    fn root(&self) -> &Path {
        &self.root
    }

    fn is_repository(&self) -> bool {
        *self.repository.lock().unwrap()
    }

    fn clone_from(&self, url: &Url) -> Result<(), AppError> {
        self.record("clone");
        fs::create_dir_all(&self.root)?;
        *self.cloned_from.lock().unwrap() = Some(url.clone());
        *self.remote.lock().unwrap() = Some(url.to_string());
        *self.repository.lock().unwrap() = true;
        Ok(())
    }

    fn remote_url(&self) -> Result<String, AppError> {
        self.remote
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::git("git2::Repository::find_remote", "remote 'origin' does not exist"))
    }

    fn install_lfs(&self) -> Result<(), AppError> {
        self.record("lfs-install");
        if self.lfs_missing {
            return Err(AppError::LfsUnavailable("git: 'lfs' is not a git command".into()));
        }
        Ok(())
    }

    fn set_config(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.config.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remote_has_branches(&self) -> Result<bool, AppError> {
        self.record("ls-remote");
        Ok(self.remote_has_branches)
    }

    fn pull_rebase(&self) -> Result<(), AppError> {
        self.record("pull");
        Ok(())
    }

    fn add_all(&self) -> Result<(), AppError> {
        self.record("add");
        Ok(())
    }

    fn has_staged_changes(&self) -> Result<bool, AppError> {
        Ok(self.dirty)
    }

    fn commit(&self, message: &str) -> Result<String, AppError> {
        self.record("commit");
        self.commit_messages.lock().unwrap().push(message.to_string());
        Ok("abc123".to_string())
    }

    fn push(&self) -> Result<(), AppError> {
        self.record("push");
        Ok(())
    }
}
