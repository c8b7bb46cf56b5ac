use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use git2::{Repository, StatusOptions, StatusShow};
use url::Url;

use crate::domain::AppError;
use crate::ports::Git;

const REMOTE: &str = "origin";
const REDACTED: &str = "[REDACTED]";

/// Git adapter for a working copy.
///
/// Local reads and commits go through libgit2; clone, pull, staging and push
/// shell out to `git` so credential helpers and lfs filters apply.
#[derive(Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
    secret: Option<String>,
}

impl std::fmt::Debug for GitCommandAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitCommandAdapter")
            .field("root", &self.root)
            .field("secret", &self.secret.as_ref().map(|_| REDACTED))
            .finish()
    }
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root, secret: None }
    }

    /// Redact `secret` from every command line and error message.
    pub fn with_secret<S: Into<String>>(mut self, secret: S) -> Self {
        let secret = secret.into();
        self.secret = (!secret.is_empty()).then_some(secret);
        self
    }

    fn redact(&self, text: &str) -> String {
        match &self.secret {
            Some(secret) => text.replace(secret.as_str(), REDACTED),
            None => text.to_string(),
        }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::open(&self.root)
            .map_err(|e| AppError::git("git2::Repository::open", e.message()))
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<String, AppError> {
        let mut command = Command::new("git");
        command.args(args);
        command.current_dir(cwd.unwrap_or(&self.root));
        command.env("GIT_TERMINAL_PROMPT", "0");

        let shown = || self.redact(&format!("git {}", args.join(" ")));

        tracing::debug!(command = %shown(), "running git");
        let output =
            command.output().map_err(|e| AppError::git(shown(), self.redact(&e.to_string())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::git(
                shown(),
                if stderr.is_empty() { "Unknown error".to_string() } else { self.redact(&stderr) },
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Git for GitCommandAdapter {
    fn root(&self) -> &Path {
        &self.root
    }

    fn is_repository(&self) -> bool {
        self.root.is_dir() && Repository::open(&self.root).is_ok()
    }

    fn clone_from(&self, url: &Url) -> Result<(), AppError> {
        let parent = match self.root.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let target = self.root.file_name().and_then(|name| name.to_str()).ok_or_else(|| {
            AppError::config_error(format!(
                "Working copy path has no valid UTF-8 directory name: {}",
                self.root.display()
            ))
        })?;
        self.run(&["clone", url.as_str(), target], Some(&parent))?;
        Ok(())
    }

    fn remote_url(&self) -> Result<String, AppError> {
        let repo = self.repo()?;
        let remote = repo
            .find_remote(REMOTE)
            .map_err(|e| AppError::git("git2::Repository::find_remote", e.message()))?;
        remote.url().map(|url| url.to_string()).ok_or_else(|| {
            AppError::git("git2::Remote::url", "Remote URL is not valid UTF-8")
        })
    }

    fn install_lfs(&self) -> Result<(), AppError> {
        match self.run(&["lfs", "install", "--local"], None) {
            Ok(_) => Ok(()),
            Err(AppError::GitError { details, .. }) => Err(AppError::LfsUnavailable(details)),
            Err(other) => Err(other),
        }
    }

    fn set_config(&self, key: &str, value: &str) -> Result<(), AppError> {
        let repo = self.repo()?;
        let mut config =
            repo.config().map_err(|e| AppError::git("git2::Repository::config", e.message()))?;
        config
            .set_str(key, value)
            .map_err(|e| AppError::git(format!("git2::Config::set_str {}", key), e.message()))
    }

    fn remote_has_branches(&self) -> Result<bool, AppError> {
        let heads = self.run(&["ls-remote", "--heads", REMOTE], None)?;
        Ok(!heads.is_empty())
    }

    fn pull_rebase(&self) -> Result<(), AppError> {
        self.run(&["pull", "--rebase", "--autostash"], None)?;
        Ok(())
    }

    fn add_all(&self) -> Result<(), AppError> {
        self.run(&["add", "-A"], None)?;
        Ok(())
    }

    fn has_staged_changes(&self) -> Result<bool, AppError> {
        let repo = self.repo()?;
        let mut options = StatusOptions::new();
        options.show(StatusShow::Index).include_untracked(false).include_ignored(false);
        let statuses = repo
            .statuses(Some(&mut options))
            .map_err(|e| AppError::git("git2::Repository::statuses", e.message()))?;
        Ok(!statuses.is_empty())
    }

    fn commit(&self, message: &str) -> Result<String, AppError> {
        let repo = self.repo()?;
        let mut index =
            repo.index().map_err(|e| AppError::git("git2::Repository::index", e.message()))?;

        let tree_id =
            index.write_tree().map_err(|e| AppError::git("git2::Index::write_tree", e.message()))?;
        let tree = repo
            .find_tree(tree_id)
            .map_err(|e| AppError::git("git2::Repository::find_tree", e.message()))?;

        let signature = repo
            .signature()
            .map_err(|e| AppError::git("git2::Repository::signature", e.message()))?;

        let parents = match repo.head() {
            Ok(head) => {
                let commit = head
                    .peel_to_commit()
                    .map_err(|e| AppError::git("git2::Reference::peel_to_commit", e.message()))?;
                vec![commit]
            }
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => vec![],
            Err(e) => return Err(AppError::git("git2::Repository::head", e.message())),
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

        let oid = repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parent_refs)
            .map_err(|e| AppError::git("git2::Repository::commit", e.message()))?;

        Ok(oid.to_string())
    }

    fn push(&self) -> Result<(), AppError> {
        self.run(&["push", "-u", REMOTE, "HEAD"], None)?;
        Ok(())
    }
}
