//! Publish workflow: resolve the remote repository, sync the working copy,
//! mirror the run artifacts, generate `config.json` and the model card, then
//! commit and push.
//!
//! Steps run strictly in order and the first failure aborts the rest. Nothing
//! is rolled back; re-running after fixing the cause is the recovery path.

use std::fs;

use url::Url;

use crate::app::AppContext;
use crate::app::services::{artifact_copier, card_generator, config_converter, large_files};
use crate::domain::lfs::{LARGE_FILE_THRESHOLD, MODEL_PATTERN};
use crate::domain::publish::CONFIG_JSON;
use crate::domain::{AppError, HubCredentials, PublishOutcome, PublishRequest};
use crate::ports::{Git, HubClient};

const CLONE_USER: &str = "user";

pub fn execute<H: HubClient, G: Git>(
    ctx: &AppContext<H, G>,
    request: &PublishRequest,
) -> Result<PublishOutcome, AppError> {
    let working_copy = ctx.git().root().to_path_buf();

    tracing::info!(run_id = %request.run_id, repo = %request.repo_id, "resolving repository");
    let repo_url = ctx.hub().create_repo(&request.repo_id, false)?;

    sync_working_copy(ctx, request, &repo_url)?;

    large_files::track(&working_copy, &[MODEL_PATTERN])?;

    tracing::info!(source = %request.source_dir.display(), "copying run artifacts");
    let copied = artifact_copier::mirror_dir(&request.source_dir, &working_copy, &working_copy)?;

    let config_json = working_copy.join(CONFIG_JSON);
    config_converter::convert(&working_copy.join(&request.config_file_name), &config_json)?;

    let card = card_generator::generate(&config_json, &request.repo_id)?;
    let card_write = card_generator::write_if_absent(&working_copy, &card)?;

    large_files::track_large_files(&working_copy, LARGE_FILE_THRESHOLD)?;

    tracing::info!(run_id = %request.run_id, "pushing to the hub");
    let git = ctx.git();
    git.add_all()?;
    let commit = if git.has_staged_changes()? {
        Some(git.commit(&request.commit_message)?)
    } else {
        tracing::info!("working copy unchanged, nothing to commit");
        None
    };
    git.push()?;

    tracing::info!(url = %repo_url, "model pushed");
    Ok(PublishOutcome { repo_url, commit, card: card_write, copied })
}

fn sync_working_copy<H: HubClient, G: Git>(
    ctx: &AppContext<H, G>,
    request: &PublishRequest,
    repo_url: &Url,
) -> Result<(), AppError> {
    let git = ctx.git();
    let root = git.root();
    let credentials = ctx.credentials().filter(|_| request.use_auth_token);

    if git.is_repository() {
        let found = git.remote_url()?;
        if !same_repository(&found, repo_url) {
            return Err(AppError::WorkingCopyMismatch {
                path: root.to_path_buf(),
                expected: repo_url.to_string(),
                found: strip_credentials(&found),
            });
        }
        tracing::info!(path = %root.display(), "reusing working copy");
    } else {
        if root.exists() && fs::read_dir(root)?.next().is_some() {
            return Err(AppError::WorkingCopyNotEmpty(root.to_path_buf()));
        }
        tracing::info!(path = %root.display(), "cloning repository");
        git.clone_from(&clone_url(repo_url, credentials))?;
    }
    git.install_lfs()?;

    if credentials.is_some() {
        let identity = ctx.hub().whoami()?;
        git.set_config("user.name", identity.display_name())?;
        if let Some(email) = identity.email.as_deref().filter(|e| !e.is_empty()) {
            git.set_config("user.email", email)?;
        }
    }

    if git.remote_has_branches()? {
        git.pull_rebase()?;
    } else {
        tracing::info!("remote repository is empty, skipping pull");
    }
    Ok(())
}

/// Repository URL with credentials embedded, for http(s) remotes.
fn clone_url(repo_url: &Url, credentials: Option<&HubCredentials>) -> Url {
    let Some(credentials) = credentials else {
        return repo_url.clone();
    };
    if !matches!(repo_url.scheme(), "http" | "https") {
        return repo_url.clone();
    }

    let mut url = repo_url.clone();
    if url.set_username(CLONE_USER).is_err() || url.set_password(Some(credentials.token())).is_err()
    {
        tracing::warn!(url = %repo_url, "cannot embed credentials in repository URL");
        return repo_url.clone();
    }
    url
}

fn strip_credentials(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            let _ = url.set_username("");
            let _ = url.set_password(None);
            url.to_string()
        }
        Err(_) => raw.to_string(),
    }
}

fn normalize(raw: &str) -> String {
    strip_credentials(raw).trim_end_matches('/').trim_end_matches(".git").to_string()
}

fn same_repository(remote: &str, repo_url: &Url) -> bool {
    normalize(remote) == normalize(repo_url.as_str())
}
