use std::path::Path;

fn git(args: &[&str], cwd: &Path) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .unwrap_or_else(|e| panic!("git {:?} failed to start: {}", args, e));
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub(crate) fn configure_user(repo_dir: &Path) {
    git(&["config", "user.email", "test@example.com"], repo_dir);
    git(&["config", "user.name", "Test User"], repo_dir);
}

pub(crate) fn init_bare_repo(path: &Path) {
    std::fs::create_dir_all(path).expect("create bare repo dir");
    git(&["init", "--bare", "--initial-branch=main"], path);
}

pub(crate) fn commit_all(repo_dir: &Path, message: &str) {
    git(&["add", "."], repo_dir);
    git(&["commit", "-m", message], repo_dir);
}

/// Seed `bare` with one commit on `main` holding `files`.
pub(crate) fn seed_remote(bare: &Path, scratch: &Path, files: &[(&str, &str)]) {
    std::fs::create_dir_all(scratch).expect("create seed dir");
    git(&["init", "--initial-branch=main"], scratch);
    configure_user(scratch);
    for (name, content) in files {
        std::fs::write(scratch.join(name), content).expect("write seed file");
    }
    commit_all(scratch, "Initial commit");
    git(&["push", bare.to_str().expect("utf-8 path"), "main"], scratch);
}

/// Names of the files in the tip commit of `branch` in `bare`.
pub(crate) fn tree_files(bare: &Path, branch: &str) -> Vec<String> {
    git(&["ls-tree", "-r", "--name-only", branch], bare)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Subject lines on `branch` in `bare`, newest first.
pub(crate) fn log_subjects(bare: &Path, branch: &str) -> Vec<String> {
    git(&["log", "--format=%s", branch], bare).lines().map(str::to_string).collect()
}

/// Content of `path` at the tip of `branch` in `bare`.
pub(crate) fn show_file(bare: &Path, branch: &str, path: &str) -> String {
    git(&["show", &format!("{}:{}", branch, path)], bare)
}

/// The single branch present in `bare`.
pub(crate) fn only_branch(bare: &Path) -> String {
    let branches = git(&["for-each-ref", "--format=%(refname:short)", "refs/heads"], bare);
    let names: Vec<&str> = branches.lines().collect();
    assert_eq!(names.len(), 1, "expected exactly one branch, found {:?}", names);
    names[0].to_string()
}

/// Author name of the tip commit of `branch` in `bare`.
pub(crate) fn last_author(bare: &Path, branch: &str) -> String {
    git(&["log", "-1", "--format=%an", branch], bare)
}

/// Whether the `git lfs` extension is installed.
pub(crate) fn lfs_available() -> bool {
    std::process::Command::new("git")
        .args(["lfs", "version"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Publishing needs git-lfs; returns true (and logs) when the caller should skip.
pub(crate) fn skip_without_lfs() -> bool {
    if lfs_available() {
        return false;
    }
    eprintln!("git-lfs is not installed; skipping");
    true
}
