//! Large-file tracking in the working copy's `.gitattributes`.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::domain::lfs::{self, GITATTRIBUTES};

/// Track `patterns` in `working_copy/.gitattributes`. Returns newly added patterns.
pub fn track(working_copy: &Path, patterns: &[&str]) -> Result<Vec<String>, AppError> {
    let path = working_copy.join(GITATTRIBUTES);
    let current = read_attributes(&path)?;

    let (updated, added) = lfs::add_patterns(&current, patterns);
    if !added.is_empty() {
        fs::write(&path, updated)?;
        tracing::info!(patterns = %added.join(", "), "tracking with git-lfs");
    }
    Ok(added)
}

/// Track every file at or above `threshold` bytes not already covered by a rule.
pub fn track_large_files(working_copy: &Path, threshold: u64) -> Result<Vec<String>, AppError> {
    let tracked = lfs::tracked_patterns(&read_attributes(&working_copy.join(GITATTRIBUTES))?);

    let mut large = Vec::new();
    collect_large_files(working_copy, working_copy, threshold, &mut large)?;
    large.sort();
    large.retain(|relative| !lfs::is_covered(&tracked, relative));

    if large.is_empty() {
        return Ok(large);
    }
    let patterns: Vec<&str> = large.iter().map(String::as_str).collect();
    track(working_copy, &patterns)
}

fn read_attributes(path: &Path) -> Result<String, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err.into()),
    }
}

fn collect_large_files(
    root: &Path,
    dir: &Path,
    threshold: u64,
    out: &mut Vec<String>,
) -> Result<(), AppError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            if path == root.join(".git") {
                continue;
            }
            collect_large_files(root, &path, threshold, out)?;
        } else if path == root.join(GITATTRIBUTES) {
            continue;
        } else if file_type.is_file() && entry.metadata()?.len() >= threshold {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            out.push(relative);
        }
    }
    Ok(())
}
