//! Mirrors run artifacts into the working copy.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    File,
    Directory,
    /// Source was neither a file nor a directory (e.g. a dangling symlink).
    Skipped,
}

/// Copy one entry into `destination_dir`, replacing any same-named entry.
pub fn copy_entry(source: &Path, destination_dir: &Path) -> Result<CopyOutcome, AppError> {
    let Some(name) = source.file_name() else {
        tracing::warn!(path = %source.display(), "skipping entry without a file name");
        return Ok(CopyOutcome::Skipped);
    };
    let destination = destination_dir.join(name);

    let source_kind = match fs::metadata(source) {
        Ok(meta) if meta.is_dir() => CopyOutcome::Directory,
        Ok(meta) if meta.is_file() => CopyOutcome::File,
        _ => {
            tracing::warn!(path = %source.display(), "skipping entry that is neither a file nor a directory");
            return Ok(CopyOutcome::Skipped);
        }
    };

    remove_existing(&destination)?;

    match source_kind {
        CopyOutcome::Directory => copy_dir(source, &destination)?,
        _ => {
            fs::copy(source, &destination)?;
        }
    }

    tracing::debug!(from = %source.display(), to = %destination.display(), "copied artifact");
    Ok(source_kind)
}

/// Copy every top-level entry of `source_dir` into `destination_dir`.
///
/// Entries that are, or contain, `exclude` are skipped. Returns the number of
/// entries copied.
pub fn mirror_dir(
    source_dir: &Path,
    destination_dir: &Path,
    exclude: &Path,
) -> Result<usize, AppError> {
    let exclude = fs::canonicalize(exclude).unwrap_or_else(|_| exclude.to_path_buf());

    let mut entries = fs::read_dir(source_dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<PathBuf>, _>>()?;
    entries.sort();

    let mut copied = 0;
    for entry in entries {
        if let Ok(canonical) = fs::canonicalize(&entry)
            && exclude.starts_with(&canonical)
        {
            tracing::warn!(path = %entry.display(), "skipping entry that contains the working copy");
            continue;
        }

        if copy_entry(&entry, destination_dir)? != CopyOutcome::Skipped {
            copied += 1;
        }
    }

    Ok(copied)
}

fn remove_existing(path: &Path) -> Result<(), AppError> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path)?,
        Ok(_) => fs::remove_file(path)?,
        Err(_) => {}
    }
    Ok(())
}

fn copy_dir(source: &Path, destination: &Path) -> Result<(), AppError> {
    fs::create_dir_all(destination)?;

    for entry in fs::read_dir(source)? {
        let path = entry?.path();
        let target = destination.join(path.file_name().unwrap_or_default());

        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => copy_dir(&path, &target)?,
            Ok(meta) if meta.is_file() => {
                fs::copy(&path, &target)?;
            }
            _ => {
                tracing::warn!(path = %path.display(), "skipping entry that is neither a file nor a directory");
            }
        }
    }

    Ok(())
}
