//! `.gitattributes` rules for large-file storage.

pub const GITATTRIBUTES: &str = ".gitattributes";

/// Extension pattern of exported agent models.
pub const MODEL_PATTERN: &str = "*.onnx";

/// Files at or above this size are tracked even without a matching pattern.
pub const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

const LFS_ATTRIBUTES: &str = "filter=lfs diff=lfs merge=lfs -text";

pub fn lfs_rule(pattern: &str) -> String {
    format!("{} {}", pattern, LFS_ATTRIBUTES)
}

/// Patterns in `attributes` that are routed through the lfs filter.
pub fn tracked_patterns(attributes: &str) -> Vec<String> {
    attributes
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let pattern = fields.next()?;
            fields.any(|attr| attr == "filter=lfs").then(|| pattern.to_string())
        })
        .collect()
}

/// Append rules for `patterns` not yet tracked.
///
/// Returns the updated text and the patterns that were added. The text is
/// unchanged when every pattern is already tracked.
pub fn add_patterns(attributes: &str, patterns: &[&str]) -> (String, Vec<String>) {
    let mut tracked = tracked_patterns(attributes);
    let mut updated = attributes.to_string();
    let mut added = Vec::new();

    for pattern in patterns {
        if tracked.iter().any(|existing| existing == pattern) {
            continue;
        }
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(&lfs_rule(pattern));
        updated.push('\n');
        tracked.push(pattern.to_string());
        added.push(pattern.to_string());
    }

    (updated, added)
}

/// Whether `relative_path` is already covered by an exact-path or `*.ext` rule.
pub fn is_covered(tracked: &[String], relative_path: &str) -> bool {
    tracked.iter().any(|pattern| {
        if pattern == relative_path {
            return true;
        }
        match pattern.strip_prefix("*.") {
            Some(ext) if !ext.contains(['/', '*']) => {
                relative_path.rsplit('/').next().is_some_and(|name| {
                    name.len() > ext.len() + 1 && name.ends_with(&format!(".{}", ext))
                })
            }
            _ => false,
        }
    })
}
