//! Shared utility functions for tree walking

use std::path::{Component, Path, PathBuf};

/// Calculate the prefix for child entries
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", current_prefix)
    } else {
        format!("{}│   ", current_prefix)
    }
}

/// Name displayed on the root line of the tree.
///
/// Uses the base name of the absolute form of `source`, resolved against
/// `cwd` when relative. Falls back to the base name of `cwd` when the source
/// resolves to no name at all, and to the full path for a filesystem root.
pub fn resolve_root_name(source: &Path, cwd: &Path) -> String {
    let absolute = if source.is_absolute() {
        source.to_path_buf()
    } else {
        cwd.join(source)
    };
    let normalized = normalize_lexically(&absolute);

    if let Some(name) = normalized.file_name() {
        return name.to_string_lossy().into_owned();
    }
    if normalized.has_root() {
        return normalized.display().to_string();
    }
    cwd.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| cwd.display().to_string())
}

/// Resolve `.` and `..` components without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
