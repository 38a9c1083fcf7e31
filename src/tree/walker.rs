//! TreeWalker - builds the rendered tree lines for a directory

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::config::{ConnectorMode, WalkerConfig};
use super::line::{Connector, TreeLine};
use super::utils::{child_prefix, resolve_root_name};

/// A directory child as listed from disk, before filtering.
#[derive(Debug)]
struct Child {
    name: OsString,
    path: PathBuf,
    is_dir: bool,
}

/// Depth-first tree walker.
///
/// Read failures never abort the walk: an unreadable directory lists no
/// children and unreadable metadata makes the entry a file.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and return its lines, starting with the root line.
    ///
    /// `cwd` names the root when `root` resolves to the current directory.
    /// Returns `None` if `root` does not exist.
    pub fn walk(&self, root: &Path, cwd: &Path) -> Option<Vec<TreeLine>> {
        if !root.exists() {
            return None;
        }

        let mut lines = vec![TreeLine::root(resolve_root_name(root, cwd))];
        let mut ancestors = Vec::new();
        if let Ok(canonical) = root.canonicalize() {
            ancestors.push(canonical);
        }
        self.walk_dir(root, "", 0, &mut ancestors, &mut lines);
        Some(lines)
    }

    fn walk_dir(
        &self,
        path: &Path,
        prefix: &str,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
        lines: &mut Vec<TreeLine>,
    ) {
        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return;
        }

        let children = read_children(path);
        let raw_len = children.len();
        let visible: Vec<(usize, &Child)> = children
            .iter()
            .enumerate()
            .filter(|(_, child)| !self.config.rules.should_ignore(&child.path))
            .collect();
        let visible_len = visible.len();

        for (position, (raw_index, child)) in visible.into_iter().enumerate() {
            let is_last = match self.config.connector_mode {
                ConnectorMode::Filtered => position + 1 == visible_len,
                ConnectorMode::Legacy => raw_index + 1 == raw_len,
            };

            let connector = Connector::for_last(is_last);
            lines.push(TreeLine::entry(
                prefix,
                connector,
                child.name.to_string_lossy(),
                child.is_dir,
            ));

            if child.is_dir {
                let prefix = child_prefix(prefix, connector.is_last());
                self.descend(&child.path, &prefix, depth + 1, ancestors, lines);
            }
        }
    }

    /// Recurse into a subdirectory unless it is one of its own ancestors.
    fn descend(
        &self,
        path: &Path,
        prefix: &str,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
        lines: &mut Vec<TreeLine>,
    ) {
        let canonical = match path.canonicalize() {
            Ok(c) => Some(c),
            Err(e) => {
                log::debug!("cannot canonicalize {}: {}", path.display(), e);
                None
            }
        };

        if let Some(ref c) = canonical {
            if ancestors.contains(c) {
                log::info!(
                    "not descending into {}: it links back to {}",
                    path.display(),
                    c.display()
                );
                return;
            }
            ancestors.push(c.clone());
        }

        self.walk_dir(path, prefix, depth, ancestors, lines);

        if canonical.is_some() {
            ancestors.pop();
        }
    }
}

/// List the children of a directory: subdirectories first, then files, each
/// group sorted by name.
fn read_children(path: &Path) -> Vec<Child> {
    let entries = match fs::read_dir(path) {
        Ok(e) => e,
        Err(e) => {
            log::info!("cannot read directory {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let (mut dirs, mut files): (Vec<Child>, Vec<Child>) = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::info!("skipping unreadable entry in {}: {}", path.display(), e);
                None
            }
        })
        .map(|entry| {
            let path = entry.path();
            let is_dir = match fs::metadata(&path) {
                Ok(meta) => meta.is_dir(),
                Err(e) => {
                    log::info!("cannot read metadata of {}: {}", path.display(), e);
                    false
                }
            };
            Child {
                name: entry.file_name(),
                path,
                is_dir,
            }
        })
        .partition(|child| child.is_dir);

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));
    dirs.extend(files);
    dirs
}
