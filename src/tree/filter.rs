//! Exclusion rules applied to every entry during the walk

use std::collections::BTreeSet;
use std::path::{MAIN_SEPARATOR, Path};

use glob::Pattern;

/// The ignore rules consulted for each path.
///
/// Any single rule matching excludes the entry. Hidden entries (a final
/// component starting with `.`) are always excluded.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    dirs: BTreeSet<String>,
    extensions: BTreeSet<String>,
    patterns: Vec<Pattern>,
}

impl IgnoreRules {
    /// Build rules from directory names, extensions and glob patterns.
    ///
    /// Directory names and extensions are trimmed and empty entries dropped;
    /// extensions get a leading `.` if they lack one. Runs of `*` in a glob
    /// collapse to one `*`, so `**` has no recursive meaning. Glob patterns
    /// that still fail to compile are dropped and never match.
    pub fn from_lists<D, E, P>(dirs: D, extensions: E, patterns: P) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let dirs = dirs
            .into_iter()
            .map(|d| d.as_ref().trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();

        let extensions = extensions
            .into_iter()
            .filter_map(|e| normalize_extension(e.as_ref()))
            .collect();

        let patterns = patterns
            .into_iter()
            .filter_map(|p| {
                let p = p.as_ref();
                match Pattern::new(&collapse_stars(p)) {
                    Ok(pattern) => Some(pattern),
                    Err(e) => {
                        log::debug!("skipping malformed ignore pattern '{}': {}", p, e);
                        None
                    }
                }
            })
            .collect();

        Self {
            dirs,
            extensions,
            patterns,
        }
    }

    pub fn ignored_dirs(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    pub fn ignored_extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Check whether a path is excluded.
    ///
    /// Rules run in order: hidden name, ignored directory segment, extension
    /// suffix, glob pattern against the full path.
    pub fn should_ignore(&self, path: &Path) -> bool {
        let full = path.to_string_lossy();

        if is_hidden(path) {
            return true;
        }

        if full
            .split(MAIN_SEPARATOR)
            .any(|part| self.dirs.contains(part))
        {
            return true;
        }

        // Raw suffix test: a directory named `foo.log` matches `.log` too
        if self.extensions.iter().any(|ext| full.ends_with(ext.as_str())) {
            return true;
        }

        self.patterns.iter().any(|p| p.matches(&full))
    }
}

/// Parse a comma-separated CLI list, trimming each entry.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Replace every run of consecutive `*` with a single `*`.
fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c == '*' && out.ends_with('*') {
            continue;
        }
        out.push(c);
    }
    out
}

fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim();
    if ext.is_empty() {
        None
    } else if ext.starts_with('.') {
        Some(ext.to_string())
    } else {
        Some(format!(".{}", ext))
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn glob_match(pattern: &str, path: &str) -> bool {
        IgnoreRules::from_lists(NONE, NONE, [pattern]).should_ignore(Path::new(path))
    }

    #[test]
    fn test_glob_match() {
        // Basic patterns
        assert!(glob_match("*.rs", "main.rs"));
        assert!(!glob_match("*.rs", "main.py"));
        assert!(glob_match("test*", "test_foo"));
        assert!(!glob_match("test*", "foo_test"));
        assert!(glob_match("exact", "exact"));
        assert!(!glob_match("exact", "notexact"));

        // Single character wildcard
        assert!(glob_match("test?.rs", "test1.rs"));
        assert!(!glob_match("test?.rs", "test12.rs"));

        // Character classes
        assert!(glob_match("[abc].txt", "a.txt"));
        assert!(!glob_match("[abc].txt", "d.txt"));
        assert!(glob_match("[a-z].txt", "x.txt"));
        assert!(!glob_match("[a-z].txt", "X.txt"));
    }

    #[test]
    fn test_glob_star_crosses_separators() {
        assert!(glob_match("*.log", "project/logs/debug.log"));
        assert!(glob_match("*/build", "project/build"));
        assert!(!glob_match("build", "project/build"));
    }

    #[test]
    fn test_hidden_entries_are_ignored() {
        let rules = IgnoreRules::default();
        assert!(rules.should_ignore(Path::new("root/.hidden")));
        assert!(rules.should_ignore(Path::new("root/.gitignore")));
        assert!(!rules.should_ignore(Path::new("root/visible")));
        // Only the final component counts as hidden
        assert!(!rules.should_ignore(Path::new(".config/app/settings.toml")));
    }

    #[test]
    fn test_ignored_dir_matches_any_segment() {
        let rules = IgnoreRules::from_lists(["node_modules"], NONE, NONE);
        assert!(rules.should_ignore(Path::new("proj/node_modules")));
        assert!(rules.should_ignore(Path::new("proj/node_modules/pkg/index.js")));
        assert!(!rules.should_ignore(Path::new("proj/node_modules_old")));
        assert!(!rules.should_ignore(Path::new("proj/src/main.rs")));
    }

    #[test]
    fn test_ignored_dir_applies_to_files_with_that_name() {
        let rules = IgnoreRules::from_lists(["build"], NONE, NONE);
        assert!(rules.should_ignore(Path::new("proj/build")));
    }

    #[test]
    fn test_extension_normalization() {
        let rules = IgnoreRules::from_lists(NONE, ["txt", " .log ", ""], NONE);
        let exts: Vec<_> = rules.ignored_extensions().collect();
        assert_eq!(exts, vec![".log", ".txt"]);
    }

    #[test]
    fn test_extension_is_raw_suffix() {
        let rules = IgnoreRules::from_lists(NONE, ["txt"], NONE);
        assert!(rules.should_ignore(Path::new("root/notes.txt")));
        assert!(!rules.should_ignore(Path::new("root/notes.txt.bak")));
        assert!(!rules.should_ignore(Path::new("root/NOTES.TXT")));
    }

    #[test]
    fn test_extension_matches_directories() {
        let rules = IgnoreRules::from_lists(NONE, [".log"], NONE);
        assert!(rules.should_ignore(Path::new("root/foo.log")));
    }

    #[test]
    fn test_glob_matches_full_path() {
        let rules = IgnoreRules::from_lists(NONE, NONE, ["*.tmp", "root/dist"]);
        assert!(rules.should_ignore(Path::new("root/sub/cache.tmp")));
        assert!(rules.should_ignore(Path::new("root/dist")));
        assert!(!rules.should_ignore(Path::new("other/root/dist")));
    }

    #[test]
    fn test_unanchored_pattern_does_not_match_basename() {
        // Patterns match the whole path, not just the entry name
        let rules = IgnoreRules::from_lists(NONE, NONE, ["target"]);
        assert!(!rules.should_ignore(Path::new("root/target")));
    }

    #[test]
    fn test_malformed_pattern_is_dropped() {
        let rules = IgnoreRules::from_lists(NONE, NONE, ["[oops", "a[", "*.bak"]);
        assert_eq!(rules.pattern_count(), 1);
        assert!(rules.should_ignore(Path::new("root/a.bak")));
        assert!(!rules.should_ignore(Path::new("root/[oops")));
    }

    #[test]
    fn test_double_star_needs_a_directory_between() {
        let rules = IgnoreRules::from_lists(NONE, NONE, ["root/**/b.log"]);
        assert!(!rules.should_ignore(Path::new("root/b.log")));
        assert!(rules.should_ignore(Path::new("root/sub/b.log")));
        assert!(rules.should_ignore(Path::new("root/a/b/b.log")));
    }

    #[test]
    fn test_double_star_inside_segment_is_kept() {
        let rules = IgnoreRules::from_lists(NONE, NONE, ["root/build**", "*.min.**"]);
        assert_eq!(rules.pattern_count(), 2);
        assert!(rules.should_ignore(Path::new("root/build-cache")));
        assert!(rules.should_ignore(Path::new("root/app.min.js")));
        assert!(!rules.should_ignore(Path::new("root/src/main.rs")));
    }

    #[test]
    fn test_collapse_stars() {
        assert_eq!(collapse_stars("a***b**c*"), "a*b*c*");
        assert_eq!(collapse_stars("[*]?"), "[*]?");
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("target, node_modules ,,dist"), vec![
            "target",
            "node_modules",
            "dist"
        ]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_empty_dir_entries_are_dropped() {
        let rules = IgnoreRules::from_lists(["", "  "], NONE, NONE);
        assert_eq!(rules.ignored_dirs().count(), 0);
        // An empty segment from a leading separator must not match
        assert!(!rules.should_ignore(Path::new("/srv/app")));
    }
}
