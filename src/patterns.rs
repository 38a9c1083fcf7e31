//! Loading of `.gitignore`-style pattern files

use std::fs;
use std::path::Path;

/// Name of the pattern file looked up at the root of the scanned tree.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Read glob patterns from a pattern file.
///
/// A missing or unreadable file yields no patterns. Invalid UTF-8 is
/// replaced rather than rejected, so one bad byte only affects its own line.
/// Lines are trimmed; blank lines and `#` comments are skipped. File order is
/// kept and duplicates are not removed.
pub fn load_patterns(path: &Path) -> Vec<String> {
    match fs::read(path) {
        Ok(bytes) => {
            let patterns = parse_patterns(&String::from_utf8_lossy(&bytes));
            log::debug!(
                "loaded {} ignore patterns from {}",
                patterns.len(),
                path.display()
            );
            patterns
        }
        Err(e) => {
            log::debug!("no ignore patterns from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Extract patterns from the content of a pattern file.
pub fn parse_patterns(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
