//! Tree formatting and file output

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::tree::TreeLine;

/// Output file base name used when none is given.
pub const DEFAULT_OUTPUT_NAME: &str = "project_structure";

const OUTPUT_EXTENSION: &str = ".md";

/// Append `.md` to an output path that does not already end with it.
pub fn output_path(raw: &str) -> PathBuf {
    if raw.ends_with(OUTPUT_EXTENSION) {
        PathBuf::from(raw)
    } else {
        PathBuf::from(format!("{}{}", raw, OUTPUT_EXTENSION))
    }
}

/// Join rendered lines with `\n`, without a trailing newline.
pub fn format_lines(lines: &[TreeLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Count directory and file rows, not counting the root.
pub fn count_entries(lines: &[TreeLine]) -> (usize, usize) {
    lines
        .iter()
        .filter(|line| !line.is_root())
        .fold((0, 0), |(dirs, files), line| {
            if line.is_dir {
                (dirs + 1, files)
            } else {
                (dirs, files + 1)
            }
        })
}

/// Create or truncate `path` and write the formatted tree to it.
pub fn write_tree(path: &Path, lines: &[TreeLine]) -> io::Result<()> {
    fs::write(path, format_lines(lines))
}
