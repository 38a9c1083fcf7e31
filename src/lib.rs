//! projtree - write a filtered directory tree of a project to a markdown file

pub mod generate;
pub mod output;
pub mod patterns;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use generate::{GenerateOptions, GenerateReport, generate};
pub use output::{DEFAULT_OUTPUT_NAME, format_lines, output_path, write_tree};
pub use patterns::{load_patterns, parse_patterns};
pub use tree::{ConnectorMode, IgnoreRules, TreeLine, TreeWalker, WalkerConfig, parse_list};
