//! End-to-end generation: load patterns, walk the source, write the output file

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::output::{DEFAULT_OUTPUT_NAME, count_entries, output_path, write_tree};
use crate::patterns::{IGNORE_FILE_NAME, load_patterns};
use crate::tree::{ConnectorMode, IgnoreRules, TreeWalker, WalkerConfig};

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub source: PathBuf,
    pub output: PathBuf,
    pub ignore_dirs: Vec<String>,
    pub ignore_exts: Vec<String>,
    /// Read glob patterns from `<source>/.gitignore`
    pub use_ignore_file: bool,
    pub connector_mode: ConnectorMode,
    pub max_depth: Option<usize>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from("/"),
            output: output_path(DEFAULT_OUTPUT_NAME),
            ignore_dirs: Vec::new(),
            ignore_exts: Vec::new(),
            use_ignore_file: true,
            connector_mode: ConnectorMode::default(),
            max_depth: None,
        }
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub directories: usize,
    pub files: usize,
}

/// Build the ignore rules for a source directory.
pub fn build_rules(options: &GenerateOptions) -> IgnoreRules {
    let patterns = if options.use_ignore_file {
        load_patterns(&options.source.join(IGNORE_FILE_NAME))
    } else {
        Vec::new()
    };
    IgnoreRules::from_lists(&options.ignore_dirs, &options.ignore_exts, &patterns)
}

/// Fail if the source cannot be inspected, naming a missing path separately.
fn check_source(source: &Path) -> Result<()> {
    match fs::metadata(source) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("Source path {} does not exist.", source.display())
        }
        Err(e) => {
            Err(e).with_context(|| format!("cannot access source path {}", source.display()))
        }
    }
}

/// Walk `options.source` and write its tree to `options.output`.
///
/// Fails without creating the output file if the source is missing or
/// cannot be inspected.
pub fn generate(options: &GenerateOptions, cwd: &Path) -> Result<GenerateReport> {
    let source = &options.source;
    check_source(source)?;

    let rules = build_rules(options);
    log::debug!(
        "ignoring dirs {:?}, extensions {:?}, {} glob patterns",
        rules.ignored_dirs().collect::<Vec<_>>(),
        rules.ignored_extensions().collect::<Vec<_>>(),
        rules.pattern_count()
    );

    let walker = TreeWalker::new(WalkerConfig {
        rules,
        connector_mode: options.connector_mode,
        max_depth: options.max_depth,
    });

    let lines = walker
        .walk(source, cwd)
        .with_context(|| format!("Source path {} does not exist.", source.display()))?;

    write_tree(&options.output, &lines)
        .with_context(|| format!("writing to {}", options.output.display()))?;

    let (directories, files) = count_entries(&lines);
    log::info!(
        "{} directories, {} files written to {}",
        directories,
        files,
        options.output.display()
    );

    Ok(GenerateReport {
        output: options.output.clone(),
        directories,
        files,
    })
}
