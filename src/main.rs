//! CLI entry point for projtree

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use projtree::{
    ConnectorMode, DEFAULT_OUTPUT_NAME, GenerateOptions, generate, output_path, parse_list,
};

#[derive(Parser, Debug)]
#[command(name = "projtree")]
#[command(about = "Generate project directory structure in markdown")]
#[command(
    after_help = "Patterns in <source>/.gitignore are matched as shell globs against the full \
                  path of each entry. Negation (!), ** and directory anchors are not supported."
)]
#[command(version)]
struct Args {
    /// Path to the project folder
    #[arg(short, long, default_value = "/")]
    source: PathBuf,

    /// Path to save the output markdown file (.md is appended if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    output: String,

    /// Directories to ignore, comma-separated
    #[arg(
        short = 'd',
        long = "ignore-dirs",
        visible_alias = "i-directory",
        alias = "id",
        value_name = "LIST",
        default_value = ""
    )]
    ignore_dirs: String,

    /// Extensions to ignore, comma-separated (a leading dot is added if missing)
    #[arg(
        short = 'e',
        long = "ignore-exts",
        visible_alias = "i-extension",
        alias = "ie",
        value_name = "LIST",
        default_value = ""
    )]
    ignore_exts: String,

    /// Do not read glob patterns from <source>/.gitignore
    #[arg(long = "no-ignore-file")]
    no_ignore_file: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Pick the terminal connector from the unfiltered listing, as older
    /// versions did (an excluded last entry leaves no visible `└──`)
    #[arg(long = "legacy-connectors")]
    legacy_connectors: bool,

    /// Report skipped entries and unreadable paths (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Set up stderr logging. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = GenerateOptions {
        source: args.source,
        output: output_path(&args.output),
        ignore_dirs: parse_list(&args.ignore_dirs),
        ignore_exts: parse_list(&args.ignore_exts),
        use_ignore_file: !args.no_ignore_file,
        connector_mode: if args.legacy_connectors {
            ConnectorMode::Legacy
        } else {
            ConnectorMode::Filtered
        },
        max_depth: args.level,
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Failures are reported on stdout and do not change the exit status
    match generate(&options, &cwd) {
        Ok(report) => println!("Project structure written to {}", report.output.display()),
        Err(e) => println!("Error: {:#}", e),
    }
}
