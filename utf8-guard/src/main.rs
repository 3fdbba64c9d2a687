// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stderr: fatal errors are reported on stderr before exiting.
// - exit: `std::process::exit()` carries the pass/fail status to the shell.
#![allow(clippy::print_stderr, clippy::exit)]

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use utf8_guard::{FsSourceConfig, default_scan_root, output, validate_fs};

/// Exit status when at least one file is not valid UTF-8.
const EXIT_VIOLATIONS: i32 = 1;
/// Exit status when the scan could not complete.
const EXIT_FAULT: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

/// Fail when source, markup or config files are not valid UTF-8.
#[derive(Parser, Debug)]
#[command(
    name = "utf8-guard",
    version,
    about,
    after_help = "Exit status:\n  0 all checked files are valid UTF-8\n  1 invalid UTF-8 found\n  2 the scan could not complete (unreadable path, bad root or glob)"
)]
struct Cli {
    /// Directory to scan [default: parent of the directory holding this executable]
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Skip files matching this glob (relative path or file name); repeatable
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Follow symbolic links (dangling links then abort the scan)
    #[arg(long)]
    follow_links: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug); `RUST_LOG` wins
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_VIOLATIONS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(EXIT_FAULT);
        }
    }
}

/// Run the scan and print the report. Returns whether all files passed.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let root = cli
        .root
        .map_or_else(default_scan_root, Ok)
        .context("cannot determine default scan root")?;

    let mut config = FsSourceConfig::for_root(root);
    config.exclude = cli.exclude;
    config.follow_links = cli.follow_links;

    let report = validate_fs(&config)
        .with_context(|| format!("scan of {} aborted", config.root.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Human => output::write_human(&report, &mut out)?,
        OutputFormat::Json => output::write_json(&report, &mut out)?,
    }
    out.flush()?;

    Ok(report.ok)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
