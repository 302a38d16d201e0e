//! procstat - inspect a single `/proc/[pid]/stat` record.
//!
//! Reads the stat file of a process (itself by default), parses it, and prints
//! every field. Handy for checking how odd process names come through: copy the
//! binary to a strange filename, run it, and compare with `cat /proc/[pid]/stat`.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

use procstat_core::{StatRecord, parse_stat, parse_stat_reader};

/// Parse and print a /proc/[pid]/stat record.
#[derive(Parser, Debug)]
#[command(name = "procstat", about = "Parse and print a /proc/[pid]/stat record", version)]
struct Args {
    /// Process to inspect. Defaults to this process.
    pid: Option<i32>,

    /// Read the record from this file instead of the proc filesystem.
    #[arg(long, value_name = "FILE", conflicts_with = "pid")]
    path: Option<PathBuf>,

    /// Path to /proc filesystem (for testing/mocking).
    #[arg(long, default_value = "/proc")]
    proc_path: PathBuf,

    /// Parse this literal record text instead of reading a file.
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["pid", "path"])]
    check: Option<String>,

    /// Output as JSON.
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Location of the stat file to read.
    fn stat_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        match self.pid {
            Some(pid) => self.proc_path.join(pid.to_string()).join("stat"),
            None => self.proc_path.join("self").join("stat"),
        }
    }
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is WARN so normal output stays clean. Use -q for errors only.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env();
    let filter = match format!("procstat={level}").parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Produces the record selected by `args`.
fn load(args: &Args) -> procstat_core::Result<StatRecord> {
    if let Some(text) = &args.check {
        debug!(len = text.len(), "parsing literal record");
        return Ok(parse_stat(text)?);
    }

    let path = args.stat_path();
    debug!(path = %path.display(), "reading stat record");
    let file = File::open(&path)?;
    parse_stat_reader(file)
}

/// Formats the record for stdout.
fn render(stat: &StatRecord, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(stat)
    } else {
        Ok(format!("{stat:#?}"))
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let stat = match load(&args) {
        Ok(stat) => stat,
        Err(e) => {
            error!("Failed to load stat record: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        pid = stat.pid,
        comm = %stat.comm_lossy(),
        state = %stat.state,
        "parsed stat record"
    );

    match render(&stat, args.json) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            error!("Failed to encode stat record: {}", e);
            std::process::exit(1);
        }
    }
}
