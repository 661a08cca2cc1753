use std::path::{Path, PathBuf};

use clap::Parser as ClapParser;
use m2tsdate::{Parser, TsError};
use rayon::prelude::*;
use tracing::{debug, error};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Print the original recording date of AVCHD (.m2ts, .mts) and HDV (.m2t) files.
#[derive(Debug, ClapParser)]
#[command(version, about)]
struct Args {
    /// Input file(s).
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Number of HDV dates to skip before one is returned.
    /// The first date often belongs to the previous scene.
    #[arg(long, default_value_t = m2tsdate::consts::HDV_DEFAULT_SKIP)]
    skip: usize,

    /// Log verbosity (-v debug, -vv trace). Overridden by RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// One result line for `path`.
fn describe(path: &Path, skip: usize) -> String {
    let parser = match Parser::from_path(path) {
        Ok(p) => p.with_hdv_skip(skip),
        Err(err @ (TsError::UnsupportedExtension(_) | TsError::NoExtension(_))) => return err.to_string(),
        Err(err) => return format!("Error: {err}"),
    };

    match parser.read_file(path) {
        Ok(Some(date)) => format!("Found date time: {date}"),
        Ok(None) => "No date could be found".to_owned(),
        Err(err @ TsError::IOError(_)) => {
            error!("Failed to read {}: {err}", path.display());
            format!("Error: {err}")
        }
        Err(err) => format!("Error: {err}"),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    debug!("Processing {} file(s)", args.paths.len());

    let lines: Vec<String> = args.paths
        .par_iter()
        .map(|path| describe(path, args.skip))
        .collect();

    let prefix = args.paths.len() > 1;
    for (path, line) in args.paths.iter().zip(lines.iter()) {
        match prefix {
            true => println!("{}: {line}", path.display()),
            false => println!("{line}"),
        }
    }
}
