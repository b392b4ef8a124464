//! # mrz CLI entry point
//!
//! Parses command-line arguments, resolves configuration, installs the
//! tracing subscriber, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mrz_cli::check::{run_check_digit, CheckDigitArgs};
use mrz_cli::config::CliConfig;
use mrz_cli::decode::{run_decode, run_scan, DecodeArgs, ScanArgs};
use mrz_cli::encode::{run_encode, EncodeArgs};
use mrz_cli::records::{run_lookup, run_store, LookupArgs, StoreArgs};
use mrz_cli::scanner::{ReaderScanner, SimulatedScanner};
use mrz_cli::store::JsonFileStore;

/// Two-line passport MRZ codec.
///
/// Decodes and validates machine-readable zones, encodes field mappings,
/// and keeps decoded records in a JSON record store.
#[derive(Parser, Debug)]
#[command(name = "mrz", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Append error-level events to this file (overrides MRZ_ERROR_LOG).
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode and validate a line pair.
    Decode(DecodeArgs),

    /// Scan a line pair and decode it.
    Scan(ScanArgs),

    /// Encode a JSON field mapping into a line pair.
    Encode(EncodeArgs),

    /// Compute or verify a check digit.
    CheckDigit(CheckDigitArgs),

    /// Decode a line pair and save the record.
    Store(StoreArgs),

    /// Look up a saved record and print its line pair.
    Lookup(LookupArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(mrz_cli::EXIT_INVALID);
        }
    };

    let error_log = cli.log_file.clone().or_else(|| config.error_log.clone());
    if let Err(e) = mrz_cli::logging::init(cli.verbose, error_log.as_deref()) {
        eprintln!("Error: {e:#}");
        return ExitCode::from(mrz_cli::EXIT_INVALID);
    }

    tracing::debug!(?config, "mrz CLI starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Decode(args) => run_decode(&args, &mut out),
        Commands::Scan(args) => {
            if args.stdin {
                let mut scanner = ReaderScanner::new(std::io::stdin().lock());
                run_scan(&mut scanner, &mut out)
            } else {
                run_scan(&mut SimulatedScanner::new(), &mut out)
            }
        }
        Commands::Encode(args) => run_encode(
            &args,
            config.encode_policy,
            &mut std::io::stdin().lock(),
            &mut out,
        ),
        Commands::CheckDigit(args) => run_check_digit(&args, &mut out),
        Commands::Store(args) => {
            let path = args.db.clone().unwrap_or_else(|| config.db_path.clone());
            run_store(&args, &mut JsonFileStore::new(path), &mut out)
        }
        Commands::Lookup(args) => {
            let path = args.db.clone().unwrap_or_else(|| config.db_path.clone());
            run_lookup(&args, config.encode_policy, &JsonFileStore::new(path), &mut out)
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
