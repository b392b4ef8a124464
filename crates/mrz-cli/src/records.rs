//! # Store and Lookup Subcommands
//!
//! `mrz store LINE1 LINE2` decodes a pair and saves the record under its
//! passport number. `mrz lookup PASSPORT` fetches a saved record and
//! prints it re-encoded, so the output can be fed straight back to
//! `mrz decode`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use mrz_core::{decode, encode, EncodePolicy, MrzFields};

use crate::logging::{report_decode_error, report_encode_error};
use crate::store::RecordStore;

/// Arguments for the `mrz store` subcommand.
#[derive(Args, Debug)]
pub struct StoreArgs {
    /// First MRZ line (44 characters).
    #[arg(value_name = "LINE1", allow_hyphen_values = true)]
    pub line1: String,

    /// Second MRZ line (44 characters).
    #[arg(value_name = "LINE2", allow_hyphen_values = true)]
    pub line2: String,

    /// Record store path (overrides MRZ_DB_PATH).
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Arguments for the `mrz lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Passport number to look up.
    #[arg(value_name = "PASSPORT")]
    pub passport_number: String,

    /// Record store path (overrides MRZ_DB_PATH).
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Fail on absent fields instead of filling defaults.
    #[arg(long)]
    pub strict: bool,
}

/// Execute the store subcommand. Only records that decode cleanly are saved.
pub fn run_store(args: &StoreArgs, store: &mut dyn RecordStore, out: &mut impl Write) -> Result<u8> {
    match decode(&args.line1, &args.line2) {
        Ok(record) => {
            store.store(&record)?;
            writeln!(out, "OK: stored {}", record.passport_number)?;
            Ok(crate::EXIT_OK)
        }
        Err(e) => {
            report_decode_error(&e);
            writeln!(out, "Error: {e}")?;
            Ok(crate::exit_code_for(&e))
        }
    }
}

/// Execute the lookup subcommand.
pub fn run_lookup(
    args: &LookupArgs,
    configured: EncodePolicy,
    store: &dyn RecordStore,
    out: &mut impl Write,
) -> Result<u8> {
    let Some(record) = store.fetch(&args.passport_number)? else {
        tracing::warn!(passport_number = %args.passport_number, "no record found");
        writeln!(out, "Error: no record for passport number {}", args.passport_number)?;
        return Ok(crate::EXIT_MISMATCH);
    };

    let policy = if args.strict {
        EncodePolicy::Strict
    } else {
        configured
    };
    match encode(&MrzFields::from(record), policy) {
        Ok(lines) => {
            writeln!(out, "{lines}")?;
            Ok(crate::EXIT_OK)
        }
        Err(e) => {
            report_encode_error(&e);
            writeln!(out, "Error: {e}")?;
            Ok(crate::EXIT_INVALID)
        }
    }
}
