//! # mrz-cli: Command-Line Front End for the MRZ Codec
//!
//! Provides the `mrz` command-line interface. The codec itself lives in
//! `mrz-core` and performs no I/O; this crate owns everything around it:
//! where raw lines come from, where records are kept, and where errors are
//! reported.
//!
//! ## Subcommands
//!
//! - `mrz decode`: Decode a line pair given on the command line.
//! - `mrz scan`: Decode a pair read from a scan source.
//! - `mrz encode`: Encode a JSON field mapping.
//! - `mrz check-digit`: Compute or verify a single check digit.
//! - `mrz store`: Decode a pair and save the record.
//! - `mrz lookup`: Fetch a saved record and print its encoded lines.
//!
//! ## Exit Codes
//!
//! - `0`: success.
//! - `1`: a check digit did not verify, or a lookup found nothing.
//! - `2`: data missing or malformed, or a required field absent.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers write their output to a caller-supplied writer and return an
//!   exit code; `main` owns the process.

pub mod check;
pub mod config;
pub mod decode;
pub mod encode;
pub mod logging;
pub mod records;
pub mod scanner;
pub mod store;

use mrz_core::DecodeError;

/// Successful run.
pub const EXIT_OK: u8 = 0;
/// Verification failed: a check digit mismatch or an unknown record.
pub const EXIT_MISMATCH: u8 = 1;
/// Input was missing or malformed.
pub const EXIT_INVALID: u8 = 2;

/// Map a decode failure onto the process exit code.
pub fn exit_code_for(err: &DecodeError) -> u8 {
    if err.is_checksum_failure() {
        EXIT_MISMATCH
    } else {
        EXIT_INVALID
    }
}
