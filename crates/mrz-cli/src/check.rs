//! # Check-Digit Subcommand
//!
//! Prints the check digit of a value. With `--expect`, verifies it instead
//! and exits 1 on mismatch.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use mrz_core::{compute_check_digit, validate_check_digit};

/// Arguments for the `mrz check-digit` subcommand.
#[derive(Args, Debug)]
pub struct CheckDigitArgs {
    /// Characters to compute the digit over. Non-digits are ignored.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Digit the value is expected to have.
    #[arg(long)]
    pub expect: Option<char>,
}

/// Execute the check-digit subcommand.
pub fn run_check_digit(args: &CheckDigitArgs, out: &mut impl Write) -> Result<u8> {
    let digit = compute_check_digit(&args.value);
    match args.expect {
        None => {
            writeln!(out, "{digit}")?;
            Ok(crate::EXIT_OK)
        }
        Some(expected) if validate_check_digit(&args.value, expected) => {
            writeln!(out, "OK: {digit}")?;
            Ok(crate::EXIT_OK)
        }
        Some(expected) => {
            tracing::error!(expected = %digit, actual = %expected, "check digit mismatch");
            writeln!(out, "MISMATCH: expected {digit}, got {expected}")?;
            Ok(crate::EXIT_MISMATCH)
        }
    }
}
