//! # Decode and Scan Subcommands
//!
//! `mrz decode LINE1 LINE2` decodes a pair given as arguments.
//! `mrz scan` obtains the pair from a [`ScanSource`] first.
//!
//! On success the record is printed as pretty JSON. On failure the error
//! goes to the diagnostics sink and the exit code reflects its class.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use mrz_core::{decode, MrzLines};

use crate::logging::report_decode_error;
use crate::scanner::ScanSource;

/// Arguments for the `mrz decode` subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// First MRZ line (44 characters).
    #[arg(value_name = "LINE1", allow_hyphen_values = true)]
    pub line1: String,

    /// Second MRZ line (44 characters).
    #[arg(value_name = "LINE2", allow_hyphen_values = true)]
    pub line2: String,
}

/// Arguments for the `mrz scan` subcommand.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Read the line pair from stdin instead of the simulated scanner.
    #[arg(long)]
    pub stdin: bool,
}

/// Execute the decode subcommand.
pub fn run_decode(args: &DecodeArgs, out: &mut impl Write) -> Result<u8> {
    decode_and_print(&MrzLines::new(&args.line1, &args.line2), out)
}

/// Execute the scan subcommand against `source`.
pub fn run_scan(source: &mut dyn ScanSource, out: &mut impl Write) -> Result<u8> {
    let lines = source.scan().context("scan failed")?;
    tracing::info!(line1 = %lines.line1, line2 = %lines.line2, "scanned MRZ");
    decode_and_print(&lines, out)
}

fn decode_and_print(lines: &MrzLines, out: &mut impl Write) -> Result<u8> {
    match decode(&lines.line1, &lines.line2) {
        Ok(record) => {
            tracing::debug!(passport_number = %record.passport_number, "decoded MRZ");
            let json = serde_json::to_string_pretty(&record).context("failed to serialize record")?;
            writeln!(out, "{json}")?;
            Ok(crate::EXIT_OK)
        }
        Err(e) => {
            report_decode_error(&e);
            writeln!(out, "Error: {e}")?;
            Ok(crate::exit_code_for(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::SimulatedScanner;

    fn args(line1: &str, line2: &str) -> DecodeArgs {
        DecodeArgs {
            line1: line1.to_string(),
            line2: line2.to_string(),
        }
    }

    #[test]
    fn decode_prints_record_json() {
        let mut out = Vec::new();
        let code = run_decode(
            &args(
                "P<TJKCOMBS<<ADDISON<JANE<<<<<<<<<<<<<<<<<<<<",
                "V855996J77TJK7209168M0905071MI797251T<<<<<4<",
            ),
            &mut out,
        )
        .unwrap();
        assert_eq!(code, crate::EXIT_OK);

        let record: mrz_core::MrzRecord = serde_json::from_slice(&out).unwrap();
        assert_eq!(record.name, "COMBS ADDISON JANE");
    }

    #[test]
    fn checksum_failure_exits_one() {
        let mut out = Vec::new();
        let code = run_decode(
            &args(
                "P<TJKCOMBS<<ADDISON<JANE<<<<<<<<<<<<<<<<<<<<",
                "V855996J79TJK7209167M0905071MI797251T<<<<<<7",
            ),
            &mut out,
        )
        .unwrap();
        assert_eq!(code, crate::EXIT_MISMATCH);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("passport number"));
    }

    #[test]
    fn short_line_exits_two() {
        let mut out = Vec::new();
        let code = run_decode(&args("P<TJK", "V855996J7"), &mut out).unwrap();
        assert_eq!(code, crate::EXIT_INVALID);
    }

    #[test]
    fn scan_uses_source() {
        let mut out = Vec::new();
        let code = run_scan(&mut SimulatedScanner::new(), &mut out).unwrap();
        assert_eq!(code, crate::EXIT_OK);
        assert!(String::from_utf8(out).unwrap().contains("L898902C3"));
    }
}
