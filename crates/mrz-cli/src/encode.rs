//! # Encode Subcommand
//!
//! Reads a JSON field mapping and prints the two MRZ lines. Keys may be
//! snake_case (`passport_number`) or the legacy title-case form
//! (`"Passport Number"`). With no input, the empty mapping is encoded.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mrz_core::{encode, EncodePolicy, MrzFields};

use crate::logging::report_encode_error;

/// Arguments for the `mrz encode` subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// JSON field mapping; `-` reads stdin. Omit to encode defaults.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Fail on absent fields instead of filling defaults.
    #[arg(long)]
    pub strict: bool,
}

impl EncodeArgs {
    /// The policy in effect: `--strict` wins over the configured policy.
    pub fn policy(&self, configured: EncodePolicy) -> EncodePolicy {
        if self.strict {
            EncodePolicy::Strict
        } else {
            configured
        }
    }
}

/// Execute the encode subcommand.
pub fn run_encode(
    args: &EncodeArgs,
    configured: EncodePolicy,
    stdin: &mut impl Read,
    out: &mut impl Write,
) -> Result<u8> {
    let fields = read_fields(args.input.as_ref(), stdin)?;
    let policy = args.policy(configured);
    tracing::debug!(?policy, "encoding field mapping");

    match encode(&fields, policy) {
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

fn read_fields(input: Option<&PathBuf>, stdin: &mut impl Read) -> Result<MrzFields> {
    let content = match input {
        None => return Ok(MrzFields::new()),
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read field mapping from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read field mapping: {}", path.display()))?,
    };
    serde_json::from_str(&content).context("failed to parse field mapping JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_input_encodes_defaults() {
        let args = EncodeArgs {
            input: None,
            strict: false,
        };
        let mut out = Vec::new();
        let code = run_encode(&args, EncodePolicy::FillDefaults, &mut "".as_bytes(), &mut out)
            .unwrap();
        assert_eq!(code, crate::EXIT_OK);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "P<UTODOE<<JOHN<QUINCY<<<<<<<<<<<<<<<<<<<<<<<\n\
             L898902C36UTO8001016M2501014123456789<<<<<0<\n"
        );
    }

    #[test]
    fn stdin_mapping_is_read() {
        let args = EncodeArgs {
            input: Some(PathBuf::from("-")),
            strict: true,
        };
        let json = r#"{"Document Type": "P", "Issuing Country": "TJK",
            "Name": "COMBS<<ADDISON<JANE", "Passport Number": "V855996J7",
            "Nationality": "TJK", "Date of Birth": "720916", "Gender": "M",
            "Expiration Date": "090507", "Personal Number": "MI797251T"}"#;
        let mut out = Vec::new();
        let code =
            run_encode(&args, EncodePolicy::FillDefaults, &mut json.as_bytes(), &mut out).unwrap();
        assert_eq!(code, crate::EXIT_OK);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("V855996J77TJK7209168M0905071MI797251T<<<<<4<"));
    }

    #[test]
    fn strict_flag_overrides_configuration() {
        let args = EncodeArgs {
            input: Some(PathBuf::from("-")),
            strict: true,
        };
        let mut out = Vec::new();
        let code = run_encode(
            &args,
            EncodePolicy::FillDefaults,
            &mut r#"{"document_type": "P"}"#.as_bytes(),
            &mut out,
        )
        .unwrap();
        assert_eq!(code, crate::EXIT_INVALID);
        assert!(String::from_utf8(out).unwrap().contains("issuing country"));
    }

    #[test]
    fn configured_strict_policy_applies_without_flag() {
        let args = EncodeArgs {
            input: None,
            strict: false,
        };
        assert_eq!(args.policy(EncodePolicy::Strict), EncodePolicy::Strict);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let args = EncodeArgs {
            input: Some(PathBuf::from("-")),
            strict: false,
        };
        let mut out = Vec::new();
        let err = run_encode(&args, EncodePolicy::FillDefaults, &mut "{".as_bytes(), &mut out)
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse field mapping JSON"));
    }
}
