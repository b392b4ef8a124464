//! # Logging and Diagnostics
//!
//! Tracing setup for the `mrz` binary and the diagnostics sink for codec
//! errors. The codec returns structured errors; this module turns them
//! into structured events.
//!
//! Verbosity follows the usual ladder: no flag is `warn`, `-v` is `info`,
//! `-vv` is `debug`, anything more is `trace`.
//!
//! When an error log path is configured, error-level events are also
//! appended to that file without ANSI colouring.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use mrz_core::{DecodeError, EncodeError};

/// Build the console filter for a verbosity count.
pub fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the error log cannot be opened for appending or a global
/// subscriber is already installed.
pub fn init(verbose: u8, error_log: Option<&Path>) -> Result<()> {
    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter_for(verbose));

    let file = match error_log {
        Some(path) => {
            let handle = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open error log: {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(handle))
                    .with_filter(LevelFilter::ERROR),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}

/// Report a decode failure to the diagnostics sink.
pub fn report_decode_error(err: &DecodeError) {
    match err {
        DecodeError::MissingData => tracing::error!("MRZ data is missing"),
        DecodeError::MalformedLine { line, reason } => {
            tracing::error!(line, %reason, "invalid MRZ data format");
        }
        DecodeError::ChecksumMismatch(m) => {
            tracing::error!(
                field = %m.field,
                line = m.line,
                expected = %m.expected,
                actual = %m.actual,
                "check digit mismatch"
            );
        }
    }
}

/// Report an encode failure to the diagnostics sink.
pub fn report_encode_error(err: &EncodeError) {
    match err {
        EncodeError::MissingField(field) => {
            tracing::error!(field = %field, "required field missing from mapping");
        }
    }
}
