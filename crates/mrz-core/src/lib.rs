//! # mrz-core: Two-Line Passport MRZ Codec
//!
//! This crate is the codec at the centre of the workspace. It turns the two
//! 44-character lines of a passport machine-readable zone into an
//! [`MrzRecord`] and back again.
//!
//! ## Key Design Principles
//!
//! 1. **One layout table.** Every offset and width lives in [`layout`]. The
//!    decoder and the encoder read the same slots, so the two directions
//!    cannot drift apart.
//!
//! 2. **Table-driven check digits.** [`checksum`] reduces a field through a
//!    fixed 10×10 transition table. Non-digit characters (including filler)
//!    are skipped, so padding never changes a digit.
//!
//! 3. **Pure functions.** [`decode()`] and [`encode()`] take their inputs as
//!    arguments and return values. There is no scanner state, no storage and
//!    no logging in this crate; callers decide what to do with a
//!    [`DecodeError`].
//!
//! 4. **Explicit lossy step.** The only transformation that does not
//!    round-trip byte-for-byte is the name field. It lives in [`name`] so it
//!    can be tested on its own.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mrz-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public record types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod checksum;
pub mod decode;
pub mod encode;
pub mod error;
pub mod layout;
pub mod name;
pub mod record;

// Re-export primary types for ergonomic imports.
pub use checksum::{compute_check_digit, validate_check_digit, CheckedField};
pub use decode::decode;
pub use encode::{encode, encode_record, EncodePolicy};
pub use error::{ChecksumMismatch, DecodeError, EncodeError, Malformation, MrzError};
pub use layout::{FILLER, LINE_LEN};
pub use record::{Field, MrzFields, MrzLines, MrzRecord};
