//! # Name Field Transform
//!
//! The name slot on line 1 separates components with filler: a double
//! filler between primary and secondary identifiers, a single filler
//! between words, and trailing filler as padding. The decoded record
//! represents all of these as single spaces.
//!
//! This is the one lossy step in an encode/decode round trip:
//! `"COMBS<<ADDISON<JANE"` encodes verbatim but decodes to
//! `"COMBS ADDISON JANE"`.

use crate::layout::{strip_trailing_filler, FILLER};

/// Convert a raw name slot into single-space-separated form.
///
/// Trailing filler is dropped, every run of filler becomes one space, and
/// runs of whitespace collapse to one space with no leading or trailing
/// space.
pub fn filler_to_spaces(field: &str) -> String {
    strip_trailing_filler(field)
        .split(|c: char| c == FILLER || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert spaces into filler for writing a field onto either line.
pub fn spaces_to_filler(value: &str) -> String {
    value.replace(' ', &FILLER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_and_single_filler_become_spaces() {
        assert_eq!(
            filler_to_spaces("COMBS<<ADDISON<JANE<<<<<<<<<<<<<<<<<<<<"),
            "COMBS ADDISON JANE"
        );
        assert_eq!(filler_to_spaces("DOE<<JOHN<QUINCY"), "DOE JOHN QUINCY");
    }

    #[test]
    fn long_runs_collapse() {
        assert_eq!(filler_to_spaces("A<<<<B"), "A B");
        assert_eq!(filler_to_spaces("A < B"), "A B");
    }

    #[test]
    fn leading_filler_is_dropped() {
        assert_eq!(filler_to_spaces("<<A<B"), "A B");
    }

    #[test]
    fn all_filler_is_empty() {
        assert_eq!(filler_to_spaces("<<<<<<<<"), "");
        assert_eq!(filler_to_spaces(""), "");
    }

    #[test]
    fn spaces_become_filler_one_for_one() {
        assert_eq!(spaces_to_filler("COMBS ADDISON JANE"), "COMBS<ADDISON<JANE");
        assert_eq!(spaces_to_filler("A  B"), "A<<B");
        assert_eq!(spaces_to_filler("COMBS<<ADDISON"), "COMBS<<ADDISON");
    }

    #[test]
    fn normalized_form_is_a_fixed_point() {
        let once = filler_to_spaces("COMBS<<ADDISON<JANE");
        let twice = filler_to_spaces(&spaces_to_filler(&once));
        assert_eq!(once, twice);
    }
}
