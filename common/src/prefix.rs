//! # Vendor Prefix Keys
//!
//! Registry prefixes are colon-separated hex octets with an optional
//! `/<bits>` length suffix:
//! * `00:00:0C` is a plain 24-bit OUI.
//! * `00:1B:C5:00:00/36` is a 36-bit block, keyed by its first 13 characters.
//! * `00:55:DA:00/28` is a 28-bit block, keyed by its first 10 characters.
//!
//! Every longer block also carries the OUI it was carved out of, which is the
//! entry it displaces in the vendor table.

use thiserror::Error;

/// Length of a plain OUI prefix such as `00:00:0C`.
pub const OUI_KEY_LEN: usize = 8;
/// Key length of a `/28` block: `00:55:DA:0`.
pub const BITS_28_KEY_LEN: usize = 10;
/// Key length of a `/36` block: `00:1B:C5:00:0`.
pub const BITS_36_KEY_LEN: usize = 13;

const BITS_28_MARKER: &str = "/28";
const BITS_36_MARKER: &str = "/36";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixLength {
    /// 24 bits, the default.
    Oui,
    Bits28,
    Bits36,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrefixError {
    #[error("unrecognized prefix shape: {prefix:?}")]
    Unrecognized { prefix: String },
}

/// A registry prefix reduced to the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefixKey {
    pub key: String,
    pub length: PrefixLength,
    /// The OUI-level key this prefix overrides. Equal to `key` for plain OUIs.
    pub oui: String,
}

impl PrefixKey {
    /// Whether inserting this key removes the plain OUI entry it falls under.
    pub fn overrides_oui(&self) -> bool {
        self.length != PrefixLength::Oui
    }
}

/// Returns the first `len` characters of `s`, or all of `s` if it is shorter.
pub fn truncate(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Classifies a raw registry prefix.
///
/// Shapes are checked in a fixed order: exact OUI length first, then a `/28`
/// marker, then a `/36` marker. Casing is left untouched.
pub fn classify(prefix: &str) -> Result<PrefixKey, PrefixError> {
    let oui = truncate(prefix, OUI_KEY_LEN).to_string();

    if prefix.chars().count() == OUI_KEY_LEN {
        return Ok(PrefixKey {
            key: prefix.to_string(),
            length: PrefixLength::Oui,
            oui,
        });
    }

    if prefix.contains(BITS_28_MARKER) {
        return Ok(PrefixKey {
            key: truncate(prefix, BITS_28_KEY_LEN).to_string(),
            length: PrefixLength::Bits28,
            oui,
        });
    }

    if prefix.contains(BITS_36_MARKER) {
        return Ok(PrefixKey {
            key: truncate(prefix, BITS_36_KEY_LEN).to_string(),
            length: PrefixLength::Bits36,
            oui,
        });
    }

    Err(PrefixError::Unrecognized {
        prefix: prefix.to_string(),
    })
}
