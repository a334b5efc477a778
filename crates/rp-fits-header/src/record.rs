//! Fixed-width header records

use crate::{RECORD_SIZE, VALUE_OFFSET};

const END_MARKER: &[u8] = b"END ";

/// One 80-character header record
///
/// Always exactly [`RECORD_SIZE`] ASCII characters. Records sliced from a
/// truncated stream are right-padded with spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderRecord(String);

impl HeaderRecord {
    /// Decode a record from raw header bytes.
    ///
    /// Each byte is one character. Bytes outside the ASCII range are
    /// replaced by `?`, anything past [`RECORD_SIZE`] is ignored.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut text: String = bytes
            .iter()
            .take(RECORD_SIZE)
            .map(|&b| if b.is_ascii() { char::from(b) } else { '?' })
            .collect();
        while text.len() < RECORD_SIZE {
            text.push(' ');
        }
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the `END` record that terminates the header
    pub fn is_end(&self) -> bool {
        self.0
            .as_bytes()
            .get(..END_MARKER.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(END_MARKER))
    }

    /// Whether the record starts with `prefix`, ignoring ASCII case
    pub fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        self.0
            .as_bytes()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
    }

    /// Everything after the `KEYWORD= ` indicator
    pub fn value_field(&self) -> &str {
        &self.0[VALUE_OFFSET..]
    }
}
