//! Keyword lookup over a header record sequence

use tracing::debug;

use crate::record::HeaderRecord;
use crate::value::{parse_value, KeywordEntry};
use crate::KEYWORD_WIDTH;

/// Header records in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSequence {
    records: Vec<HeaderRecord>,
}

impl HeaderSequence {
    pub fn new(records: Vec<HeaderRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[HeaderRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeaderRecord> {
        self.records.iter()
    }

    /// True when the last record read was `END`
    pub fn has_terminator(&self) -> bool {
        self.records.last().is_some_and(HeaderRecord::is_end)
    }

    pub fn index(&self) -> HeaderIndex<'_> {
        HeaderIndex::new(&self.records)
    }
}

/// Answers "value and comment for keyword K" against a record sequence.
///
/// The first matching record wins and keywords compare ignoring ASCII case.
#[derive(Debug, Clone, Copy)]
pub struct HeaderIndex<'a> {
    records: &'a [HeaderRecord],
}

impl<'a> HeaderIndex<'a> {
    pub fn new(records: &'a [HeaderRecord]) -> Self {
        Self { records }
    }

    /// Raw text after `KEYWORD= ` for the first record holding `key`.
    ///
    /// The key is padded to the 8-character keyword field and followed by
    /// `=`, so `RA` never matches `RADIUS`. Keys longer than the keyword
    /// field never match.
    pub fn find_record(&self, key: &str) -> Option<&'a str> {
        if key.len() > KEYWORD_WIDTH {
            debug!("Keyword '{}' is longer than {} characters", key, KEYWORD_WIDTH);
            return None;
        }
        let prefix = format!("{:<width$}=", key, width = KEYWORD_WIDTH);
        self.records
            .iter()
            .find(|record| record.starts_with_ignore_case(&prefix))
            .map(HeaderRecord::value_field)
    }

    /// Value and comment for `key`, split at the first unquoted `/`
    pub fn get_value(&self, key: &str) -> Option<KeywordEntry> {
        self.find_record(key).map(parse_value)
    }

    /// Trimmed values for `keys`, in the order given
    pub fn summary<'k>(&self, keys: &[&'k str]) -> Vec<(&'k str, Option<String>)> {
        keys.iter()
            .map(|&key| {
                let value = self
                    .get_value(key)
                    .map(|entry| entry.value_trimmed().to_string());
                (key, value)
            })
            .collect()
    }
}
