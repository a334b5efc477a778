//! Value/comment splitting for header records

use crate::error::{HeaderError, Result};

/// Value and inline comment of one keyword record.
///
/// Both keep the whitespace and quote characters exactly as they appear in
/// the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordEntry {
    pub value: String,
    pub comment: String,
}

impl KeywordEntry {
    pub fn value_trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn comment_trimmed(&self) -> &str {
        self.comment.trim()
    }

    /// Parse the value as a decimal floating point number.
    ///
    /// `.` is the only decimal separator. A FITS `D` exponent is read as `E`.
    pub fn parse_f64(&self) -> Result<f64> {
        let text = self.value_trimmed();
        let normalized = text.replace(['D', 'd'], "E");
        normalized
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| HeaderError::InvalidNumber {
                value: text.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    Value,
    Comment,
}

/// Split the text after `KEYWORD= ` into value and comment.
///
/// A `'` toggles the quoted-string flag and is kept. A `/` outside quotes is
/// dropped and moves output to the comment. An unterminated quote keeps every
/// later `/` in the value.
pub fn parse_value(remainder: &str) -> KeywordEntry {
    let mut entry = KeywordEntry::default();
    let mut state = SplitState::Value;
    let mut in_string = false;

    for c in remainder.chars() {
        if c == '\'' {
            in_string = !in_string;
        }

        if c == '/' && !in_string {
            state = SplitState::Comment;
            continue;
        }

        match state {
            SplitState::Value => entry.value.push(c),
            SplitState::Comment => entry.comment.push(c),
        }
    }

    entry
}
