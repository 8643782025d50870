//! Raw monitor output

use chrono::{DateTime, Utc};

/// One textual snapshot captured from the monitor command
///
/// Immutable once captured. The parsers only ever see it as an ordered
/// sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSample {
    text: String,
    captured_at: DateTime<Utc>,
}

impl RawSample {
    /// Wrap monitor output captured right now
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self::captured_at(text, Utc::now())
    }

    /// Wrap monitor output captured at a known instant
    pub fn captured_at<S: Into<String>>(text: S, captured_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            captured_at,
        }
    }

    /// Lines of the output, in the order the command printed them
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// The complete output text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Instant the output was captured
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// True when the output holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
