use chrono::{DateTime, FixedOffset, Local, Utc};

/// An item's modification timestamp.
///
/// The raw string is kept alongside the parsed value so that a timestamp in
/// an unexpected format can still be shown instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifiedTime {
    raw: String,
    parsed: Option<DateTime<FixedOffset>>,
}

impl ModifiedTime {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = DateTime::parse_from_rfc3339(raw.trim()).ok();
        Self { raw, parsed }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn parsed(&self) -> Option<DateTime<FixedOffset>> {
        self.parsed
    }

    /// Formats in UTC, or returns the raw string if it did not parse.
    pub fn format_utc(&self, fmt: &str) -> String {
        match self.parsed {
            Some(dt) => dt.with_timezone(&Utc).format(fmt).to_string(),
            None => self.raw.clone(),
        }
    }

    /// Formats in the machine's local timezone, or returns the raw string.
    pub fn format_local(&self, fmt: &str) -> String {
        match self.parsed {
            Some(dt) => dt.with_timezone(&Local).format(fmt).to_string(),
            None => self.raw.clone(),
        }
    }
}
