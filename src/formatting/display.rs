//! The display state of one scan, as a plain value.
//!
//! Text in here is unescaped domain text. Presenters are responsible for
//! escaping it for whatever medium they write to.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Info,
    Error,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLevel::Info => write!(f, "info"),
            StatusLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub level: StatusLevel,
    pub message: String,
}

/// One table row: name, modified, modified by, path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub name: String,
    pub modified: String,
    pub editor: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsBody {
    /// The library was read and holds no items
    Empty,
    Table(Vec<DisplayRow>),
    /// The scan failed; carries the raw error message
    Failure(String),
}

/// Everything a presenter needs to show the outcome of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    pub status: StatusLine,
    pub summary: Option<String>,
    pub body: ResultsBody,
}

impl DisplayModel {
    pub fn is_failure(&self) -> bool {
        matches!(self.body, ResultsBody::Failure(_))
    }

    pub fn rows(&self) -> &[DisplayRow] {
        match &self.body {
            ResultsBody::Table(rows) => rows,
            ResultsBody::Empty | ResultsBody::Failure(_) => &[],
        }
    }
}
