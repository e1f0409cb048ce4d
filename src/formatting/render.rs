// src/formatting/render.rs
//! Pure transformation from scan results into a [`DisplayModel`].

use super::display::{DisplayModel, DisplayRow, ResultsBody, StatusLevel, StatusLine};
use crate::constants::MODIFIED_TIME_FORMAT;
use crate::error::AppError;
use crate::model::{LibraryItem, ModifiedTime};

/// Which clock modification times are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeDisplay {
    /// The machine's local timezone
    #[default]
    Local,
    Utc,
}

impl TimeDisplay {
    pub fn format(self, time: &ModifiedTime) -> String {
        match self {
            TimeDisplay::Local => time.format_local(MODIFIED_TIME_FORMAT),
            TimeDisplay::Utc => time.format_utc(MODIFIED_TIME_FORMAT),
        }
    }
}

/// Builds the display model for a successful scan.
pub fn render_results(
    items: &[LibraryItem],
    library_title: &str,
    clock: TimeDisplay,
) -> DisplayModel {
    let count = items.len();
    let summary = format!("{} | count: {}", library_title, count);

    let body = if items.is_empty() {
        ResultsBody::Empty
    } else {
        ResultsBody::Table(items.iter().map(|item| display_row(item, clock)).collect())
    };

    DisplayModel {
        status: StatusLine {
            level: StatusLevel::Info,
            message: format!("Found {} items in library \"{}\".", count, library_title),
        },
        summary: Some(summary),
        body,
    }
}

/// Builds the display model for a failed scan. Prior results are dropped.
pub fn render_failure(error: &AppError) -> DisplayModel {
    DisplayModel {
        status: StatusLine {
            level: StatusLevel::Error,
            message: "Scan failed. See the log for details.".to_string(),
        },
        summary: None,
        body: ResultsBody::Failure(error.to_string()),
    }
}

fn display_row(item: &LibraryItem, clock: TimeDisplay) -> DisplayRow {
    DisplayRow {
        name: item.display_name().to_string(),
        modified: item
            .modified_at
            .as_ref()
            .map(|t| clock.format(t))
            .unwrap_or_default(),
        editor: item.editor_name.clone(),
        path: item.path.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_item() -> LibraryItem {
        LibraryItem {
            name: Some("a.pdf".to_string()),
            title: None,
            path: "/sites/A/B/Docs/a.pdf".to_string(),
            modified_at: Some(ModifiedTime::parse("2024-01-01T00:00:00Z")),
            editor_name: "Alice".to_string(),
        }
    }

    #[test]
    fn test_renders_table_rows() {
        let model = render_results(&[sample_item()], "Docs", TimeDisplay::Utc);

        assert_eq!(model.status.level, StatusLevel::Info);
        let summary = model.summary.as_deref().unwrap();
        assert_eq!(summary, "Docs | count: 1");
        assert_eq!(
            model.rows(),
            &[DisplayRow {
                name: "a.pdf".to_string(),
                modified: "2024-01-01 00:00:00".to_string(),
                editor: "Alice".to_string(),
                path: "/sites/A/B/Docs/a.pdf".to_string(),
            }]
        );
    }

    #[test]
    fn test_local_clock_keeps_calendar_shape() {
        let model = render_results(&[sample_item()], "Docs", TimeDisplay::Local);
        let modified = &model.rows()[0].modified;
        // 2023-12-31 or 2024-01-01 depending on the machine's offset
        assert_eq!(modified.len(), "2024-01-01 00:00:00".len());
        assert!(modified.starts_with("2024-01-01") || modified.starts_with("2023-12-31"));
    }

    #[test]
    fn test_empty_library() {
        let model = render_results(&[], "Docs", TimeDisplay::Utc);
        assert_eq!(model.body, ResultsBody::Empty);
        assert!(model.rows().is_empty());
        assert_eq!(model.summary.as_deref(), Some("Docs | count: 0"));
    }

    #[test]
    fn test_missing_modified_time_is_blank() {
        let mut item = sample_item();
        item.modified_at = None;
        let model = render_results(&[item], "Docs", TimeDisplay::Utc);
        assert_eq!(model.rows()[0].modified, "");
    }

    #[test]
    fn test_failure_model() {
        let err = AppError::http(404, "https://host/x", "Not Found");
        let model = render_failure(&err);

        assert_eq!(model.status.level, StatusLevel::Error);
        assert!(model.summary.is_none());
        assert!(model.is_failure());
        assert_eq!(
            model.body,
            ResultsBody::Failure("HTTP 404 from https://host/x\nNot Found".to_string())
        );
    }
}
