// src/formatting/text.rs
//! Plain-text presentation for terminals and pipes.

use super::display::{DisplayModel, DisplayRow, ResultsBody};
use super::Presenter;
use crate::error::AppError;
use crate::types::RenderedReport;

const COLUMN_HEADERS: [&str; 4] = ["Name", "Modified", "Modified by", "Path"];

/// Presents scan results as a tab-separated table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn present(&self, model: &DisplayModel) -> Result<RenderedReport, AppError> {
        let mut out = String::new();

        out.push_str(&format!(
            "[{}] {}\n",
            model.status.level,
            flatten_cell(&model.status.message)
        ));
        if let Some(summary) = &model.summary {
            out.push_str(&flatten_cell(summary));
            out.push('\n');
        }
        out.push('\n');

        match &model.body {
            ResultsBody::Empty => out.push_str("No items found.\n"),
            ResultsBody::Table(rows) => {
                out.push_str(&COLUMN_HEADERS.join("\t"));
                out.push('\n');
                for row in rows {
                    out.push_str(&format_row(row));
                    out.push('\n');
                }
            }
            ResultsBody::Failure(message) => {
                out.push_str(&format!("Error: {}\n", message));
            }
        }

        Ok(RenderedReport::new(out))
    }
}

fn format_row(row: &DisplayRow) -> String {
    [&row.name, &row.modified, &row.editor, &row.path]
        .iter()
        .map(|cell| flatten_cell(cell))
        .collect::<Vec<_>>()
        .join("\t")
}

/// Tabs and line breaks inside a value would break the line layout.
fn flatten_cell(cell: &str) -> String {
    cell.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
