// src/formatting/html.rs
//! Renders a [`DisplayModel`] as a standalone HTML page.
//!
//! The page mirrors the scanner's original layout: a status line, a
//! summary, and a results area holding the table, the empty-state note
//! or the error text.

use super::display::{DisplayModel, ResultsBody};
use super::escape::escape_html;
use super::Presenter;
use crate::error::AppError;
use crate::types::RenderedReport;
use handlebars::Handlebars;
use serde_json::json;

const TEMPLATE_NAME: &str = "report";
const REPORT_TEMPLATE: &str = include_str!("../../templates/report.hbs");

/// Presents scan results as HTML through the embedded Handlebars template.
pub struct HtmlPresenter {
    registry: Handlebars<'static>,
    page_title: String,
}

impl HtmlPresenter {
    pub fn new() -> Result<Self, AppError> {
        let mut registry = Handlebars::new();
        // Library content is user-controlled; every interpolation goes through this.
        registry.register_escape_fn(escape_html);
        registry
            .register_template_string(TEMPLATE_NAME, REPORT_TEMPLATE)
            .map_err(|e| AppError::TemplateRenderError {
                name: TEMPLATE_NAME.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            registry,
            page_title: "Document library scan".to_string(),
        })
    }
}

impl Presenter for HtmlPresenter {
    fn present(&self, model: &DisplayModel) -> Result<RenderedReport, AppError> {
        let failure = match &model.body {
            ResultsBody::Failure(message) => Some(message.as_str()),
            ResultsBody::Empty | ResultsBody::Table(_) => None,
        };

        let data = json!({
            "page_title": self.page_title,
            "status_class": model.status.level.to_string(),
            "status_message": model.status.message,
            "summary": model.summary,
            "failure": failure,
            "rows": model.rows(),
        });

        let html = self
            .registry
            .render(TEMPLATE_NAME, &data)
            .map_err(|e| AppError::TemplateRenderError {
                name: TEMPLATE_NAME.to_string(),
                message: e.to_string(),
            })?;

        log::debug!("Rendered HTML report: {} bytes", html.len());
        Ok(RenderedReport::new(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::render::{render_failure, render_results, TimeDisplay};
    use crate::model::{LibraryItem, ModifiedTime};

    fn present(model: &DisplayModel) -> String {
        HtmlPresenter::new()
            .unwrap()
            .present(model)
            .unwrap()
            .into_string()
    }

    fn item(name: &str, editor: &str) -> LibraryItem {
        LibraryItem {
            name: Some(name.to_string()),
            title: None,
            path: format!("/sites/A/B/Docs/{}", name),
            modified_at: Some(ModifiedTime::parse("2024-01-01T00:00:00Z")),
            editor_name: editor.to_string(),
        }
    }

    #[test]
    fn renders_table() {
        let html = present(&render_results(
            &[item("a.pdf", "Alice")],
            "Docs",
            TimeDisplay::Utc,
        ));

        assert!(html.contains(r#"class="status info""#));
        assert!(html.contains("Docs | count: 1"));
        assert!(html.contains(r#"<table class="resultsTable">"#));
        assert!(html.contains("<td>a.pdf</td>"));
        assert!(html.contains("<td>2024-01-01 00:00:00</td>"));
        assert!(html.contains("<td>Alice</td>"));
        assert!(html.contains("<td>/sites/A/B/Docs/a.pdf</td>"));
        assert!(!html.contains("No items found."));
    }

    #[test]
    fn escapes_item_fields() {
        let html = present(&render_results(
            &[item("<img src=x onerror=alert(1)>.pdf", "Tom & Jerry")],
            "<b>Docs</b>",
            TimeDisplay::Utc,
        ));

        assert!(!html.contains("<img"));
        assert!(!html.contains("<b>Docs</b>"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;.pdf"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("&lt;b&gt;Docs&lt;/b&gt; | count: 1"));
    }

    #[test]
    fn renders_empty_state() {
        let html = present(&render_results(&[], "Docs", TimeDisplay::Utc));
        assert!(html.contains("<div>No items found.</div>"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn renders_escaped_failure() {
        let err = AppError::http(500, "https://host/x", "<html><body>Server Error</body></html>");
        let html = present(&render_failure(&err));

        assert!(html.contains(r#"class="status error""#));
        assert!(html.contains("<pre style=\"white-space:pre-wrap\">HTTP 500 from https://host/x\n&lt;html&gt;"));
        assert!(!html.contains("<body>Server Error"));
        assert!(!html.contains("<table"));
    }
}
