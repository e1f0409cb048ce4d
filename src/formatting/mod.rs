//! Turns scan results into a display model and presents it.

mod display;
mod escape;
mod html;
mod render;
mod text;

pub use display::{DisplayModel, DisplayRow, ResultsBody, StatusLevel, StatusLine};
pub use escape::escape_html;
pub use html::HtmlPresenter;
pub use render::{render_failure, render_results, TimeDisplay};
pub use text::TextPresenter;

use crate::error::AppError;
use crate::types::RenderedReport;

/// A presentation layer for [`DisplayModel`]s.
pub trait Presenter {
    fn present(&self, model: &DisplayModel) -> Result<RenderedReport, AppError>;
}

/// The presentation formats the CLI offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

impl OutputFormat {
    /// Builds the presenter for this format.
    pub fn presenter(self) -> Result<Box<dyn Presenter>, AppError> {
        Ok(match self {
            OutputFormat::Text => Box::new(TextPresenter),
            OutputFormat::Html => Box::new(HtmlPresenter::new()?),
        })
    }
}
