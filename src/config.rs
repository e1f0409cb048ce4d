// src/config.rs
use crate::api::ClientOptions;
use crate::constants::{COOKIE_ENV_VAR, DEFAULT_SITE_DEPTH};
use crate::error::AppError;
use crate::formatting::{OutputFormat, TimeDisplay};
use crate::types::{CookieHeader, SiteDepth, ValidationError};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Longest accepted request timeout.
const MAX_TIMEOUT_SECS: u64 = 3600;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Document library URL (e.g., "https://host/sites/A/B/Docs/Forms/AllItems.aspx")
    pub library_url: String,

    /// Number of leading path segments that identify the site
    #[arg(long, default_value_t = DEFAULT_SITE_DEPTH)]
    pub site_depth: usize,

    /// Report format. Defaults to html when the output file ends in .html, text otherwise.
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Cookie header carrying the session credentials (falls back to $SPSCAN_COOKIE)
    #[arg(long)]
    pub cookie: Option<String>,

    /// Show modification times in UTC instead of local time
    #[arg(long, default_value_t = false)]
    pub utc: bool,

    /// Abort a request after this many seconds (default: no timeout)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved scan configuration — validated and ready to drive a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub library_url: String,
    pub site_depth: SiteDepth,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
    pub cookie: Option<CookieHeader>,
    pub clock: TimeDisplay,
    pub timeout: Option<Duration>,
}

impl ScanConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let env_cookie = std::env::var(COOKIE_ENV_VAR).ok();
        Self::from_parts(cli, env_cookie)
    }

    /// Resolves a configuration with an explicit environment cookie value.
    pub fn from_parts(cli: CommandLineInput, env_cookie: Option<String>) -> Result<Self, AppError> {
        let site_depth = SiteDepth::new(cli.site_depth)?;

        let cookie = match cli.cookie.or(env_cookie) {
            Some(raw) if !raw.trim().is_empty() => Some(CookieHeader::new(raw)?),
            _ => {
                log::debug!("No session cookie configured; requests go out unauthenticated");
                None
            }
        };

        let timeout = match cli.timeout_secs {
            Some(secs) if secs == 0 || secs > MAX_TIMEOUT_SECS => {
                return Err(ValidationError::OutOfBounds {
                    value: secs as usize,
                    min: 1,
                    max: MAX_TIMEOUT_SECS as usize,
                }
                .into())
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let output_file = cli.output_file.map(PathBuf::from);
        let format = cli
            .format
            .unwrap_or_else(|| infer_format(output_file.as_deref()));

        Ok(ScanConfig {
            library_url: cli.library_url,
            site_depth,
            format,
            output_file,
            cookie,
            clock: if cli.utc {
                TimeDisplay::Utc
            } else {
                TimeDisplay::Local
            },
            timeout,
        })
    }

    /// Options for the HTTP client this configuration calls for.
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            cookie: self.cookie.clone(),
            timeout: self.timeout,
        }
    }
}

/// HTML for `.html`/`.htm` output files, text for everything else.
fn infer_format(output_file: Option<&std::path::Path>) -> OutputFormat {
    let is_html = output_file
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
        .unwrap_or(false);

    if is_html {
        OutputFormat::Html
    } else {
        OutputFormat::Text
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            library_url: String::new(),
            site_depth: SiteDepth::default(),
            format: OutputFormat::Text,
            output_file: None,
            cookie: None,
            clock: TimeDisplay::Local,
            timeout: None,
        }
    }
}
