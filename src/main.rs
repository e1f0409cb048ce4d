// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use spscan::{
    deliver, AppError, CommandLineInput, DeliveryTarget, DisplayModel, LibraryScanner,
    OutputPlan, OutputReport, RenderedReport, ReportDelivery, ReqwestHttpClient, ScanConfig,
    SCAN_FAILED_EXIT_CODE,
};
use std::fs;
use std::process::ExitCode;

/// Sets up logging configuration. Console output goes to stderr so that
/// stdout carries nothing but the report.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("spscan.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes one scan: resolve → fetch → render → present → deliver.
///
/// Returns the process exit status once the report has been delivered.
async fn execute_scan(config: &ScanConfig) -> Result<u8, AppError> {
    let session = ScanSession::new(config);

    let http = ReqwestHttpClient::new(&config.client_options())?;
    let scanner = LibraryScanner::new(http, config.site_depth, config.clock);

    let model = scanner.scan(&config.library_url).await;
    let report = session.present(&model)?;
    let delivered = session.deliver(report)?;
    session.report_completion(&model, &delivered);

    Ok(exit_status(&model))
}

/// A failed scan still produces a report, but scripts need to tell it apart.
fn exit_status(model: &DisplayModel) -> u8 {
    if model.is_failure() {
        SCAN_FAILED_EXIT_CODE
    } else {
        0
    }
}

/// Carries a scan's display model out to the configured destination.
struct ScanSession<'a> {
    config: &'a ScanConfig,
}

impl<'a> ScanSession<'a> {
    fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    fn present(&self, model: &DisplayModel) -> Result<RenderedReport, AppError> {
        self.config.format.presenter()?.present(model)
    }

    /// Tells the user where the report went when it did not go to stdout.
    fn report_completion(&self, model: &DisplayModel, report: &OutputReport) {
        for completed in &report.completed {
            if let DeliveryTarget::WriteFile { path, .. } = completed {
                if model.is_failure() {
                    eprintln!("✗ Scan failed; error report saved to {}", path.display());
                } else {
                    eprintln!(
                        "✓ {} item(s) listed; report saved to {}",
                        model.rows().len(),
                        path.display()
                    );
                }
            }
        }
    }
}

impl ReportDelivery for ScanSession<'_> {
    fn deliver(&self, report: RenderedReport) -> Result<OutputReport, AppError> {
        let content = report.into_string();
        let target = match &self.config.output_file {
            Some(path) => DeliveryTarget::WriteFile {
                path: path.clone(),
                content,
            },
            None => DeliveryTarget::PrintToStdout { content },
        };

        let report = deliver(OutputPlan::new().with_operation(target));

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report
                    .failed
                    .iter()
                    .map(|f| format!("{}: {}", f.operation.destination(), f.error))
                    .collect(),
            });
        }

        Ok(report)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = ScanConfig::resolve(cli)?;

    let status = execute_scan(&config).await?;

    Ok(ExitCode::from(status))
}
