// src/output/types.rs
//! Type definitions for planning report delivery.

use std::path::PathBuf;

/// Where a rendered report should go, decided before any I/O happens.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }
}

/// A single delivery of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Write the report to a file, creating parent directories
    WriteFile { path: PathBuf, content: String },
    /// Print the report to stdout
    PrintToStdout { content: String },
}

impl DeliveryTarget {
    /// Where the report goes, for messages about this delivery.
    pub fn destination(&self) -> String {
        match self {
            DeliveryTarget::WriteFile { path, .. } => path.display().to_string(),
            DeliveryTarget::PrintToStdout { .. } => "stdout".to_string(),
        }
    }
}

/// Outcome of carrying out an output plan.
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    pub completed: Vec<DeliveryTarget>,
    pub failed: Vec<FailedDelivery>,
    pub bytes_written: usize,
}

impl OutputReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_completed(mut self, operation: DeliveryTarget, bytes: usize) -> Self {
        self.bytes_written += bytes;
        self.completed.push(operation);
        self
    }

    pub fn with_failed(mut self, operation: DeliveryTarget, error: String) -> Self {
        self.failed.push(FailedDelivery { operation, error });
        self
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct FailedDelivery {
    pub operation: DeliveryTarget,
    pub error: String,
}
