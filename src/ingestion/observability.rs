//! Load outcome reporting.
//!
//! [`super::load_from_path`] hands every outcome to an optional [`LoadObserver`]. A successful
//! load is summarized by the header list and row count of the table it produced.

use std::path::PathBuf;

use crate::error::EtlError;
use crate::types::Table;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    Info,
    Warning,
    /// The load failed on the input's content (bad header row, ragged lines, bad token).
    Error,
    /// The input could not be read at all (missing file, I/O failure).
    Critical,
}

/// Where and how a load was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadContext {
    pub path: PathBuf,
    pub header_row: Option<usize>,
    pub delimiter: u8,
    pub encoding: String,
}

/// Shape of a freshly loaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows: usize,
    /// Header names in column order; empty when loaded without a header row.
    pub headers: Vec<String>,
}

impl LoadSummary {
    pub fn of(table: &Table) -> Self {
        Self {
            rows: table.row_count(),
            headers: table.headers().to_vec(),
        }
    }

    pub fn columns(&self) -> usize {
        self.headers.len()
    }
}

/// Receives load outcomes.
pub trait LoadObserver: Send + Sync {
    fn on_success(&self, _ctx: &LoadContext, _summary: &LoadSummary) {}

    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &EtlError) {}

    /// Called when a failure meets the alert threshold. Defaults to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &EtlError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Logs load outcomes to stderr, one line per event.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_success(&self, ctx: &LoadContext, summary: &LoadSummary) {
        eprintln!("{}", success_line(ctx, summary));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &EtlError) {
        eprintln!("{}", failure_line(ctx, severity, error, false));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &EtlError) {
        eprintln!("{}", failure_line(ctx, severity, error, true));
    }
}

/// The line [`StdErrObserver`] prints for a successful load.
pub fn success_line(ctx: &LoadContext, summary: &LoadSummary) -> String {
    format!(
        "[load][ok] path={} delimiter='{}' encoding={} header_row={} rows={} columns={} headers=[{}]",
        ctx.path.display(),
        char::from(ctx.delimiter),
        ctx.encoding,
        header_row_label(ctx.header_row),
        summary.rows,
        summary.columns(),
        summary.headers.join(", ")
    )
}

/// The line [`StdErrObserver`] prints for a failed load.
pub fn failure_line(
    ctx: &LoadContext,
    severity: LoadSeverity,
    error: &EtlError,
    alert: bool,
) -> String {
    format!(
        "{}[load][{:?}] path={} header_row={} err={}",
        if alert { "[ALERT]" } else { "" },
        severity,
        ctx.path.display(),
        header_row_label(ctx.header_row),
        error
    )
}

fn header_row_label(header_row: Option<usize>) -> String {
    match header_row {
        Some(idx) => idx.to_string(),
        None => "none".to_string(),
    }
}
