//! Path-based loading entrypoint.
//!
//! [`load_from_path`] builds a [`DelimitedText`] source from [`LoadOptions`], loads it into a
//! [`Table`], and reports the outcome to an optional [`LoadObserver`].

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{EtlError, EtlResult};
use crate::processing::MissingPattern;
use crate::types::Table;

use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadSummary};
use super::text::{DelimitedText, TextSourceOptions};

/// Options controlling [`load_from_path`].
///
/// Use [`Default`] for the common case: `;`-separated UTF-8 text, header on the first line,
/// `-` as the missing-value token.
#[derive(Clone)]
pub struct LoadOptions {
    /// Index of the header line, or `None` when the file has no header.
    pub header_row: Option<usize>,
    /// Missing-value token, as a regular-expression fragment.
    pub missing_token: String,
    /// Delimiter and encoding.
    pub text: TextSourceOptions,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("header_row", &self.header_row)
            .field("missing_token", &self.missing_token)
            .field("text", &self.text)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            header_row: Some(0),
            missing_token: "-".to_string(),
            text: TextSourceOptions::default(),
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a delimited text file into a [`Table`].
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with the row count and header list
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use delimited_etl::ingestion::{load_from_path, LoadOptions};
///
/// # fn main() -> Result<(), delimited_etl::EtlError> {
/// let mut table = load_from_path("cars.txt", &LoadOptions::default())?;
/// table.slice_columns(&["aspiration", "price"])?;
/// table.drop_missing();
/// table.to_boolean(&["aspiration"], &["turbo"])?;
/// table.cents_to_euros(&["price"])?;
/// println!("rows={}", table.row_count());
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (stderr logging + alert threshold)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use delimited_etl::ingestion::{load_from_path, LoadOptions, LoadSeverity, StdErrObserver};
///
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver::default())),
///     alert_at_or_above: LoadSeverity::Critical,
///     ..Default::default()
/// };
///
/// // Missing files are Critical and trigger `on_alert` at this threshold.
/// let _err = load_from_path("does_not_exist.txt", &opts).unwrap_err();
/// ```
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> EtlResult<Table> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
        header_row: options.header_row,
        delimiter: options.text.delimiter,
        encoding: options.text.encoding.clone(),
    };

    let result = load_table(path, options);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(table) => obs.on_success(&ctx, &LoadSummary::of(table)),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn load_table(path: &Path, options: &LoadOptions) -> EtlResult<Table> {
    let missing = MissingPattern::new(&options.missing_token)?;
    let source = DelimitedText::with_options(path, options.text.clone());
    let mut table = Table::new(missing);
    table.load(&source, options.header_row)?;
    Ok(table)
}

fn severity_for_error(e: &EtlError) -> LoadSeverity {
    match e {
        EtlError::Io(_) | EtlError::FileNotFound { .. } => LoadSeverity::Critical,
        EtlError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        _ => LoadSeverity::Error,
    }
}
