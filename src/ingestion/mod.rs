//! Sources and loading entrypoints.
//!
//! Most callers should use [`load_from_path`] (from [`unified`]) which:
//!
//! - reads a delimited text file with the delimiter/encoding in [`LoadOptions`]
//! - loads it into a [`crate::types::Table`]
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! Sources implement [`DataSource`]:
//! - [`DelimitedText`]: a delimiter-separated text file
//! - [`InMemory`]: records already held in memory

pub mod memory;
pub mod observability;
pub mod source;
pub mod text;
pub mod unified;

pub use memory::InMemory;
pub use observability::{LoadContext, LoadObserver, LoadSeverity, LoadSummary, StdErrObserver};
pub use source::{DataSource, RawTable, split_header};
pub use text::{DelimitedText, TextSourceOptions};
pub use unified::{LoadOptions, load_from_path};
