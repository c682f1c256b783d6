//! `delimited-etl` is a small extract-transform-load library for delimiter-separated text files.
//!
//! A file is loaded into an in-memory [`types::Table`] (headers + rows of [`types::Value`]),
//! transformed in place column by column, and read back as a row matrix or written out again.
//!
//! The primary entrypoint is [`ingestion::load_from_path`]; any [`ingestion::DataSource`] can
//! also be loaded with [`types::Table::load`].
//!
//! ## Transformations
//!
//! - **Missing values**: [`types::Table::drop_missing`] removes rows containing the configured
//!   token (see [`processing::MissingPattern`])
//! - **Selection**: [`types::Table::slice_columns`]
//! - **Categoricals**: [`types::Table::unique_values`], [`types::Table::to_one_hot`],
//!   [`types::Table::to_boolean`]
//! - **Numbers**: [`types::Table::words_to_number`] ("four" → 4),
//!   [`types::Table::cents_to_euros`] (÷ 1000), [`types::Table::comma_to_float`] ("10,1" → 10.1)
//!
//! ## Quick example
//!
//! ```no_run
//! use delimited_etl::ingestion::{load_from_path, LoadOptions};
//! use delimited_etl::output::write_delimited;
//!
//! # fn main() -> Result<(), delimited_etl::EtlError> {
//! let mut table = load_from_path("challenge.txt", &LoadOptions::default())?;
//! table.slice_columns(&["engine-location", "num-of-cylinders", "aspiration", "price"])?;
//! table.drop_missing();
//! table.to_one_hot(&["engine-location"])?;
//! table.to_boolean(&["aspiration"], &["turbo"])?;
//! table.words_to_number(&["num-of-cylinders"])?;
//! table.cents_to_euros(&["price"])?;
//!
//! for row in table.matrix() {
//!     println!("{row:?}");
//! }
//! write_delimited(&table, "challenge.out.txt", b';')?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: data sources and the path-based loading entrypoint
//! - [`types`]: table + cell types
//! - [`processing`]: in-place column transformations and their helpers
//! - [`output`]: delimited and JSON writers
//! - [`error`]: the crate error type

pub mod error;
pub mod ingestion;
pub mod output;
pub mod processing;
pub mod types;

pub use error::{EtlError, EtlResult};
