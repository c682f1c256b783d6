//! In-place column transformations for [`crate::types::Table`].
//!
//! Every transformation addresses columns by header name and mutates the table directly, so the
//! order of calls matters. Names are resolved up front; an unknown name fails with
//! [`crate::EtlError::ColumnNotFound`] before any cell changes.
//!
//! Implemented on [`crate::types::Table`]:
//!
//! - [`Table::slice_columns`](crate::types::Table::slice_columns),
//!   [`Table::drop_missing`](crate::types::Table::drop_missing)
//! - [`Table::unique_values`](crate::types::Table::unique_values),
//!   [`Table::to_one_hot`](crate::types::Table::to_one_hot),
//!   [`Table::to_boolean`](crate::types::Table::to_boolean)
//! - [`Table::words_to_number`](crate::types::Table::words_to_number),
//!   [`Table::cents_to_euros`](crate::types::Table::cents_to_euros),
//!   [`Table::comma_to_float`](crate::types::Table::comma_to_float)
//!
//! ## Example: slice → drop → encode
//!
//! ```rust
//! use delimited_etl::ingestion::InMemory;
//! use delimited_etl::processing::MissingPattern;
//! use delimited_etl::types::{Table, Value};
//!
//! let source = InMemory::new(vec![
//!     vec!["class".into(), "aspiration".into(), "price".into()],
//!     vec!["B".into(), "turbo".into(), "15000".into()],
//!     vec!["C".into(), "std".into(), "-".into()],
//!     vec!["B".into(), "std".into(), "9000".into()],
//! ]);
//!
//! let mut table = Table::new(MissingPattern::literal("-").unwrap());
//! table.load(&source, Some(0)).unwrap();
//! table.drop_missing();
//! table.to_one_hot(&["class"]).unwrap();
//! table.to_boolean(&["aspiration"], &["turbo"]).unwrap();
//! table.cents_to_euros(&["price"]).unwrap();
//!
//! assert_eq!(
//!     table.rows()[0],
//!     vec![Value::OneHot(vec![1]), Value::Int64(1), Value::Float64(15.0)]
//! );
//! ```

pub mod convert;
pub mod encode;
pub mod missing;
pub mod numwords;
pub mod select;
pub mod utils;

pub use convert::cents_to_euros;
pub use missing::MissingPattern;
pub use numwords::words_to_number;
pub use utils::{
    clean_text, contains_missing, index_of_first_match, replace_positional, unique_values,
};
