//! sqeval Core - value, row and table types for the sqeval query evaluator.
//!
//! This crate provides the data model shared by the evaluator and its collaborators:
//!
//! - `SqlType`: Supported column types (`int`, `str`)
//! - `Value`: A typed cell value
//! - `Row`: An ordered sequence of values
//! - `schema`: Column and table definitions
//! - `Error`: Errors raised while constructing tables
//!
//! # Example
//!
//! ```rust
//! use sqeval_core::{SqlType, Value};
//! use sqeval_core::schema::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .add_column("id", SqlType::Int)
//!     .unwrap()
//!     .add_column("name", SqlType::Str)
//!     .unwrap()
//!     .add_row(vec![Value::Int(1), Value::Str("Alice".into())])
//!     .unwrap()
//!     .build();
//!
//! assert_eq!(table.row_count(), 1);
//! assert_eq!(table.rows()[0].get(1), Some(&Value::Str("Alice".into())));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod row;
pub mod schema;
mod types;
mod value;

pub use error::{Error, Result};
pub use row::Row;
pub use types::SqlType;
pub use value::Value;
