//! Schema module for sqeval.
//!
//! This module contains column and table definitions.

mod column;
mod table;

pub use column::ColumnDef;
pub use table::{Table, TableBuilder};
