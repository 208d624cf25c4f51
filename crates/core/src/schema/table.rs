//! Table definition for sqeval.

use super::column::ColumnDef;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::types::SqlType;
use crate::value::Value;
use alloc::format;
use alloc::vec::Vec;

/// A fully materialized table: an ordered column list and an ordered row list.
///
/// Every row has exactly `columns().len()` values and the value at position `i`
/// has the type of `columns()[i]`. Tables are never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<ColumnDef>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table, checking column-name uniqueness and the shape of every row.
    pub fn new(columns: Vec<ColumnDef>, rows: Vec<Row>) -> Result<Self> {
        for (i, column) in columns.iter().enumerate() {
            if column.name().is_empty() {
                return Err(Error::invalid_schema("Column name cannot be empty"));
            }
            if columns[..i].iter().any(|c| c.name() == column.name()) {
                return Err(Error::invalid_schema(format!(
                    "Column already exists: {}",
                    column.name()
                )));
            }
        }
        for row in &rows {
            check_row(&columns, row.values())?;
        }
        Ok(Self { columns, rows })
    }

    /// Creates a table without validation.
    ///
    /// The caller guarantees the row shape invariant. Column names may repeat,
    /// which happens for query results whose select list reuses an alias.
    pub fn new_unchecked(columns: Vec<ColumnDef>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Returns the columns.
    #[inline]
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Gets a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Gets a column index by name.
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }
}

fn check_row(columns: &[ColumnDef], values: &[Value]) -> Result<()> {
    if values.len() != columns.len() {
        return Err(Error::row_arity(columns.len(), values.len()));
    }
    for (column, value) in columns.iter().zip(values) {
        if value.sql_type() != column.sql_type() {
            return Err(Error::type_mismatch(
                column.name(),
                column.sql_type(),
                value.sql_type(),
            ));
        }
    }
    Ok(())
}

/// Builder for creating tables in code.
#[derive(Debug, Default)]
pub struct TableBuilder {
    columns: Vec<ColumnDef>,
    rows: Vec<Row>,
}

impl TableBuilder {
    /// Creates a new table builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column to the table.
    pub fn add_column(mut self, name: &str, sql_type: SqlType) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::invalid_schema("Column name cannot be empty"));
        }
        if self.columns.iter().any(|c| c.name() == name) {
            return Err(Error::invalid_schema(format!(
                "Column already exists: {}",
                name
            )));
        }
        if !self.rows.is_empty() {
            return Err(Error::invalid_schema(
                "Columns must be added before rows",
            ));
        }
        self.columns.push(ColumnDef::new(name, sql_type));
        Ok(self)
    }

    /// Adds a row to the table.
    pub fn add_row(mut self, values: Vec<Value>) -> Result<Self> {
        check_row(&self.columns, &values)?;
        self.rows.push(Row::new(values));
        Ok(self)
    }

    /// Builds the table.
    pub fn build(self) -> Table {
        Table {
            columns: self.columns,
            rows: self.rows,
        }
    }
}
