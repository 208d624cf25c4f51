//! Project executor.

use crate::ast::Selector;
use crate::diagnostic::Result;
use crate::executor::CrossSchema;
use crate::resolver::Resolver;
use alloc::vec::Vec;
use sqeval_core::schema::{ColumnDef, Table};
use sqeval_core::Row;

/// Project executor - builds the output table from the select list.
#[derive(Clone, Debug)]
pub struct ProjectExecutor {
    /// Output columns, in select-list order.
    columns: Vec<ColumnDef>,
    /// Combined-schema index read for each output column.
    column_indices: Vec<usize>,
}

impl ProjectExecutor {
    /// Resolves every selector against the resolver's schema.
    pub fn new(resolver: &Resolver<'_>, select: &[Selector]) -> Result<Self> {
        let mut columns = Vec::with_capacity(select.len());
        let mut column_indices = Vec::with_capacity(select.len());
        for selector in select {
            let resolved = resolver.resolve_column(&selector.source)?;
            columns.push(ColumnDef::new(selector.alias.as_str(), resolved.sql_type));
            column_indices.push(resolved.index);
        }
        Ok(Self {
            columns,
            column_indices,
        })
    }

    /// Returns the output columns.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the combined-schema index of each output column.
    pub fn column_indices(&self) -> &[usize] {
        &self.column_indices
    }

    /// Executes the projection. Output rows keep their input order.
    pub fn execute(&self, rows: &[Row]) -> Table {
        let projected = rows
            .iter()
            .map(|row| {
                let values = self
                    .column_indices
                    .iter()
                    .map(|&index| row.values()[index].clone())
                    .collect();
                Row::new(values)
            })
            .collect();
        Table::new_unchecked(self.columns.clone(), projected)
    }
}

/// Projects `rows` laid out by `schema` onto the select list.
pub fn project(schema: &CrossSchema, rows: &[Row], select: &[Selector]) -> Result<Table> {
    let resolver = Resolver::new(schema);
    Ok(ProjectExecutor::new(&resolver, select)?.execute(rows))
}
