//! Column resolution and query validation.
//!
//! A [`Resolver`] is built once per evaluation over the combined schema of the
//! FROM tables. It maps every column reference to exactly one column of that
//! schema, or reports why it cannot.

use crate::ast::{ColumnRef, Condition, Term};
use crate::diagnostic::{Diagnostic, Result};
use crate::executor::CrossSchema;
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use sqeval_core::SqlType;

/// A column reference resolved against a [`CrossSchema`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedColumn<'s> {
    /// FROM alias of the owning table.
    pub table: &'s str,
    /// Index of the column in the combined schema.
    pub index: usize,
    pub sql_type: SqlType,
}

/// Resolves column references against the FROM tables of one query.
#[derive(Debug)]
pub struct Resolver<'s> {
    schema: &'s CrossSchema,
    /// Column name to the aliases of every table declaring it, in FROM order.
    column_tables: HashMap<&'s str, Vec<&'s str>>,
}

impl<'s> Resolver<'s> {
    /// Creates a resolver over `schema`.
    pub fn new(schema: &'s CrossSchema) -> Self {
        let mut column_tables: HashMap<&'s str, Vec<&'s str>> = HashMap::new();
        for block in schema.blocks() {
            let columns = &schema.columns()[block.offset()..block.offset() + block.width()];
            for column in columns {
                column_tables
                    .entry(column.name())
                    .or_default()
                    .push(block.alias());
            }
        }
        Self {
            schema,
            column_tables,
        }
    }

    /// Resolves a column reference to exactly one column.
    ///
    /// A qualified reference fails with `UnknownTable` if no FROM alias matches and
    /// with `UnknownColumn` if that table lacks the column. An unqualified reference
    /// fails with `UnknownColumn` if no table has the column and with
    /// `AmbiguousColumn` if more than one does.
    pub fn resolve_column(&self, column: &ColumnRef) -> Result<ResolvedColumn<'s>> {
        let table = match column.table() {
            Some(table) => {
                let block = self
                    .schema
                    .block(table)
                    .ok_or_else(|| Diagnostic::unknown_table(table))?;
                block.alias()
            }
            None => {
                let matches = self
                    .column_tables
                    .get(column.name.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                match matches {
                    [] => return Err(Diagnostic::unknown_column(&column.name, None)),
                    [table] => *table,
                    tables => {
                        return Err(Diagnostic::ambiguous_column(
                            &column.name,
                            tables.iter().map(|t| String::from(*t)).collect(),
                        ))
                    }
                }
            }
        };

        let index = self
            .schema
            .column_index(table, &column.name)
            .ok_or_else(|| Diagnostic::unknown_column(&column.name, Some(table)))?;
        let sql_type = self.schema.columns()[index].sql_type();
        Ok(ResolvedColumn {
            table,
            index,
            sql_type,
        })
    }

    /// Returns the type of a term: intrinsic for literals, resolved for columns.
    pub fn resolve_term_type(&self, term: &Term) -> Result<SqlType> {
        match term {
            Term::Literal(value) => Ok(value.sql_type()),
            Term::Column(column) => self.resolve_column(column).map(|c| c.sql_type),
        }
    }

    /// Checks that both terms of a condition resolve and share a type.
    pub fn validate_condition(&self, condition: &Condition) -> Result<()> {
        let left = self.resolve_term_type(&condition.left)?;
        let right = self.resolve_term_type(&condition.right)?;
        if left != right {
            return Err(Diagnostic::incompatible_types(condition.op, left, right));
        }
        Ok(())
    }
}
