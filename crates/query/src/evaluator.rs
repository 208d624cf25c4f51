//! Query evaluation entry point.
//!
//! The pipeline is strictly ordered: FROM tables are looked up, every column
//! reference is validated, and only then is the cross product materialized,
//! filtered and projected. A query either yields a complete result table or
//! the first diagnostic found, never both.

use crate::ast::Query;
use crate::diagnostic::{Diagnostic, Result};
use crate::executor::{cross_rows, CrossSchema, DataSource, FilterExecutor, FromTable, ProjectExecutor};
use crate::resolver::Resolver;
use alloc::vec::Vec;
use hashbrown::HashSet;
use sqeval_core::schema::Table;
use tracing::debug;

/// Evaluates one query against the tables of a data source.
#[derive(Debug)]
pub struct Evaluator<'q, S: DataSource + ?Sized> {
    query: &'q Query,
    source: &'q S,
}

impl<'q, S: DataSource + ?Sized> Evaluator<'q, S> {
    /// Creates an evaluator for `query`. Nothing is checked until evaluation.
    pub fn new(query: &'q Query, source: &'q S) -> Self {
        Self { query, source }
    }

    /// Looks up the FROM tables in declaration order.
    fn from_tables(&self) -> Result<Vec<FromTable<'q>>> {
        let mut seen = HashSet::with_capacity(self.query.from.len());
        let mut tables = Vec::with_capacity(self.query.from.len());
        for decl in &self.query.from {
            let alias = decl.alias.as_str();
            if !seen.insert(alias) {
                return Err(Diagnostic::duplicate_table_alias(alias));
            }
            let table = self
                .source
                .get_table(alias)
                .ok_or_else(|| Diagnostic::unknown_table(alias))?;
            tables.push((alias, table));
        }
        Ok(tables)
    }

    /// Evaluates the query, returning the projected table or the first diagnostic.
    ///
    /// Diagnostics follow declaration order: FROM, then SELECT, then WHERE.
    pub fn evaluate(&self) -> Result<Table> {
        let result = self.run();
        if let Err(diagnostic) = &result {
            debug!(%diagnostic, "query rejected");
        }
        result
    }

    fn run(&self) -> Result<Table> {
        let tables = self.from_tables()?;
        let schema = CrossSchema::new(&tables);
        let resolver = Resolver::new(&schema);

        // SELECT diagnostics come before WHERE diagnostics.
        let projector = ProjectExecutor::new(&resolver, &self.query.select)?;
        let filter = FilterExecutor::new(&resolver, &self.query.where_clause)?;
        debug!(
            tables = tables.len(),
            columns = schema.width(),
            "query validated"
        );

        let rows = cross_rows(&tables);
        debug!(rows = rows.len(), "built cross product");

        let rows = filter.execute(rows);
        debug!(rows = rows.len(), "applied where clause");

        let result = projector.execute(&rows);
        debug!(
            rows = result.row_count(),
            columns = result.column_count(),
            "projected result"
        );
        Ok(result)
    }

    /// Collects every diagnostic of the query in FROM, SELECT, WHERE order.
    ///
    /// Unlike [`evaluate`](Self::evaluate) this does not stop at the first problem.
    /// Tables missing from the data source are left out of the schema, so column
    /// references to them are reported as well.
    pub fn validate_all(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut seen = HashSet::with_capacity(self.query.from.len());
        let mut tables = Vec::with_capacity(self.query.from.len());
        for decl in &self.query.from {
            let alias = decl.alias.as_str();
            if !seen.insert(alias) {
                diagnostics.push(Diagnostic::duplicate_table_alias(alias));
                continue;
            }
            match self.source.get_table(alias) {
                Some(table) => tables.push((alias, table)),
                None => diagnostics.push(Diagnostic::unknown_table(alias)),
            }
        }

        let schema = CrossSchema::new(&tables);
        let resolver = Resolver::new(&schema);
        diagnostics.extend(
            self.query
                .select
                .iter()
                .filter_map(|selector| resolver.resolve_column(&selector.source).err()),
        );
        diagnostics.extend(
            self.query
                .where_clause
                .iter()
                .filter_map(|condition| resolver.validate_condition(condition).err()),
        );
        diagnostics
    }
}

/// Evaluates `query` against `source`.
///
/// ```rust
/// use sqeval_core::schema::TableBuilder;
/// use sqeval_core::{SqlType, Value};
/// use sqeval_query::ast::{CmpOp, Query, Term};
/// use sqeval_query::{evaluate, InMemoryDataSource};
///
/// let users = TableBuilder::new()
///     .add_column("id", SqlType::Int).unwrap()
///     .add_column("name", SqlType::Str).unwrap()
///     .add_row(vec![Value::Int(1), Value::Str("a".into())]).unwrap()
///     .add_row(vec![Value::Int(2), Value::Str("b".into())]).unwrap()
///     .build();
/// let source = InMemoryDataSource::new().with_table("u", users);
///
/// let query = Query::builder()
///     .from("u", "users")
///     .select_unqualified("n", "name")
///     .filter(Term::unqualified("id"), CmpOp::Ge, Term::literal(2i64))
///     .build();
///
/// let result = evaluate(&query, &source).unwrap();
/// assert_eq!(result.rows()[0].values(), &[Value::Str("b".into())]);
/// ```
pub fn evaluate<S: DataSource + ?Sized>(query: &Query, source: &S) -> Result<Table> {
    Evaluator::new(query, source).evaluate()
}
