//! Query AST: select list, FROM declarations and WHERE conditions.

use super::expr::{CmpOp, ColumnRef, Term};
use alloc::string::String;
use alloc::vec::Vec;

/// Binds a query-local alias to an external table identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDecl {
    /// Alias used by column references in this query.
    pub alias: String,
    /// External table identifier, resolved by the caller.
    pub source: String,
}

impl TableDecl {
    pub fn new(alias: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            source: source.into(),
        }
    }
}

/// One SELECT-list entry: the output column name and the column it projects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    pub alias: String,
    pub source: ColumnRef,
}

impl Selector {
    pub fn new(alias: impl Into<String>, source: ColumnRef) -> Self {
        Self {
            alias: alias.into(),
            source,
        }
    }
}

/// A binary comparison between two terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub left: Term,
    pub op: CmpOp,
    pub right: Term,
}

impl Condition {
    pub fn new(left: Term, op: CmpOp, right: Term) -> Self {
        Self { left, op, right }
    }
}

/// A SELECT/FROM/WHERE query. WHERE conditions are implicitly AND-ed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub select: Vec<Selector>,
    pub from: Vec<TableDecl>,
    pub where_clause: Vec<Condition>,
}

impl Query {
    /// Creates a query builder.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::default()
    }
}

/// Fluent builder for queries.
///
/// ```rust
/// use sqeval_query::ast::{CmpOp, Query, Term};
///
/// let query = Query::builder()
///     .from("u", "users")
///     .select("n", "u", "name")
///     .filter(Term::column("u", "id"), CmpOp::Gt, Term::literal(1i64))
///     .build();
///
/// assert_eq!(query.from.len(), 1);
/// assert_eq!(query.where_clause[0].op, CmpOp::Gt);
/// ```
#[derive(Debug, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    /// Adds a FROM declaration.
    pub fn from(mut self, alias: impl Into<String>, source: impl Into<String>) -> Self {
        self.query.from.push(TableDecl::new(alias, source));
        self
    }

    /// Adds a qualified column to the select list.
    pub fn select(
        mut self,
        alias: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        self.query
            .select
            .push(Selector::new(alias, ColumnRef::qualified(table, column)));
        self
    }

    /// Adds an unqualified column to the select list.
    pub fn select_unqualified(mut self, alias: impl Into<String>, column: impl Into<String>) -> Self {
        self.query
            .select
            .push(Selector::new(alias, ColumnRef::unqualified(column)));
        self
    }

    /// Adds a selector.
    pub fn selector(mut self, selector: Selector) -> Self {
        self.query.select.push(selector);
        self
    }

    /// Adds a WHERE condition.
    pub fn filter(mut self, left: Term, op: CmpOp, right: Term) -> Self {
        self.query.where_clause.push(Condition::new(left, op, right));
        self
    }

    pub fn build(self) -> Query {
        self.query
    }
}
