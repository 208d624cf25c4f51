//! Query AST definitions.

mod expr;
mod query;

pub use expr::{CmpOp, ColumnRef, Term};
pub use query::{Condition, Query, QueryBuilder, Selector, TableDecl};
