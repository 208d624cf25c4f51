//! Filter executor.

use crate::ast::{CmpOp, Condition, Term};
use crate::diagnostic::{Diagnostic, Result};
use crate::executor::CrossSchema;
use crate::resolver::Resolver;
use alloc::vec::Vec;
use sqeval_core::{Row, SqlType, Value};

/// A condition operand with its column already resolved to a row position.
#[derive(Clone, Debug)]
enum Operand {
    Column(usize),
    Literal(Value),
}

impl Operand {
    /// Resolves `term` once, returning the operand and its type.
    fn compile(resolver: &Resolver<'_>, term: &Term) -> Result<(Self, SqlType)> {
        match term {
            Term::Literal(value) => Ok((Operand::Literal(value.clone()), value.sql_type())),
            Term::Column(column) => resolver
                .resolve_column(column)
                .map(|c| (Operand::Column(c.index), c.sql_type)),
        }
    }

    #[inline]
    fn value<'r>(&'r self, row: &'r Row) -> &'r Value {
        match self {
            Operand::Column(index) => &row.values()[*index],
            Operand::Literal(value) => value,
        }
    }
}

#[derive(Clone, Debug)]
struct CompiledCondition {
    left: Operand,
    op: CmpOp,
    right: Operand,
}

impl CompiledCondition {
    #[inline]
    fn eval(&self, row: &Row) -> bool {
        let left = self.left.value(row);
        let right = self.right.value(row);
        match left.compare(right) {
            Some(ordering) => self.op.matches(ordering),
            None => unreachable!(
                "validated condition compares {} with {}",
                left.sql_type(),
                right.sql_type()
            ),
        }
    }
}

/// Filter executor - keeps the rows satisfying every condition of a WHERE clause.
#[derive(Clone, Debug)]
pub struct FilterExecutor {
    conditions: Vec<CompiledCondition>,
}

impl FilterExecutor {
    /// Validates `conditions` against the resolver's schema and compiles them.
    pub fn new(resolver: &Resolver<'_>, conditions: &[Condition]) -> Result<Self> {
        let conditions = conditions
            .iter()
            .map(|condition| {
                let (left, left_type) = Operand::compile(resolver, &condition.left)?;
                let (right, right_type) = Operand::compile(resolver, &condition.right)?;
                if left_type != right_type {
                    return Err(Diagnostic::incompatible_types(
                        condition.op,
                        left_type,
                        right_type,
                    ));
                }
                Ok(CompiledCondition {
                    left,
                    op: condition.op,
                    right,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { conditions })
    }

    /// Returns true if `row` satisfies every condition.
    ///
    /// Evaluation stops at the first failing condition.
    #[inline]
    pub fn is_match(&self, row: &Row) -> bool {
        self.conditions.iter().all(|condition| condition.eval(row))
    }

    /// Executes the filter. Retained rows keep their input order.
    pub fn execute(&self, rows: Vec<Row>) -> Vec<Row> {
        if self.conditions.is_empty() {
            return rows;
        }
        let input = rows.len();
        let retained: Vec<Row> = rows.into_iter().filter(|row| self.is_match(row)).collect();
        tracing::trace!(input, retained = retained.len(), "filtered rows");
        retained
    }
}

/// Filters `rows` laid out by `schema` with the conjunction of `conditions`.
pub fn filter(schema: &CrossSchema, rows: Vec<Row>, conditions: &[Condition]) -> Result<Vec<Row>> {
    let resolver = Resolver::new(schema);
    Ok(FilterExecutor::new(&resolver, conditions)?.execute(rows))
}
