//! Property-based tests for the evaluation pipeline.
//!
//! These tests check the cardinality and ordering laws of the cross product,
//! filter and projection stages on randomly generated tables.

use proptest::prelude::*;
use sqeval_core::schema::{Table, TableBuilder};
use sqeval_core::{Row, SqlType, Value};
use sqeval_query::ast::{CmpOp, ColumnRef, Condition, Query, Selector, Term};
use sqeval_query::executor::{build_cross_product, filter, project};
use sqeval_query::{evaluate, InMemoryDataSource};

/// Strategy for generating an operator.
fn op_strategy() -> impl Strategy<Value = CmpOp> {
    prop::sample::select(CmpOp::ALL.to_vec())
}

/// Strategy for generating a table with an int column `k` and a str column `s`.
///
/// Column names are prefixed so tables in the same query do not collide.
fn table_strategy(prefix: &'static str, max_rows: usize) -> impl Strategy<Value = Table> {
    prop::collection::vec((-20i64..20, "[a-c]{0,2}"), 0..max_rows).prop_map(move |rows| {
        let mut builder = TableBuilder::new()
            .add_column(&format!("{}k", prefix), SqlType::Int)
            .unwrap()
            .add_column(&format!("{}s", prefix), SqlType::Str)
            .unwrap();
        for (k, s) in rows {
            builder = builder.add_row(vec![Value::Int(k), Value::Str(s)]).unwrap();
        }
        builder.build()
    })
}

/// Returns true if `needle` is an order-preserving subsequence of `haystack`.
fn is_subsequence(needle: &[Row], haystack: &[Row]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|row| rest.any(|candidate| candidate == row))
}

proptest! {
    /// Property: row count is the product and width the sum over the FROM tables.
    #[test]
    fn cross_product_cardinality(
        a in table_strategy("a", 6),
        b in table_strategy("b", 6),
        c in table_strategy("c", 6),
    ) {
        let product = build_cross_product(&[("a", &a), ("b", &b), ("c", &c)]);
        prop_assert_eq!(product.rows.len(), a.row_count() * b.row_count() * c.row_count());
        prop_assert_eq!(
            product.schema.width(),
            a.column_count() + b.column_count() + c.column_count()
        );
        for row in &product.rows {
            prop_assert_eq!(row.len(), product.schema.width());
        }
    }

    /// Property: filtering keeps an order-preserving subset of the cross product,
    /// and every retained row satisfies the condition.
    #[test]
    fn filter_narrows_and_preserves_order(
        a in table_strategy("a", 8),
        b in table_strategy("b", 8),
        op in op_strategy(),
        literal in -20i64..20,
    ) {
        let product = build_cross_product(&[("a", &a), ("b", &b)]);
        let conditions = [
            Condition::new(Term::column("a", "ak"), op, Term::literal(literal)),
        ];
        let filtered = filter(&product.schema, product.rows.clone(), &conditions).unwrap();

        prop_assert!(filtered.len() <= product.rows.len());
        prop_assert!(is_subsequence(&filtered, &product.rows));
        for row in &filtered {
            let ordering = row.get(0).unwrap().compare(&Value::Int(literal)).unwrap();
            prop_assert!(op.matches(ordering));
        }
        let expected = product
            .rows
            .iter()
            .filter(|row| op.matches(row.get(0).unwrap().compare(&Value::Int(literal)).unwrap()))
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }

    /// Property: an empty WHERE clause returns the cross product unchanged.
    #[test]
    fn empty_where_is_identity(
        a in table_strategy("a", 8),
        b in table_strategy("b", 8),
    ) {
        let product = build_cross_product(&[("a", &a), ("b", &b)]);
        let filtered = filter(&product.schema, product.rows.clone(), &[]).unwrap();
        prop_assert_eq!(filtered, product.rows);
    }

    /// Property: projection neither drops nor duplicates rows.
    #[test]
    fn projection_preserves_row_count(
        a in table_strategy("a", 8),
        b in table_strategy("b", 8),
        op in op_strategy(),
    ) {
        let product = build_cross_product(&[("a", &a), ("b", &b)]);
        let conditions = [
            Condition::new(Term::column("a", "as"), op, Term::column("b", "bs")),
        ];
        let filtered = filter(&product.schema, product.rows, &conditions).unwrap();
        let select = [
            Selector::new("left", ColumnRef::unqualified("ak")),
            Selector::new("right", ColumnRef::qualified("b", "bk")),
        ];
        let projected = project(&product.schema, &filtered, &select).unwrap();

        prop_assert_eq!(projected.row_count(), filtered.len());
        for (out, input) in projected.rows().iter().zip(&filtered) {
            prop_assert_eq!(out.get(0), input.get(0));
            prop_assert_eq!(out.get(1), input.get(2));
        }
    }

    /// Property: selecting every column of a single table reproduces it.
    #[test]
    fn single_table_round_trip(t in table_strategy("t", 12)) {
        let query = Query::builder()
            .from("T", "t")
            .select("tk", "T", "tk")
            .select("ts", "T", "ts")
            .build();
        let source = InMemoryDataSource::new().with_table("T", t.clone());

        let result = evaluate(&query, &source).unwrap();
        prop_assert_eq!(result, t);
    }
}
