//! Validation diagnostics.
//!
//! Every diagnostic is detected before any row is materialized. Rendering
//! follows the `Column reference "x" ...` wording the CLI reports to users.

use crate::ast::CmpOp;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use sqeval_core::SqlType;

/// Result type alias for query validation.
pub type Result<T> = core::result::Result<T, Diagnostic>;

/// A structured validation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A column reference or FROM declaration names an alias with no table.
    UnknownTable {
        table: String,
    },
    /// The column does not exist in the named table, or in any table if `table` is None.
    UnknownColumn {
        column: String,
        table: Option<String>,
    },
    /// An unqualified column is present in more than one FROM table.
    AmbiguousColumn {
        column: String,
        /// Matching aliases, in FROM order.
        tables: Vec<String>,
    },
    /// A WHERE condition compares operands of different types.
    IncompatibleTypes {
        op: CmpOp,
        left: SqlType,
        right: SqlType,
    },
    /// The FROM list declares the same alias twice.
    DuplicateTableAlias {
        alias: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownTable { table } => {
                write!(f, "Unknown table name \"{}\".", table)
            }
            Diagnostic::UnknownColumn {
                column,
                table: Some(table),
            } => {
                write!(
                    f,
                    "Column reference \"{}\" not found in table \"{}\"",
                    column, table
                )
            }
            Diagnostic::UnknownColumn { column, table: None } => {
                write!(f, "Column reference \"{}\" not found in any table", column)
            }
            Diagnostic::AmbiguousColumn { column, tables } => {
                write!(
                    f,
                    "Column reference \"{}\" is ambiguous; present in multiple tables: ",
                    column
                )?;
                for (i, table) in tables.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "\"{}\"", table)?;
                }
                f.write_str(".")
            }
            Diagnostic::IncompatibleTypes { op, left, right } => {
                write!(f, "Incompatible types to \"{}\": {} and {}.", op, left, right)
            }
            Diagnostic::DuplicateTableAlias { alias } => {
                write!(f, "Duplicate table alias \"{}\" in FROM clause.", alias)
            }
        }
    }
}

impl Diagnostic {
    /// Creates an unknown table diagnostic.
    pub fn unknown_table(table: impl Into<String>) -> Self {
        Diagnostic::UnknownTable {
            table: table.into(),
        }
    }

    /// Creates an unknown column diagnostic.
    pub fn unknown_column(column: impl Into<String>, table: Option<&str>) -> Self {
        Diagnostic::UnknownColumn {
            column: column.into(),
            table: table.map(String::from),
        }
    }

    /// Creates an ambiguous column diagnostic.
    pub fn ambiguous_column(column: impl Into<String>, tables: Vec<String>) -> Self {
        Diagnostic::AmbiguousColumn {
            column: column.into(),
            tables,
        }
    }

    /// Creates an incompatible types diagnostic.
    pub fn incompatible_types(op: CmpOp, left: SqlType, right: SqlType) -> Self {
        Diagnostic::IncompatibleTypes { op, left, right }
    }

    /// Creates a duplicate alias diagnostic.
    pub fn duplicate_table_alias(alias: impl Into<String>) -> Self {
        Diagnostic::DuplicateTableAlias {
            alias: alias.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_diagnostic_display() {
        assert_eq!(
            Diagnostic::unknown_table("b").to_string(),
            "Unknown table name \"b\"."
        );
        assert_eq!(
            Diagnostic::unknown_column("x", Some("a")).to_string(),
            "Column reference \"x\" not found in table \"a\""
        );
        assert_eq!(
            Diagnostic::unknown_column("x", None).to_string(),
            "Column reference \"x\" not found in any table"
        );
        assert_eq!(
            Diagnostic::ambiguous_column("id", vec!["a".into(), "b".into()]).to_string(),
            "Column reference \"id\" is ambiguous; present in multiple tables: \"a\", \"b\"."
        );
        assert_eq!(
            Diagnostic::incompatible_types(CmpOp::Gt, SqlType::Str, SqlType::Int).to_string(),
            "Incompatible types to \">\": str and int."
        );
        assert_eq!(
            Diagnostic::duplicate_table_alias("a").to_string(),
            "Duplicate table alias \"a\" in FROM clause."
        );
    }
}
