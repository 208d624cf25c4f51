//! Expression AST definitions: column references, terms and comparison operators.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use sqeval_core::Value;

/// Reference to a column, optionally qualified by a FROM alias.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    /// Table alias. An absent or empty alias means the reference is unqualified.
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnRef {
    /// Creates a new column reference.
    pub fn new(table: Option<String>, name: impl Into<String>) -> Self {
        Self {
            table,
            name: name.into(),
        }
    }

    /// Creates a reference qualified by a table alias.
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Some(table.into()), name)
    }

    /// Creates an unqualified reference.
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self::new(None, name)
    }

    /// Returns the table alias, treating an empty alias as absent.
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref().filter(|t| !t.is_empty())
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.table() {
            Some(table) => write!(f, "{}.{}", table, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// One side of a WHERE condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    /// Column reference.
    Column(ColumnRef),
    /// Literal value.
    Literal(Value),
}

impl Term {
    /// Creates a qualified column term.
    pub fn column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Term::Column(ColumnRef::qualified(table, name))
    }

    /// Creates an unqualified column term.
    pub fn unqualified(name: impl Into<String>) -> Self {
        Term::Column(ColumnRef::unqualified(name))
    }

    /// Creates a literal term.
    pub fn literal(value: impl Into<Value>) -> Self {
        Term::Literal(value.into())
    }
}

/// Comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CmpOp {
    /// All operators, in declaration order.
    pub const ALL: [CmpOp; 6] = [
        CmpOp::Eq,
        CmpOp::Ne,
        CmpOp::Gt,
        CmpOp::Ge,
        CmpOp::Lt,
        CmpOp::Le,
    ];

    /// Returns the SQL symbol of this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ne => "!=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
        }
    }

    /// Parses an operator from its SQL symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        CmpOp::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Applies the operator to the result of comparing the left operand with the right.
    #[inline]
    pub fn matches(&self, ordering: Ordering) -> bool {
        match self {
            CmpOp::Eq => ordering == Ordering::Equal,
            CmpOp::Ne => ordering != Ordering::Equal,
            CmpOp::Gt => ordering == Ordering::Greater,
            CmpOp::Ge => ordering != Ordering::Less,
            CmpOp::Lt => ordering == Ordering::Less,
            CmpOp::Le => ordering != Ordering::Greater,
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
