//! Data type definitions for sqeval.
//!
//! This module defines the closed set of column types a table may declare.

use core::fmt;

/// Supported column types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// 64-bit signed integer
    Int,
    /// UTF-8 string
    Str,
}

impl SqlType {
    /// Returns the external name of this type (`int` or `str`).
    pub fn name(&self) -> &'static str {
        match self {
            SqlType::Int => "int",
            SqlType::Str => "str",
        }
    }

    /// Parses an external type name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(SqlType::Int),
            "str" => Some(SqlType::Str),
            _ => None,
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
