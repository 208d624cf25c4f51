//! Column definition for sqeval table schemas.

use crate::types::SqlType;
use alloc::string::String;

/// A column definition: a name and a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnDef {
    name: String,
    sql_type: SqlType,
}

impl ColumnDef {
    /// Creates a new column definition.
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
        }
    }

    /// Returns the column name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column type.
    #[inline]
    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }
}
