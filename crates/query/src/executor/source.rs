//! Access to the caller's loaded tables, keyed by FROM alias.

use alloc::collections::BTreeMap;
use alloc::string::String;
use hashbrown::HashMap;
use sqeval_core::schema::Table;

/// Maps FROM aliases to already-loaded tables.
pub trait DataSource {
    /// Returns the table bound to `alias`, if any.
    fn get_table(&self, alias: &str) -> Option<&Table>;
}

impl DataSource for HashMap<String, Table> {
    fn get_table(&self, alias: &str) -> Option<&Table> {
        self.get(alias)
    }
}

impl DataSource for BTreeMap<String, Table> {
    fn get_table(&self, alias: &str) -> Option<&Table> {
        self.get(alias)
    }
}

/// A simple in-memory data source for tests and embedding callers.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDataSource {
    tables: HashMap<String, Table>,
}

impl InMemoryDataSource {
    /// Creates a new empty in-memory data source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `alias` to `table`, replacing any previous binding.
    pub fn add_table(&mut self, alias: impl Into<String>, table: Table) {
        self.tables.insert(alias.into(), table);
    }

    /// Builder-style variant of [`add_table`](Self::add_table).
    pub fn with_table(mut self, alias: impl Into<String>, table: Table) -> Self {
        self.add_table(alias, table);
        self
    }

    /// Returns the number of bound aliases.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no alias is bound.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl DataSource for InMemoryDataSource {
    fn get_table(&self, alias: &str) -> Option<&Table> {
        self.tables.get(alias)
    }
}
