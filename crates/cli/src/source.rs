//! Directory-backed table loading.

use crate::error::CliError;
use crate::format;
use sqeval_query::ast::Query;
use sqeval_query::InMemoryDataSource;
use std::path::PathBuf;
use tracing::debug;

/// File suffix of table files inside a table folder.
pub const TABLE_FILE_SUFFIX: &str = ".table.json";

/// A folder of `<name>.table.json` files.
#[derive(Debug, Clone)]
pub struct TableDirectory {
    root: PathBuf,
}

impl TableDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file holding table `source`.
    pub fn table_path(&self, source: &str) -> PathBuf {
        self.root.join(format!("{}{}", source, TABLE_FILE_SUFFIX))
    }

    /// Loads every table the query's FROM clause names, keyed by alias.
    ///
    /// Fails on the first table file that cannot be opened or parsed.
    pub fn load_for_query(&self, query: &Query) -> Result<InMemoryDataSource, CliError> {
        let mut source = InMemoryDataSource::new();
        for decl in &query.from {
            let path = self.table_path(&decl.source);
            let table = format::read_table(&path)?;
            debug!(
                alias = %decl.alias,
                path = %path.display(),
                rows = table.row_count(),
                columns = table.column_count(),
                "loaded table"
            );
            source.add_table(decl.alias.clone(), table);
        }
        Ok(source)
    }
}
