//! sqeval CLI - evaluates JSON-described queries against a folder of JSON tables.
//!
//! The library half of the `sqeval` binary:
//!
//! - `format`: query, table and result JSON formats
//! - `source`: loading tables from a folder
//! - `error`: CLI errors

pub mod error;
pub mod format;
pub mod source;

pub use error::CliError;
pub use source::TableDirectory;

use sqeval_query::evaluate;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// One evaluation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Folder holding `<source>.table.json` files.
    pub table_folder: PathBuf,
    /// Query JSON file.
    pub query_file: PathBuf,
    /// Where the result table or the diagnostic is written.
    pub output_file: PathBuf,
    /// Pretty-print the result document.
    pub pretty: bool,
}

/// Loads the query and its tables, evaluates it and writes the output file.
///
/// A rejected query still produces an output file containing
/// `ERROR: <diagnostic>`; the diagnostic is then returned as
/// [`CliError::Query`].
pub fn run(config: &Config) -> Result<(), CliError> {
    let query = format::read_query(&config.query_file)?;
    debug!(
        select = query.select.len(),
        from = query.from.len(),
        conditions = query.where_clause.len(),
        "loaded query"
    );

    let source = TableDirectory::new(&config.table_folder).load_for_query(&query)?;

    match evaluate(&query, &source) {
        Ok(table) => {
            format::write_table_file(&config.output_file, &table, config.pretty)?;
            info!(
                rows = table.row_count(),
                output = %config.output_file.display(),
                "wrote result"
            );
            Ok(())
        }
        Err(diagnostic) => {
            fs::write(&config.output_file, format!("ERROR: {}\n", diagnostic))
                .map_err(|e| CliError::io(&config.output_file, e))?;
            Err(CliError::Query(diagnostic))
        }
    }
}
