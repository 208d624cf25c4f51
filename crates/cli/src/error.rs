use sqeval_query::Diagnostic;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum CliError {
    /// A file could not be read or written.
    Io { path: String, message: String },
    /// A file is not valid query or table JSON.
    Json { path: String, message: String },
    /// A table file is well-formed JSON but violates the table invariants.
    Schema { path: String, message: String },
    /// The query failed validation. The diagnostic has already been written to the output file.
    Query(Diagnostic),
}

impl CliError {
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        CliError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn json(path: &Path, err: impl fmt::Display) -> Self {
        CliError::Json {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn schema(path: &Path, err: impl fmt::Display) -> Self {
        CliError::Schema {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io { path, message } => write!(f, "IO error on \"{}\": {}", path, message),
            CliError::Json { path, message } => {
                write!(f, "Error loading \"{}\" as JSON: {}", path, message)
            }
            CliError::Schema { path, message } => {
                write!(f, "Invalid table in \"{}\": {}", path, message)
            }
            CliError::Query(diagnostic) => write!(f, "ERROR: {}", diagnostic),
        }
    }
}

impl std::error::Error for CliError {}
