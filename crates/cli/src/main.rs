use clap::Parser;
use sqeval_cli::{run, CliError, Config};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sqeval")]
#[command(about = "Evaluate a JSON-described SELECT/FROM/WHERE query over JSON tables")]
struct Args {
    /// Folder containing <name>.table.json files
    table_folder: PathBuf,

    /// Query JSON file
    sql_json_file: PathBuf,

    /// Output file for the result table or error message
    output_file: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Pretty-print the result JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config {
        table_folder: args.table_folder,
        query_file: args.sql_json_file,
        output_file: args.output_file,
        pretty: args.pretty,
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        // Already written to the output file.
        Err(CliError::Query(_)) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
