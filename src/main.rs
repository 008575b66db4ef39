use std::path::PathBuf;

use albedo_tools::io::nsrdb_read::{NSRDB_METADATA_ROWS, ReadOptions};
use albedo_tools::io::{self, ExportFormat, table_write};
use albedo_tools::{Result, ToolError, pipeline};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Monthly(args) => execute_monthly(args),
    }
}

fn execute_monthly(args: MonthlyArgs) -> Result<()> {
    if !args.input.is_dir() {
        return Err(ToolError::MissingInput(args.input));
    }

    let options = ReadOptions {
        skip_rows: args.skip_rows,
        ..ReadOptions::default()
    };
    let table = pipeline::calculate_monthly_avg_albedo_with(&args.input, &options)?;

    match &args.output {
        Some(output) => {
            let format = args.resolve_format(output);
            pipeline::write_table(output, &table, format)
        }
        None => table_write::write_csv_to(std::io::stdout().lock(), &table),
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Average NSRDB surface-albedo exports into one value per month."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the monthly average albedo of a folder of yearly exports.
    Monthly(MonthlyArgs),
}

#[derive(clap::Args)]
struct MonthlyArgs {
    /// Folder containing the exported CSV files.
    #[arg(long)]
    input: PathBuf,

    /// Output file path. The table is printed to stdout as CSV when omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format. Guessed from the output extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatKind>,

    /// Metadata rows preceding the column header row in each file.
    #[arg(long, default_value_t = NSRDB_METADATA_ROWS)]
    skip_rows: usize,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatKind {
    Csv,
    Json,
    Excel,
}

impl From<FormatKind> for ExportFormat {
    fn from(kind: FormatKind) -> Self {
        match kind {
            FormatKind::Csv => ExportFormat::Csv,
            FormatKind::Json => ExportFormat::Json,
            FormatKind::Excel => ExportFormat::Excel,
        }
    }
}

impl MonthlyArgs {
    fn resolve_format(&self, output: &std::path::Path) -> ExportFormat {
        self.format
            .map(ExportFormat::from)
            .or_else(|| io::detect_format(output))
            .unwrap_or(ExportFormat::Csv)
    }
}
