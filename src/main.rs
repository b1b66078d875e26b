// Command-line entry point for RowTrace.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use rowtrace::api::server;
use rowtrace::application::FlattenUsecase;
use rowtrace::infrastructure::concurrency::init_thread_pool;
use rowtrace::infrastructure::project_loader::ProjectLoader;
use rowtrace::infrastructure::{EstreeJsonSource, JsonRowExporter};
use rowtrace::ports::table_exporter::TableExporter;
use rowtrace::ports::RowExporter;
use rowtrace::FlattenOptions;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// ESTree JSON syntax tree file (can specify multiple)
    #[arg(short, long, required = false)]
    input: Vec<PathBuf>,

    /// Folder(s) scanned recursively for *.json syntax trees
    #[arg(short = 'd', long, required = false)]
    folder: Vec<PathBuf>,

    /// Output file path (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Fail on unsupported node kinds instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Worker threads (defaults to half the cores)
    #[arg(long)]
    jobs: Option<usize>,

    /// Run the JSON-lines API server on this port instead of flattening files
    #[arg(long)]
    serve: Option<u16>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(port) = cli.serve {
        return server::start_server(port);
    }

    let mut inputs = cli.input.clone();
    for folder in &cli.folder {
        inputs.extend(ProjectLoader::collect_trees(folder)?);
    }
    if inputs.is_empty() {
        bail!("Please provide at least one --input <file> or --folder <dir>");
    }
    tracing::info!(files = inputs.len(), "collected syntax trees");

    init_thread_pool(cli.jobs)?;

    let exporter: &dyn RowExporter = match cli.format {
        OutputFormat::Table => &TableExporter,
        OutputFormat::Json => &JsonRowExporter,
    };
    let usecase = FlattenUsecase {
        source: &EstreeJsonSource,
        exporter,
        options: FlattenOptions { strict: cli.strict },
    };

    let rendered = usecase.run(&inputs, cli.output.as_deref())?;
    if cli.output.is_none() {
        std::io::stdout().write_all(rendered.as_bytes())?;
    }

    Ok(())
}
