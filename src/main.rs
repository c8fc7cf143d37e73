use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use heapbench::config;
use heapbench::display;
use heapbench::runner::{self, Sink};
use heapbench::types::BenchConfig;

#[derive(Parser)]
#[command(
    name = "heapbench",
    version,
    about = "Time a JVM benchmark run with configurable heap bounds"
)]
struct Cli {
    /// Minimum heap size in MB (-Xms)
    #[arg(long, value_name = "MB")]
    min_heap: Option<u32>,

    /// Maximum heap size in MB (-Xmx)
    #[arg(long, value_name = "MB")]
    max_heap: Option<u32>,

    /// Class or program to benchmark
    #[arg(long)]
    target: Option<String>,

    /// Interpreter binary to launch
    #[arg(long)]
    interpreter: Option<PathBuf>,

    /// Omit the -server flag
    #[arg(long)]
    no_server: bool,

    /// TOML config file; CLI flags override its values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,

    /// Discard the child's stdout and stderr
    #[arg(long, conflicts_with_all = ["stdout_file", "stderr_file"])]
    quiet: bool,

    /// Redirect the child's stdout to a file
    #[arg(long, value_name = "PATH")]
    stdout_file: Option<PathBuf>,

    /// Redirect the child's stderr to a file
    #[arg(long, value_name = "PATH")]
    stderr_file: Option<PathBuf>,

    /// Treat a non-zero child exit as an error
    #[arg(long)]
    strict: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => BenchConfig::default(),
    };

    if let Some(min) = cli.min_heap {
        config.min_heap_mb = min;
    }
    if let Some(max) = cli.max_heap {
        config.max_heap_mb = max;
    }
    if let Some(target) = cli.target {
        config.target = target;
    }
    if let Some(interpreter) = cli.interpreter {
        config.interpreter = interpreter;
    }
    if cli.no_server {
        config.server_mode = false;
    }

    config::validate(&config)?;

    let stdout_sink = resolve_sink(cli.stdout_file, cli.quiet);
    let stderr_sink = resolve_sink(cli.stderr_file, cli.quiet);

    let result = runner::benchmark(&config, &stdout_sink, &stderr_sink, cli.strict)?;

    let output = if cli.json {
        display::format_json(&result)
    } else {
        display::format_text(&result)
    };
    print!("{}", output);

    Ok(())
}

fn resolve_sink(file: Option<PathBuf>, quiet: bool) -> Sink {
    match (file, quiet) {
        (Some(path), _) => Sink::File(path),
        (None, true) => Sink::Null,
        (None, false) => Sink::Inherit,
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
