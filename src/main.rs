use std::io;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use jobtop::config::Config;
use jobtop::error::Result;
use jobtop::pipeline;
use jobtop::report::Format;

/// Rank storage servers by I/O load and show the jobs behind it.
#[derive(Parser)]
#[command(name = "jobtop", version)]
struct Cli {
    /// TOML config file
    #[arg(short, long, env = "JOBTOP_CONFIG")]
    config: Option<PathBuf>,

    /// Rows per ranking, overrides top_lines
    #[arg(short = 'n', long)]
    top: Option<usize>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// More logging on stderr, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(top) = cli.top {
        config.top_lines = top;
        config.validate()?;
    }
    debug!("{:?}", config);

    let mut out = io::stdout();
    pipeline::run(&config, cli.format, &mut out).await
}

// stdout carries the report, so logs go to stderr
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
