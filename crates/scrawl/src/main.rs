use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use scrawl_config::EditorConfig;

/// A minimal modal-free terminal text editor.
#[derive(Parser, Debug)]
#[command(name = "scrawl", version, about)]
struct Cli {
    /// File to edit.
    #[arg(required_unless_present = "print_config")]
    file: Option<PathBuf>,

    /// JSON file with editor settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file. The terminal is taken by the editor, so
    /// nothing is logged without it.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Print the effective settings as JSON and exit.
    #[arg(long = "print-config")]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli
        .config
        .as_deref()
        .map(EditorConfig::load)
        .unwrap_or_default();

    if cli.print_config {
        println!("{}", config.to_json_pretty());
        return Ok(());
    }

    let Some(file) = cli.file else {
        anyhow::bail!("no file given");
    };

    tracing::info!("Starting scrawl on {}", file.display());

    let startup_args = scrawl_tui::StartupArgs { file };
    let mut app = scrawl_tui::App::open(&startup_args, &config)?;
    app.run()
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
