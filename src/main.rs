use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use practice_feed::app::AppContext;
use practice_feed::cli::{commands, Cli, Commands};
use practice_feed::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Tui { log } => init_tracing(log.as_deref(), false)?,
        _ => init_tracing(None, true)?,
    }

    if let Commands::Format { kind } = &cli.command {
        println!("{}", commands::run_format(kind));
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ctx = AppContext::new(config, cli.token)?;

    match cli.command {
        Commands::List { pages } => {
            commands::list_feed(&ctx, pages).await?;
        }
        Commands::Tui { .. } => {
            practice_feed::tui::run(Arc::new(ctx)).await?;
        }
        Commands::Format { .. } => {}
    }

    Ok(())
}

/// Logs go to stderr, or only to `log_file` while the TUI owns the terminal.
fn init_tracing(log_file: Option<&Path>, to_stderr: bool) -> anyhow::Result<()> {
    let file_layer = match log_file {
        Some(path) => Some(
            fmt::layer()
                .with_writer(Mutex::new(File::create(path)?))
                .with_ansi(false),
        ),
        None => None,
    };
    let stderr_layer = to_stderr.then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .with(EnvFilter::from_default_env())
        .init();

    Ok(())
}
