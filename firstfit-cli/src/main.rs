//! ## firstfit
//! Interactive first-fit allocator session, or replay of a command script.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use firstfit_cli::{Cli, Interpreter};
use firstfit_config::FirstFitConfig;
use firstfit_core::alloc::{Alignment, Arena};
use firstfit_telemetry::{EventLogger, MetricsRecorder};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FirstFitConfig::load_from_path(path)?,
        None => FirstFitConfig::load()?,
    };
    EventLogger::init(&config.telemetry.log_level).map_err(|e| anyhow!(e))?;
    info!(?config, "configuration loaded");

    let mut arena = Arena::with_alignment(Alignment::new(config.arena.alignment)?);
    if let Some(capacity) = cli.capacity.or(config.arena.initial_capacity) {
        arena.init(capacity);
    }

    let metrics = if config.telemetry.metrics {
        Some(MetricsRecorder::new()?)
    } else {
        None
    };

    let mut session = Interpreter::new(arena, io::stdout().lock()).with_metrics(metrics);

    match &cli.script {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening script {}", path.display()))?;
            session.run(BufReader::new(file))?;
        }
        None if cli.interactive() => {
            if config.repl.show_banner {
                session.banner()?;
            }
            let mut session = session.with_prompt(config.repl.prompt.clone());
            session.run(io::stdin().lock())?;
        }
        None => session.run(io::stdin().lock())?,
    }

    Ok(())
}
