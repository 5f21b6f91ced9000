//! Term Pong entry point
//!
//! Parses the command line, sets up logging and hands over to the terminal shell.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

use term_pong::{GameMode, Settings, term};

#[derive(Parser)]
#[command(name = "term-pong", version, about = "Pong in the terminal")]
struct Cli {
    /// JSON settings file; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Two human players (not implemented yet)
    #[arg(long)]
    two_player: bool,
    /// Tick period in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Points needed to win
    #[arg(long)]
    winning_score: Option<u32>,
    /// Write logs here instead of discarding them
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Print the effective settings as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_file.as_deref())?;

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if cli.two_player {
        settings.mode = GameMode::TwoPlayer;
    }
    if let Some(tick_ms) = cli.tick_ms {
        settings.tick_ms = tick_ms;
    }
    if let Some(winning_score) = cli.winning_score {
        settings.winning_score = winning_score;
    }

    if cli.dump_config {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    let rules = settings.rules().context("refusing to start")?;
    log::info!("Term Pong starting ({})", settings.mode.as_str());
    term::run(&settings, rules).context("terminal session failed")?;
    log::info!("Term Pong exited");
    Ok(())
}

/// Logs would corrupt the alternate screen, so they go to a file or nowhere
/// unless `RUST_LOG` asks for stderr explicitly.
fn init_logger(log_file: Option<&Path>) -> Result<()> {
    let default_level = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}
