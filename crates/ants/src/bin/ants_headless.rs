//! # Ants Headless
//!
//! Plays computer-vs-computer games on the emulated screen with no window,
//! logging every move and checking that all drawing fits the vertical blank.
//!
//! ```bash
//! RUST_LOG=info ants_headless --games 10 --settings ants.sav
//! ```

use std::path::PathBuf;

use ants::rendering::AssetBank;
use ants::rules::{FileStore, GameConfig, MemoryStore, SettingsStore};
use ants::shared::Player;
use ants::{Table, TableEvent, TurnOutcome};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Runs Ants games without a display.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML game configuration. Defaults are used when omitted.
    #[arg(long, env = "ANTS_CONFIG")]
    config: Option<PathBuf>,

    /// Settings file holding the win counts. Kept in memory when omitted.
    #[arg(long, env = "ANTS_SETTINGS")]
    settings: Option<PathBuf>,

    /// Overrides the configured deal seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u32,
}

fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    tracing::info!(args = ?args, "ants headless starting");

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    // No pads are attached here, so a human seat could never move.
    let replaced = config.players.computers_only();
    if replaced > 0 {
        tracing::warn!(replaced, "headless run has no pads, human seats play as the computer");
    }
    let store: Box<dyn SettingsStore> = match &args.settings {
        Some(path) => Box::new(FileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };

    let mut table = Table::new(config, AssetBank::procedural()?, store)?;
    let events = table.events();

    for game in 1..=args.games {
        table.start_game();
        let outcome = loop {
            let outcome = table.take_turn()?;
            for event in events.drain() {
                if let TableEvent::MovePlayed(record) = event {
                    tracing::info!(
                        player = ?record.player,
                        action = ?record.action,
                        card = ?record.card,
                        "move"
                    );
                }
            }
            if outcome != TurnOutcome::Continue {
                break outcome;
            }
        };
        println!("game {game}: {outcome:?} after {} turns", table.game().turn());
    }

    let settings = table.settings();
    println!(
        "wins: player one {}, player two {}",
        settings.wins(Player::One),
        settings.wins(Player::Two)
    );
    let stats = table.stats();
    println!("{stats}");
    if !stats.within_budget() {
        anyhow::bail!("{} frames overran the vertical blank", stats.overruns);
    }
    Ok(())
}
