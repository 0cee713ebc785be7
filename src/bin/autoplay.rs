//! Autoplay
//!
//! Plays one game between two automated players and logs every move.
//!
//! Usage: `autoplay [seed] [random]`
//!
//! Set `RUST_LOG=debug` to see resolver detail.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use snakes_ladders::{BoardLayout, GameConfig, GameSession, RedirectKind};

/// Hard stop in case a seed produces an unusually long game.
const MAX_TURNS: u32 = 2000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(raw) => raw.parse::<u64>().with_context(|| format!("seed must be a number, got {raw:?}"))?,
        None => rand::random(),
    };
    let layout = match args.next().as_deref() {
        Some("random") => BoardLayout::Random { snakes: 8, ladders: 8 },
        Some(other) => anyhow::bail!("unknown layout {other:?}, expected \"random\""),
        None => BoardLayout::Classic,
    };

    info!("snakes-ladders autoplay v{}", env!("CARGO_PKG_VERSION"));
    info!("Seed: {}", seed);

    let config = GameConfig::default().with_seed(seed).with_layout(layout);
    let mut session = GameSession::new(config).context("failed to start session")?;

    for (from, redirect) in session.state().topology().redirects() {
        let kind = match redirect.kind {
            RedirectKind::Snake => "snake",
            RedirectKind::Ladder => "ladder",
        };
        info!("{} {} -> {}", kind, from, redirect.to);
    }

    info!("=== Starting Game ===");
    while !session.is_finished() && session.state().turn_number() <= MAX_TURNS {
        let (roll, record) = session.play_turn()?;
        let from = record.from.map_or_else(|| "start".to_string(), |s| s.to_string());

        match record.redirect {
            Some(RedirectKind::Snake) => info!(
                "Turn {}: {} rolled {}, {} -> {}, bitten, slides to {}",
                record.turn, record.player, roll, from, record.landed, record.to
            ),
            Some(RedirectKind::Ladder) => info!(
                "Turn {}: {} rolled {}, {} -> {}, climbs to {}",
                record.turn, record.player, roll, from, record.landed, record.to
            ),
            None if record.bounced => info!(
                "Turn {}: {} rolled {}, {} bounces back to {}",
                record.turn, record.player, roll, from, record.to
            ),
            None => info!(
                "Turn {}: {} rolled {}, {} -> {}",
                record.turn, record.player, roll, from, record.to
            ),
        }
    }

    info!("=== Result ===");
    match session.winner() {
        Some(winner) => info!("{} wins after {} moves", winner, session.state().history().len()),
        None => info!("No winner after {} moves", MAX_TURNS),
    }

    let view = session.get_game_state();
    info!("Final positions: {:?}", view.players);

    Ok(())
}
