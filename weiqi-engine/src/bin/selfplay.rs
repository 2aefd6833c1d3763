//! Let the automated opponent play both colors and print the final position.
//!
//! Environment: `WEIQI_SIZE` (default 9), `WEIQI_SEED` (random when unset),
//! `WEIQI_MAX_MOVES` (default 200), `RUST_LOG`.

use weiqi_engine::{AiOutcome, Engine, GameConfig};

const DEFAULT_FILTER: &str = "weiqi_engine=debug";

/// `None` when `raw` is missing or does not parse; the latter is logged.
fn parse_setting<T: std::str::FromStr>(key: &str, raw: Option<String>) -> Option<T> {
    let v = raw?;
    v.parse()
        .inspect_err(|_| tracing::warn!("Ignoring invalid {key}={v}"))
        .ok()
}

fn env_opt<T: std::str::FromStr>(key: &str) -> Option<T> {
    parse_setting(key, std::env::var(key).ok())
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env_opt(key).unwrap_or(default)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .init();

    let config = GameConfig {
        size: env_or("WEIQI_SIZE", weiqi_engine::config::DEFAULT_SIZE),
        seed: env_opt("WEIQI_SEED"),
        ..GameConfig::default()
    };
    let max_moves: usize = env_or("WEIQI_MAX_MOVES", 200);

    let mut engine = Engine::new(config);
    let mut turns = 0;
    while !engine.is_over() && turns < max_moves {
        engine.set_ai(Some(engine.turn()));
        match engine.ai_turn() {
            Ok(AiOutcome::Play(out)) if !out.captured.is_empty() => {
                tracing::info!("{} captured {:?}", out.stone, out.captured);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Self-play stopped: {e}");
                break;
            }
        }
        turns += 1;
    }

    let captures = engine.captures();
    println!("{}", engine.board());
    println!(
        "{turns} turns, {} placements, {}; captures B {} / W {}",
        engine.move_count(),
        engine.stage(),
        captures.black,
        captures.white
    );
}
