//! Arena for automated sliding-tile players
//!
//! This crate provides infrastructure for:
//! - Playing batches of seeded games with one player
//! - Comparing several players configured from a TOML file
//! - Saving results as JSON and printing score reports
//!
//! # Usage
//!
//! ```bash
//! # 25 games with a depth-2 expectimax player
//! cargo run -p arena -- play --player expectimax --depth 2
//!
//! # Compare every player listed in a config file
//! cargo run -p arena -- compare --config arena.toml --games 10
//! ```

mod config;
mod results;
mod session;

pub use config::*;
pub use results::*;
pub use session::*;

use anyhow::{Context, Result};
use tracing::info;

/// Play one session per configured player and collect the results.
pub fn run_arena(config: &ArenaConfig) -> Result<Report> {
    config.validate()?;
    // Every player sees the same spawn seeds.
    let mut session_config = config.session.clone();
    session_config.seed.get_or_insert_with(rand::random);
    let session = Session::new(session_config);
    let mut report = Report::new(&config.name);

    for spec in &config.players {
        let mut player = spec.build(&config.session)?;
        let label = spec.label(player.as_ref());
        info!(player = %label, games = config.session.games, "starting session");

        let mut result = session
            .run(player.as_mut())
            .with_context(|| format!("session for {label} failed"))?;
        result.player = label;
        report.add_session(result);
    }

    if let Some(path) = &config.output {
        report.save(path)?;
        info!(path = %path.display(), "report saved");
    }
    Ok(report)
}
