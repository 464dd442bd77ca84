//! Arena configuration files and player construction

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use expectimax_engine::ExpectimaxPlayer;
use minimax_engine::MinimaxPlayer;
use random_engine::RandomPlayer;
use search_core::{DepthController, SearchConfig};
use serde::{Deserialize, Serialize};
use tile_game::{HeuristicWeights, Player, TileRules};
use tracing::warn;

use crate::session::SessionConfig;

/// Which kind of player to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Expectimax,
    Minimax,
    Random,
}

/// One player entry of an arena file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub kind: PlayerKind,
    /// Label in reports (defaults to the player's own name)
    #[serde(default)]
    pub name: Option<String>,
    /// Heuristic preset; ignored when `weights` is given
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub weights: Option<HeuristicWeights>,
    #[serde(default)]
    pub search: SearchConfig,
    /// Pick the expectimax depth per move from the number of empty cells
    #[serde(default)]
    pub adaptive: bool,
    /// Seed for the random player
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PlayerSpec {
    pub fn new(kind: PlayerKind) -> Self {
        Self {
            kind,
            name: None,
            preset: None,
            weights: None,
            search: SearchConfig::default(),
            adaptive: false,
            seed: None,
        }
    }

    pub fn weights(&self) -> Result<HeuristicWeights> {
        if let Some(weights) = &self.weights {
            return Ok(weights.clone());
        }
        match &self.preset {
            None => Ok(HeuristicWeights::default()),
            Some(name) => HeuristicWeights::preset(name).with_context(|| {
                format!(
                    "unknown heuristic preset '{name}' (expected one of {})",
                    HeuristicWeights::PRESETS.join(", ")
                )
            }),
        }
    }

    /// Build the player for boards described by `session`.
    pub fn build(&self, session: &SessionConfig) -> Result<Box<dyn Player>> {
        let rules = TileRules::new().with_target(session.target);
        let player: Box<dyn Player> = match self.kind {
            PlayerKind::Expectimax => {
                let mut player = ExpectimaxPlayer::new(self.weights()?, self.search.clone()).with_rules(rules);
                if self.adaptive {
                    let controller = DepthController::for_area(session.width * session.height);
                    player = player.with_adaptive_depth(controller);
                }
                Box::new(player)
            }
            PlayerKind::Minimax => {
                if self.adaptive {
                    warn!("adaptive depth only applies to expectimax players; using fixed depth");
                }
                Box::new(MinimaxPlayer::new(self.weights()?, self.search.clone()).with_rules(rules))
            }
            PlayerKind::Random => Box::new(RandomPlayer::new(self.seed)),
        };
        Ok(player)
    }

    /// Report label for a built player.
    pub fn label(&self, player: &dyn Player) -> String {
        self.name.clone().unwrap_or_else(|| player.name().to_string())
    }
}

/// Contents of an arena TOML file.
///
/// ```toml
/// name = "depth sweep"
/// output = "results.json"
///
/// [session]
/// games = 25
/// seed = 1
///
/// [[players]]
/// kind = "expectimax"
/// preset = "snake"
/// search = { depth = 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub name: String,
    /// Where to write the JSON report (None = don't save)
    pub output: Option<PathBuf>,
    pub session: SessionConfig,
    pub players: Vec<PlayerSpec>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            name: "arena".to_string(),
            output: None,
            session: SessionConfig::default(),
            players: Vec::new(),
        }
    }
}

impl ArenaConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid arena config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            bail!("no players configured");
        }
        if self.session.games == 0 {
            bail!("session must play at least one game");
        }
        if self.session.width < 2 || self.session.height < 2 {
            bail!(
                "board must be at least 2x2, got {}x{}",
                self.session.width,
                self.session.height
            );
        }
        for player in &self.players {
            player.weights()?;
            player.search.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
