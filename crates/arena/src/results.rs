//! Session results storage and reporting

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::SessionResult;

/// Results of every session in one arena run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Name/description of the run
    pub name: String,
    pub sessions: Vec<SessionResult>,
}

impl Report {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sessions: Vec::new(),
        }
    }

    pub fn add_session(&mut self, session: SessionResult) {
        self.sessions.push(session);
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Arena: {} ===\n\n", self.name));

        report.push_str(&format!(
            "{:<24} {:>6} {:>11} {:>10} {:>11} {:>9} {:>5}\n",
            "Player", "Games", "Avg total", "Best total", "Avg score", "Max tile", "Won"
        ));
        report.push_str(&"-".repeat(82));
        report.push('\n');

        for session in &self.sessions {
            let max_tile = session.games.iter().map(|g| g.max_tile).max().unwrap_or(0);
            report.push_str(&format!(
                "{:<24} {:>6} {:>11.1} {:>10} {:>11.1} {:>9} {:>5}\n",
                session.player,
                session.games.len(),
                session.average_total(),
                session.best_total(),
                session.average_score(),
                max_tile,
                session.wins()
            ));
        }

        for session in &self.sessions {
            report.push_str(&format!("\nMax tile reached by {}:\n", session.player));
            for (tile, count) in session.tile_histogram().iter().rev() {
                report.push_str(&format!("  {tile:>6}: {count}\n"));
            }
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
