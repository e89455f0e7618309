use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sweep: ConfigSweep,
    pub simulation: ConfigSimulation,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSweep {
    pub min_cards: usize,
    pub max_cards: usize,
    pub step: usize,
    pub reset_cache_between_runs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSimulation {
    pub number_of_cards: usize,
    pub games: u64,
    pub seed: Option<u64>,
    pub tie_break: String,
}

impl TryInto<higher_lower::SimulationSettings> for ConfigSimulation {
    type Error = serde::de::value::Error;

    fn try_into(self) -> Result<higher_lower::SimulationSettings, Self::Error> {
        let settings = higher_lower::SimulationSettings {
            number_of_cards: self.number_of_cards,
            games: self.games,
            tie_break: self.tie_break.parse()?,
            seed: self.seed,
        };

        Ok(settings)
    }
}

impl ConfigSweep {
    /// Deck sizes to solve, in increasing order.
    pub fn deck_sizes(&self) -> impl Iterator<Item = usize> {
        (self.min_cards.max(1)..=self.max_cards).step_by(self.step.max(1))
    }
}

fn default_log_level() -> String {
    String::from("info")
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: &str) -> anyhow::Result<Config> {
    let file_content = fs::read_to_string(filename)
        .with_context(|| format!("cannot read config file {}", filename))?;
    parse_config(&file_content).with_context(|| format!("invalid config file {}", filename))
}

pub fn parse_config(content: &str) -> anyhow::Result<Config> {
    Ok(serde_yaml::from_str(content)?)
}
