mod sweep;

use anyhow::{bail, Context};
use clap::Parser;
use higher_lower_drivers::parse_config_from_file;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "~/.higher_lower.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Overrides the largest deck size in the config
    #[arg(long)]
    max_cards: Option<usize>,

    /// Skips the Monte Carlo simulation
    #[arg(long)]
    no_simulation: bool,
}

fn main() -> anyhow::Result<()> {
    let mut args = CommandLineArgs::parse();
    if args.config == DEFAULT_CONFIG_PATH {
        let home_dir = home::home_dir().context("Cannot find home directory")?;
        let config_file_path = home_dir.join(".higher_lower.yml");
        if !config_file_path.exists() {
            bail!("Config file {} not exists", config_file_path.display());
        }
        if config_file_path.is_dir() {
            bail!("This should be a path rather than a directory");
        }
        args.config = config_file_path.to_string_lossy().into_owned();
    }
    let args = args;

    let mut config = parse_config_from_file(&args.config)?;
    init_logging(&config.log_level)?;
    info!(config = %args.config, "loaded config");

    if let Some(max_cards) = args.max_cards {
        config.sweep.max_cards = max_cards;
    }

    sweep::print_sweep(&config.sweep)?;
    if !args.no_simulation {
        let settings: higher_lower::SimulationSettings = config
            .simulation
            .try_into()
            .context("invalid simulation config")?;
        sweep::print_simulation(&settings)?;
    }

    Ok(())
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let level: tracing::Level = level
        .parse()
        .with_context(|| format!("invalid log level {}", level))?;
    tracing_subscriber::fmt().with_max_level(level).init();
    Ok(())
}
