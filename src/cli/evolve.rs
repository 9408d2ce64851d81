//! Run command implementation.

use super::output::{JsonReport, format_generation};
use super::{CliError, OutputFormat};
use clap::Args;
use genexpr::gp::{EvolutionConfig, evolve};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Options for a search run. Flags override values from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct RunArgs {
    /// JSON configuration file
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Target number (default: 42)
    #[arg(short, long)]
    pub(crate) target: Option<f64>,

    /// Population size (default: 100)
    #[arg(short, long)]
    pub(crate) population: Option<usize>,

    /// Genes per genotype (default: 10)
    #[arg(short, long)]
    pub(crate) length: Option<usize>,

    /// Generation budget (default: 10)
    #[arg(short, long)]
    pub(crate) generations: Option<usize>,

    /// Genotypes selected per generation (default: population size)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) selection_count: Option<i64>,

    /// Random seed (default: random)
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// Output format: text or json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub(crate) pause: bool,
}

impl RunArgs {
    /// Build the run configuration from the config file and flag overrides.
    fn to_config(&self) -> Result<EvolutionConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                EvolutionConfig::load(path)?
            }
            None => EvolutionConfig::default(),
        };

        if let Some(target) = self.target {
            config.target = target;
        }
        if let Some(population) = self.population {
            config.population_size = population;
        }
        if let Some(length) = self.length {
            config.genotype_length = length;
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if self.selection_count.is_some() {
            config.selection_count = self.selection_count;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the search aborts.
pub(crate) fn execute(args: &RunArgs) -> Result<(), CliError> {
    let config = args.to_config()?;

    let stats = evolve(&config, |report| {
        if args.format == OutputFormat::Text {
            println!("{}", format_generation(report));
        }
    })?;

    if args.format == OutputFormat::Json {
        let report = JsonReport::new(&config, &stats);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if args.pause {
        pause()?;
    }

    Ok(())
}

fn pause() -> io::Result<()> {
    print!("Press Enter to continue...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
