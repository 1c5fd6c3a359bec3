use clap::{Parser, Subcommand, ValueEnum};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use kos_rank::config::ConfigSource;
use kos_rank::listing::Listing;
use kos_rank::output::RankedListing;
use kos_rank::scoring::{Criterion, InputMode, ScoringConfig};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Score 1-5 points per attribute band, all columns higher-is-better
    Banded,
    /// Use raw values, cost columns prefer lower values
    Raw,
}

impl From<Mode> for InputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Banded => InputMode::Banded,
            Mode::Raw => InputMode::Raw,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum Format {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank the listings in a YAML or JSON file
    Rank {
        /// Path to the listings file
        listings: PathBuf,

        /// Override the configured input mode
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Validate the config and print the effective criteria
    Check,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "kos-rank")]
#[command(about = "Rank boarding-house listings with TOPSIS", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/kos-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();
    let config_path = cli.config.map(PathBuf::from);

    match cli.command {
        Commands::Init { force } => {
            let path = match config_path.map(Ok).unwrap_or_else(kos_rank::config::get_config_path) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            if let Err(e) = kos_rank::config::write_default_config(&path, force) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!("Wrote default config to {}", path.display());
        }
        Commands::Check => {
            let (scoring, criteria) = load_scoring(config_path, cli.verbose);
            println!("mode: {}", scoring.mode.as_str());
            for c in &criteria {
                println!(
                    "  {:<9} {:<8} {:.4}",
                    c.id.as_str(),
                    format!("{:?}", c.direction).to_lowercase(),
                    c.weight
                );
            }
            println!("Config OK");
        }
        Commands::Rank {
            listings,
            mode,
            format,
        } => {
            let (scoring, criteria) = load_scoring(config_path, cli.verbose);
            let mode: InputMode = mode.map(Into::into).unwrap_or(scoring.mode);

            let all = match kos_rank::listing::load_listings(&listings) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Listings error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            let total = all.len();
            let active = kos_rank::listing::active_listings(all);

            if cli.verbose {
                eprintln!(
                    "Loaded {} listings ({} active), mode: {}",
                    total,
                    active.len(),
                    mode.as_str()
                );
            }

            if active.is_empty() {
                println!("No listings to rank.");
                std::process::exit(EXIT_SUCCESS);
            }

            let alternatives: Vec<_> = active
                .iter()
                .map(|listing| listing.to_alternative(&criteria))
                .collect();

            let results = match kos_rank::scoring::rank_alternatives(&alternatives, &criteria, mode)
            {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Listings error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let by_id: HashMap<&str, &Listing> =
                active.iter().map(|l| (l.id.as_str(), l)).collect();
            let rows: Vec<RankedListing> = results
                .iter()
                .filter_map(|result| {
                    by_id
                        .get(result.alternative_id.as_str())
                        .copied()
                        .map(|listing| RankedListing { listing, result })
                })
                .collect();

            match format {
                Format::Json => match kos_rank::output::format_json(&results) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
                Format::Tsv => println!("{}", kos_rank::output::format_tsv(&rows)),
                Format::Table => {
                    let use_colors = kos_rank::output::should_use_colors();
                    if cli.verbose {
                        for row in &rows {
                            println!(
                                "{}",
                                kos_rank::output::format_listing_detail(row, use_colors)
                            );
                            println!();
                        }
                    } else {
                        println!(
                            "{}",
                            kos_rank::output::format_ranked_table(&rows, use_colors)
                        );
                    }
                }
            }

            if cli.verbose {
                eprintln!();
                eprintln!("Ranked {} listings in {:?}", rows.len(), start_time.elapsed());
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load the config and apply the weight policy. Exits on any config error;
/// the engine is never invoked with an off-budget weight set.
fn load_scoring(config_path: Option<PathBuf>, verbose: bool) -> (ScoringConfig, Vec<Criterion>) {
    let (config, source) = match kos_rank::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if verbose {
        match &source {
            ConfigSource::File(path) => eprintln!("Loaded config from {}", path.display()),
            ConfigSource::Defaults => eprintln!("No config file found, using defaults"),
        }
    }

    let scoring = config.effective_scoring();
    let resolved = match scoring.resolve_criteria() {
        Ok(r) => r,
        Err(errors) => {
            eprintln!("Scoring config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Some(sum) = resolved.renormalized_from {
        eprintln!(
            "Warning: criterion weights summed to {:.6}; re-normalized to 1.0",
            sum
        );
    }

    (scoring, resolved.criteria)
}
