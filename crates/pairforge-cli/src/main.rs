//! PairForge CLI
//!
//! Generates a doubles schedule and regenerates it after withdrawals.
//! Between runs the engine is kept in a JSON snapshot file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pairforge::{EngineSnapshot, PlayerId, ScheduleAdapter, ScheduleEngine, TournamentConfig};

#[derive(Parser)]
#[command(name = "pairforge")]
#[command(about = "Fair doubles tournament schedules", long_about = None)]
struct Cli {
    /// Only print the requested output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a schedule from a configuration file or flags
    Generate {
        /// TOML or YAML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of players (defaults to the number of names, if given)
        #[arg(long)]
        players: Option<usize>,

        /// Courts available each round
        #[arg(long)]
        courts: Option<usize>,

        /// Rounds to generate (defaults to players - 1)
        #[arg(long)]
        rounds: Option<usize>,

        /// Number printed on the first court
        #[arg(long)]
        first_court: Option<u32>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Withdraw players and regenerate the rest of a saved schedule
    Withdraw {
        /// Snapshot written by `generate --format snapshot`
        #[arg(long)]
        snapshot: PathBuf,

        /// First round to regenerate (0-based)
        #[arg(long)]
        cut: usize,

        /// Withdrawing player index (repeatable)
        #[arg(long = "player")]
        withdrawing: Vec<usize>,

        /// Player index to bring back before regenerating (repeatable)
        #[arg(long)]
        reinstate: Vec<usize>,

        /// New total round count
        #[arg(long)]
        total: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Player names, one per line
    #[arg(long)]
    names: Option<PathBuf>,

    /// What to print
    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Rounds, statistics and verdict as text
    Summary,
    /// Rounds with player names and court numbers
    Json,
    /// Full engine state for a later `withdraw`
    Snapshot,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if !cli.quiet {
        pairforge::console::init();
    }

    match cli.command {
        Commands::Generate {
            config,
            players,
            courts,
            rounds,
            first_court,
            output,
        } => {
            let names = read_names(output.names.as_deref())?;
            let mut config = match config {
                Some(path) => TournamentConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => TournamentConfig::default(),
            };
            if let Some(players) = players.or(names.as_ref().map(Vec::len)) {
                config.population = players;
            }
            if let Some(courts) = courts {
                config.courts = courts;
            }
            if rounds.is_some() {
                config.rounds = rounds;
            }
            if let Some(first_court) = first_court {
                config.first_court = first_court;
            }

            let mut engine = ScheduleEngine::new(config)?;
            let report = engine.build()?;
            if report.exhausted {
                tracing::warn!(
                    event = "exhausted",
                    achieved = report.achieved,
                    requested = report.requested,
                );
            }
            emit(&engine, names.as_deref(), &output)
        }

        Commands::Withdraw {
            snapshot,
            cut,
            withdrawing,
            reinstate,
            total,
            output,
        } => {
            let names = read_names(output.names.as_deref())?;
            let json = fs::read_to_string(&snapshot)
                .with_context(|| format!("reading {}", snapshot.display()))?;
            let mut engine = ScheduleEngine::from_snapshot(EngineSnapshot::from_json(&json)?)?;

            for index in reinstate {
                if !engine.reinstate(PlayerId::new(index)) {
                    bail!("player {} is not withdrawn", index);
                }
            }

            let mut request =
                pairforge::WithdrawalRequest::new(cut, withdrawing.into_iter().map(PlayerId::new));
            if let Some(total) = total {
                request = request.with_total_rounds(total);
            }
            let report = engine.regenerate(&request)?;
            if !cli.quiet {
                eprintln!("{}", report.summary);
            }
            emit(&engine, names.as_deref(), &output)
        }
    }
}

fn read_names(path: Option<&Path>) -> Result<Option<Vec<String>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(Some(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
    ))
}

fn emit(engine: &ScheduleEngine, names: Option<&[String]>, output: &OutputArgs) -> Result<()> {
    let text = match output.format {
        Format::Summary => engine.summary(),
        Format::Snapshot => engine.export_snapshot().to_json_pretty()?,
        Format::Json => {
            let fallback: Vec<String>;
            let names = match names {
                Some(names) => names,
                None => {
                    fallback = engine
                        .population()
                        .players()
                        .map(|p| p.to_string())
                        .collect();
                    fallback.as_slice()
                }
            };
            let rounds = ScheduleAdapter::new(names)
                .with_first_court(engine.config().first_court)
                .adapt_schedule(engine.schedule());
            serde_json::to_string_pretty(&rounds)?
        }
    };

    match &output.out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?
        }
        None => println!("{}", text),
    }
    Ok(())
}
