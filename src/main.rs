use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use circuit_points::calculate::bonus;
use circuit_points::config::AppConfig;
use circuit_points::models::{finish_label, Region, Roster};
use circuit_points::parse_move;
use circuit_points::session::{Board, CircuitSession, ManiaSession};
use circuit_points::snapshot::{load_player_pool, load_team_snapshot, SnapshotError};

#[derive(Parser)]
#[command(name = "circuit-points")]
#[command(about = "Circuit point scoring and roster standings calculator")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./circuit-points.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute circuit standings for a region
    Standings {
        /// Team snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,

        /// Region (na, emea)
        #[arg(long, default_value = "na")]
        region: String,

        /// Move a team in the ranked order before composing, as FROM:TO (repeatable)
        #[arg(long = "move")]
        moves: Vec<String>,

        /// Print standings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the capped total of an ad-hoc roster
    TeamTotal {
        /// Player pool JSON file
        #[arg(long)]
        pool: PathBuf,

        /// Region (na, emea)
        #[arg(long, default_value = "na")]
        region: String,

        /// Comma-separated in-game names, in roster order
        #[arg(long)]
        players: String,
    },

    /// Show the seeding bonus for a ranked position
    Bonus {
        /// 0-based position
        #[arg(long)]
        index: usize,
    },
}

/// Load the config file, or defaults when it doesn't exist (second value is false).
fn load_config(path: &Path) -> Result<(AppConfig, bool)> {
    if path.exists() {
        let config = AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config {:?}", path))?;
        Ok((config, true))
    } else {
        Ok((AppConfig::default(), false))
    }
}

fn parse_region(s: &str) -> Result<Region> {
    s.parse::<Region>().map_err(anyhow::Error::msg)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, from_file) = load_config(&cli.config)?;

    // Initialize tracing
    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("Starting circuit-points v{}", env!("CARGO_PKG_VERSION"));
    if !from_file {
        tracing::warn!("No config file at {:?}, using defaults", cli.config);
    }

    match cli.command {
        Commands::Standings {
            snapshot,
            region,
            moves,
            json,
        } => {
            let region = parse_region(&region)?;
            let snapshot = load_team_snapshot(&snapshot)?;
            let engine = config.circuit_engine();
            let qualifying_slots = engine.qualifying_slots;

            let mut session = CircuitSession::new(snapshot, engine);
            session.swap_to_region(region);

            for mv in &moves {
                let (from, to) = parse_move(mv)
                    .with_context(|| format!("Invalid --move (expected FROM:TO): {}", mv))?;
                session.reorder_team(from, to);
            }

            let standings = session.standings();
            if json {
                println!("{}", serde_json::to_string_pretty(standings)?);
                return Ok(());
            }

            println!("{} standings", session.region());
            println!(
                "{:<4} {:<28} {:>8} {:>6} {:>8}  {}",
                "Pos", "Team", "Base", "Bonus", "Total", "Seed"
            );
            for (pos, entry) in standings.iter().enumerate() {
                let marker = if standings.is_qualified(&entry.team_name, qualifying_slots) {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{:<4} {:<28} {:>8} {:>6} {:>8}  {}{}",
                    pos + 1,
                    entry.team_name,
                    entry.base_total,
                    entry.bonus,
                    entry.total,
                    finish_label(entry.seed),
                    marker
                );
            }

            let qualified: Vec<&str> = standings
                .qualified(qualifying_slots)
                .iter()
                .map(|entry| entry.team_name.as_str())
                .collect();
            println!("Qualified: {}", qualified.join(", "));
        }

        Commands::TeamTotal {
            pool,
            region,
            players,
        } => {
            let region = parse_region(&region)?;
            let pool = load_player_pool(&pool)?;

            let mut session = ManiaSession::new(pool, config.mania_engine());
            session.swap_to_region(region);

            for name in players.split(',').map(str::trim).filter(|n| !n.is_empty()) {
                let idx = session
                    .find_in_pool(name)
                    .ok_or_else(|| SnapshotError::UnknownPlayer(name.to_string()))?;
                let end = session.team(0).map_or(0, |t| t.len());
                session.transfer(Board::Pool, Board::Team(0), idx, end);
            }

            let team = session.team(0).context("No team slot available")?;
            for (idx, player) in team.players.iter().enumerate() {
                let counts = if Roster::counts_toward_total(idx, config.scoring.core_size) {
                    ""
                } else {
                    " (bench)"
                };
                println!(
                    "{:<20} {:<20} {:>8}{}",
                    player.name, player.team_name, player.points, counts
                );
            }
            println!("Total: {}", session.team_totals()[0]);
        }

        Commands::Bonus { index } => {
            println!("{}", bonus(index));
        }
    }

    Ok(())
}
