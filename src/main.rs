use analyzer::RangeAnalyzer;
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{Cell, CellAlignment, Table};
use configuration::{Config, StorageBackend};
use core_types::{ActionType, RANKS, RangeContract, all_hands_13x13};
use database::{JsonCodec, PayloadCodec};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// The main entry point for the pokerrange application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config_from(&cli.config)?;
    let _guard = configuration::init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => handle_serve(args, config).await,
        Commands::Migrate => handle_migrate(&config).await,
        Commands::Validate { file } => handle_validate(&file, &config),
        Commands::Stats { file } => handle_stats(&file, &config),
        Commands::Normalize { file, output } => handle_normalize(&file, output.as_deref(), &config),
        Commands::Grid { file } => handle_grid(&file, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Validate, analyse and serve poker preflop ranges.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = configuration::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Apply database migrations and exit.
    Migrate,
    /// Check a range file against the contract rules.
    Validate {
        /// JSON file holding a range (`{"name": ..., "hands": {...}}`).
        file: PathBuf,
    },
    /// Print VPIP and the per-action distribution of a range file.
    Stats { file: PathBuf },
    /// Repair a range file so every hand sums to 100 with no repeated actions.
    Normalize {
        file: PathBuf,
        /// Where to write the result; prints to stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show per-hand VPIP on the 13x13 starting-hand grid.
    Grid { file: PathBuf },
}

#[derive(Parser)]
struct ServeArgs {
    /// Overrides `server.host`.
    #[arg(long)]
    host: Option<IpAddr>,

    /// Overrides `server.port`.
    #[arg(long)]
    port: Option<u16>,

    /// Overrides `storage.backend`.
    #[arg(long, value_enum)]
    storage: Option<StorageBackend>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(storage) = args.storage {
        config.storage.backend = storage;
    }
    config.validate()?;
    web_server::run_server(config).await
}

async fn handle_migrate(config: &Config) -> anyhow::Result<()> {
    let pool = database::connect(&config.database).await?;
    database::run_migrations(&pool).await?;
    println!("Migrations applied.");
    Ok(())
}

fn handle_validate(file: &Path, config: &Config) -> anyhow::Result<()> {
    let range = read_range(file)?;
    RangeAnalyzer::new(config.analysis.clone()).validate(&range)?;
    println!("'{}' is valid ({} hands).", range.name, range.hand_count());
    Ok(())
}

fn handle_stats(file: &Path, config: &Config) -> anyhow::Result<()> {
    let range = read_range(file)?;
    let stats = RangeAnalyzer::new(config.analysis.clone()).stats(&range)?;

    let mut table = Table::new();
    table.set_header(vec!["Action", "Average weight (%)"]);
    for action in ActionType::ALL {
        table.add_row(vec![
            Cell::new(action),
            Cell::new(format!("{:.2}", stats.by_action.get(action))).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("VPIP"),
        Cell::new(format!("{:.2}", stats.vpip)).set_alignment(CellAlignment::Right),
    ]);

    println!("{} ({} hands)", range.name, range.hand_count());
    println!("{table}");
    Ok(())
}

fn handle_normalize(file: &Path, output: Option<&Path>, config: &Config) -> anyhow::Result<()> {
    let range = read_range(file)?;
    let analyzer = RangeAnalyzer::new(config.analysis.clone());
    let normalized = analyzer.normalize(&range);
    analyzer.validate(&normalized)?;

    let text = serde_json::to_string_pretty(&normalized)?;
    match output {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), hands = normalized.hand_count(), "Normalized range written.");
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn handle_grid(file: &Path, config: &Config) -> anyhow::Result<()> {
    let range = read_range(file)?;
    let analyzer = RangeAnalyzer::new(config.analysis.clone());
    analyzer.validate(&range)?;

    let mut table = Table::new();
    let mut header = vec![Cell::new("")];
    header.extend(RANKS.iter().map(|r| Cell::new(r)));
    table.set_header(header);

    let cells = all_hands_13x13();
    for (row, chunk) in cells.chunks(RANKS.len()).enumerate() {
        let mut line = vec![Cell::new(RANKS[row])];
        for cell in chunk {
            let text = match range.hands.get(&cell.hand.to_string()) {
                Some(actions) => format!("{:.0}", analyzer.hand_vpip(actions)),
                None => "-".to_string(),
            };
            line.push(Cell::new(text).set_alignment(CellAlignment::Right));
        }
        table.add_row(line);
    }

    println!("{}: VPIP per hand (%)", range.name);
    println!("{table}");
    Ok(())
}

/// Reads and decodes a JSON range file.
fn read_range(file: &Path) -> anyhow::Result<RangeContract> {
    let text = std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let range = JsonCodec
        .decode(&text)
        .with_context(|| format!("{} is not a valid range file", file.display()))?;
    Ok(range)
}
