//! Tournament CLI
//!
//! Make a round-robin draw, enter results and print tables.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use round_robin::{Outcome, PlayerId, Score, Tournament};
use std::path::PathBuf;
use tournament::{
    create_tournament, crosstable, export_file_name, parse_participants, parse_tournament,
    record_result, result_from_perspective, rounds_list, serialize_tournament, standings_list,
    update_details, AppConfig, TournamentSetup, TournamentStore, DEFAULT_CONFIG_FILE,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tournament", version, about = "Round-robin draw and results")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register players and make the draw
    New {
        #[arg(long, default_value = "")]
        name: String,
        /// Tournament date, YYYY-MM-DD (default: today)
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        judge: String,
        /// Players separated by commas or newlines
        #[arg(long, conflicts_with = "roster_file")]
        players: Option<String>,
        /// File with one player per line
        #[arg(long)]
        roster_file: Option<PathBuf>,
        /// Shuffle the roster before seating
        #[arg(long, conflicts_with = "no_shuffle")]
        shuffle: bool,
        /// Keep the roster order as entered
        #[arg(long)]
        no_shuffle: bool,
        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Enter a result as "<first> <second> <1-0|0-1|0.5-0.5|none>"
    #[command(name = "result")]
    Record {
        round: u32,
        first: String,
        second: String,
        result: String,
    },
    /// Enter one player's score: win, draw, loss or none
    Score {
        round: u32,
        player: String,
        score: String,
    },
    /// Set a manual place label (empty clears it)
    Place { player: String, label: String },
    /// Change the date or chief judge
    Set {
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        judge: Option<String>,
    },
    /// Pairings of every round
    Rounds,
    /// Standings by place
    Standings,
    /// Berger crosstable
    Table,
    /// Write the active tournament as JSON
    Export { path: Option<PathBuf> },
    /// Load a tournament from JSON and make it active
    Import { path: PathBuf },
    /// Forget the active tournament and delete its file
    Reset,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Find a player by start number, name (case-insensitive) or id.
fn resolve_player(tournament: &Tournament, key: &str) -> Result<PlayerId> {
    if let Ok(number) = key.parse::<usize>() {
        if let Some(player) = number.checked_sub(1).and_then(|i| tournament.players.get(i)) {
            return Ok(player.id.clone());
        }
    }
    let wanted = key.to_lowercase();
    tournament
        .players
        .iter()
        .find(|player| player.name.to_lowercase() == wanted)
        .or_else(|| tournament.players.iter().find(|player| player.id.as_str() == key))
        .map(|player| player.id.clone())
        .with_context(|| format!("no player matches {key:?}"))
}

fn parse_result(text: &str) -> Result<Option<Outcome>> {
    match text.trim().to_lowercase().as_str() {
        "none" | "-" | "" => Ok(None),
        other => Ok(Some(other.parse()?)),
    }
}

fn parse_score(text: &str) -> Result<Option<Score>> {
    Ok(match text.trim().to_lowercase().as_str() {
        "win" | "1" => Some(Score::Win),
        "draw" | "0.5" | "½" => Some(Score::Draw),
        "loss" | "0" => Some(Score::Loss),
        "none" | "-" => None,
        other => bail!("unknown score {other:?} (expected win, draw, loss or none)"),
    })
}

fn active(store: &TournamentStore) -> Result<Tournament> {
    store
        .load_last()
        .context("no active tournament, create one with `tournament new`")
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(&cli.config)?;
    let store = TournamentStore::new(&config.data_dir);

    match cli.command {
        Command::New {
            name,
            date,
            judge,
            players,
            roster_file,
            shuffle,
            no_shuffle,
            seed,
        } => {
            let text = match (players, roster_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                (None, None) => bail!("give the players with --players or --roster-file"),
            };
            let parsed = parse_participants(&text, config.roster_limits());
            if !parsed.duplicates.is_empty() {
                bail!("duplicate names: {}", parsed.duplicates.join(", "));
            }
            if !parsed.too_long.is_empty() {
                bail!("names too long: {}", parsed.too_long.join(", "));
            }
            if !parsed.is_ready() {
                bail!("a round-robin needs at least 2 players");
            }

            let setup = TournamentSetup {
                name,
                date,
                chief_judge: judge,
                shuffle_players: if shuffle || no_shuffle {
                    shuffle
                } else {
                    config.shuffle_players
                },
            };
            let mut rng = match seed.or(config.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let tournament = create_tournament(&setup, &parsed.names, &mut rng)?;
            let path = store.save(&tournament)?;
            info!(path = %path.display(), "draw saved");
            print!("{}", rounds_list(&tournament));
        }
        Command::Record {
            round,
            first,
            second,
            result,
        } => {
            let mut tournament = active(&store)?;
            let first = resolve_player(&tournament, &first)?;
            let second = resolve_player(&tournament, &second)?;
            record_result(&mut tournament, round, &first, &second, parse_result(&result)?)?;
            store.save(&tournament)?;
        }
        Command::Score {
            round,
            player,
            score,
        } => {
            let mut tournament = active(&store)?;
            let player = resolve_player(&tournament, &player)?;
            let game = tournament
                .round(round)
                .and_then(|r| r.games.iter().find(|game| game.involves(&player)))
                .with_context(|| format!("{player} has no game in round {round}"))?
                .clone();
            if game.is_bye {
                bail!("{player} has the bye in round {round}");
            }
            let outcome = result_from_perspective(&game, &player, parse_score(&score)?)?;
            record_result(&mut tournament, round, &game.first, &game.second, outcome)?;
            store.save(&tournament)?;
        }
        Command::Place { player, label } => {
            let mut tournament = active(&store)?;
            let player = resolve_player(&tournament, &player)?;
            tournament.place_overrides.set(player, label);
            store.save(&tournament)?;
        }
        Command::Set { date, judge } => {
            let mut tournament = active(&store)?;
            if update_details(&mut tournament, date.as_deref(), judge.as_deref()) {
                store.save(&tournament)?;
            }
        }
        Command::Rounds => print!("{}", rounds_list(&active(&store)?)),
        Command::Standings => print!("{}", standings_list(&active(&store)?)),
        Command::Table => print!("{}", crosstable(&active(&store)?)),
        Command::Export { path } => {
            let tournament = active(&store)?;
            let path = path.unwrap_or_else(|| PathBuf::from(export_file_name(&tournament)));
            std::fs::write(&path, serialize_tournament(&tournament)?)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "exported tournament");
        }
        Command::Import { path } => {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let tournament = parse_tournament(&contents)?;
            store.save(&tournament)?;
            info!(name = %tournament.name, "tournament loaded");
        }
        Command::Reset => {
            let id = store.load_last().map(|tournament| tournament.id);
            store.clear(id.as_deref())?;
            info!("active tournament cleared");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    run(Cli::parse())
}
