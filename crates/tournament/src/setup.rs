//! Creating a tournament from a parsed roster

use chrono::{Local, Utc};
use rand::Rng;
use round_robin::{generate_in_order, shuffle_in_place, PairingError, Player, PlayerId, Tournament};
use tracing::info;
use uuid::Uuid;

/// Name used when the organiser leaves it blank
pub const DEFAULT_NAME: &str = "Tournament";

/// Tournament metadata entered before the draw
#[derive(Debug, Clone, Default)]
pub struct TournamentSetup {
    pub name: String,
    /// `YYYY-MM-DD`; today when empty
    pub date: String,
    pub chief_judge: String,
    pub shuffle_players: bool,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Register the players, make the draw and stamp the tournament.
///
/// With shuffling on, the roster is permuted before seating and the permuted
/// order is kept as the roster, so start numbers match the Berger seats.
pub fn create_tournament<R: Rng + ?Sized>(
    setup: &TournamentSetup,
    names: &[String],
    rng: &mut R,
) -> Result<Tournament, PairingError> {
    let mut players: Vec<Player> = names
        .iter()
        .map(|name| Player::new(new_id(), name.as_str()))
        .collect();
    if setup.shuffle_players {
        shuffle_in_place(&mut players, rng);
    }

    let ids: Vec<PlayerId> = players.iter().map(|player| player.id.clone()).collect();
    let rounds = generate_in_order(&ids)?;

    let name = if setup.name.trim().is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        setup.name.trim().to_string()
    };

    let mut tournament = Tournament::new(new_id(), name, players, rounds);
    tournament.date = if setup.date.trim().is_empty() {
        today()
    } else {
        setup.date.trim().to_string()
    };
    tournament.chief_judge = setup.chief_judge.trim().to_string();
    tournament.shuffle_players = setup.shuffle_players;

    info!(
        id = %tournament.id,
        players = tournament.players.len(),
        rounds = tournament.rounds.len(),
        "created tournament"
    );
    Ok(tournament)
}

/// Update metadata that can change after the draw.
pub fn update_details(
    tournament: &mut Tournament,
    date: Option<&str>,
    chief_judge: Option<&str>,
) -> bool {
    let mut changed = false;
    if let Some(date) = date {
        if tournament.date != date {
            tournament.date = date.to_string();
            changed = true;
        }
    }
    if let Some(judge) = chief_judge {
        if tournament.chief_judge != judge {
            tournament.chief_judge = judge.to_string();
            changed = true;
        }
    }
    if changed {
        tournament.updated_at = Utc::now();
    }
    changed
}
