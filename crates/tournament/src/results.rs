//! Recording game results

use chrono::Utc;
use round_robin::{Game, Outcome, PlayerId, Score, Tournament};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResultError {
    #[error("round {0} does not exist")]
    UnknownRound(u32),

    #[error("no game between {first} and {second} in round {round}")]
    UnknownGame {
        round: u32,
        first: PlayerId,
        second: PlayerId,
    },

    #[error("the bye in round {0} has no result")]
    ByeGame(u32),

    #[error("player {0} is not in this game")]
    NotInGame(PlayerId),
}

/// Set (or clear, with `None`) the result of a game.
///
/// `result` is read with `first` in the first slot; if the game is stored
/// the other way round the outcome is flipped to match.
pub fn record_result(
    tournament: &mut Tournament,
    round_number: u32,
    first: &PlayerId,
    second: &PlayerId,
    result: Option<Outcome>,
) -> Result<(), ResultError> {
    let round = tournament
        .round_mut(round_number)
        .ok_or(ResultError::UnknownRound(round_number))?;

    let game = round
        .game_between_mut(first, second)
        .ok_or_else(|| ResultError::UnknownGame {
            round: round_number,
            first: first.clone(),
            second: second.clone(),
        })?;
    if game.is_bye {
        return Err(ResultError::ByeGame(round_number));
    }

    game.result = if &game.first == first {
        result
    } else {
        result.map(Outcome::flipped)
    };
    tournament.updated_at = Utc::now();

    info!(
        round = round_number,
        first = %first,
        second = %second,
        result = result.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
        "recorded result"
    );
    Ok(())
}

/// Translate one player's score into the game's slot-based outcome.
///
/// `None` clears the result.
pub fn result_from_perspective(
    game: &Game,
    viewer: &PlayerId,
    score: Option<Score>,
) -> Result<Option<Outcome>, ResultError> {
    let side = game
        .side_of(viewer)
        .ok_or_else(|| ResultError::NotInGame(viewer.clone()))?;
    Ok(score.map(|score| Outcome::from_score(side, score)))
}

/// The viewer's own score in `game`, if a result is recorded.
pub fn score_from_perspective(game: &Game, viewer: &PlayerId) -> Option<Score> {
    let points = game.score_of(viewer)?;
    Some(if points >= 1.0 {
        Score::Win
    } else if points > 0.0 {
        Score::Draw
    } else {
        Score::Loss
    })
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
