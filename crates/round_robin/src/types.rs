//! Core tournament types: players, games, rounds and standings rows.
//!
//! Field names on the wire follow the persisted tournament schema (camelCase,
//! with the two game slots stored as `whitePlayerId` / `blackPlayerId`), so a
//! tournament saved by any compatible tool loads unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseOutcomeError;
use crate::place::PlaceOverrides;

/// Reserved identifier of the synthetic bye opponent.
pub const BYE_PLAYER_ID: &str = "__BYE__";

// =============================================================================
// Players
// =============================================================================

/// Stable player identifier, unique within one tournament.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The bye sentinel. Never a real participant.
    pub fn bye() -> Self {
        Self(BYE_PLAYER_ID.to_string())
    }

    #[inline]
    pub fn is_bye(&self) -> bool {
        self.0 == BYE_PLAYER_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A registered participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            notes: None,
        }
    }
}

// =============================================================================
// Games and rounds
// =============================================================================

/// Which slot of a game a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

/// Recorded outcome of a game, from the slots' point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "1-0")]
    FirstWins,
    #[serde(rename = "0-1")]
    SecondWins,
    #[serde(rename = "0.5-0.5")]
    Draw,
}

impl Outcome {
    /// Points earned by the player in `side`.
    pub fn score(self, side: Side) -> f64 {
        match (self, side) {
            (Outcome::Draw, _) => 0.5,
            (Outcome::FirstWins, Side::First) | (Outcome::SecondWins, Side::Second) => 1.0,
            _ => 0.0,
        }
    }

    /// The same result with the slots exchanged.
    pub fn flipped(self) -> Self {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// Build the outcome from the score of the player sitting in `side`.
    pub fn from_score(side: Side, score: Score) -> Self {
        match (score, side) {
            (Score::Draw, _) => Outcome::Draw,
            (Score::Win, Side::First) | (Score::Loss, Side::Second) => Outcome::FirstWins,
            (Score::Win, Side::Second) | (Score::Loss, Side::First) => Outcome::SecondWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::FirstWins => "1-0",
            Outcome::SecondWins => "0-1",
            Outcome::Draw => "0.5-0.5",
        };
        f.write_str(text)
    }
}

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1-0" => Ok(Outcome::FirstWins),
            "0-1" => Ok(Outcome::SecondWins),
            "0.5-0.5" | "1/2-1/2" | "½-½" | "=" => Ok(Outcome::Draw),
            other => Err(ParseOutcomeError(other.to_string())),
        }
    }
}

/// A single player's result in a game (1, ½ or 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Win,
    Draw,
    Loss,
}

/// One scheduled game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub round_number: u32,
    #[serde(rename = "whitePlayerId")]
    pub first: PlayerId,
    #[serde(rename = "blackPlayerId")]
    pub second: PlayerId,
    pub result: Option<Outcome>,
    pub is_bye: bool,
}

impl Game {
    pub fn new(round_number: u32, first: PlayerId, second: PlayerId) -> Self {
        Self {
            round_number,
            first,
            second,
            result: None,
            is_bye: false,
        }
    }

    /// Placeholder game for the player sitting out this round.
    pub fn bye(round_number: u32, player: PlayerId) -> Self {
        Self {
            round_number,
            first: player,
            second: PlayerId::bye(),
            result: None,
            is_bye: true,
        }
    }

    pub fn side_of(&self, player: &PlayerId) -> Option<Side> {
        if &self.first == player {
            Some(Side::First)
        } else if &self.second == player {
            Some(Side::Second)
        } else {
            None
        }
    }

    pub fn involves(&self, player: &PlayerId) -> bool {
        self.side_of(player).is_some()
    }

    pub fn opponent_of(&self, player: &PlayerId) -> Option<&PlayerId> {
        match self.side_of(player)? {
            Side::First => Some(&self.second),
            Side::Second => Some(&self.first),
        }
    }

    /// Pairs `a` and `b`, in either slot order.
    pub fn pairs(&self, a: &PlayerId, b: &PlayerId) -> bool {
        (&self.first == a && &self.second == b) || (&self.first == b && &self.second == a)
    }

    /// The outcome if it counts towards scoring (real game with a result).
    pub fn scored_outcome(&self) -> Option<Outcome> {
        if self.is_bye {
            None
        } else {
            self.result
        }
    }

    /// Points `player` earned here, if the game has been scored.
    pub fn score_of(&self, player: &PlayerId) -> Option<f64> {
        let outcome = self.scored_outcome()?;
        Some(outcome.score(self.side_of(player)?))
    }
}

/// A round and the games scheduled in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_number: u32,
    pub games: Vec<Game>,
}

impl Round {
    pub fn bye_game(&self) -> Option<&Game> {
        self.games.iter().find(|game| game.is_bye)
    }

    pub fn game_between(&self, a: &PlayerId, b: &PlayerId) -> Option<&Game> {
        self.games.iter().find(|game| game.pairs(a, b))
    }

    pub fn game_between_mut(&mut self, a: &PlayerId, b: &PlayerId) -> Option<&mut Game> {
        self.games.iter_mut().find(|game| game.pairs(a, b))
    }
}

// =============================================================================
// Tournament
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TiebreakKind {
    /// Sonneborn-Berger style: opponents' final scores weighted by result.
    #[default]
    #[serde(rename = "berger")]
    Berger,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiebreaksConfig {
    #[serde(rename = "type")]
    pub kind: TiebreakKind,
}

/// Complete state of one round-robin tournament.
///
/// The roster order is significant: it gives the start numbers, the display
/// order and the last-resort ranking tie-break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    /// Calendar date as entered, usually `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub chief_judge: String,
    pub players: Vec<Player>,
    #[serde(default)]
    pub shuffle_players: bool,
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub tiebreaks_config: TiebreaksConfig,
    /// Manually entered places, display only
    #[serde(default, skip_serializing_if = "PlaceOverrides::is_empty")]
    pub place_overrides: PlaceOverrides,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tournament {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        players: Vec<Player>,
        rounds: Vec<Round>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            date: String::new(),
            chief_judge: String::new(),
            players,
            shuffle_players: false,
            rounds,
            tiebreaks_config: TiebreaksConfig::default(),
            place_overrides: PlaceOverrides::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|player| player.id.clone()).collect()
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| &player.id == id)
    }

    /// 1-based start number (roster position).
    pub fn start_number(&self, id: &PlayerId) -> Option<usize> {
        self.players
            .iter()
            .position(|player| &player.id == id)
            .map(|index| index + 1)
    }

    pub fn round(&self, round_number: u32) -> Option<&Round> {
        self.rounds
            .iter()
            .find(|round| round.round_number == round_number)
    }

    pub fn round_mut(&mut self, round_number: u32) -> Option<&mut Round> {
        self.rounds
            .iter_mut()
            .find(|round| round.round_number == round_number)
    }

    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.rounds.iter().flat_map(|round| round.games.iter())
    }

    /// Every game `player` takes part in, keyed by round number.
    pub fn games_by_round(&self, player: &PlayerId) -> BTreeMap<u32, &Game> {
        self.rounds
            .iter()
            .filter_map(|round| {
                round
                    .games
                    .iter()
                    .find(|game| game.involves(player))
                    .map(|game| (round.round_number, game))
            })
            .collect()
    }

    pub fn game_between(&self, a: &PlayerId, b: &PlayerId) -> Option<&Game> {
        self.games().find(|game| game.pairs(a, b))
    }

    /// Number of real (non-bye) games in the schedule.
    pub fn real_games(&self) -> usize {
        self.games().filter(|game| !game.is_bye).count()
    }

    /// Number of real games with a recorded result.
    pub fn played_games(&self) -> usize {
        self.games()
            .filter(|game| game.scored_outcome().is_some())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.played_games() == self.real_games()
    }
}

/// Derived ranking row. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub player_id: PlayerId,
    pub points: f64,
    #[serde(rename = "tiebreak1")]
    pub tiebreak: f64,
    /// 1-based position, unique per player
    pub place: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tournament {
        let players = vec![Player::new("a", "Anna"), Player::new("b", "Boris")];
        let rounds = vec![Round {
            round_number: 1,
            games: vec![Game::new(1, PlayerId::new("b"), PlayerId::new("a"))],
        }];
        Tournament::new("t", "Duel", players, rounds)
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!("1-0".parse::<Outcome>(), Ok(Outcome::FirstWins));
        assert_eq!("½-½".parse::<Outcome>(), Ok(Outcome::Draw));
        assert!("2-0".parse::<Outcome>().is_err());
        assert_eq!(Outcome::SecondWins.to_string(), "0-1");
        assert_eq!(Outcome::FirstWins.flipped(), Outcome::SecondWins);
    }

    #[test]
    fn test_outcome_scores() {
        assert_eq!(Outcome::FirstWins.score(Side::First), 1.0);
        assert_eq!(Outcome::FirstWins.score(Side::Second), 0.0);
        assert_eq!(Outcome::Draw.score(Side::Second), 0.5);
        assert_eq!(Outcome::from_score(Side::Second, Score::Win), Outcome::SecondWins);
    }

    #[test]
    fn test_tournament_lookups() {
        let mut t = sample();
        let (a, b) = (PlayerId::new("a"), PlayerId::new("b"));

        assert_eq!(t.start_number(&b), Some(2));
        assert_eq!(t.player(&a).map(|p| p.name.as_str()), Some("Anna"));
        assert_eq!(t.game_between(&a, &b).map(|g| g.round_number), Some(1));
        assert_eq!(t.games_by_round(&a).keys().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(t.rounds[0].games[0].opponent_of(&a), Some(&b));
        assert!(!t.is_complete());

        t.rounds[0].games[0].result = Some(Outcome::Draw);
        assert_eq!(t.played_games(), 1);
        assert!(t.is_complete());
    }

    #[test]
    fn test_bye_game_shape() {
        let game = Game::bye(3, PlayerId::new("a"));
        assert!(game.is_bye && game.second.is_bye());
        assert_eq!(game.scored_outcome(), None);
        assert_eq!(game.score_of(&PlayerId::new("a")), None);
    }
}
