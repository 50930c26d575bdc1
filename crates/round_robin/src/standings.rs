//! Standings: points, Berger tiebreak and final places.

use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

use crate::types::{Game, Outcome, PlayerId, Side, StandingsRow, Tournament};

/// Compute the standings table from scratch.
///
/// Rows come back in roster order; each carries its place (1-based, no gaps,
/// no shared places). Unplayed and bye games count for nothing.
pub fn compute(tournament: &Tournament) -> Vec<StandingsRow> {
    let points = accumulate_points(tournament);
    let tiebreaks = accumulate_tiebreaks(tournament, &points);

    let mut rows: Vec<StandingsRow> = tournament
        .players
        .iter()
        .map(|player| StandingsRow {
            player_id: player.id.clone(),
            points: points.get(&player.id).copied().unwrap_or(0.0),
            tiebreak: tiebreaks.get(&player.id).copied().unwrap_or(0.0),
            place: 0,
        })
        .collect();

    // Roster index is the final tie-break, so the ranking is a total order.
    let mut ranking: Vec<usize> = (0..rows.len()).collect();
    ranking.sort_by(|&a, &b| compare_rows(&rows[a], &rows[b]).then(a.cmp(&b)));
    for (place, index) in ranking.into_iter().enumerate() {
        rows[index].place = place + 1;
    }

    debug!(
        players = rows.len(),
        played = tournament.played_games(),
        "computed standings"
    );
    rows
}

/// Rows sorted by place, for listing.
pub fn ranked(tournament: &Tournament) -> Vec<StandingsRow> {
    let mut rows = compute(tournament);
    rows.sort_by_key(|row| row.place);
    rows
}

/// Higher points first, then higher tiebreak.
fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .total_cmp(&a.points)
        .then_with(|| b.tiebreak.total_cmp(&a.tiebreak))
}

fn scored_games(tournament: &Tournament) -> impl Iterator<Item = (&Game, Outcome)> {
    tournament
        .games()
        .filter_map(|game| game.scored_outcome().map(|outcome| (game, outcome)))
}

fn accumulate_points(tournament: &Tournament) -> HashMap<&PlayerId, f64> {
    let mut points: HashMap<&PlayerId, f64> = tournament
        .players
        .iter()
        .map(|player| (&player.id, 0.0))
        .collect();

    for (game, outcome) in scored_games(tournament) {
        *points.entry(&game.first).or_insert(0.0) += outcome.score(Side::First);
        *points.entry(&game.second).or_insert(0.0) += outcome.score(Side::Second);
    }
    points
}

/// Each scored game adds the opponent's final point total, weighted by the
/// player's own score in that game (1, ½ or 0).
fn accumulate_tiebreaks<'a>(
    tournament: &'a Tournament,
    points: &HashMap<&PlayerId, f64>,
) -> HashMap<&'a PlayerId, f64> {
    let mut tiebreaks: HashMap<&PlayerId, f64> = tournament
        .players
        .iter()
        .map(|player| (&player.id, 0.0))
        .collect();

    for (game, outcome) in scored_games(tournament) {
        let first_points = points.get(&game.first).copied().unwrap_or(0.0);
        let second_points = points.get(&game.second).copied().unwrap_or(0.0);

        *tiebreaks.entry(&game.first).or_insert(0.0) +=
            outcome.score(Side::First) * second_points;
        *tiebreaks.entry(&game.second).or_insert(0.0) +=
            outcome.score(Side::Second) * first_points;
    }
    tiebreaks
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
