//! Plain-text reports: crosstable, pairings per round and standings

use round_robin::standings;
use round_robin::{Game, Outcome, PlayerId, Score, StandingsRow, Tournament};
use std::collections::HashMap;

use crate::results::score_from_perspective;

/// Points with no trailing `.0` for whole numbers.
pub fn format_points(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub fn format_tiebreak(value: f64) -> String {
    format!("{value:.2}")
}

/// `YYYY-MM-DD` becomes `DD.MM.YYYY`; anything else is printed as is.
pub fn format_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{day}.{month}.{year}"),
        _ => date.to_string(),
    }
}

fn format_outcome(outcome: Option<Outcome>) -> &'static str {
    match outcome {
        Some(Outcome::FirstWins) => "1-0",
        Some(Outcome::SecondWins) => "0-1",
        Some(Outcome::Draw) => "½-½",
        None => "",
    }
}

/// Crosstable cell for `player` in `game`.
fn cell(game: Option<&Game>, player: &PlayerId) -> &'static str {
    match game.and_then(|game| score_from_perspective(game, player)) {
        Some(Score::Win) => "1",
        Some(Score::Draw) => "½",
        Some(Score::Loss) => "0",
        None => "",
    }
}

fn header(tournament: &Tournament) -> String {
    let mut out = format!("=== {} ===\n", tournament.name);
    if !tournament.date.is_empty() {
        out.push_str(&format!("Date: {}\n", format_date(&tournament.date)));
    }
    if !tournament.chief_judge.is_empty() {
        out.push_str(&format!("Chief judge: {}\n", tournament.chief_judge));
    }
    out.push('\n');
    out
}

fn name_width(tournament: &Tournament) -> usize {
    tournament
        .players
        .iter()
        .map(|player| player.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4)
}

fn player_name<'a>(tournament: &'a Tournament, id: &PlayerId) -> &'a str {
    tournament
        .player(id)
        .map(|player| player.name.as_str())
        .unwrap_or("?")
}

/// The Berger crosstable: every player against every other, in roster order.
pub fn crosstable(tournament: &Tournament) -> String {
    let rows: HashMap<PlayerId, StandingsRow> = standings::compute(tournament)
        .into_iter()
        .map(|row| (row.player_id.clone(), row))
        .collect();
    let width = name_width(tournament);

    let mut report = header(tournament);
    report.push_str(&format!("{:>3}  {:<width$}", "#", "Name"));
    for number in 1..=tournament.players.len() {
        report.push_str(&format!(" {number:>3}"));
    }
    report.push_str(&format!(" {:>5} {:>7} {:>6}\n", "Pts", "TB", "Place"));
    report.push_str(&"-".repeat(width + 5 + 4 * tournament.players.len() + 21));
    report.push('\n');

    for (index, player) in tournament.players.iter().enumerate() {
        report.push_str(&format!("{:>3}  {:<width$}", index + 1, player.name));
        for opponent in &tournament.players {
            let mark = if opponent.id == player.id {
                "X"
            } else {
                cell(tournament.game_between(&player.id, &opponent.id), &player.id)
            };
            report.push_str(&format!(" {mark:>3}"));
        }
        if let Some(row) = rows.get(&player.id) {
            report.push_str(&format!(
                " {:>5} {:>7} {:>6}",
                format_points(row.points),
                format_tiebreak(row.tiebreak),
                tournament.place_overrides.label_for(row)
            ));
        }
        report.push('\n');
    }
    report
}

/// Pairings of every round, with results where known.
pub fn rounds_list(tournament: &Tournament) -> String {
    let width = name_width(tournament);
    let mut report = header(tournament);

    for round in &tournament.rounds {
        report.push_str(&format!("Round {}\n", round.round_number));
        for (board, game) in round.games.iter().enumerate() {
            let first = format!(
                "{} ({})",
                player_name(tournament, &game.first),
                tournament.start_number(&game.first).unwrap_or(0)
            );
            if game.is_bye {
                report.push_str(&format!(
                    "  {:>2}. {:<w$}   BYE\n",
                    board + 1,
                    first,
                    w = width + 5
                ));
                continue;
            }
            let second = format!(
                "{} ({})",
                player_name(tournament, &game.second),
                tournament.start_number(&game.second).unwrap_or(0)
            );
            report.push_str(&format!(
                "  {:>2}. {:<w$} - {:<w$} {}\n",
                board + 1,
                first,
                second,
                format_outcome(game.result),
                w = width + 5
            ));
        }
        report.push('\n');
    }
    report
}

/// Standings sorted by place, with any duplicated manual places flagged.
pub fn standings_list(tournament: &Tournament) -> String {
    let rows = standings::ranked(tournament);
    let width = name_width(tournament);

    let mut report = header(tournament);
    report.push_str(&format!(
        "{:>6}  {:>3}  {:<width$} {:>5} {:>7}\n",
        "Place", "#", "Name", "Pts", "TB"
    ));
    report.push_str(&"-".repeat(width + 28));
    report.push('\n');

    for row in &rows {
        report.push_str(&format!(
            "{:>6}  {:>3}  {:<width$} {:>5} {:>7}\n",
            tournament.place_overrides.label_for(row),
            tournament.start_number(&row.player_id).unwrap_or(0),
            player_name(tournament, &row.player_id),
            format_points(row.points),
            format_tiebreak(row.tiebreak)
        ));
    }

    let duplicates = tournament.place_overrides.duplicate_labels(&rows);
    if !duplicates.is_empty() {
        report.push_str(&format!("\nDuplicate places: {}\n", duplicates.join(", ")));
    }
    report.push_str(&format!(
        "\nGames played: {}/{}\n",
        tournament.played_games(),
        tournament.real_games()
    ));
    report
}
