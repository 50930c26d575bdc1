//! Berger table pairing generation.
//!
//! Participants are seated at positions `1..=total` (an odd roster gets an
//! extra bye seat). Position `total` stays fixed while the other `total - 1`
//! seats rotate one step per round. The rounds of that raw rotation are then
//! interleaved (first half for odd rounds, second half for even rounds) so
//! that every participant alternates between the first and second slot as
//! evenly as the table allows.

use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

use crate::error::PairingError;
use crate::types::{Game, PlayerId, Round};

/// A pair of 1-based seat positions.
pub type PositionPair = (usize, usize);

/// Build the complete schedule for `players`.
///
/// With `shuffle` set, the roster is permuted with `rng` before seating; this
/// permutation is the only source of randomness in the schedule.
pub fn generate<R: Rng + ?Sized>(
    players: &[PlayerId],
    shuffle: bool,
    rng: &mut R,
) -> Result<Vec<Round>, PairingError> {
    validate_roster(players)?;
    let mut seating = players.to_vec();
    if shuffle {
        shuffle_in_place(&mut seating, rng);
    }
    Ok(schedule(seating))
}

/// Build the schedule keeping the roster order as the seating order.
pub fn generate_in_order(players: &[PlayerId]) -> Result<Vec<Round>, PairingError> {
    validate_roster(players)?;
    Ok(schedule(players.to_vec()))
}

/// Fisher-Yates: walk from the back, swapping each slot with a uniformly
/// chosen slot at or before it.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

fn validate_roster(players: &[PlayerId]) -> Result<(), PairingError> {
    if players.len() < 2 {
        return Err(PairingError::TooFewPlayers {
            count: players.len(),
        });
    }

    let mut seen = HashSet::with_capacity(players.len());
    for id in players {
        if id.is_bye() {
            return Err(PairingError::ReservedIdentifier(id.clone()));
        }
        if !seen.insert(id) {
            return Err(PairingError::DuplicatePlayer(id.clone()));
        }
    }
    Ok(())
}

fn schedule(mut seating: Vec<PlayerId>) -> Vec<Round> {
    if seating.len() % 2 == 1 {
        seating.push(PlayerId::bye());
    }
    let total = seating.len();
    debug!(total, rounds = total - 1, "building Berger schedule");

    ordered_position_pairs(total)
        .into_iter()
        .zip(1u32..)
        .map(|(pairs, round_number)| {
            let mut games: Vec<Game> = pairs
                .into_iter()
                .map(|(a, b)| {
                    let first = &seating[a - 1];
                    let second = &seating[b - 1];
                    if first.is_bye() {
                        Game::bye(round_number, second.clone())
                    } else if second.is_bye() {
                        Game::bye(round_number, first.clone())
                    } else {
                        Game::new(round_number, first.clone(), second.clone())
                    }
                })
                .collect();
            // Stable: only moves the bye game to the end.
            games.sort_by_key(|game| game.is_bye);
            Round {
                round_number,
                games,
            }
        })
        .collect()
}

/// Raw circular rotation: `total - 1` rounds of `total / 2` seat pairs.
///
/// `total` must be even and at least 2.
pub fn rotation_table(total: usize) -> Vec<Vec<PositionPair>> {
    let cycle = total - 1;
    (1..total)
        .map(|round| {
            (1..=total / 2)
                .map(|i| {
                    if i == 1 {
                        (total, round)
                    } else {
                        let a = (round + i - 2) % cycle + 1;
                        let b = (round + cycle - i) % cycle + 1;
                        (a, b)
                    }
                })
                .collect()
        })
        .collect()
}

/// Published Berger order of the rotation rounds.
///
/// Odd rounds take the first half of the rotation in order, with the fixed
/// seat's pair flipped; even rounds take the second half in order, unflipped.
pub fn ordered_position_pairs(total: usize) -> Vec<Vec<PositionPair>> {
    let base = rotation_table(total);
    let half = (total - 1).div_ceil(2);

    (1..total)
        .map(|round| {
            if round % 2 == 1 {
                let mut pairs = base[(round - 1) / 2].clone();
                if let Some(first) = pairs.first_mut() {
                    *first = (first.1, first.0);
                }
                pairs
            } else {
                base[half + round / 2 - 1].clone()
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "berger_tests.rs"]
mod berger_tests;
