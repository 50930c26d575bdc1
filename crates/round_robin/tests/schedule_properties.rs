//! Structural properties of generated schedules
//!
//! For every roster size these check:
//! - round and game counts
//! - each pair of players meets exactly once
//! - each player appears exactly once per round
//! - odd rosters give each player exactly one bye

use rand::rngs::StdRng;
use rand::SeedableRng;
use round_robin::{generate, generate_in_order, PlayerId, Round};
use std::collections::{HashMap, HashSet};

fn roster(count: usize) -> Vec<PlayerId> {
    (1..=count).map(|i| PlayerId::new(format!("p{i}"))).collect()
}

fn padded(count: usize) -> usize {
    if count % 2 == 0 {
        count
    } else {
        count + 1
    }
}

fn check_schedule(players: &[PlayerId], rounds: &[Round]) {
    let n = players.len();
    let total = padded(n);

    assert_eq!(rounds.len(), total - 1, "round count for n={n}");

    let mut meetings: HashMap<(PlayerId, PlayerId), usize> = HashMap::new();
    let mut byes: HashMap<&PlayerId, usize> = HashMap::new();

    for (index, round) in rounds.iter().enumerate() {
        assert_eq!(round.round_number as usize, index + 1);
        assert_eq!(round.games.len(), total / 2, "games per round for n={n}");

        let mut seen = HashSet::new();
        for game in &round.games {
            assert_eq!(game.round_number, round.round_number);
            assert!(game.result.is_none());
            assert!(!game.first.is_bye(), "bye never sits in the first slot");
            assert!(seen.insert(game.first.clone()));

            if game.is_bye {
                assert!(game.second.is_bye());
                *byes.entry(&game.first).or_insert(0) += 1;
            } else {
                assert!(seen.insert(game.second.clone()));
                let key = if game.first < game.second {
                    (game.first.clone(), game.second.clone())
                } else {
                    (game.second.clone(), game.first.clone())
                };
                *meetings.entry(key).or_insert(0) += 1;
            }
        }

        let expected: HashSet<PlayerId> = players.iter().cloned().collect();
        assert_eq!(seen, expected, "every player once in round {}", index + 1);

        // Bye game, if any, is last.
        if let Some(position) = round.games.iter().position(|game| game.is_bye) {
            assert_eq!(position, round.games.len() - 1);
        }
    }

    assert_eq!(meetings.len(), n * (n - 1) / 2, "pair count for n={n}");
    assert!(meetings.values().all(|&count| count == 1));

    if n % 2 == 1 {
        assert_eq!(byes.len(), n);
        assert!(byes.values().all(|&count| count == 1));
    } else {
        assert!(byes.is_empty());
    }
}

#[test]
fn test_schedule_properties_in_order() {
    for n in 2..=20 {
        let players = roster(n);
        let rounds = generate_in_order(&players).unwrap();
        check_schedule(&players, &rounds);
    }
}

#[test]
fn test_schedule_properties_shuffled() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n in 2..=15 {
        let players = roster(n);
        let rounds = generate(&players, true, &mut rng).unwrap();
        check_schedule(&players, &rounds);
    }
}

#[test]
fn test_first_slot_balance() {
    // Berger ordering keeps first-slot counts within one of each other.
    for n in [4usize, 6, 8, 10, 12] {
        let players = roster(n);
        let rounds = generate_in_order(&players).unwrap();

        let mut firsts: HashMap<&PlayerId, usize> = HashMap::new();
        for game in rounds.iter().flat_map(|round| round.games.iter()) {
            *firsts.entry(&game.first).or_insert(0) += 1;
        }
        let min = players.iter().map(|p| firsts.get(p).copied().unwrap_or(0)).min().unwrap();
        let max = players.iter().map(|p| firsts.get(p).copied().unwrap_or(0)).max().unwrap();
        assert!(max - min <= 1, "n={n}: first-slot spread {min}..{max}");
    }
}
