//! End-to-end tournament lifecycle
//!
//! Roster text -> draw -> results -> persistence -> export/import -> standings.

use rand::rngs::StdRng;
use rand::SeedableRng;
use round_robin::standings;
use round_robin::{Outcome, PlayerId};
use tempfile::TempDir;
use tournament::{
    create_tournament, crosstable, parse_participants, parse_tournament, record_result,
    serialize_tournament, update_details, RosterLimits, TournamentSetup, TournamentStore,
    DEFAULT_NAME,
};

fn names(text: &str) -> Vec<String> {
    let parsed = parse_participants(text, RosterLimits::default());
    assert!(parsed.is_ready());
    parsed.names
}

fn id_of(t: &round_robin::Tournament, name: &str) -> PlayerId {
    t.players
        .iter()
        .find(|player| player.name == name)
        .map(|player| player.id.clone())
        .unwrap()
}

#[test]
fn test_create_without_shuffle_keeps_roster_order() {
    let setup = TournamentSetup {
        name: "Club cup".to_string(),
        date: "2026-05-01".to_string(),
        ..Default::default()
    };
    let t = create_tournament(&setup, &names("Anna, Boris, Clara, Dmitri"), &mut StdRng::seed_from_u64(1))
        .unwrap();

    let roster: Vec<&str> = t.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(roster, vec!["Anna", "Boris", "Clara", "Dmitri"]);
    assert_eq!(t.rounds.len(), 3);
    assert_eq!(t.real_games(), 6);
    assert_eq!(t.date, "2026-05-01");
    assert!(!t.shuffle_players);

    // Round 1 of the Berger table for four: 1-4, 2-3
    let round = &t.rounds[0];
    assert_eq!(round.games[0].first, id_of(&t, "Anna"));
    assert_eq!(round.games[0].second, id_of(&t, "Dmitri"));
}

#[test]
fn test_seeded_shuffle_is_reproducible() {
    let setup = TournamentSetup {
        shuffle_players: true,
        ..Default::default()
    };
    let roster = names("A\nB\nC\nD\nE\nF\nG");

    let first = create_tournament(&setup, &roster, &mut StdRng::seed_from_u64(99)).unwrap();
    let second = create_tournament(&setup, &roster, &mut StdRng::seed_from_u64(99)).unwrap();

    let order = |t: &round_robin::Tournament| -> Vec<String> {
        t.players.iter().map(|p| p.name.clone()).collect()
    };
    assert_eq!(order(&first), order(&second));
    assert_eq!(first.name, DEFAULT_NAME);
    assert!(!first.date.is_empty());
    assert_eq!(first.rounds.len(), 7);
    assert!(first.rounds.iter().all(|round| round.bye_game().is_some()));
}

#[test]
fn test_results_survive_storage_and_export() {
    let temp = TempDir::new().unwrap();
    let store = TournamentStore::new(temp.path());

    let setup = TournamentSetup {
        name: "Weekend rapid".to_string(),
        ..Default::default()
    };
    let mut t = create_tournament(&setup, &names("A, B, C, D"), &mut StdRng::seed_from_u64(5))
        .unwrap();

    let (a, b, c, d) = (id_of(&t, "A"), id_of(&t, "B"), id_of(&t, "C"), id_of(&t, "D"));
    // Schedule: R1 A-D, B-C; R2 D-C, A-B; R3 B-D, C-A
    record_result(&mut t, 1, &a, &d, Some(Outcome::FirstWins)).unwrap();
    record_result(&mut t, 1, &b, &c, Some(Outcome::Draw)).unwrap();
    record_result(&mut t, 3, &c, &a, Some(Outcome::FirstWins)).unwrap();
    record_result(&mut t, 3, &b, &d, Some(Outcome::FirstWins)).unwrap();
    record_result(&mut t, 2, &a, &b, Some(Outcome::Draw)).unwrap();
    record_result(&mut t, 2, &c, &d, Some(Outcome::SecondWins)).unwrap();
    assert!(t.is_complete());

    update_details(&mut t, None, Some("J. Arbiter"));
    store.save(&t).unwrap();

    let loaded = store.load_last().unwrap();
    assert_eq!(loaded, t);

    let reimported = parse_tournament(&serialize_tournament(&loaded).unwrap()).unwrap();
    let rows = standings::compute(&reimported);
    let points: Vec<f64> = rows.iter().map(|row| row.points).collect();
    let places: Vec<usize> = rows.iter().map(|row| row.place).collect();
    assert_eq!(points, vec![1.5, 2.0, 1.5, 1.0]);
    assert_eq!(places, vec![3, 1, 2, 4]);
    assert_eq!(reimported.chief_judge, "J. Arbiter");

    let table = crosstable(&reimported);
    assert!(table.contains("Weekend rapid"));
    assert!(table.contains("Chief judge: J. Arbiter"));
}
