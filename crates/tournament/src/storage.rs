//! Local persistence of tournaments in a data directory
//!
//! Each tournament lives in `tournament-<id>.json` (export format). A small
//! `last` file remembers which one is active.

use round_robin::Tournament;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::export::{parse_tournament, serialize_tournament, ExportError};

const LAST_ID_FILE: &str = "last";
const FILE_PREFIX: &str = "tournament-";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Format(#[from] ExportError),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Directory-backed tournament store
#[derive(Debug, Clone)]
pub struct TournamentStore {
    root: PathBuf,
}

impl TournamentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn tournament_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{FILE_PREFIX}{id}.json"))
    }

    fn last_id_path(&self) -> PathBuf {
        self.root.join(LAST_ID_FILE)
    }

    /// Write the tournament and mark it as the active one.
    pub fn save(&self, tournament: &Tournament) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.root).map_err(io_error(&self.root))?;

        let path = self.tournament_path(&tournament.id);
        let json = serialize_tournament(tournament)?;
        fs::write(&path, json).map_err(io_error(&path))?;

        let last = self.last_id_path();
        fs::write(&last, &tournament.id).map_err(io_error(&last))?;

        debug!(path = %path.display(), "saved tournament");
        Ok(path)
    }

    /// The active tournament, if one is stored and readable.
    ///
    /// Missing or damaged files are treated as "nothing stored".
    pub fn load_last(&self) -> Option<Tournament> {
        let id = fs::read_to_string(self.last_id_path()).ok()?;
        let id = id.trim();
        if id.is_empty() {
            return None;
        }

        let path = self.tournament_path(id);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "active tournament file unreadable");
                return None;
            }
        };
        match parse_tournament(&contents) {
            Ok(tournament) => Some(tournament),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "active tournament file damaged");
                None
            }
        }
    }

    /// Forget the active tournament, deleting its file when `id` is given.
    pub fn clear(&self, id: Option<&str>) -> Result<(), StoreError> {
        if let Some(id) = id {
            remove_if_present(&self.tournament_path(id))?;
        }
        remove_if_present(&self.last_id_path())
    }
}

fn remove_if_present(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(io_error(path)(e)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use round_robin::{generate_in_order, Player, PlayerId};
    use tempfile::TempDir;

    fn sample(id: &str) -> Tournament {
        let players: Vec<Player> = ["A", "B"].iter().map(|n| Player::new(*n, *n)).collect();
        let ids: Vec<PlayerId> = players.iter().map(|p| p.id.clone()).collect();
        Tournament::new(id, "Stored", players, generate_in_order(&ids).unwrap())
    }

    #[test]
    fn test_save_then_load_last() {
        let temp = TempDir::new().unwrap();
        let store = TournamentStore::new(temp.path().join("data"));

        store.save(&sample("one")).unwrap();
        store.save(&sample("two")).unwrap();

        let loaded = store.load_last().unwrap();
        assert_eq!(loaded.id, "two");
        assert!(temp.path().join("data/tournament-one.json").exists());
    }

    #[test]
    fn test_load_last_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = TournamentStore::new(temp.path());
        assert!(store.load_last().is_none());
    }

    #[test]
    fn test_load_last_ignores_damaged_file() {
        let temp = TempDir::new().unwrap();
        let store = TournamentStore::new(temp.path());
        store.save(&sample("bad")).unwrap();
        fs::write(temp.path().join("tournament-bad.json"), "{ broken").unwrap();

        assert!(store.load_last().is_none());
    }

    #[test]
    fn test_clear_removes_file_and_pointer() {
        let temp = TempDir::new().unwrap();
        let store = TournamentStore::new(temp.path());
        let path = store.save(&sample("gone")).unwrap();

        store.clear(Some("gone")).unwrap();
        assert!(!path.exists());
        assert!(store.load_last().is_none());

        // Clearing again is fine.
        store.clear(Some("gone")).unwrap();
    }
}
