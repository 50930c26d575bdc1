//! Round-robin core for Berger-table tournaments
//!
//! This crate provides:
//! - The tournament data model (players, games, rounds)
//! - Pairing generation with classical Berger tables, including a bye for odd rosters
//! - Standings with a Sonneborn-Berger style tiebreak
//!
//! Everything here is pure: no I/O, no shared state. Callers own the
//! [`Tournament`] and pass it in.
//!
//! # Usage
//!
//! ```ignore
//! use round_robin::{generate_in_order, standings, Player, PlayerId, Tournament};
//!
//! let players: Vec<Player> = ["Anna", "Boris", "Clara"]
//!     .iter()
//!     .map(|name| Player::new(*name, *name))
//!     .collect();
//! let ids: Vec<PlayerId> = players.iter().map(|p| p.id.clone()).collect();
//! let rounds = generate_in_order(&ids)?;
//! let tournament = Tournament::new("t1", "Club championship", players, rounds);
//! let rows = standings::compute(&tournament);
//! ```

pub mod berger;
pub mod error;
pub mod place;
pub mod standings;
pub mod types;

pub use berger::{generate, generate_in_order, shuffle_in_place};
pub use error::*;
pub use place::PlaceOverrides;
pub use types::*;
