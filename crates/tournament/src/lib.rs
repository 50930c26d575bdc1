//! Round-robin tournament manager
//!
//! This crate provides infrastructure for:
//! - Parsing a free-text roster and making the Berger draw
//! - Recording results and computing standings
//! - Saving, exporting and importing tournaments as JSON
//! - Printing crosstables, pairings and standings
//!
//! # Usage
//!
//! ```bash
//! # Make a draw for five players
//! cargo run -p tournament -- new --name "Club cup" --players "Anna, Boris, Clara, Dmitri, Eva"
//!
//! # Record that Boris beat Eva in round 1, then show the crosstable
//! cargo run -p tournament -- result 1 Boris Eva 1-0
//! cargo run -p tournament -- table
//! ```

pub mod config;
pub mod export;
pub mod report;
pub mod results;
pub mod roster;
pub mod setup;
pub mod storage;

pub use config::*;
pub use export::*;
pub use report::*;
pub use results::*;
pub use roster::*;
pub use setup::*;
pub use storage::*;
