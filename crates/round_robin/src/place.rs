//! Manually entered places.
//!
//! Organisers sometimes split ties by hand (a playoff, a coin toss). These
//! labels only change what is displayed; standings are always computed
//! without them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{PlayerId, StandingsRow};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceOverrides(BTreeMap<PlayerId, String>);

impl PlaceOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set the label for `player`. A blank label removes the override.
    pub fn set(&mut self, player: PlayerId, label: impl Into<String>) {
        let label = label.into();
        if label.trim().is_empty() {
            self.0.remove(&player);
        } else {
            self.0.insert(player, label);
        }
    }

    pub fn get(&self, player: &PlayerId) -> Option<&str> {
        self.0.get(player).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Place to display for `row`: the override if any, else the computed place.
    pub fn label_for(&self, row: &StandingsRow) -> String {
        match self.get(&row.player_id) {
            Some(label) => label.to_string(),
            None => row.place.to_string(),
        }
    }

    /// Labels shown for more than one player, in sorted order.
    pub fn duplicate_labels(&self, standings: &[StandingsRow]) -> Vec<String> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for row in standings {
            let label = self.label_for(row);
            let key = label.trim();
            if key.is_empty() {
                continue;
            }
            *counts.entry(key.to_string()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(label, _)| label)
            .collect()
    }
}
