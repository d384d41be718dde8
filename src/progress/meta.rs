//! Aggregate player meta: XP, coins, streak, badges, settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Player-facing settings persisted alongside the meta record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// When true, chapter i requires chapter i-1 to be complete.
    #[serde(rename = "sequentialUnlock")]
    pub sequential_unlock: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sequential_unlock: true,
        }
    }
}

/// Aggregate progress record.
///
/// Every field is required at deserialization on purpose: a persisted
/// record with a missing or wrongly-typed field is rejected wholesale and
/// replaced with defaults, rather than merged field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub xp: u64,
    pub coins: u64,
    /// Consecutive correct answers since the last miss
    pub streak: u32,
    /// Opaque badge keys; sorted so serialized output is stable
    pub badges: BTreeSet<String>,
    pub settings: Settings,
    /// Unix timestamp of the last mutation
    pub last_played: i64,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            xp: 0,
            coins: 0,
            streak: 0,
            badges: BTreeSet::new(),
            settings: Settings::default(),
            last_played: 0,
        }
    }
}

impl Meta {
    pub fn has_badge(&self, name: &str) -> bool {
        self.badges.contains(name)
    }
}
