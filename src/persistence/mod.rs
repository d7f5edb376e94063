//! Best-score persistence
//!
//! A single scalar survives between sessions. Storage is a capability so the
//! game loop can run against LocalStorage in the browser and memory elsewhere.
//! Reads never fail: missing or corrupt data loads as 0.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
pub mod local;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

/// Fixed storage key for the best score
pub const BEST_SCORE_KEY: &str = "flappy_gates_best";

pub trait ScoreStore {
    /// Stored best score, or 0 if there is none
    fn load_best_score(&mut self) -> u32;
    fn save_best_score(&mut self, score: u32);
}

/// Stored form of the best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub best: u32,
}

impl BestScoreRecord {
    pub fn to_json(self) -> String {
        // A struct of one integer always serializes
        serde_json::to_string(&self).unwrap_or_else(|_| format!("{{\"best\":{}}}", self.best))
    }

    /// Accepts the JSON record or a bare integer; anything else is `None`
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        serde_json::from_str::<BestScoreRecord>(raw)
            .ok()
            .or_else(|| raw.parse::<u32>().ok().map(|best| Self { best }))
    }
}

/// In-memory store (native runs and tests)
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    best: Option<u32>,
    /// Number of writes performed
    pub writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self {
            best: Some(best),
            writes: 0,
        }
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }
}

impl ScoreStore for MemoryStore {
    fn load_best_score(&mut self) -> u32 {
        self.best.unwrap_or(0)
    }

    fn save_best_score(&mut self, score: u32) {
        self.best = Some(score);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_parse() {
        assert_eq!(BestScoreRecord::parse(r#"{"best":12}"#), Some(BestScoreRecord { best: 12 }));
        assert_eq!(BestScoreRecord::parse(" 7 "), Some(BestScoreRecord { best: 7 }));
        assert_eq!(BestScoreRecord::parse("-3"), None);
        assert_eq!(BestScoreRecord::parse("garbage"), None);
    }

    #[test]
    fn test_record_json_shape() {
        let json = BestScoreRecord { best: 41 }.to_json();
        assert_eq!(json, r#"{"best":41}"#);
        assert_eq!(BestScoreRecord::parse(&json), Some(BestScoreRecord { best: 41 }));
    }

    #[test]
    fn test_memory_store_defaults_to_zero() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load_best_score(), 0);
        store.save_best_score(9);
        assert_eq!(store.load_best_score(), 9);
        assert_eq!(store.writes, 1);
    }
}
