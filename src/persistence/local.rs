//! LocalStorage-backed best score

use web_sys::Storage;

use super::{BEST_SCORE_KEY, BestScoreRecord, ScoreStore};

/// Best score kept in the browser's LocalStorage
pub struct LocalStore {
    storage: Option<Storage>,
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - best score will not persist");
        }
        Self { storage }
    }
}

impl ScoreStore for LocalStore {
    fn load_best_score(&mut self) -> u32 {
        let Some(storage) = &self.storage else {
            return 0;
        };

        match storage.get_item(BEST_SCORE_KEY) {
            Ok(Some(raw)) => match BestScoreRecord::parse(&raw) {
                Some(record) => {
                    log::info!("Loaded best score {}", record.best);
                    record.best
                }
                None => {
                    log::warn!("Corrupt best score {:?}, starting from 0", raw);
                    0
                }
            },
            _ => {
                log::info!("No best score found, starting fresh");
                0
            }
        }
    }

    fn save_best_score(&mut self, score: u32) {
        let Some(storage) = &self.storage else {
            return;
        };
        let json = BestScoreRecord { best: score }.to_json();
        if storage.set_item(BEST_SCORE_KEY, &json).is_ok() {
            log::info!("Best score saved ({})", score);
        } else {
            log::warn!("Failed to save best score");
        }
    }
}
