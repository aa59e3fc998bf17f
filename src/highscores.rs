//! Best-score persistence
//!
//! A single integer under a fixed storage key, owned by the embedding UI
//! rather than the session engine. The engine only receives the loaded value
//! via `Session::set_highscore` and reports `is_new_highscore` at game over;
//! writing the improved value back happens here.
//!
//! Persisted to LocalStorage on wasm; native builds keep it in memory.

use serde::{Deserialize, Serialize};

/// Persisted best score
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "archery_pop_highscore";

    /// Fresh store with no recorded score
    pub fn new() -> Self {
        Self { best: 0 }
    }

    /// The stored best score
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Whether a finished session's score improves the stored best
    pub fn beats(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a finished session's score. Returns true if it improved the
    /// best (the caller then saves).
    pub fn record(&mut self, score: u32) -> bool {
        if !self.beats(score) {
            return false;
        }
        self.best = score;
        true
    }

    /// Reset the stored best to zero
    pub fn reset(&mut self) {
        self.best = 0;
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(store) = serde_json::from_str::<HighScore>(&json) {
                    log::info!("Loaded best score: {}", store.best);
                    return store;
                }
            }
        }

        log::info!("No stored best score, starting fresh");
        Self::new()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Best score saved: {}", self.best);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_only_improvements() {
        let mut store = HighScore::new();
        assert!(store.record(25));
        assert_eq!(store.best(), 25);

        assert!(!store.record(12));
        assert_eq!(store.best(), 25);

        // Ties do not count as a new high
        assert!(!store.record(25));
        assert_eq!(store.best(), 25);
    }

    #[test]
    fn test_reset() {
        let mut store = HighScore::new();
        store.record(40);
        store.reset();
        assert_eq!(store.best(), 0);
        assert!(store.beats(1));
    }
}
