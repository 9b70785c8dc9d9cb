//! High score persistence
//!
//! A single integer best score, persisted to LocalStorage under the key the
//! game has always used. The simulation holds the loaded value and emits a
//! `NewHighScore` event when a run beats it; the host calls `save` in
//! response. Storage failures never affect game state.

/// LocalStorage key (used only in wasm32)
#[allow(dead_code)]
const STORAGE_KEY: &str = "project.github.chrome_dino.high_score";

/// Load the persisted high score (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn load() -> u32 {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
            match raw.parse::<u32>() {
                Ok(score) => {
                    log::info!("Loaded high score {score}");
                    return score;
                }
                Err(e) => log::warn!("Stored high score unreadable: {e}"),
            }
        }
    }

    log::info!("No high score found, starting fresh");
    0
}

/// Persist a new high score (WASM only); failures are logged and ignored
#[cfg(target_arch = "wasm32")]
pub fn save(score: u32) {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        if storage.set_item(STORAGE_KEY, &score.to_string()).is_ok() {
            log::info!("High score saved ({score})");
        } else {
            log::warn!("Failed to persist high score {score}");
        }
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> u32 {
    0
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_score: u32) {
    // No-op for native
}
