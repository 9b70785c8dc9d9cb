//! Optional NFT mint hook
//!
//! The hosting page may expose `window.mintForHighScore(score)` returning a
//! Promise. When a new high score lands we call it without awaiting the game
//! loop on the result. A page without the hook simply logs and moves on.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
export function mint_for_high_score(score) {
    if (typeof window.mintForHighScore === "function") {
        return Promise.resolve(window.mintForHighScore(score));
    }
    return Promise.reject(new Error("mintForHighScore not provided"));
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn mint_for_high_score(score: u32) -> Result<js_sys::Promise, JsValue>;
}

/// Kick off a mint for a freshly earned high score
pub fn mint_high_score(score: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        let promise = match mint_for_high_score(score) {
            Ok(p) => p,
            Err(err) => {
                log::warn!("Mint hook unavailable: {err:?}");
                return;
            }
        };
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("Minted high score {score}"),
            Err(err) => log::warn!("Mint for score {score} failed: {err:?}"),
        }
    });
}
