//! Color palettes and NFT cosmetic theming
//!
//! A theme maps layout palette indices to CSS colors plus the board chrome
//! (background, road, text). The active theme is persisted to LocalStorage;
//! connected wallets can derive a theme from an owned NFT's metadata
//! attributes. The wallet flow itself lives in the page glue, not here.

use serde::{Deserialize, Serialize};

/// LocalStorage key for the selected theme
pub const THEME_STORAGE_KEY: &str = "dino_theme";

/// A full cosmetic theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: u32,
    pub background: String,
    pub road: String,
    pub score_text: String,
    pub info_text: String,
    /// Palette: layout index to fill color; `None` cells are not painted
    pub layout: Vec<Option<String>>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::colorful()
    }
}

impl Theme {
    /// Monochrome look of the classic offline game
    pub fn classic() -> Self {
        Self {
            id: 0,
            background: "#f7f7f7".into(),
            road: "#535353".into(),
            score_text: "#535353".into(),
            info_text: "#535353".into(),
            layout: vec![
                None,
                Some("#535353".into()),
                Some("#333333".into()),
                Some("#ffffff".into()),
                Some("#ff0000".into()),
                None,
            ],
        }
    }

    /// Default daylight palette
    pub fn colorful() -> Self {
        Self {
            id: 1,
            background: "#a5f3fc".into(),
            road: "#7c3aed".into(),
            score_text: "#1f2937".into(),
            info_text: "#1f2937".into(),
            layout: vec![
                None,
                Some("#22c55e".into()),
                Some("#333333".into()),
                Some("#ffffff".into()),
                Some("#ef4444".into()),
                None,
            ],
        }
    }

    /// Fill color for a palette index, if the theme paints it
    pub fn color_for(&self, index: u8) -> Option<&str> {
        self.layout.get(index as usize).and_then(|c| c.as_deref())
    }

    /// Derive a theme from NFT metadata attributes.
    ///
    /// The `background` trait colors the sky and the first word of the
    /// `clothing` trait colors the body palette slot; unknown or missing
    /// traits fall back to neutral defaults. Returns `None` only if the
    /// document does not parse.
    pub fn from_nft_metadata(json: &str) -> Option<Self> {
        let metadata: NftMetadata = serde_json::from_str(json).ok()?;

        let trait_value = |name: &str| {
            metadata
                .attributes
                .iter()
                .find(|a| a.trait_type == name)
                .map(|a| a.value.as_str())
        };

        let background = trait_value("background")
            .and_then(trait_color)
            .unwrap_or("#ffffff");
        let clothing = trait_value("clothing")
            .and_then(|v| v.split_whitespace().next())
            .and_then(trait_color)
            .unwrap_or("#535353");

        Some(Self {
            id: 99,
            background: background.into(),
            road: "#7c3aed".into(),
            score_text: "#000000".into(),
            info_text: "#000000".into(),
            layout: vec![
                None,
                Some(clothing.into()),
                Some("#333333".into()),
                Some("#ffffff".into()),
                Some("#ff0000".into()),
                None,
            ],
        })
    }

    /// Load the persisted theme selection (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(THEME_STORAGE_KEY) {
                match serde_json::from_str::<Theme>(&json) {
                    Ok(theme) => return theme,
                    Err(e) => log::warn!("Saved theme unreadable, using default: {e}"),
                }
            }
        }
        Self::default()
    }

    /// Persist the theme selection (WASM only); failures are logged and ignored
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(THEME_STORAGE_KEY, &json);
                log::info!("Theme saved (id {})", self.id);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// NFT trait color table
fn trait_color(name: &str) -> Option<&'static str> {
    match name {
        "purple" => Some("#a855f7"),
        "blue" => Some("#3b82f6"),
        "green" => Some("#22c55e"),
        "yellow" => Some("#facc15"),
        "red" => Some("#ef4444"),
        "black" => Some("#111827"),
        "white" => Some("#ffffff"),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct NftMetadata {
    #[serde(default)]
    attributes: Vec<NftAttribute>,
}

#[derive(Debug, Deserialize)]
struct NftAttribute {
    trait_type: String,
    value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_bounds() {
        let theme = Theme::classic();
        assert_eq!(theme.color_for(0), None);
        assert_eq!(theme.color_for(1), Some("#535353"));
        // Out-of-palette indices paint nothing
        assert_eq!(theme.color_for(200), None);
    }

    #[test]
    fn test_from_nft_metadata_maps_traits() {
        let json = r#"{
            "name": "Dino #2",
            "attributes": [
                {"trait_type": "background", "value": "blue"},
                {"trait_type": "clothing", "value": "green hoodie"}
            ]
        }"#;
        let theme = Theme::from_nft_metadata(json).expect("valid metadata");
        assert_eq!(theme.background, "#3b82f6");
        assert_eq!(theme.color_for(1), Some("#22c55e"));
        assert_eq!(theme.road, "#7c3aed");
    }

    #[test]
    fn test_from_nft_metadata_unknown_traits_fall_back() {
        let json = r#"{"attributes": [
            {"trait_type": "background", "value": "plaid"},
            {"trait_type": "hat", "value": "fedora"}
        ]}"#;
        let theme = Theme::from_nft_metadata(json).expect("valid metadata");
        assert_eq!(theme.background, "#ffffff");
        assert_eq!(theme.color_for(1), Some("#535353"));
    }

    #[test]
    fn test_from_nft_metadata_rejects_garbage() {
        assert!(Theme::from_nft_metadata("not json").is_none());
    }

    #[test]
    fn test_theme_round_trips_through_json() {
        let theme = Theme::colorful();
        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(serde_json::from_str::<Theme>(&json).unwrap(), theme);
    }
}
