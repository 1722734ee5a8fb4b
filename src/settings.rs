//! Session settings
//!
//! Read once at startup from a JSON blob embedded in the page; never written back.

use serde::{Deserialize, Serialize};

use crate::text::Language;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Hint and message language
    pub language: Language,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Gameplay ===
    /// Re-roll the drone's facing after every gem instead of only on restart
    pub reroll_facing_on_capture: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::ZhTw,

            // Audio
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            // Gameplay
            reroll_facing_on_capture: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Effective sound effect volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Page element holding the settings JSON
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "drone-settings";

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(json) = json else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings ({})", settings.language.as_str());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings JSON, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
