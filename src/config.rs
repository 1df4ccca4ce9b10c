// Attachment options. Hosts can keep them in localStorage as JSON.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::state::double_tap::DEFAULT_WINDOW_MS;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureOptions {
    /// Maximum time between the first press and the second release of a
    /// double tap, exclusive.
    pub double_tap_window_ms: f64,
    /// Cancel the browser's own touch handling (scroll, pinch zoom) for
    /// touches that start inside the attached element.
    pub prevent_native_gestures: bool,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            double_tap_window_ms: DEFAULT_WINDOW_MS,
            prevent_native_gestures: true,
        }
    }
}

impl GestureOptions {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Reads options stored under `key`; missing or unreadable entries yield `None`.
    pub fn load_from_storage(key: &str) -> Option<Self> {
        let store = web_sys::window()?.local_storage().ok()??;
        let raw = store.get_item(key).ok()??;
        match Self::from_json(&raw) {
            Ok(options) => Some(options),
            Err(err) => {
                log::warn!("ignoring stored gesture options `{key}`: {err}");
                None
            }
        }
    }

    /// Writes the options under `key` as JSON.
    pub fn save_to_storage(&self, key: &str) -> Result<(), JsValue> {
        let store = web_sys::window()
            .ok_or("no global window")?
            .local_storage()?
            .ok_or("localStorage unavailable")?;
        let raw = self
            .to_json()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        store.set_item(key, &raw)
    }
}
