use gloo_utils::document;
use shared::config::WheelConfig;
use web_sys::window;

pub const CONFIG_ELEMENT_ID: &str = "wheel-config";
pub const SOUND_PREFERENCE_KEY: &str = "wheel_sound_enabled";

/// Reads `<script type="application/json" id="wheel-config">` if the page has one.
/// Anything unreadable falls back to the stock wheel.
pub fn load_wheel_config() -> WheelConfig {
    let raw = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return WheelConfig::default();
    };

    match WheelConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{}; using the default wheel", err);
            WheelConfig::default()
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Remembered sound toggle, if the visitor ever changed it.
pub fn load_sound_preference() -> Option<bool> {
    storage()
        .and_then(|s| s.get_item(SOUND_PREFERENCE_KEY).ok().flatten())
        .and_then(|value| value.parse::<bool>().ok())
}

pub fn save_sound_preference(enabled: bool) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(SOUND_PREFERENCE_KEY, &enabled.to_string());
    }
}
