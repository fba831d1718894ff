//! Persist [`ViewConfig`] in `localStorage` as JSON.

use logiview_core::ViewConfig;

const STORAGE_KEY: &str = "logiview.view_config";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Parse a stored config. Missing fields take their defaults and bad
/// values are replaced by [`ViewConfig::sanitized`].
pub fn parse_config(json: &str) -> Result<ViewConfig, String> {
    serde_json::from_str::<ViewConfig>(json)
        .map(ViewConfig::sanitized)
        .map_err(|e| format!("stored view config is invalid: {e}"))
}

/// Stored config, or the defaults when nothing usable is stored.
pub fn load() -> ViewConfig {
    let Some(storage) = local_storage() else {
        return ViewConfig::default();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(json)) => parse_config(&json).unwrap_or_else(|e| {
            log::warn!("{e}");
            ViewConfig::default()
        }),
        Ok(None) => ViewConfig::default(),
        Err(e) => {
            log::warn!("localStorage read failed: {:?}", e);
            ViewConfig::default()
        }
    }
}

pub fn save(config: &ViewConfig) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage unavailable")?;
    let json = serde_json::to_string(config).map_err(|e| e.to_string())?;
    storage
        .set_item(STORAGE_KEY, &json)
        .map_err(|e| format!("localStorage write failed: {:?}", e))?;
    log::debug!("saved view config {json}");
    Ok(())
}
