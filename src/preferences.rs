use ratatui::style::Color;
use std::fs;
use std::path::{Path, PathBuf};

pub const DARK_MODE_KEY: &str = "darkModeEnabled";

/// Preferences file path: `QUIZTREPRENEUR_PREFS` or `preferences.json` in
/// the working directory.
pub fn preferences_path() -> PathBuf {
    std::env::var("QUIZTREPRENEUR_PREFS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("preferences.json"))
}

/// Read the stored display preference once. The store holds string values
/// ("true"/"false"); a missing file, unparseable JSON, or non-string value
/// all read as "not set". Nothing in this program writes the store.
pub fn read_display_preference(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let store: serde_json::Value = serde_json::from_str(&content).ok()?;
    store.get(DARK_MODE_KEY)?.as_str().map(|s| s.to_string())
}

/// The original screen wrapper's literal branch: "false" picks black,
/// anything else (including "not set") picks white. The result is logged at
/// startup and not fed into the session's own dark-mode flag; the two flags
/// are unsynchronized upstream and that behavior is kept.
pub fn initial_background(preference: Option<&str>) -> Color {
    if preference == Some("false") {
        Color::Black
    } else {
        Color::White
    }
}
