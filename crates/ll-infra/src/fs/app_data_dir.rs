use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the Little Lemon application data root directory.
///
/// Platform-specific:
/// - macOS: ~/Library/Application Support/LittleLemon
/// - Windows: %APPDATA%\LittleLemon
/// - Linux: $XDG_DATA_HOME/LittleLemon or ~/.local/share/LittleLemon
///
/// This function does not create the directory; the caller decides when to.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to get platform-specific data directory")?;
    Ok(base_dir.join("LittleLemon"))
}
