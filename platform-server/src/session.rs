//! Disk slot for the current user.
//!
//! If a parseable user is present at boot the login flow is skipped.
//! Nothing here is a durability guarantee; any failure degrades to
//! "user logs in again".

use log::{info, warn};
use platform_core::models::CurrentUser;
use std::fs;
use std::path::Path;

/// Reads the cached user, if present and parseable. Corrupt or missing
/// slots are ignored (logged, never fatal).
pub fn load(path: &Path) -> Option<CurrentUser> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<CurrentUser>(&raw) {
        Ok(user) => {
            info!("Restoring cached session for '{}'", user.username);
            Some(user)
        }
        Err(e) => {
            warn!("Ignoring unparseable session cache at {:?}: {}", path, e);
            None
        }
    }
}

/// Writes the user to the slot. Best effort; failures are logged.
pub fn save(path: &Path, user: &CurrentUser) {
    match serde_json::to_string_pretty(user) {
        Ok(json) => {
            if let Err(e) = fs::write(path, json) {
                warn!("Failed to write session cache at {:?}: {}", path, e);
            }
        }
        Err(e) => warn!("Failed to serialize session: {}", e),
    }
}
