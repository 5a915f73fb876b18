//! Durable mirror of the snapshot.
//!
//! # Layout
//!
//! One JSON document under a fixed key:
//!
//! ```text
//! <data dir>/listApp.json    # the whole AppState, temporary lists removed
//! ```
//!
//! # Design
//!
//! - **Full replace**: every save rewrites the complete document.
//! - **Atomic writes**: write to `listApp.json.tmp`, then rename, so a
//!   crash mid-write never corrupts the previous document.
//! - **Temporary lists**: lists flagged `temporary` exist only in
//!   memory for the session and are filtered out before every save.
//! - **Corruption policy**: unreadable or unparseable data loads as
//!   the empty snapshot; the failure is logged, never propagated.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::types::AppState;

/// Fixed storage key; the on-disk file is `<key>.json`.
pub const STORAGE_KEY: &str = "listApp";

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The snapshot as it is persisted: temporary lists removed.
///
/// The in-memory snapshot keeps them; only the durable mirror drops
/// them.
pub fn persistent_snapshot(state: &AppState) -> AppState {
    AppState {
        lists: state
            .lists
            .iter()
            .filter(|list| !list.temporary)
            .cloned()
            .collect(),
        active_list_id: state.active_list_id.clone(),
        filter_tag: state.filter_tag.clone(),
    }
}

/// Save the snapshot under `dir`, fully replacing the previous value.
pub fn save_state(dir: &Path, state: &AppState) -> Result<(), StorageError> {
    fs::create_dir_all(dir)?;

    let file_path = dir.join(format!("{}.json", STORAGE_KEY));
    let temp_path = dir.join(format!("{}.json.tmp", STORAGE_KEY));

    let json = serde_json::to_string_pretty(&persistent_snapshot(state))?;
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, &file_path)?;

    Ok(())
}

/// Load the snapshot from `dir`.
///
/// A missing file is not an error and yields the empty snapshot.
pub fn load_state(dir: &Path) -> Result<AppState, StorageError> {
    let file_path = dir.join(format!("{}.json", STORAGE_KEY));

    if !file_path.exists() {
        return Ok(AppState::default());
    }

    let contents = fs::read_to_string(&file_path)?;
    let state: AppState = serde_json::from_str(&contents)?;

    Ok(state)
}

/// Load the snapshot, absorbing failures as the empty snapshot.
///
/// This is the startup path: corrupt data must not crash the app.
pub fn load_state_or_default(dir: &Path) -> AppState {
    match load_state(dir) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("failed to load saved state, starting empty: {}", e);
            AppState::default()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
