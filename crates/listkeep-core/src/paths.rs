//! Default data directory resolution.

use std::env;
use std::path::PathBuf;

/// Directory name under the user's config directory.
const APP_DIR: &str = "listkeep";

/// Resolve the default data directory, `~/.config/listkeep`.
///
/// Uses HOME on Unix-like systems and falls back to USERPROFILE on
/// Windows. Errors when neither is set; embedding shells that know
/// better can pass their own directory to the persistence layer.
pub fn default_data_dir() -> Result<PathBuf, String> {
    let home = env::var("HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| env::var("USERPROFILE").ok().filter(|v| !v.is_empty()))
        .ok_or_else(|| "Home directory not set".to_string())?;

    Ok(PathBuf::from(home).join(".config").join(APP_DIR))
}
