//! Helpers for lsr.

use std::path::PathBuf;

/// Home directory of the current user, used to locate the default config.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}
