mod config;
pub mod files;

pub use config::{Config, LogConfig, TimerConfig};
pub use files::FileMetadata;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::FileError;

const APP_DIR: &str = "ursinity";

/// Returns the persistent data directory.
///
/// Resolution order:
/// 1. `URSINITY_DATA_DIR`, if set and non-empty
/// 2. `<platform data dir>/ursinity[-dev]` (`-dev` when `URSINITY_ENV=dev`)
/// 3. `./ursinity` when the platform has no data directory
///
/// Never touches the filesystem; see [`ensure_persistent_data_dir`].
pub fn persistent_data_dir() -> PathBuf {
    resolve_data_dir(
        std::env::var_os("URSINITY_DATA_DIR"),
        std::env::var("URSINITY_ENV").ok().as_deref(),
        dirs::data_dir(),
    )
}

fn resolve_data_dir(
    override_dir: Option<OsString>,
    env: Option<&str>,
    platform_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    let base = platform_dir.unwrap_or_else(|| PathBuf::from("."));
    if env == Some("dev") {
        base.join(format!("{APP_DIR}-dev"))
    } else {
        base.join(APP_DIR)
    }
}

/// Anchor `path` under the persistent data directory.
///
/// An absolute `path` is returned as-is.
pub fn persistent_path(path: impl AsRef<Path>) -> PathBuf {
    persistent_data_dir().join(path)
}

/// Create the persistent data directory if needed and return it.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_persistent_data_dir() -> Result<PathBuf, FileError> {
    ensure_dir(persistent_data_dir())
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf, FileError> {
    std::fs::create_dir_all(&dir).map_err(|e| FileError::from_io(&dir, e))?;
    Ok(dir)
}
