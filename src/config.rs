//! Catalog source resolution
//!
//! The release catalog can come from several places; the first match wins:
//!
//! 1. the `--catalog <file>` flag
//! 2. the `IJ_COMPAT_CATALOG` environment variable
//! 3. a user catalog at `$XDG_DATA_HOME/ij-compat/releases.json`
//!    (falling back to `~/.local/share/ij-compat/releases.json`)
//! 4. the release snapshot bundled into the binary

use std::path::{Path, PathBuf};

use tracing::debug;

// =============================================================================
// Catalog location constants
// =============================================================================

/// Environment variable naming a catalog file
pub const CATALOG_ENV_VAR: &str = "IJ_COMPAT_CATALOG";

/// File name of the user catalog inside the data directory
pub const USER_CATALOG_FILE: &str = "releases.json";

/// Where the release catalog should be loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// An explicit file (flag, environment variable, or user catalog)
    File(PathBuf),
    /// The snapshot compiled into the binary
    Bundled,
}

/// Resolve the catalog source from the flag, the environment, and the user
/// catalog file, in that order of precedence.
pub fn resolve_catalog_source(flag: Option<&Path>) -> CatalogSource {
    let user_catalog = user_catalog_path();
    catalog_source_from(
        flag,
        std::env::var(CATALOG_ENV_VAR)
            .ok()
            .filter(|value| !value.is_empty()),
        user_catalog.is_file().then_some(user_catalog),
    )
}

fn catalog_source_from(
    flag: Option<&Path>,
    env_catalog: Option<String>,
    user_catalog: Option<PathBuf>,
) -> CatalogSource {
    if let Some(path) = flag {
        debug!("Using catalog from --catalog flag: {}", path.display());
        return CatalogSource::File(path.to_path_buf());
    }
    if let Some(path) = env_catalog {
        debug!("Using catalog from {CATALOG_ENV_VAR}: {path}");
        return CatalogSource::File(PathBuf::from(path));
    }
    if let Some(path) = user_catalog {
        debug!("Using user catalog: {}", path.display());
        return CatalogSource::File(path);
    }
    CatalogSource::Bundled
}

/// Returns the path to the user catalog file.
pub fn user_catalog_path() -> PathBuf {
    data_dir().join(USER_CATALOG_FILE)
}

/// Returns the path to the data directory for ij-compat.
/// Uses $XDG_DATA_HOME/ij-compat if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/ij-compat,
/// or ./ij-compat if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("ij-compat")
}
