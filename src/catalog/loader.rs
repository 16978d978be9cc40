//! Catalog loading
//!
//! The on-disk format is a JSON array of release records:
//!
//! ```json
//! [
//!   {
//!     "marketingVersion": "2024.3",
//!     "branch": 243,
//!     "build": 21565,
//!     "fix": 193,
//!     "releaseDate": "2024-11-12",
//!     "recommendedToolchain": "JDK 21"
//!   }
//! ]
//! ```
//!
//! `build` and `fix` default to 0 when absent. A snapshot of this format
//! ships inside the binary so the tool works with no setup; see
//! [`load_bundled`].

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::build::BuildNumber;
use crate::catalog::entry::CatalogEntry;
use crate::catalog::error::CatalogError;
use crate::catalog::index::Catalog;

/// Release catalog snapshot compiled into the binary
const BUNDLED_RELEASES: &str = include_str!("../../data/releases.json");

/// One record of the catalog file format
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReleaseRecord {
    marketing_version: String,
    branch: u32,
    #[serde(default)]
    build: u32,
    #[serde(default)]
    fix: u32,
    release_date: NaiveDate,
    recommended_toolchain: String,
}

impl From<ReleaseRecord> for CatalogEntry {
    fn from(record: ReleaseRecord) -> Self {
        Self {
            marketing_version: record.marketing_version,
            build_number: BuildNumber::new(record.branch, record.build, record.fix),
            release_date: record.release_date,
            recommended_toolchain: record.recommended_toolchain,
        }
    }
}

/// Load and validate a catalog file
pub fn load_from_file(path: &Path) -> Result<Catalog, CatalogError> {
    debug!("Loading catalog from {}", path.display());
    let content = fs::read_to_string(path)?;
    from_json(&content)
}

/// Load the bundled release snapshot
///
/// The snapshot goes through the same validation as user-supplied files.
pub fn load_bundled() -> Result<Catalog, CatalogError> {
    debug!("Loading bundled catalog snapshot");
    from_json(BUNDLED_RELEASES)
}

fn from_json(content: &str) -> Result<Catalog, CatalogError> {
    let records: Vec<ReleaseRecord> = serde_json::from_str(content)?;
    let catalog = Catalog::new(records.into_iter().map(CatalogEntry::from).collect())?;

    if catalog.is_empty() {
        warn!("Catalog has no entries; every lookup will fail");
    }
    debug!("Catalog loaded with {} releases", catalog.len());

    Ok(catalog)
}
