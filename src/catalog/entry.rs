//! Catalog entries

use chrono::NaiveDate;
use serde::Serialize;

use crate::build::BuildNumber;

/// One known IDE release
///
/// Catalog build numbers are always fully concrete. Entries are immutable
/// once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Human-facing version, e.g. "2024.3"
    pub marketing_version: String,
    /// Platform build number of the release, e.g. 243.21565.193
    pub build_number: BuildNumber,
    /// Date the release shipped
    pub release_date: NaiveDate,
    /// Java toolchain recommended for plugins targeting this release
    pub recommended_toolchain: String,
}
