//! The immutable table of known IDE releases
//! - entry.rs: one known release (marketing version, build number, date, toolchain)
//! - index.rs: dual-keyed catalog with fail-fast duplicate rejection
//! - loader.rs: JSON file format and bundled snapshot loading
//! - error.rs: construction, loading, and lookup errors

pub mod entry;
pub mod error;
pub mod index;
pub mod loader;

pub use entry::CatalogEntry;
pub use error::CatalogError;
pub use index::Catalog;
pub use loader::{load_bundled, load_from_file};
