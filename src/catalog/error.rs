use thiserror::Error;

/// Error type for catalog construction, loading, and lookup
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two entries share a build-number branch; fatal at construction
    #[error("Duplicate catalog branch {branch}: {first} and {second}")]
    DuplicateBranch {
        branch: u32,
        first: String,
        second: String,
    },

    /// Two entries share a marketing version; fatal at construction
    #[error("Duplicate marketing version in catalog: {0}")]
    DuplicateMarketingVersion(String),

    /// An entry's build number is not fully concrete; fatal at construction
    #[error("Wildcard build number in catalog entry '{version}': {build}")]
    WildcardBuildNumber { version: String, build: String },

    /// The requested version is not in the catalog
    ///
    /// Recoverable: callers must surface this as "cannot verify", never as
    /// "incompatible".
    #[error("Unknown IDE version '{0}': not in the release catalog")]
    UnknownVersion(String),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog file: {0}")]
    Json(#[from] serde_json::Error),
}
