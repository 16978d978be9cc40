//! Externally collected API-usage issues
//!
//! The checker does not analyze plugin sources itself; a static-analysis
//! collaborator hands it findings as a JSON file and the report merges them
//! through unchanged:
//!
//! ```json
//! [
//!   {
//!     "kind": "DEPRECATED",
//!     "location": "com.example.MyAction#update",
//!     "replacement": "ActionUpdateThread.BGT"
//!   }
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Kind of API-usage finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    /// Usage of an API scheduled for removal
    Deprecated,
    /// Usage of an API marked internal to the platform
    Internal,
    /// Usage of an API still subject to change
    Experimental,
    /// Usage broken by a known incompatible platform change
    IncompatibleChange,
}

impl IssueKind {
    /// Returns the wire representation of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Deprecated => "DEPRECATED",
            IssueKind::Internal => "INTERNAL",
            IssueKind::Experimental => "EXPERIMENTAL",
            IssueKind::IncompatibleChange => "INCOMPATIBLE_CHANGE",
        }
    }
}

/// One API-usage finding from the external analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUsageIssue {
    pub kind: IssueKind,
    /// Free-text location, e.g. "com.example.MyAction#update"
    pub location: String,
    /// Suggested replacement, when the analyzer knows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

/// Error type for issues-file loading
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("Failed to read issues file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid issues file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load an issues file (a JSON array of findings)
pub fn load_issues(path: &Path) -> Result<Vec<ApiUsageIssue>, IssueError> {
    let content = fs::read_to_string(path)?;
    let issues: Vec<ApiUsageIssue> = serde_json::from_str(&content)?;
    debug!("Loaded {} issues from {}", issues.len(), path.display());
    Ok(issues)
}
