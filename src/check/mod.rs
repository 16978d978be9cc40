//! Compatibility checking layer
//!
//! Classifies catalog releases against a declared range and assembles the
//! outcomes, plus externally collected API-usage findings, into a report.
//!
//! # Modules
//!
//! - [`evaluator`]: Pure range-vs-release classification
//! - [`issue`]: API-usage findings supplied by an external analyzer
//! - [`report`]: Summary, per-target rows, and the suggested range fix

pub mod evaluator;
pub mod issue;
pub mod report;

pub use evaluator::{Evaluation, evaluate};
pub use issue::{ApiUsageIssue, IssueError, IssueKind, load_issues};
pub use report::{RangeDecl, Report, Summary, TargetReport};
