//! Range evaluation against catalog releases

use serde::Serialize;

use crate::build::CompatibilityRange;
use crate::catalog::CatalogEntry;

/// Outcome of evaluating a declared range against one catalog release
///
/// A tagged result, never a bare boolean: callers need the branch distance
/// to suggest a fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Evaluation {
    /// The release falls inside the declared range (bounds inclusive)
    InRange,
    /// The release predates since-build by `distance` branch increments
    BelowRange { distance: u32 },
    /// The release postdates a bounded until-build by `distance` branch
    /// increments
    AboveRange { distance: u32 },
    /// The release sits at or above since-build but the declaration has no
    /// until-build, so compatibility cannot be verified
    UnboundedAbove,
}

/// Classify one catalog release against a declared range
///
/// Bounds are inclusive for bounded ranges. An open-ended declaration never
/// yields `InRange`: every release at or above since-build is
/// `UnboundedAbove`, because builds past the last verified release cannot be
/// vouched for. Deterministic, side-effect free, and total over well-formed
/// inputs.
pub fn evaluate(range: &CompatibilityRange, target: &CatalogEntry) -> Evaluation {
    let build = &target.build_number;

    if build < range.lower() {
        return Evaluation::BelowRange {
            distance: range.lower().branch() - build.branch(),
        };
    }

    match range.upper() {
        Some(upper) if build > upper => Evaluation::AboveRange {
            distance: build.branch() - upper.branch(),
        },
        Some(_) => Evaluation::InRange,
        None => Evaluation::UnboundedAbove,
    }
}
