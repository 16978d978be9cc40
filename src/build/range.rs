//! Declared compatibility ranges

use crate::build::error::RangeError;
use crate::build::number::BuildNumber;

/// The inclusive interval of builds a plugin declares support for
///
/// Constructed from a manifest's since-build/until-build pair. A missing
/// until-build leaves the upper edge unbounded. `lower <= upper` holds for
/// every bounded instance; construction rejects inverted pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityRange {
    lower: BuildNumber,
    upper: Option<BuildNumber>,
}

impl CompatibilityRange {
    /// Build a validated range from already-parsed edges
    pub fn new(lower: BuildNumber, upper: Option<BuildNumber>) -> Result<Self, RangeError> {
        if let Some(upper_bound) = upper {
            if lower > upper_bound {
                return Err(RangeError::InvertedRange {
                    since: lower.to_string(),
                    until: upper_bound.to_string(),
                });
            }
        }
        Ok(Self { lower, upper })
    }

    /// Parse a since-build/until-build declaration pair
    ///
    /// `since` is mandatory. `until` may end in a trailing `*` segment; a
    /// `None` or empty `until` yields an unbounded upper edge. Inputs are
    /// trimmed. Pure function: no I/O, deterministic.
    pub fn parse(since: &str, until: Option<&str>) -> Result<Self, RangeError> {
        let since = since.trim();
        if since.is_empty() {
            return Err(RangeError::EmptySinceBuild);
        }
        let lower = BuildNumber::parse_since(since)?;

        let upper = match until.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Some(BuildNumber::parse_until(value)?),
            None => None,
        };

        Self::new(lower, upper)
    }

    /// Lower edge, the parsed since-build
    pub fn lower(&self) -> &BuildNumber {
        &self.lower
    }

    /// Upper edge; `None` for an open-ended declaration
    pub fn upper(&self) -> Option<&BuildNumber> {
        self.upper.as_ref()
    }

    /// True when no until-build was declared
    pub fn is_unbounded(&self) -> bool {
        self.upper.is_none()
    }

    /// Inclusive containment check
    ///
    /// An unbounded upper edge admits everything at or above the lower edge.
    pub fn contains(&self, build: &BuildNumber) -> bool {
        *build >= self.lower && self.upper.is_none_or(|upper| *build <= upper)
    }
}
