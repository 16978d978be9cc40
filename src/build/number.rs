//! Platform build numbers
//!
//! A build number is the `BRANCH.BUILD.FIX` triple the IntelliJ Platform uses
//! to identify IDE builds (`243.21565.193`). Manifest declarations may shorten
//! it (`243` means `243.0.0`), and an until-build may end in a literal `*`
//! covering every build of that prefix (`243.*`).

use std::fmt;

use serde::{Serialize, Serializer};

use crate::build::error::RangeError;

/// Maximum number of dot-separated segments in a declaration
const MAX_SEGMENTS: usize = 3;

/// One segment of a build number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Segment {
    /// Concrete numeric segment
    Num(u32),
    /// `*`, matching every value; compares above every concrete segment
    Wildcard,
}

/// An ordered `(branch, build, fix)` build-number triple
///
/// The branch is always concrete; build and fix may be wildcards only when
/// parsed from an until-build declaration. Ordering is lexicographic with a
/// wildcard above every number, so `243.5.1 < 243.5.* < 243.6.0 < 244.0.0`.
/// Fields are private: values come from [`BuildNumber::new`] or the parse
/// functions, so a wildcard can never precede a concrete segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildNumber {
    branch: u32,
    build: Segment,
    fix: Segment,
}

impl BuildNumber {
    /// Create a fully concrete build number
    pub fn new(branch: u32, build: u32, fix: u32) -> Self {
        Self {
            branch,
            build: Segment::Num(build),
            fix: Segment::Num(fix),
        }
    }

    /// Branch segment identifying the release line, e.g. 243 for 2024.3
    pub fn branch(&self) -> u32 {
        self.branch
    }

    /// Parse a since-build declaration
    ///
    /// Wildcards are rejected: a lower bound must be concrete.
    pub fn parse_since(input: &str) -> Result<Self, RangeError> {
        Self::parse(input, false)
    }

    /// Parse an until-build declaration
    ///
    /// The last given segment may be a `*` wildcard; everything after it is an
    /// implied wildcard, so `243.*` parses to `(243, *, *)`.
    pub fn parse_until(input: &str) -> Result<Self, RangeError> {
        Self::parse(input, true)
    }

    /// True when no segment is a wildcard
    pub fn is_concrete(&self) -> bool {
        self.build != Segment::Wildcard && self.fix != Segment::Wildcard
    }

    fn parse(input: &str, allow_wildcard: bool) -> Result<Self, RangeError> {
        let malformed = |reason: String| RangeError::MalformedVersion {
            input: input.to_string(),
            reason,
        };

        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() > MAX_SEGMENTS {
            return Err(malformed("more than three segments".to_string()));
        }

        if parts[0] == "*" {
            return Err(malformed("branch must be a concrete number".to_string()));
        }
        let branch = parse_segment(parts[0]).map_err(malformed)?;

        // Missing trailing segments normalize to 0: "243" is 243.0.0, so an
        // until-build of "243" does not cover 243.x builds (only "243.*" does).
        let mut rest = [Segment::Num(0); MAX_SEGMENTS - 1];
        for (i, part) in parts.iter().enumerate().skip(1) {
            if *part == "*" {
                if !allow_wildcard {
                    return Err(malformed("wildcard is only valid in until-build".to_string()));
                }
                if i + 1 != parts.len() {
                    return Err(malformed("wildcard must be the last segment".to_string()));
                }
                for segment in rest.iter_mut().skip(i - 1) {
                    *segment = Segment::Wildcard;
                }
            } else {
                rest[i - 1] = Segment::Num(parse_segment(part).map_err(malformed)?);
            }
        }

        Ok(Self {
            branch,
            build: rest[0],
            fix: rest[1],
        })
    }
}

fn parse_segment(part: &str) -> Result<u32, String> {
    if part.is_empty() {
        return Err("empty segment".to_string());
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("segment '{part}' is not a non-negative integer"));
    }
    part.parse()
        .map_err(|_| format!("segment '{part}' is out of range"))
}

impl fmt::Display for BuildNumber {
    /// Prints all segments, stopping at the first wildcard:
    /// `243.0.0`, `243.21565.193`, `243.*`, `243.5.*`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.branch)?;
        for segment in [self.build, self.fix] {
            match segment {
                Segment::Num(n) => write!(f, ".{n}")?,
                Segment::Wildcard => return write!(f, ".*"),
            }
        }
        Ok(())
    }
}

impl Serialize for BuildNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
