//! Build numbers and declared compatibility ranges
//! - number.rs: the `BRANCH.BUILD.FIX` triple with wildcard upper segments
//! - range.rs: validated since-build/until-build intervals
//! - error.rs: parse and validation errors

pub mod error;
pub mod number;
pub mod range;

pub use error::RangeError;
pub use number::BuildNumber;
pub use range::CompatibilityRange;
