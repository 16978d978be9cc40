use thiserror::Error;

/// Error type for declaration parsing and range validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The declaration is not a well-formed build number
    #[error("Malformed build number '{input}': {reason}")]
    MalformedVersion { input: String, reason: String },

    /// since-build was missing; a lower bound is mandatory
    #[error("Missing since-build: a plugin must declare its lower bound")]
    EmptySinceBuild,

    /// A bounded until-build sits below since-build
    #[error("Inverted range: since-build '{since}' is above until-build '{until}'")]
    InvertedRange { since: String, until: String },
}
