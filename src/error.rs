use std::fmt;

/// Represents errors that can occur when registering a new pattern.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum InsertError {
    /// Patterns must not be empty.
    EmptyPattern,
    /// Every pattern in a router must start with the same character.
    ///
    /// The first registered pattern fixes that character; for URL paths this
    /// is typically `/`.
    FirstCharacterMismatch,
    /// A placeholder was opened but its closing delimiter never appeared.
    UnterminatedPlaceholder,
    /// Attempted to register a placeholder under a node that already has one
    /// with a different name.
    Conflict {
        /// The name of the placeholder already registered at this level.
        with: String,
    },
    /// `0` is reserved to mean "no value"; patterns must carry a nonzero value.
    ReservedValue,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPattern => write!(f, "patterns must not be empty"),
            Self::FirstCharacterMismatch => write!(
                f,
                "all patterns in a router must start with the same character"
            ),
            Self::UnterminatedPlaceholder => {
                write!(f, "a placeholder was opened but never closed")
            }
            Self::Conflict { with } => {
                write!(
                    f,
                    "insertion failed due to conflict with the placeholder previously registered at this level: {{{with}}}"
                )
            }
            Self::ReservedValue => write!(f, "the value 0 is reserved and cannot be registered"),
        }
    }
}

impl std::error::Error for InsertError {}

/// A failed match attempt.
///
/// Note that an input matching no registered pattern is *not* an error: it is
/// reported as a successful match with a value of `None`.
///
/// ```
/// use urlrouter::{MatchError, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.insert("/home", 1)?;
///
/// assert_eq!(router.at("").unwrap_err(), MatchError::EmptyInput);
///
/// // no pattern matches, but the call itself succeeds
/// assert_eq!(router.at("/foobar")?.value, None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchError {
    /// The input string was empty.
    EmptyInput,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot match an empty input string")
    }
}

impl std::error::Error for MatchError {}
