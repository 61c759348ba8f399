//! A trie-based URL path matcher with named placeholder capture.
//!
//! Patterns are indexed into a byte trie at registration time; matching walks
//! the trie once, left to right, extracting the text covered by each named
//! placeholder:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = urlrouter::Router::new();
//! router.insert("/users/nils", 1)?;
//! router.insert("/users/{username}", 2)?;
//! router.insert("/users/{username}/friends/{friend}", 3)?;
//!
//! let matched = router.at("/users/max/friends/nils")?;
//! assert_eq!(matched.value, Some(3));
//! assert_eq!(matched.captures.get("username"), Some("max"));
//! assert_eq!(matched.captures.get("friend"), Some("nils"));
//!
//! // exact literals take priority over placeholders
//! assert_eq!(router.at("/users/nils")?.value, Some(1));
//!
//! // a query string is ignored
//! assert_eq!(router.at("/users/max?tab=friends")?.value, Some(2));
//! # Ok(())
//! # }
//! ```
//!
//! A placeholder stands for one separator-delimited segment and is matched
//! greedily: once no literal transition applies, the pending placeholder
//! consumes the rest of the segment and that choice is never revisited. The
//! placeholder delimiters, the segment separator and the suffix terminator
//! are all configurable per call; the URL conventions (`{}`, `/`, `?`) are
//! the defaults.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod captures;
mod error;
mod router;
mod tree;

pub use captures::{Captures, CapturesIter};
pub use error::{InsertError, MatchError};
pub use router::{Match, Router};
