use crate::captures::Captures;
use crate::error::{InsertError, MatchError};
use crate::tree::{self, Node};

/// A router backed by a byte trie of registered patterns.
///
/// Patterns are plain strings with named placeholders between configurable
/// delimiters. Matching extracts the text covered by each placeholder:
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = urlrouter::Router::new();
/// router.insert("/users/{username}", 1)?;
///
/// let matched = router.at("/users/nils")?;
/// assert_eq!(matched.value, Some(1));
/// assert_eq!(matched.captures.get("username"), Some("nils"));
/// # Ok(())
/// # }
/// ```
///
/// All registration happens through `&mut self` and matching through `&self`,
/// so a fully built router can be shared freely between threads.
pub struct Router {
    root: Option<Node>,
}

impl Router {
    /// Constructs a new router with no registered patterns.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Registers a pattern using `{` and `}` as the placeholder delimiters.
    ///
    /// See [`insert_with`](Self::insert_with) for the full semantics.
    pub fn insert(&mut self, pattern: &str, value: u64) -> Result<(), InsertError> {
        self.insert_with(pattern, value, b'{', b'}')
    }

    /// Registers a pattern with caller-chosen placeholder delimiters, binding
    /// `value` to it.
    ///
    /// Text between `open` and `close` names a placeholder: a segment of the
    /// input that is captured at match time instead of compared literally.
    /// The delimiters are expected to be ASCII; a non-ASCII delimiter byte
    /// can split a multi-byte character and panic when the name is sliced.
    ///
    /// The value must be nonzero; `0` is reserved to mean "no value". The
    /// first registered pattern fixes the mandatory first character for all
    /// later ones. Registering the same pattern twice overwrites its value.
    ///
    /// A failed registration leaves the router exactly as it was: previously
    /// registered patterns remain matchable.
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = urlrouter::Router::new();
    /// router.insert_with("/posts/<id>", 9, b'<', b'>')?;
    ///
    /// assert_eq!(router.at("/posts/42")?.captures.get("id"), Some("42"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert_with(
        &mut self,
        pattern: &str,
        value: u64,
        open: u8,
        close: u8,
    ) -> Result<(), InsertError> {
        let bytes = pattern.as_bytes();
        if bytes.is_empty() {
            return Err(InsertError::EmptyPattern);
        }
        if value == 0 {
            return Err(InsertError::ReservedValue);
        }
        tree::check_placeholders(bytes, open, close)?;

        if let Some(root) = &self.root {
            if root.character != bytes[0] {
                return Err(InsertError::FirstCharacterMismatch);
            }
        }

        let root = self.root.get_or_insert_with(|| Node::new(bytes[0]));
        root.insert(pattern, value, open, close)
    }

    /// Matches a URL path, with `/` separating segments and `?` starting an
    /// ignored trailing suffix.
    ///
    /// Equivalent to [`at_with(path, b'/', b'?')`](Self::at_with).
    pub fn at<'r, 'p>(&'r self, path: &'p str) -> Result<Match<'r, 'p>, MatchError> {
        self.at_with(path, b'/', b'?')
    }

    /// Matches `path` against the registered patterns with a caller-chosen
    /// segment separator and suffix terminator (both expected to be ASCII).
    ///
    /// Scanning stops at the terminator or at the end of the input, whichever
    /// comes first, and a trailing separator is ignored: `/a/` matches
    /// whatever `/a` matches. At every position an exact literal transition
    /// is preferred; only when none applies does a pending placeholder
    /// consume the remainder of the current segment. That choice is final:
    /// there is no backtracking, so a later mismatch is not recovered by
    /// retrying an alternate branch.
    ///
    /// The only error is an empty input. An input that matches no pattern is
    /// reported as `Ok` with [`Match::value`] set to `None`.
    ///
    /// Passing a non-ASCII `separator` or `terminator` byte can place a
    /// capture boundary in the middle of a multi-byte character; reading
    /// such a capture panics rather than returning a broken string.
    pub fn at_with<'r, 'p>(
        &'r self,
        path: &'p str,
        separator: u8,
        terminator: u8,
    ) -> Result<Match<'r, 'p>, MatchError> {
        if path.is_empty() {
            return Err(MatchError::EmptyInput);
        }

        let scan = self
            .root
            .as_ref()
            .and_then(|root| root.at(path.as_bytes(), separator, terminator));

        match scan {
            Some((value, captures)) => Ok(Match {
                value: (value != 0).then_some(value),
                captures,
            }),
            // the scan dead-ended; partial captures are discarded
            None => Ok(Match {
                value: None,
                captures: Captures::new(),
            }),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Router {
    // The trie stores one node per pattern byte, so chains are as deep as the
    // longest registered pattern. Tear the tree down with an explicit work
    // stack, detaching each edge before the node holding it is freed, so that
    // pathologically long patterns cannot exhaust the call stack.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());

        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
            if let Some(placeholder) = node.placeholder.take() {
                stack.push(*placeholder);
            }
        }
    }
}

/// The result of a match that ran to completion.
///
/// `value` is `None` when the input matched no registered pattern. A scan
/// that ends on a node in the middle of a pattern (for example `/users/na`
/// when only `/users/nils` is registered) also yields `None`; the two cases
/// are not distinguished.
#[derive(Debug)]
pub struct Match<'k, 'v> {
    /// The value bound to the matched pattern, if any.
    pub value: Option<u64>,
    /// The placeholder captures resolved while scanning, in resolution order.
    pub captures: Captures<'k, 'v>,
}
