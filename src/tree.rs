use crate::captures::Captures;
use crate::error::InsertError;

/// A vertex of the pattern trie.
///
/// Every literal node matches exactly one byte of input. A placeholder node
/// matches an entire separator-delimited segment and records the name that
/// segment is captured under. The root is a sentinel whose byte fixes the
/// mandatory first character of all patterns, e.g. `/` for URL paths.
pub(crate) struct Node {
    pub(crate) character: u8,
    // set only on placeholder heads
    pub(crate) name: Option<String>,
    // 0 means this node does not terminate a pattern
    pub(crate) value: u64,
    // literal children, sorted by byte
    pub(crate) children: Vec<Node>,
    pub(crate) placeholder: Option<Box<Node>>,
}

impl Node {
    pub(crate) fn new(character: u8) -> Self {
        Self {
            character,
            name: None,
            value: 0,
            children: Vec::new(),
            placeholder: None,
        }
    }

    fn placeholder_head(name: String) -> Self {
        Self {
            character: 0,
            name: Some(name),
            value: 0,
            children: Vec::new(),
            placeholder: None,
        }
    }

    fn placeholder_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    fn child(&self, character: u8) -> Option<&Node> {
        self.children
            .binary_search_by_key(&character, |child| child.character)
            .ok()
            .map(|i| &self.children[i])
    }

    fn child_or_insert(&mut self, character: u8) -> &mut Node {
        match self
            .children
            .binary_search_by_key(&character, |child| child.character)
        {
            Ok(i) => &mut self.children[i],
            Err(i) => {
                self.children.insert(i, Node::new(character));
                &mut self.children[i]
            }
        }
    }

    // At most one placeholder is allowed per node; a second registration must
    // carry the exact same name.
    fn placeholder_child(&mut self, name: &str) -> Result<&mut Node, InsertError> {
        if let Some(existing) = &self.placeholder {
            if existing.placeholder_name() != name {
                return Err(InsertError::Conflict {
                    with: existing.placeholder_name().to_owned(),
                });
            }
        }

        Ok(self
            .placeholder
            .get_or_insert_with(|| Box::new(Node::placeholder_head(name.to_owned()))))
    }

    /// Threads `pattern` through the trie rooted at `self`, reusing existing
    /// nodes where the pattern overlaps previously registered ones, and stamps
    /// `value` onto the final node reached.
    ///
    /// The caller has already verified the pattern is non-empty, starts with
    /// this node's byte and closes every placeholder it opens, so the walk
    /// itself cannot fail halfway with the tree partially grown.
    pub(crate) fn insert(
        &mut self,
        pattern: &str,
        value: u64,
        open: u8,
        close: u8,
    ) -> Result<(), InsertError> {
        let bytes = pattern.as_bytes();
        let mut node = self;

        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == open {
                let close_at =
                    find_close(bytes, i, close).ok_or(InsertError::UnterminatedPlaceholder)?;
                node = node.placeholder_child(&pattern[i + 1..close_at])?;

                // the byte directly after the closing delimiter is consumed
                // as a literal, whatever it is
                i = close_at + 1;
                if i == bytes.len() {
                    break;
                }
            }

            node = node.child_or_insert(bytes[i]);
            i += 1;
        }

        node.value = value;
        Ok(())
    }

    /// Walks the trie against `path`, resolving placeholders greedily.
    ///
    /// Returns the terminal value of the node the scan ended on (0 if that
    /// node never terminated a pattern) together with the captures resolved
    /// along the way, or `None` if the scan dead-ended with no literal
    /// transition and no pending placeholder.
    pub(crate) fn at<'n, 'p>(
        &'n self,
        path: &'p [u8],
        separator: u8,
        terminator: u8,
    ) -> Option<(u64, Captures<'n, 'p>)> {
        let mut node = self;
        let mut captures = Captures::new();

        // start of the segment currently being scanned
        let mut last_separator = 0;
        // the placeholder available since the last separator boundary
        let mut candidate: Option<&'n Node> = None;

        let mut i = 0;
        while i < path.len() {
            let c = path[i];
            if c == terminator {
                break;
            }

            if c == separator {
                // a trailing separator is equivalent to its absence:
                // "/a/" matches whatever "/a" matches
                match path.get(i + 1) {
                    None => break,
                    Some(&next) if next == terminator => break,
                    Some(_) => {}
                }
                last_separator = i;
                candidate = None;
            } else if let Some(placeholder) = node.placeholder.as_deref() {
                candidate = Some(placeholder);
            }

            // exact literal transitions always win over placeholders
            if let Some(child) = node.child(c) {
                node = child;
                i += 1;
                continue;
            }

            // dead end unless a placeholder can swallow the segment
            let placeholder = candidate.take()?;

            let end = path[i + 1..]
                .iter()
                .position(|&b| b == separator || b == terminator)
                .map(|offset| i + 1 + offset)
                .unwrap_or(path.len());
            captures.push(placeholder.placeholder_name(), &path[last_separator + 1..end]);

            node = placeholder;
            i = end;
        }

        Some((node.value, captures))
    }
}

/// Verifies that every placeholder opened in `pattern` is closed, scanning
/// exactly the way [`Node::insert`] does. Running this before touching the
/// tree keeps failed registrations side-effect free.
pub(crate) fn check_placeholders(pattern: &[u8], open: u8, close: u8) -> Result<(), InsertError> {
    let mut i = 0;
    while i < pattern.len() {
        if pattern[i] == open {
            match find_close(pattern, i, close) {
                Some(close_at) => i = close_at + 1,
                None => return Err(InsertError::UnterminatedPlaceholder),
            }
            if i == pattern.len() {
                break;
            }
        }
        i += 1;
    }
    Ok(())
}

fn find_close(pattern: &[u8], open_at: usize, close: u8) -> Option<usize> {
    pattern[open_at + 1..]
        .iter()
        .position(|&b| b == close)
        .map(|offset| open_at + 1 + offset)
}
