use std::{fmt, iter, mem, slice};

/// A single resolved placeholder, consisting of a name and a captured value.
#[derive(PartialEq, Eq, Ord, PartialOrd, Default, Copy, Clone)]
struct Capture<'k, 'v> {
    // Names borrow the placeholder names owned by the router. Values are
    // stored as byte slices of the matched input to avoid UTF8 checks when
    // slicing, but UTF8 is still respected, so these slices are valid
    // strings as long as the separator and terminator bytes are ASCII.
    key: &'k str,
    value: &'v [u8],
}

impl<'k, 'v> Capture<'k, 'v> {
    const EMPTY: Capture<'static, 'static> = Capture { key: "", value: b"" };

    // Returns the captured value as a string.
    fn value_str(&self) -> &'v str {
        std::str::from_utf8(self.value).unwrap()
    }
}

/// The ordered list of placeholder captures produced by a single match.
///
/// Entries appear in the order the placeholders were resolved while scanning
/// the input left to right.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut router = urlrouter::Router::new();
/// # router.insert("/users/{id}", 7)?;
/// let matched = router.at("/users/1")?;
///
/// // Iterate through the names and values.
/// for (key, value) in matched.captures.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // Get a specific value by name.
/// let id = matched.captures.get("id");
/// assert_eq!(id, Some("1"));
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone)]
pub struct Captures<'k, 'v> {
    kind: CapturesKind<'k, 'v>,
}

// Most patterns have a small number of placeholders, so we can avoid
// heap allocations in the common case.
const SMALL: usize = 3;

// A list of captures, optimized to avoid allocations when possible.
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone)]
enum CapturesKind<'k, 'v> {
    Small([Capture<'k, 'v>; SMALL], usize),
    Large(Vec<Capture<'k, 'v>>),
}

impl<'k, 'v> Captures<'k, 'v> {
    pub(crate) fn new() -> Self {
        Self {
            kind: CapturesKind::Small([Capture::EMPTY; SMALL], 0),
        }
    }

    /// Returns the number of captures.
    pub fn len(&self) -> usize {
        match self.kind {
            CapturesKind::Small(_, len) => len,
            CapturesKind::Large(ref vec) => vec.len(),
        }
    }

    /// Returns the value of the first capture registered under the given name.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'v str> {
        let key = key.as_ref();

        match &self.kind {
            CapturesKind::Small(arr, len) => arr
                .iter()
                .take(*len)
                .find(|capture| capture.key == key)
                .map(Capture::value_str),
            CapturesKind::Large(vec) => vec
                .iter()
                .find(|capture| capture.key == key)
                .map(Capture::value_str),
        }
    }

    /// Returns an iterator over the captures in resolution order.
    pub fn iter(&self) -> CapturesIter<'_, 'k, 'v> {
        CapturesIter::new(self)
    }

    /// Returns `true` if no placeholder was resolved during the match.
    pub fn is_empty(&self) -> bool {
        match self.kind {
            CapturesKind::Small(_, len) => len == 0,
            CapturesKind::Large(ref vec) => vec.is_empty(),
        }
    }

    /// Appends a name/value pair to the list.
    pub(crate) fn push(&mut self, key: &'k str, value: &'v [u8]) {
        #[cold]
        fn drain_to_vec<T: Default>(len: usize, elem: T, arr: &mut [T; SMALL]) -> Vec<T> {
            let mut vec = Vec::with_capacity(len + 1);
            vec.extend(arr.iter_mut().map(mem::take));
            vec.push(elem);
            vec
        }

        let capture = Capture { key, value };
        match &mut self.kind {
            CapturesKind::Small(arr, len) => {
                if *len == SMALL {
                    self.kind = CapturesKind::Large(drain_to_vec(*len, capture, arr));
                    return;
                }

                arr[*len] = capture;
                *len += 1;
            }
            CapturesKind::Large(vec) => vec.push(capture),
        }
    }
}

impl fmt::Debug for Captures<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator over the names and values of a match's [captures](Captures).
pub struct CapturesIter<'cs, 'k, 'v> {
    kind: CapturesIterKind<'cs, 'k, 'v>,
}

impl<'cs, 'k, 'v> CapturesIter<'cs, 'k, 'v> {
    fn new(captures: &'cs Captures<'k, 'v>) -> Self {
        let kind = match &captures.kind {
            CapturesKind::Small(arr, len) => CapturesIterKind::Small(arr.iter().take(*len)),
            CapturesKind::Large(vec) => CapturesIterKind::Large(vec.iter()),
        };
        Self { kind }
    }
}

enum CapturesIterKind<'cs, 'k, 'v> {
    Small(iter::Take<slice::Iter<'cs, Capture<'k, 'v>>>),
    Large(slice::Iter<'cs, Capture<'k, 'v>>),
}

impl<'cs, 'k, 'v> Iterator for CapturesIter<'cs, 'k, 'v> {
    type Item = (&'k str, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        match self.kind {
            CapturesIterKind::Small(ref mut iter) => {
                iter.next().map(|c| (c.key, c.value_str()))
            }
            CapturesIterKind::Large(ref mut iter) => {
                iter.next().map(|c| (c.key, c.value_str()))
            }
        }
    }
}

impl ExactSizeIterator for CapturesIter<'_, '_, '_> {
    fn len(&self) -> usize {
        match self.kind {
            CapturesIterKind::Small(ref iter) => iter.len(),
            CapturesIterKind::Large(ref iter) => iter.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_alloc() {
        let vec = vec![
            ("hello", "hello"),
            ("world", "world"),
            ("foo", "foo"),
            ("bar", "bar"),
            ("baz", "baz"),
        ];

        let mut captures = Captures::new();
        for (key, value) in vec.clone() {
            captures.push(key, value.as_bytes());
            assert_eq!(captures.get(key), Some(value));
        }

        match captures.kind {
            CapturesKind::Large(..) => {}
            _ => panic!(),
        }

        assert!(captures.iter().eq(vec.clone()));
    }

    #[test]
    fn stack_alloc() {
        let vec = vec![("hello", "hello"), ("world", "world"), ("baz", "baz")];

        let mut captures = Captures::new();
        for (key, value) in vec.clone() {
            captures.push(key, value.as_bytes());
            assert_eq!(captures.get(key), Some(value));
        }

        match captures.kind {
            CapturesKind::Small(..) => {}
            _ => panic!(),
        }

        assert!(captures.iter().eq(vec.clone()));
    }

    #[test]
    fn ignore_array_default() {
        let captures = Captures::new();
        assert!(captures.get("").is_none());
    }
}
