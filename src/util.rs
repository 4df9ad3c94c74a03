//! Shared byte-slice helpers used by the splitter and the record parser.

/// Find the first occurrence of `needle` in `haystack`.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Find the last occurrence of `needle` in `haystack`.
pub fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

/// Split `haystack` at the first occurrence of `needle`, which is consumed.
///
/// Returns the parts before and after the separator, or `None` when the
/// separator is absent.
pub fn split_once<'a>(haystack: &'a [u8], needle: &[u8]) -> Option<(&'a [u8], &'a [u8])> {
    let at = find(haystack, needle)?;
    Some((&haystack[..at], &haystack[at + needle.len()..]))
}

/// Iterate over segments of `haystack`, each ending just past an occurrence
/// of `needle`. Any trailing bytes after the last occurrence form the final
/// segment.
pub fn split_after<'a>(haystack: &'a [u8], needle: &'a [u8]) -> SplitAfter<'a> {
    SplitAfter {
        rest: haystack,
        needle,
    }
}

/// Iterator returned by [`split_after`].
pub struct SplitAfter<'a> {
    rest: &'a [u8],
    needle: &'a [u8],
}

impl<'a> Iterator for SplitAfter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.rest.is_empty() {
            return None;
        }
        match find(self.rest, self.needle) {
            Some(at) => {
                let end = at + self.needle.len();
                let (head, tail) = self.rest.split_at(end);
                self.rest = tail;
                Some(head)
            }
            None => {
                let head = self.rest;
                self.rest = &[];
                Some(head)
            }
        }
    }
}
