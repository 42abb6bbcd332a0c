/*!
Backslash escapes.

A byte is escaped if it is preceded by an odd number of consecutive backslashes:
`\|` is an escaped pipe, `\\|` is an escaped backslash followed by a plain pipe.
*/
use core::iter::FusedIterator;

use crate::ascii::find_byte;

/// Returns `true` if the byte at `pos` is preceded by an odd number of consecutive backslashes.
///
/// Only the backslash run directly before `pos` is looked at, so checking every
/// delimiter of a string is still linear in total.
///
/// ## Example
/// ```
/// use mdkit_text::escape::is_escaped;
///
/// assert!(!is_escaped(br"a|b", 1));
/// assert!(is_escaped(br"a\|b", 2));
/// assert!(!is_escaped(br"a\\|b", 3));
/// assert!(is_escaped(br"a\\\|b", 4));
/// ```
pub fn is_escaped(s: &[u8], pos: usize) -> bool {
    let mut escaped = false;
    for &b in s[..pos].iter().rev() {
        if b != b'\\' {
            break;
        }
        escaped = !escaped;
    }
    escaped
}

/// Iterator over the substrings of a string separated by an unescaped ASCII delimiter.
///
/// Escaped delimiters are kept as is, including their backslash.
///
/// ## Example
/// ```
/// use mdkit_text::escape::EscapedSplit;
///
/// let parts: Vec<_> = EscapedSplit::new(r"a|b\|c|\\|d", b'|').collect();
/// assert_eq!(parts, [r"a", r"b\|c", r"\\", "d"]);
/// ```
#[derive(Clone, Debug)]
pub struct EscapedSplit<'s> {
    s: &'s str,
    delimiter: u8,
    start: usize,
    finished: bool,
}

impl<'s> EscapedSplit<'s> {
    /// `delimiter` must be ASCII, so every match is a char boundary.
    pub fn new(s: &'s str, delimiter: u8) -> Self {
        debug_assert!(delimiter.is_ascii());
        Self {
            s,
            delimiter,
            start: 0,
            finished: false,
        }
    }

    /// The part of the string not yielded yet.
    pub fn remainder(&self) -> Option<&'s str> {
        (!self.finished).then(|| &self.s[self.start..])
    }
}

impl<'s> Iterator for EscapedSplit<'s> {
    type Item = &'s str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let bytes = self.s.as_bytes();
        let mut from = self.start;
        while let Some(i) = find_byte(&bytes[from..], self.delimiter) {
            let pos = from + i;
            if !is_escaped(bytes, pos) {
                let part = &self.s[self.start..pos];
                self.start = pos + 1;
                return Some(part);
            }
            from = pos + 1;
        }
        self.finished = true;
        Some(&self.s[self.start..])
    }
}

impl FusedIterator for EscapedSplit<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity() {
        assert!(!is_escaped(b"|", 0));
        assert!(is_escaped(br"\|", 1));
        assert!(!is_escaped(br"\\|", 2));
        assert!(is_escaped(br"\\\|", 3));
        assert!(!is_escaped(br"\\\\|", 4));
        // Only the run directly before counts
        assert!(!is_escaped(br"\a|", 2));
    }

    #[test]
    fn split() {
        let split = |s| EscapedSplit::new(s, b'|').collect::<Vec<_>>();
        assert_eq!(split(""), [""]);
        assert_eq!(split("|"), ["", ""]);
        assert_eq!(split("a"), ["a"]);
        assert_eq!(split(r"\|"), [r"\|"]);
        assert_eq!(split("| a | b |"), ["", " a ", " b ", ""]);
        assert_eq!(split(r"a \\\| b"), [r"a \\\| b"]);
        assert_eq!(split("拼|音"), ["拼", "音"]);
    }

    #[test]
    fn remainder() {
        let mut split = EscapedSplit::new("a|b|c", b'|');
        assert_eq!(split.remainder(), Some("a|b|c"));
        split.next();
        assert_eq!(split.remainder(), Some("b|c"));
        split.next();
        split.next();
        assert_eq!(split.remainder(), None);
        assert_eq!(split.next(), None);
    }
}
