/// Search for the first occurrence of a byte in a haystack.
///
/// Returns an index less than `haystack.len()`, or `None` if `needle` is absent.
///
/// # Examples
///
/// ```
/// use mdkit_text::ascii::find_byte;
///
/// assert_eq!(find_byte(b"a | b", b'|'), Some(2));
/// assert_eq!(find_byte(b"a b", b'|'), None);
/// ```
#[cfg_attr(feature = "perf-find", inline)]
pub fn find_byte(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(not(feature = "perf-find"))]
    return haystack.iter().position(|&b| b == needle);
    #[cfg(feature = "perf-find")]
    // sse2/avx2 on x86_64
    memchr::memchr(needle, haystack)
}

/// Search for the first occurrence of two possible bytes in a haystack.
///
/// This returns the index corresponding to the first occurrence of one of the
/// needle bytes in `haystack`, or `None` if one is not found. If an index is
/// returned, it is guaranteed to be less than `haystack.len()`.
///
/// While this is semantically the same as something like
/// `haystack.iter().position(|&b| b == needle1 || b == needle2)`, this routine
/// will attempt to use highly optimized vector operations that can be an order
/// of magnitude faster (or more).
///
/// # Example
///
/// Find the next byte a table row scanner has to look at:
///
/// ```
/// use mdkit_text::ascii::find_byte2;
///
/// let row = br"a \| b | c";
/// assert_eq!(find_byte2(row, b'\\', b'|'), Some(2));
/// ```
pub fn find_byte2(haystack: &[u8], needle1: u8, needle2: u8) -> Option<usize> {
    #[cfg(not(feature = "perf-find"))]
    return haystack.iter().position(|&b| b == needle1 || b == needle2);
    #[cfg(feature = "perf-find")]
    memchr::memchr2(needle1, needle2, haystack)
}

/// Returns `true` if `c` occurs in `s`.
///
/// ASCII needles go through [`find_byte`], others fall back to [`str::contains`].
///
/// ```
/// use mdkit_text::ascii::contains_char;
///
/// assert!(contains_char("(a)", ')'));
/// assert!(contains_char("「a」", '」'));
/// assert!(!contains_char("(a", ')'));
/// ```
#[inline]
pub fn contains_char(s: &str, c: char) -> bool {
    if c.is_ascii() {
        find_byte(s.as_bytes(), c as u8).is_some()
    } else {
        s.contains(c)
    }
}

/// Returns `true` if `b` is matched by `\w` in an ASCII-only regex, i.e. `[A-Za-z0-9_]`.
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find() {
        assert_eq!(find_byte(b"", b'|'), None);
        assert_eq!(find_byte(b"|", b'|'), Some(0));
        assert_eq!(find_byte("日本|".as_bytes(), b'|'), Some(6));

        assert_eq!(find_byte2(b"abc", b'x', b'y'), None);
        assert_eq!(find_byte2(b"abyx", b'x', b'y'), Some(2));
    }

    #[test]
    fn word_byte() {
        assert!(is_word_byte(b'a'));
        assert!(is_word_byte(b'Z'));
        assert!(is_word_byte(b'7'));
        assert!(is_word_byte(b'_'));
        assert!(!is_word_byte(b':'));
        assert!(!is_word_byte(b'-'));
        assert!(!is_word_byte(0xE6));
    }
}
