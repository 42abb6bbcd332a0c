//! Bracket matching.
use mdkit_text::ascii::contains_char;

/// Find the bracket that closes an already consumed opening bracket.
///
/// `s` is expected to start right after the opening bracket. Scanning from the
/// start, `open` increases the depth and `close` decreases it; the first `close`
/// that takes the depth below zero is the match, and its byte index is returned.
///
/// A backslash escapes the character after it, so escaped brackets never count.
///
/// Returns `None` if `close` does not occur at all or the brackets never balance out.
///
/// ## Example
/// ```
/// use mdkit::bracket::find_closing_bracket;
///
/// assert_eq!(find_closing_bracket("ab(cd)(ef)gh)bb(bb)", ['(', ')']), Some(12));
/// assert_eq!(find_closing_bracket("(ab(cd)(ef)gh", ['(', ')']), None);
///
/// // Link text after `[`
/// assert_eq!(find_closing_bracket(r"a \] [b] c](url)", ['[', ']']), Some(10));
/// ```
pub fn find_closing_bracket(s: &str, [open, close]: [char; 2]) -> Option<usize> {
    if !contains_char(s, close) {
        return None;
    }

    let mut level: isize = 0;
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            // A trailing backslash just ends the iteration
            chars.next();
        } else if c == open {
            level += 1;
        } else if c == close {
            level -= 1;
            if level < 0 {
                return Some(i);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARENS: [char; 2] = ['(', ')'];

    #[test]
    fn nested() {
        assert_eq!(find_closing_bracket("((bb(cc", PARENS), None);
        assert_eq!(find_closing_bracket("((bb(cc))))))", PARENS), Some(10));
        assert_eq!(find_closing_bracket(")", PARENS), Some(0));
        assert_eq!(find_closing_bracket("a)b)", PARENS), Some(1));
        assert_eq!(find_closing_bracket("()", PARENS), None);
        assert_eq!(find_closing_bracket("(ab(cd)(ef)gh)bb(bb)", PARENS), None);
    }

    #[test]
    fn no_close() {
        assert_eq!(find_closing_bracket("", PARENS), None);
        assert_eq!(find_closing_bracket("(((", PARENS), None);
        assert_eq!(find_closing_bracket("abc", PARENS), None);
    }

    #[test]
    fn escaped() {
        assert_eq!(find_closing_bracket(r"\)", PARENS), None);
        assert_eq!(find_closing_bracket(r"\))", PARENS), Some(2));
        assert_eq!(find_closing_bracket(r"\()", PARENS), Some(2));
        assert_eq!(find_closing_bracket(r"\\)", PARENS), Some(2));
        assert_eq!(find_closing_bracket(r"\\\))", PARENS), Some(4));
    }

    #[test]
    fn trailing_backslash() {
        assert_eq!(find_closing_bracket(r"a)\", PARENS), Some(1));
        assert_eq!(find_closing_bracket(r"(a)\", PARENS), None);
        assert_eq!(find_closing_bracket("\\", ['\\', '\\']), None);
    }

    #[test]
    fn byte_index() {
        assert_eq!(find_closing_bracket("拼音)", PARENS), Some(6));
        assert_eq!(find_closing_bracket("a「b」」", ['「', '」']), Some(8));
    }
}
