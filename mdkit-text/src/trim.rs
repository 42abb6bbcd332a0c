/*!
Suffix trimming.

A regex like `c*$` looks like the obvious way to strip a trailing run, but a
backtracking engine retries the run from every start position, so a long run
of `c` followed by one other character takes quadratic time. [`rtrim`] walks
backwards from the end exactly once instead.
*/

/// Remove the maximal trailing run of `c`.
///
/// With `invert`, remove the maximal trailing run of characters that are *not*
/// `c` instead, i.e. cut `s` back to just after its last `c`. This is how a URL
/// is cut down to its last path segment.
///
/// The result is a slice of `s`, and trimming it again with the same arguments
/// is a no-op.
///
/// ## Example
/// ```
/// use mdkit_text::rtrim;
///
/// assert_eq!(rtrim("abcddd", 'd', false), "abc");
/// assert_eq!(rtrim("abcddd", 'e', false), "abcddd");
/// assert_eq!(rtrim("abcddd", 'e', true), "");
/// assert_eq!(rtrim("abcddd", 'd', true), "abcddd");
///
/// assert_eq!(rtrim("https://example.com/a/b.md", '/', true), "https://example.com/a/");
/// ```
pub fn rtrim(s: &str, c: char, invert: bool) -> &str {
    let mut end = s.len();
    for (i, ch) in s.char_indices().rev() {
        if (ch == c) == invert {
            break;
        }
        end = i;
    }
    // SAFETY: `end` is either `s.len()` or a `char_indices()` boundary.
    unsafe { s.get_unchecked(..end) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_run() {
        assert_eq!(rtrim("", 'd', false), "");
        assert_eq!(rtrim("", 'd', true), "");
        assert_eq!(rtrim("ddd", 'd', false), "");
        assert_eq!(rtrim("dadd", 'd', false), "da");
        assert_eq!(rtrim("a//", '/', false), "a");
    }

    #[test]
    fn invert() {
        assert_eq!(rtrim("a/b/c", '/', true), "a/b/");
        assert_eq!(rtrim("a/b/", '/', true), "a/b/");
        assert_eq!(rtrim("abc", '/', true), "");
        assert_eq!(rtrim("/", '/', true), "/");
    }

    #[test]
    fn unicode() {
        assert_eq!(rtrim("拼音音音", '音', false), "拼");
        assert_eq!(rtrim("/拼/音符", '/', true), "/拼/");
        assert_eq!(rtrim("aé", 'é', false), "a");
    }

    #[test]
    fn idempotent() {
        for (s, c, invert) in [
            ("abcddd", 'd', false),
            ("abcddd", 'd', true),
            ("abcddd", 'e', true),
            ("aa:bb:cc/dd/eee", '/', true),
            ("x//y//", '/', false),
        ] {
            let once = rtrim(s, c, invert);
            assert_eq!(rtrim(once, c, invert), once);
        }
    }

    #[test]
    fn adversarial() {
        let mut s = "d".repeat(100_000);
        s.push('x');
        assert_eq!(rtrim(&s, 'd', false).len(), s.len());
        assert_eq!(rtrim(&s, 'x', false).len(), s.len() - 1);
        assert_eq!(rtrim(&s, 'd', true).len(), s.len() - 1);
        assert_eq!(rtrim(&s, 'y', true), "");
    }
}
