/*!
HTML entity escaping and unescaping.

Both functions return [`Cow::Borrowed`] if there is nothing to replace, which is the common case for Markdown text.
*/
use std::{borrow::Cow, sync::OnceLock};

use ::regex::{Captures, Regex};
use mdkit_text::ascii::is_word_byte;

fn escape_replacement(b: u8) -> Option<&'static str> {
    Some(match b {
        b'&' => "&amp;",
        b'<' => "&lt;",
        b'>' => "&gt;",
        b'"' => "&quot;",
        b'\'' => "&#39;",
        _ => return None,
    })
}

/// Whether `s` starts with an entity reference body, i.e. `#?\w+;`.
fn starts_with_entity(s: &[u8]) -> bool {
    let s = s.strip_prefix(b"#").unwrap_or(s);
    let name_len = s.iter().take_while(|&&b| is_word_byte(b)).count();
    name_len > 0 && s.get(name_len) == Some(&b';')
}

/// Escape `&`, `<`, `>`, `"` and `'`.
///
/// Without `encode`, a `&` that already starts an entity (like `&amp;` or `&#39;`) is kept as is, so escaping twice is harmless.
///
/// ## Example
/// ```
/// use mdkit::html::escape;
///
/// assert_eq!(escape("<a href='x'>&amp;</a>", true), "&lt;a href=&#39;x&#39;&gt;&amp;amp;&lt;/a&gt;");
/// assert_eq!(escape("<a href='x'>&amp;</a>", false), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
/// assert_eq!(escape("AT&T", false), "AT&amp;T");
/// ```
pub fn escape(html: &str, encode: bool) -> Cow<'_, str> {
    let bytes = html.as_bytes();
    let needs_escape = |i: usize| -> Option<&'static str> {
        let replacement = escape_replacement(bytes[i])?;
        if bytes[i] == b'&' && !encode && starts_with_entity(&bytes[i + 1..]) {
            return None;
        }
        Some(replacement)
    };

    let Some(first) = (0..bytes.len()).find(|&i| needs_escape(i).is_some()) else {
        return Cow::Borrowed(html);
    };

    let mut out = String::with_capacity(html.len() + 16);
    out.push_str(&html[..first]);
    let mut last = first;
    for i in first..bytes.len() {
        if let Some(replacement) = needs_escape(i) {
            out.push_str(&html[last..i]);
            out.push_str(replacement);
            last = i + 1;
        }
    }
    out.push_str(&html[last..]);
    Cow::Owned(out)
}

/// Decode numeric entities and `&colon;`, and remove every other named entity.
///
/// Only `:` among the named entities matters for the callers, which use this to see through obfuscated link schemes like `javascript&colon;`. The trailing `;` is optional.
///
/// Numeric references are taken as UTF-16 code units, i.e. modulo `0x10000`. Lone surrogates become `U+FFFD`.
///
/// ## Example
/// ```
/// use mdkit::html::unescape;
///
/// assert_eq!(unescape("javascript&colon;alert(1)"), "javascript:alert(1)");
/// assert_eq!(unescape("&#106;&#X61;&#x76;a"), "java");
/// assert_eq!(unescape("&lt"), "");
/// assert_eq!(unescape("&quot;q&quot;"), "q");
/// ```
pub fn unescape(html: &str) -> Cow<'_, str> {
    static ENTITY: OnceLock<Regex> = OnceLock::new();
    let entity = ENTITY.get_or_init(|| {
        Regex::new(r"&(#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z0-9_]+);?").unwrap()
    });

    entity.replace_all(html, |caps: &Captures| {
        let name = caps[1].to_ascii_lowercase();
        if name == "colon" {
            return ":".to_string();
        }
        let Some(number) = name.strip_prefix('#') else {
            return String::new();
        };
        let unit = match number.strip_prefix('x') {
            Some(hex) => code_unit(hex, 16),
            None => code_unit(number, 10),
        };
        char::from_u32(unit)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .to_string()
    })
}

/// Parse digits as a number modulo `0x10000`. Digits are already validated by the regex.
fn code_unit(digits: &str, radix: u32) -> u32 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0, |acc, d| (acc * radix + d) % 0x10000)
}
