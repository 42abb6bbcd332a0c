use std::borrow::Cow;

use bon::builder;
use mdkit_text::ascii::{find_byte, is_word_byte};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::resolve_url;
use crate::html;

/// Characters left as is when encoding a whole URI: alphanumerics plus `;,/?:@&=+$-_.!~*'()#`.
const URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Schemes that can execute code when a link is followed.
const DANGEROUS_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Whether `href` can be used without a base URL: it is empty, has a scheme (`[a-zA-Z][a-zA-Z0-9+.-]*:`) or is a same-document reference (`?query` or `#fragment`).
///
/// ## Example
/// ```
/// use mdkit::url::is_origin_independent;
///
/// assert!(is_origin_independent("https://example.com"));
/// assert!(is_origin_independent("mailto:someone@example.com"));
/// assert!(is_origin_independent("#heading"));
/// assert!(is_origin_independent(""));
/// assert!(is_origin_independent("docs/a.md") == false);
/// assert!(is_origin_independent("1http://example.com") == false);
/// ```
pub fn is_origin_independent(href: &str) -> bool {
    let bytes = href.as_bytes();
    match bytes.first() {
        None | Some(b'?' | b'#') => true,
        Some(b) if b.is_ascii_alphabetic() => bytes[1..]
            .iter()
            .find(|&&b| !(b.is_ascii_alphanumeric() || matches!(b, b'+' | b'.' | b'-')))
            == Some(&b':'),
        _ => false,
    }
}

/// Decode `%XX` escapes.
///
/// Unlike [`percent_decode_str()`] alone, this is strict: `None` if a `%` does not start an escape, or if the decoded bytes are not UTF-8.
fn decode_uri_component(s: &str) -> Option<Cow<'_, str>> {
    let bytes = s.as_bytes();
    let mut from = 0;
    while let Some(i) = find_byte(&bytes[from..], b'%') {
        let i = from + i;
        let is_hex = |j: usize| bytes.get(j).is_some_and(u8::is_ascii_hexdigit);
        if !(is_hex(i + 1) && is_hex(i + 2)) {
            return None;
        }
        from = i + 3;
    }
    percent_decode_str(s).decode_utf8().ok()
}

/// What a browser would see as the scheme part of `href`: entities and escapes decoded, everything but `[A-Za-z0-9_:]` removed, lowercased.
fn scheme_probe(href: &str) -> Option<String> {
    let unescaped = html::unescape(href);
    let decoded = decode_uri_component(&unescaped)?;
    Some(
        decoded
            .bytes()
            .filter(|&b| is_word_byte(b) || b == b':')
            .map(|b| b.to_ascii_lowercase() as char)
            .collect(),
    )
}

/// Percent-encode `href` like `encodeURI()`, but leave existing escapes alone.
///
/// `%` is encoded to `%25` and then folded back, so already encoded input is not encoded twice.
fn encode_uri(href: &str) -> String {
    let encoded = utf8_percent_encode(href, URI).to_string();
    if encoded.contains("%25") {
        encoded.replace("%25", "%")
    } else {
        encoded
    }
}

pub(super) fn clean(
    href: &str,
    sanitize: bool,
    base: Option<&str>,
    resolve: impl FnOnce(&str, &str) -> String,
) -> Option<String> {
    if sanitize {
        let Some(probe) = scheme_probe(href) else {
            tracing::debug!(href, "rejected URL that cannot be decoded");
            return None;
        };
        if DANGEROUS_SCHEMES.iter().any(|scheme| probe.starts_with(scheme)) {
            tracing::debug!(href, "rejected URL with dangerous scheme");
            return None;
        }
    }

    let href = match base.filter(|base| !base.is_empty()) {
        Some(base) if !is_origin_independent(href) => Cow::Owned(resolve(base, href)),
        _ => Cow::Borrowed(href),
    };

    Some(encode_uri(&href))
}

/// Make a link target safe to put into an `href` or `src` attribute.
///
/// 1. If [`sanitize`](CleanUrlBuilder::sanitize) is set, reject targets whose scheme is `javascript:`, `vbscript:` or `data:`, even when obfuscated with entities, percent escapes, whitespace or case. Targets that cannot be percent-decoded are rejected too.
/// 2. If a non-empty [`base`](CleanUrlBuilder::base) is given and the target is not [origin independent](is_origin_independent), [resolve](super::resolve_url) it against the base.
/// 3. Percent-encode the target, keeping existing `%XX` escapes.
///
/// Returns `None` if the target is rejected, in which case it should be rendered as plain text.
///
/// Use [`UrlResolver::clean_url()`](super::UrlResolver::clean_url) to cache the base URL across calls.
///
/// ## Example
/// ```
/// use mdkit::url::clean_url;
///
/// assert_eq!(clean_url("javascript:alert(1)").sanitize(true).call(), None);
/// assert_eq!(clean_url("java\tscript&colon;alert(1)").sanitize(true).call(), None);
///
/// assert_eq!(clean_url("a b/%20c").call(), Some("a%20b/%20c".into()));
/// assert_eq!(
///     clean_url("/img.png").base("https://example.com/docs/").call(),
///     Some("https://example.com/img.png".into())
/// );
/// ```
#[builder]
pub fn clean_url<'h, 'b>(
    #[builder(start_fn)] href: &'h str,
    /// Reject targets with dangerous schemes.
    #[builder(default)]
    sanitize: bool,
    /// Base URL for relative targets. Empty is the same as none.
    base: Option<&'b str>,
) -> Option<String> {
    clean(href, sanitize, base, resolve_url)
}
