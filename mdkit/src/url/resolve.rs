use std::{borrow::Cow, collections::HashMap};

use mdkit_text::rtrim;

/// The index of the first `:`, if it is not at the start, i.e. `^[^:]+:`.
fn scheme_end(url: &str) -> Option<usize> {
    url.find(':').filter(|&i| i != 0)
}

/// `^[^:]+:/*[^/]*$`: a scheme, optionally an authority, but no path.
fn is_just_domain(base: &str) -> bool {
    let Some(colon) = scheme_end(base) else {
        return false;
    };
    !base[colon + 1..].trim_start_matches('/').contains('/')
}

/// `scheme:`, or the whole URL if there is no scheme.
fn scheme(url: &str) -> &str {
    match scheme_end(url) {
        Some(colon) => &url[..=colon],
        None => url,
    }
}

/// `scheme://authority` without the path, or the whole URL if there is no scheme.
fn origin(url: &str) -> &str {
    let Some(colon) = scheme_end(url) else {
        return url;
    };
    let rest = &url[colon + 1..];
    let authority = rest.trim_start_matches('/');
    let slashes = rest.len() - authority.len();
    let end = authority.find('/').unwrap_or(authority.len());
    &url[..colon + 1 + slashes + end]
}

/// Normalize a base URL so that a relative path can be appended to it.
///
/// A base with a scheme but no path gets a trailing `/`. Anything else is cut
/// back to just after its last `/`, dropping the last path segment (possibly
/// leaving an empty string).
///
/// ## Example
/// ```
/// use mdkit::url::normalize_base;
///
/// assert_eq!(normalize_base("https://example.com"), "https://example.com/");
/// assert_eq!(normalize_base("https://example.com/a/b.md"), "https://example.com/a/");
/// assert_eq!(normalize_base("aa:bb:cc"), "aa:bb:cc/");
/// assert_eq!(normalize_base("docs"), "");
/// ```
pub fn normalize_base(base: &str) -> Cow<'_, str> {
    if is_just_domain(base) {
        Cow::Owned(format!("{base}/"))
    } else {
        Cow::Borrowed(rtrim(base, '/', true))
    }
}

/// `base` must already be normalized.
fn resolve_normalized(base: &str, href: &str) -> String {
    let relative_base = !base.contains(':');
    if href.starts_with("//") {
        if relative_base {
            return href.to_owned();
        }
        format!("{}{href}", scheme(base))
    } else if href.starts_with('/') {
        if relative_base {
            return href.to_owned();
        }
        format!("{}{href}", origin(base))
    } else {
        format!("{base}{href}")
    }
}

/// Resolve `href` against `base`.
///
/// See [the module docs](super#resolution) for the rules. Use a [`UrlResolver`]
/// to avoid normalizing the same base again for every link.
///
/// ## Example
/// ```
/// use mdkit::url::resolve_url;
///
/// assert_eq!(resolve_url("aa:bb:cc", "//uu/kk"), "aa://uu/kk");
/// assert_eq!(resolve_url("aa:bb:cc/dd/eee", "/uu/kk"), "aa:bb:cc/uu/kk");
/// assert_eq!(resolve_url("dkddid", "/uu/kk"), "/uu/kk");
/// ```
pub fn resolve_url(base: &str, href: &str) -> String {
    resolve_normalized(&normalize_base(base), href)
}

/// Resolves URLs with a cache of normalized base URLs.
///
/// Entries are never evicted, which is fine as long as the resolver lives as
/// long as one document or render call: the number of distinct bases is small.
/// Drop the resolver or [`clear()`](Self::clear) it otherwise.
///
/// ## Example
/// ```
/// use mdkit::url::UrlResolver;
///
/// let mut resolver = UrlResolver::new();
/// let base = "https://example.com/docs/index.md";
/// assert_eq!(resolver.resolve(base, "a.md"), "https://example.com/docs/a.md");
/// assert_eq!(resolver.resolve(base, "/b.md"), "https://example.com/b.md");
/// assert_eq!(resolver.cached_bases(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UrlResolver {
    bases: HashMap<String, String>,
}

impl UrlResolver {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalized_base(&mut self, base: &str) -> &str {
        if !self.bases.contains_key(base) {
            let normalized = normalize_base(base).into_owned();
            tracing::trace!(base, %normalized, "cached base URL");
            self.bases.insert(base.to_owned(), normalized);
        }
        &self.bases[base]
    }

    /// Resolve `href` against `base`. See [`resolve_url()`].
    pub fn resolve(&mut self, base: &str, href: &str) -> String {
        resolve_normalized(self.normalized_base(base), href)
    }

    /// [`clean_url()`](super::clean_url) with base URLs resolved through this resolver.
    ///
    /// ## Example
    /// ```
    /// use mdkit::url::UrlResolver;
    ///
    /// let mut resolver = UrlResolver::new();
    /// let base = Some("https://example.com/docs/");
    /// assert_eq!(
    ///     resolver.clean_url(true, base, "a b.md"),
    ///     Some("https://example.com/docs/a%20b.md".into())
    /// );
    /// assert_eq!(resolver.clean_url(true, base, "javascript:alert(1)"), None);
    /// ```
    pub fn clean_url(&mut self, sanitize: bool, base: Option<&str>, href: &str) -> Option<String> {
        super::clean::clean(href, sanitize, base, |base, href| self.resolve(base, href))
    }

    /// The number of distinct base URLs cached.
    pub fn cached_bases(&self) -> usize {
        self.bases.len()
    }

    pub fn clear(&mut self) {
        self.bases.clear();
    }
}
