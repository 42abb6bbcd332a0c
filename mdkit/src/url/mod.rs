/*!
Link target resolution and sanitization.

- [`clean_url()`]: the entry point for rendering a link or image target. Optionally rejects dangerous schemes, resolves against a base URL and percent-encodes the result.
- [`resolve_url()`]: join a base URL and a relative reference.
- [`UrlResolver`]: the same, with the normalized base URLs cached. Create one per document (or render call) when many links share a base.

## Resolution
Resolution is deliberately lightweight and not a full [RFC 3986](https://tools.ietf.org/html/rfc3986#section-5) implementation. Whether a base "has a scheme" is decided by the presence of a `:` only.

The base is first normalized by [`normalize_base()`]: a base without a path gets a trailing `/`, anything else is cut back to its last `/`. Then:

| href | Base without `:` | Base with `:` |
| --- | --- | --- |
| `//host/path` | href | scheme + href |
| `/path` | href | scheme + authority + href |
| `path` | base + href | base + href |

## Example
```
use mdkit::url::resolve_url;

let base = "https://example.com/docs/guide.md";
assert_eq!(resolve_url(base, "img.png"), "https://example.com/docs/img.png");
assert_eq!(resolve_url(base, "/img.png"), "https://example.com/img.png");
assert_eq!(resolve_url(base, "//cdn.example.com/img.png"), "https://cdn.example.com/img.png");

assert_eq!(resolve_url("docs/guide.md", "img.png"), "docs/img.png");
assert_eq!(resolve_url("docs/guide.md", "/img.png"), "/img.png");
```
*/
mod clean;
mod resolve;

pub use clean::{clean_url, is_origin_independent, CleanUrlBuilder};
pub use resolve::{normalize_base, resolve_url, UrlResolver};
