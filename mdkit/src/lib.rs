/*!
Scanning primitives for Markdown lexers.

A Markdown tokenizer spends most of its time in a handful of small, easy-to-get-wrong routines. This crate provides them as pure functions:
- [Regex composition](regex): build a token grammar from named pieces, with stray `^` anchors neutralized.
- [Link sanitization](url): resolve link targets against a base URL, reject `javascript:`-like schemes and percent-encode the result.
- [Table cells](table): split a table row on unescaped `|` into a fixed number of cells.
- [Bracket matching](bracket): find the bracket closing an already consumed opening one, honoring backslash escapes.
- [Suffix trimming](text::trim): linear-time, so there is no regex to backtrack on adversarial input.
- [HTML entities](html): escaping and unescaping.

None of these panic or allocate an error: rejected input is signaled by `None`.
*/
//! ## Usage
//! ```
//! use mdkit::{bracket::find_closing_bracket, regex::edit, table::split_cells, url::clean_url};
//!
//! let label = edit(r"\[(label)\]")
//!     .replace("label", r"[^\[\]]+")
//!     .get_regex()
//!     .unwrap();
//! assert!(label.is_match("[docs]"));
//!
//! assert_eq!(split_cells(r"a | b\|c | d", 3), ["a", "b|c", "d"]);
//! assert_eq!(find_closing_bracket("a(b)c)d", ['(', ')']), Some(5));
//!
//! assert_eq!(
//!     clean_url("guide/intro.md").base("https://example.com/docs/index.md").call(),
//!     Some("https://example.com/docs/guide/intro.md".into())
//! );
//! assert_eq!(clean_url("javascript:alert(1)").sanitize(true).call(), None);
//! ```
//!
//! ## Crate features
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

pub mod bracket;
pub mod html;
pub mod options;
pub mod regex;
pub mod table;
pub mod url;

pub use mdkit_text as text;

mod private {
    pub trait Sealed {}
}
use private::Sealed;
