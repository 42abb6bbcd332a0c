/*!
Regex composition.

A Markdown token grammar is a set of mutually referencing patterns: a list item refers to a bullet, a link refers to a label, an href and a title, and so on. Instead of duplicating every piece into every pattern, a pattern is written as a template with named placeholders, and [`edit()`] splices the pieces in.

## Example
```
use mdkit::regex::edit;

let bullet = r"(?:[*+-]|\d{1,9}[.)])";
let item = edit(r"^( {0,3}bull)( [^\n]+?)?(?:\n|$)")
    .replace("bull", bullet)
    .get_regex()
    .unwrap();
assert!(item.is_match("- item"));
assert!(item.is_match("12) item"));
assert!(item.is_match("  item") == false);
```

## Anchors in replacements
Pieces are often written as standalone patterns anchored with `^`. Spliced into the middle of another pattern, such an anchor would silently make it unmatchable, so every `^` in a replacement is removed unless it negates a character class (`[^`):
```
use mdkit::regex::edit;

let re = edit("a(x)").replace("x", "^[^b]+").get_regex().unwrap();
assert_eq!(re.as_str(), "a([^b]+)");
assert!(re.is_match("xxacc"));
```
The template itself is left untouched.

No validation is done while composing: a placeholder that does not occur makes [`replace()`](RegexEdit::replace) a no-op, and a malformed result is only reported by [`get_regex()`](RegexEdit::get_regex).
*/
use std::{borrow::Cow, sync::OnceLock};

use ::regex::{NoExpand, Regex, RegexBuilder};
use bitflags::bitflags;

use crate::Sealed;

bitflags! {
    /// Compile flags, named after the inline flags of the [`regex`](::regex) crate.
    ///
    /// Can be parsed from the flag letters, see [`RegexFlags::parse()`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RegexFlags: u8 {
        /// `i`
        const CASE_INSENSITIVE = 1 << 0;
        /// `m`
        const MULTI_LINE = 1 << 1;
        /// `s`
        const DOT_MATCHES_NEW_LINE = 1 << 2;
        /// `x`
        const IGNORE_WHITESPACE = 1 << 3;
        /// `U`
        const SWAP_GREED = 1 << 4;
    }
}

impl RegexFlags {
    /// Parse flag letters, e.g. `"im"`.
    ///
    /// Letters without a compile-time meaning, like the global-match `g`, are ignored.
    ///
    /// ## Example
    /// ```
    /// use mdkit::regex::RegexFlags;
    ///
    /// assert_eq!(RegexFlags::parse("gi"), RegexFlags::CASE_INSENSITIVE);
    /// assert_eq!(RegexFlags::parse(""), RegexFlags::empty());
    /// ```
    pub fn parse(flags: &str) -> Self {
        flags
            .chars()
            .map(|c| match c {
                'i' => Self::CASE_INSENSITIVE,
                'm' => Self::MULTI_LINE,
                's' => Self::DOT_MATCHES_NEW_LINE,
                'x' => Self::IGNORE_WHITESPACE,
                'U' => Self::SWAP_GREED,
                _ => Self::empty(),
            })
            .collect()
    }
}

impl From<&str> for RegexFlags {
    fn from(flags: &str) -> Self {
        Self::parse(flags)
    }
}

/// Anything a pattern source can be taken from.
pub trait PatternSource: Sealed {
    fn pattern_source(&self) -> &str;
}

impl Sealed for str {}
impl PatternSource for str {
    fn pattern_source(&self) -> &str {
        self
    }
}

impl Sealed for String {}
impl PatternSource for String {
    fn pattern_source(&self) -> &str {
        self
    }
}

impl Sealed for Regex {}
impl PatternSource for Regex {
    fn pattern_source(&self) -> &str {
        self.as_str()
    }
}

impl Sealed for RegexEdit {}
impl PatternSource for RegexEdit {
    fn pattern_source(&self) -> &str {
        &self.source
    }
}

/// A placeholder to be replaced in a pattern source.
///
/// - `str`: every occurrence of the literal text.
/// - [`Regex`]: every match of the regex.
///
/// Replacement text is always inserted literally, `$` has no special meaning.
pub trait Placeholder: Sealed {
    fn replace_all<'h>(&self, haystack: &'h str, replacement: &str) -> Cow<'h, str>;
}

impl Placeholder for str {
    fn replace_all<'h>(&self, haystack: &'h str, replacement: &str) -> Cow<'h, str> {
        if self.is_empty() || !haystack.contains(self) {
            return Cow::Borrowed(haystack);
        }
        Cow::Owned(haystack.replace(self, replacement))
    }
}

impl Placeholder for Regex {
    fn replace_all<'h>(&self, haystack: &'h str, replacement: &str) -> Cow<'h, str> {
        Regex::replace_all(self, haystack, NoExpand(replacement))
    }
}

/// Remove every `^` that does not directly follow a `[`.
///
/// A `^` right after a removed one is kept if nothing else separates it from the start of the match, e.g. `a^^` becomes `a^`.
///
/// ## Example
/// ```
/// use mdkit::regex::neutralize_carets;
///
/// assert_eq!(neutralize_carets("^a^cccb^"), "acccb");
/// assert_eq!(neutralize_carets("[^a]"), "[^a]");
/// assert_eq!(neutralize_carets("^[^a]"), "[^a]");
/// ```
pub fn neutralize_carets(source: &str) -> Cow<'_, str> {
    static CARET: OnceLock<Regex> = OnceLock::new();
    let caret = CARET.get_or_init(|| Regex::new(r"(^|[^\[])\^").unwrap());
    caret.replace_all(source, "$1")
}

/// Start composing a pattern from `source`.
///
/// `source` can be a `str`, a [`String`] or a compiled [`Regex`].
///
/// See the [module docs](self) for an example.
pub fn edit(source: &(impl PatternSource + ?Sized)) -> RegexEdit {
    RegexEdit::new(source)
}

/// A pattern under composition. See [`edit()`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegexEdit {
    source: String,
    flags: RegexFlags,
}

impl RegexEdit {
    pub fn new(source: &(impl PatternSource + ?Sized)) -> Self {
        Self {
            source: source.pattern_source().to_owned(),
            flags: RegexFlags::empty(),
        }
    }

    /// Set the flags [`get_regex()`](Self::get_regex) compiles with.
    ///
    /// ## Example
    /// ```
    /// use mdkit::regex::{edit, RegexFlags};
    ///
    /// assert!(edit("abc").flags("i").get_regex().unwrap().is_match("ABC"));
    /// assert!(edit("a.c").flags(RegexFlags::DOT_MATCHES_NEW_LINE).get_regex().unwrap().is_match("a\nc"));
    /// ```
    pub fn flags(mut self, flags: impl Into<RegexFlags>) -> Self {
        self.flags = flags.into();
        self
    }

    /// Replace every occurrence of `placeholder` with the source of `replacement`, after [neutralizing its carets](neutralize_carets).
    pub fn replace(
        mut self,
        placeholder: &(impl Placeholder + ?Sized),
        replacement: &(impl PatternSource + ?Sized),
    ) -> Self {
        let replacement = neutralize_carets(replacement.pattern_source());
        if let Cow::Owned(source) = placeholder.replace_all(&self.source, &replacement) {
            self.source = source;
        }
        self
    }

    /// The pattern source composed so far.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }

    pub fn get_flags(&self) -> RegexFlags {
        self.flags
    }

    /// Compile the composed pattern.
    pub fn get_regex(&self) -> Result<Regex, ::regex::Error> {
        RegexBuilder::new(&self.source)
            .case_insensitive(self.flags.contains(RegexFlags::CASE_INSENSITIVE))
            .multi_line(self.flags.contains(RegexFlags::MULTI_LINE))
            .dot_matches_new_line(self.flags.contains(RegexFlags::DOT_MATCHES_NEW_LINE))
            .ignore_whitespace(self.flags.contains(RegexFlags::IGNORE_WHITESPACE))
            .swap_greed(self.flags.contains(RegexFlags::SWAP_GREED))
            .build()
    }
}
