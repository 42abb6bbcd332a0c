//! Text scanning utils.
/*!
## Features
- Linear-time suffix [trimming](trim) that is safe against adversarial input
- Fast [ASCII](ascii) byte search utils
- Backslash [escape](escape) parity and escape-aware splitting

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
pub mod ascii;
pub mod escape;
pub mod trim;

pub use trim::rtrim;
