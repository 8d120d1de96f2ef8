//! Recursive-descent reader rewriting JavaScript object literals into strict
//! JSON.
//!
//! The reader walks the source with a byte cursor, recognizing the
//! object-literal grammar (keys, colons, commas, brackets, spreads, line
//! comments) and splicing sentinel rewrites into a copy of the text. Plain
//! entries and container punctuation pass through byte-for-byte, so the
//! encoded form keeps the incidental whitespace of the original.

mod encode;
mod error;

pub use encode::encode;
pub use error::EncodeError;
