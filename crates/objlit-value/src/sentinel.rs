//! Reserved marker strings of the encoded JSON form.
//!
//! The encoder rewrites every non-JSON construct into plain string data
//! carrying one of these markers, and the parser decodes them back into the
//! tagged variants of [`crate::Value`] and [`crate::ObjectKey`]. The
//! spellings are namespaced so they cannot collide with ordinary source
//! content.

/// Value standing in for a property written without `: value`.
pub const SHORTHAND_VALUE: &str = "__DUMMY_VALUE__";

/// Value paired with a synthesized spread key.
pub const SPREAD_VALUE: &str = "__DUMMY_SPREAD_VALUE__";

/// Prefix of a synthesized spread key, followed by the decimal ordinal and
/// the spread's identifier path. The `!!!` run also orders spread entries
/// ahead of alphabetic keys when the encoded keys are sorted as strings.
pub const SPREAD_KEY_PREFIX: &str = "!!!___";

/// Suffix marking a key that was written as a computed key `[path]`.
pub const VARIABLE_KEY_SUFFIX: &str = "__DUMMY_VARIABLE_KEY__";

/// Prefix marking a string value that carries verbatim expression text.
pub const VARIABLE_VALUE_PREFIX: &str = "__VARIABLE_VALUE__";

/// Suffix marking a synthetic comment entry's key; the rest of the key is
/// the anchor key of the entry the comment precedes.
pub const COMMENT_KEY_SUFFIX: &str = "__DUMMY_COMMENT_KEY__";

/// Prefix marking a synthetic comment entry's value.
pub const COMMENT_VALUE_PREFIX: &str = "__DUMMY_COMMENT_VALUE__";
