//! Value tree for JavaScript object-literal conversion.
//!
//! An object literal parsed from source becomes a [`value::Value`] tree whose
//! object entries keep their source order. Constructs that strict JSON cannot
//! express (shorthand properties, spreads, computed keys, comments, bare
//! expressions) are explicit variants of [`value::Value`] and
//! [`key::ObjectKey`]; their sentinel string spellings exist only in the
//! encoded JSON form and live in [`sentinel`].

/// JavaScript identifier validation.
pub mod identifier;

/// Object entry keys and their encoded-form mapping.
pub mod key;

/// Reserved marker strings of the encoded JSON form.
pub mod sentinel;

/// The tagged value tree.
pub mod value;

pub use key::ObjectKey;
pub use value::{Array, Object, Value};
