//! JSON parsing and tree conversion for encoded object literals.
//!
//! [`parse`] turns the encoder's strict-JSON output into a [`Value`] tree,
//! decoding sentinel markers into structured variants; object key order is
//! the textual order of the document. [`value_to_json`] is the inverse
//! re-encoding into sentinel-bearing `serde_json::Value` data.

mod convert;
mod error;

pub use convert::{json_to_value, value_to_json};
pub use error::{ParseError, ToJsonError};

use objlit_value::Value;

/// Parse encoded JSON text into a value tree.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    json_to_value(&json)
}
