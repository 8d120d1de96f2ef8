#![doc = include_str!("../README.md")]

mod error;
mod sort;

pub use error::Error;
pub use sort::sort_keys;

pub use objlit_fmt::{FormatConfig, NewlineStyle, SerializeError, serialize, serialize_with_config};
pub use objlit_json::{ParseError, ToJsonError, json_to_value, parse, value_to_json};
pub use objlit_reader::{EncodeError, encode};
pub use objlit_value::{Array, Object, ObjectKey, Value, identifier, sentinel};

/// The full editor pipeline: encode the selection, parse it, sort every
/// object's keys, and render the result.
pub fn sort_text(source: &str) -> Result<String, Error> {
    sort_text_with_config(source, &FormatConfig::default())
}

/// Like [`sort_text`] with serializer configuration.
pub fn sort_text_with_config(source: &str, config: &FormatConfig) -> Result<String, Error> {
    let encoded = encode(source)?;
    let mut tree = parse(&encoded)?;
    sort_keys(&mut tree);
    Ok(serialize_with_config(&tree, config)?)
}
