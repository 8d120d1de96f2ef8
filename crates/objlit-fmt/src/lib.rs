//! Renders a value tree back as JavaScript object-literal source.
//!
//! Block rendering uses one line per entry with a trailing comma after every
//! entry (including the last) and the closing brace on its own line at the
//! parent's indentation. Arrays and the objects nested inside them render
//! inline. Marker variants decode back into their original syntactic forms:
//! shorthand entries, `...path` spreads, `//` comment lines, `[path]`
//! computed keys, and verbatim expression values.

mod config;
mod error;

pub use config::{FormatConfig, NewlineStyle};
pub use error::SerializeError;

use std::fmt::Write;

use objlit_value::identifier::is_identifier;
use objlit_value::{Array, Object, ObjectKey, Value};

/// Render a value tree as object-literal source with default configuration.
pub fn serialize(value: &Value) -> Result<String, SerializeError> {
    serialize_with_config(value, &FormatConfig::default())
}

/// Render a value tree as object-literal source.
pub fn serialize_with_config(
    value: &Value,
    config: &FormatConfig,
) -> Result<String, SerializeError> {
    let Value::Object(object) = value else {
        return Err(SerializeError::RootNotObject);
    };
    let mut out = String::new();
    write_block(&mut out, object, 0, config)?;
    Ok(out)
}

fn write_block(
    out: &mut String,
    object: &Object,
    level: usize,
    config: &FormatConfig,
) -> Result<(), SerializeError> {
    if object.is_empty() {
        out.push_str("{}");
        return Ok(());
    }
    let nl = config.newline.as_str();
    let indent = " ".repeat(config.indent_width * (level + 1));
    out.push('{');
    out.push_str(nl);
    for (key, value) in object.iter() {
        match (key, value) {
            (ObjectKey::Comment { .. }, Value::Comment(text)) => {
                for line in text.split('\n') {
                    out.push_str(&indent);
                    out.push_str(line);
                    out.push_str(nl);
                }
            }
            (ObjectKey::Spread { path, .. }, Value::Spread) => {
                out.push_str(&indent);
                out.push_str("...");
                out.push_str(path);
                out.push(',');
                out.push_str(nl);
            }
            (ObjectKey::Ident(name), Value::Shorthand) => {
                out.push_str(&indent);
                out.push_str(name);
                out.push(',');
                out.push_str(nl);
            }
            (ObjectKey::Comment { .. } | ObjectKey::Spread { .. }, _)
            | (_, Value::Shorthand | Value::Spread | Value::Comment(_)) => {
                return Err(SerializeError::MismatchedEntry {
                    key: key.encoded(),
                });
            }
            (ObjectKey::Computed(path), value) => {
                out.push_str(&indent);
                out.push('[');
                out.push_str(path);
                out.push_str("]: ");
                render_value(out, value, level + 1, config)?;
                out.push(',');
                out.push_str(nl);
            }
            (ObjectKey::Ident(name), value) => {
                out.push_str(&indent);
                push_key(out, name);
                out.push_str(": ");
                render_value(out, value, level + 1, config)?;
                out.push(',');
                out.push_str(nl);
            }
        }
    }
    out.push_str(&" ".repeat(config.indent_width * level));
    out.push('}');
    Ok(())
}

/// Render a value in entry position: scalars and expressions on the entry's
/// line, arrays inline, nested objects as a block at the next level.
fn render_value(
    out: &mut String,
    value: &Value,
    level: usize,
    config: &FormatConfig,
) -> Result<(), SerializeError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::I64(i) => write!(out, "{i}").unwrap(),
        Value::U64(u) => write!(out, "{u}").unwrap(),
        Value::F64(f) => write!(out, "{f}").unwrap(),
        Value::String(s) => push_single_quoted(out, s),
        Value::Expr(text) => out.push_str(text),
        Value::Array(items) => render_array(out, items)?,
        Value::Object(object) => write_block(out, object, level, config)?,
        Value::Shorthand | Value::Spread | Value::Comment(_) => {
            return Err(SerializeError::MarkerValue);
        }
    }
    Ok(())
}

fn render_array(out: &mut String, items: &Array) -> Result<(), SerializeError> {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        render_inline_value(out, item)?;
    }
    out.push(']');
    Ok(())
}

/// Render a value inside an array or an inline object, where no line
/// structure is available.
fn render_inline_value(out: &mut String, value: &Value) -> Result<(), SerializeError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::I64(i) => write!(out, "{i}").unwrap(),
        Value::U64(u) => write!(out, "{u}").unwrap(),
        Value::F64(f) => write!(out, "{f}").unwrap(),
        Value::String(s) => push_single_quoted(out, s),
        Value::Expr(text) => out.push_str(text),
        Value::Array(items) => render_array(out, items)?,
        Value::Object(object) => render_inline_object(out, object)?,
        Value::Shorthand | Value::Spread | Value::Comment(_) => {
            return Err(SerializeError::MarkerValue);
        }
    }
    Ok(())
}

fn render_inline_object(out: &mut String, object: &Object) -> Result<(), SerializeError> {
    if object.is_empty() {
        out.push_str("{}");
        return Ok(());
    }
    out.push_str("{ ");
    let mut first = true;
    for (key, value) in object.iter() {
        if !first {
            out.push_str(", ");
        }
        first = false;
        match (key, value) {
            (ObjectKey::Comment { .. }, _) => {
                return Err(SerializeError::CommentInInlineObject);
            }
            (ObjectKey::Spread { path, .. }, Value::Spread) => {
                out.push_str("...");
                out.push_str(path);
            }
            (ObjectKey::Ident(name), Value::Shorthand) => out.push_str(name),
            (ObjectKey::Spread { .. }, _)
            | (_, Value::Shorthand | Value::Spread | Value::Comment(_)) => {
                return Err(SerializeError::MismatchedEntry {
                    key: key.encoded(),
                });
            }
            (ObjectKey::Computed(path), value) => {
                out.push('[');
                out.push_str(path);
                out.push_str("]: ");
                render_inline_value(out, value)?;
            }
            (ObjectKey::Ident(name), value) => {
                push_key(out, name);
                out.push_str(": ");
                render_inline_value(out, value)?;
            }
        }
    }
    out.push_str(" }");
    Ok(())
}

/// Emit a property name bare when it is a valid identifier, single-quoted
/// otherwise.
fn push_key(out: &mut String, name: &str) {
    if is_identifier(name) {
        out.push_str(name);
    } else {
        push_single_quoted(out, name);
    }
}

fn push_single_quoted(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn object(entries: Vec<(ObjectKey, Value)>) -> Value {
        Value::Object(entries.into_iter().collect())
    }

    fn ident(name: &str) -> ObjectKey {
        ObjectKey::Ident(name.to_string())
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(serialize(&object(vec![])).unwrap(), "{}");
    }

    #[test]
    fn test_single_string_entry() {
        let tree = object(vec![(ident("someKey"), Value::String("someValue".into()))]);
        assert_eq!(serialize(&tree).unwrap(), "{\n  someKey: 'someValue',\n}");
    }

    #[test]
    fn test_shorthand_entry() {
        let tree = object(vec![(ident("someKey"), Value::Shorthand)]);
        assert_eq!(serialize(&tree).unwrap(), "{\n  someKey,\n}");
    }

    #[test]
    fn test_spread_entry_strips_ordinal() {
        let tree = object(vec![(
            ObjectKey::Spread {
                ordinal: 2,
                path: "someSpread.part".into(),
            },
            Value::Spread,
        )]);
        assert_eq!(serialize(&tree).unwrap(), "{\n  ...someSpread.part,\n}");
    }

    #[test]
    fn test_comment_lines_have_no_comma() {
        let tree = object(vec![
            (
                ObjectKey::Comment {
                    anchor: "g".into(),
                },
                Value::Comment("// one\n// two".into()),
            ),
            (ident("g"), Value::I64(1)),
        ]);
        assert_eq!(
            serialize(&tree).unwrap(),
            "{\n  // one\n  // two\n  g: 1,\n}"
        );
    }

    #[test]
    fn test_computed_key() {
        let tree = object(vec![(
            ObjectKey::Computed("someVariableKey".into()),
            Value::String("someValue".into()),
        )]);
        assert_eq!(
            serialize(&tree).unwrap(),
            "{\n  [someVariableKey]: 'someValue',\n}"
        );
    }

    #[test]
    fn test_expression_value_is_unquoted() {
        let tree = object(vec![(ident("someKey"), Value::Expr("new SomeClass()".into()))]);
        assert_eq!(
            serialize(&tree).unwrap(),
            "{\n  someKey: new SomeClass(),\n}"
        );
    }

    #[test]
    fn test_scalars_render_verbatim() {
        let tree = object(vec![
            (ident("a"), Value::I64(-2)),
            (ident("b"), Value::F64(2.5)),
            (ident("c"), Value::Bool(false)),
            (ident("d"), Value::Null),
        ]);
        assert_eq!(
            serialize(&tree).unwrap(),
            "{\n  a: -2,\n  b: 2.5,\n  c: false,\n  d: null,\n}"
        );
    }

    #[test]
    fn test_array_renders_inline_with_inline_objects() {
        let inner = object(vec![
            (ident("q"), Value::I64(3)),
            (ident("h"), Value::I64(2)),
        ]);
        let tree = object(vec![(
            ident("g"),
            Value::Array(
                vec![
                    Value::String("m".into()),
                    Value::I64(2),
                    Value::String("j".into()),
                    inner,
                ]
                .into(),
            ),
        )]);
        assert_eq!(
            serialize(&tree).unwrap(),
            "{\n  g: ['m', 2, 'j', { q: 3, h: 2 }],\n}"
        );
    }

    #[test]
    fn test_nested_object_renders_as_block() {
        let nested = object(vec![(ident("inner"), Value::String("x".into()))]);
        let tree = object(vec![
            (ident("outer"), nested),
            (ident("after"), Value::I64(1)),
        ]);
        assert_eq!(
            serialize(&tree).unwrap(),
            "{\n  outer: {\n    inner: 'x',\n  },\n  after: 1,\n}"
        );
    }

    #[test]
    fn test_empty_nested_object() {
        let tree = object(vec![(ident("empty"), object(vec![]))]);
        assert_eq!(serialize(&tree).unwrap(), "{\n  empty: {},\n}");
    }

    #[test]
    fn test_non_identifier_key_is_quoted() {
        let tree = object(vec![(ident("some key"), Value::I64(1))]);
        assert_eq!(serialize(&tree).unwrap(), "{\n  'some key': 1,\n}");
    }

    #[test]
    fn test_string_escaping() {
        let tree = object(vec![(ident("s"), Value::String("it's a \\ test".into()))]);
        assert_eq!(
            serialize(&tree).unwrap(),
            "{\n  s: 'it\\'s a \\\\ test',\n}"
        );
    }

    #[test]
    fn test_indent_width_override() {
        let tree = object(vec![(ident("k"), Value::I64(1))]);
        let config = FormatConfig::new().with_indent_width(4);
        assert_eq!(
            serialize_with_config(&tree, &config).unwrap(),
            "{\n    k: 1,\n}"
        );
    }

    #[test]
    fn test_root_must_be_object() {
        assert_eq!(
            serialize(&Value::I64(1)),
            Err(SerializeError::RootNotObject)
        );
    }

    #[test]
    fn test_mismatched_spread_pair() {
        let tree = object(vec![(
            ObjectKey::Spread {
                ordinal: 1,
                path: "rest".into(),
            },
            Value::I64(5),
        )]);
        assert!(matches!(
            serialize(&tree),
            Err(SerializeError::MismatchedEntry { .. })
        ));
    }

    #[test]
    fn test_comment_key_needs_comment_value() {
        let tree = object(vec![(
            ObjectKey::Comment {
                anchor: "g".into(),
            },
            Value::String("plain".into()),
        )]);
        assert!(matches!(
            serialize(&tree),
            Err(SerializeError::MismatchedEntry { .. })
        ));
    }

    #[test]
    fn test_comment_inside_inline_object_is_rejected() {
        let inner = object(vec![
            (
                ObjectKey::Comment {
                    anchor: "q".into(),
                },
                Value::Comment("// c".into()),
            ),
            (ident("q"), Value::I64(1)),
        ]);
        let tree = object(vec![(ident("a"), Value::Array(vec![inner].into()))]);
        assert_eq!(
            serialize(&tree),
            Err(SerializeError::CommentInInlineObject)
        );
    }

    #[test]
    fn test_marker_as_array_element_is_rejected() {
        let tree = object(vec![(
            ident("a"),
            Value::Array(vec![Value::Shorthand].into()),
        )]);
        assert_eq!(serialize(&tree), Err(SerializeError::MarkerValue));
    }
}
