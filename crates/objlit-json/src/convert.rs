use objlit_value::sentinel::{
    COMMENT_VALUE_PREFIX, SHORTHAND_VALUE, SPREAD_VALUE, VARIABLE_VALUE_PREFIX,
};
use objlit_value::{Array, Object, ObjectKey, Value};

use crate::error::{ParseError, ToJsonError};

/// Convert a JSON value into the tagged tree, decoding sentinel markers.
///
/// Unrecognized key/value combinations still decode structurally (a spread
/// key with a plain value stays a spread key); the serializer is the stage
/// that rejects pairs it cannot render.
pub fn json_to_value(json: &serde_json::Value) -> Result<Value, ParseError> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::I64(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::U64(u))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::F64(f))
            } else {
                Err(ParseError::InvalidNumber(n.to_string()))
            }
        }
        serde_json::Value::String(s) => Ok(decode_string(s)),
        serde_json::Value::Array(items) => {
            let values: Result<Vec<_>, _> = items.iter().map(json_to_value).collect();
            Ok(Value::Array(Array(values?)))
        }
        serde_json::Value::Object(obj) => {
            let mut object = Object::new();
            for (raw_key, json_value) in obj {
                let key = ObjectKey::decode(raw_key);
                let value = json_to_value(json_value)?;
                object.insert(key, value);
            }
            Ok(Value::Object(object))
        }
    }
}

fn decode_string(s: &str) -> Value {
    if s == SHORTHAND_VALUE {
        Value::Shorthand
    } else if s == SPREAD_VALUE {
        Value::Spread
    } else if let Some(text) = s.strip_prefix(VARIABLE_VALUE_PREFIX) {
        Value::Expr(text.to_string())
    } else if let Some(text) = s.strip_prefix(COMMENT_VALUE_PREFIX) {
        Value::Comment(text.to_string())
    } else {
        Value::String(s.to_string())
    }
}

/// Re-encode a tree as sentinel-bearing JSON data.
pub fn value_to_json(value: &Value) -> Result<serde_json::Value, ToJsonError> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::I64(i) => Ok(serde_json::Value::Number((*i).into())),
        Value::U64(u) => Ok(serde_json::Value::Number((*u).into())),
        Value::F64(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or(ToJsonError::NonFiniteNumber(*f)),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Expr(text) => Ok(encode_string(VARIABLE_VALUE_PREFIX, text)),
        Value::Shorthand => Ok(serde_json::Value::String(SHORTHAND_VALUE.to_string())),
        Value::Spread => Ok(serde_json::Value::String(SPREAD_VALUE.to_string())),
        Value::Comment(text) => Ok(encode_string(COMMENT_VALUE_PREFIX, text)),
        Value::Array(items) => {
            let values: Result<Vec<_>, _> = items.iter().map(value_to_json).collect();
            Ok(serde_json::Value::Array(values?))
        }
        Value::Object(object) => {
            let mut map = serde_json::Map::new();
            for (key, value) in object.iter() {
                let raw_key = key.encoded();
                let json_value = value_to_json(value)?;
                if map.insert(raw_key.clone(), json_value).is_some() {
                    return Err(ToJsonError::DuplicateKey { key: raw_key });
                }
            }
            Ok(serde_json::Value::Object(map))
        }
    }
}

fn encode_string(prefix: &str, text: &str) -> serde_json::Value {
    serde_json::Value::String(format!("{prefix}{text}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_scalars_decode() {
        assert_eq!(json_to_value(&json!(null)).unwrap(), Value::Null);
        assert_eq!(json_to_value(&json!(true)).unwrap(), Value::Bool(true));
        assert_eq!(json_to_value(&json!(42)).unwrap(), Value::I64(42));
        assert_eq!(
            json_to_value(&json!(u64::MAX)).unwrap(),
            Value::U64(u64::MAX)
        );
        assert_eq!(json_to_value(&json!(2.5)).unwrap(), Value::F64(2.5));
        assert_eq!(
            json_to_value(&json!("plain")).unwrap(),
            Value::String("plain".into())
        );
    }

    #[test]
    fn test_sentinel_values_decode() {
        assert_eq!(
            json_to_value(&json!("__DUMMY_VALUE__")).unwrap(),
            Value::Shorthand
        );
        assert_eq!(
            json_to_value(&json!("__DUMMY_SPREAD_VALUE__")).unwrap(),
            Value::Spread
        );
        assert_eq!(
            json_to_value(&json!("__VARIABLE_VALUE__SomeEnum.SomeValue")).unwrap(),
            Value::Expr("SomeEnum.SomeValue".into())
        );
        assert_eq!(
            json_to_value(&json!("__DUMMY_COMMENT_VALUE__// hi")).unwrap(),
            Value::Comment("// hi".into())
        );
    }

    #[test]
    fn test_object_keys_decode_in_order() {
        let json = json!({
            "!!!___1someSpread": "__DUMMY_SPREAD_VALUE__",
            "someKey": "__DUMMY_VALUE__",
            "g__DUMMY_COMMENT_KEY__": "__DUMMY_COMMENT_VALUE__// comment",
            "g": 1,
            "v__DUMMY_VARIABLE_KEY__": "x",
        });
        let Value::Object(object) = json_to_value(&json).unwrap() else {
            panic!("expected an object");
        };
        let keys: Vec<_> = object.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(
            keys,
            vec![
                ObjectKey::Spread {
                    ordinal: 1,
                    path: "someSpread".into()
                },
                ObjectKey::Ident("someKey".into()),
                ObjectKey::Comment {
                    anchor: "g".into()
                },
                ObjectKey::Ident("g".into()),
                ObjectKey::Computed("v".into()),
            ]
        );
    }

    #[test]
    fn test_round_trip_through_json() {
        let json = json!({
            "!!!___1rest": "__DUMMY_SPREAD_VALUE__",
            "flag": "__DUMMY_VALUE__",
            "kind": "__VARIABLE_VALUE__Kind.Default",
            "name": "mary",
            "sizes": [1, 2.5, "x"],
            "nested": { "deep": null },
        });
        let tree = json_to_value(&json).unwrap();
        assert_eq!(value_to_json(&tree).unwrap(), json);
    }

    #[test]
    fn test_non_finite_number_rejected() {
        let tree = Value::F64(f64::NAN);
        assert!(matches!(
            value_to_json(&tree),
            Err(ToJsonError::NonFiniteNumber(_))
        ));
    }

    #[test]
    fn test_colliding_encoded_keys_rejected() {
        let mut object = Object::new();
        object.insert(ObjectKey::Ident("g__DUMMY_COMMENT_KEY__".into()), Value::Null);
        object.insert(
            ObjectKey::Comment {
                anchor: "g".into(),
            },
            Value::Comment("// c".into()),
        );
        assert!(matches!(
            value_to_json(&Value::Object(object)),
            Err(ToJsonError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn test_parse_requires_valid_json() {
        assert!(matches!(
            crate::parse("{ not json }"),
            Err(ParseError::Json(_))
        ));
    }
}
