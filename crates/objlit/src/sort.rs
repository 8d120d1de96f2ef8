use objlit_value::Value;

/// Default key-sort policy.
///
/// Recursively reorders every object's entries with a stable alphabetical
/// sort on [`ObjectKey::sort_key`]: spread entries sort first (their encoded
/// `!!!` prefix precedes alphabetic keys) and keep their original relative
/// order through the ordinal; comment entries share their anchor's key, so
/// stability keeps each comment immediately before the entry it precedes.
///
/// [`ObjectKey::sort_key`]: objlit_value::ObjectKey::sort_key
pub fn sort_keys(value: &mut Value) {
    match value {
        Value::Object(object) => {
            object
                .0
                .sort_by(|k1, _, k2, _| k1.sort_key().cmp(&k2.sort_key()));
            for (_, child) in object.0.iter_mut() {
                sort_keys(child);
            }
        }
        Value::Array(items) => {
            for item in items.0.iter_mut() {
                sort_keys(item);
            }
        }
        _ => {}
    }
}
