use indexmap::IndexMap;

use crate::key::ObjectKey;

/// One node of the value tree.
///
/// The scalar variants mirror JSON; the marker variants carry the constructs
/// JSON cannot express. `Shorthand` and `Spread` are value-side markers whose
/// meaning is completed by the key they are paired with.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(String),
    /// Verbatim non-literal expression text, e.g. `SomeEnum.SomeValue` or
    /// `new SomeClass()`.
    Expr(String),
    /// Marker for a property written without `: value`.
    Shorthand,
    /// Marker paired with an [`ObjectKey::Spread`] key.
    Spread,
    /// Comment text including the leading `//`; one source line per
    /// `\n`-separated segment. Paired with an [`ObjectKey::Comment`] key.
    Comment(String),
    Array(Array),
    Object(Object),
}

/// Ordered array of values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array(pub Vec<Value>);

/// Ordered object entries.
///
/// Insertion order is significant and survives until the sort stage
/// explicitly reorders it; keys are unique within one object scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object(pub IndexMap<ObjectKey, Value>);

impl Array {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Object {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, ObjectKey, Value> {
        self.0.iter()
    }

    pub fn get(&self, key: &ObjectKey) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert an entry at the end, returning the previous value if the key
    /// was already present (the original keeps its position).
    pub fn insert(&mut self, key: ObjectKey, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }
}

impl FromIterator<(ObjectKey, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (ObjectKey, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Object {
    type Item = (ObjectKey, Value);
    type IntoIter = indexmap::map::IntoIter<ObjectKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a ObjectKey, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, ObjectKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::I64(i)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::U64(u)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::F64(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}
