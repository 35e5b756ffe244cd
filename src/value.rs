use crate::{Error, Result};
use indexmap::IndexMap;
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use std::fmt;
use std::rc::Rc;

/// Keyed mapping with insertion order preserved. Integer keys are
/// stringified, matching the source data model where lists are maps
/// keyed "0", "1", ...
pub type Map = IndexMap<String, Value>;

/// Recursive value the accessors operate on.
///
/// `Map` is the only variant the writer and deleter mutate. `Object` is
/// an object-like value: its named fields are readable through `query`
/// and `value` but it is opaque to `set`/`forget`. `Thunk` is a deferred
/// computation resolved at lookup time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Map(Map),
    Object(Map),
    Thunk(Thunk),
}

/// Deferred computation stored inside a tree.
///
/// A nullary thunk is invoked with no input (map entries); a unary thunk
/// receives the scope it was found in (object fields).
#[derive(Clone)]
pub struct Thunk(Rc<ThunkFn>);

enum ThunkFn {
    Nullary(Box<dyn Fn() -> Value>),
    Unary(Box<dyn Fn(&Value) -> Value>),
}

impl Thunk {
    pub fn new(f: impl Fn() -> Value + 'static) -> Self {
        Thunk(Rc::new(ThunkFn::Nullary(Box::new(f))))
    }

    pub fn with_arg(f: impl Fn(&Value) -> Value + 'static) -> Self {
        Thunk(Rc::new(ThunkFn::Unary(Box::new(f))))
    }

    /// Invokes the thunk. Nullary thunks ignore `arg`.
    pub fn call(&self, arg: &Value) -> Value {
        match &*self.0 {
            ThunkFn::Nullary(f) => f(),
            ThunkFn::Unary(f) => f(arg),
        }
    }
}

// Thunks compare by identity: two thunks are equal only when they share
// the same underlying closure.
impl PartialEq for Thunk {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
            Value::Thunk(_) => "thunk",
        }
    }

    /// Builds a `Value::Map` from key/value pairs.
    pub fn map<K, I>(entries: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds a `Value::Object` from named fields.
    pub fn object<K, I>(fields: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds an index-keyed map ("0", "1", ...) from a sequence.
    pub fn list<I: IntoIterator<Item = Value>>(items: I) -> Value {
        Value::Map(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        )
    }

    /// Returns the value itself, invoking it first when it is a thunk.
    pub fn resolve(&self) -> Value {
        match self {
            Value::Thunk(thunk) => thunk.call(&Value::Null),
            other => other.clone(),
        }
    }

    /// Coerces the value into a mapping: maps stay, object fields become
    /// entries, null becomes an empty map, any scalar becomes `{"0": v}`.
    pub fn into_map(self) -> Map {
        match self {
            Value::Map(map) | Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("0".to_string(), other);
                map
            }
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Value> {
        let json: serde_json::Value = serde_json::from_str(raw)?;
        Ok(json.into())
    }

    /// Converts to a `serde_json::Value`. Thunks (and non-finite floats)
    /// have no JSON form and fail with [`Error::Unrepresentable`].
    pub fn to_json(&self) -> Result<serde_json::Value> {
        match self {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Int(i) => Ok(serde_json::Value::from(*i)),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or(Error::Unrepresentable("non-finite float")),
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Map(map) | Value::Object(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (key, value) in map {
                    out.insert(key.clone(), value.to_json()?);
                }
                Ok(serde_json::Value::Object(out))
            }
            Value::Thunk(_) => Err(Error::Unrepresentable("thunk")),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::list(items.into_iter().map(Value::from)),
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
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

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<Thunk> for Value {
    fn from(thunk: Thunk) -> Self {
        Value::Thunk(thunk)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Map(map) | Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Value::Thunk(_) => Err(S::Error::custom("thunk values cannot be serialized")),
        }
    }
}
