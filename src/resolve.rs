use crate::path;
use crate::value::Value;
use crate::{Error, Result};

/// Lookup key for [`query`] and [`value`]: either a dot-notation path or
/// a resolver closure. A resolver is invoked as `f(root, default)` and
/// overrides traversal entirely.
pub enum Key<'a> {
    Path(&'a str),
    Resolver(&'a dyn Fn(&Value, &Value) -> Value),
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(path: &'a str) -> Self {
        Key::Path(path)
    }
}

/// Retrieve the value of a map entry or object field by key.
///
/// Resolution order:
/// 1. a resolver key is invoked with `(root, default)`;
/// 2. a literal map entry is returned, invoked first when it is a thunk;
/// 3. a dotted key is split at its last dot and the prefix resolved
///    recursively into a scope for the final lookup;
/// 4. an object field is returned, invoked with its scope when it is a
///    thunk, null when absent;
/// 5. a map entry is returned raw, with `default` as fallback;
/// 6. anything else yields `default`.
pub fn value<'a>(root: &Value, key: impl Into<Key<'a>>, default: Option<Value>) -> Value {
    let default = default.unwrap_or(Value::Null);
    match key.into() {
        Key::Resolver(resolver) => resolver(root, &default),
        Key::Path(path) => value_path(root, path, &default),
    }
}

fn value_path(root: &Value, key: &str, default: &Value) -> Value {
    if let Value::Map(map) = root {
        if let Some(entry) = map.get(key) {
            return entry.resolve();
        }
    }

    if let Some((prefix, last)) = path::split_last(key) {
        let scope = value_path(root, prefix, default);
        return value_scope(&scope, last, default);
    }

    value_scope(root, key, default)
}

fn value_scope(scope: &Value, key: &str, default: &Value) -> Value {
    match scope {
        Value::Object(fields) => match fields.get(key) {
            Some(Value::Thunk(thunk)) => thunk.call(scope),
            Some(field) => field.clone(),
            None => Value::Null,
        },
        Value::Map(map) => match map.get(key) {
            Some(entry) => entry.clone(),
            None => default.clone(),
        },
        _ => default.clone(),
    }
}

/// Retrieve the value of a map entry or object field by key, requiring
/// a traversable root.
///
/// The only hard failure in the crate: a root that is neither a map nor
/// an object has no well-defined default-producing lookup, so this
/// returns [`Error::InvalidArgument`]. A literal map key wins over
/// decomposition; otherwise the key splits at its last dot and the
/// prefix resolves recursively against the same root. Object fields fall
/// back to null rather than `default`.
pub fn query<'a>(root: &Value, key: impl Into<Key<'a>>, default: Option<Value>) -> Result<Value> {
    if !matches!(root, Value::Map(_) | Value::Object(_)) {
        return Err(Error::InvalidArgument(
            "root",
            format!(
                "query requires a map or object root; {} given",
                root.type_name()
            ),
        ));
    }

    let default = default.unwrap_or(Value::Null);
    match key.into() {
        Key::Resolver(resolver) => Ok(resolver(root, &default)),
        Key::Path(path) => Ok(query_path(root, path, &default)),
    }
}

fn query_path(root: &Value, key: &str, default: &Value) -> Value {
    if let Value::Map(map) = root {
        if let Some(entry) = map.get(key) {
            return entry.clone();
        }
    }

    if let Some((prefix, last)) = path::split_last(key) {
        let scope = query_path(root, prefix, default);
        return query_scope(&scope, last, default);
    }

    query_scope(root, key, default)
}

fn query_scope(scope: &Value, key: &str, default: &Value) -> Value {
    match scope {
        // object fields fall back to null, never to the caller's default
        Value::Object(fields) => fields.get(key).cloned().unwrap_or(Value::Null),
        Value::Map(map) => map
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.clone()),
        _ => default.clone(),
    }
}
