use crate::path;
use crate::value::{Map, Value};

/// Get an item from a nested value using dot notation.
///
/// A `None` path returns the whole root. A literal map key equal to the
/// full dotted path wins over decomposition, unless its value is null
/// (null literal entries fall through to the segment walk). A failed
/// walk returns `default`.
pub fn get(root: &Value, path: Option<&str>, default: Option<Value>) -> Value {
    let Some(path) = path else {
        return root.clone();
    };

    if let Value::Map(map) = root {
        if let Some(entry) = map.get(path) {
            if !entry.is_null() {
                return entry.clone();
            }
        }
    }

    let mut cursor = root;
    for segment in path::segments(path) {
        let next = match cursor {
            Value::Map(map) => map.get(segment),
            _ => None,
        };
        match next {
            Some(value) => cursor = value,
            None => return default.unwrap_or(Value::Null),
        }
    }

    cursor.clone()
}

/// Check whether a dot-notation path exists.
///
/// Unlike [`get`], the literal-key probe here is plain key existence, so
/// a literal entry holding null still counts.
pub fn has(root: &Value, path: Option<&str>) -> bool {
    let Some(path) = path else {
        return false;
    };
    let Value::Map(map) = root else {
        return false;
    };
    if map.is_empty() {
        return false;
    }
    if map.contains_key(path) {
        return true;
    }

    let mut cursor = root;
    for segment in path::segments(path) {
        let next = match cursor {
            Value::Map(map) => map.get(segment),
            _ => None,
        };
        match next {
            Some(value) => cursor = value,
            None => return false,
        }
    }

    true
}

/// Set a value at a dot-notation path, creating intermediate maps as
/// needed.
///
/// A `None` or `"*"` path replaces the root wholesale with `value`
/// coerced to a map. Intermediate segments that hold anything other
/// than a map are overwritten with a fresh map, discarding the old
/// value; the writer never fails.
pub fn set(root: &mut Value, path: Option<&str>, value: Value) {
    let path = match path {
        Some(p) if p != path::WILDCARD => p,
        _ => {
            *root = Value::Map(value.into_map());
            return;
        }
    };

    if !root.is_map() {
        *root = Value::Map(Map::new());
    }
    let Value::Map(root_map) = root else {
        unreachable!()
    };

    let segs = path::segments(path);
    let Some((last, parents)) = segs.split_last() else {
        return;
    };

    let mut cursor = root_map;
    for part in parents {
        let entry = cursor
            .entry((*part).to_string())
            .or_insert_with(|| Value::Map(Map::new()));
        if !entry.is_map() {
            *entry = Value::Map(Map::new());
        }
        let Value::Map(next) = entry else {
            unreachable!()
        };
        cursor = next;
    }

    cursor.insert((*last).to_string(), value);
}

/// Remove one or more dot-notation paths from a nested value.
///
/// Each path restarts from the true root, so one removal cannot leak
/// into the next. Paths always decompose (no literal-key probe). The
/// walk descends only through existing map values; a missing or non-map
/// step leaves the cursor where it is, and the final key is removed from
/// the last scope reached.
pub fn forget(root: &mut Value, paths: &[&str]) {
    for path in paths {
        let Value::Map(root_map) = &mut *root else {
            return;
        };

        let segs = path::segments(path);
        let Some((last, parents)) = segs.split_last() else {
            continue;
        };

        let mut cursor = root_map;
        for part in parents {
            if matches!(cursor.get(*part), Some(Value::Map(_))) {
                let Some(Value::Map(next)) = cursor.get_mut(*part) else {
                    unreachable!()
                };
                cursor = next;
            }
        }

        cursor.shift_remove(*last);
    }
}

/// Get a value at a dot-notation path and remove it.
pub fn pull(root: &mut Value, path: &str, default: Option<Value>) -> Value {
    let value = get(root, Some(path), default);
    forget(root, &[path]);
    value
}

/// Collect a flattened cascade of nested entries, one dot-segment at a
/// time. Each segment appends `child[segment]` from every value gathered
/// so far (starting from the root's own values) onto a running results
/// list, and that full list feeds the next segment. The accumulation is
/// returned whole, so the result keeps every node along the path, and a
/// segment that matches nothing stops the cascade while keeping the
/// earlier matches.
pub fn fetch(root: &Value, path: &str) -> Value {
    let mut scope: Vec<Value> = match root {
        Value::Map(map) | Value::Object(map) => map.values().cloned().collect(),
        _ => Vec::new(),
    };
    let mut results: Vec<Value> = Vec::new();

    for segment in path::segments(path) {
        for item in scope {
            let mut entries = item.into_map();
            if let Some(found) = entries.shift_remove(segment) {
                results.push(found);
            }
        }
        scope = results.clone();
    }

    Value::list(results)
}

/// Copy of the map without the given literal keys (dots are not paths
/// here). Non-map roots yield an empty map.
pub fn except(root: &Value, keys: &[&str]) -> Value {
    let Value::Map(map) = root else {
        return Value::Map(Map::new());
    };
    Value::Map(
        map.iter()
            .filter(|(key, _)| !keys.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    )
}

/// Subset of the map holding only the given literal keys, in the map's
/// own order.
pub fn only(root: &Value, keys: &[&str]) -> Value {
    let Value::Map(map) = root else {
        return Value::Map(Map::new());
    };
    Value::Map(
        map.iter()
            .filter(|(key, _)| keys.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    )
}
