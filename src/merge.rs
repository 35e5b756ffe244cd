use crate::path;
use crate::value::{Map, Value};

/// Recursive replace-merge: apply each patch onto `base`, left to right.
///
/// - If the base value and the patch value at a key are both maps,
///   recursively merge them
/// - Otherwise the patch value replaces the base value outright,
///   including a scalar replacing a map or vice versa
///
/// Non-map patches are skipped; a non-map base is replaced wholesale by
/// the first map patch.
pub fn merge_recursive_replace<I>(base: Value, patches: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    let mut merged = base;
    for patch in patches {
        if let Value::Map(patch_map) = patch {
            merge_map(&mut merged, patch_map);
        }
    }
    merged
}

fn merge_map(target: &mut Value, patch: Map) {
    let Value::Map(target_map) = target else {
        *target = Value::Map(patch);
        return;
    };

    for (key, patch_value) in patch {
        let both_maps = patch_value.is_map() && target_map.get(&key).is_some_and(Value::is_map);
        if both_maps {
            let Value::Map(patch_inner) = patch_value else {
                unreachable!()
            };
            let Some(existing) = target_map.get_mut(&key) else {
                unreachable!()
            };
            merge_map(existing, patch_inner);
        } else {
            target_map.insert(key, patch_value);
        }
    }
}

/// Search for a key's value, or replace a subtree in place.
///
/// A non-empty associative map key is a merge patch: it is merged over
/// `root` via [`merge_recursive_replace`], the result assigned back into
/// `root` and returned. String, integer, and float keys are looked up
/// through their string form: dotted text (which includes any fractional
/// float) walks the tree leniently (always decomposing, no literal-key
/// probe), anything else is a literal lookup with `default` as fallback,
/// resolving a thunk result by invocation. Any other key yields the
/// resolved default.
pub fn search_and_replace(root: &mut Value, key: &Value, default: Option<Value>) -> Value {
    if let Value::Map(patch) = key {
        if !patch.is_empty() && is_assoc(patch) {
            let merged = merge_recursive_replace(std::mem::take(root), [key.clone()]);
            *root = merged.clone();
            return merged;
        }
    }

    let default = default.unwrap_or(Value::Null);
    let text = match key {
        Value::String(s) => Some(s.clone()),
        Value::Int(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        _ => None,
    };
    match text {
        Some(key) if key.contains('.') => value_from_notation(root, &key),
        Some(key) => literal_value(root, &key, &default),
        None => default.resolve(),
    }
}

// Lenient walk: a missing, null, or non-map step leaves the cursor in
// place instead of failing, and the value finally reached is returned.
fn value_from_notation(root: &Value, key: &str) -> Value {
    let mut cursor = root;
    for segment in path::segments(key) {
        if let Value::Map(map) = cursor {
            if let Some(next) = map.get(segment) {
                if !next.is_null() {
                    cursor = next;
                }
            }
        }
    }
    cursor.clone()
}

fn literal_value(root: &Value, key: &str, default: &Value) -> Value {
    match root {
        Value::Map(map) => match map.get(key) {
            Some(entry) => entry.resolve(),
            None => default.resolve(),
        },
        _ => default.resolve(),
    }
}

// A map keyed exactly "0".."n-1" in order is a plain list, not an
// associative patch.
fn is_assoc(map: &Map) -> bool {
    map.keys().enumerate().any(|(i, key)| key != &i.to_string())
}
