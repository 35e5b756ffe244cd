use dotted::{except, fetch, forget, get, has, only, pull, set, Value};
use serde_json::json;

fn movie_catalog() -> Value {
    Value::from(json!({
        "movie": {
            "title": "A Simple Desultory Philippic",
            "year": 1965
        }
    }))
}

#[test]
fn get_reads_nested_values() {
    let root = movie_catalog();

    assert_eq!(
        get(&root, Some("movie.title"), None),
        Value::from("A Simple Desultory Philippic")
    );
    assert_eq!(get(&root, Some("movie.year"), None), Value::Int(1965));
}

#[test]
fn get_without_path_returns_root() {
    let root = movie_catalog();
    assert_eq!(get(&root, None, Some(Value::from("fallback"))), root);
}

#[test]
fn get_missing_path_returns_default() {
    let root = movie_catalog();

    assert_eq!(get(&root, Some("movie.rating"), None), Value::Null);
    assert_eq!(
        get(&root, Some("movie.rating"), Some(Value::from("not found"))),
        Value::from("not found")
    );
    assert_eq!(
        get(&Value::Map(Default::default()), Some("missing.path"), Some(Value::from("D"))),
        Value::from("D")
    );
}

#[test]
fn get_literal_key_wins_over_decomposition() {
    let root = Value::from(json!({
        "a.b": 7,
        "a": {"b": 1}
    }));

    assert_eq!(get(&root, Some("a.b"), None), Value::Int(7));
}

#[test]
fn get_null_literal_falls_through_to_segments() {
    let root = Value::from(json!({
        "a.b": null,
        "a": {"b": 1}
    }));

    assert_eq!(get(&root, Some("a.b"), None), Value::Int(1));
}

#[test]
fn get_walks_index_keys() {
    let root = Value::from(json!({"items": [{"name": "widget"}]}));
    assert_eq!(
        get(&root, Some("items.0.name"), None),
        Value::from("widget")
    );
}

#[test]
fn get_on_scalar_root_returns_default() {
    let root = Value::Int(3);
    assert_eq!(
        get(&root, Some("a.b"), Some(Value::from("D"))),
        Value::from("D")
    );
}

#[test]
fn has_requires_a_path_and_a_non_empty_map() {
    let root = movie_catalog();

    assert!(!has(&root, None));
    assert!(!has(&Value::Map(Default::default()), Some("movie")));
    assert!(!has(&Value::Int(1), Some("movie")));
}

#[test]
fn has_walks_segments() {
    let root = Value::from(json!({
        "three": {"six": {"eight": 8}}
    }));

    assert!(has(&root, Some("three")));
    assert!(has(&root, Some("three.six.eight")));
    assert!(!has(&root, Some("two.six.eight")));
    assert!(!has(&root, Some("three.six.nine")));
}

#[test]
fn has_counts_null_entries() {
    // key existence, not value truthiness
    let root = Value::from(json!({"a.b": null, "x": {"y": null}}));

    assert!(has(&root, Some("a.b")));
    assert!(has(&root, Some("x.y")));
}

#[test]
fn has_is_stable_without_mutation() {
    let root = movie_catalog();
    assert_eq!(has(&root, Some("movie.title")), has(&root, Some("movie.title")));
}

#[test]
fn set_then_get_round_trips() {
    let mut root = Value::from(json!({}));
    set(&mut root, Some("three.six.nine"), Value::Int(9));

    assert_eq!(get(&root, Some("three.six.nine"), None), Value::Int(9));
    assert!(has(&root, Some("three.six")));
}

#[test]
fn set_overwrites_scalar_intermediates() {
    let mut root = Value::from(json!({"x": 5}));
    set(&mut root, Some("x.y"), Value::Int(1));

    assert_eq!(get(&root, Some("x.y"), None), Value::Int(1));
    assert_eq!(root, Value::from(json!({"x": {"y": 1}})));
}

#[test]
fn set_wildcard_replaces_root() {
    let mut root = movie_catalog();
    set(&mut root, Some("*"), Value::Int(9));
    assert_eq!(root, Value::list([Value::Int(9)]));

    let mut root = movie_catalog();
    let replacement = Value::from(json!({"fresh": true}));
    set(&mut root, None, replacement.clone());
    assert_eq!(root, replacement);
}

#[test]
fn set_coerces_non_map_roots() {
    let mut root = Value::from("scalar");
    set(&mut root, Some("a.b"), Value::Int(2));
    assert_eq!(root, Value::from(json!({"a": {"b": 2}})));
}

#[test]
fn forget_removes_leaf_and_keeps_parent() {
    let mut root = Value::from(json!({}));
    set(&mut root, Some("x.y"), Value::Int(1));

    forget(&mut root, &["x.y"]);

    assert!(!has(&root, Some("x.y")));
    assert!(has(&root, Some("x")));
}

#[test]
fn forget_takes_multiple_paths_against_the_same_root() {
    let mut root = Value::from(json!({
        "Candy": {"start": "now", "end": "then"},
        "Beets": 2
    }));

    forget(&mut root, &["Candy.start", "Beets"]);

    assert_eq!(
        root,
        Value::from(json!({"Candy": {"end": "then"}}))
    );
}

#[test]
fn forget_unsets_at_the_last_reached_scope() {
    // "b" does not exist, so the cursor never leaves the root and the
    // final segment is removed there
    let mut root = Value::from(json!({"a": {"x": 1}, "c": 2}));

    forget(&mut root, &["b.c"]);

    assert_eq!(root, Value::from(json!({"a": {"x": 1}})));
}

#[test]
fn forget_ignores_non_map_roots() {
    let mut root = Value::Int(1);
    forget(&mut root, &["a.b"]);
    assert_eq!(root, Value::Int(1));
}

#[test]
fn pull_returns_and_removes() {
    let mut root = Value::from(json!({"a": 1, "b": 2}));

    assert_eq!(pull(&mut root, "a", None), Value::Int(1));
    assert!(!has(&root, Some("a")));
    assert!(has(&root, Some("b")));
}

#[test]
fn pull_missing_path_returns_default() {
    let mut root = Value::from(json!({"a": 1}));

    assert_eq!(
        pull(&mut root, "z.q", Some(Value::Bool(false))),
        Value::Bool(false)
    );
    assert_eq!(root, Value::from(json!({"a": 1})));
}

fn fetch_fixture() -> Value {
    Value::from(json!([
        {
            "one": ["Sam", "Carrie", "Buford"],
            "two": "All alone."
        },
        {
            "three": "1 + 2",
            "four": "2 + 2"
        },
        {
            "five": {
                "First": {"Bennie": 100, "Crawford": 200, "Lightfoot": 300},
                "0": "Second",
                "1": "Third"
            },
            "six": 6
        }
    ]))
}

#[test]
fn fetch_collects_first_order_matches() {
    let root = fetch_fixture();

    assert_eq!(fetch(&root, "three"), Value::list([Value::from("1 + 2")]));
    // "First" is not a first-order index
    assert_eq!(fetch(&root, "First"), Value::list(Vec::new()));
    assert_eq!(fetch(&root, "totally-not-an-index"), Value::list(Vec::new()));
}

#[test]
fn fetch_siblings_are_not_children() {
    let root = fetch_fixture();
    let five = Value::from(json!({
        "First": {"Bennie": 100, "Crawford": 200, "Lightfoot": 300},
        "0": "Second",
        "1": "Third"
    }));

    // "six" is a sibling of "five", so only the "five" structure remains
    assert_eq!(fetch(&root, "five.six"), Value::list([five]));
}

#[test]
fn fetch_cascade_keeps_every_node_along_the_path() {
    let root = fetch_fixture();
    let five = Value::from(json!({
        "First": {"Bennie": 100, "Crawford": 200, "Lightfoot": 300},
        "0": "Second",
        "1": "Third"
    }));
    let first = Value::from(json!({"Bennie": 100, "Crawford": 200, "Lightfoot": 300}));

    assert_eq!(
        fetch(&root, "five.First.Crawford"),
        Value::list([five, first, Value::Int(200)])
    );
}

#[test]
fn fetch_cascade_stops_at_first_non_retrievable_node() {
    let root = fetch_fixture();

    assert_eq!(
        fetch(&root, "six.totally-not-an-index"),
        Value::list([Value::Int(6)])
    );
}

#[test]
fn except_and_only_filter_literal_keys() {
    let root = Value::from(json!({"a": 1, "b": 2, "c": 3}));

    assert_eq!(except(&root, &["b"]), Value::from(json!({"a": 1, "c": 3})));
    assert_eq!(only(&root, &["c", "a"]), Value::from(json!({"a": 1, "c": 3})));
    assert_eq!(only(&Value::Int(1), &["a"]), Value::Map(Default::default()));
}
