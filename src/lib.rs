//! Dot-notation accessors and recursive replace-merge for nested data.
//!
//! The crate operates on an owned [`Value`] tree: readers ([`get`],
//! [`has`], [`query`], [`value()`]) walk dot-delimited paths and return
//! clones, writers ([`set`], [`forget`], [`pull`]) mutate the root in
//! place, and [`merge_recursive_replace`] deep-merges trees with
//! patch-wins semantics.
//!
//! ```
//! use dotted::{get, has, set, Value};
//! use serde_json::json;
//!
//! let mut config = Value::from(json!({"server": {"host": "localhost"}}));
//! set(&mut config, Some("server.port"), Value::Int(8080));
//!
//! assert_eq!(get(&config, Some("server.port"), None), Value::Int(8080));
//! assert!(!has(&config, Some("server.tls")));
//! ```

pub mod access;
pub mod error;
pub mod merge;
pub mod path;
pub mod resolve;
pub mod value;

// Re-export the whole operation surface for ergonomic library use
pub use access::{except, fetch, forget, get, has, only, pull, set};
pub use error::{Error, Result};
pub use merge::{merge_recursive_replace, search_and_replace};
pub use resolve::{query, value, Key};
pub use value::{Map, Thunk, Value};
