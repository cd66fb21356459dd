//! Record identity.
//!
//! Every rendered item is associated with a [`Key`] derived from its record.
//! The derivation is controlled by [`RowKey`]: a field name, a closure, or
//! nothing at all, in which case the record's own `key` field is used and the
//! record's position in the data source is the last resort.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Name of the field consulted when no row key is configured.
pub const DEFAULT_KEY_FIELD: &str = "key";

/// Identity of a rendered item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Textual key.
    Text(String),
    /// Integer key.
    Int(i64),
    /// Positional fallback (index in the data source).
    Index(usize),
}

impl Key {
    /// Returns `true` if this key came from the positional fallback.
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Text(text) => write!(f, "{}", text),
            Key::Int(value) => write!(f, "{}", value),
            Key::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::Text(text.to_string())
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Key::Text(text)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value.into())
    }
}

impl Key {
    /// Convert a JSON value into a key.
    ///
    /// Null, empty strings, arrays and objects carry no identity and yield
    /// `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) if !text.is_empty() => Some(Key::Text(text.clone())),
            Value::Number(number) => Some(
                number
                    .as_i64()
                    .map(Key::Int)
                    .unwrap_or_else(|| Key::Text(number.to_string())),
            ),
            Value::Bool(flag) => Some(Key::Text(flag.to_string())),
            _ => None,
        }
    }
}

/// Data that a [`RowKey`] can derive a key from.
///
/// Implement this for application record types so that field-name row keys
/// (and the default `key` field) work with them. Closure row keys do not
/// need it, but the bound keeps one record type per list.
///
/// # Example
///
/// ```ignore
/// use lattice_list::key::{Key, Record};
///
/// struct Person {
///     id: i64,
///     name: String,
/// }
///
/// impl Record for Person {
///     fn field(&self, name: &str) -> Option<Key> {
///         match name {
///             "id" => Some(Key::Int(self.id)),
///             "name" => Some(Key::Text(self.name.clone())),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Look up a field by name and convert it into a key.
    fn field(&self, name: &str) -> Option<Key>;
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<Key> {
        self.get(name).and_then(Key::from_json)
    }
}

impl Record for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<Key> {
        self.get(name).and_then(Key::from_json)
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, name: &str) -> Option<Key> {
        (**self).field(name)
    }
}

/// Type alias for a key extractor function.
pub type KeyExtractor<R> = Arc<dyn Fn(&R) -> Option<Key> + Send + Sync>;

/// How a record's key is derived.
pub enum RowKey<R> {
    /// Use the record's `key` field.
    Default,
    /// Use the named field.
    Field(String),
    /// Call a function with the record.
    Func(KeyExtractor<R>),
}

impl<R> RowKey<R> {
    /// Row key reading the named field.
    pub fn field(name: impl Into<String>) -> Self {
        RowKey::Field(name.into())
    }

    /// Row key computed by a function.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&R) -> Option<Key> + Send + Sync + 'static,
    {
        RowKey::Func(Arc::new(f))
    }
}

impl<R> Default for RowKey<R> {
    fn default() -> Self {
        RowKey::Default
    }
}

impl<R> Clone for RowKey<R> {
    fn clone(&self) -> Self {
        match self {
            RowKey::Default => RowKey::Default,
            RowKey::Field(name) => RowKey::Field(name.clone()),
            RowKey::Func(f) => RowKey::Func(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for RowKey<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Default => write!(f, "RowKey::Default"),
            RowKey::Field(name) => write!(f, "RowKey::Field({:?})", name),
            RowKey::Func(_) => write!(f, "RowKey::Func(..)"),
        }
    }
}

/// Derive the key of `record`.
///
/// Falls back to `Key::Index(fallback_index)` whenever the row key yields
/// nothing. Uniqueness is not checked here.
pub fn resolve_key<R: Record>(record: &R, row_key: &RowKey<R>, fallback_index: usize) -> Key {
    let resolved = match row_key {
        RowKey::Default => record.field(DEFAULT_KEY_FIELD),
        RowKey::Field(name) => record.field(name),
        RowKey::Func(f) => f(record),
    };
    resolved.unwrap_or(Key::Index(fallback_index))
}
