//! Query parameters
//!
//! Optional filters such as `limit` or `from_epoch` are common on the
//! Resonance API. [`QueryParams::opt_param`] drops `None` values so they are
//! never serialized.

use std::fmt;

/// A scalar query parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// String value
    Str(String),
    /// Signed integer value
    Int(i64),
    /// Unsigned integer value
    UInt(u64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(value) => f.write_str(value),
            QueryValue::Int(value) => write!(f, "{value}"),
            QueryValue::UInt(value) => write!(f, "{value}"),
            QueryValue::Float(value) => write!(f, "{value}"),
            QueryValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty => $($source:ty),+) => {
        $(
            impl From<$source> for QueryValue {
                fn from(value: $source) -> Self {
                    QueryValue::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_int!(Int, i64 => i8, i16, i32, i64);
impl_from_int!(UInt, u64 => u8, u16, u32, u64);

impl From<usize> for QueryValue {
    fn from(value: usize) -> Self {
        QueryValue::UInt(value as u64)
    }
}

/// Ordered set of query parameters
///
/// # Examples
/// ```
/// use resonance_client::QueryParams;
///
/// let params = QueryParams::new()
///     .param("limit", 5u32)
///     .opt_param("offset", None::<u32>);
/// assert_eq!(params.len(), 1);
/// assert_eq!(params.get("limit").map(|v| v.to_string()), Some("5".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any earlier value for the same key
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter only when a value is present
    pub fn opt_param<V: Into<QueryValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Insert a parameter in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
    }

    /// Number of present parameters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no parameter is present
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(key, value)| (key.as_str(), value))
    }
}
