//! Leaf value types for filter conditions

use serde::{Deserialize, Serialize};

/// A literal value on the right-hand side of a condition
///
/// The shape of a value is decided once, when it is constructed; the
/// operator transform then matches on the tag instead of re-probing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// String value, escaped and single-quoted when rendered
    Text(String),
    /// Raw SQL expression, embedded verbatim (e.g. `NOW()`)
    ///
    /// The caller is responsible for the safety of the embedded text.
    Expr(String),
    /// Sequence of values, for IN / NOT IN and BETWEEN / NOT BETWEEN
    Array(Vec<Value>),
}

impl Value {
    /// Create a raw expression value that is never escaped or quoted
    pub fn expr(text: impl Into<String>) -> Self {
        Value::Expr(text.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Extract array values if this is an Array variant
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

// Implement From for common types
impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Bool(val)
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Value::Int(i64::from(val))
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::Int(val)
    }
}

impl From<u32> for Value {
    fn from(val: u32) -> Self {
        Value::Int(i64::from(val))
    }
}

impl From<f32> for Value {
    fn from(val: f32) -> Self {
        Value::Float(f64::from(val))
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Float(val)
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::Text(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::Text(val.to_string())
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(vals: Vec<T>) -> Self {
        Value::Array(vals.into_iter().map(|v| v.into()).collect())
    }
}

impl<T> From<&[T]> for Value
where
    T: Clone + Into<Value>,
{
    fn from(vals: &[T]) -> Self {
        Value::Array(vals.iter().cloned().map(|v| v.into()).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_creation() {
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("hello"), Value::Text("hello".to_string()));
        assert_eq!(Value::from(()), Value::Null);
    }

    #[test]
    fn test_expr_is_not_text() {
        // A parenthesized string stays a plain Text value; raw expressions
        // are constructed deliberately.
        assert_eq!(Value::from("NOW()"), Value::Text("NOW()".to_string()));
        assert_eq!(Value::expr("NOW()"), Value::Expr("NOW()".to_string()));
    }

    #[test]
    fn test_array_conversion() {
        let value = Value::from(vec![1, 2, 3]);
        assert_eq!(
            value,
            Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(Some(42i64)), Value::Int(42));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn test_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::Int(42).is_null());
    }

    #[test]
    fn test_as_array() {
        let arr = Value::from(vec!["a", "b"]);
        assert_eq!(arr.as_array().map(Vec::len), Some(2));
        assert_eq!(Value::Bool(false).as_array(), None);
    }
}
