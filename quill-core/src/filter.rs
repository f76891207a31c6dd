//! Filter trees: nested AND/OR condition structures
//!
//! A filter tree is an ordered sequence of nodes. Sibling nodes at the top
//! of a sequence are combined with AND; a nested sequence forms a group
//! whose members are combined with OR, parenthesized and AND-ed with its
//! siblings.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::Field;
use crate::value::Value;

/// A single field / operator / value condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cond {
    pub field: Field,
    /// Symbolic operator name (e.g. `"eq"`), translated to a dialect token
    /// at compile time; unknown symbols are emitted verbatim
    pub op: String,
    pub value: Value,
}

/// One element of a filter tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterNode {
    /// Leaf condition
    Cond(Cond),
    /// Nested group, combined internally with OR
    Group(FilterTree),
}

/// An ordered sequence of filter nodes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterTree(pub Vec<FilterNode>);

/// Create a leaf condition node
pub fn cond(field: impl Into<Field>, op: impl Into<String>, value: impl Into<Value>) -> FilterNode {
    FilterNode::Cond(Cond {
        field: field.into(),
        op: op.into(),
        value: value.into(),
    })
}

/// Create a nested OR-group node
pub fn group(nodes: Vec<FilterNode>) -> FilterNode {
    FilterNode::Group(FilterTree(nodes))
}

impl From<Vec<FilterNode>> for FilterTree {
    fn from(nodes: Vec<FilterNode>) -> Self {
        FilterTree(nodes)
    }
}

impl FilterTree {
    pub fn new(nodes: Vec<FilterNode>) -> Self {
        FilterTree(nodes)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterNode> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpret an untyped JSON structure as a filter tree.
    ///
    /// The expected shape mirrors the tree itself: an array whose elements
    /// are either single-key objects mapping a field name to a single-key
    /// object mapping an operator symbol to a value, or nested arrays
    /// (OR-groups). Any other shape is a contract error, not a silent
    /// fallback.
    ///
    /// ```
    /// use quill_core::FilterTree;
    ///
    /// let json = serde_json::json!([{ "age": { "gte": 21 } }]);
    /// let tree = FilterTree::from_json(&json).unwrap();
    /// assert_eq!(tree.0.len(), 1);
    /// ```
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        let items = json.as_array().ok_or_else(|| {
            Error::filter_shape(format!(
                "expected a sequence of conditions, got {}",
                json_type_name(json)
            ))
        })?;

        let mut nodes = Vec::with_capacity(items.len());
        for item in items {
            match item {
                serde_json::Value::Object(map) => nodes.push(leaf_from_json(map)?),
                serde_json::Value::Array(_) => {
                    nodes.push(FilterNode::Group(Self::from_json(item)?));
                }
                other => {
                    return Err(Error::filter_shape(format!(
                        "expected a condition mapping or nested sequence, got {}",
                        json_type_name(other)
                    )));
                }
            }
        }
        Ok(FilterTree(nodes))
    }
}

fn leaf_from_json(map: &serde_json::Map<String, serde_json::Value>) -> Result<FilterNode> {
    if map.len() != 1 {
        return Err(Error::filter_shape(format!(
            "a condition must map exactly one field, got {} keys",
            map.len()
        )));
    }
    let (field_name, op_map) = map.iter().next().expect("len checked above");

    let op_map = op_map.as_object().ok_or_else(|| {
        Error::filter_shape(format!(
            "condition for field '{field_name}' must be an operator mapping, got {}",
            json_type_name(op_map)
        ))
    })?;
    if op_map.len() != 1 {
        return Err(Error::filter_shape(format!(
            "condition for field '{field_name}' must map exactly one operator, got {} keys",
            op_map.len()
        )));
    }
    let (op, value) = op_map.iter().next().expect("len checked above");

    Ok(FilterNode::Cond(Cond {
        field: Field::from(field_name.as_str()),
        op: op.clone(),
        value: value_from_json(value)?,
    }))
}

fn value_from_json(json: &serde_json::Value) -> Result<Value> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else {
                // u64 overflow also lands here; render as float
                Ok(Value::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
        serde_json::Value::Array(items) => {
            let values = items.iter().map(value_from_json).collect::<Result<_>>()?;
            Ok(Value::Array(values))
        }
        serde_json::Value::Object(_) => Err(Error::filter_shape(
            "a condition value cannot be a mapping".to_string(),
        )),
    }
}

fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}
