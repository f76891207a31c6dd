//! Field specifiers and identifier quoting

use serde::{Deserialize, Serialize};

/// A reference to a column, optionally qualified by table, or a raw
/// function-call expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// Bare or `table.column` qualified identifier, backtick-quoted
    /// per segment when rendered
    Name(String),
    /// Expression text rendered verbatim (e.g. `COUNT(id)`)
    Expr(String),
}

impl Field {
    /// Create a raw expression field that is rendered verbatim
    pub fn expr(text: impl Into<String>) -> Self {
        Field::Expr(text.into())
    }

    /// Render this field as quoted identifier text
    pub fn format(&self) -> String {
        match self {
            Field::Expr(text) => text.clone(),
            Field::Name(name) => match name.split_once('.') {
                Some((table, column)) => format!("`{table}`.`{column}`"),
                None => format!("`{name}`"),
            },
        }
    }
}

/// Classify once at the boundary: text containing both `(` and `)` is a
/// function-call expression and passes through unmodified.
impl From<&str> for Field {
    fn from(val: &str) -> Self {
        if val.contains('(') && val.contains(')') {
            Field::Expr(val.to_string())
        } else {
            Field::Name(val.to_string())
        }
    }
}

impl From<String> for Field {
    fn from(val: String) -> Self {
        Field::from(val.as_str())
    }
}

/// Render a field list joined with `", "` for multi-field clauses
pub fn format_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::format)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Trait to convert various types into a field list
pub trait IntoFields {
    fn into_fields(self) -> Vec<Field>;
}

impl IntoFields for &str {
    fn into_fields(self) -> Vec<Field> {
        vec![Field::from(self)]
    }
}

impl IntoFields for String {
    fn into_fields(self) -> Vec<Field> {
        vec![Field::from(self)]
    }
}

impl IntoFields for Field {
    fn into_fields(self) -> Vec<Field> {
        vec![self]
    }
}

impl IntoFields for Vec<Field> {
    fn into_fields(self) -> Vec<Field> {
        self
    }
}

impl IntoFields for Vec<&str> {
    fn into_fields(self) -> Vec<Field> {
        self.into_iter().map(Field::from).collect()
    }
}

impl IntoFields for Vec<String> {
    fn into_fields(self) -> Vec<Field> {
        self.into_iter().map(Field::from).collect()
    }
}

impl IntoFields for &[&str] {
    fn into_fields(self) -> Vec<Field> {
        self.iter().copied().map(Field::from).collect()
    }
}

impl<const N: usize> IntoFields for [&str; N] {
    fn into_fields(self) -> Vec<Field> {
        self.iter().copied().map(Field::from).collect()
    }
}
