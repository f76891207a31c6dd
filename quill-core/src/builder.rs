//! The fluent statement builder
//!
//! A [`QueryBuilder`] owns the statement-in-progress text plus one mode
//! flag, and exposes fluent operations that each append or replace a
//! clause. Filter trees are compiled here: the condition-tree compiler
//! walks the nested AND/OR structure and the operator value transform
//! applies per-operator shape rules before splicing literals in.

use std::fmt;

use crate::error::{Error, Result};
use crate::escape::escape_string;
use crate::field::{format_fields, Field, IntoFields};
use crate::filter::{FilterNode, FilterTree};
use crate::operator::token_for;
use crate::value::Value;

/// How sibling conditions at one nesting level are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::And => write!(f, "AND"),
            Combinator::Or => write!(f, "OR"),
        }
    }
}

/// Trait for anything that can stand as a FROM/JOIN target
///
/// Plain names are backtick-quoted; a composed builder is embedded as a
/// parenthesized subquery of its rendered text.
pub trait IntoTable {
    fn into_table(self) -> String;
}

impl IntoTable for &str {
    fn into_table(self) -> String {
        format!("`{self}`")
    }
}

impl IntoTable for String {
    fn into_table(self) -> String {
        format!("`{self}`")
    }
}

impl IntoTable for &QueryBuilder {
    fn into_table(self) -> String {
        format!("({})", self.to_sql())
    }
}

/// A mutable fluent SQL statement builder
///
/// Each operation mutates the owned statement text and returns the same
/// instance for chaining. A builder is single-owner state: one logical
/// query under construction per instance, no internal synchronization.
/// Builders embedded as join or union members are only read by the parent
/// and may be shared freely.
///
/// # Examples
/// ```
/// use quill_core::{cond, query, FilterTree};
///
/// let mut qb = query();
/// qb.select(vec!["a"])
///     .from("T")
///     .where_(&FilterTree::new(vec![cond("a", "eq", 1)]))
///     .unwrap();
/// assert_eq!(qb.to_sql(), "SELECT `a` FROM `T` WHERE (`a` = '1')");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: String,
    value_as_field: bool,
}

impl QueryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the statement with `SELECT <fields> `
    pub fn select(&mut self, fields: impl IntoFields) -> &mut Self {
        self.query = format!("SELECT {} ", format_fields(&fields.into_fields()));
        self
    }

    /// Replace the statement with `SELECT * `
    pub fn select_all(&mut self) -> &mut Self {
        self.query = "SELECT * ".to_string();
        self
    }

    /// Append a FROM clause; the target may be a table name or a
    /// composed builder
    pub fn from(&mut self, target: impl IntoTable) -> &mut Self {
        self.table_declaration("FROM", target)
    }

    /// Append an INNER JOIN clause
    pub fn inner_join(&mut self, target: impl IntoTable) -> &mut Self {
        self.table_declaration("INNER JOIN", target)
    }

    /// Append a LEFT JOIN clause
    pub fn left_join(&mut self, target: impl IntoTable) -> &mut Self {
        self.table_declaration("LEFT JOIN", target)
    }

    /// Append a RIGHT JOIN clause
    pub fn right_join(&mut self, target: impl IntoTable) -> &mut Self {
        self.table_declaration("RIGHT JOIN", target)
    }

    /// Append an ON clause compiled from a filter tree.
    ///
    /// While the tree compiles, text values are treated as join keys and
    /// rendered as quoted field references instead of string literals.
    /// The mode is restored even when compilation fails.
    pub fn on(&mut self, conditions: &FilterTree) -> Result<&mut Self> {
        self.value_as_field = true;
        let compiled = self.compile_tree(conditions, Combinator::And);
        self.value_as_field = false;
        self.query.push_str(&format!("ON {} ", compiled?));
        Ok(self)
    }

    /// Append an `` AS `name` `` alias for the preceding table or subquery
    pub fn alias(&mut self, name: &str) -> &mut Self {
        self.query.push_str(&format!("AS `{name}` "));
        self
    }

    /// Append a WHERE clause compiled from a filter tree
    pub fn where_(&mut self, conditions: &FilterTree) -> Result<&mut Self> {
        let expr = self.compile_tree(conditions, Combinator::And)?;
        self.query.push_str(&format!("WHERE {expr} "));
        Ok(self)
    }

    /// Replace the statement with `GROUP BY <fields> `.
    ///
    /// Note: this replaces the statement text rather than appending a
    /// clause; calling it mid-chain discards earlier clauses.
    pub fn group_by(&mut self, fields: impl IntoFields) -> &mut Self {
        self.query = format!("GROUP BY {} ", format_fields(&fields.into_fields()));
        self
    }

    /// Replace the statement with `ORDER BY <fields> `.
    ///
    /// Same replace semantics as [`QueryBuilder::group_by`].
    pub fn order_by(&mut self, fields: impl IntoFields) -> &mut Self {
        self.query = format!("ORDER BY {} ", format_fields(&fields.into_fields()));
        self
    }

    /// Append a HAVING clause compiled from a filter tree
    pub fn having(&mut self, conditions: &FilterTree) -> Result<&mut Self> {
        let expr = self.compile_tree(conditions, Combinator::And)?;
        self.query.push_str(&format!("HAVING {expr} "));
        Ok(self)
    }

    /// Append `LIMIT n` and, when given, `, offset`
    pub fn limit(&mut self, limit: u64, offset: Option<u64>) -> &mut Self {
        self.query.push_str(&format!("LIMIT {limit}"));
        if let Some(offset) = offset {
            self.query.push_str(&format!(", {offset} "));
        }
        self
    }

    /// Append the members as a parenthesized UNION chain
    pub fn union<'a>(&mut self, members: impl IntoIterator<Item = &'a QueryBuilder>) -> &mut Self {
        let joined = members
            .into_iter()
            .map(|member| format!("({})", member.to_sql()))
            .collect::<Vec<_>>()
            .join(" UNION ");
        self.query.push_str(&joined);
        self
    }

    /// Replace the statement with the INSERT skeleton
    pub fn insert(&mut self) -> &mut Self {
        self.query = "INSERT ".to_string();
        self
    }

    /// Append `INTO <table> ` to an INSERT skeleton
    pub fn into_table(&mut self, table: &str) -> &mut Self {
        self.query.push_str(&format!("INTO {table} "));
        self
    }

    /// Render the VALUES list of an INSERT statement.
    ///
    /// Not implemented; INSERT rendering stops at the skeleton.
    pub fn values(&mut self, _values: &[Value]) -> Result<&mut Self> {
        Err(Error::unsupported(
            "INSERT value-list rendering is not implemented",
        ))
    }

    /// Replace the statement with `UPDATE <table> `
    pub fn update(&mut self, table: &str) -> &mut Self {
        self.query = format!("UPDATE {table} ");
        self
    }

    /// Render the assignment list of an UPDATE statement.
    ///
    /// Not implemented; UPDATE rendering stops at the keyword.
    pub fn set(&mut self, _assignments: &[(Field, Value)]) -> Result<&mut Self> {
        Err(Error::unsupported(
            "UPDATE assignment-list rendering is not implemented",
        ))
    }

    /// Replace the entire statement with caller-supplied SQL text.
    ///
    /// The text is accepted uninterpreted; the caller owns its correctness.
    pub fn by_query(&mut self, raw: &str) -> &mut Self {
        self.query = raw.to_string();
        self
    }

    /// The trimmed current statement text; safe to call at any point,
    /// including mid-assembly
    pub fn to_sql(&self) -> String {
        self.query.trim().to_string()
    }

    /// Emit the rendered statement through the tracing sink
    pub fn log(&self) {
        tracing::debug!(sql = %self.to_sql(), "built statement");
    }

    fn table_declaration(&mut self, keyword: &str, target: impl IntoTable) -> &mut Self {
        self.query
            .push_str(&format!("{keyword} {} ", target.into_table()));
        self
    }

    /// Compile a filter tree into a boolean expression with no trailing
    /// combinator.
    ///
    /// Leaves are joined by the given combinator; a nested sequence is
    /// compiled with OR, parenthesized, and joined to its siblings with
    /// AND. Element order is preserved.
    fn compile_tree(&self, tree: &FilterTree, combinator: Combinator) -> Result<String> {
        let mut expr = String::new();
        for node in tree.iter() {
            match node {
                FilterNode::Cond(c) => {
                    let token = token_for(&c.op);
                    let value = self.operator_value(token, &c.value)?;
                    expr.push_str(&format!(
                        "({} {} {}) {} ",
                        c.field.format(),
                        token,
                        value,
                        combinator
                    ));
                }
                FilterNode::Group(inner) => {
                    let compiled = self.compile_tree(inner, Combinator::Or)?;
                    expr.push_str(&format!("({compiled}) AND "));
                }
            }
        }

        // Strip the trailing combinator and its surrounding spaces. A group
        // is always AND-ed to its siblings, so the trailing token may differ
        // from the level combinator.
        let expr = expr.trim_end();
        let expr = expr
            .strip_suffix("AND")
            .or_else(|| expr.strip_suffix("OR"))
            .unwrap_or(expr);
        Ok(expr.trim_end().to_string())
    }

    /// Apply per-operator value-shape rules, or fall through to escaping
    fn operator_value(&self, token: &str, value: &Value) -> Result<String> {
        match token {
            "BETWEEN" | "NOT BETWEEN" => match value {
                Value::Array(items) if items.len() == 2 => Ok(format!(
                    "{} AND {}",
                    self.render_scalar(&items[0])?,
                    self.render_scalar(&items[1])?
                )),
                _ => Err(Error::operator_value(
                    "BETWEEN and NOT BETWEEN expect a two-element sequence",
                )),
            },
            "IN" | "NOT IN" => match value {
                Value::Array(items) => {
                    let parts = items
                        .iter()
                        .map(|item| self.render_scalar(item))
                        .collect::<Result<Vec<_>>>()?;
                    Ok(format!("({})", parts.join(",")))
                }
                _ => Err(Error::operator_value(
                    "IN and NOT IN expect a sequence of values",
                )),
            },
            "IS" | "IS NOT" => match value {
                Value::Null => Ok("NULL".to_string()),
                Value::Bool(b) => Ok(b.to_string()),
                _ => Err(Error::operator_value(
                    "IS and IS NOT expect null or a boolean",
                )),
            },
            _ => self.render_scalar(value),
        }
    }

    /// Render a scalar value as statement text, honoring the
    /// field-reference mode
    fn render_scalar(&self, value: &Value) -> Result<String> {
        if self.value_as_field {
            // Join keys: identifier-shaped text is quoted as a field
            // reference, never as a string literal.
            return match value {
                Value::Text(text) => Ok(Field::from(text.as_str()).format()),
                Value::Expr(text) => Ok(text.clone()),
                Value::Null => Ok("NULL".to_string()),
                Value::Bool(b) => Ok(b.to_string()),
                Value::Int(i) => Ok(i.to_string()),
                Value::Float(f) => Ok(f.to_string()),
                Value::Array(_) => Err(Error::operator_value(
                    "a join-key value cannot be a sequence",
                )),
            };
        }

        match value {
            Value::Expr(text) => Ok(text.clone()),
            Value::Null => Ok("NULL".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(i) => Ok(escape_string(&i.to_string())),
            Value::Float(f) => Ok(escape_string(&f.to_string())),
            Value::Text(text) => Ok(escape_string(text)),
            Value::Array(_) => Err(Error::operator_value(
                "a sequence value is only valid for IN and BETWEEN operators",
            )),
        }
    }
}
