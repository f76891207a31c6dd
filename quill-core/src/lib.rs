//! Quill Core - a fluent MySQL-dialect statement compiler
//!
//! Quill turns nested filter structures into SQL text instead of
//! hand-concatenated strings. Literals embedded in filters are escaped,
//! identifiers are backtick-quoted, and join conditions render their
//! values as field references.
//!
//! ```
//! use quill_core::{cond, group, query, FilterTree};
//!
//! let mut qb = query();
//! qb.select(vec!["M.name", "M.id"])
//!     .from("Merchant")
//!     .alias("M")
//!     .inner_join("Store")
//!     .alias("S")
//!     .on(&FilterTree::new(vec![cond("S.merchant_id", "eq", "M.id")]))
//!     .unwrap()
//!     .where_(&FilterTree::new(vec![
//!         cond("S.deleted_at", "is", quill_core::Value::Null),
//!         group(vec![cond("S.city", "like", "%london%"), cond("S.city", "like", "%paris%")]),
//!     ]))
//!     .unwrap()
//!     .limit(10, None);
//!
//! assert_eq!(
//!     qb.to_sql(),
//!     "SELECT `M`.`name`, `M`.`id` FROM `Merchant` AS `M` \
//!      INNER JOIN `Store` AS `S` ON (`S`.`merchant_id` = `M`.`id`) \
//!      WHERE (`S`.`deleted_at` IS NULL) \
//!      AND ((`S`.`city` LIKE '%london%') OR (`S`.`city` LIKE '%paris%')) LIMIT 10"
//! );
//! ```
//!
//! A builder is single-owner mutable state: use one instance per logical
//! query. Builders embedded as join or union members are read-only to the
//! parent.

pub mod builder;
pub mod error;
pub mod escape;
pub mod field;
pub mod filter;
pub mod operator;
pub mod value;

// Re-export main types
pub use builder::{Combinator, IntoTable, QueryBuilder};
pub use error::{Error, Result};
pub use escape::escape_string;
pub use field::{Field, IntoFields};
pub use filter::{cond, group, Cond, FilterNode, FilterTree};
pub use operator::{op, token_for};
pub use value::Value;

/// Create a new empty statement builder
pub fn query() -> QueryBuilder {
    QueryBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_json_filter_end_to_end() {
        // The untyped boundary: nested arrays and single-key objects
        // interpreted into the typed tree.
        let filters = FilterTree::from_json(&json!([
            { "S._deleteDate": { "$is": null } },
            { "M.name": { "$in": [1, 2, 3] } },
            { "S.city": { "$like": "%london%" } },
            { "S.timestamp": { "$between": ["2018-01-01 00:00:00", "2018-07-01 00:00:00"] } }
        ]))
        .unwrap();

        let mut qb = query();
        qb.select_all()
            .from("Store")
            .alias("S")
            .where_(&filters)
            .unwrap()
            .limit(1, Some(10));

        assert_eq!(
            qb.to_sql(),
            "SELECT * FROM `Store` AS `S` \
             WHERE (`S`.`_deleteDate` IS NULL) \
             AND (`M`.`name` IN ('1','2','3')) \
             AND (`S`.`city` LIKE '%london%') \
             AND (`S`.`timestamp` BETWEEN '2018-01-01 00:00:00' AND '2018-07-01 00:00:00') \
             LIMIT 1, 10"
        );
    }

    #[test]
    fn test_json_shape_error_surfaces() {
        let err = FilterTree::from_json(&json!("not a sequence")).unwrap_err();
        assert!(matches!(err, Error::FilterShape { .. }));
    }
}
