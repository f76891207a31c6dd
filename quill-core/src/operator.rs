//! Symbolic operator names and their dialect tokens

/// Translate a symbolic operator name into its dialect operator token.
///
/// Symbols are accepted with or without a MongoDB-style `$` prefix (`"$eq"` and
/// `"eq"` both map to `"="`). An unmapped symbol is returned unchanged,
/// which permits passing raw operator text such as `">="` directly.
pub fn token_for(symbol: &str) -> &str {
    let key = symbol.strip_prefix('$').unwrap_or(symbol);
    match key {
        "eq" => "=",
        "neq" => "!=",
        "gt" => ">",
        "gte" => ">=",
        "lt" => "<",
        "lte" => "<=",
        "like" => "LIKE",
        "nlike" => "NOT LIKE",
        "in" => "IN",
        "nin" => "NOT IN",
        "between" => "BETWEEN",
        "nbetween" => "NOT BETWEEN",
        "is" => "IS",
        "isnot" => "IS NOT",
        _ => symbol,
    }
}

/// Convenience module with the symbolic operator names
pub mod op {
    pub const EQ: &str = "eq";
    pub const NEQ: &str = "neq";
    pub const GT: &str = "gt";
    pub const GTE: &str = "gte";
    pub const LT: &str = "lt";
    pub const LTE: &str = "lte";
    pub const LIKE: &str = "like";
    pub const NOT_LIKE: &str = "nlike";
    pub const IN: &str = "in";
    pub const NOT_IN: &str = "nin";
    pub const BETWEEN: &str = "between";
    pub const NOT_BETWEEN: &str = "nbetween";
    pub const IS: &str = "is";
    pub const IS_NOT: &str = "isnot";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_tokens() {
        assert_eq!(token_for("eq"), "=");
        assert_eq!(token_for("neq"), "!=");
        assert_eq!(token_for("gt"), ">");
        assert_eq!(token_for("gte"), ">=");
        assert_eq!(token_for("lt"), "<");
        assert_eq!(token_for("lte"), "<=");
    }

    #[test]
    fn test_keyword_tokens() {
        assert_eq!(token_for("like"), "LIKE");
        assert_eq!(token_for("nlike"), "NOT LIKE");
        assert_eq!(token_for("in"), "IN");
        assert_eq!(token_for("nin"), "NOT IN");
        assert_eq!(token_for("between"), "BETWEEN");
        assert_eq!(token_for("nbetween"), "NOT BETWEEN");
        assert_eq!(token_for("is"), "IS");
        assert_eq!(token_for("isnot"), "IS NOT");
    }

    #[test]
    fn test_dollar_prefix_resolves_identically() {
        assert_eq!(token_for("$eq"), token_for("eq"));
        assert_eq!(token_for("$in"), token_for("in"));
        assert_eq!(token_for("$between"), token_for("between"));
        assert_eq!(token_for("$isnot"), "IS NOT");
    }

    #[test]
    fn test_unknown_symbol_passes_through() {
        assert_eq!(token_for(">="), ">=");
        assert_eq!(token_for("SOUNDS LIKE"), "SOUNDS LIKE");
    }

    #[test]
    fn test_op_constants_resolve() {
        assert_eq!(token_for(op::EQ), "=");
        assert_eq!(token_for(op::NOT_BETWEEN), "NOT BETWEEN");
    }
}
