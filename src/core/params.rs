// parameter-list compatibility
//
// parameter strings are free declaration text, not parsed signatures. the checker
// prefers saying "compatible" when it lacks information:
//   - either side blank -> compatible
//   - same text after whitespace/case normalization -> compatible
//   - different comma-group counts -> incompatible
//   - per position (up to the shorter type list), type tokens must be equal or in
//     one compatibility family; groups without a "type name" shape are skipped
//   - if neither side yields a single type token, fall back to fuzzy text similarity
use std::sync::LazyLock;

use regex::Regex;

use crate::core::config::MatchConfig;
use crate::core::names::similarity;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));
static TYPE_AND_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+)\s+\w+").expect("static regex"));

const NUMERIC: &[&str] = &["int", "int64", "real", "decimal", "num"];
const STRING: &[&str] = &["str", "string"];
const DATE_TIME: &[&str] = &["date", "utcdatetime", "datetime"];
const BOOLEAN: &[&str] = &["boolean", "bool"];
const FAMILIES: &[&[&str]] = &[NUMERIC, STRING, DATE_TIME, BOOLEAN];

//collections are only compatible with the same collection kind
const CONTAINERS: &[&str] = &["array", "list", "map", "set"];

//interchangeable pairs that are not a whole family
const PAIRS: &[(&str, &str)] = &[("any", "object"), ("int", "enum"), ("record", "common")];

pub fn normalize_params(params: &str) -> String {
    WHITESPACE.replace_all(params.trim(), " ").to_lowercase()
}

/// Type tokens of every `type name` pair in declaration order. Untyped groups yield nothing.
pub fn param_types(normalized: &str) -> Vec<String> {
    TYPE_AND_NAME
        .captures_iter(normalized)
        .filter_map(|c| c.get(1))
        .map(|t| t.as_str().to_string())
        .collect()
}

pub fn types_compatible(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    if FAMILIES.iter().any(|f| f.contains(&a) && f.contains(&b)) {
        return true;
    }
    if CONTAINERS.contains(&a) || CONTAINERS.contains(&b) {
        return false;
    }
    PAIRS.iter().any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

#[derive(Debug, Clone, Copy)]
pub struct ParameterChecker {
    fallback_threshold: f64,
}

impl Default for ParameterChecker {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

impl ParameterChecker {
    pub fn new(config: &MatchConfig) -> Self {
        Self { fallback_threshold: config.parameter_similarity }
    }

    pub fn compatible(&self, expected: &str, actual: &str) -> bool {
        if expected.trim().is_empty() || actual.trim().is_empty() {
            return true;
        }

        let expected = normalize_params(expected);
        let actual = normalize_params(actual);
        if expected == actual {
            return true;
        }

        let count = |s: &str| s.matches(',').count() + 1;
        if count(&expected) != count(&actual) {
            return false;
        }

        let te = param_types(&expected);
        let ta = param_types(&actual);
        if te.is_empty() && ta.is_empty() {
            return similarity(&expected, &actual) > self.fallback_threshold;
        }

        //zip stops at the shorter list
        te.iter().zip(ta.iter()).all(|(e, a)| types_compatible(e, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(e: &str, a: &str) -> bool {
        ParameterChecker::default().compatible(e, a)
    }

    #[test]
    fn blank_side_is_compatible() {
        assert!(ok("", "int id"));
        assert!(ok("str name", "  "));
    }

    #[test]
    fn whitespace_and_case_are_normalized() {
        assert!(ok("Str   Name,\tint id", "str name, int id"));
    }

    #[test]
    fn count_mismatch_is_incompatible() {
        assert!(!ok("str name", "str name, int id"));
    }

    #[test]
    fn type_families() {
        assert!(ok("int count", "real count"));
        assert!(ok("str name", "string label"));
        assert!(ok("date d", "utcdatetime d"));
        assert!(ok("boolean flag", "bool flag"));
        assert!(!ok("str name", "date created"));
        assert!(!ok("real price, int qty", "str price, int qty"));
    }

    #[test]
    fn container_kinds_do_not_cross() {
        assert!(ok("list items", "list items2"));
        assert!(!ok("list items", "map items"));
    }

    #[test]
    fn explicit_pairs_work_both_ways() {
        assert!(ok("any x", "object x"));
        assert!(ok("object x", "any x"));
        assert!(ok("enum status", "int status"));
        assert!(ok("common rec", "record rec"));
        assert!(!ok("record rec", "object rec"));
    }

    #[test]
    fn untyped_groups_are_skipped_not_fatal() {
        assert_eq!(param_types("real p, q"), vec!["real".to_string()]);
        assert!(ok("real p, q", "int p, q"));
        assert!(ok("int amount, qty", "real amount, qty"));
        assert!(!ok("real p, q", "str p, q"));
    }

    #[test]
    fn types_compare_up_to_shorter_list() {
        assert!(ok("int id, str name", "int id, name"));
        assert!(ok("int id, name", "int id, str name"));
        assert!(!ok("str id, name", "int id, str name"));
    }

    #[test]
    fn untyped_lists_fall_back_to_similarity() {
        assert!(param_types("price, qty").is_empty());
        assert!(ok("price, quantity", "price, quantityy"));
        assert!(!ok("price, quantity", "a, b"));
    }

    #[test]
    fn fallback_threshold_comes_from_config() {
        let lax = ParameterChecker::new(&MatchConfig { parameter_similarity: 0.0, ..MatchConfig::default() });
        assert!(lax.compatible("price, quantity", "a, b"));
    }
}
