// fuzzy identifier matching
//
// implementation names carry organisational prefixes (CUS_, Ax...) and kind
// suffixes (...Table, ...Form) that design documents leave out, so both sides are
// reduced to their core before comparing:
//   1. strip a known prefix, then a known suffix
//   2. lowercase + trim
//   3. equal -> match
//   4. one contains the other -> match
//   5. both longer than min_fuzzy_len -> normalized levenshtein similarity > threshold
use crate::core::config::MatchConfig;

const PREFIXES: [&str; 4] = ["ax", "cus", "isv", "usr"];
const SUFFIXES: [&str; 6] = ["Table", "Class", "Form", "Query", "Report", "Ext"];

/// Strip one known prefix (case-insensitive) and one known suffix (case-sensitive).
///
/// A prefix only counts when it is followed by `_` or by an uppercase letter, so
/// `CUS_Sales` and `AxSales` lose it but `Customer` keeps its first three letters.
pub fn strip_affixes(name: &str) -> &str {
    let mut stem = name.trim();

    for p in PREFIXES {
        let Some(head) = stem.get(..p.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(p) {
            continue;
        }
        let rest = &stem[p.len()..];
        if let Some(after) = rest.strip_prefix('_') {
            stem = after;
        } else if rest.chars().next().is_some_and(char::is_uppercase) {
            stem = rest;
        }
        break;
    }

    for s in SUFFIXES {
        if let Some(stripped) = stem.strip_suffix(s) {
            stem = stripped;
            break;
        }
    }

    stem
}

/// The comparable core of a name. Falls back to the whole name when stripping
/// leaves nothing (a unit literally called `Table` is compared as "table").
pub fn clean_name(name: &str) -> String {
    let stem = strip_affixes(name).trim();
    if stem.is_empty() {
        name.trim().to_lowercase()
    } else {
        stem.to_lowercase()
    }
}

/// Classic Levenshtein (edit) distance over chars, unit costs.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];
    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// `1 - distance / max_len`, in [0, 1]. Empty input scores 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    let max_len = a.chars().count().max(b.chars().count());
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

#[derive(Debug, Clone, Copy)]
pub struct NameMatcher {
    threshold: f64,
    min_fuzzy_len: usize,
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

impl NameMatcher {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            threshold: config.name_similarity,
            min_fuzzy_len: config.min_fuzzy_len,
        }
    }

    //symmetric; blank input never matches
    pub fn matches(&self, a: &str, b: &str) -> bool {
        if a.trim().is_empty() || b.trim().is_empty() {
            return false;
        }

        let a = clean_name(a);
        let b = clean_name(b);

        if a == b {
            return true;
        }

        if a.contains(b.as_str()) || b.contains(a.as_str()) {
            return true;
        }

        let fuzzy_ok = a.chars().count() > self.min_fuzzy_len && b.chars().count() > self.min_fuzzy_len;
        fuzzy_ok && similarity(&a, &b) > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(a: &str, b: &str) -> bool {
        NameMatcher::default().matches(a, b)
    }

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abd"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn similarity_is_normalized() {
        assert_eq!(similarity("same", "same"), 1.0);
        assert_eq!(similarity("", "x"), 0.0);
        let s = similarity("invoce", "invoice");
        assert!(s > 0.85 && s < 0.86, "got {s}");
    }

    #[test]
    fn strips_prefix_and_suffix() {
        assert_eq!(strip_affixes("CUS_SalesTable"), "Sales");
        assert_eq!(strip_affixes("AxCustForm"), "Cust");
        assert_eq!(strip_affixes("usr_Ledger"), "Ledger");
        assert_eq!(strip_affixes("Customer"), "Customer");
        assert_eq!(strip_affixes("SalesLineExt"), "SalesLine");
        assert_eq!(clean_name("Table"), "table");
    }

    #[test]
    fn prefix_needs_a_boundary_after_it() {
        assert_eq!(strip_affixes("axSales"), "Sales");
        assert_eq!(strip_affixes("AXSales"), "Sales");
        assert_eq!(strip_affixes("Axle"), "Axle");
        assert_eq!(strip_affixes("CustTable"), "Cust");
        assert_eq!(strip_affixes("Isvalid"), "Isvalid");
        //"le" would otherwise be contained in "lever"
        assert!(!m("Axle", "Lever"));
        assert!(m("AxLever", "Lever"));
    }

    #[test]
    fn identical_names_match() {
        for x in ["a", "Sales", "CUS_SalesTable", "Table", "ISV", "x_y"] {
            assert!(m(x, x), "{x} should match itself");
        }
    }

    #[test]
    fn matching_is_symmetric() {
        let names = ["CUS_SalesTable", "Sales", "CustomerGroup", "Customer", "Invoce", "Invoice", "Ab", "Xy", "Ledger"];
        for a in names {
            for b in names {
                assert_eq!(m(a, b), m(b, a), "asymmetric for {a} / {b}");
            }
        }
    }

    #[test]
    fn prefix_and_suffix_are_ignored() {
        assert!(m("CUS_SalesTable", "Sales"));
        assert!(m("SalesOrderHeader", "CUS_SalesOrderHeaderTable"));
    }

    #[test]
    fn containment_matches() {
        assert!(m("CustomerGroup", "Customer"));
        assert!(m("Inv", "Invoice"));
    }

    #[test]
    fn fuzzy_threshold() {
        assert!(m("Invoce", "Invoice"));
        assert!(!m("Ab", "Xy"));
        assert!(!m("Ledger", "Vendor"));
    }

    #[test]
    fn blank_never_matches() {
        assert!(!m("", ""));
        assert!(!m("", "Sales"));
        assert!(!m("   ", "Sales"));
    }

    #[test]
    fn threshold_comes_from_config() {
        let strict = NameMatcher::new(&MatchConfig { name_similarity: 0.9, ..MatchConfig::default() });
        assert!(!strict.matches("Invoce", "Invoice"));
    }
}
