// tuning knobs for the heuristics. every empirical threshold the passes use lives here.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Names whose normalized edit-distance similarity is strictly above this match.
    pub name_similarity: f64,
    /// Fallback similarity for parameter strings that could not be tokenized.
    pub parameter_similarity: f64,
    /// Cleaned names must both be longer than this before the fuzzy path is tried.
    pub min_fuzzy_len: usize,
    /// A method covers a requirement when at least `keywords / keyword_quorum_divisor`
    /// (rounded down, never below `min_keyword_hits`) keywords appear in its body.
    pub keyword_quorum_divisor: usize,
    pub min_keyword_hits: usize,
    /// Requirement coverage keeps at most this many candidate methods.
    pub max_requirement_matches: usize,
    /// Requirement text longer than this is truncated for the feature name.
    pub requirement_name_len: usize,
    pub large_model_warning: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            name_similarity: 0.8,
            parameter_similarity: 0.7,
            min_fuzzy_len: 3,
            keyword_quorum_divisor: 2,
            min_keyword_hits: 1,
            max_requirement_matches: 3,
            requirement_name_len: 50,
            large_model_warning: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg: MatchConfig = toml::from_str("name_similarity = 0.9\n").unwrap();
        assert_eq!(cfg.name_similarity, 0.9);
        assert_eq!(cfg.parameter_similarity, 0.7);
        assert_eq!(cfg.max_requirement_matches, 3);
    }
}
