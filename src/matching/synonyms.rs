//! Synonym-based query expansion.
//!
//! Substitution is literal: every occurrence of a term is replaced, even
//! inside a longer word. Only the trigger is token-bounded (the term must
//! appear as a whole query token).

use super::tokenizer::{normalize, tokenize};

/// Ordered mapping from a canonical term to its alternates.
///
/// The relation is applied both ways during expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: Vec<(String, Vec<String>)>,
}

impl SynonymTable {
    /// Build a table from `(term, alternates)` pairs; order is preserved.
    pub fn new<I, K, V, A>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(term, alternates)| {
                    (term.into(), alternates.into_iter().map(Into::into).collect())
                })
                .collect(),
        }
    }

    /// The table shipped with the widget.
    pub fn korean_default() -> Self {
        Self::new([
            ("연락", vec!["전화", "번호", "담당", "상담", "문의"]),
            ("전화", vec!["연락", "번호", "상담"]),
            ("담당자", vec!["담당", "담당부서", "담당 팀"]),
            ("검사", vec!["점검", "확인"]),
            ("신청", vec!["접수", "제출", "요청"]),
            ("기한", vec!["마감", "데드라인", "제출기한", "만료"]),
            ("담당", vec!["담당자", "담당부서"]),
        ])
    }

    /// Number of canonical terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expand `query` into its variants.
    ///
    /// The original query always comes first. For each entry `(k, V)`: when
    /// `k` is a query token, `k` is replaced by each `v`; when some `v` is a
    /// query token, `v` is replaced by `k`. Identical variants collapse.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let mut variants = vec![query.to_string()];
        let tokens = tokenize(query);
        let has_token = |term: &str| {
            let term = normalize(term);
            tokens.iter().any(|t| *t == term)
        };

        let mut push = |variant: String| {
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        };

        for (term, alternates) in &self.entries {
            if has_token(term) {
                for alternate in alternates {
                    push(query.replace(term.as_str(), alternate));
                }
            }
            for alternate in alternates {
                if has_token(alternate) {
                    push(query.replace(alternate.as_str(), term));
                }
            }
        }

        variants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_table() -> SynonymTable {
        SynonymTable::new([("전화", vec!["연락"])])
    }

    #[test]
    fn test_expand_always_contains_original_first() {
        let table = SynonymTable::korean_default();
        assert_eq!(table.expand("무관한 질문"), vec!["무관한 질문"]);
        assert_eq!(table.expand(""), vec![""]);
    }

    #[test]
    fn test_expand_forward_substitution() {
        let variants = phone_table().expand("전화 문의");
        assert_eq!(variants, vec!["전화 문의", "연락 문의"]);
    }

    #[test]
    fn test_expand_reverse_substitution() {
        let variants = phone_table().expand("연락 문의");
        assert_eq!(variants, vec!["연락 문의", "전화 문의"]);
    }

    #[test]
    fn test_expand_requires_whole_token_trigger() {
        // "전화문의" tokenizes to a single token, so "전화" never triggers.
        assert_eq!(phone_table().expand("전화문의"), vec!["전화문의"]);
    }

    #[test]
    fn test_expand_replaces_inside_longer_words() {
        // Triggered by the standalone token, but every literal occurrence is replaced.
        let variants = phone_table().expand("전화 전화번호");
        assert!(variants.contains(&"연락 연락번호".to_string()));
    }

    #[test]
    fn test_expand_collapses_duplicates() {
        let table = SynonymTable::new([("a", vec!["b", "b"]), ("c", vec!["b"])]);
        let variants = table.expand("a");
        assert_eq!(variants, vec!["a", "b"]);
    }

    #[test]
    fn test_expand_default_table() {
        let variants = SynonymTable::korean_default().expand("검사 기한");
        assert_eq!(variants[0], "검사 기한");
        assert!(variants.contains(&"점검 기한".to_string()));
        assert!(variants.contains(&"검사 마감".to_string()));
        assert!(variants.contains(&"검사 제출기한".to_string()));
    }

    #[test]
    fn test_expand_is_case_insensitive_on_trigger_only() {
        let table = SynonymTable::new([("phone", vec!["tel"])]);
        // Token matches after lowercasing, but the literal replace is case-sensitive.
        assert_eq!(table.expand("Phone"), vec!["Phone"]);
        assert_eq!(table.expand("phone"), vec!["phone", "tel"]);
    }
}
