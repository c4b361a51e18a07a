//! Tag search queries.
//!
//! A query is a whitespace separated list of terms and every term has to hold
//! for a post to pass. A leading `-` negates a term. Terms containing `*` are
//! wildcard patterns (see [`TagMatcher`]), anything else must equal one whole
//! tag.

pub mod matcher;

pub use matcher::TagMatcher;

pub const NEGATION: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermKind {
    Exact(String),
    Wildcard(TagMatcher),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub negated: bool,
    pub kind: TermKind,
}

impl Term {
    pub fn parse(raw: &str) -> Self {
        let (negated, body) = match raw.strip_prefix(NEGATION) {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let kind = if TagMatcher::is_wildcard(body) {
            TermKind::Wildcard(TagMatcher::new(body))
        } else {
            TermKind::Exact(body.to_string())
        };

        Self { negated, kind }
    }

    pub fn matches(&self, tags: &str) -> bool {
        let found = match &self.kind {
            TermKind::Wildcard(matcher) => matcher.matches(tags),
            TermKind::Exact(tag) => tags.split_whitespace().any(|t| t == tag),
        };
        found != self.negated
    }
}

/// A parsed query, reusable across any number of posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<Term>,
}

impl Query {
    pub fn parse(query: &str) -> Self {
        Self {
            terms: query.split_whitespace().map(Term::parse).collect(),
        }
    }

    /// Evaluates terms left to right and stops at the first one that fails.
    pub fn matches(&self, tags: &str) -> bool {
        self.terms.iter().all(|term| term.matches(tags))
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// One-shot check of `query` against a space separated tag string.
pub fn tags_match_filter(query: &str, tags: &str) -> bool {
    Query::parse(query).matches(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGS: &str = "fox canine solo";

    #[test]
    fn empty_query_matches_everything() {
        assert!(tags_match_filter("", TAGS));
        assert!(tags_match_filter("   ", TAGS));
        assert!(tags_match_filter("", ""));
    }

    #[test]
    fn present_and_absent_tags() {
        for tag in TAGS.split(' ') {
            assert!(tags_match_filter(tag, TAGS));
            assert!(!tags_match_filter(&format!("-{}", tag), TAGS));
        }
        assert!(!tags_match_filter("wolf", TAGS));
        assert!(tags_match_filter("-wolf", TAGS));
    }

    #[test]
    fn exact_terms_do_not_match_substrings() {
        assert!(!tags_match_filter("fo", TAGS));
        assert!(tags_match_filter("fo*", TAGS));
        assert!(!tags_match_filter("canin", TAGS));
    }

    #[test]
    fn terms_are_combined_with_and() {
        let terms = ["fox", "-fox", "wolf", "-wolf", "can*", "-so*"];
        for a in terms {
            for b in terms {
                let both = tags_match_filter(&format!("{} {}", a, b), TAGS);
                let each = tags_match_filter(a, TAGS) && tags_match_filter(b, TAGS);
                assert_eq!(both, each, "{:?} {:?}", a, b);
            }
        }
    }

    #[test]
    fn only_negated_terms() {
        assert!(tags_match_filter("-wolf -feline", TAGS));
        assert!(!tags_match_filter("-wolf -solo", TAGS));
    }

    #[test]
    fn repeated_whitespace_is_collapsed() {
        assert!(tags_match_filter("  fox \t canine\n", TAGS));
    }

    #[test]
    fn lone_dash_is_a_negated_empty_tag() {
        let query = Query::parse("-");
        assert_eq!(
            query.terms(),
            &[Term {
                negated: true,
                kind: TermKind::Exact(String::new())
            }]
        );
        assert!(query.matches(TAGS));
    }

    #[test]
    fn parses_term_kinds() {
        let query = Query::parse("fox -f*x");
        assert_eq!(query.terms().len(), 2);
        assert_eq!(query.terms()[0].kind, TermKind::Exact("fox".into()));
        assert!(!query.terms()[0].negated);
        assert!(query.terms()[1].negated);
        match &query.terms()[1].kind {
            TermKind::Wildcard(m) => assert_eq!(m.pattern(), "f*x"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn tag_containing_dash_is_not_negated() {
        assert!(tags_match_filter("x-ray", "x-ray fox"));
        assert!(!tags_match_filter("-x-ray", "x-ray fox"));
    }

    #[test]
    fn scenario_fox_canine() {
        let tags = "fox canine";
        assert!(tags_match_filter("fox -suggestive", tags));
        assert!(!tags_match_filter("fox suggestive", tags));
        assert!(tags_match_filter("f*x", tags));
        assert!(!tags_match_filter("-fox", tags));
    }

    #[test]
    fn unusable_pattern_only_fails_its_own_term() {
        let huge = format!("x{}*", "a".repeat(3_000_000));
        let tags = "fox canine";
        assert!(tags_match_filter(&format!("-{}", huge), tags));
        assert!(tags_match_filter(&format!("fox -{}", huge), tags));
        assert!(!tags_match_filter(&huge, tags));

        let query = Query::parse(&format!("fox {}", huge));
        assert_eq!(query.terms().len(), 2);
        assert!(!query.matches(tags));
    }

    #[test]
    fn newlines_separate_tags_for_both_term_kinds() {
        let tags = "fox\ncanine";
        assert!(tags_match_filter("canine", tags));
        assert!(tags_match_filter("fox*canine", tags));
        assert!(tags_match_filter("can* -f*z", tags));
    }
}
