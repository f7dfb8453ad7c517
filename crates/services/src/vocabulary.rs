//! # Static Vocabulary
//!
//! Settings-backed implementation of the `HighlightVocabulary` port. The
//! original deployment sourced these terms from a configured taxonomy; here
//! they arrive as plain strings, typically from `configs::LiveblogSettings`.

use domains::ports::HighlightVocabulary;

pub struct StaticVocabulary {
    terms: Vec<String>,
}

impl StaticVocabulary {
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }
}

impl HighlightVocabulary for StaticVocabulary {
    fn is_valid_highlight(&self, value: &str) -> bool {
        self.terms.iter().any(|term| term == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_exact() {
        let vocabulary = StaticVocabulary::new(vec!["breaking".into(), "summary".into()]);
        assert!(vocabulary.is_valid_highlight("breaking"));
        assert!(!vocabulary.is_valid_highlight("Breaking"));
        assert!(!vocabulary.is_valid_highlight(""));
    }
}
