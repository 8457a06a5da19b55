//! Filter query matching.
//!
//! The admin screens match filter input as a case-insensitive substring of the
//! item label. A fuzzy mode backed by `SkimMatcherV2` is available for hosts
//! that prefer the list component's forgiving search.

use crate::item::Item;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use once_cell::sync::Lazy;
use serde::Deserialize;

static FUZZY: Lazy<SkimMatcherV2> = Lazy::new(SkimMatcherV2::default);

/// How a filter query is compared against item labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Fuzzy subsequence match with skim scoring.
    Fuzzy,
}

impl MatchMode {
    /// Returns true if `label` matches `query` under this mode.
    ///
    /// ```
    /// use console_paginator::matcher::MatchMode;
    ///
    /// assert!(MatchMode::Substring.matches("Meeting Room A", "room a"));
    /// assert!(!MatchMode::Substring.matches("Meeting Room A", "mra"));
    /// assert!(MatchMode::Fuzzy.matches("Meeting Room A", "mra"));
    /// ```
    pub fn matches(self, label: &str, query: &str) -> bool {
        match self {
            MatchMode::Substring => label.to_lowercase().contains(&query.to_lowercase()),
            MatchMode::Fuzzy => FUZZY.fuzzy_match(label, query).is_some(),
        }
    }

    /// Builds an item predicate for `query`.
    ///
    /// The query is normalised once, so the returned closure only lowercases
    /// labels.
    pub fn predicate<I: Item + 'static>(self, query: &str) -> Box<dyn Fn(&I) -> bool> {
        match self {
            MatchMode::Substring => {
                let needle = query.to_lowercase();
                Box::new(move |item: &I| item.label().to_lowercase().contains(&needle))
            }
            MatchMode::Fuzzy => {
                let pattern = query.to_string();
                Box::new(move |item: &I| FUZZY.fuzzy_match(&item.label(), &pattern).is_some())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Named(String);

    impl Item for Named {
        fn id(&self) -> &str {
            &self.0
        }

        fn label(&self) -> String {
            self.0.clone()
        }
    }

    #[test]
    fn test_substring_ignores_case() {
        assert!(MatchMode::Substring.matches("Kokoushuone Aurora", "AURORA"));
        assert!(MatchMode::Substring.matches("Kokoushuone Aurora", ""));
        assert!(!MatchMode::Substring.matches("Kokoushuone Aurora", "sauna"));
    }

    #[test]
    fn test_substring_handles_non_ascii() {
        assert!(MatchMode::Substring.matches("Työpiste Ö", "työpiste ö"));
        assert!(MatchMode::Substring.matches("Välj", "VÄLJ"));
    }

    #[test]
    fn test_predicate_matches_labels() {
        let pred = MatchMode::Substring.predicate::<Named>("room");
        assert!(pred(&Named("Big Room".into())));
        assert!(!pred(&Named("Hall".into())));

        let fuzzy = MatchMode::Fuzzy.predicate::<Named>("bgr");
        assert!(fuzzy(&Named("Big Room".into())));
    }

    #[test]
    fn test_fuzzy_matches_agree_with_predicate() {
        let pred = MatchMode::Fuzzy.predicate::<Named>("mra");
        for label in ["Meeting Room A", "Sauna", "Main area", ""] {
            assert_eq!(
                MatchMode::Fuzzy.matches(label, "mra"),
                pred(&Named(label.to_string())),
                "{label}"
            );
        }
        // the shared matcher keeps answering across calls
        assert!(MatchMode::Fuzzy.matches("Meeting Room A", "mra"));
        assert!(!MatchMode::Fuzzy.matches("Sauna", "mra"));
    }
}
