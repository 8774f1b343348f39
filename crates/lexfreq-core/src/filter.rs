//! Vocabulary filtering through word predicates

use crate::stopwords::StopWords;

/// A word predicate: true keeps the word, false drops it
pub type WordPredicate<'a> = dyn Fn(&str) -> bool + 'a;

/// Filter words through a chain of predicates
///
/// With no predicates the default English stop-word exclusion applies.
/// Otherwise a word survives only if every predicate accepts it; predicates
/// run in the order given, and later ones are skipped once nothing is left.
pub fn apply(words: &[String], predicates: &[&WordPredicate<'_>]) -> Vec<String> {
    if predicates.is_empty() {
        let stops = StopWords::english();
        return words
            .iter()
            .filter(|word| stops.keep(word))
            .cloned()
            .collect();
    }

    let mut kept: Vec<String> = words.to_vec();
    for predicate in predicates {
        kept.retain(|word| predicate(word));
        if kept.is_empty() {
            break;
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn test_default_stop_word_filter() {
        let vocabulary = words(&[
            "if",
            "every",
            "time",
            "i",
            "thought",
            "was",
            "being",
            "rejected",
            "from",
            "something",
            "good",
            "actually",
            "re-directed",
            "to",
        ]);

        let kept = apply(&vocabulary, &[]);
        assert_eq!(
            kept,
            vec![
                "every",
                "time",
                "thought",
                "rejected",
                "something",
                "good",
                "actually",
                "re-directed"
            ]
        );
    }

    #[test]
    fn test_predicates_all_must_pass() {
        let vocabulary = words(&["every", "rejected", "re-directed", "time"]);
        let not_re_prefixed = |word: &str| !word.starts_with("re");
        let longer_than_four = |word: &str| word.len() > 4;

        let kept = apply(&vocabulary, &[&not_re_prefixed, &longer_than_four]);
        assert_eq!(kept, vec!["every"]);
    }

    #[test]
    fn test_stop_word_predicate_composes() {
        let vocabulary = words(&[
            "if",
            "every",
            "time",
            "i",
            "thought",
            "was",
            "being",
            "rejected",
            "from",
            "something",
            "good",
            "actually",
            "re-directed",
            "to",
        ]);
        let stops = StopWords::english();
        let stop_filter = |word: &str| stops.keep(word);
        let not_re_prefixed = |word: &str| !word.starts_with("re");

        let kept = apply(&vocabulary, &[&stop_filter, &not_re_prefixed]);
        assert_eq!(
            kept,
            vec!["every", "time", "thought", "something", "good", "actually"]
        );
    }

    #[test]
    fn test_short_circuit_skips_later_predicates() {
        let vocabulary = words(&["alpha", "beta"]);
        let calls = Cell::new(0usize);
        let reject_all = |_: &str| false;
        let count_calls = |_: &str| {
            calls.set(calls.get() + 1);
            true
        };

        let kept = apply(&vocabulary, &[&reject_all, &count_calls]);
        assert!(kept.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_empty_vocabulary() {
        assert!(apply(&[], &[]).is_empty());
    }
}
