//! Stemming with surface-form aggregation
//!
//! Wraps a Snowball stemmer and records which surface forms reduced to each
//! stem, so stemmed vocabularies can be traced back to the original words.

use std::collections::{HashMap, HashSet};

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

/// Map from stem to the distinct surface forms that produced it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemMap {
    forms: HashMap<String, HashSet<String>>,
}

impl StemMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `surface` reduced to `stem`
    pub fn record(&mut self, stem: &str, surface: &str) {
        self.forms
            .entry(stem.to_string())
            .or_default()
            .insert(surface.to_string());
    }

    /// The surface forms recorded for a stem
    pub fn forms(&self, stem: &str) -> Option<&HashSet<String>> {
        self.forms.get(stem)
    }

    /// Iterate over (stem, surface forms) entries
    pub fn iter(&self) -> impl Iterator<Item = (&String, &HashSet<String>)> {
        self.forms.iter()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Union two maps, merging the surface-form sets of shared stems
    pub fn merge(&self, other: &StemMap) -> StemMap {
        let mut combined = self.clone();
        for (stem, surfaces) in &other.forms {
            combined
                .forms
                .entry(stem.clone())
                .or_default()
                .extend(surfaces.iter().cloned());
        }
        combined
    }
}

/// Snowball stemmer with surface-form tracking
pub struct WordStemmer {
    stemmer: Stemmer,
}

impl WordStemmer {
    /// The English (Porter2) stemmer
    pub fn new() -> Self {
        Self::with_algorithm(Algorithm::English)
    }

    /// A stemmer for a specific Snowball algorithm
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self {
            stemmer: Stemmer::create(algorithm),
        }
    }

    /// Stem a single word
    pub fn stem_word(&self, word: &str) -> String {
        self.stemmer.stem(word).to_string()
    }

    /// Stem a token sequence, preserving order 1:1, and aggregate the stem map
    pub fn stem_all(&self, tokens: &[String]) -> (Vec<String>, StemMap) {
        let mut stemmed = Vec::with_capacity(tokens.len());
        let mut map = StemMap::new();
        for token in tokens {
            let stem = self.stem_word(token);
            map.record(&stem, token);
            stemmed.push(stem);
        }
        (stemmed, map)
    }
}

impl Default for WordStemmer {
    fn default() -> Self {
        Self::new()
    }
}
