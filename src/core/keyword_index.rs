//! Keyword index: normalized keyword → (label, weight, idf)
//!
//! Built once from the profile table and read-only afterwards.

use std::collections::HashMap;

use crate::core::stemmer::stem;
use crate::types::{EmotionLabel, EmotionProfile, EMOTION_PROFILES};

/// One keyword's entry in the index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordEntry {
    pub label: EmotionLabel,
    pub weight: f64,
    /// Smoothed inverse document frequency over the profile set
    pub idf: f64,
}

/// Lookup from normalized keyword to its entry
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    entries: HashMap<String, KeywordEntry>,
    /// Normalized keywords per label, deduplicated, in defining order
    keywords_by_label: Vec<Vec<String>>,
}

impl Default for KeywordIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordIndex {
    /// Build from the built-in profile table
    pub fn new() -> Self {
        Self::from_profiles(&EMOTION_PROFILES)
    }

    /// Build from an arbitrary profile list
    ///
    /// Profiles are inserted in order, so when two profiles share a keyword the
    /// later one owns it.
    pub fn from_profiles(profiles: &[EmotionProfile]) -> Self {
        let normalized: Vec<(EmotionLabel, f64, Vec<String>)> = profiles
            .iter()
            .map(|p| (p.label, p.weight, p.keywords.iter().map(|k| stem(k)).collect()))
            .collect();

        let total_docs = profiles.len() as f64;
        let mut entries = HashMap::new();
        let mut keywords_by_label = vec![Vec::new(); EmotionLabel::COUNT];

        for (label, weight, keywords) in &normalized {
            for keyword in keywords {
                let doc_freq = normalized
                    .iter()
                    .filter(|(_, _, kws)| kws.contains(keyword))
                    .count() as f64;
                let idf = ((total_docs + 1.0) / (doc_freq + 1.0)).ln() + 1.0;

                entries.insert(
                    keyword.clone(),
                    KeywordEntry { label: *label, weight: *weight, idf },
                );

                let listed = &mut keywords_by_label[label.index()];
                if !listed.contains(keyword) {
                    listed.push(keyword.clone());
                }
            }
        }

        Self { entries, keywords_by_label }
    }

    /// Look up a normalized token
    pub fn get(&self, token: &str) -> Option<&KeywordEntry> {
        self.entries.get(token)
    }

    /// Normalized keywords of a label, in defining order
    pub fn keywords_for(&self, label: EmotionLabel) -> &[String] {
        &self.keywords_by_label[label.index()]
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
