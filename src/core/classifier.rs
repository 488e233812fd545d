//! Classifier: text + typing speed → emotion label
//!
//! Pipeline:
//! 1. tokenize + stem
//! 2. keyword pass: score[label] += weight (× idf when enabled)
//! 3. sentiment pass (optional): polarity words credit a positive or negative label pair
//! 4. strict maximum in priority order, default label when nothing scores
//! 5. rapid typing turns a scored default label into laughing

use std::collections::HashMap;

use tracing::trace;

use crate::config::ClassifierConfig;
use crate::core::keyword_index::KeywordIndex;
use crate::core::stemmer::tokenize;
use crate::types::{
    Classification, ClassifyReason, EmotionLabel, LabelScores, NEGATIVE_PAIR, POSITIVE_PAIR,
    SENTIMENT_WORDS,
};
use crate::{SENTIMENT_PRIMARY_SHARE, SENTIMENT_SECONDARY_SHARE};

/// Text-to-emotion classifier
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    index: KeywordIndex,
    sentiment: HashMap<&'static str, f64>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Classifier with default settings
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self {
            config,
            index: KeywordIndex::new(),
            sentiment: SENTIMENT_WORDS.iter().copied().collect(),
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    /// Classify text and return the full score breakdown
    pub fn analyze(&self, text: &str, ms_since_last_input: u64) -> Classification {
        let tokens = tokenize(text);
        let mut scores = LabelScores::zero();
        let mut matched_keywords = Vec::new();

        for token in &tokens {
            if let Some(entry) = self.index.get(token) {
                let idf = if self.config.idf_scaling { entry.idf } else { 1.0 };
                scores.add(entry.label, entry.weight * idf);
                matched_keywords.push(token.clone());
            }
        }

        if self.config.sentiment_bonus {
            for token in &tokens {
                let polarity = match self.sentiment.get(token.as_str()) {
                    Some(&p) if p != 0.0 => p,
                    _ => continue,
                };
                let (primary, secondary) = if polarity > 0.0 { POSITIVE_PAIR } else { NEGATIVE_PAIR };
                let magnitude = polarity.abs();
                scores.add(primary, magnitude * SENTIMENT_PRIMARY_SHARE);
                scores.add(secondary, magnitude * SENTIMENT_SECONDARY_SHARE);
            }
        }

        let (mut label, mut reason) = match scores.best() {
            Some((label, _)) if matched_keywords.is_empty() => (label, ClassifyReason::SentimentOnly),
            Some((label, _)) => (label, ClassifyReason::KeywordMatch),
            None => (self.config.default_label, ClassifyReason::NoEvidence),
        };

        // Only a default that actually scored is eligible; blank input stays default
        if reason != ClassifyReason::NoEvidence
            && label == self.config.default_label
            && ms_since_last_input < self.config.fast_typing_ms
        {
            label = self.config.fast_typing_label;
            reason = ClassifyReason::FastTypingOverride;
        }

        trace!(
            label = %label,
            reason = %reason,
            tokens = tokens.len(),
            matched = matched_keywords.len(),
            ms_since_last_input,
            "classified"
        );

        Classification {
            label,
            reason,
            scores,
            matched_keywords,
            token_count: tokens.len(),
            ms_since_last_input,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Classify text, label only
    pub fn classify(&self, text: &str, ms_since_last_input: u64) -> EmotionLabel {
        self.analyze(text, ms_since_last_input).label
    }
}

// =============================================================================
// TESTS
// =============================================================================
