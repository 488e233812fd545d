//! Classifier output structures

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::EmotionLabel;

/// Why the classifier settled on its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassifyReason {
    /// At least one keyword matched and its label won
    KeywordMatch,
    /// No keyword matched; the sentiment pass alone produced the winner
    SentimentOnly,
    /// Nothing scored above zero, default label returned
    NoEvidence,
    /// Default label was replaced by laughing because input arrived fast
    FastTypingOverride,
}

impl ClassifyReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::KeywordMatch => "KEYWORD_MATCH",
            Self::SentimentOnly => "SENTIMENT_ONLY",
            Self::NoEvidence => "NO_EVIDENCE",
            Self::FastTypingOverride => "FAST_TYPING_OVERRIDE",
        }
    }
}

impl std::fmt::Display for ClassifyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Accumulated score per label, indexed in priority order
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelScores([f64; EmotionLabel::COUNT]);

impl LabelScores {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: EmotionLabel, amount: f64) {
        self.0[label.index()] += amount;
    }

    pub fn get(&self, label: EmotionLabel) -> f64 {
        self.0[label.index()]
    }

    /// Label with the strictly greatest positive score
    ///
    /// Walks labels in priority order, so an equal score never displaces an
    /// earlier label. Returns `None` when nothing is above zero.
    pub fn best(&self) -> Option<(EmotionLabel, f64)> {
        let mut best: Option<(EmotionLabel, f64)> = None;
        for label in EmotionLabel::ALL {
            let score = self.get(label);
            let floor = best.map(|(_, s)| s).unwrap_or(0.0);
            if score > floor {
                best = Some((label, score));
            }
        }
        best
    }

    /// Labels with non-zero scores, in priority order
    pub fn nonzero(&self) -> Vec<(EmotionLabel, f64)> {
        EmotionLabel::ALL
            .iter()
            .map(|&l| (l, self.get(l)))
            .filter(|(_, s)| *s != 0.0)
            .collect()
    }
}

/// Full result of one classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Chosen label
    pub label: EmotionLabel,
    /// Why it was chosen
    pub reason: ClassifyReason,
    /// Scores after keyword and sentiment passes
    pub scores: LabelScores,
    /// Normalized tokens that hit the keyword index, in text order
    pub matched_keywords: Vec<String>,
    /// Number of non-empty tokens in the input
    pub token_count: usize,
    /// Elapsed time fed to the typing-speed heuristic
    pub ms_since_last_input: u64,
    pub timestamp: DateTime<Utc>,
}

impl Classification {
    /// Format for terminal display
    pub fn to_terminal_string(&self) -> String {
        let scores: Vec<String> = self
            .scores
            .nonzero()
            .iter()
            .map(|(l, s)| format!("{}={:.3}", l.name(), s))
            .collect();
        format!(
            "{} {} | {} | tokens={} | {}",
            self.label.emoji(),
            self.label,
            self.reason.code(),
            self.token_count,
            if scores.is_empty() { "-".to_string() } else { scores.join(" ") }
        )
    }
}
