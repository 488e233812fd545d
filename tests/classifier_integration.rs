//! Integration tests for the classifier
//!
//! Tests the full path: text → tokenize → keyword/sentiment passes → label

use emotion_avatar::config::ClassifierConfig;
use emotion_avatar::core::{stem, Classifier};
use emotion_avatar::types::{ClassifyReason, EmotionLabel, EMOTION_PROFILES};
use emotion_avatar::FAST_TYPING_MS;

const SLOW: u64 = 1000;

/// Every profile, fed only its own keywords, wins
#[test]
fn test_single_label_text_returns_that_label() {
    let classifier = Classifier::new();
    for profile in EMOTION_PROFILES.iter() {
        // "love" belongs to two profiles; the index gives it to loving
        let words: Vec<&str> = profile
            .keywords
            .iter()
            .copied()
            .filter(|k| !(profile.label == EmotionLabel::Happy && *k == "love"))
            .collect();
        let text = words.join(" ");
        assert_eq!(
            classifier.classify(&text, SLOW),
            profile.label,
            "text {:?} should classify as {}",
            text,
            profile.label
        );
    }
}

/// Each keyword on its own maps to its label, with or without the optional passes
#[test]
fn test_each_keyword_alone_under_all_configs() {
    let configs = [
        ClassifierConfig::default(),
        ClassifierConfig { idf_scaling: false, ..ClassifierConfig::default() },
        ClassifierConfig { sentiment_bonus: false, ..ClassifierConfig::default() },
        ClassifierConfig { idf_scaling: false, sentiment_bonus: false, ..ClassifierConfig::default() },
    ];
    for config in configs {
        let classifier = Classifier::with_config(config.clone());
        for profile in EMOTION_PROFILES.iter() {
            for keyword in profile.keywords {
                let expected = classifier.index().get(&stem(keyword)).unwrap().label;
                assert_eq!(
                    classifier.classify(keyword, SLOW),
                    expected,
                    "keyword {:?} under {:?}",
                    keyword,
                    config
                );
            }
        }
    }
}

#[test]
fn test_unrecognized_text_returns_default() {
    let classifier = Classifier::new();
    for text in ["the weather report for tuesday", "1234 5678", "¿qué?", "   "] {
        let result = classifier.analyze(text, SLOW);
        assert_eq!(result.label, EmotionLabel::Happy, "text {:?}", text);
        assert_eq!(result.reason, ClassifyReason::NoEvidence);
    }
}

#[test]
fn test_empty_text_is_default_at_any_speed() {
    let classifier = Classifier::new();
    for ms in [0, 1, 50, FAST_TYPING_MS - 1, FAST_TYPING_MS, 10_000] {
        assert_eq!(classifier.classify("", ms), EmotionLabel::Happy, "ms={}", ms);
    }
}

#[test]
fn test_documented_examples() {
    let classifier = Classifier::new();
    assert_eq!(classifier.classify("I am so happy", 500), EmotionLabel::Happy);
    assert_eq!(classifier.classify("lol", 50), EmotionLabel::Laughing);
}

#[test]
fn test_tie_resolves_to_earlier_profile() {
    let classifier = Classifier::with_config(ClassifierConfig {
        idf_scaling: false,
        sentiment_bonus: false,
        ..ClassifierConfig::default()
    });
    // caring (1.0) vs curious (1.0): curious is defined first
    assert_eq!(classifier.classify("hug maybe", SLOW), EmotionLabel::Curious);
    // sad (1.0) vs caring (1.0): sad is defined first
    assert_eq!(classifier.classify("support miserable", SLOW), EmotionLabel::Sad);
}

#[test]
fn test_stronger_weight_beats_count() {
    let classifier = Classifier::new();
    // one loving keyword (1.5) against one tired keyword (0.8)
    assert_eq!(classifier.classify("sleepy but I adore it", SLOW), EmotionLabel::Loving);
    // three tired keywords outweigh it
    assert_eq!(classifier.classify("sleepy exhausted bored, adore", SLOW), EmotionLabel::Tired);
}

#[test]
fn test_idempotent() {
    let classifier = Classifier::new();
    let text = "Maybe I'm just nervous, haha";
    let first = classifier.analyze(text, 80);
    for _ in 0..5 {
        let again = classifier.analyze(text, 80);
        assert_eq!(again.label, first.label);
        assert_eq!(again.reason, first.reason);
        assert_eq!(again.scores, first.scores);
        assert_eq!(again.matched_keywords, first.matched_keywords);
    }
}

#[test]
fn test_classification_serializes() {
    let classifier = Classifier::new();
    let result = classifier.analyze("so calm and zen", SLOW);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["label"], "calm");
    assert_eq!(json["reason"], "KEYWORD_MATCH");
    assert_eq!(json["matched_keywords"], serde_json::json!(["calm", "zen"]));
}
