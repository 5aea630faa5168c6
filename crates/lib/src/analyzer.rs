//! # Heuristic Analyzer
//!
//! Three independent, pure computations over extracted text: hashtags, an
//! approximate readability score and call-to-action detection. Recomputing from
//! identical text always yields identical metadata.

use crate::constants::MAX_HASHTAGS;
use crate::types::AnalysisMetadata;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Word characters are ASCII-only, matching the web client's own tokenizer.
static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[A-Za-z0-9_]+").expect("valid hashtag regex"));
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid word regex"));
static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));

/// Literal phrases that count as a call to action, matched case-insensitively.
pub const CTA_PHRASES: &[&str] = &[
    "click here",
    "learn more",
    "join us",
    "buy now",
    "sign up",
    "signup",
    "subscribe",
];

/// Computes all heuristic metadata for `text`.
pub fn analyze(text: &str) -> AnalysisMetadata {
    AnalysisMetadata {
        hashtags: extract_hashtags(text),
        readability_score: estimate_readability(text),
        has_call_to_action: detect_call_to_action(text),
    }
}

/// Returns unique hashtags in first-seen order, capped at ten.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    HASHTAG
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|tag| seen.insert(*tag))
        .take(MAX_HASHTAGS)
        .map(String::from)
        .collect()
}

/// A Flesch-style reading-ease approximation.
///
/// This is a heuristic, not a certified readability formula: syllables are
/// approximated as `round(words * 1.4)`, so the syllable term is nearly constant
/// and the score mostly tracks average sentence length. Degenerate input can
/// produce negative or very large values; that is expected.
///
/// Empty text counts as one sentence of one word and scores `121`.
pub fn estimate_readability(text: &str) -> i64 {
    let sentences = SENTENCE_TERMINATORS
        .split(text)
        .filter(|segment| !segment.is_empty())
        .count()
        .max(1) as f64;
    let words = WORD.find_iter(text).count().max(1) as f64;
    let syllables = (words * 1.4).round().max(1.0);

    let score = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words);
    score.round() as i64
}

/// True if any phrase from [`CTA_PHRASES`] occurs anywhere in `text`.
pub fn detect_call_to_action(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CTA_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}
