//! Filler-word detection against a per-user allow-list.

use cadence_types::UserPreference;
use std::collections::HashSet;

/// The fixed filler vocabulary, case-folded.
///
/// Multi-word entries are matched as contiguous token sequences over the
/// tokenized input, so "you know" is detected when its tokens appear
/// adjacent and in order.
pub const FILLER_VOCABULARY: &[&str] = &[
    "um",
    "uh",
    "like",
    "you know",
    "basically",
    "actually",
    "sort of",
    "kind of",
    "i mean",
    "you see",
    "aah",
    "hmm",
];

/// Feedback returned when nothing is flagged.
pub const NO_FILLERS_DETECTED: &str = "No filler words detected.";

/// Splits text into case-folded word tokens (alphanumeric runs).
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the vocabulary entries present in `text` that the user has not
/// allow-listed.
///
/// Single-word entries match token membership; multi-word entries match a
/// window of adjacent tokens. The returned set is unordered.
pub fn detect_set(text: &str, pref: &UserPreference) -> HashSet<&'static str> {
    let tokens = tokenize(text);
    let mut detected = HashSet::new();

    for entry in FILLER_VOCABULARY {
        if pref.allowed_fillers.contains(*entry) {
            continue;
        }

        let phrase: Vec<&str> = entry.split_whitespace().collect();
        let present = if phrase.len() == 1 {
            tokens.iter().any(|token| token == phrase[0])
        } else {
            tokens
                .windows(phrase.len())
                .any(|window| window.iter().map(String::as_str).eq(phrase.iter().copied()))
        };

        if present {
            detected.insert(*entry);
        }
    }

    detected
}

/// Formats filler feedback for a user.
///
/// A non-empty detection set renders as
/// `"Avoid using filler words: w1, w2."`; the word order follows the
/// unordered detection set, so consumers must treat the list as a set.
/// An empty set renders as [`NO_FILLERS_DETECTED`].
pub fn detect(text: &str, pref: &UserPreference) -> String {
    let detected = detect_set(text, pref);
    if detected.is_empty() {
        NO_FILLERS_DETECTED.to_string()
    } else {
        let words: Vec<&str> = detected.into_iter().collect();
        format!("Avoid using filler words: {}.", words.join(", "))
    }
}
