//! Keyword-based context classification.

use cadence_types::ContextLabel;

/// Ordered classification rules.
///
/// The first rule whose keyword set matches wins, which keeps the
/// tie-break order (Formal over Persuasive over Informal) explicit and
/// testable. Sets are never combined.
const CONTEXT_RULES: &[(ContextLabel, &[&str])] = &[
    (
        ContextLabel::Formal,
        &["meeting", "project", "strategy", "client"],
    ),
    (
        ContextLabel::Persuasive,
        &["buy", "convince", "persuade", "sell"],
    ),
    (
        ContextLabel::Informal,
        &["hangout", "chill", "cool", "friends"],
    ),
];

/// Classifies text into a conversational context.
///
/// Matching is substring containment over the lower-cased input, not
/// whole-word matching: a keyword embedded inside a longer word still
/// matches. Texts matching no rule classify as [`ContextLabel::General`].
pub fn classify(text: &str) -> ContextLabel {
    let lowered = text.to_lowercase();
    for (label, keywords) in CONTEXT_RULES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *label;
        }
    }
    ContextLabel::General
}
